//! Frame driver
//!
//! Owns the [`GameState`] and turns backend clock time into fixed simulation
//! ticks, then renders. One call to [`Game::frame`] per displayed frame.

use glam::Vec2;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::renderer::{Backend, FrameStats, RenderOptions, render_frame};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Longest frame time fed to the accumulator; a stall doesn't fast-forward the run
const MAX_FRAME_TIME: f32 = 0.1;

/// Keyboard state for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Key-down this frame
    pub jump: bool,
    pub reset: bool,
    pub quit: bool,
    /// Held keys
    pub pan_left: bool,
    pub pan_right: bool,
    pub pan_up: bool,
    pub pan_down: bool,
}

impl FrameInput {
    /// Held arrow keys as a unit-step direction
    fn pan_direction(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| f32::from(u8::from(pos)) - f32::from(u8::from(neg));
        Vec2::new(
            axis(self.pan_left, self.pan_right),
            axis(self.pan_down, self.pan_up),
        )
    }
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    settings: Settings,
    accumulator: f32,
    input: TickInput,
    /// Wall-clock seconds since start, for decoration animation
    decor_time: f32,
    last_phase: GamePhase,
    /// Events drained during the last frame
    events: Vec<GameEvent>,
    last_stats: FrameStats,
}

impl Game {
    /// Start a run, seeded from settings or at random
    pub fn new(settings: Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        let input = TickInput {
            idle_mode: settings.idle_mode,
            ..Default::default()
        };
        Self {
            state: GameState::new(seed),
            settings,
            accumulator: 0.0,
            input,
            decor_time: 0.0,
            last_phase: GamePhase::Running,
            events: Vec::new(),
            last_stats: FrameStats::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Events produced by the last frame, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn last_stats(&self) -> FrameStats {
        self.last_stats
    }

    /// Toggle the autopilot
    pub fn set_idle_mode(&mut self, enabled: bool) {
        self.input.idle_mode = enabled;
        log::info!("Idle mode: {}", enabled);
    }

    /// Advance and draw one frame. Returns false once quit was requested.
    pub fn frame<B: Backend + ?Sized>(&mut self, backend: &mut B, input: &FrameInput) -> bool {
        if input.quit {
            log::info!("Quit requested, score {}", self.state.score);
            return false;
        }

        let dt = backend.tick_clock(self.settings.target_fps);
        self.update(dt, input);

        let options = RenderOptions {
            light: self.settings.light(),
            show_hud: self.settings.show_hud,
            decor_time: self.decor_time,
        };
        self.last_stats = render_frame(backend, &self.state, &options);
        true
    }

    /// Run simulation ticks for `dt` seconds of frame time
    fn update(&mut self, dt: f32, input: &FrameInput) {
        let dt = dt.clamp(0.0, MAX_FRAME_TIME);
        self.decor_time += dt;
        self.accumulator += dt;

        // One-shots are latched until a tick consumes them
        self.input.jump |= input.jump;
        self.input.reset |= input.reset;
        self.input.camera_pan = input.pan_direction() * self.settings.camera_pan_step;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            self.input.jump = false;
            self.input.reset = false;
        }

        self.events = self.state.drain_events();
        for event in &self.events {
            match event {
                GameEvent::Jumped => log::trace!("Jump"),
                GameEvent::ObstaclesPassed { count } => {
                    log::debug!("Passed {} obstacle(s), score {}", count, self.state.score)
                }
                GameEvent::Exploded | GameEvent::GameOver | GameEvent::Reset => {
                    log::debug!("{:?}", event)
                }
            }
        }

        let phase = self.state.phase();
        if phase != self.last_phase {
            self.log_snapshot();
            self.last_phase = phase;
        }
    }

    fn log_snapshot(&self) {
        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        match serde_json::to_string(&self.state) {
            Ok(json) => log::debug!("Phase {:?}: {}", self.state.phase(), json),
            Err(e) => log::warn!("Could not serialize state: {}", e),
        }
    }
}
