//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]. Phase changes go
//! through the transition methods at the bottom of this file; the phase field
//! itself is private.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::explosion::explode;
use crate::consts::*;
use crate::geometry::{MeshKind, Transformable};
use crate::snap_to_quarter_turn;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Cube is running and jumping
    Running,
    /// Cube has burst into fragments (started at simulated time, seconds)
    Exploding { started_at: f32 },
    /// Run ended, waiting for reset
    GameOver,
}

impl GamePhase {
    pub fn is_running(&self) -> bool {
        matches!(self, GamePhase::Running)
    }
}

/// Notifications for audio/HUD collaborators, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    /// One or more obstacles were cleared this tick
    ObstaclesPassed { count: u32 },
    Exploded,
    GameOver,
    Reset,
}

/// The player's cube
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    /// Spin about Z (radians)
    pub rotation: f32,
    pub velocity_y: f32,
    pub grounded: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: 0.0,
            velocity_y: 0.0,
            grounded: true,
        }
    }
}

impl Player {
    /// Start a jump if standing on the ground
    pub fn jump(&mut self) -> bool {
        if !self.grounded {
            return false;
        }
        self.velocity_y = JUMP_SPEED;
        self.grounded = false;
        true
    }

    /// Advance one tick: run left at `speed`, fall, land, tumble
    pub fn step(&mut self, speed: f32) {
        self.position.x -= speed;

        if !self.grounded {
            self.velocity_y -= GRAVITY;
        }
        self.position.y += self.velocity_y;

        if self.position.y <= 0.0 {
            self.position.y = 0.0;
            self.velocity_y = 0.0;
            if !self.grounded {
                self.grounded = true;
                // Settle flat on a face
                self.rotation = snap_to_quarter_turn(self.rotation);
            }
        }

        if !self.grounded {
            self.rotation += SPIN_PER_TICK;
        }
    }
}

impl Transformable for Player {
    fn mesh_kind(&self) -> MeshKind {
        MeshKind::Cube
    }
    fn position(&self) -> Vec3 {
        self.position
    }
    fn rotation(&self) -> f32 {
        self.rotation
    }
}

/// A pyramid on the course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub position: Vec3,
    scored: bool,
}

impl Obstacle {
    pub fn new(x: f32) -> Self {
        Self {
            position: Vec3::new(x, 0.0, 0.0),
            scored: false,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.scored
    }

    /// Mark as passed. Returns true only the first time.
    pub fn mark_scored(&mut self) -> bool {
        !std::mem::replace(&mut self.scored, true)
    }
}

impl Transformable for Obstacle {
    fn mesh_kind(&self) -> MeshKind {
        MeshKind::Pyramid
    }
    fn position(&self) -> Vec3 {
        self.position
    }
    fn rotation(&self) -> f32 {
        0.0
    }
}

/// A mini cube flying out of the explosion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fragment {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: f32,
    /// Radians per second
    pub angular_velocity: f32,
}

impl Fragment {
    /// Integrate over `dt` seconds
    pub fn step(&mut self, dt: f32, gravity: f32) {
        self.position += self.velocity * dt;
        self.velocity.y -= gravity * dt;
        self.rotation += self.angular_velocity * dt;
    }
}

impl Transformable for Fragment {
    fn mesh_kind(&self) -> MeshKind {
        MeshKind::MiniCube
    }
    fn position(&self) -> Vec3 {
        self.position
    }
    fn rotation(&self) -> f32 {
        self.rotation
    }
}

/// Procedurally generated obstacles in a moving window around the player.
///
/// The player runs toward -x. `frontier` is the lowest x generated so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
    frontier: f32,
}

impl ObstacleField {
    /// Initial window from `INITIAL_SPAWN_START` to `INITIAL_FRONTIER`
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut field = Self {
            obstacles: Vec::new(),
            frontier: INITIAL_FRONTIER,
        };
        field.spawn_range(INITIAL_SPAWN_START, INITIAL_FRONTIER, rng);
        field
    }

    /// Empty field with a given frontier
    pub fn empty(frontier: f32) -> Self {
        Self {
            obstacles: Vec::new(),
            frontier,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn frontier(&self) -> f32 {
        self.frontier
    }

    /// Place obstacles from `start` down to (exclusive) `end`, random integer gaps
    pub fn spawn_range<R: Rng + ?Sized>(&mut self, start: f32, end: f32, rng: &mut R) -> usize {
        let before = self.obstacles.len();
        let mut x = start;
        while x > end {
            self.obstacles.push(Obstacle::new(x));
            x -= rng.random_range(OBSTACLE_GAP_MIN..=OBSTACLE_GAP_MAX) as f32;
        }
        self.obstacles.len() - before
    }

    /// Generate the next batch once the player is within `FRONTIER_MARGIN` of
    /// the frontier. Returns true if a batch was generated.
    pub fn ensure_lookahead<R: Rng + ?Sized>(&mut self, player_x: f32, rng: &mut R) -> bool {
        if player_x > self.frontier + FRONTIER_MARGIN {
            return false;
        }
        let new_frontier = self.frontier - FRONTIER_EXTENSION;
        let spawned = self.spawn_range(self.frontier, new_frontier, rng);
        log::debug!(
            "Course extended {} -> {} ({} obstacles)",
            self.frontier,
            new_frontier,
            spawned
        );
        self.frontier = new_frontier;
        true
    }

    /// Drop obstacles that fell too far behind. Returns how many were removed.
    pub fn cull_behind(&mut self, player_x: f32) -> usize {
        let before = self.obstacles.len();
        self.obstacles
            .retain(|o| o.position.x <= player_x + OBSTACLE_CULL_DISTANCE);
        before - self.obstacles.len()
    }

    /// Mark every obstacle the player has just passed. Each one counts once.
    pub fn award_passed(&mut self, player_x: f32) -> u32 {
        let mut count = 0;
        for obstacle in &mut self.obstacles {
            if player_x < obstacle.position.x && obstacle.mark_scored() {
                count += 1;
            }
        }
        count
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Score of the current run
    pub score: u64,
    /// Best score of any finished run this session
    high_score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated seconds since this run started
    pub time_secs: f32,
    phase: GamePhase,
    pub player: Player,
    pub field: ObstacleField,
    pub fragments: Vec<Fragment>,
    /// Camera eye relative to the player, adjustable at any time
    pub camera_offset: Vec3,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self::fresh(seed, Pcg32::seed_from_u64(seed), 0)
    }

    fn fresh(seed: u64, mut rng: Pcg32, high_score: u64) -> Self {
        let field = ObstacleField::new(&mut rng);
        Self {
            seed,
            rng,
            score: 0,
            high_score,
            time_ticks: 0,
            time_secs: 0.0,
            phase: GamePhase::Running,
            player: Player::default(),
            field,
            fragments: Vec::new(),
            camera_offset: CAMERA_OFFSET,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Best finished run, 0 if none
    pub fn high_score(&self) -> u64 {
        self.high_score
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take queued events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Generate ahead of the player and drop what is behind.
    /// Returns true if a new batch was generated.
    pub fn extend_course(&mut self) -> bool {
        let x = self.player.position.x;
        let extended = self.field.ensure_lookahead(x, &mut self.rng);
        self.field.cull_behind(x);
        extended
    }

    // --- Phase transitions ---

    /// Running -> Exploding: replace the player with fragments
    pub fn begin_explosion(&mut self) {
        if !self.phase.is_running() {
            return;
        }
        self.fragments = explode(&self.player, &mut self.rng);
        self.phase = GamePhase::Exploding {
            started_at: self.time_secs,
        };
        log::info!(
            "Collision at x={:.2}, score {} ({} fragments)",
            self.player.position.x,
            self.score,
            self.fragments.len()
        );
        self.push_event(GameEvent::Exploded);
    }

    /// Exploding -> GameOver
    pub fn finish_explosion(&mut self) {
        if let GamePhase::Exploding { .. } = self.phase {
            self.phase = GamePhase::GameOver;
            log::info!("Game over, score {}", self.score);
            self.push_event(GameEvent::GameOver);
        }
    }

    /// Fresh run. Keeps the high score and continues the RNG stream.
    pub fn reset(&self) -> GameState {
        let high_score = if self.score > self.high_score {
            log::info!("New record {} (was {})", self.score, self.high_score);
            self.score
        } else {
            self.high_score
        };
        let mut next = Self::fresh(self.seed, self.rng.clone(), high_score);
        next.push_event(GameEvent::Reset);
        log::info!("Game reset, high score {}", next.high_score());
        next
    }
}
