//! Cube Dash entry point
//!
//! Runs the game headless against the recording backend for a fixed number of
//! frames. A windowed backend plugs in through `renderer::Backend`.

use cube_dash::renderer::RecordingBackend;
use cube_dash::sim::GamePhase;
use cube_dash::{FrameInput, Game, Settings};

fn main() {
    env_logger::init();
    log::info!("Cube Dash (headless) starting...");

    let settings = Settings::load();
    let frames = settings.demo_frames;
    let mut game = Game::new(settings);
    let mut backend = RecordingBackend::new();

    let mut runs = 1;
    for _ in 0..frames {
        // Restart automatically so the demo keeps going
        let input = FrameInput {
            reset: game.state().phase() == GamePhase::GameOver,
            ..Default::default()
        };
        if input.reset {
            runs += 1;
        }
        if !game.frame(&mut backend, &input) {
            break;
        }
    }

    let state = game.state();
    log::info!(
        "Finished {} frames over {} run(s): score {}, record {}, x={:.1}",
        backend.frames_presented,
        runs,
        state.score,
        state.high_score(),
        state.player.position.x
    );
    log::info!(
        "Last frame: {} objects, {} triangles, {} bytes of vertices",
        game.last_stats().objects,
        game.last_stats().triangles,
        backend.draw_list.as_bytes().len()
    );
}
