//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::{Vec2, Vec3};

use super::collision::collides;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump (space), only honoured while running and grounded
    pub jump: bool,
    /// Restart after the cube exploded
    pub reset: bool,
    /// Camera offset change this tick (x: left/right, y: up/down)
    pub camera_pan: Vec2,
    /// Idle/demo mode - autopilot jumps over obstacles
    pub idle_mode: bool,
}

/// Current running speed: grows with score, never decreases
#[inline]
pub fn speed_for_score(score: u64) -> f32 {
    BASE_SPEED + score as f32 / SCORE_SPEED_DIVISOR
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Reset is accepted once the cube has exploded
    if input.reset && !state.phase().is_running() {
        *state = state.reset();
        return;
    }

    state.time_ticks += 1;
    state.time_secs += dt;

    // Camera stays adjustable in every phase
    state.camera_offset += Vec3::new(input.camera_pan.x, input.camera_pan.y, 0.0);

    match state.phase() {
        GamePhase::Running => run(state, input),

        GamePhase::Exploding { started_at } => {
            if state.time_secs - started_at < EXPLOSION_DURATION {
                for fragment in &mut state.fragments {
                    fragment.step(dt, GRAVITY);
                }
            } else {
                state.finish_explosion();
            }
        }

        GamePhase::GameOver => {}
    }
}

fn run(state: &mut GameState, input: &TickInput) {
    let wants_jump = input.jump || (input.idle_mode && idle_should_jump(state));
    if wants_jump && state.player.jump() {
        state.push_event(GameEvent::Jumped);
    }

    // Run and fall
    let speed = speed_for_score(state.score);
    state.player.step(speed);

    // Score obstacles the cube got past
    let passed = state.field.award_passed(state.player.position.x);
    if passed > 0 {
        state.score += u64::from(passed) * POINTS_PER_OBSTACLE;
        state.push_event(GameEvent::ObstaclesPassed { count: passed });
    }

    // Keep a window of obstacles ahead
    state.extend_course();

    let player_pos = state.player.position;
    if state
        .field
        .obstacles()
        .iter()
        .any(|obstacle| collides(player_pos, obstacle.position))
    {
        state.begin_explosion();
    }
}

/// Autopilot: take off half a jump's length before the next obstacle, so the
/// peak of the arc is right above it
fn idle_should_jump(state: &GameState) -> bool {
    if !state.player.grounded {
        return false;
    }
    let half_jump = JUMP_SPEED / GRAVITY * speed_for_score(state.score);
    let x = state.player.position.x;
    state
        .field
        .obstacles()
        .iter()
        .map(|o| x - o.position.x)
        .any(|ahead| ahead > 0.0 && ahead < half_jump)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Obstacle, ObstacleField};
    use crate::snap_to_quarter_turn;

    fn jump() -> TickInput {
        TickInput {
            jump: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_at_rest_keeps_height_and_rotation() {
        let mut state = GameState::new(12345);
        let rotation = state.player.rotation;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.player.position.y, 0.0);
        assert_eq!(state.player.rotation, rotation);
        assert!((state.player.position.x + BASE_SPEED).abs() < 1e-6);
    }

    #[test]
    fn test_jump_lands_and_snaps() {
        let mut state = GameState::new(12345);
        tick(&mut state, &jump(), SIM_DT);
        assert!(!state.player.grounded);
        assert!(state.player.position.y > 0.0);

        let mut ticks = 1;
        loop {
            let before = state.player.rotation;
            tick(&mut state, &TickInput::default(), SIM_DT);
            ticks += 1;
            if state.player.grounded {
                assert_eq!(state.player.position.y, 0.0);
                assert_eq!(state.player.velocity_y, 0.0);
                assert_eq!(state.player.rotation, snap_to_quarter_turn(before));
                break;
            }
            assert!(ticks < 200, "never landed");
        }
        // Roughly JUMP_SPEED / GRAVITY * 2 ticks of airtime
        assert!((55..=65).contains(&ticks), "airtime {ticks}");
        assert_eq!(state.phase(), GamePhase::Running);
    }

    #[test]
    fn test_jump_ignored_midair() {
        let mut state = GameState::new(1);
        tick(&mut state, &jump(), SIM_DT);
        let vy = state.player.velocity_y;
        tick(&mut state, &jump(), SIM_DT);
        assert!(state.player.velocity_y < vy);
    }

    #[test]
    fn test_score_awarded_once_when_passed() {
        let mut state = GameState::new(2);
        state.field = ObstacleField::empty(INITIAL_FRONTIER);
        state.field.push(Obstacle::new(10.0));
        // Airborne and high, so the pass can't collide
        state.player.position = Vec3::new(10.1, 5.0, 0.0);
        state.player.grounded = false;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.player.position.x > 10.0);
        assert_eq!(state.score, 0);
        assert!(!state.field.obstacles()[0].is_scored());

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.player.position.x < 10.0);
        assert_eq!(state.score, POINTS_PER_OBSTACLE);
        assert!(state.field.obstacles()[0].is_scored());

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.score, POINTS_PER_OBSTACLE);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::ObstaclesPassed { count: 1 })
        );
    }

    #[test]
    fn test_speed_grows_with_score() {
        assert_eq!(speed_for_score(0), BASE_SPEED);
        assert!(speed_for_score(500) > speed_for_score(490));
        assert!((speed_for_score(5000) - (BASE_SPEED + 1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_course_extends_at_frontier() {
        let mut state = GameState::new(8);
        let frontier = state.field.frontier();
        state.player.position.x = frontier + FRONTIER_MARGIN;
        state.player.position.y = 5.0;
        state.player.grounded = false;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.field.frontier(), frontier - FRONTIER_EXTENSION);

        // Obstacles far behind the new position were dropped
        let x = state.player.position.x;
        assert!(
            state
                .field
                .obstacles()
                .iter()
                .all(|o| o.position.x <= x + OBSTACLE_CULL_DISTANCE)
        );
    }

    #[test]
    fn test_collision_explodes_then_game_over() {
        let mut state = GameState::new(4);
        state.field = ObstacleField::empty(INITIAL_FRONTIER);
        state.field.push(Obstacle::new(-0.3));

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(matches!(state.phase(), GamePhase::Exploding { .. }));
        assert_eq!(state.fragments.len(), FRAGMENT_COUNT);
        assert!(state.drain_events().contains(&GameEvent::Exploded));

        // Obstacles frozen, fragments moving
        let frozen_x = state.player.position.x;
        let start = state.fragments[0].position;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.player.position.x, frozen_x);
        assert_ne!(state.fragments[0].position, start);

        // Jump does nothing while exploding
        tick(&mut state, &jump(), SIM_DT);
        assert!(state.player.grounded);

        let ticks = (EXPLOSION_DURATION / SIM_DT) as usize + 2;
        for _ in 0..ticks {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        assert_eq!(state.phase(), GamePhase::GameOver);

        // Game over freezes everything but the camera
        let fragment = state.fragments[0].position;
        let pan = TickInput {
            camera_pan: Vec2::new(0.2, -0.2),
            ..Default::default()
        };
        tick(&mut state, &pan, SIM_DT);
        assert_eq!(state.fragments[0].position, fragment);
        assert!((state.camera_offset - (CAMERA_OFFSET + Vec3::new(0.2, -0.2, 0.0))).length() < 1e-6);
    }

    #[test]
    fn test_reset_ignored_while_running() {
        let mut state = GameState::new(6);
        for _ in 0..3 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        let input = TickInput {
            reset: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.time_ticks, 4);
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut state = GameState::new(10);
        state.field = ObstacleField::empty(INITIAL_FRONTIER);
        state.field.push(Obstacle::new(-0.3));
        state.score = 70;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(!state.phase().is_running());

        let input = TickInput {
            reset: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase(), GamePhase::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score(), 70);
        assert!(state.fragments.is_empty());
        assert!(!state.field.obstacles().is_empty());
    }

    #[test]
    fn test_idle_mode_jumps_obstacles() {
        let mut state = GameState::new(77);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        // Long enough to pass several obstacles
        for _ in 0..2000 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_eq!(state.phase(), GamePhase::Running);
        assert!(state.score >= 2 * POINTS_PER_OBSTACLE);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..500 {
            tick(&mut state1, &input, SIM_DT);
            tick(&mut state2, &input, SIM_DT);
        }
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.player.position, state2.player.position);
        assert_eq!(state1.field.obstacles().len(), state2.field.obstacles().len());
    }
}
