//! Cube Dash - A cube runner arcade game
//!
//! Core modules:
//! - `geometry`: Mesh prototypes and the rotation/translation transform
//! - `sim`: Deterministic simulation (player physics, obstacles, explosion)
//! - `renderer`: Software painter's-algorithm pipeline and backend seam
//! - `game`: Fixed timestep frame driver
//! - `settings`: User configuration

pub mod error;
pub mod game;
pub mod geometry;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use game::{FrameInput, Game};
pub use settings::Settings;

use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Fixed simulation timestep (60 Hz, the rate the per-tick constants were tuned at)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Default frame rate requested from the backend clock
    pub const TARGET_FPS: u32 = 60;

    /// Display and projection
    pub const DISPLAY_WIDTH: u32 = 800;
    pub const DISPLAY_HEIGHT: u32 = 600;
    pub const FOV_DEGREES: f32 = 45.0;
    pub const NEAR_PLANE: f32 = 0.1;
    pub const FAR_PLANE: f32 = 1000.0;

    /// Player physics (per tick)
    pub const GRAVITY: f32 = 0.01;
    pub const JUMP_SPEED: f32 = 0.3;
    pub const BASE_SPEED: f32 = 0.07;
    /// Score points per unit of extra speed
    pub const SCORE_SPEED_DIVISOR: f32 = 5000.0;
    /// Airborne tumble (radians per tick)
    pub const SPIN_PER_TICK: f32 = 0.1;

    /// Model scales
    pub const CUBE_SCALE: f32 = 1.0;
    pub const PYRAMID_SCALE: f32 = 0.5;
    pub const MINI_SCALE: f32 = 0.5;

    /// Scoring
    pub const POINTS_PER_OBSTACLE: u64 = 10;

    /// Collision proximity thresholds
    pub const COLLISION_THRESHOLD_X: f32 = 0.6;
    pub const COLLISION_THRESHOLD_Y: f32 = 0.6;

    /// Obstacle course generation
    pub const INITIAL_SPAWN_START: f32 = -30.0;
    pub const INITIAL_FRONTIER: f32 = -300.0;
    /// Distance from the frontier at which the next batch is generated
    pub const FRONTIER_MARGIN: f32 = 20.0;
    pub const FRONTIER_EXTENSION: f32 = 100.0;
    pub const OBSTACLE_GAP_MIN: i32 = 5;
    pub const OBSTACLE_GAP_MAX: i32 = 10;
    /// Obstacles this far behind the player are dropped
    pub const OBSTACLE_CULL_DISTANCE: f32 = 20.0;

    /// Explosion
    pub const FRAGMENT_COUNT: usize = 8;
    pub const EXPLOSION_DURATION: f32 = 1.5;
    pub const FRAGMENT_SPEED_MIN: f32 = 0.5;
    pub const FRAGMENT_SPEED_MAX: f32 = 1.5;
    pub const FRAGMENT_JITTER: f32 = 0.2;

    /// Camera
    pub const CAMERA_OFFSET: Vec3 = Vec3::new(-15.0, 5.0, -20.0);
    pub const CAMERA_PAN_STEP: f32 = 0.2;

    /// Lighting (unnormalized, see `crate::light_direction`)
    pub const LIGHT_DIRECTION: Vec3 = Vec3::new(0.5, -1.0, 0.5);

    /// Floor reference quad
    pub const FLOOR_LIMIT: f32 = 200.0;
    pub const FLOOR_HALF_WIDTH: f32 = 2.0;
    pub const FLOOR_LEAD: f32 = 10.0;
}

/// Default light direction, normalized
#[inline]
pub fn light_direction() -> Vec3 {
    consts::LIGHT_DIRECTION.normalize()
}

/// Snap an angle to the nearest quarter turn (round-to-nearest, not truncation)
#[inline]
pub fn snap_to_quarter_turn(angle: f32) -> f32 {
    (angle / FRAC_PI_2).round() * FRAC_PI_2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_rounds_to_nearest() {
        // 0.6 of a quarter rounds up, truncation would give 0
        assert!((snap_to_quarter_turn(0.6 * FRAC_PI_2) - FRAC_PI_2).abs() < 1e-6);
        assert_eq!(snap_to_quarter_turn(0.4 * FRAC_PI_2), 0.0);
        assert!((snap_to_quarter_turn(1.6 * FRAC_PI_2) - 2.0 * FRAC_PI_2).abs() < 1e-6);
        assert!((snap_to_quarter_turn(6.0) - 4.0 * FRAC_PI_2).abs() < 1e-5);
        assert!((snap_to_quarter_turn(-0.9) + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_light_direction_normalized() {
        let light = light_direction();
        assert!((light.length() - 1.0).abs() < 1e-6);
        assert!(light.y < 0.0);
    }
}
