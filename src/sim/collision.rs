//! Player/obstacle collision
//!
//! Coarse axis-aligned proximity in x and y, independent of mesh extents.
//! z is ignored: everything runs along the z = 0 line.

use glam::Vec3;

use crate::consts::{COLLISION_THRESHOLD_X, COLLISION_THRESHOLD_Y};

/// True when both |dx| and |dy| are under their thresholds
#[inline]
pub fn collides(player: Vec3, obstacle: Vec3) -> bool {
    (player.x - obstacle.x).abs() < COLLISION_THRESHOLD_X
        && (player.y - obstacle.y).abs() < COLLISION_THRESHOLD_Y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collides_within_both_thresholds() {
        assert!(collides(Vec3::new(-10.0, 0.0, 0.0), Vec3::new(-10.5, 0.0, 0.0)));
        assert!(collides(Vec3::new(-10.0, 0.55, 0.0), Vec3::new(-10.2, 0.0, 0.0)));
    }

    #[test]
    fn test_clear_when_either_axis_far() {
        // Jumping over
        assert!(!collides(Vec3::new(-10.0, 0.7, 0.0), Vec3::new(-10.0, 0.0, 0.0)));
        // Not there yet
        assert!(!collides(Vec3::new(-10.0, 0.0, 0.0), Vec3::new(-10.7, 0.0, 0.0)));
    }

    #[test]
    fn test_z_ignored() {
        assert!(collides(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO));
    }
}
