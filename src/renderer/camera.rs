//! Chase camera

use glam::{Mat4, Vec3};

use crate::consts::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FAR_PLANE, FOV_DEGREES, NEAR_PLANE};

/// Chase camera, rebuilt every frame from the player position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Sit at `target + offset`, looking at `target`
    pub fn follow(target: Vec3, offset: Vec3) -> Self {
        Camera {
            eye: target + offset,
            target,
            up: Vec3::Y,
        }
    }

    /// World -> camera space
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Camera -> clip space for the default window
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            FOV_DEGREES.to_radians(),
            DISPLAY_WIDTH as f32 / DISPLAY_HEIGHT as f32,
            NEAR_PLANE,
            FAR_PLANE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CAMERA_OFFSET;

    #[test]
    fn test_follow_offsets_eye() {
        let target = Vec3::new(-42.0, 0.5, 0.0);
        let camera = Camera::follow(target, CAMERA_OFFSET);
        assert_eq!(camera.eye, target + CAMERA_OFFSET);
        assert_eq!(camera.target, target);
    }

    #[test]
    fn test_view_matrix_puts_target_ahead() {
        let camera = Camera::follow(Vec3::ZERO, CAMERA_OFFSET);
        let in_view = camera.view_matrix().transform_point3(Vec3::ZERO);
        // Right-handed view space looks down -z
        assert!(in_view.z < 0.0);
        assert!((in_view.z + CAMERA_OFFSET.length()).abs() < 1e-3);
        assert!(in_view.x.abs() < 1e-4 && in_view.y.abs() < 1e-4);
    }

    #[test]
    fn test_projection_maps_target_inside_clip() {
        let camera = Camera::follow(Vec3::ZERO, CAMERA_OFFSET);
        let clip = camera.projection_matrix() * camera.view_matrix() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
        assert!(ndc.z > -1.0 && ndc.z < 1.0);
    }
}
