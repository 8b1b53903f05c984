//! Drawing backend seam
//!
//! Window creation, the GPU/GL context and text rasterization live outside this
//! crate. A platform layer implements [`Backend`] and the frame pass feeds it
//! ordered polygons.

use glam::Vec3;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

pub trait Backend {
    /// Clear the color buffer
    fn clear_frame(&mut self, color: Color);

    /// Set the view transform for the world-space polygons that follow
    fn set_camera_look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3);

    /// Fill a convex world-space polygon. No depth test: later calls paint over
    /// earlier ones.
    fn draw_filled_polygon(&mut self, vertices: &[Vec3], color: Color);

    /// Draw a string with its lower-left corner at a window pixel position
    fn draw_text(&mut self, x: f32, y: f32, text: &str);

    /// Swap buffers
    fn present_frame(&mut self);

    /// Block until the next frame slot and return the seconds elapsed since the
    /// previous call
    fn tick_clock(&mut self, target_fps: u32) -> f32;
}
