//! Headless backend that records draw calls
//!
//! Used by the native binary (no window) and by tests to inspect what a frame
//! would paint. Filled polygons are also fanned into triangles in a
//! [`DrawList`] ready for GPU upload.

use glam::Vec3;

use super::backend::{Backend, Color};
use super::vertex::DrawVertex;

/// One recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    LookAt { eye: Vec3, target: Vec3, up: Vec3 },
    Polygon { vertices: Vec<Vec3>, color: Color },
    Text { x: f32, y: f32, text: String },
    Present,
}

/// Flat triangle list in paint order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub vertices: Vec<DrawVertex>,
}

impl DrawList {
    /// Fan-triangulate a convex polygon
    pub fn push_polygon(&mut self, polygon: &[Vec3], color: Color) {
        if polygon.len() < 3 {
            return;
        }
        for i in 1..polygon.len() - 1 {
            self.vertices.push(DrawVertex::new(polygon[0], color));
            self.vertices.push(DrawVertex::new(polygon[i], color));
            self.vertices.push(DrawVertex::new(polygon[i + 1], color));
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Raw bytes for a vertex buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Records every call. `tick_clock` reports an ideal frame time without sleeping.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    /// Calls since the last `present_frame`
    pub commands: Vec<DrawCommand>,
    /// Triangles of the frame being built
    pub draw_list: DrawList,
    /// Completed frames
    pub frames_presented: u64,
    /// Calls of the last completed frame
    pub last_frame: Vec<DrawCommand>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Polygons of the last completed frame, in paint order
    pub fn last_polygons(&self) -> impl Iterator<Item = (&[Vec3], Color)> {
        self.last_frame.iter().filter_map(|cmd| match cmd {
            DrawCommand::Polygon { vertices, color } => Some((vertices.as_slice(), *color)),
            _ => None,
        })
    }

    /// Text lines of the last completed frame
    pub fn last_texts(&self) -> Vec<&str> {
        self.last_frame
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Backend for RecordingBackend {
    fn clear_frame(&mut self, color: Color) {
        self.draw_list.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn set_camera_look_at(&mut self, eye: Vec3, target: Vec3, up: Vec3) {
        self.commands.push(DrawCommand::LookAt { eye, target, up });
    }

    fn draw_filled_polygon(&mut self, vertices: &[Vec3], color: Color) {
        self.draw_list.push_polygon(vertices, color);
        self.commands.push(DrawCommand::Polygon {
            vertices: vertices.to_vec(),
            color,
        });
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn present_frame(&mut self) {
        self.commands.push(DrawCommand::Present);
        self.last_frame = std::mem::take(&mut self.commands);
        self.frames_presented += 1;
    }

    fn tick_clock(&mut self, target_fps: u32) -> f32 {
        1.0 / target_fps.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::vertex::colors;

    #[test]
    fn test_quad_fans_into_two_triangles() {
        let mut list = DrawList::default();
        let quad = [Vec3::ZERO, Vec3::X, Vec3::X + Vec3::Z, Vec3::Z];
        list.push_polygon(&quad, colors::FLOOR);
        assert_eq!(list.triangle_count(), 2);
        assert_eq!(list.vertices[3].position, [0.0, 0.0, 0.0]);
        assert_eq!(list.as_bytes().len(), 6 * std::mem::size_of::<DrawVertex>());
    }

    #[test]
    fn test_degenerate_polygon_skipped() {
        let mut list = DrawList::default();
        list.push_polygon(&[Vec3::ZERO, Vec3::X], colors::FLOOR);
        assert_eq!(list.triangle_count(), 0);
    }

    #[test]
    fn test_present_moves_commands_to_last_frame() {
        let mut backend = RecordingBackend::new();
        backend.clear_frame(colors::SKY);
        backend.draw_text(10.0, 20.0, "hi");
        backend.present_frame();
        assert!(backend.commands.is_empty());
        assert_eq!(backend.frames_presented, 1);
        assert_eq!(backend.last_texts(), vec!["hi"]);
        assert!((backend.tick_clock(60) - 1.0 / 60.0).abs() < 1e-9);
    }
}
