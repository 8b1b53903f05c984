//! Vertex types for recorded draw lists

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use super::backend::Color;

/// World-space vertex with color, laid out for direct GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct DrawVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl DrawVertex {
    pub fn new(position: Vec3, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const SKY: [f32; 4] = [0.5, 0.8, 1.0, 1.0];
    pub const FLOOR: [f32; 4] = [0.0, 0.0, 0.0, 0.3];
    pub const PLAYER: [f32; 4] = [0.0, 0.5, 1.0, 1.0];
    pub const PLAYER_SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.5];
    pub const OBSTACLE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const OBSTACLE_SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.4];
    pub const FRAGMENT: [f32; 4] = [0.0, 0.5, 1.0, 1.0];
    pub const FRAGMENT_SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.3];
    pub const DECORATION: [f32; 4] = [1.0, 0.85, 0.2, 1.0];
}
