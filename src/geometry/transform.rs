//! Rotation and world transform
//!
//! `v_world = R * (v_local + pivot) + position`

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

use super::mesh::{Mesh, MeshKind};

/// Rotation axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Right-handed rotation matrix about a single axis
pub fn rotation_matrix(axis: Axis, angle: f32) -> Mat3 {
    match axis {
        Axis::X => Mat3::from_rotation_x(angle),
        Axis::Y => Mat3::from_rotation_y(angle),
        Axis::Z => Mat3::from_rotation_z(angle),
    }
}

/// Rotate a vertex about one axis
#[inline]
pub fn rotate(axis: Axis, angle: f32, vertex: Vec3) -> Vec3 {
    rotation_matrix(axis, angle) * vertex
}

/// Rotate about X first, then Y (rotations don't commute)
#[inline]
pub fn rotate_xy(angle_x: f32, angle_y: f32, vertex: Vec3) -> Vec3 {
    rotate(Axis::Y, angle_y, rotate(Axis::X, angle_x, vertex))
}

/// Place every vertex of `mesh` in world space
pub fn world_vertices(mesh: &Mesh, rotation: Mat3, position: Vec3) -> Vec<Vec3> {
    mesh.vertices
        .iter()
        .map(|&v| rotation * (v + mesh.pivot) + position)
        .collect()
}

/// Anything that can be drawn from a shared mesh prototype.
///
/// Entities spin about Z only; the default `world_vertices` covers all of them.
pub trait Transformable {
    fn mesh_kind(&self) -> MeshKind;
    fn position(&self) -> Vec3;
    fn rotation(&self) -> f32;

    fn mesh(&self) -> &'static Mesh {
        self.mesh_kind().mesh()
    }

    fn world_vertices(&self) -> Vec<Vec3> {
        world_vertices(
            self.mesh(),
            rotation_matrix(Axis::Z, self.rotation()),
            self.position(),
        )
    }
}
