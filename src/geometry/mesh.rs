//! Mesh prototypes
//!
//! Shared, read-only vertex/triangle tables. Entities refer to them through
//! [`MeshKind`] and never own a copy.
//!
//! Triangles are wound counter-clockwise when seen from outside the solid, so
//! `cross(v1 - v0, v2 - v0)` is the outward normal. Backface culling relies on it.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{CUBE_SCALE, MINI_SCALE, PYRAMID_SCALE};

/// Three indices into a mesh's vertex table
pub type Triangle = [usize; 3];

/// Immutable mesh prototype
#[derive(Debug)]
pub struct Mesh {
    /// Local-space vertices, centered on the origin
    pub vertices: &'static [Vec3],
    /// Outward-wound triangles
    pub triangles: &'static [Triangle],
    /// Applied before rotation so the base sits at local y = 0
    pub pivot: Vec3,
}

impl Mesh {
    /// Geometric center in pivoted local space
    pub fn local_center(&self) -> Vec3 {
        let sum: Vec3 = self.vertices.iter().copied().sum();
        sum / self.vertices.len() as f32 + self.pivot
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// Prototype handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeshKind {
    /// Player cube
    Cube,
    /// Obstacle pyramid
    Pyramid,
    /// Explosion fragment
    MiniCube,
}

impl MeshKind {
    /// Look up the shared prototype
    pub fn mesh(self) -> &'static Mesh {
        match self {
            MeshKind::Cube => &CUBE,
            MeshKind::Pyramid => &PYRAMID,
            MeshKind::MiniCube => &MINI_CUBE,
        }
    }
}

const fn cube_vertex(x: f32, y: f32, z: f32, scale: f32) -> Vec3 {
    Vec3::new(x * 0.5 * scale, y * 0.5 * scale, z * 0.5 * scale)
}

const fn cube_vertices(scale: f32) -> [Vec3; 8] {
    [
        cube_vertex(-1.0, -1.0, -1.0, scale),
        cube_vertex(1.0, -1.0, -1.0, scale),
        cube_vertex(1.0, 1.0, -1.0, scale),
        cube_vertex(-1.0, 1.0, -1.0, scale),
        cube_vertex(-1.0, -1.0, 1.0, scale),
        cube_vertex(1.0, -1.0, 1.0, scale),
        cube_vertex(1.0, 1.0, 1.0, scale),
        cube_vertex(-1.0, 1.0, 1.0, scale),
    ]
}

static CUBE_VERTICES: [Vec3; 8] = cube_vertices(CUBE_SCALE);
static MINI_CUBE_VERTICES: [Vec3; 8] = cube_vertices(MINI_SCALE);

static CUBE_TRIANGLES: [Triangle; 12] = [
    // back (z-)
    [0, 2, 1],
    [0, 3, 2],
    // front (z+)
    [4, 5, 6],
    [4, 6, 7],
    // bottom (y-)
    [4, 1, 5],
    [4, 0, 1],
    // right (x+)
    [5, 2, 6],
    [5, 1, 2],
    // top (y+)
    [6, 3, 7],
    [6, 2, 3],
    // left (x-)
    [7, 0, 4],
    [7, 3, 0],
];

static PYRAMID_VERTICES: [Vec3; 5] = [
    // apex
    Vec3::new(0.0, PYRAMID_SCALE, 0.0),
    Vec3::new(-PYRAMID_SCALE, -PYRAMID_SCALE, PYRAMID_SCALE),
    Vec3::new(PYRAMID_SCALE, -PYRAMID_SCALE, PYRAMID_SCALE),
    Vec3::new(PYRAMID_SCALE, -PYRAMID_SCALE, -PYRAMID_SCALE),
    Vec3::new(-PYRAMID_SCALE, -PYRAMID_SCALE, -PYRAMID_SCALE),
];

static PYRAMID_TRIANGLES: [Triangle; 6] = [
    [0, 1, 2],
    [0, 2, 3],
    [0, 3, 4],
    [0, 4, 1],
    // base
    [1, 3, 2],
    [1, 4, 3],
];

static CUBE: Mesh = Mesh {
    vertices: &CUBE_VERTICES,
    triangles: &CUBE_TRIANGLES,
    pivot: Vec3::new(0.0, 0.5 * CUBE_SCALE, 0.0),
};

static PYRAMID: Mesh = Mesh {
    vertices: &PYRAMID_VERTICES,
    triangles: &PYRAMID_TRIANGLES,
    pivot: Vec3::new(0.0, PYRAMID_SCALE, 0.0),
};

static MINI_CUBE: Mesh = Mesh {
    vertices: &MINI_CUBE_VERTICES,
    triangles: &CUBE_TRIANGLES,
    pivot: Vec3::new(0.0, 0.5 * MINI_SCALE, 0.0),
};
