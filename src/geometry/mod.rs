//! Geometry module
//!
//! Static mesh prototypes and the transform that places them in the world.
//! Everything here is pure: meshes are never mutated after definition.

pub mod mesh;
pub mod transform;

pub use mesh::{Mesh, MeshKind, Triangle};
pub use transform::{Axis, Transformable, rotate, rotate_xy, rotation_matrix, world_vertices};
