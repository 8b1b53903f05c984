//! Planar shadow projection onto the ground (y = 0)

use glam::Vec3;

/// Slide `vertex` along `light` until it hits y = 0.
///
/// A horizontal light never reaches the ground; the vertex is returned unchanged.
#[inline]
pub fn project_shadow(vertex: Vec3, light: Vec3) -> Vec3 {
    if light.y == 0.0 {
        return vertex;
    }
    let t = -vertex.y / light.y;
    vertex + light * t
}

/// Project a whole world-vertex set. Indices line up with the input, so the
/// lit object's triangle list can be reused unchanged.
pub fn project_shadows(vertices: &[Vec3], light: Vec3) -> Vec<Vec3> {
    vertices.iter().map(|&v| project_shadow(v, light)).collect()
}
