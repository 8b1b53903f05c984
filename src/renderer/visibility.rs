//! Backface culling and painter's-algorithm ordering
//!
//! Both work per triangle on a flat list; there is no adjacency information.
//! Sorting is per object only: callers draw one object's triangles as a
//! contiguous run, then move on to the next object.

use glam::Vec3;

use crate::geometry::Triangle;

/// Outward normal of a triangle (not normalized)
#[inline]
pub fn triangle_normal(tri: &Triangle, vertices: &[Vec3]) -> Vec3 {
    let [v0, v1, v2] = tri.map(|i| vertices[i]);
    (v1 - v0).cross(v2 - v0)
}

/// Keep triangles whose outward side faces the camera.
///
/// A zero dot product (edge-on or degenerate triangle) is culled.
pub fn cull_backfaces(triangles: &[Triangle], vertices: &[Vec3], camera: Vec3) -> Vec<Triangle> {
    triangles
        .iter()
        .filter(|tri| {
            let normal = triangle_normal(tri, vertices);
            normal.dot(camera - vertices[tri[0]]) > 0.0
        })
        .copied()
        .collect()
}

/// Mean z of a triangle's three vertices
#[inline]
pub fn mean_depth(tri: &Triangle, vertices: &[Vec3]) -> f32 {
    (vertices[tri[0]].z + vertices[tri[1]].z + vertices[tri[2]].z) / 3.0
}

/// Order triangles back to front: descending mean depth.
///
/// The camera looks down +z, so larger z is farther away. The sort is stable,
/// equal depths keep their input order.
pub fn painter_sort(triangles: &[Triangle], vertices: &[Vec3]) -> Vec<Triangle> {
    let mut keyed: Vec<(Triangle, f32)> = triangles
        .iter()
        .map(|tri| (*tri, mean_depth(tri, vertices)))
        .collect();
    keyed.sort_by(|a, b| b.1.total_cmp(&a.1));
    keyed.into_iter().map(|(tri, _)| tri).collect()
}
