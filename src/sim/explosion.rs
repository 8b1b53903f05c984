//! Cube explosion into fragments
//!
//! The cube is split into a 2x2x2 grid of sub-cells. Each sub-cell becomes a
//! mini cube flying outward from the cube's center.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

use super::state::{Fragment, Player};
use crate::consts::{
    CUBE_SCALE, FRAGMENT_COUNT, FRAGMENT_JITTER, FRAGMENT_SPEED_MAX, FRAGMENT_SPEED_MIN,
};
use crate::geometry::{Axis, Transformable, rotation_matrix};

/// Sub-cell centers relative to the cube's local center
pub fn subcell_offsets() -> [Vec3; FRAGMENT_COUNT] {
    let q = 0.25 * CUBE_SCALE;
    let mut offsets = [Vec3::ZERO; FRAGMENT_COUNT];
    let mut i = 0;
    for dx in [-q, q] {
        for dy in [-q, q] {
            for dz in [-q, q] {
                offsets[i] = Vec3::new(dx, dy, dz);
                i += 1;
            }
        }
    }
    offsets
}

/// Unit direction from `center` to `position`; straight up when they coincide
#[inline]
pub fn outward_direction(center: Vec3, position: Vec3) -> Vec3 {
    (position - center).try_normalize().unwrap_or(Vec3::Y)
}

/// Break the player into fragments.
///
/// Fragments start where their sub-cell is in world space, carry the player's
/// current spin, and fly outward at a random speed plus a little jitter.
pub fn explode<R: Rng + ?Sized>(player: &Player, rng: &mut R) -> Vec<Fragment> {
    let mesh = player.mesh();
    let rotation = rotation_matrix(Axis::Z, player.rotation);
    let local_center = mesh.local_center();
    let center = player.position + rotation * local_center;

    subcell_offsets()
        .into_iter()
        .map(|offset| {
            let position = player.position + rotation * (local_center + offset);
            let direction = outward_direction(center, position);
            let speed = rng.random_range(FRAGMENT_SPEED_MIN..FRAGMENT_SPEED_MAX);
            let jitter = Vec3::new(
                rng.random_range(-FRAGMENT_JITTER..FRAGMENT_JITTER),
                rng.random_range(-FRAGMENT_JITTER..FRAGMENT_JITTER),
                rng.random_range(-FRAGMENT_JITTER..FRAGMENT_JITTER),
            );
            Fragment {
                position,
                velocity: direction * speed + jitter,
                rotation: player.rotation,
                angular_velocity: rng.random_range(-PI..PI),
            }
        })
        .collect()
}
