//! Per-frame render pass
//!
//! Paints one frame of [`GameState`] through a [`Backend`]: sky, floor, then
//! every object as shadow polygons followed by lit polygons, then the HUD.
//! Objects are painted one after another with no global depth sort.

use glam::Vec3;

use super::backend::{Backend, Color};
use super::camera::Camera;
use super::shadow::project_shadows;
use super::vertex::colors;
use super::visibility::{cull_backfaces, painter_sort};
use crate::consts::{DISPLAY_HEIGHT, FLOOR_HALF_WIDTH, FLOOR_LEAD, FLOOR_LIMIT};
use crate::geometry::{MeshKind, Transformable, Triangle, rotate_xy};
use crate::sim::{GamePhase, GameState};

/// Height of the game-over decoration above the wreck
const DECORATION_LIFT: f32 = 3.0;

/// Per-frame render options
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Normalized light direction
    pub light: Vec3,
    pub show_hud: bool,
    /// Wall-clock seconds, drives the decoration spin
    pub decor_time: f32,
}

/// Counts of what a frame painted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub objects: usize,
    pub triangles: usize,
}

/// Render one frame and present it
pub fn render_frame<B: Backend + ?Sized>(
    backend: &mut B,
    state: &GameState,
    options: &RenderOptions,
) -> FrameStats {
    let mut stats = FrameStats::default();

    backend.clear_frame(colors::SKY);

    let camera = Camera::follow(state.player.position, state.camera_offset);
    backend.set_camera_look_at(camera.eye, camera.target, camera.up);

    draw_floor(backend, state.player.position.x);

    match state.phase() {
        GamePhase::Running => {
            draw_object(
                backend,
                &state.player,
                &camera,
                options.light,
                colors::PLAYER,
                colors::PLAYER_SHADOW,
                &mut stats,
            );
        }
        GamePhase::Exploding { .. } | GamePhase::GameOver => {
            for fragment in &state.fragments {
                draw_object(
                    backend,
                    fragment,
                    &camera,
                    options.light,
                    colors::FRAGMENT,
                    colors::FRAGMENT_SHADOW,
                    &mut stats,
                );
            }
        }
    }

    for obstacle in state.field.obstacles() {
        draw_object(
            backend,
            obstacle,
            &camera,
            options.light,
            colors::OBSTACLE,
            colors::OBSTACLE_SHADOW,
            &mut stats,
        );
    }

    if state.phase() == GamePhase::GameOver {
        draw_decoration(backend, state.player.position, &camera, options.decor_time, &mut stats);
    }

    if options.show_hud {
        draw_hud(backend, state);
    }

    backend.present_frame();
    stats
}

/// Translucent ground strip under and behind the player
fn draw_floor<B: Backend + ?Sized>(backend: &mut B, player_x: f32) {
    let back = player_x - FLOOR_LIMIT;
    let front = player_x + FLOOR_LEAD;
    let quad = [
        Vec3::new(back, 0.0, -FLOOR_HALF_WIDTH),
        Vec3::new(front, 0.0, -FLOOR_HALF_WIDTH),
        Vec3::new(front, 0.0, FLOOR_HALF_WIDTH),
        Vec3::new(back, 0.0, FLOOR_HALF_WIDTH),
    ];
    backend.draw_filled_polygon(&quad, colors::FLOOR);
}

/// Cull, sort, then paint the shadow and the lit triangles of one object
fn draw_object<B: Backend + ?Sized, T: Transformable>(
    backend: &mut B,
    object: &T,
    camera: &Camera,
    light: Vec3,
    color: Color,
    shadow_color: Color,
    stats: &mut FrameStats,
) {
    let vertices = object.world_vertices();
    paint_mesh(
        backend,
        object.mesh().triangles,
        &vertices,
        camera,
        Some((light, shadow_color)),
        color,
        stats,
    );
}

/// Spinning mini cube above the wreck. Casts no shadow.
fn draw_decoration<B: Backend + ?Sized>(
    backend: &mut B,
    anchor: Vec3,
    camera: &Camera,
    time: f32,
    stats: &mut FrameStats,
) {
    let mesh = MeshKind::MiniCube.mesh();
    let center = anchor + Vec3::Y * DECORATION_LIFT;
    let vertices: Vec<Vec3> = mesh
        .vertices
        .iter()
        .map(|&v| rotate_xy(time, time * 0.7, v + mesh.pivot) + center)
        .collect();
    paint_mesh(backend, mesh.triangles, &vertices, camera, None, colors::DECORATION, stats);
}

fn paint_mesh<B: Backend + ?Sized>(
    backend: &mut B,
    triangles: &[Triangle],
    vertices: &[Vec3],
    camera: &Camera,
    shadow: Option<(Vec3, Color)>,
    color: Color,
    stats: &mut FrameStats,
) {
    let visible = cull_backfaces(triangles, vertices, camera.eye);
    let sorted = painter_sort(&visible, vertices);

    if let Some((light, shadow_color)) = shadow {
        let shadow_vertices = project_shadows(vertices, light);
        for tri in &sorted {
            backend.draw_filled_polygon(&tri.map(|i| shadow_vertices[i]), shadow_color);
        }
    }
    for tri in &sorted {
        backend.draw_filled_polygon(&tri.map(|i| vertices[i]), color);
    }

    stats.objects += 1;
    stats.triangles += sorted.len();
}

fn draw_hud<B: Backend + ?Sized>(backend: &mut B, state: &GameState) {
    let line_y = DISPLAY_HEIGHT as f32 - 30.0;
    let record = state.high_score();
    match state.phase() {
        GamePhase::GameOver => {
            backend.draw_text(
                10.0,
                line_y,
                &format!("Game Over! Score: {}   Record: {}", state.score, record),
            );
            backend.draw_text(10.0, line_y - 30.0, "Press [R] to restart");
        }
        GamePhase::Running => {
            backend.draw_text(
                10.0,
                line_y,
                &format!("Score: {}   Record: {}", state.score, record),
            );
        }
        // No text while the fragments fly
        GamePhase::Exploding { .. } => {}
    }
}
