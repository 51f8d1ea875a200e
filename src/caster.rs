use raylib::prelude::*;

use crate::grid::{CellState, Grid};

/// Which grid-line family the ray crossed when it entered the wall
/// cell. Determines which world coordinate varies continuously along
/// the struck face, which is what texture U is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceAxis {
    /// An x-grid-line was crossed; the face runs north-south.
    Vertical,
    /// A y-grid-line was crossed; the face runs east-west.
    Horizontal,
}

#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Euclidean distance from the ray origin to the hit point.
    pub distance: f32,
    pub point: Vector2,
    pub face: FaceAxis,
}

/// Marches a ray from `origin` along unit direction `dir` in fixed
/// increments until it enters a wall cell. Returns `None` when the ray
/// leaves the grid (the boundary absorbs rays) or travels past
/// `max_distance` without striking anything.
///
/// The loop is bounded by `max_distance / step_size` iterations.
pub fn cast(
    grid: &Grid,
    origin: Vector2,
    dir: Vector2,
    step_size: f32,
    max_distance: f32,
) -> Option<RayHit> {
    let mut travelled = 0.0f32;
    loop {
        travelled += step_size;
        if travelled > max_distance {
            return None;
        }
        let cx = origin.x + dir.x * travelled;
        let cy = origin.y + dir.y * travelled;
        match grid.cell_state_at(cx, cy) {
            CellState::OutOfBounds => return None,
            CellState::Empty => {}
            CellState::Wall => {
                return Some(RayHit {
                    distance: travelled,
                    point: Vector2::new(cx, cy),
                    face: face_axis(cx, cy, dir, step_size),
                });
            }
        }
    }
}

/// Compares the cell half a step back against the hit cell; the axis
/// whose integer coordinate changed names the struck face. If the
/// crossing happened within the first half of the step, the full-step
/// sample (known to be in a different, empty cell) is compared instead.
/// Corner crossings where both coordinates change resolve to Vertical.
fn face_axis(cx: f32, cy: f32, dir: Vector2, step_size: f32) -> FaceAxis {
    let cell_x = cx.floor();
    let cell_y = cy.floor();
    for back in [0.5f32, 1.0] {
        let px = cx - dir.x * step_size * back;
        let py = cy - dir.y * step_size * back;
        if px.floor() != cell_x {
            return FaceAxis::Vertical;
        }
        if py.floor() != cell_y {
            return FaceAxis::Horizontal;
        }
    }
    FaceAxis::Vertical
}
