use crate::config::Config;
use crate::grid::{CellState, Grid};
use crate::player::{normalize_heading, Pose};

/// One frame's directional input snapshot. Flags combine freely;
/// forward plus strafe gives diagonal movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct Intent {
    pub forward: bool,
    pub back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
}

/// Applies one frame of rotation and translation, committing each
/// translation axis independently against the grid. A committed pose
/// always lands in an `Empty` cell; the solid map border doubles as the
/// bounds check.
pub fn resolve_move(pose: &Pose, intent: Intent, grid: &Grid, cfg: &Config) -> Pose {
    let mut heading = pose.heading;
    if intent.rotate_left {
        heading -= cfg.rotate_speed;
    }
    if intent.rotate_right {
        heading += cfg.rotate_speed;
    }
    let heading = normalize_heading(heading);

    let rad = heading.to_radians();
    let (sin, cos) = rad.sin_cos();
    let mut dx = 0.0f32;
    let mut dy = 0.0f32;
    if intent.forward {
        dx += cos;
        dy += sin;
    }
    if intent.back {
        dx -= cos;
        dy -= sin;
    }
    if intent.strafe_right {
        dx -= sin;
        dy += cos;
    }
    if intent.strafe_left {
        dx += sin;
        dy -= cos;
    }
    dx *= cfg.move_speed;
    dy *= cfg.move_speed;

    let mut next = Pose {
        pos: pose.pos,
        heading,
    };
    // Axis-separated commit: a rejected axis never blocks the other,
    // so diagonal movement into a corner slides along the wall.
    let cand_x = pose.pos.x + dx;
    if grid.cell_state_at(cand_x, pose.pos.y) == CellState::Empty {
        next.pos.x = cand_x;
    }
    let cand_y = pose.pos.y + dy;
    if grid.cell_state_at(next.pos.x, cand_y) == CellState::Empty {
        next.pos.y = cand_y;
    }
    next
}
