use raylib::prelude::*;

use crate::caster;
use crate::config::Config;
use crate::grid::Grid;
use crate::player::Pose;
use crate::projector;

/// Textured vertical strip for one screen column.
#[derive(Debug, Clone, Copy)]
pub struct WallSlice {
    pub x: u32,
    pub top: u32,
    pub height: u32,
    pub tex_u: f32,
}

/// One frame's draw commands, consumed in order by the presentation
/// layer.
#[derive(Debug, Clone, Copy)]
pub enum DrawOp {
    /// Ceiling and floor halves, filling every pixel. Always emitted
    /// first so columns whose rays miss still show background.
    Backdrop,
    Slice(WallSlice),
}

/// Casts one ray per screen column and yields the frame's draw ops
/// lazily. Pure in (grid, pose, cfg); nothing here touches a surface.
pub fn compose<'a>(
    grid: &'a Grid,
    pose: &'a Pose,
    cfg: &'a Config,
) -> impl Iterator<Item = DrawOp> + 'a {
    let width = cfg.viewport_width;
    std::iter::once(DrawOp::Backdrop).chain((0..width).filter_map(move |x| {
        let angle = pose.heading - cfg.fov_deg / 2.0 + cfg.fov_deg * x as f32 / width as f32;
        let rad = angle.to_radians();
        let dir = Vector2::new(rad.cos(), rad.sin());

        let hit = caster::cast(grid, pose.pos, dir, cfg.step_size, cfg.max_distance)?;

        // Scale by the distance projected onto the view direction, so a
        // flat wall renders flat instead of bulging at the screen edges.
        let corrected = hit.distance * (angle - pose.heading).to_radians().cos();
        let p = projector::project(&hit, corrected, cfg.viewport_height, cfg);
        Some(DrawOp::Slice(WallSlice {
            x,
            top: p.top,
            height: p.height,
            tex_u: p.tex_u,
        }))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::{resolve_move, Intent};

    const BLOCK_MAP: &str = "\
############
#          #
#   #      #
#   #      #
#   #      #
#   #      #
#          #
#          #
#          #
#          #
#          #
############";

    #[test]
    fn backdrop_comes_first_and_slices_stay_in_bounds() {
        let cfg = Config::default();
        let grid = Grid::parse(BLOCK_MAP);
        let pose = Pose::new(2.0, 2.0, 90.0);

        let ops: Vec<DrawOp> = compose(&grid, &pose, &cfg).collect();
        assert!(matches!(ops[0], DrawOp::Backdrop));

        let mut seen = vec![false; cfg.viewport_width as usize];
        for op in &ops[1..] {
            let DrawOp::Slice(s) = *op else {
                panic!("backdrop emitted twice");
            };
            assert!(s.x < cfg.viewport_width);
            assert!(!seen[s.x as usize], "column {} emitted twice", s.x);
            seen[s.x as usize] = true;
            assert!(s.top + s.height <= cfg.viewport_height);
            assert!((0.0..1.0).contains(&s.tex_u));
        }
    }

    #[test]
    fn enclosed_map_covers_every_column() {
        let cfg = Config::default();
        let grid = Grid::parse(BLOCK_MAP);
        let pose = Pose::new(2.0, 2.0, 90.0);
        let slices = compose(&grid, &pose, &cfg)
            .filter(|op| matches!(op, DrawOp::Slice(_)))
            .count();
        assert_eq!(slices, cfg.viewport_width as usize);
    }

    // Walk forward one step, then render: columns angled toward the
    // interior block find a wall within range while columns looking
    // straight down the corridor exceed the cast limit and stay
    // background-only.
    #[test]
    fn forward_step_then_render_against_interior_block() {
        let cfg = Config {
            move_speed: 0.1,
            max_distance: 6.0,
            ..Config::default()
        };
        let grid = Grid::parse(BLOCK_MAP);
        let pose = Pose::new(2.0, 2.0, 90.0);

        let intent = Intent {
            forward: true,
            ..Intent::default()
        };
        let pose = resolve_move(&pose, intent, &grid, &cfg);
        assert!((pose.pos.x - 2.0).abs() < 1e-4, "x drifted: {}", pose.pos.x);
        assert!((pose.pos.y - 2.1).abs() < 1e-4, "y: {}", pose.pos.y);

        let slices: Vec<WallSlice> = compose(&grid, &pose, &cfg)
            .filter_map(|op| match op {
                DrawOp::Slice(s) => Some(s),
                DrawOp::Backdrop => None,
            })
            .collect();
        assert!(!slices.is_empty());

        // Column 0 looks 30 degrees east of the heading, crossing the
        // block face at (4, ~5.5), about four units out.
        let leftmost = slices
            .iter()
            .find(|s| s.x == 0)
            .expect("leftmost column should strike the block");
        assert!(leftmost.height > 0);

        // The center column stares down the open corridor; the far wall
        // sits ~8.9 units away, past the 6-unit cast limit.
        let mid = cfg.viewport_width / 2;
        assert!(
            slices.iter().all(|s| s.x != mid),
            "center column should be background-only"
        );
    }
}
