use crate::caster::{FaceAxis, RayHit};
use crate::config::Config;

/// One column's slice placement plus its horizontal texture coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub top: u32,
    pub height: u32,
    /// Always in [0, 1).
    pub tex_u: f32,
}

/// Converts a wall hit into a vertically centered slice. `distance` is
/// passed separately from the hit because the compositor substitutes
/// the view-angle-corrected distance; the raw radial value stays on the
/// hit untouched.
pub fn project(hit: &RayHit, distance: f32, viewport_height: u32, cfg: &Config) -> Projection {
    let vh = viewport_height as f32;
    let height = (vh / distance.max(cfg.near_clamp)).round().min(vh) as u32;
    let top = (viewport_height - height) / 2;

    let along = match hit.face {
        FaceAxis::Horizontal => hit.point.x,
        FaceAxis::Vertical => hit.point.y,
    };
    let mut tex_u = (along * cfg.tile_repeat).rem_euclid(1.0);
    if tex_u >= 1.0 {
        // rem_euclid of a tiny negative can round up to the modulus.
        tex_u = 0.0;
    }

    Projection { top, height, tex_u }
}
