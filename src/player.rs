use raylib::prelude::*;

/// Player pose: continuous world position plus heading in degrees,
/// always kept in [0, 360). Owned by the movement controller; the
/// scene compositor only reads it.
#[derive(Debug, Clone)]
pub struct Pose {
    pub pos: Vector2,
    pub heading: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, heading: f32) -> Self {
        Self {
            pos: Vector2::new(x, y),
            heading: normalize_heading(heading),
        }
    }
}

/// Wraps an angle in degrees into [0, 360).
pub fn normalize_heading(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_heading_is_in_range() {
        for &h in &[-720.0, -360.0, -90.0, -0.5, 0.0, 45.0, 359.9, 360.0, 1080.0] {
            let n = normalize_heading(h);
            assert!((0.0..360.0).contains(&n), "{h} -> {n}");
        }
    }

    #[test]
    fn normalization_is_idempotent_modulo_full_turns() {
        for &h in &[-123.4, 0.0, 17.0, 359.0, 400.0] {
            let n = normalize_heading(h);
            for k in -3i32..=3 {
                let wrapped = normalize_heading(n + k as f32 * 360.0);
                assert!((wrapped - n).abs() < 1e-3, "{h} + {k}*360: {wrapped} vs {n}");
            }
        }
    }
}
