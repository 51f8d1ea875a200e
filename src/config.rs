/// Every tunable of the renderer in one place. Defaults are the values
/// the engine was tuned with: 640x480 viewport, 60 degree FOV, step
/// size well below the 1-unit wall thickness so thin-wall tunneling
/// cannot happen.
#[derive(Debug, Clone)]
pub struct Config {
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Total angular width of the view cone, degrees.
    pub fov_deg: f32,
    /// World units per frame while a move key is held.
    pub move_speed: f32,
    /// Degrees per frame while a rotate key is held.
    pub rotate_speed: f32,
    /// Ray march increment, world units.
    pub step_size: f32,
    /// Rays give up past this travel distance.
    pub max_distance: f32,
    /// How many times the wall texture repeats per world unit.
    pub tile_repeat: f32,
    /// Distance floor for projection; keeps slice height bounded when
    /// the player is flush against a wall. Not a near-plane clip.
    pub near_clamp: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_width: 640,
            viewport_height: 480,
            fov_deg: 60.0,
            move_speed: 0.05,
            rotate_speed: 1.5,
            step_size: 0.1,
            max_distance: 20.0,
            tile_repeat: 1.0,
            near_clamp: 0.1,
        }
    }
}
