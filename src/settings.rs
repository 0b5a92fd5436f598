//! Static per-session tunables.
//!
//! Everything here is fixed once the session starts.  The values that change
//! with difficulty (speed factors, points, projectile cap) live in
//! [`crate::progress::Progress`] and are merely *seeded* from here.

/// Fixed playfield and balance parameters, in arena cells and cells/frame.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Playfield width in cells.
    pub arena_width: i32,
    /// Playfield height in cells.
    pub arena_height: i32,

    pub ship_width: i32,
    pub ship_height: i32,
    pub enemy_width: i32,
    pub enemy_height: i32,
    pub projectile_width: i32,
    pub projectile_height: i32,
    pub powerup_width: i32,
    pub powerup_height: i32,

    /// Ship speed at level 1, cells per frame.
    pub base_ship_speed: f32,
    /// Projectile speed at level 1, cells per frame.
    pub base_projectile_speed: f32,
    /// Formation speed at level 1, cells per frame.
    pub base_enemy_speed: f32,
    /// Power-ups fall at a fixed speed, unaffected by difficulty.
    pub powerup_fall_speed: f32,
    /// Rows the whole formation descends when it reaches an edge.
    pub fleet_drop_step: f32,

    pub starting_lives: u32,
    pub base_enemy_points: u32,
    pub base_max_projectiles: usize,

    /// Multiplier applied to all speed factors on each level clear.
    pub speedup_scale: f32,
    /// Multiplier applied to the per-kill score on each level clear.
    pub score_scale: f32,

    /// Chance that a destroyed enemy drops a power-up.
    pub powerup_drop_rate: f64,
    pub shield_duration_ms: u64,
    /// Loop pause after a life is lost, so the reset reads as a beat.
    pub hit_pause_ms: u64,
}

impl Settings {
    pub fn new(arena_width: i32, arena_height: i32) -> Self {
        Settings {
            arena_width,
            arena_height,
            ship_width: 3,
            ship_height: 2,
            enemy_width: 3,
            enemy_height: 2,
            projectile_width: 1,
            projectile_height: 1,
            powerup_width: 1,
            powerup_height: 1,
            base_ship_speed: 1.0,
            base_projectile_speed: 1.0,
            base_enemy_speed: 0.25,
            powerup_fall_speed: 0.2,
            fleet_drop_step: 1.0,
            starting_lives: 3,
            base_enemy_points: 50,
            base_max_projectiles: 3,
            speedup_scale: 1.1,
            score_scale: 1.5,
            powerup_drop_rate: 0.3,
            shield_duration_ms: 10_000,
            hit_pause_ms: 500,
        }
    }
}
