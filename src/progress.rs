//! Score, lives, level and the difficulty multipliers.
//!
//! Only the resolver and the session lifecycle mutate this; nothing else
//! writes here.

use crate::settings::Settings;

#[derive(Clone, Debug)]
pub struct Progress {
    pub score: u32,
    /// Highest score ever observed, seeded from disk.  Never decreases.
    pub high_score: u32,
    pub level: u32,
    pub lives: u32,

    pub ship_speed_factor: f32,
    pub projectile_speed_factor: f32,
    pub enemy_speed_factor: f32,
    /// Score awarded per destroyed enemy at the current level.
    pub enemy_points: u32,
    /// Live-projectile cap.  Grows permanently on ammo-boost pickups.
    pub max_projectiles: usize,
}

impl Progress {
    pub fn new(settings: &Settings, high_score: u32) -> Self {
        Progress {
            score: 0,
            high_score,
            level: 1,
            lives: settings.starting_lives,
            ship_speed_factor: settings.base_ship_speed,
            projectile_speed_factor: settings.base_projectile_speed,
            enemy_speed_factor: settings.base_enemy_speed,
            enemy_points: settings.base_enemy_points,
            max_projectiles: settings.base_max_projectiles,
        }
    }

    /// Back to level-1 defaults for a fresh game.  The high score survives.
    pub fn reset(&mut self, settings: &Settings) {
        *self = Progress::new(settings, self.high_score);
    }

    /// Applied once per level clear: every speed factor scales up and the
    /// per-kill score grows, truncated to a whole number.
    pub fn increase_difficulty(&mut self, settings: &Settings) {
        self.ship_speed_factor *= settings.speedup_scale;
        self.projectile_speed_factor *= settings.speedup_scale;
        self.enemy_speed_factor *= settings.speedup_scale;
        self.enemy_points = (self.enemy_points as f32 * settings.score_scale) as u32;
    }
}
