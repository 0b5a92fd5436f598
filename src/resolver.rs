//! The per-frame update/collision/spawn pipeline.
//!
//! `advance` is the only place entities move and the only place collisions
//! are resolved, and its phases run in a fixed order every frame so score
//! and life accounting stay consistent.  All randomness comes through the
//! injected RNG, which keeps the whole pipeline deterministic under a
//! seeded generator in tests.

use std::time::Duration;

use rand::Rng;

use crate::entities::{Entity, PowerUp, PowerUpKind};
use crate::events::Cue;
use crate::session::Session;

impl Session {
    /// Advance the game by one frame at wall-clock time `now_ms`.
    ///
    /// Phase order:
    /// 1. ship steering, clamping and shield expiry
    /// 2. projectiles rise; off-screen ones are discarded before any
    ///    collision test so stale shots can never hit anything
    /// 3. projectile/enemy collisions: score, kill cues, power-up drops
    /// 4. level clear, when phase 3 emptied the formation
    /// 5. formation march (edge drop+reverse, or sideways step)
    /// 6. ship/enemy contact and enemies breaking through the bottom
    /// 7. power-ups fall, expire and get picked up
    pub fn advance(&mut self, now_ms: u64, rng: &mut impl Rng) {
        if !self.active {
            return;
        }

        // ── 1. Ship ──────────────────────────────────────────────────────────
        self.ship.update(
            now_ms,
            self.settings.arena_width,
            self.progress.ship_speed_factor,
        );

        // ── 2. Projectiles ───────────────────────────────────────────────────
        for projectile in &mut self.projectiles {
            projectile.update(self.progress.projectile_speed_factor);
        }
        self.projectiles.retain(|p| p.bounds().bottom() > 0);

        // ── 3. Projectile ↔ enemy ────────────────────────────────────────────
        self.resolve_projectile_hits(rng);
        if self.progress.score > self.progress.high_score {
            self.progress.high_score = self.progress.score;
        }

        // ── 4. Level clear ───────────────────────────────────────────────────
        if self.formation.is_empty() {
            self.level_clear();
        }

        // ── 5. Formation march ───────────────────────────────────────────────
        self.formation.advance(
            self.settings.arena_width,
            self.progress.enemy_speed_factor,
            self.settings.fleet_drop_step,
        );

        // ── 6. Ship ↔ enemy / bottom breach ──────────────────────────────────
        let ship_bounds = self.ship.bounds();
        let rammed = !self.ship.shield_active()
            && self
                .formation
                .member_bounds()
                .any(|b| b.overlaps(&ship_bounds));
        let breached = self
            .formation
            .member_bounds()
            .any(|b| b.bottom() >= self.settings.arena_height);
        // One life per frame, however many enemies are involved.
        if rammed || breached {
            self.lose_life();
        }

        // ── 7. Power-ups ─────────────────────────────────────────────────────
        for powerup in &mut self.powerups {
            powerup.update(self.settings.powerup_fall_speed);
        }
        let floor = self.settings.arena_height;
        self.powerups.retain(|p| p.bounds().top < floor);
        self.resolve_pickups(now_ms);
    }

    /// Pair up overlapping projectiles and enemies, then apply the removals.
    ///
    /// Each projectile and each enemy takes part in at most one pair per
    /// frame: N overlaps remove exactly N projectiles and N enemies.  Hits
    /// are collected first and removed afterwards so the scan itself never
    /// mutates the collections it is walking.
    fn resolve_projectile_hits(&mut self, rng: &mut impl Rng) {
        let mut spent: Vec<usize> = Vec::new();
        let mut killed: Vec<usize> = Vec::new();

        for (pi, projectile) in self.projectiles.iter().enumerate() {
            let pb = projectile.bounds();
            for (ei, enemy) in self.formation.enemies.iter().enumerate() {
                if killed.contains(&ei) {
                    continue;
                }
                if pb.overlaps(&enemy.bounds()) {
                    spent.push(pi);
                    killed.push(ei);
                    break;
                }
            }
        }

        if killed.is_empty() {
            return;
        }

        self.progress.score += self.progress.enemy_points * killed.len() as u32;
        for _ in &killed {
            self.cues.push(Cue::Kill);
            if rng.gen_bool(self.settings.powerup_drop_rate) {
                self.spawn_powerup(rng);
            }
        }

        // Indices shift as elements go, so remove from the back.
        killed.sort_unstable();
        for &ei in killed.iter().rev() {
            self.formation.enemies.remove(ei);
        }
        for &pi in spent.iter().rev() {
            self.projectiles.remove(pi);
        }
    }

    /// A random kind at a random column along the top edge.
    fn spawn_powerup(&mut self, rng: &mut impl Rng) {
        let kind = match rng.gen_range(0..3) {
            0 => PowerUpKind::Life,
            1 => PowerUpKind::Shield,
            _ => PowerUpKind::AmmoBoost,
        };
        let w = self.settings.powerup_width;
        let h = self.settings.powerup_height;
        self.powerups.push(PowerUp {
            x: rng.gen_range(0..=self.settings.arena_width - w) as f32,
            y: 0.0,
            width: w,
            height: h,
            kind,
        });
    }

    /// The formation was shot empty: next level.  Leftover shots vanish, a
    /// fresh grid comes in at raised difficulty, the ship re-centers.  The
    /// march keeps its current direction.
    fn level_clear(&mut self) {
        self.projectiles.clear();
        self.progress.increase_difficulty(&self.settings);
        self.progress.level += 1;
        self.formation.populate(&self.settings);
        self.ship
            .center(self.settings.arena_width, self.settings.arena_height);
        log::debug!(
            "level {} cleared, enemy speed now {:.3}",
            self.progress.level - 1,
            self.progress.enemy_speed_factor
        );
    }

    /// The ship was hit or the formation broke through.
    ///
    /// With lives left this is a reset at unchanged difficulty: enemies and
    /// projectiles are wiped and rebuilt, the ship re-centers, and a short
    /// pause is requested so the player gets a beat before re-engaging.
    /// Falling power-ups are left alone.  With no lives left the session
    /// ends where it stands.
    fn lose_life(&mut self) {
        self.progress.lives = self.progress.lives.saturating_sub(1);
        if self.progress.lives > 0 {
            self.projectiles.clear();
            self.formation.populate(&self.settings);
            self.ship
                .center(self.settings.arena_width, self.settings.arena_height);
            self.cues.push(Cue::LostLife);
            self.pause = Some(Duration::from_millis(self.settings.hit_pause_ms));
            log::debug!("life lost, {} remaining", self.progress.lives);
        } else {
            self.active = false;
            self.cues.push(Cue::GameOver);
            log::debug!(
                "game over at level {} with score {}",
                self.progress.level,
                self.progress.score
            );
        }
    }

    /// Apply every power-up the ship is touching, then drop it from the
    /// world.  Collected first, applied after, same as the hit scan.
    fn resolve_pickups(&mut self, now_ms: u64) {
        let ship_bounds = self.ship.bounds();
        let mut taken: Vec<usize> = Vec::new();
        for (i, powerup) in self.powerups.iter().enumerate() {
            if ship_bounds.overlaps(&powerup.bounds()) {
                taken.push(i);
            }
        }

        for &i in taken.iter().rev() {
            let powerup = self.powerups.remove(i);
            match powerup.kind {
                PowerUpKind::Life => self.progress.lives += 1,
                PowerUpKind::Shield => self
                    .ship
                    .activate_shield(now_ms, self.settings.shield_duration_ms),
                PowerUpKind::AmmoBoost => self.progress.max_projectiles += 1,
            }
        }
    }
}
