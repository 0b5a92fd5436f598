//! The enemy formation: grid layout and the synchronized march.
//!
//! All members share one direction and one speed within a frame; the wall
//! stays visually aligned because drops and reversals are applied to the
//! whole set at once, never per enemy.

use crate::entities::{Bounds, Enemy, Entity};
use crate::settings::Settings;

#[derive(Clone, Debug)]
pub struct Formation {
    pub enemies: Vec<Enemy>,
    /// -1.0 marching left, +1.0 marching right.
    pub direction: f32,
}

impl Formation {
    pub fn new() -> Self {
        Formation {
            enemies: Vec::new(),
            direction: 1.0,
        }
    }

    /// Rebuild the full grid.  Columns and rows are sized so that enemies
    /// spawn two widths/heights apart and can never touch at spawn:
    /// columns = (arena_w - 2*enemy_w) / (2*enemy_w), rows leave three enemy
    /// heights plus the ship's height free at the bottom.
    pub fn populate(&mut self, settings: &Settings) {
        let ew = settings.enemy_width;
        let eh = settings.enemy_height;
        let columns = (settings.arena_width - 2 * ew) / (2 * ew);
        let rows = (settings.arena_height - 3 * eh - settings.ship_height) / (2 * eh);

        self.enemies.clear();
        for row in 0..rows {
            for col in 0..columns {
                self.enemies.push(Enemy {
                    x: (ew + 2 * ew * col) as f32,
                    y: (eh + 2 * eh * row) as f32,
                    width: ew,
                    height: eh,
                });
            }
        }
    }

    /// True when a member touches the arena edge on the side the formation
    /// is travelling toward.  Checking only the travel side keeps the frame
    /// after a reversal from re-triggering the drop: that frame moves away
    /// from the edge instead.
    pub fn check_edges(&self, arena_w: i32) -> bool {
        self.enemies.iter().any(|enemy| {
            let b = enemy.bounds();
            if self.direction > 0.0 {
                b.right() >= arena_w
            } else {
                b.left <= 0
            }
        })
    }

    /// One frame of movement: either the whole formation descends one drop
    /// step and reverses, or it marches `speed` cells sideways.  Never both.
    pub fn advance(&mut self, arena_w: i32, speed: f32, drop_step: f32) {
        if self.check_edges(arena_w) {
            for enemy in &mut self.enemies {
                enemy.y += drop_step;
            }
            self.direction = -self.direction;
        } else {
            for enemy in &mut self.enemies {
                enemy.x += self.direction * speed;
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Bounding boxes of all members, in march order.
    pub fn member_bounds(&self) -> impl Iterator<Item = Bounds> + '_ {
        self.enemies.iter().map(|e| e.bounds())
    }
}

impl Default for Formation {
    fn default() -> Self {
        Formation::new()
    }
}
