//! Game entity types.
//!
//! Positions are `f32` so fractional speed factors accumulate smoothly as
//! difficulty scales; collision and rendering work on the integer cell
//! rectangle derived from the position each frame.

use crate::events::Steer;

// ── Bounds ───────────────────────────────────────────────────────────────────

/// Axis-aligned cell rectangle.  Edges are half-open: two boxes that merely
/// touch do not overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }
}

/// Anything that occupies a rectangle of the arena.
///
/// The box must always be derived from the current position; nothing mutates
/// a box directly.
pub trait Entity {
    fn bounds(&self) -> Bounds;
}

// ── Ship ─────────────────────────────────────────────────────────────────────

/// The player ship.  One instance per session; repositioned, never recreated.
#[derive(Clone, Debug)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: i32,
    pub height: i32,
    /// Both flags may be held at once; the net motion is then zero.
    pub moving_left: bool,
    pub moving_right: bool,
    /// Timestamp (ms) at which the shield switches off, if one is up.
    pub shield_until: Option<u64>,
}

impl Ship {
    /// New ship centered at the bottom of an arena of the given size.
    pub fn new(arena_w: i32, arena_h: i32, width: i32, height: i32) -> Self {
        let mut ship = Ship {
            x: 0.0,
            y: 0.0,
            width,
            height,
            moving_left: false,
            moving_right: false,
            shield_until: None,
        };
        ship.center(arena_w, arena_h);
        ship
    }

    pub fn set_moving(&mut self, dir: Steer, active: bool) {
        match dir {
            Steer::Left => self.moving_left = active,
            Steer::Right => self.moving_right = active,
        }
    }

    /// Per-frame update: apply held steering at `speed` cells per frame,
    /// clamp inside the arena, and drop the shield once its time is up.
    pub fn update(&mut self, now_ms: u64, arena_w: i32, speed: f32) {
        if self.moving_right {
            self.x += speed;
        }
        if self.moving_left {
            self.x -= speed;
        }
        // Floor at 0 so a ship wider than the arena pins left instead of
        // feeding clamp an inverted range.
        self.x = self.x.clamp(0.0, (arena_w - self.width).max(0) as f32);

        if let Some(expiry) = self.shield_until {
            if now_ms >= expiry {
                self.shield_until = None;
            }
        }
    }

    /// Reposition to bottom-center.  Used on session start, life loss and
    /// level advance.
    pub fn center(&mut self, arena_w: i32, arena_h: i32) {
        self.x = ((arena_w - self.width) / 2) as f32;
        self.y = (arena_h - self.height) as f32;
    }

    /// Raise the shield for `duration_ms` from now.  Re-activation restarts
    /// the clock rather than stacking.
    pub fn activate_shield(&mut self, now_ms: u64, duration_ms: u64) {
        self.shield_until = Some(now_ms + duration_ms);
    }

    pub fn shield_active(&self) -> bool {
        self.shield_until.is_some()
    }
}

impl Entity for Ship {
    fn bounds(&self) -> Bounds {
        Bounds {
            left: self.x as i32,
            top: self.y as i32,
            width: self.width,
            height: self.height,
        }
    }
}

// ── Projectile ───────────────────────────────────────────────────────────────

/// A player shot travelling straight up.
#[derive(Clone, Debug)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub width: i32,
    pub height: i32,
}

impl Projectile {
    pub fn update(&mut self, speed: f32) {
        self.y -= speed;
    }
}

impl Entity for Projectile {
    fn bounds(&self) -> Bounds {
        Bounds {
            left: self.x as i32,
            top: self.y as i32,
            width: self.width,
            height: self.height,
        }
    }
}

// ── Enemy ────────────────────────────────────────────────────────────────────

/// One formation member.  Carries no velocity of its own: direction and
/// speed are formation-wide.
#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: i32,
    pub height: i32,
}

impl Entity for Enemy {
    fn bounds(&self) -> Bounds {
        Bounds {
            left: self.x as i32,
            top: self.y as i32,
            width: self.width,
            height: self.height,
        }
    }
}

// ── Power-ups ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// +1 life on pickup.
    Life,
    /// 10 seconds of invulnerability on pickup.
    Shield,
    /// Raises the live-projectile cap by one, for the rest of the session.
    AmmoBoost,
}

/// A falling pickup.  Removed on pickup or once fully below the arena.
#[derive(Clone, Debug)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub width: i32,
    pub height: i32,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn update(&mut self, speed: f32) {
        self.y += speed;
    }
}

impl Entity for PowerUp {
    fn bounds(&self) -> Bounds {
        Bounds {
            left: self.x as i32,
            top: self.y as i32,
            width: self.width,
            height: self.height,
        }
    }
}
