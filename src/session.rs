//! The owned game context.
//!
//! One `Session` holds everything a running game needs: settings, progress,
//! the entity collections and the outbound cue/pause queues.  It is threaded
//! explicitly through the shell loop and the resolver; there is no global
//! state anywhere.
//!
//! Lifecycle: a session is born inactive (the play screen), `start()` flips
//! it active, and running out of lives flips it back.  While inactive the
//! only input that does anything is a click on the play button.

use std::time::Duration;

use crate::entities::{Bounds, PowerUp, Projectile, Ship};
use crate::events::{Command, Cue};
use crate::formation::Formation;
use crate::progress::Progress;
use crate::settings::Settings;
use crate::store::SaveData;

#[derive(Clone, Debug)]
pub struct Session {
    pub settings: Settings,
    pub progress: Progress,
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub formation: Formation,
    pub powerups: Vec<PowerUp>,
    /// False on the play screen and after a game over.
    pub active: bool,
    /// Audio cues queued this frame; drained by the shell.
    pub cues: Vec<Cue>,
    /// Requested loop pause after a life loss; drained by the shell.
    pub pause: Option<Duration>,
}

impl Session {
    /// New inactive session.  The formation is populated right away so the
    /// play screen has a fleet to show behind the button.
    pub fn new(settings: Settings, high_score: u32) -> Self {
        let progress = Progress::new(&settings, high_score);
        let ship = Ship::new(
            settings.arena_width,
            settings.arena_height,
            settings.ship_width,
            settings.ship_height,
        );
        let mut formation = Formation::new();
        formation.populate(&settings);

        Session {
            settings,
            progress,
            ship,
            projectiles: Vec::new(),
            formation,
            powerups: Vec::new(),
            active: false,
            cues: Vec::new(),
            pause: None,
        }
    }

    /// Begin a fresh game: progress back to defaults (high score kept), a
    /// full grid marching right, no leftover projectiles or power-ups, ship
    /// centered.
    pub fn start(&mut self) {
        self.progress.reset(&self.settings);
        self.formation.direction = 1.0;
        self.formation.populate(&self.settings);
        self.projectiles.clear();
        self.powerups.clear();
        self.ship.moving_left = false;
        self.ship.moving_right = false;
        self.ship.shield_until = None;
        self.ship
            .center(self.settings.arena_width, self.settings.arena_height);
        self.cues.clear();
        self.pause = None;
        self.active = true;
        log::debug!("session started, {} enemies", self.formation.enemies.len());
    }

    /// Dispatch one decoded input.  Movement and fire only land while a game
    /// is running; a click only lands while one is not.
    pub fn command(&mut self, cmd: Command) {
        match cmd {
            Command::Steer(dir, active) if self.active => self.ship.set_moving(dir, active),
            Command::Fire if self.active => self.fire(),
            Command::Click { x, y } if !self.active => {
                if self.play_button().contains(x, y) {
                    self.start();
                }
            }
            _ => {}
        }
    }

    /// Spawn a projectile at the ship's top-center, unless the live cap is
    /// already reached.  A blocked shot is a silent no-op: no cue.
    fn fire(&mut self) {
        if self.projectiles.len() >= self.progress.max_projectiles {
            return;
        }
        let w = self.settings.projectile_width;
        let h = self.settings.projectile_height;
        self.projectiles.push(Projectile {
            x: self.ship.x + ((self.settings.ship_width - w) / 2) as f32,
            y: self.ship.y - h as f32,
            width: w,
            height: h,
        });
        self.cues.push(Cue::Shot);
    }

    /// Clickable play-button region on the inactive screen, arena coords.
    pub fn play_button(&self) -> Bounds {
        let width = 9;
        let height = 3;
        Bounds {
            left: (self.settings.arena_width - width) / 2,
            top: self.settings.arena_height / 2 - 1,
            width,
            height,
        }
    }

    /// The persisted slice of this game.
    pub fn snapshot(&self) -> SaveData {
        SaveData {
            level: self.progress.level,
            score: self.progress.score,
            lives: self.progress.lives,
        }
    }

    /// Restore a persisted slice.  Only level, score and lives change; the
    /// difficulty factors and the entities on screen stay as they are.
    pub fn apply_save(&mut self, data: &SaveData) {
        self.progress.level = data.level;
        self.progress.score = data.score;
        self.progress.lives = data.lives;
    }

    /// Hand the queued cues to the caller, leaving the queue empty.
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Hand over the pending pause request, if any.
    pub fn take_pause(&mut self) -> Option<Duration> {
        self.pause.take()
    }
}
