//! Alien Siege - a terminal formation shooter
//!
//! Core modules:
//! - `entities`: ship, projectiles, enemies, power-ups and their bounds
//! - `formation`: enemy grid layout and the synchronized march
//! - `session`: the owned game context (lifecycle, input, cues)
//! - `resolver`: the per-frame update/collision/spawn pipeline
//! - `store`: save-game and high-score persistence
//! - `display`: crossterm renderer, no game logic

pub mod display;
pub mod entities;
pub mod events;
pub mod formation;
pub mod progress;
pub mod resolver;
pub mod session;
pub mod settings;
pub mod store;

pub use session::Session;
pub use settings::Settings;
