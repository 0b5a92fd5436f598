//! Commands into the engine, cues out of it.

/// Horizontal steering direction for the ship.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
}

/// A decoded player input, independent of the key/button that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Hold or release one steering direction.
    Steer(Steer, bool),
    Fire,
    /// Pointer click in arena coordinates.  Starts a game when it lands on
    /// the play button while no game is running; ignored otherwise.
    Click { x: i32, y: i32 },
}

/// Fire-and-forget audio trigger queued by the engine, played by the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Shot,
    Kill,
    LostLife,
    GameOver,
}
