use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        MouseButton, MouseEvent, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use alien_siege::display;
use alien_siege::events::{Command, Cue, Steer};
use alien_siege::session::Session;
use alien_siege::settings::Settings;
use alien_siege::store::{self, LoadError};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

/// Smallest terminal the layout fits in.
const MIN_TERM_WIDTH: u16 = 42;
const MIN_TERM_HEIGHT: u16 = 20;

/// Frames a save/load notice stays on the bottom line (≈3 s).
const NOTICE_FRAMES: u32 = 90;

// ── Simultaneous-input constants ──────────────────────────────────────────────

/// Min frames between shots while Space is held.
/// 8 frames @ 30 FPS ≈ 3.75 shots/sec (keeps the projectile cap meaningful).
const SHOOT_COOLDOWN: u32 = 8;

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames.  Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 4 frames (≈133 ms) is
/// always refreshed before expiry.
const HOLD_WINDOW: u64 = 4;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Main loop ─────────────────────────────────────────────────────────────────

/// Run the game until the player quits.
///
/// Input model: instead of acting on each key event individually, we maintain
/// a `key_frame` map that records the frame number of the last press/repeat
/// event for every key.  Each frame we recompute which steering keys are
/// still "fresh" (within `HOLD_WINDOW` frames) and feed the resulting held
/// state to the session, so Space plus A/D can be held at the same time with
/// no interference.
///
/// Works on two classes of terminal:
/// * **Keyboard-enhancement capable** (Ghostty, kitty, etc.): proper
///   `Press` / `Repeat` / `Release` events → keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`).  Keys expire naturally after `HOLD_WINDOW` frames of
///   silence, which is shorter than the OS repeat interval, so the key stays
///   live while it is actively generating repeats.
fn run<W: Write>(
    out: &mut W,
    session: &mut Session,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let origin = Instant::now();
    let save_path = store::save_path();
    let high_score_path = store::high_score_path();
    let mut persisted_high = session.progress.high_score;

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut shoot_cooldown: u32 = 0;
    let mut frame: u64 = 0;
    let mut notice: Option<(String, u32)> = None;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    // Press: record key + handle one-shot actions
                    KeyEventKind::Press => {
                        key_frame.insert(code, frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(());
                            }
                            KeyCode::Char('c')
                                if modifiers.contains(KeyModifiers::CONTROL) =>
                            {
                                return Ok(());
                            }
                            KeyCode::Char('s') | KeyCode::Char('S') if session.active => {
                                let text = match store::save_game(&save_path, &session.snapshot())
                                {
                                    Ok(()) => "Game saved".to_string(),
                                    Err(e) => format!("Save failed: {}", e),
                                };
                                notice = Some((text, NOTICE_FRAMES));
                            }
                            KeyCode::Char('l') | KeyCode::Char('L') if session.active => {
                                let text = match store::load_game(&save_path) {
                                    Ok(data) => {
                                        session.apply_save(&data);
                                        "Game loaded".to_string()
                                    }
                                    Err(LoadError::NotFound) => "No saved game found".to_string(),
                                    Err(e) => format!("Load failed: {}", e),
                                };
                                notice = Some((text, NOTICE_FRAMES));
                            }
                            _ => {}
                        }
                    }
                    // Repeat: refresh timestamp so key stays "held"
                    KeyEventKind::Repeat => {
                        key_frame.insert(code, frame);
                    }
                    // Release: remove key immediately (keyboard-enhancement path)
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    session.command(Command::Click {
                        x: column as i32 - display::ARENA_OFFSET_X as i32,
                        y: row as i32 - display::ARENA_OFFSET_Y as i32,
                    });
                }
                _ => {}
            }
        }

        // ── Feed held-key state to the session every frame ────────────────────
        let left = is_held(&key_frame, &KeyCode::Left, frame)
            || is_held(&key_frame, &KeyCode::Char('a'), frame)
            || is_held(&key_frame, &KeyCode::Char('A'), frame);
        let right = is_held(&key_frame, &KeyCode::Right, frame)
            || is_held(&key_frame, &KeyCode::Char('d'), frame)
            || is_held(&key_frame, &KeyCode::Char('D'), frame);
        session.command(Command::Steer(Steer::Left, left));
        session.command(Command::Steer(Steer::Right, right));

        // Firing is throttled so holding Space doesn't exhaust the whole
        // projectile cap in a single burst.
        if shoot_cooldown == 0 && is_held(&key_frame, &KeyCode::Char(' '), frame) {
            session.command(Command::Fire);
            shoot_cooldown = SHOOT_COOLDOWN;
        }
        shoot_cooldown = shoot_cooldown.saturating_sub(1);

        session.advance(origin.elapsed().as_millis() as u64, &mut rng);

        // ── Cues, high score, render ──────────────────────────────────────────
        let cues = session.take_cues();
        for cue in &cues {
            if *cue == Cue::GameOver {
                log::info!(
                    "game over at level {} with score {}",
                    session.progress.level,
                    session.progress.score
                );
            }
        }

        if session.progress.high_score > persisted_high {
            persisted_high = session.progress.high_score;
            store::save_high_score(&high_score_path, persisted_high);
        }

        display::render(out, session, notice.as_ref().map(|(t, _)| t.as_str()))?;

        // The terminal bell is our whole sound kit; one ring per frame no
        // matter how many cues fired, terminals coalesce them anyway.
        if !cues.is_empty() {
            out.write_all(b"\x07")?;
            out.flush()?;
        }

        notice = notice.and_then(|(t, n)| if n > 1 { Some((t, n - 1)) } else { None });

        // A life was just lost: hold the freshly reset frame on screen for a
        // beat before play resumes.
        if let Some(pause) = session.take_pause() {
            thread::sleep(pause);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    env_logger::init();

    let (term_width, term_height) = terminal::size()?;
    if term_width < MIN_TERM_WIDTH || term_height < MIN_TERM_HEIGHT {
        eprintln!(
            "terminal too small: need at least {}x{}, have {}x{}",
            MIN_TERM_WIDTH, MIN_TERM_HEIGHT, term_width, term_height
        );
        return Ok(());
    }

    let (arena_width, arena_height) = display::arena_size(term_width, term_height);
    let high_score = store::load_high_score(&store::high_score_path());
    let mut session = Session::new(Settings::new(arena_width, arena_height), high_score);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(event::EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &mut session, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(event::DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
