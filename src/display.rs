//! Rendering layer, all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! session.  No game logic is performed; this module only translates state
//! into terminal commands.
//!
//! Screen layout: row 0 is the HUD, rows 1 and `arena_h + 2` are the border
//! bars, the arena occupies the box between them, and the last row carries
//! the controls hint or a transient notice.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::entities::{Entity, PowerUpKind};
use crate::session::Session;

/// Terminal column of arena column 0.
pub const ARENA_OFFSET_X: u16 = 1;
/// Terminal row of arena row 0.
pub const ARENA_OFFSET_Y: u16 = 2;

/// Arena size that fits a terminal of the given dimensions.
pub fn arena_size(term_width: u16, term_height: u16) -> (i32, i32) {
    (
        term_width.saturating_sub(2) as i32,
        term_height.saturating_sub(4) as i32,
    )
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_BEST: Color = Color::Cyan;
const C_HUD_LIVES: Color = Color::Red;
const C_SHIP: Color = Color::White;
const C_SHIELD: Color = Color::Cyan;
const C_ENEMY: Color = Color::Green;
const C_PROJECTILE: Color = Color::Cyan;
const C_LIFE: Color = Color::Magenta;
const C_AMMO: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;
const C_NOTICE: Color = Color::Yellow;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    session: &Session,
    notice: Option<&str>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, session)?;
    draw_hud(out, session)?;

    let aw = session.settings.arena_width;
    let ah = session.settings.arena_height;

    for enemy in &session.formation.enemies {
        let b = enemy.bounds();
        out.queue(style::SetForegroundColor(C_ENEMY))?;
        put(out, aw, ah, b.left, b.top, "<▼>")?;
        put(out, aw, ah, b.left, b.top + 1, "[_]")?;
    }

    out.queue(style::SetForegroundColor(C_PROJECTILE))?;
    for projectile in &session.projectiles {
        let b = projectile.bounds();
        put(out, aw, ah, b.left, b.top, "║")?;
    }

    for powerup in &session.powerups {
        let (glyph, color) = match powerup.kind {
            PowerUpKind::Life => ("♥", C_LIFE),
            PowerUpKind::Shield => ("◈", C_SHIELD),
            PowerUpKind::AmmoBoost => ("!", C_AMMO),
        };
        let b = powerup.bounds();
        out.queue(style::SetForegroundColor(color))?;
        put(out, aw, ah, b.left, b.top, glyph)?;
    }

    draw_ship(out, session)?;
    draw_bottom_line(out, session, notice)?;

    if !session.active {
        draw_play_overlay(out, session)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, ARENA_OFFSET_Y + ah as u16 + 1))?;
    out.flush()?;
    Ok(())
}

/// Print `text` starting at arena cell (x, y), clipping every character
/// that falls outside the arena.  Edge overshoot during a reversal must not
/// paint over the border.
fn put<W: Write>(
    out: &mut W,
    arena_w: i32,
    arena_h: i32,
    x: i32,
    y: i32,
    text: &str,
) -> std::io::Result<()> {
    if y < 0 || y >= arena_h {
        return Ok(());
    }
    for (i, ch) in text.chars().enumerate() {
        let cx = x + i as i32;
        if cx < 0 || cx >= arena_w {
            continue;
        }
        out.queue(cursor::MoveTo(
            ARENA_OFFSET_X + cx as u16,
            ARENA_OFFSET_Y + y as u16,
        ))?;
        out.queue(Print(ch))?;
    }
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, session: &Session) -> std::io::Result<()> {
    let aw = session.settings.arena_width as usize;
    let bottom = ARENA_OFFSET_Y + session.settings.arena_height as u16;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, ARENA_OFFSET_Y - 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(aw))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(aw))))?;

    for row in ARENA_OFFSET_Y..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(ARENA_OFFSET_X + aw as u16, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, session: &Session) -> std::io::Result<()> {
    let term_w = session.settings.arena_width as u16 + 2;
    let progress = &session.progress;

    // Score: left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>8}", progress.score)))?;

    // High score: centre
    let best = format!("Best: {}", progress.high_score);
    let bx = (term_w / 2).saturating_sub(best.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(bx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_BEST))?;
    out.queue(Print(&best))?;

    // Level and lives: right
    let hearts: String = "♥".repeat(progress.lives as usize);
    let right = format!("Lv {}  {}", progress.level, hearts);
    let rx = term_w.saturating_sub(right.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&right))?;

    Ok(())
}

// ── Ship ──────────────────────────────────────────────────────────────────────

fn draw_ship<W: Write>(out: &mut W, session: &Session) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //    ▲      ← top row    (tip)
    //   /█\     ← bottom row (wings + hull)
    let aw = session.settings.arena_width;
    let ah = session.settings.arena_height;
    let b = session.ship.bounds();

    out.queue(style::SetForegroundColor(C_SHIP))?;
    put(out, aw, ah, b.left + 1, b.top, "▲")?;
    put(out, aw, ah, b.left, b.top + 1, "/█\\")?;

    if session.ship.shield_active() {
        out.queue(style::SetForegroundColor(C_SHIELD))?;
        put(out, aw, ah, b.left - 1, b.top + 1, "(")?;
        put(out, aw, ah, b.right(), b.top + 1, ")")?;
    }

    Ok(())
}

// ── Bottom line: controls hint or transient notice ────────────────────────────

fn draw_bottom_line<W: Write>(
    out: &mut W,
    session: &Session,
    notice: Option<&str>,
) -> std::io::Result<()> {
    let row = ARENA_OFFSET_Y + session.settings.arena_height as u16 + 1;
    let (color, text) = match notice {
        Some(text) => (C_NOTICE, text),
        None => (
            C_HINT,
            "← → / A D : Move   SPACE : Fire   S : Save   L : Load   Q : Quit",
        ),
    };
    // This is the terminal's last row; clip instead of letting it wrap and
    // scroll the screen.
    let fitted: String = text
        .chars()
        .take(session.settings.arena_width as usize + 1)
        .collect();
    out.queue(cursor::MoveTo(1, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(fitted))?;
    Ok(())
}

// ── Play overlay (inactive sessions) ──────────────────────────────────────────

fn draw_play_overlay<W: Write>(out: &mut W, session: &Session) -> std::io::Result<()> {
    let aw = session.settings.arena_width;
    let ah = session.settings.arena_height;
    let button = session.play_button();
    let cx = aw / 2;

    let center = |out: &mut W, y: i32, color: Color, text: &str| -> std::io::Result<()> {
        out.queue(style::SetForegroundColor(color))?;
        put(out, aw, ah, cx - text.chars().count() as i32 / 2, y, text)
    };

    center(out, button.top - 6, Color::Cyan, "★  ALIEN  SIEGE  ★")?;
    if session.progress.high_score > 0 {
        let best = format!("Best Score: {}", session.progress.high_score);
        center(out, button.top - 5, Color::Yellow, &best)?;
    }

    // A dead session shows how the last game went; a fresh one doesn't.
    if session.progress.lives == 0 {
        center(out, button.top - 3, Color::Red, "G A M E   O V E R")?;
        let score = format!("Final Score: {}", session.progress.score);
        center(out, button.top - 2, Color::Yellow, &score)?;
    }

    out.queue(style::SetForegroundColor(Color::Green))?;
    put(out, aw, ah, button.left, button.top, "╔═══════╗")?;
    put(out, aw, ah, button.left, button.top + 1, "║ PLAY  ║")?;
    put(out, aw, ah, button.left, button.top + 2, "╚═══════╝")?;

    center(out, button.bottom() + 1, C_HINT, "click PLAY to start")?;

    // Power-up legend
    let legend: &[(&str, Color, &str)] = &[
        ("♥", C_LIFE, " Life   : +1 ship"),
        ("◈", C_SHIELD, " Shield : 10s invulnerable"),
        ("!", C_AMMO, " Ammo   : +1 shot on screen"),
    ];
    let lx = cx - 13;
    for (i, (glyph, color, text)) in legend.iter().enumerate() {
        let y = button.bottom() + 3 + i as i32;
        out.queue(style::SetForegroundColor(*color))?;
        put(out, aw, ah, lx, y, glyph)?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        put(out, aw, ah, lx + 1, y, text)?;
    }

    Ok(())
}
