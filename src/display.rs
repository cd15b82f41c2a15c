//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable snapshot of the
//! world.  No game logic is performed; this module only translates world
//! coordinates into terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use star_barrage::entities::{ColorTag, GameMode};
use star_barrage::snapshot::{EnemyView, ParticleView, RenderSnapshot};

/// World units per terminal column / row.  Terminal cells are roughly
/// twice as tall as they are wide.
pub const CELL_W: f32 = 10.0;
pub const CELL_H: f32 = 20.0;

/// Rows used outside the playfield: HUD, top bar, bottom bar, hint.
const CHROME_ROWS: u16 = 4;
/// Columns used by the side walls.
const CHROME_COLS: u16 = 2;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_BORDER_FRENZY: Color = Color::Red;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_COMBO: Color = Color::Red;
const C_PLAYER: Color = Color::Green;
const C_PLAYER_POWERED: Color = Color::Cyan;
const C_BULLET: Color = Color::Yellow;
const C_POWER_UP: Color = Color::Cyan;
const C_STAR: Color = Color::DarkGrey;
const C_HINT: Color = Color::DarkGrey;

fn tag_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Red => Color::Red,
        ColorTag::Orange => Color::DarkYellow,
        ColorTag::Purple => Color::Magenta,
    }
}

// ── Geometry ─────────────────────────────────────────────────────────────────

/// World size for a terminal of `cols` × `rows`.
pub fn world_size(cols: u16, rows: u16) -> (f32, f32) {
    (
        cols.saturating_sub(CHROME_COLS) as f32 * CELL_W,
        rows.saturating_sub(CHROME_ROWS) as f32 * CELL_H,
    )
}

/// Terminal size a snapshot was laid out for.
fn terminal_size(snap: &RenderSnapshot) -> (u16, u16) {
    (
        (snap.width / CELL_W) as u16 + CHROME_COLS,
        (snap.height / CELL_H) as u16 + CHROME_ROWS,
    )
}

/// Map a world position (plus camera shake) to a playfield cell, or `None`
/// when it falls outside the walls.
fn to_cell(snap: &RenderSnapshot, x: f32, y: f32, shake: (f32, f32)) -> Option<(u16, u16)> {
    let col = ((x + shake.0) / CELL_W).floor();
    let row = ((y + shake.1) / CELL_H).floor();
    let cols = (snap.width / CELL_W).floor();
    let rows = (snap.height / CELL_H).floor();
    if col < 0.0 || row < 0.0 || col >= cols || row >= rows {
        return None;
    }
    Some((col as u16 + 1, row as u16 + 2))
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  `shake` is the camera offset in world units.
pub fn render<W: Write>(out: &mut W, snap: &RenderSnapshot, shake: (f32, f32)) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, snap)?;
    draw_hud(out, snap)?;

    out.queue(style::SetForegroundColor(C_STAR))?;
    for &(x, y) in &snap.stars {
        put(out, snap, x, y, shake, ".")?;
    }
    for particle in &snap.particles {
        draw_particle(out, snap, particle, shake)?;
    }
    for enemy in &snap.enemies {
        draw_enemy(out, snap, enemy, shake)?;
    }
    out.queue(style::SetForegroundColor(C_POWER_UP))?;
    for &(x, y) in &snap.power_ups {
        put(out, snap, x, y, shake, "★")?;
    }
    out.queue(style::SetForegroundColor(C_BULLET))?;
    for &(x, y) in &snap.bullets {
        put(out, snap, x, y, shake, "║")?;
    }

    draw_player(out, snap, shake)?;
    draw_controls_hint(out, snap)?;

    if let Some(final_score) = snap.final_score {
        draw_game_over(out, snap, final_score)?;
    }

    // Park cursor in a harmless spot and flush
    let (_, rows) = terminal_size(snap);
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

/// Print `glyph` centred on a world position, if it is on screen.
fn put<W: Write>(
    out: &mut W,
    snap: &RenderSnapshot,
    x: f32,
    y: f32,
    shake: (f32, f32),
    glyph: &str,
) -> std::io::Result<()> {
    let half = glyph.chars().count() as f32 / 2.0;
    if let Some((col, row)) = to_cell(snap, x - (half - 0.5) * CELL_W, y, shake) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, snap: &RenderSnapshot) -> std::io::Result<()> {
    let (w, h) = terminal_size(snap);
    let inner = "─".repeat(w.saturating_sub(2) as usize);

    let colour = if snap.frenzy { C_BORDER_FRENZY } else { C_BORDER };
    out.queue(style::SetForegroundColor(colour))?;

    // Row 1 — top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", inner)))?;

    // Row h-2 — bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", inner)))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(w.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &RenderSnapshot) -> std::io::Result<()> {
    let (w, _) = terminal_size(snap);

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", snap.score)))?;

    if snap.combo >= 2 {
        let combo = format!("COMBO x{}", snap.combo);
        out.queue(cursor::MoveTo(
            (w / 2).saturating_sub(combo.len() as u16 / 2),
            0,
        ))?;
        out.queue(style::SetForegroundColor(C_HUD_COMBO))?;
        out.queue(Print(&combo))?;
    }

    if snap.player.power_up_active {
        let tag = "[★ RAPID]";
        out.queue(cursor::MoveTo(
            w.saturating_sub(tag.chars().count() as u16 + 1),
            0,
        ))?;
        out.queue(style::SetForegroundColor(C_POWER_UP))?;
        out.queue(Print(tag))?;
    }

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, snap: &RenderSnapshot, shake: (f32, f32)) -> std::io::Result<()> {
    // Sprite (1 row, 3 cols):  /▲\
    let color = if snap.player.power_up_active {
        C_PLAYER_POWERED
    } else {
        C_PLAYER
    };
    out.queue(style::SetForegroundColor(color))?;
    put(out, snap, snap.player.x, snap.player.y, shake, "/▲\\")
}

fn draw_enemy<W: Write>(
    out: &mut W,
    snap: &RenderSnapshot,
    enemy: &EnemyView,
    shake: (f32, f32),
) -> std::io::Result<()> {
    let sprite = match enemy.color {
        ColorTag::Red => "«▼»",
        ColorTag::Orange => "v",
        ColorTag::Purple => "(◎)",
    };
    out.queue(style::SetForegroundColor(tag_color(enemy.color)))?;
    put(out, snap, enemy.x, enemy.y, shake, sprite)
}

fn draw_particle<W: Write>(
    out: &mut W,
    snap: &RenderSnapshot,
    particle: &ParticleView,
    shake: (f32, f32),
) -> std::io::Result<()> {
    let glyph = if particle.opacity > 0.5 { "*" } else { "·" };
    out.queue(style::SetForegroundColor(tag_color(particle.color)))?;
    put(out, snap, particle.x, particle.y, shake, glyph)
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, snap: &RenderSnapshot) -> std::io::Result<()> {
    let (_, h) = terminal_size(snap);
    out.queue(cursor::MoveTo(1, h.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    snap: &RenderSnapshot,
    final_score: u32,
) -> std::io::Result<()> {
    debug_assert_eq!(snap.mode, GameMode::GameOver);
    let (w, h) = terminal_size(snap);

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];
    let score_line = format!("Final Score: {:>6}", final_score);
    let hint = "R - Play Again  Q - Quit";

    let cx = w / 2;
    let total_rows = lines.len() + 2; // box + score + hint
    let start_row = (h / 2).saturating_sub(total_rows as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row + 1))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
