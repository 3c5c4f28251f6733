//! Rendering layer.  All terminal I/O lives here.
//!
//! The simulation works in 500×500 canvas units; this module projects
//! those units onto a character grid (10 units per column, 20 per row)
//! and translates state into terminal commands.  No game logic is
//! performed and no state is mutated.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use shape_shooter::assets::{Sprite, SpriteSet};
use shape_shooter::config::{CANVAS_HEIGHT, CANVAS_WIDTH};
use shape_shooter::entities::{GameState, GameStatus, Obstacle, Projectile, ShapeKind};

// ── Projection ────────────────────────────────────────────────────────────────

/// Canvas units represented by one terminal cell.
const UNITS_PER_COL: i32 = 10;
const UNITS_PER_ROW: i32 = 20;

const FIELD_COLS: u16 = (CANVAS_WIDTH / UNITS_PER_COL) as u16;
const FIELD_ROWS: u16 = (CANVAS_HEIGHT / UNITS_PER_ROW) as u16;

// Screen layout: HUD, border, playfield, border, key hint.
const HUD_ROW: u16 = 0;
const TOP_BORDER_ROW: u16 = 1;
const FIELD_TOP_ROW: u16 = 2;
const FIELD_BOTTOM_ROW: u16 = FIELD_TOP_ROW + FIELD_ROWS - 1;
const BOTTOM_BORDER_ROW: u16 = FIELD_BOTTOM_ROW + 1;
const HINT_ROW: u16 = BOTTOM_BORDER_ROW + 1;
const RIGHT_BORDER_COL: u16 = FIELD_COLS + 1;

/// Minimum terminal size able to hold the projected playfield.
pub const MIN_COLS: u16 = RIGHT_BORDER_COL + 1;
pub const MIN_ROWS: u16 = HINT_ROW + 1;

fn field_col(x: i32) -> u16 {
    (1 + x / UNITS_PER_COL) as u16
}

fn field_row(y: i32) -> u16 {
    FIELD_TOP_ROW + (y / UNITS_PER_ROW) as u16
}

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_RECTANGLE: Color = Color::Green;
const C_CIRCLE: Color = Color::Yellow;
const C_TRIANGLE: Color = Color::Magenta;
const C_PROJECTILE: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

fn shape_color(kind: &ShapeKind) -> Color {
    match kind {
        ShapeKind::Rectangle => C_RECTANGLE,
        ShapeKind::Circle => C_CIRCLE,
        ShapeKind::Triangle => C_TRIANGLE,
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    sprites: &SpriteSet,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out)?;
    draw_hud(out, state)?;

    for obstacle in &state.obstacles {
        draw_obstacle(out, obstacle, sprites)?;
    }
    if let Some(projectile) = &state.projectile {
        draw_projectile(out, projectile)?;
    }
    draw_player(out, state, sprites)?;
    draw_controls_hint(out)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, HINT_ROW))?;
    out.flush()?;
    Ok(())
}

// ── Border & HUD ──────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, TOP_BORDER_ROW))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(FIELD_COLS as usize))))?;

    for row in FIELD_TOP_ROW..=FIELD_BOTTOM_ROW {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(RIGHT_BORDER_COL, row))?;
        out.queue(Print("│"))?;
    }

    out.queue(cursor::MoveTo(0, BOTTOM_BORDER_ROW))?;
    out.queue(Print(format!("└{}┘", "─".repeat(FIELD_COLS as usize))))?;

    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, HUD_ROW))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", state.score)))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Draw a sprite with its top-left cell at `(col, row)`, clipping rows
/// that fall outside the playfield.
fn draw_sprite<W: Write>(out: &mut W, sprite: &Sprite, col: u16, row: u16) -> std::io::Result<()> {
    for (i, line) in sprite.rows().iter().enumerate() {
        let r = row + i as u16;
        if (FIELD_TOP_ROW..=FIELD_BOTTOM_ROW).contains(&r) {
            out.queue(cursor::MoveTo(col, r))?;
            out.queue(Print(line))?;
        }
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, state: &GameState, sprites: &SpriteSet) -> std::io::Result<()> {
    // A missing pointer sprite degrades to an invisible player.
    let Some(sprite) = &sprites.player else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    draw_sprite(
        out,
        sprite,
        field_col(state.player.x),
        field_row(state.player.y),
    )
}

fn draw_obstacle<W: Write>(
    out: &mut W,
    obstacle: &Obstacle,
    sprites: &SpriteSet,
) -> std::io::Result<()> {
    let Some(sprite) = sprites.for_shape(&obstacle.kind) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(shape_color(&obstacle.kind)))?;
    draw_sprite(out, sprite, field_col(obstacle.x), field_row(obstacle.y))
}

fn draw_projectile<W: Write>(out: &mut W, projectile: &Projectile) -> std::io::Result<()> {
    let row = field_row(projectile.y);
    if (FIELD_TOP_ROW..=FIELD_BOTTOM_ROW).contains(&row) {
        out.queue(cursor::MoveTo(field_col(projectile.x), row))?;
        out.queue(style::SetForegroundColor(C_PROJECTILE))?;
        out.queue(Print("║"))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, HINT_ROW))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Fire   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let lines = [
        "╔══════════════════╗",
        "║    GAME  OVER    ║",
        "╚══════════════════╝",
    ];
    let cx = 1 + FIELD_COLS / 2;
    let start_row = FIELD_TOP_ROW + FIELD_ROWS / 2 - 2;

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }

    let score_line = format!("Final Score: {:>5}", state.score);
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, start_row + lines.len() as u16))?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    out.queue(Print(&score_line))?;

    let hint = "R - Play Again   Q - Quit";
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, start_row + lines.len() as u16 + 1))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
