//! Game constants.  All positions, sizes and speeds are in canvas units;
//! speeds are per-tick amounts (the loop runs one tick per `TICK`).

use std::time::Duration;

// ── Canvas ────────────────────────────────────────────────────────────────────

pub const CANVAS_WIDTH: i32 = 500;
pub const CANVAS_HEIGHT: i32 = 500;

// ── Entity dimensions ─────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: i32 = 50;
pub const PLAYER_HEIGHT: i32 = 50;
/// Gap between the player sprite and the bottom canvas edge.
pub const BOTTOM_MARGIN: i32 = 20;

pub const OBSTACLE_WIDTH: i32 = 20;
pub const OBSTACLE_HEIGHT: i32 = 20;

pub const PROJECTILE_WIDTH: i32 = 5;
pub const PROJECTILE_HEIGHT: i32 = 10;

// ── Movement (canvas units per tick, or per key press for the player) ─────────

pub const PLAYER_SPEED: i32 = 25;
pub const OBSTACLE_SPEED: i32 = 3;
pub const PROJECTILE_SPEED: i32 = 15;

// ── Pacing ────────────────────────────────────────────────────────────────────

/// Fixed timestep of the update/render loop.
pub const TICK: Duration = Duration::from_millis(20);

/// Per-tick probability of spawning one obstacle at the top edge.
pub const SPAWN_CHANCE: f64 = 0.02;

/// Ticks before the next shot is allowed (25 × 20 ms = 500 ms).
pub const FIRE_COOLDOWN_TICKS: u64 = 25;

/// Score added for each obstacle destroyed.
pub const KILL_SCORE: u32 = 10;

// ── Files ─────────────────────────────────────────────────────────────────────

pub const ASSET_DIR: &str = "assets";
pub const PLAYER_SPRITE: &str = "pointer.txt";
pub const RECTANGLE_SPRITE: &str = "rectangle.txt";
pub const CIRCLE_SPRITE: &str = "circle.txt";
pub const TRIANGLE_SPRITE: &str = "triangle.txt";

/// Diagnostics go to a file: stderr is not visible while the alternate
/// screen is active.
pub const LOG_FILE: &str = "shape-shooter.log";
