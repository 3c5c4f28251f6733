//! Startup sprite loading.
//!
//! Sprites are small text-art files referenced by fixed names under the
//! asset directory: one for the player pointer and one per shape kind.
//! Loading never aborts the program.  A file that is missing, unreadable
//! or empty is logged and its slot stays `None`; the renderer skips empty
//! slots, so visuals degrade instead of crashing.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::config::{CIRCLE_SPRITE, PLAYER_SPRITE, RECTANGLE_SPRITE, TRIANGLE_SPRITE};
use crate::entities::ShapeKind;

/// One text-art sprite: a stack of rows drawn top to bottom.
#[derive(Clone, Debug)]
pub struct Sprite {
    rows: Vec<String>,
}

impl Sprite {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

/// Every sprite the game can draw, loaded once at startup.
#[derive(Clone, Debug, Default)]
pub struct SpriteSet {
    pub player: Option<Sprite>,
    pub rectangle: Option<Sprite>,
    pub circle: Option<Sprite>,
    pub triangle: Option<Sprite>,
}

impl SpriteSet {
    /// Load every sprite from `dir`.
    pub fn load(dir: &Path) -> SpriteSet {
        SpriteSet {
            player: load_sprite(&dir.join(PLAYER_SPRITE)),
            rectangle: load_sprite(&dir.join(RECTANGLE_SPRITE)),
            circle: load_sprite(&dir.join(CIRCLE_SPRITE)),
            triangle: load_sprite(&dir.join(TRIANGLE_SPRITE)),
        }
    }

    pub fn for_shape(&self, kind: &ShapeKind) -> Option<&Sprite> {
        match kind {
            ShapeKind::Rectangle => self.rectangle.as_ref(),
            ShapeKind::Circle => self.circle.as_ref(),
            ShapeKind::Triangle => self.triangle.as_ref(),
        }
    }
}

fn load_sprite(path: &Path) -> Option<Sprite> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), %err, "sprite not loaded; it will not be drawn");
            return None;
        }
    };

    let mut rows: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    if rows.is_empty() {
        warn!(path = %path.display(), "sprite file is empty; it will not be drawn");
        return None;
    }
    Some(Sprite { rows })
}
