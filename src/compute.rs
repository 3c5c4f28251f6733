//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG, so a seeded
//! or pinned RNG makes every transition deterministic.

use rand::Rng;

use crate::config::{
    BOTTOM_MARGIN, CANVAS_HEIGHT, CANVAS_WIDTH, FIRE_COOLDOWN_TICKS, KILL_SCORE, OBSTACLE_HEIGHT,
    OBSTACLE_SPEED, OBSTACLE_WIDTH, PLAYER_HEIGHT, PLAYER_SPEED, PLAYER_WIDTH, PROJECTILE_HEIGHT,
    PROJECTILE_SPEED, PROJECTILE_WIDTH, SPAWN_CHANCE,
};
use crate::entities::{GameState, GameStatus, Obstacle, Player, Projectile, ShapeKind};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: player centered on the bottom edge,
/// nothing falling, nothing in flight, ready to fire.
pub fn init_state() -> GameState {
    GameState {
        player: Player {
            x: CANVAS_WIDTH / 2 - PLAYER_WIDTH / 2,
            y: CANVAS_HEIGHT - PLAYER_HEIGHT - BOTTOM_MARGIN,
        },
        obstacles: Vec::new(),
        projectile: None,
        score: 0,
        status: GameStatus::Playing,
        tick: 0,
        fire_ready_at: 0,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let new_x = (state.player.x - PLAYER_SPEED).max(0);
    GameState {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameState) -> GameState {
    let new_x = (state.player.x + PLAYER_SPEED).min(CANVAS_WIDTH - PLAYER_WIDTH);
    GameState {
        player: Player {
            x: new_x,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Fire the single projectile from the player's muzzle.
///
/// A no-op while the cooldown is running (`tick < fire_ready_at`).  Once
/// the cooldown has lapsed a new shot replaces any projectile still in
/// flight; there is never more than one.
pub fn player_shoot(state: &GameState) -> GameState {
    if state.tick < state.fire_ready_at {
        return state.clone();
    }
    let projectile = Projectile {
        x: state.player.x + PLAYER_WIDTH / 2 - PROJECTILE_WIDTH / 2,
        y: state.player.y,
    };
    GameState {
        projectile: Some(projectile),
        fire_ready_at: state.tick + FIRE_COOLDOWN_TICKS,
        ..state.clone()
    }
}

// ── Per-tick update (nearly pure, RNG is injected) ──────────────────────────

/// Advance the simulation by one fixed timestep.
///
/// Stages, in order: obstacles descend and bottom-exits are pruned, at
/// most one obstacle spawns, the projectile advances (despawning past the
/// top edge), and the first obstacle overlapping the projectile is
/// destroyed for `KILL_SCORE`.  Nothing here sets `GameStatus::GameOver`;
/// obstacles that reach the bottom are simply discarded.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    let tick = state.tick + 1;

    // ── 1. Obstacles descend; prune bottom exits ────────────────────────────
    let mut obstacles: Vec<Obstacle> = state
        .obstacles
        .iter()
        .filter_map(|o| {
            let y = o.y + OBSTACLE_SPEED;
            (y <= CANVAS_HEIGHT).then(|| Obstacle { y, ..o.clone() })
        })
        .collect();

    // ── 2. Spawn at the top edge ────────────────────────────────────────────
    if rng.gen_bool(SPAWN_CHANCE) {
        let x = rng.gen_range(0..=CANVAS_WIDTH - OBSTACLE_WIDTH);
        let kind = random_shape(rng);
        obstacles.push(Obstacle { x, y: 0, kind });
    }

    // ── 3. Advance the projectile; despawn past the top ─────────────────────
    let projectile = state.projectile.as_ref().and_then(|p| {
        let y = p.y - PROJECTILE_SPEED;
        (y >= 0).then(|| Projectile { y, ..p.clone() })
    });

    // ── 4. Resolve the first projectile/obstacle hit ────────────────────────
    let (projectile, score) = match projectile {
        Some(p) => match obstacles.iter().position(|o| hits(&p, o)) {
            Some(i) => {
                obstacles.remove(i);
                (None, state.score + KILL_SCORE)
            }
            None => (Some(p), state.score),
        },
        None => (None, state.score),
    };

    GameState {
        obstacles,
        projectile,
        score,
        tick,
        ..state.clone()
    }
}

fn random_shape(rng: &mut impl Rng) -> ShapeKind {
    match rng.gen_range(0..3) {
        0 => ShapeKind::Rectangle,
        1 => ShapeKind::Circle,
        _ => ShapeKind::Triangle,
    }
}

/// Strict AABB overlap: rectangles that only share an edge do not hit.
fn hits(p: &Projectile, o: &Obstacle) -> bool {
    p.x < o.x + OBSTACLE_WIDTH
        && o.x < p.x + PROJECTILE_WIDTH
        && p.y < o.y + OBSTACLE_HEIGHT
        && o.y < p.y + PROJECTILE_HEIGHT
}
