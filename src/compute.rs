//! Tick orchestration.
//!
//! `tick` takes an immutable reference to the current `GameWorld` (plus the
//! input snapshot and an RNG handle) and returns a brand-new `GameWorld`.
//! Side effects are limited to the injected RNG.

use rand::Rng;

use crate::config::GameConfig;
use crate::collision;
use crate::effects;
use crate::entities::{
    GameMode, GameState, GameWorld, Player, ShotCooldown, SpawnerState, Viewport,
};
use crate::error::GameError;
use crate::motion::{self, Steer};
use crate::spawner;

/// Input sampled once at the start of a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move-left key held.
    pub left: bool,
    /// Move-right key held.
    pub right: bool,
    /// Fire pressed since the last tick.
    pub fire: bool,
    /// Restart pressed since the last tick (honoured only after game over).
    pub restart: bool,
}

impl TickInput {
    pub fn steer(&self) -> Steer {
        match (self.left, self.right) {
            (true, false) => Steer::Left,
            (false, true) => Steer::Right,
            _ => Steer::Hold,
        }
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

fn initial_state(config: &GameConfig) -> GameState {
    GameState {
        score: 0,
        combo_counter: 0,
        combo_timer: 0,
        screen_shake: 0.0,
        shot: ShotCooldown {
            can_shoot: true,
            frames_since_last_shot: 0,
            cooldown_frames: config.shoot_cooldown_frames,
        },
        power_up_timer: 0,
        mode: GameMode::Playing,
    }
}

fn fresh_world(config: GameConfig, viewport: Viewport, rng: &mut impl Rng) -> GameWorld {
    let stars = spawner::make_starfield(&config, &viewport, rng);
    GameWorld {
        player: Player {
            x: viewport.width / 2.0,
            y: viewport.height - config.player_row_offset,
            power_up_active: false,
        },
        bullets: Vec::new(),
        enemies: Vec::new(),
        power_ups: Vec::new(),
        particles: Vec::new(),
        stars,
        state: initial_state(&config),
        spawner: SpawnerState {
            frames_since_last_enemy: 0,
            spawn_interval: config.spawn_interval_start,
        },
        frame: 0,
        events: Vec::new(),
        viewport,
        config,
    }
}

/// Build a fresh world for a `width` × `height` playfield.
///
/// Fails when the config is out of range or the playfield cannot hold the
/// player and the spawn band.
pub fn init_world(
    config: GameConfig,
    width: f32,
    height: f32,
    rng: &mut impl Rng,
) -> Result<GameWorld, GameError> {
    config.validate()?;
    let viewport = config.viewport(width, height)?;
    log::info!("World ready: {}x{}", width, height);
    Ok(fresh_world(config, viewport, rng))
}

/// Start over on the same playfield with the same tuning.
pub fn restart(world: &GameWorld, rng: &mut impl Rng) -> GameWorld {
    log::info!("Restart after final score {}", world.state.score);
    fresh_world(world.config.clone(), world.viewport, rng)
}

/// Apply new playfield bounds.  The player is re-clamped; entities keep
/// their positions and are pruned by the usual bounds on the next tick.
pub fn resize(world: &GameWorld, width: f32, height: f32) -> Result<GameWorld, GameError> {
    let viewport = world.config.viewport(width, height)?;
    let mut next = world.clone();
    next.viewport = viewport;
    motion::clamp_player(&mut next);
    log::info!("Viewport resized to {}x{}", width, height);
    Ok(next)
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Drop every entity that was hit, expired or left the playfield.
/// Compaction is in place and keeps relative order.
pub fn prune(world: &mut GameWorld) {
    let height = world.viewport.height;
    world.bullets.retain(|b| b.alive && b.y >= 0.0);
    world.enemies.retain(|e| e.alive && e.y <= height);
    world.power_ups.retain(|p| p.alive && p.y <= height);
    world.particles.retain(|p| p.lifetime > 0);
}

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
pub fn tick(world: &GameWorld, input: &TickInput, rng: &mut impl Rng) -> GameWorld {
    if world.state.mode == GameMode::GameOver {
        if input.restart {
            return restart(world, rng);
        }
        let mut next = world.clone();
        next.events.clear();
        return next;
    }

    let mut next = world.clone();
    next.events.clear();
    next.frame += 1;

    // ── 1. Timers ────────────────────────────────────────────────────────────
    effects::countdown(&mut next);

    // ── 2. Input ─────────────────────────────────────────────────────────────
    motion::steer_player(&mut next, input.steer());
    if input.fire {
        effects::try_fire(&mut next);
    }

    // ── 3. Movement ──────────────────────────────────────────────────────────
    motion::advance(&mut next, rng);

    // ── 4. Collisions ────────────────────────────────────────────────────────
    collision::resolve(&mut next, rng);

    // ── 5. Prune ─────────────────────────────────────────────────────────────
    prune(&mut next);

    // ── 6. Spawn ─────────────────────────────────────────────────────────────
    if next.state.mode == GameMode::Playing {
        spawner::spawn_enemies(&mut next, rng);
    }

    next
}
