//! Entity construction: the enemy spawn clock, kill debris and the starfield.
//!
//! All randomness comes through the injected `rng`.

use std::f32::consts::TAU;

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{ColorTag, Enemy, EnemyKind, GameWorld, Particle, PowerUp, Star, Viewport};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build an enemy of `kind` with its fixed stats.
pub fn make_enemy(kind: EnemyKind, x: f32, y: f32) -> Enemy {
    let stats = kind.stats();
    Enemy {
        x,
        y,
        kind,
        speed: stats.speed,
        size: stats.size,
        color: stats.color,
        base_score: stats.base_score,
        alive: true,
        start_x: match kind {
            EnemyKind::Weaver => Some(x),
            EnemyKind::Straight | EnemyKind::Fast => None,
        },
    }
}

/// Scatter the initial starfield over the whole viewport.
pub fn make_starfield(config: &GameConfig, viewport: &Viewport, rng: &mut impl Rng) -> Vec<Star> {
    (0..config.star_count)
        .map(|_| Star {
            x: rng.gen_range(0.0..viewport.width),
            y: rng.gen_range(0.0..viewport.height),
            speed: rng.gen_range(config.star_speed_min..=config.star_speed_max),
        })
        .collect()
}

// ── Enemy spawn clock ────────────────────────────────────────────────────────

/// Advance the spawn clock by one tick.  Returns the kind spawned, if any.
///
/// Each spawn shortens the interval by one tick until it reaches the floor.
pub fn spawn_enemies(world: &mut GameWorld, rng: &mut impl Rng) -> Option<EnemyKind> {
    let spawner = &mut world.spawner;
    spawner.frames_since_last_enemy += 1;
    if spawner.frames_since_last_enemy < spawner.spawn_interval {
        return None;
    }
    spawner.frames_since_last_enemy = 0;
    spawner.spawn_interval = spawner
        .spawn_interval
        .saturating_sub(1)
        .max(world.config.spawn_interval_floor);

    let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
    let margin = world.config.spawn_margin;
    let x = rng.gen_range(margin..=world.viewport.width - margin);
    world.enemies.push(make_enemy(kind, x, world.config.spawn_y));

    log::debug!(
        "Spawned {:?} at x={:.0}, next interval {}",
        kind,
        x,
        world.spawner.spawn_interval
    );
    Some(kind)
}

// ── Kill debris ──────────────────────────────────────────────────────────────

/// Throw `particles_per_kill` sparks out of (x, y) in random directions.
pub fn spawn_particles(world: &mut GameWorld, x: f32, y: f32, color: ColorTag, rng: &mut impl Rng) {
    let config = &world.config;
    for _ in 0..config.particles_per_kill {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(config.particle_speed_min..=config.particle_speed_max);
        world.particles.push(Particle {
            x,
            y,
            vx: angle.cos() * speed,
            vy: angle.sin() * speed,
            lifetime: config.particle_lifetime,
            color,
        });
    }
}

/// Roll for a power-up drop at (x, y).  Returns true when one dropped.
pub fn maybe_drop_power_up(world: &mut GameWorld, x: f32, y: f32, rng: &mut impl Rng) -> bool {
    if !rng.gen_bool(world.config.power_up_drop_chance) {
        return false;
    }
    world.power_ups.push(PowerUp { x, y, alive: true });
    log::debug!("Power-up dropped at ({:.0}, {:.0})", x, y);
    true
}
