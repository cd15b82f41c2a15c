//! Motion integrator: one tick of movement for every collection.
//!
//! Each entity is transformed independently; nothing here reads another
//! entity or touches score/state.

use rand::Rng;

use crate::entities::{EnemyKind, GameWorld};

/// Horizontal steering requested for this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Steer {
    Left,
    Right,
    Hold,
}

// ── Player ───────────────────────────────────────────────────────────────────

/// Move the player one step and clamp into the playfield.
pub fn steer_player(world: &mut GameWorld, steer: Steer) {
    let step = world.config.player_speed;
    match steer {
        Steer::Left => world.player.x -= step,
        Steer::Right => world.player.x += step,
        Steer::Hold => {}
    }
    clamp_player(world);
}

/// Pin the player to its row and keep x within [half, width - half].
pub fn clamp_player(world: &mut GameWorld) {
    let half = world.config.player_half_width;
    world.player.x = world.player.x.clamp(half, world.viewport.width - half);
    world.player.y = world.viewport.height - world.config.player_row_offset;
}

// ── Collections ──────────────────────────────────────────────────────────────

/// Advance every collection by one tick.
pub fn advance(world: &mut GameWorld, rng: &mut impl Rng) {
    advance_bullets(world);
    advance_enemies(world);
    advance_power_ups(world);
    advance_particles(world);
    advance_stars(world, rng);
}

pub fn advance_bullets(world: &mut GameWorld) {
    let speed = world.config.bullet_speed;
    for bullet in &mut world.bullets {
        bullet.y -= speed;
    }
}

/// Enemies fall at their own speed; weavers also sway around `start_x`.
pub fn advance_enemies(world: &mut GameWorld) {
    let amplitude = world.config.weaver_amplitude;
    let wavelength = world.config.weaver_wavelength;
    for enemy in &mut world.enemies {
        enemy.y += enemy.speed;
        if enemy.kind == EnemyKind::Weaver {
            let origin = enemy.start_x.unwrap_or(enemy.x);
            enemy.x = origin + amplitude * (enemy.y / wavelength).sin();
        }
    }
}

pub fn advance_power_ups(world: &mut GameWorld) {
    let speed = world.config.power_up_speed;
    for power_up in &mut world.power_ups {
        power_up.y += speed;
    }
}

pub fn advance_particles(world: &mut GameWorld) {
    for particle in &mut world.particles {
        particle.x += particle.vx;
        particle.y += particle.vy;
        particle.lifetime -= 1;
    }
}

/// Stars that fall off the bottom re-enter at the top in a new column.
pub fn advance_stars(world: &mut GameWorld, rng: &mut impl Rng) {
    let width = world.viewport.width;
    let height = world.viewport.height;
    for star in &mut world.stars {
        star.y += star.speed;
        if star.y > height {
            star.y = 0.0;
            star.x = rng.gen_range(0.0..width);
        }
    }
}
