//! Collision resolver.
//!
//! Reads positions, writes alive flags, score and mode.  Pairs are tested
//! independently, so one bullet can take out every enemy within reach in
//! the same tick; each enemy is still scored at most once.

use rand::Rng;

use crate::effects;
use crate::entities::{GameEvent, GameMode, GameWorld};
use crate::spawner;

#[inline]
pub fn distance(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    (ax - bx).hypot(ay - by)
}

/// What a single `resolve` pass did, mostly for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub kills: u32,
    pub points: u32,
    pub power_ups_collected: u32,
    pub player_destroyed: bool,
}

/// Run every collision check for this tick, in order:
/// bullets ↔ enemies, enemies ↔ player, power-ups ↔ player.
pub fn resolve(world: &mut GameWorld, rng: &mut impl Rng) -> CollisionReport {
    let mut report = CollisionReport::default();

    resolve_bullet_hits(world, rng, &mut report);
    resolve_player_contact(world, &mut report);
    if world.state.mode == GameMode::Playing {
        resolve_pickups(world, &mut report);
    }

    report
}

fn resolve_bullet_hits(world: &mut GameWorld, rng: &mut impl Rng, report: &mut CollisionReport) {
    let bullet_radius = world.config.bullet_radius;

    for ei in 0..world.enemies.len() {
        let mut destroyed = false;
        {
            let enemy = &world.enemies[ei];
            if !enemy.alive {
                continue;
            }
            let reach = enemy.size / 2.0 + bullet_radius;
            for bullet in &mut world.bullets {
                if distance(enemy.x, enemy.y, bullet.x, bullet.y) < reach {
                    bullet.alive = false;
                    destroyed = true;
                }
            }
        }
        if !destroyed {
            continue;
        }

        let enemy = &mut world.enemies[ei];
        enemy.alive = false;
        let (x, y, color, base_score) = (enemy.x, enemy.y, enemy.color, enemy.base_score);

        let points = effects::register_kill(world, base_score);
        spawner::spawn_particles(world, x, y, color, rng);
        spawner::maybe_drop_power_up(world, x, y, rng);
        world.events.push(GameEvent::EnemyHit);

        report.kills += 1;
        report.points += points;
        log::debug!(
            "Enemy down at ({:.0}, {:.0}): +{} (combo {})",
            x,
            y,
            points,
            world.state.combo_counter
        );
    }
}

fn resolve_player_contact(world: &mut GameWorld, report: &mut CollisionReport) {
    if world.state.mode != GameMode::Playing {
        return;
    }
    let player = &world.player;
    let hit_radius = world.config.player_hit_radius;
    let touched = world.enemies.iter().any(|enemy| {
        enemy.alive && distance(enemy.x, enemy.y, player.x, player.y) < hit_radius + enemy.size / 2.0
    });
    if touched {
        world.state.mode = GameMode::GameOver;
        report.player_destroyed = true;
        log::info!(
            "Game over at frame {} with score {}",
            world.frame,
            world.state.score
        );
    }
}

fn resolve_pickups(world: &mut GameWorld, report: &mut CollisionReport) {
    let radius = world.config.power_up_pickup_radius;
    let (px, py) = (world.player.x, world.player.y);

    let mut collected = 0;
    for power_up in &mut world.power_ups {
        if power_up.alive && distance(power_up.x, power_up.y, px, py) < radius {
            power_up.alive = false;
            collected += 1;
        }
    }
    for _ in 0..collected {
        effects::activate_power_up(world);
        world.events.push(GameEvent::PowerUpCollected);
    }
    report.power_ups_collected += collected;
}
