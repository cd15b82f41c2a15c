//! Combo, shot cooldown, screen shake and power-up timers.
//!
//! `countdown` runs once per playing tick; the other functions are the
//! transitions the collision resolver and the input phase trigger.

use crate::entities::{Bullet, GameEvent, GameWorld};

/// Tick every timer down by one.
pub fn countdown(world: &mut GameWorld) {
    let state = &mut world.state;

    // Combo window: the counter survives the tick the timer reaches 0,
    // so a kill exactly `combo_window` ticks later still chains.
    if state.combo_timer > 0 {
        state.combo_timer -= 1;
    } else {
        state.combo_counter = 0;
    }

    state.screen_shake = (state.screen_shake - world.config.shake_decay).max(0.0);

    // Shot cooldown
    let shot = &mut state.shot;
    if !shot.can_shoot {
        shot.frames_since_last_shot += 1;
        if shot.frames_since_last_shot >= shot.cooldown_frames {
            shot.can_shoot = true;
        }
    }

    // Power-up expiry
    if world.player.power_up_active {
        state.power_up_timer = state.power_up_timer.saturating_sub(1);
        if state.power_up_timer == 0 {
            world.player.power_up_active = false;
            state.shot.cooldown_frames = world.config.shoot_cooldown_frames;
            log::debug!("Power-up expired at frame {}", world.frame);
        }
    }
}

/// Fire one bullet if the cooldown allows it.  Returns true on a shot.
pub fn try_fire(world: &mut GameWorld) -> bool {
    if !world.state.shot.can_shoot {
        return false;
    }
    world.bullets.push(Bullet {
        x: world.player.x,
        y: world.player.y - world.config.muzzle_offset,
        alive: true,
    });
    world.state.shot.can_shoot = false;
    world.state.shot.frames_since_last_shot = 0;
    world.events.push(GameEvent::GunFired);
    true
}

/// Apply one kill to score, combo and shake.  Returns the points awarded.
///
/// The multiplier is the combo count *before* this kill plus one.
pub fn register_kill(world: &mut GameWorld, base_score: u32) -> u32 {
    let config = &world.config;
    let state = &mut world.state;

    let points = base_score.saturating_mul(state.combo_counter.saturating_add(1));
    state.score = state.score.saturating_add(points);
    state.combo_counter = state.combo_counter.saturating_add(1);
    state.combo_timer = config.combo_window;
    state.screen_shake =
        (config.shake_base + state.combo_counter as f32 * config.shake_per_combo).min(config.shake_max);
    points
}

/// Start the power-up.  Picking one up while another is running does
/// nothing (the timer is not extended).  Returns true when it activated.
pub fn activate_power_up(world: &mut GameWorld) -> bool {
    if world.player.power_up_active {
        return false;
    }
    world.player.power_up_active = true;
    world.state.power_up_timer = world.config.power_up_duration;
    world.state.shot.cooldown_frames = world.config.powered_cooldown_frames;
    log::debug!(
        "Power-up active for {} ticks at frame {}",
        world.config.power_up_duration,
        world.frame
    );
    true
}
