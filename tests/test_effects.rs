use star_barrage::compute::init_world;
use star_barrage::config::GameConfig;
use star_barrage::effects::*;
use star_barrage::entities::*;

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_world() -> GameWorld {
    let config = GameConfig {
        star_count: 0,
        ..GameConfig::default()
    };
    init_world(config, 800.0, 600.0, &mut StdRng::seed_from_u64(1)).unwrap()
}

// ── register_kill ─────────────────────────────────────────────────────────────

#[test]
fn first_kill_scores_base() {
    let mut w = make_world();
    assert_eq!(register_kill(&mut w, 15), 15);
    assert_eq!(w.state.score, 15);
    assert_eq!(w.state.combo_counter, 1);
    assert_eq!(w.state.combo_timer, 120);
}

#[test]
fn combo_three_fast_kill_awards_eighty() {
    let mut w = make_world();
    w.state.combo_counter = 3;
    assert_eq!(register_kill(&mut w, 20), 80);
    assert_eq!(w.state.score, 80);
    assert_eq!(w.state.combo_counter, 4);
}

#[test]
fn shake_grows_with_combo_and_caps() {
    let mut w = make_world();
    register_kill(&mut w, 10);
    assert_relative_eq!(w.state.screen_shake, 7.0);
    register_kill(&mut w, 10);
    assert_relative_eq!(w.state.screen_shake, 9.0);

    w.state.combo_counter = 50;
    register_kill(&mut w, 10);
    assert_relative_eq!(w.state.screen_shake, 20.0);
}

// ── countdown ─────────────────────────────────────────────────────────────────

#[test]
fn shake_decays_to_zero_and_stays() {
    let mut w = make_world();
    w.state.screen_shake = 1.2;
    countdown(&mut w);
    assert_relative_eq!(w.state.screen_shake, 0.7);
    countdown(&mut w);
    countdown(&mut w);
    assert_eq!(w.state.screen_shake, 0.0);
    countdown(&mut w);
    assert_eq!(w.state.screen_shake, 0.0);
}

#[test]
fn combo_counter_resets_the_tick_after_timer_hits_zero() {
    let mut w = make_world();
    w.state.combo_counter = 5;
    w.state.combo_timer = 2;
    countdown(&mut w);
    assert_eq!(w.state.combo_counter, 5);
    countdown(&mut w);
    assert_eq!(w.state.combo_timer, 0);
    assert_eq!(w.state.combo_counter, 5);
    countdown(&mut w);
    assert_eq!(w.state.combo_timer, 0);
    assert_eq!(w.state.combo_counter, 0);
}

#[test]
fn cooldown_restores_shooting() {
    let mut w = make_world();
    assert!(try_fire(&mut w));
    assert!(!try_fire(&mut w));
    for _ in 0..14 {
        countdown(&mut w);
        assert!(!w.state.shot.can_shoot);
    }
    countdown(&mut w);
    assert!(w.state.shot.can_shoot);
    assert!(try_fire(&mut w));
    assert_eq!(w.bullets.len(), 2);
}

#[test]
fn try_fire_places_bullet_at_muzzle() {
    let mut w = make_world();
    try_fire(&mut w);
    assert_eq!(w.bullets, vec![Bullet { x: 400.0, y: 525.0, alive: true }]);
    assert_eq!(w.events, vec![GameEvent::GunFired]);
    assert_eq!(w.state.shot.frames_since_last_shot, 0);
}

// ── power-up ──────────────────────────────────────────────────────────────────

#[test]
fn activation_sets_timer_and_cooldown() {
    let mut w = make_world();
    assert!(activate_power_up(&mut w));
    assert!(w.player.power_up_active);
    assert_eq!(w.state.power_up_timer, 300);
    assert_eq!(w.state.shot.cooldown_frames, 5);
}

#[test]
fn activation_while_active_is_a_no_op() {
    let mut w = make_world();
    activate_power_up(&mut w);
    countdown(&mut w);
    assert!(!activate_power_up(&mut w));
    assert_eq!(w.state.power_up_timer, 299);
}

#[test]
fn power_up_expires_after_duration() {
    let mut w = make_world();
    activate_power_up(&mut w);
    for _ in 0..299 {
        countdown(&mut w);
    }
    assert!(w.player.power_up_active);
    countdown(&mut w);
    assert!(!w.player.power_up_active);
    assert_eq!(w.state.power_up_timer, 0);
    assert_eq!(w.state.shot.cooldown_frames, 15);
}
