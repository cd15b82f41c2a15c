use star_barrage::compute::{init_world, tick, TickInput};
use star_barrage::config::GameConfig;
use star_barrage::entities::*;
use star_barrage::snapshot::snapshot;
use star_barrage::spawner::make_enemy;

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_world() -> GameWorld {
    let config = GameConfig {
        star_count: 3,
        power_up_drop_chance: 0.0,
        ..GameConfig::default()
    };
    init_world(config, 800.0, 600.0, &mut StdRng::seed_from_u64(9)).unwrap()
}

#[test]
fn snapshot_mirrors_world() {
    let mut w = make_world();
    w.bullets.push(Bullet { x: 1.0, y: 2.0, alive: true });
    w.enemies.push(make_enemy(EnemyKind::Fast, 30.0, 40.0));
    w.power_ups.push(PowerUp { x: 5.0, y: 6.0, alive: true });
    w.state.score = 55;
    w.state.combo_counter = 2;

    let snap = snapshot(&w);
    assert_eq!((snap.width, snap.height), (800.0, 600.0));
    assert_eq!((snap.player.x, snap.player.y), (400.0, 550.0));
    assert_eq!(snap.bullets, vec![(1.0, 2.0)]);
    assert_eq!(snap.enemies.len(), 1);
    assert_eq!(snap.enemies[0].size, 30.0);
    assert_eq!(snap.enemies[0].color, ColorTag::Orange);
    assert_eq!(snap.power_ups, vec![(5.0, 6.0)]);
    assert_eq!(snap.stars.len(), 3);
    assert_eq!(snap.score, 55);
    assert_eq!(snap.combo, 2);
    assert!(!snap.frenzy);
    assert_eq!(snap.mode, GameMode::Playing);
    assert_eq!(snap.final_score, None);
}

#[test]
fn particle_opacity_fades_with_lifetime() {
    let mut w = make_world();
    w.enemies.push(make_enemy(EnemyKind::Straight, 100.0, 200.0));
    w.bullets.push(Bullet { x: 100.0, y: 218.0, alive: true });
    let mut rng = StdRng::seed_from_u64(9);
    w = tick(&w, &TickInput::default(), &mut rng);

    let fresh = snapshot(&w);
    assert_eq!(fresh.particles.len(), 5);
    assert!(fresh.particles.iter().all(|p| p.opacity == 1.0));

    for _ in 0..15 {
        w = tick(&w, &TickInput::default(), &mut rng);
    }
    let faded = snapshot(&w);
    assert_relative_eq!(faded.particles[0].opacity, 0.5);
}

#[test]
fn final_score_only_after_game_over() {
    let mut w = make_world();
    w.state.score = 120;
    w.enemies.push(make_enemy(EnemyKind::Straight, 400.0, 540.0));
    let w = tick(&w, &TickInput::default(), &mut StdRng::seed_from_u64(9));

    let snap = snapshot(&w);
    assert_eq!(snap.mode, GameMode::GameOver);
    assert_eq!(snap.final_score, Some(120));
}

#[test]
fn frenzy_flag_follows_combo_threshold() {
    let mut w = make_world();
    w.state.combo_counter = 4;
    assert!(!snapshot(&w).frenzy);
    w.state.combo_counter = 5;
    assert!(snapshot(&w).frenzy);
    w.state.combo_counter = 9;
    assert!(snapshot(&w).frenzy);
}

#[test]
fn fifth_chained_kill_turns_on_frenzy() {
    let mut w = make_world();
    let mut rng = StdRng::seed_from_u64(9);
    for i in 0..5 {
        let x = 100.0 + i as f32 * 100.0;
        w.enemies.push(make_enemy(EnemyKind::Straight, x, 200.0));
        w.bullets.push(Bullet { x, y: 218.0, alive: true });
        assert!(!snapshot(&w).frenzy);
        w = tick(&w, &TickInput::default(), &mut rng);
    }
    assert_eq!(w.state.combo_counter, 5);
    assert!(snapshot(&w).frenzy);
}
