use star_barrage::config::GameConfig;
use star_barrage::error::GameError;

#[test]
fn defaults_are_valid() {
    assert!(GameConfig::default().validate().is_ok());
}

#[test]
fn partial_toml_overrides_defaults() {
    let config = GameConfig::from_toml_str(
        r#"
        bullet_speed = 10.0
        spawn_interval_floor = 30
        star_count = 0
        "#,
    )
    .unwrap();
    assert_eq!(config.bullet_speed, 10.0);
    assert_eq!(config.spawn_interval_floor, 30);
    assert_eq!(config.star_count, 0);
    assert_eq!(config.spawn_interval_start, 90);
    assert_eq!(config.combo_window, 120);
}

#[test]
fn serialized_defaults_load_back() {
    let text = GameConfig::default().to_toml_string().unwrap();
    assert_eq!(GameConfig::from_toml_str(&text).unwrap(), GameConfig::default());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let result = GameConfig::from_toml_str("bullet_speed = \"fast\"");
    assert!(matches!(result, Err(GameError::Parse(_))));
}

#[test]
fn floor_above_start_is_rejected() {
    let result = GameConfig::from_toml_str("spawn_interval_floor = 120");
    assert!(matches!(
        result,
        Err(GameError::InvalidConfig { field: "spawn_interval_floor", .. })
    ));
}

#[test]
fn out_of_range_values_are_rejected() {
    let cases: Vec<(&str, GameConfig)> = vec![
        ("bullet_speed", GameConfig { bullet_speed: -15.0, ..GameConfig::default() }),
        ("player_speed", GameConfig { player_speed: f32::NAN, ..GameConfig::default() }),
        ("power_up_drop_chance", GameConfig { power_up_drop_chance: 1.5, ..GameConfig::default() }),
        ("shoot_cooldown_frames", GameConfig { shoot_cooldown_frames: 0, ..GameConfig::default() }),
        ("particle_lifetime", GameConfig { particle_lifetime: 0, ..GameConfig::default() }),
        ("particle_speed_min", GameConfig { particle_speed_min: 9.0, ..GameConfig::default() }),
        ("star_speed_min", GameConfig { star_speed_min: 0.0, ..GameConfig::default() }),
        ("frenzy_combo", GameConfig { frenzy_combo: 0, ..GameConfig::default() }),
    ];
    for (expected, config) in cases {
        match config.validate() {
            Err(GameError::InvalidConfig { field, .. }) => assert_eq!(field, expected),
            other => panic!("{} should be rejected, got {:?}", expected, other),
        }
    }
}

#[test]
fn viewport_must_fit_player_and_spawn_band() {
    let config = GameConfig::default();
    assert!(config.viewport(50.0, 51.0).is_ok());
    assert!(config.viewport(49.9, 600.0).is_err());
    assert!(config.viewport(800.0, 50.0).is_err());
    assert!(config.viewport(f32::INFINITY, 600.0).is_err());
}

#[test]
fn missing_config_file_is_an_io_error() {
    let result = GameConfig::load_from_file("/nonexistent/star_barrage.toml");
    assert!(matches!(result, Err(GameError::Io(_))));
}

#[test]
fn error_messages_name_the_problem() {
    let err = GameConfig {
        bullet_speed: 0.0,
        ..GameConfig::default()
    }
    .validate()
    .unwrap_err();
    assert!(err.to_string().contains("bullet_speed"));
}
