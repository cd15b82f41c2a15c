//! Tuning table.
//!
//! Every number the simulation uses lives here so a run can be re-tuned
//! from a TOML file without touching code.  Missing keys fall back to the
//! defaults below.

use serde::{Deserialize, Serialize};

use crate::entities::Viewport;
use crate::error::GameError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Player ───────────────────────────────────────────────────────────────
    /// Horizontal step per tick while a direction is held.
    pub player_speed: f32,
    /// Half the player's width; x is clamped to [this, width - this].
    pub player_half_width: f32,
    /// Distance from the bottom edge to the player's row.
    pub player_row_offset: f32,
    /// Player radius used for enemy contact.
    pub player_hit_radius: f32,

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    /// Bullets leave the ship this far above the player's centre.
    pub muzzle_offset: f32,
    pub shoot_cooldown_frames: u32,
    pub powered_cooldown_frames: u32,

    // ── Spawning ─────────────────────────────────────────────────────────────
    pub spawn_interval_start: u32,
    pub spawn_interval_floor: u32,
    /// Enemies spawn with x in [margin, width - margin].
    pub spawn_margin: f32,
    pub spawn_y: f32,

    // ── Weaver motion ────────────────────────────────────────────────────────
    pub weaver_amplitude: f32,
    pub weaver_wavelength: f32,

    // ── Power-ups ────────────────────────────────────────────────────────────
    pub power_up_speed: f32,
    pub power_up_drop_chance: f64,
    pub power_up_pickup_radius: f32,
    pub power_up_duration: u32,

    // ── Combo & shake ────────────────────────────────────────────────────────
    pub combo_window: u32,
    pub shake_base: f32,
    pub shake_per_combo: f32,
    pub shake_max: f32,
    pub shake_decay: f32,
    /// Combo at which the playfield turns red.
    pub frenzy_combo: u32,

    // ── Particles ────────────────────────────────────────────────────────────
    pub particles_per_kill: usize,
    pub particle_speed_min: f32,
    pub particle_speed_max: f32,
    pub particle_lifetime: i32,

    // ── Starfield ────────────────────────────────────────────────────────────
    pub star_count: usize,
    pub star_speed_min: f32,
    pub star_speed_max: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: 7.0,
            player_half_width: 25.0,
            player_row_offset: 50.0,
            player_hit_radius: 25.0,

            bullet_speed: 15.0,
            bullet_radius: 4.0,
            muzzle_offset: 25.0,
            shoot_cooldown_frames: 15,
            powered_cooldown_frames: 5,

            spawn_interval_start: 90,
            spawn_interval_floor: 40,
            spawn_margin: 20.0,
            spawn_y: -20.0,

            weaver_amplitude: 100.0,
            weaver_wavelength: 50.0,

            power_up_speed: 2.0,
            power_up_drop_chance: 0.1,
            power_up_pickup_radius: 35.0,
            power_up_duration: 300,

            combo_window: 120,
            shake_base: 5.0,
            shake_per_combo: 2.0,
            shake_max: 20.0,
            shake_decay: 0.5,
            frenzy_combo: 5,

            particles_per_kill: 5,
            particle_speed_min: 2.0,
            particle_speed_max: 5.0,
            particle_lifetime: 30,

            star_count: 100,
            star_speed_min: 1.0,
            star_speed_max: 3.0,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> GameError {
    GameError::InvalidConfig {
        field,
        reason: reason.into(),
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), GameError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a positive number, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), GameError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be >= 0, got {value}")))
    }
}

fn non_zero(field: &'static str, value: u32) -> Result<(), GameError> {
    if value > 0 {
        Ok(())
    } else {
        Err(invalid(field, "must be at least 1"))
    }
}

impl GameConfig {
    /// Load a config from a TOML file.  The result is validated.
    pub fn load_from_file(path: &str) -> Result<Self, GameError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        log::info!("Loaded config from {}", path);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, GameError> {
        let config: Self = toml::from_str(contents).map_err(|e| GameError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, GameError> {
        toml::to_string(self).map_err(|e| GameError::Parse(e.to_string()))
    }

    /// Reject values that would break the per-tick invariants
    /// (e.g. a bullet that does not rise, a floor above the start interval).
    pub fn validate(&self) -> Result<(), GameError> {
        positive("player_speed", self.player_speed)?;
        positive("player_half_width", self.player_half_width)?;
        positive("player_row_offset", self.player_row_offset)?;
        non_negative("player_hit_radius", self.player_hit_radius)?;

        positive("bullet_speed", self.bullet_speed)?;
        non_negative("bullet_radius", self.bullet_radius)?;
        non_negative("muzzle_offset", self.muzzle_offset)?;
        non_zero("shoot_cooldown_frames", self.shoot_cooldown_frames)?;
        non_zero("powered_cooldown_frames", self.powered_cooldown_frames)?;

        non_zero("spawn_interval_floor", self.spawn_interval_floor)?;
        if self.spawn_interval_floor > self.spawn_interval_start {
            return Err(invalid(
                "spawn_interval_floor",
                format!(
                    "floor {} is above the start interval {}",
                    self.spawn_interval_floor, self.spawn_interval_start
                ),
            ));
        }
        non_negative("spawn_margin", self.spawn_margin)?;
        if !self.spawn_y.is_finite() {
            return Err(invalid("spawn_y", "must be finite"));
        }

        non_negative("weaver_amplitude", self.weaver_amplitude)?;
        positive("weaver_wavelength", self.weaver_wavelength)?;

        positive("power_up_speed", self.power_up_speed)?;
        if !(0.0..=1.0).contains(&self.power_up_drop_chance) {
            return Err(invalid(
                "power_up_drop_chance",
                format!("must be within [0, 1], got {}", self.power_up_drop_chance),
            ));
        }
        non_negative("power_up_pickup_radius", self.power_up_pickup_radius)?;
        non_zero("power_up_duration", self.power_up_duration)?;

        non_zero("combo_window", self.combo_window)?;
        non_negative("shake_base", self.shake_base)?;
        non_negative("shake_per_combo", self.shake_per_combo)?;
        non_negative("shake_max", self.shake_max)?;
        positive("shake_decay", self.shake_decay)?;
        non_zero("frenzy_combo", self.frenzy_combo)?;

        non_negative("particle_speed_min", self.particle_speed_min)?;
        non_negative("particle_speed_max", self.particle_speed_max)?;
        if self.particle_speed_min > self.particle_speed_max {
            return Err(invalid("particle_speed_min", "is above particle_speed_max"));
        }
        if self.particle_lifetime <= 0 {
            return Err(invalid("particle_lifetime", "must be at least 1"));
        }

        positive("star_speed_min", self.star_speed_min)?;
        positive("star_speed_max", self.star_speed_max)?;
        if self.star_speed_min > self.star_speed_max {
            return Err(invalid("star_speed_min", "is above star_speed_max"));
        }

        Ok(())
    }

    /// Check that a playfield can hold the player and the spawn band.
    pub fn viewport(&self, width: f32, height: f32) -> Result<Viewport, GameError> {
        let min_width = 2.0 * self.player_half_width.max(self.spawn_margin);
        let fits = width.is_finite()
            && height.is_finite()
            && width >= min_width
            && height > self.player_row_offset;
        if fits {
            Ok(Viewport { width, height })
        } else {
            Err(GameError::InvalidViewport { width, height })
        }
    }
}
