//! All game entity types — pure data, no logic.

use crate::config::GameConfig;

// ── Enemy variants ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    /// Drops straight down at cruising speed.
    Straight,
    /// Small and twice as fast.
    Fast,
    /// Weaves left and right around its spawn column as it descends.
    Weaver,
}

/// Colour tag handed to the renderer; the core never interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTag {
    Red,
    Orange,
    Purple,
}

/// Fixed per-kind stats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnemyStats {
    pub speed: f32,
    pub size: f32,
    pub base_score: u32,
    pub color: ColorTag,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Straight, EnemyKind::Fast, EnemyKind::Weaver];

    pub fn stats(self) -> EnemyStats {
        match self {
            EnemyKind::Straight => EnemyStats {
                speed: 3.0,
                size: 40.0,
                base_score: 10,
                color: ColorTag::Red,
            },
            EnemyKind::Fast => EnemyStats {
                speed: 6.0,
                size: 30.0,
                base_score: 20,
                color: ColorTag::Orange,
            },
            EnemyKind::Weaver => EnemyStats {
                speed: 3.0,
                size: 40.0,
                base_score: 15,
                color: ColorTag::Purple,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    Playing,
    GameOver,
}

/// Fire-and-forget signals for the audio collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    GunFired,
    EnemyHit,
    PowerUpCollected,
}

// ── Projectiles & pickups ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub alive: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub alive: bool,
}

// ── Effects ───────────────────────────────────────────────────────────────────

/// A spark thrown off a destroyed enemy.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Remaining ticks before the particle is pruned.
    pub lifetime: i32,
    pub color: ColorTag,
}

/// Background star. Decorative only, never collides.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub power_up_active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
    pub speed: f32,
    pub size: f32,
    pub color: ColorTag,
    pub base_score: u32,
    pub alive: bool,
    /// Oscillation origin; only weavers carry one.
    pub start_x: Option<f32>,
}

// ── Game state ────────────────────────────────────────────────────────────────

/// Shot gating: one bullet, then `cooldown_frames` ticks of silence.
#[derive(Clone, Debug, PartialEq)]
pub struct ShotCooldown {
    pub can_shoot: bool,
    pub frames_since_last_shot: u32,
    pub cooldown_frames: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub score: u32,
    pub combo_counter: u32,
    /// Ticks left in the current combo window.
    pub combo_timer: u32,
    pub screen_shake: f32,
    pub shot: ShotCooldown,
    /// Ticks left on the active power-up; 0 when none is active.
    pub power_up_timer: u32,
    pub mode: GameMode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SpawnerState {
    pub frames_since_last_enemy: u32,
    pub spawn_interval: u32,
}

/// Playfield bounds in world units. Only ever built through
/// `compute::init_world` / `compute::resize`, which validate them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

// ── Master world ──────────────────────────────────────────────────────────────

/// The entire simulation.  Cloneable so `compute::tick` can return a new
/// copy without mutating the caller's world.
#[derive(Clone, Debug)]
pub struct GameWorld {
    pub config: GameConfig,
    pub viewport: Viewport,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub power_ups: Vec<PowerUp>,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    pub state: GameState,
    pub spawner: SpawnerState,
    /// Ticks simulated since the session started.
    pub frame: u64,
    /// Events raised during the most recent tick.
    pub events: Vec<GameEvent>,
}

impl GameWorld {
    /// Hand this tick's events to the audio collaborator.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
