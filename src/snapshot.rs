//! Read-only view of a world for the rendering collaborator.

use crate::entities::{ColorTag, GameMode, GameWorld};

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub power_up_active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnemyView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: ColorTag,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    pub color: ColorTag,
    /// 1.0 when freshly spawned, fading to 0.0 at expiry.
    pub opacity: f32,
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSnapshot {
    pub width: f32,
    pub height: f32,
    pub player: PlayerView,
    pub bullets: Vec<(f32, f32)>,
    pub enemies: Vec<EnemyView>,
    pub power_ups: Vec<(f32, f32)>,
    pub particles: Vec<ParticleView>,
    pub stars: Vec<(f32, f32)>,
    pub score: u32,
    pub combo: u32,
    /// Combo is high enough for the red playfield.
    pub frenzy: bool,
    pub screen_shake: f32,
    pub mode: GameMode,
    /// Set once the run has ended.
    pub final_score: Option<u32>,
}

pub fn snapshot(world: &GameWorld) -> RenderSnapshot {
    let full_life = world.config.particle_lifetime.max(1) as f32;

    RenderSnapshot {
        width: world.viewport.width,
        height: world.viewport.height,
        player: PlayerView {
            x: world.player.x,
            y: world.player.y,
            power_up_active: world.player.power_up_active,
        },
        bullets: world.bullets.iter().map(|b| (b.x, b.y)).collect(),
        enemies: world
            .enemies
            .iter()
            .map(|e| EnemyView {
                x: e.x,
                y: e.y,
                size: e.size,
                color: e.color,
            })
            .collect(),
        power_ups: world.power_ups.iter().map(|p| (p.x, p.y)).collect(),
        particles: world
            .particles
            .iter()
            .map(|p| ParticleView {
                x: p.x,
                y: p.y,
                color: p.color,
                opacity: (p.lifetime as f32 / full_life).clamp(0.0, 1.0),
            })
            .collect(),
        stars: world.stars.iter().map(|s| (s.x, s.y)).collect(),
        score: world.state.score,
        combo: world.state.combo_counter,
        frenzy: world.state.combo_counter >= world.config.frenzy_combo,
        screen_shake: world.state.screen_shake,
        mode: world.state.mode,
        final_score: match world.state.mode {
            GameMode::GameOver => Some(world.state.score),
            GameMode::Playing => None,
        },
    }
}
