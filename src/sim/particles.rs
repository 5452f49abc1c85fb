//! Particle system
//!
//! Ephemeral decoration: bursts are emitted by collision and power-up
//! events, integrate their velocity each tick, and die when life runs out.
//! The pool is capped; the oldest particles make room for new bursts.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Particle, ParticleKind};
use crate::consts::*;

/// Append `count` particles at `pos` with family-dependent rolls
pub fn emit(state: &mut GameState, pos: Vec2, color: u32, count: usize, kind: ParticleKind) {
    for _ in 0..count {
        if state.particles.len() >= MAX_PARTICLES {
            state.particles.remove(0);
        }
        let (vel, size, life) = match kind {
            ParticleKind::Explosion => {
                let vx = state.rng.random_range(-5.0..5.0);
                let vy = state.rng.random_range(-5.0..5.0);
                (Vec2::new(vx, vy), 4.0, 1.0)
            }
            ParticleKind::Sparkle => {
                let vx = state.rng.random_range(-2.5..2.5);
                let vy = state.rng.random_range(-2.5..2.5);
                let size = state.rng.random_range(2.0..5.0);
                (Vec2::new(vx, vy), size, 1.0)
            }
            ParticleKind::Smoke => {
                let vx = state.rng.random_range(-1.0..1.0);
                let vy = state.rng.random_range(-2.5..-0.5);
                let size = state.rng.random_range(5.0..10.0);
                (Vec2::new(vx, vy), size, 0.8)
            }
        };
        state.particles.push(Particle {
            pos,
            vel,
            life,
            color,
            size,
        });
    }
}

/// Integrate and cull the particle pool for one tick
pub fn advance(state: &mut GameState) {
    for particle in &mut state.particles {
        particle.pos += particle.vel;
        particle.life -= PARTICLE_FADE_PER_TICK;
    }
    state.particles.retain(|p| p.life > 0.0);
}
