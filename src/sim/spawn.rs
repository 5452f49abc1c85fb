//! Entity spawner
//!
//! Produces at most one entity per invocation, at the right edge of the
//! world. Category odds in normal mode: 5% fever item, 5% supply, 50%
//! score item, 40% obstacle. Fever mode spawns believers exclusively.

use glam::Vec2;
use rand::Rng;

use super::state::{Entity, EntityKind, GameState, ObstacleKind, ScoreItemKind, SupplyKind};
use crate::consts::*;

/// Bounding box per entity kind
fn size_for(kind: EntityKind) -> Vec2 {
    match kind {
        EntityKind::Obstacle(ObstacleKind::Firecracker) => Vec2::new(40.0, 70.0),
        EntityKind::Obstacle(ObstacleKind::Roadblock) => Vec2::new(60.0, 40.0),
        EntityKind::ScoreItem(_) => Vec2::new(40.0, 40.0),
        EntityKind::FeverItem => Vec2::new(60.0, 60.0),
        EntityKind::SupplyItem(_) => Vec2::new(50.0, 50.0),
        // Wider and flatter: a prostrating believer
        EntityKind::Believer => Vec2::new(80.0, 40.0),
    }
}

/// Horizontal spawn position for a viewport width
///
/// Narrow viewports spawn as if at least [`MIN_SPAWN_WIDTH`] wide, so
/// reaction distance is the same in portrait and landscape.
pub fn spawn_x(viewport_w: f32) -> f32 {
    viewport_w.max(MIN_SPAWN_WIDTH) + SPAWN_MARGIN
}

/// Roll a normal-mode entity kind from the category partition
fn roll_kind<R: Rng>(rng: &mut R) -> EntityKind {
    let roll: f32 = rng.random();
    if roll < 0.05 {
        EntityKind::FeverItem
    } else if roll < 0.10 {
        let sub: f32 = rng.random();
        EntityKind::SupplyItem(if sub < 0.33 {
            SupplyKind::RiceBall
        } else if sub < 0.66 {
            SupplyKind::Drink
        } else {
            SupplyKind::Watermelon
        })
    } else if roll < 0.60 {
        let sub: f32 = rng.random();
        EntityKind::ScoreItem(if sub < 0.33 {
            ScoreItemKind::Lantern
        } else if sub < 0.66 {
            ScoreItemKind::Peach
        } else {
            ScoreItemKind::Envelope
        })
    } else if rng.random_bool(0.5) {
        EntityKind::Obstacle(ObstacleKind::Firecracker)
    } else {
        EntityKind::Obstacle(ObstacleKind::Roadblock)
    }
}

/// Spawn one entity at the right edge, inside the vertical play band
pub fn spawn_entity(state: &mut GameState) {
    let kind = if state.modifiers.fever_active {
        EntityKind::Believer
    } else {
        roll_kind(&mut state.rng)
    };

    let (top, bottom) = state.band();
    let y = state.rng.random_range(top..=bottom);
    let x = spawn_x(state.viewport.x);

    let id = state.next_entity_id();
    state.entities.push(Entity {
        id,
        kind,
        pos: Vec2::new(x, y),
        size: size_for(kind),
    });
}
