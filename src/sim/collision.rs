//! Axis-aligned hitboxes
//!
//! Pure geometry: the resolution pass in `tick` decides what an overlap
//! means. The player box is inset from the sprite to keep collisions
//! forgiving; score items shrink a further step so they feel generous to
//! collect.

use super::state::{Entity, EntityKind};
use crate::consts::*;

/// Axis-aligned rectangle, top-left origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Standard AABB overlap test (exclusive edges)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Rect {
        Rect {
            x: self.x + amount,
            y: self.y + amount,
            w: self.w - 2.0 * amount,
            h: self.h - 2.0 * amount,
        }
    }
}

/// The avatar's hitbox for a given y position
pub fn player_hitbox(player_y: f32) -> Rect {
    Rect {
        x: PLAYER_X + PLAYER_HITBOX_INSET_X,
        y: player_y - PLAYER_HEIGHT / 2.0 + PLAYER_HITBOX_INSET_TOP,
        w: PLAYER_WIDTH - 2.0 * PLAYER_HITBOX_INSET_X,
        h: PLAYER_HEIGHT - PLAYER_HITBOX_INSET_TOP - PLAYER_HITBOX_INSET_BOTTOM,
    }
}

/// An entity's hitbox; center-anchored, score items get the extra inset
pub fn entity_hitbox(entity: &Entity) -> Rect {
    let rect = Rect {
        x: entity.pos.x - entity.size.x / 2.0,
        y: entity.pos.y - entity.size.y / 2.0,
        w: entity.size.x,
        h: entity.size.y,
    };
    match entity.kind {
        EntityKind::ScoreItem(_) => rect.inset(SCORE_ITEM_HITBOX_INSET),
        _ => rect,
    }
}
