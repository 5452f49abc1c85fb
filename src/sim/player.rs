//! Player motion controller
//!
//! The avatar tracks the input target with a spring-damper approximation
//! rather than snapping, which gives the palanquin its weight. Dash does
//! not touch the spring at all; it only flags the modifier state and
//! samples ghost-trail snapshots for the renderer.

use glam::Vec2;

use super::state::{GameState, Ghost};
use crate::consts::*;

/// Set the target y position, clamped to the play band
pub fn set_target(state: &mut GameState, target: f32) {
    let (top, bottom) = state.band();
    state.player.target = target.clamp(top, bottom);
}

/// One spring-damper integration step toward the target
pub fn integrate(state: &mut GameState) {
    let player = &mut state.player;
    let displacement = player.target - player.pos;
    player.vel += displacement * MOVEMENT_STIFFNESS;
    player.vel *= MOVEMENT_DAMPING;
    player.pos += player.vel;
}

/// Decay the ghost trail and, while dashing, sample a new snapshot every
/// [`GHOST_SAMPLE_TICKS`] ticks
pub fn update_ghosts(state: &mut GameState) {
    for ghost in &mut state.ghosts {
        ghost.alpha -= GHOST_FADE_PER_TICK;
    }
    state.ghosts.retain(|g| g.alpha > 0.0);

    if state.modifiers.dash_active {
        if state.ghost_timer == 0 {
            state.ghosts.push(Ghost {
                pos: Vec2::new(PLAYER_X, state.player.pos),
                alpha: GHOST_START_ALPHA,
            });
            state.ghost_timer = GHOST_SAMPLE_TICKS;
        }
        state.ghost_timer -= 1;
    } else {
        state.ghost_timer = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn target_is_clamped_to_band() {
        let mut state = GameState::new(1, 800.0, 600.0);
        set_target(&mut state, -50.0);
        assert_eq!(state.player.target, 90.0);
        set_target(&mut state, 10_000.0);
        assert_eq!(state.player.target, 510.0);
        set_target(&mut state, 250.0);
        assert_eq!(state.player.target, 250.0);
    }

    #[test]
    fn spring_settles_on_target() {
        let mut state = GameState::new(1, 800.0, 600.0);
        set_target(&mut state, 450.0);
        for _ in 0..300 {
            integrate(&mut state);
        }
        assert!((state.player.pos - 450.0).abs() < 0.5);
        assert!(state.player.vel.abs() < 0.1);
    }

    #[test]
    fn ghosts_sample_while_dashing_and_fade_out() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.modifiers.dash_active = true;
        for _ in 0..9 {
            update_ghosts(&mut state);
        }
        // One sample every 3 ticks
        assert_eq!(state.ghosts.len(), 3);

        state.modifiers.dash_active = false;
        // 0.8 alpha / 0.05 per tick = 16 ticks to fade the newest
        for _ in 0..20 {
            update_ghosts(&mut state);
        }
        assert!(state.ghosts.is_empty());
    }

    proptest! {
        /// The spring never diverges for any reachable target
        #[test]
        fn spring_stays_bounded(target in 90.0_f32..510.0, start in 90.0_f32..510.0) {
            let mut state = GameState::new(1, 800.0, 600.0);
            state.player.pos = start;
            set_target(&mut state, target);
            for _ in 0..600 {
                integrate(&mut state);
                prop_assert!(state.player.pos.is_finite());
                prop_assert!(state.player.pos > -1000.0 && state.player.pos < 2000.0);
            }
            prop_assert!((state.player.pos - target).abs() < 1.0);
        }
    }
}
