//! Timed modifier state machines: dash and fever
//!
//! Both run on wall-clock milliseconds supplied by the driver, so their
//! durations hold under variable frame rate. Dash is externally triggered
//! and cooldown-gated; fever is entered only by collecting a fever item.
//!
//! The two flags are independent and may overlap; precedence for the speed
//! multiplier lives in [`super::progression::target_speed`] (dash wins).

use glam::Vec2;

use super::particles;
use super::state::{GameEvent, GamePhase, GameState, ParticleKind};
use crate::consts::*;

/// Attempt to activate dash at `now_ms`
///
/// Fails (no state change) unless the session is PLAYING, dash is idle,
/// and the cooldown since the previous activation has fully elapsed.
pub fn try_dash(state: &mut GameState, now_ms: f64) -> bool {
    if state.phase != GamePhase::Playing || state.modifiers.dash_active {
        return false;
    }
    if let Some(last) = state.modifiers.last_dash_ms
        && now_ms - last <= DASH_COOLDOWN_MS
    {
        return false;
    }

    state.modifiers.dash_active = true;
    state.modifiers.dash_until_ms = now_ms + DASH_DURATION_MS;
    state.modifiers.last_dash_ms = Some(now_ms);
    state.events.push(GameEvent::DashStarted);
    particles::emit(
        state,
        Vec2::new(PLAYER_X, state.player.pos),
        COLOR_WHITE,
        20,
        ParticleKind::Explosion,
    );
    log::debug!("dash activated until {:.0}ms", state.modifiers.dash_until_ms);
    true
}

/// Enter fever mode (collision-triggered only)
pub fn enter_fever(state: &mut GameState, now_ms: f64) {
    state.modifiers.fever_active = true;
    state.modifiers.fever_until_ms = now_ms + FEVER_DURATION_MS;
    state.events.push(GameEvent::FeverStarted);
    log::info!("fever mode until {:.0}ms", state.modifiers.fever_until_ms);
}

/// Expire any modifier whose end timestamp has passed
pub fn advance(state: &mut GameState, now_ms: f64) {
    if state.modifiers.dash_active && now_ms > state.modifiers.dash_until_ms {
        state.modifiers.dash_active = false;
        log::debug!("dash ended");
    }
    if state.modifiers.fever_active && now_ms > state.modifiers.fever_until_ms {
        state.modifiers.fever_active = false;
        state.events.push(GameEvent::FeverEnded);
        log::info!("fever mode ended");
    }
}

/// Fraction of the dash cooldown still remaining, in [0, 1]
///
/// For the host's cooldown dial. A zero-duration cooldown configuration
/// reads as fully elapsed rather than producing a non-finite ratio.
pub fn dash_cooldown_remaining(state: &GameState, now_ms: f64) -> f32 {
    let Some(last) = state.modifiers.last_dash_ms else {
        return 0.0;
    };
    if DASH_COOLDOWN_MS <= 0.0 {
        return 0.0;
    }
    let remaining = (last + DASH_COOLDOWN_MS - now_ms) / DASH_COOLDOWN_MS;
    remaining.clamp(0.0, 1.0) as f32
}
