//! Difficulty / progression tracker
//!
//! Scroll speed derives from accumulated score, clamped to
//! [INITIAL_SPEED, MAX_SPEED] *before* modifier multipliers apply, then
//! exponentially smoothed so threshold crossings and modifier toggles
//! never jolt.

use super::state::GameState;
use crate::consts::*;

/// Speed level: every [`SPEED_STEP_SCORE`] points raises the ceiling by one
pub fn speed_level(score: u64) -> u64 {
    score / SPEED_STEP_SCORE
}

/// Clamped base target speed for a score, before modifiers
pub fn base_target_speed(score: u64) -> f32 {
    (INITIAL_SPEED + speed_level(score) as f32).min(MAX_SPEED)
}

/// Target speed including the active modifier multiplier
///
/// Dash takes precedence over fever when both are active.
pub fn target_speed(state: &GameState) -> f32 {
    let base = base_target_speed(state.score);
    if state.modifiers.dash_active {
        base * DASH_SPEED_MULTIPLIER
    } else if state.modifiers.fever_active {
        base * FEVER_SPEED_MULTIPLIER
    } else {
        base
    }
}

/// One smoothing step of the displayed/used speed toward the target
pub fn update_speed(state: &mut GameState) {
    let target = target_speed(state);
    state.speed += (target - state.speed) * SPEED_SMOOTHING;
}

/// Supply-item breather: shave the smoothed speed, floored at the initial
pub fn apply_breather(state: &mut GameState) {
    state.speed = (state.speed - SUPPLY_SPEED_REDUCTION).max(INITIAL_SPEED);
}

/// Spawn interval in ticks for the current speed and modifiers
///
/// Denser while fever or dash runs; otherwise shrinks with speed down to a
/// floor so spawns never machine-gun.
pub fn spawn_interval(state: &GameState) -> f32 {
    if state.modifiers.fever_active || state.modifiers.dash_active {
        SPAWN_INTERVAL_RUSH
    } else {
        (SPAWN_INTERVAL_BASE - state.speed * 2.0).max(SPAWN_INTERVAL_MIN)
    }
}
