//! Per-tick frame driver
//!
//! Order within a tick: expire modifiers, integrate player motion, smooth
//! speed, maybe spawn, advance + resolve entities, advance particles. A
//! fatal obstacle hit short-circuits the rest of the tick.
//!
//! Entity resolution scans back-to-front with `swap_remove`: indices above
//! the cursor are already visited, and the element swapped in from the
//! tail was visited earlier, so every entity is resolved at most once.

use super::state::{Entity, EntityKind, GameEvent, GamePhase, GameState, ParticleKind, ScoreItemKind, SupplyKind};
use super::{collision, modifiers, particles, player, progression, spawn};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Target y from pointer/touch/key normalization; None keeps the last
    pub target_y: Option<f32>,
}

/// Advance the session by one tick at wall-clock `now_ms`
///
/// A no-op outside the PLAYING phase, so START and GAME_OVER screens can
/// keep calling it safely.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    state.events.clear();
    if state.phase != GamePhase::Playing {
        return;
    }
    state.tick_count += 1;

    if let Some(target) = input.target_y {
        player::set_target(state, target);
    }

    modifiers::advance(state, now_ms);
    player::integrate(state);
    player::update_ghosts(state);
    progression::update_speed(state);

    state.spawn_timer -= 1.0;
    if state.spawn_timer <= 0.0 {
        spawn::spawn_entity(state);
        state.spawn_timer = progression::spawn_interval(state);
    }

    advance_entities(state, now_ms);
    if state.phase == GamePhase::GameOver {
        // Terminal short-circuit: nothing else runs this tick
        return;
    }

    particles::advance(state);
}

/// Scroll, collide, and resolve every live entity once
fn advance_entities(state: &mut GameState, now_ms: f64) {
    let player_box = collision::player_hitbox(state.player.pos);
    let scroll = state.speed;

    let mut i = state.entities.len();
    while i > 0 {
        i -= 1;
        state.entities[i].pos.x -= scroll;

        let hitbox = collision::entity_hitbox(&state.entities[i]);
        if player_box.overlaps(&hitbox) {
            let entity = state.entities.swap_remove(i);
            if resolve_hit(state, &entity, now_ms) {
                return;
            }
        } else if state.entities[i].off_screen() {
            // Drifted past the cull line: no score, no particles
            state.entities.swap_remove(i);
        }
    }
}

/// Apply one entity's collision effect; returns true if the run ended
fn resolve_hit(state: &mut GameState, entity: &Entity, now_ms: f64) -> bool {
    match entity.kind {
        EntityKind::Obstacle(_) => {
            if state.is_invulnerable() {
                particles::emit(state, entity.pos, COLOR_DEBRIS, 8, ParticleKind::Explosion);
                particles::emit(state, entity.pos, COLOR_LANTERN, 5, ParticleKind::Sparkle);
                state.events.push(GameEvent::ObstacleSmashed);
                if state.modifiers.dash_active {
                    state.score += DASH_SMASH_BONUS;
                }
                false
            } else {
                state.phase = GamePhase::GameOver;
                state.high_score = state.high_score.max(state.score);
                state.events.push(GameEvent::GameOver);
                log::info!(
                    "game over at score {} (best {})",
                    state.score,
                    state.high_score
                );
                true
            }
        }
        EntityKind::ScoreItem(sub) => {
            state.score += SCORE_ITEM;
            let color = match sub {
                ScoreItemKind::Lantern => COLOR_LANTERN,
                ScoreItemKind::Peach => COLOR_PEACH,
                ScoreItemKind::Envelope => COLOR_GOLD,
            };
            particles::emit(state, entity.pos, color, 8, ParticleKind::Sparkle);
            state.events.push(GameEvent::ScoreCollected);
            false
        }
        EntityKind::FeverItem => {
            modifiers::enter_fever(state, now_ms);
            particles::emit(state, entity.pos, COLOR_GOLD, 20, ParticleKind::Sparkle);
            false
        }
        EntityKind::SupplyItem(sub) => {
            state.score += SCORE_SUPPLY;
            progression::apply_breather(state);
            let color = match sub {
                SupplyKind::RiceBall => COLOR_WHITE,
                SupplyKind::Drink => COLOR_DRINK,
                SupplyKind::Watermelon => COLOR_WATERMELON,
            };
            particles::emit(state, entity.pos, color, 12, ParticleKind::Sparkle);
            state.events.push(GameEvent::SupplyCollected);
            false
        }
        EntityKind::Believer => {
            state.score += SCORE_BELIEVER;
            particles::emit(state, entity.pos, COLOR_WHITE, 5, ParticleKind::Sparkle);
            state.events.push(GameEvent::ScoreCollected);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::state::ObstacleKind;
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.start();
        state
    }

    /// An entity sitting right on the player's hitbox
    fn overlapping(state: &mut GameState, kind: EntityKind) -> u32 {
        let id = state.next_entity_id();
        let size = match kind {
            EntityKind::Believer => Vec2::new(80.0, 40.0),
            _ => Vec2::new(50.0, 50.0),
        };
        state.entities.push(Entity {
            id,
            kind,
            pos: Vec2::new(PLAYER_X + PLAYER_WIDTH / 2.0, state.player.pos),
            size,
        });
        id
    }

    #[test]
    fn obstacle_ends_the_run_and_banks_high_score() {
        let mut state = playing_state();
        state.score = 42;
        state.high_score = 30;
        overlapping(&mut state, EntityKind::Obstacle(ObstacleKind::Firecracker));

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.high_score, 42);
        assert!(state.events.contains(&GameEvent::GameOver));

        // A larger previous best survives
        let mut state = playing_state();
        state.score = 10;
        state.high_score = 99;
        overlapping(&mut state, EntityKind::Obstacle(ObstacleKind::Roadblock));
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.high_score, 99);
    }

    #[test]
    fn score_is_frozen_after_game_over() {
        let mut state = playing_state();
        state.score = 42;
        overlapping(&mut state, EntityKind::Obstacle(ObstacleKind::Firecracker));
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);

        let ticks = state.tick_count;
        for i in 0..100 {
            tick(&mut state, &TickInput::default(), i as f64 * 16.0);
        }
        assert_eq!(state.score, 42);
        assert_eq!(state.tick_count, ticks, "game-over ticks are no-ops");
    }

    #[test]
    fn dashing_smashes_obstacles_for_bonus() {
        let mut state = playing_state();
        assert!(modifiers::try_dash(&mut state, 0.0));
        overlapping(&mut state, EntityKind::Obstacle(ObstacleKind::Firecracker));

        tick(&mut state, &TickInput::default(), 10.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, DASH_SMASH_BONUS);
        assert!(state.events.contains(&GameEvent::ObstacleSmashed));
    }

    #[test]
    fn fever_smashes_without_bonus() {
        let mut state = playing_state();
        modifiers::enter_fever(&mut state, 0.0);
        overlapping(&mut state, EntityKind::Obstacle(ObstacleKind::Roadblock));

        tick(&mut state, &TickInput::default(), 10.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.events.contains(&GameEvent::ObstacleSmashed));
    }

    #[test]
    fn score_item_scores_once() {
        let mut state = playing_state();
        let id = overlapping(&mut state, EntityKind::ScoreItem(ScoreItemKind::Lantern));

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.score, SCORE_ITEM);
        assert!(state.entities.iter().all(|e| e.id != id));
        assert!(state.events.contains(&GameEvent::ScoreCollected));
    }

    #[test]
    fn each_overlapping_entity_resolves_exactly_once() {
        let mut state = playing_state();
        overlapping(&mut state, EntityKind::ScoreItem(ScoreItemKind::Peach));
        overlapping(&mut state, EntityKind::ScoreItem(ScoreItemKind::Envelope));
        overlapping(&mut state, EntityKind::Believer);

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.score, 2 * SCORE_ITEM + SCORE_BELIEVER);
        assert_eq!(
            state
                .events
                .iter()
                .filter(|e| **e == GameEvent::ScoreCollected)
                .count(),
            3
        );
    }

    #[test]
    fn fatal_hit_stops_the_pass() {
        let mut state = playing_state();
        // Score item first in the vec; the obstacle (scanned first,
        // back-to-front) ends the run before the item is reached.
        overlapping(&mut state, EntityKind::ScoreItem(ScoreItemKind::Lantern));
        overlapping(&mut state, EntityKind::Obstacle(ObstacleKind::Firecracker));

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.score, 0, "no scoring after the terminal transition");
        assert!(
            state
                .entities
                .iter()
                .any(|e| matches!(e.kind, EntityKind::ScoreItem(_))),
            "unreached entities stay put"
        );
    }

    #[test]
    fn fever_item_enters_fever() {
        let mut state = playing_state();
        overlapping(&mut state, EntityKind::FeverItem);

        tick(&mut state, &TickInput::default(), 1000.0);
        assert!(state.modifiers.fever_active);
        assert!(state.events.contains(&GameEvent::FeverStarted));
    }

    #[test]
    fn supply_item_slows_the_run() {
        let mut state = playing_state();
        state.speed = 8.0;
        overlapping(&mut state, EntityKind::SupplyItem(SupplyKind::Watermelon));

        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.score, SCORE_SUPPLY);
        assert!(state.speed < 8.0 - SUPPLY_SPEED_REDUCTION + 1.0);
        assert!(state.speed >= INITIAL_SPEED);
        assert!(state.events.contains(&GameEvent::SupplyCollected));
    }

    #[test]
    fn off_screen_entities_cull_silently() {
        let mut state = playing_state();
        let id = state.next_entity_id();
        state.entities.push(Entity {
            id,
            kind: EntityKind::ScoreItem(ScoreItemKind::Lantern),
            pos: Vec2::new(-200.0, 300.0),
            size: Vec2::new(40.0, 40.0),
        });

        tick(&mut state, &TickInput::default(), 0.0);
        assert!(state.entities.iter().all(|e| e.id != id));
        assert_eq!(state.score, 0);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn spawn_cadence_produces_entities() {
        let mut state = playing_state();
        for i in 0..200 {
            tick(&mut state, &TickInput::default(), i as f64 * 16.0);
            if state.phase != GamePhase::Playing {
                break;
            }
        }
        assert!(!state.entities.is_empty() || state.phase == GamePhase::GameOver);
        assert!(state.tick_count > 0);
    }

    #[test]
    fn score_never_decreases_over_a_run() {
        use rand::{Rng, SeedableRng};
        let mut state = GameState::new(77, 800.0, 600.0);
        state.start();
        let mut input_rng = rand_pcg::Pcg32::seed_from_u64(5);

        let mut prev_score = 0;
        let mut now_ms = 0.0;
        for _ in 0..5000 {
            now_ms += 1000.0 / 60.0;
            let target = input_rng.random_range(90.0..510.0);
            if input_rng.random_bool(0.01) {
                let _ = modifiers::try_dash(&mut state, now_ms);
            }
            tick(&mut state, &TickInput { target_y: Some(target) }, now_ms);
            assert!(state.score >= prev_score);
            prev_score = state.score;
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
    }

    #[test]
    fn start_phase_ticks_are_noops() {
        let mut state = GameState::new(1, 800.0, 600.0);
        tick(&mut state, &TickInput { target_y: Some(200.0) }, 0.0);
        assert_eq!(state.tick_count, 0);
        assert!(state.entities.is_empty());
    }
}
