//! Mazu Rush entry point
//!
//! Native builds run a headless self-play demo of the sim; the browser
//! shell drives the library directly through wasm-bindgen.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    use mazu_rush::HighScores;
    use mazu_rush::consts::*;
    use mazu_rush::platform;
    use mazu_rush::sim::{
        EntityKind, GameEvent, GamePhase, GameState, TickInput, tick, try_dash,
    };

    let seed = platform::now_ms() as u64;
    log::info!("Mazu Rush (native demo) starting with seed {}", seed);

    let mut state = GameState::new(seed, 1280.0, 720.0);
    state.start();

    // Synthetic 60 Hz clock so the demo is deterministic per seed
    let mut now_ms = 0.0_f64;
    let frame_ms = 1000.0 / 60.0;

    let max_ticks = 20_000;
    for _ in 0..max_ticks {
        now_ms += frame_ms;

        let target_y = pick_target(&state);
        tick(&mut state, &TickInput { target_y }, now_ms);

        // Dash whenever it is off cooldown and something is closing in
        if nearest_obstacle_x(&state).is_some_and(|x| x < 400.0) {
            try_dash(&mut state, now_ms);
        }

        for event in &state.events {
            match event {
                GameEvent::FeverStarted => log::info!("fever started"),
                GameEvent::ObstacleSmashed => log::info!("smashed an obstacle"),
                GameEvent::GameOver => log::info!("game over at score {}", state.score),
                _ => {}
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "Run finished: score {} after {} ticks (speed {:.1})",
        state.score, state.tick_count, state.speed
    );

    let mut scores = HighScores::load();
    if let Some(rank) = scores.add_score(state.score, platform::now_ms()) {
        println!("New high score, rank {}", rank);
    }
    scores.save();

    /// Steer toward the nearest collectible, dodging obstacles on the way
    fn pick_target(state: &GameState) -> Option<f32> {
        let ahead = state
            .entities
            .iter()
            .filter(|e| e.pos.x > PLAYER_X)
            .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))?;

        match ahead.kind {
            EntityKind::Obstacle(_) => {
                // Dodge to whichever side of the obstacle has more room
                let (top, bottom) = state.band();
                let offset = ahead.size.y / 2.0 + PLAYER_HEIGHT;
                if ahead.pos.y - top > bottom - ahead.pos.y {
                    Some(ahead.pos.y - offset)
                } else {
                    Some(ahead.pos.y + offset)
                }
            }
            _ => Some(ahead.pos.y),
        }
    }

    fn nearest_obstacle_x(state: &GameState) -> Option<f32> {
        state
            .entities
            .iter()
            .filter(|e| matches!(e.kind, EntityKind::Obstacle(_)) && e.pos.x > PLAYER_X)
            .map(|e| e.pos.x)
            .min_by(f32::total_cmp)
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is the library's wasm_init; this satisfies the compiler
}
