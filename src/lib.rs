//! Mazu Rush - a palanquin procession runner
//!
//! Core modules:
//! - `sim`: frame-driven simulation (spawning, player motion, collisions,
//!   timed modifiers, particles, difficulty progression)
//! - `platform`: browser/native wall-clock abstraction
//! - `highscores`: leaderboard, persisted to LocalStorage on web
//! - `settings`: player preferences
//!
//! Rendering, audio and input normalization live in the host shell; the sim
//! exposes entity/particle lists, score, and a per-tick event feed for them.

pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::{QualityPreset, Settings};

/// Browser-side init: panic hook and console logger
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Mazu Rush library initialized");
}

/// Game tuning constants
pub mod consts {
    /// Avatar sprite bounds (world units = CSS pixels)
    pub const PLAYER_WIDTH: f32 = 80.0;
    pub const PLAYER_HEIGHT: f32 = 70.0;
    /// Fixed horizontal position of the avatar
    pub const PLAYER_X: f32 = 50.0;

    /// Player hitbox insets - forgiving, smaller than the sprite
    pub const PLAYER_HITBOX_INSET_X: f32 = 10.0;
    pub const PLAYER_HITBOX_INSET_TOP: f32 = 15.0;
    pub const PLAYER_HITBOX_INSET_BOTTOM: f32 = 5.0;
    /// Extra inset on score-item hitboxes (easier to collect than they look)
    pub const SCORE_ITEM_HITBOX_INSET: f32 = 5.0;

    /// Scroll speed range, world units per tick
    pub const INITIAL_SPEED: f32 = 3.0;
    pub const MAX_SPEED: f32 = 10.0;
    /// Speed ceiling rises by 1 for every this many points
    pub const SPEED_STEP_SCORE: u64 = 50;
    /// Exponential smoothing factor toward the target speed
    pub const SPEED_SMOOTHING: f32 = 0.1;
    /// Breather: supply items knock this much off the smoothed speed
    pub const SUPPLY_SPEED_REDUCTION: f32 = 2.0;

    /// Spring-damper tuning (higher stiffness = snappier, higher damping = stricter)
    pub const MOVEMENT_STIFFNESS: f32 = 0.08;
    pub const MOVEMENT_DAMPING: f32 = 0.82;

    /// Dash ability
    pub const DASH_DURATION_MS: f64 = 1000.0;
    pub const DASH_COOLDOWN_MS: f64 = 5000.0;
    pub const DASH_SPEED_MULTIPLIER: f32 = 2.5;

    /// Fever mode
    pub const FEVER_DURATION_MS: f64 = 6000.0;
    pub const FEVER_SPEED_MULTIPLIER: f32 = 1.5;

    /// Scoring
    pub const SCORE_ITEM: u64 = 10;
    pub const SCORE_BELIEVER: u64 = 20;
    pub const SCORE_SUPPLY: u64 = 5;
    /// Bonus for smashing an obstacle mid-dash
    pub const DASH_SMASH_BONUS: u64 = 5;

    /// Vertical play band: entities and the avatar stay this far from
    /// the top and bottom edges (sidewalk / HUD reserve)
    pub const BAND_MARGIN: f32 = 90.0;

    /// Spawn fairness: narrow viewports spawn as if at least this wide,
    /// so reaction distance never shrinks in portrait mode
    pub const MIN_SPAWN_WIDTH: f32 = 600.0;
    pub const SPAWN_MARGIN: f32 = 100.0;
    /// Entities whose right edge is this far past the left edge are culled
    pub const OFFSCREEN_CULL_X: f32 = -100.0;

    /// Spawn cadence in ticks
    pub const SPAWN_INTERVAL_RUSH: f32 = 20.0;
    pub const SPAWN_INTERVAL_MIN: f32 = 30.0;
    pub const SPAWN_INTERVAL_BASE: f32 = 80.0;

    /// Dash ghost trail sampling and fade
    pub const GHOST_SAMPLE_TICKS: u32 = 3;
    pub const GHOST_START_ALPHA: f32 = 0.8;
    pub const GHOST_FADE_PER_TICK: f32 = 0.05;

    /// Particle budget and fade
    pub const MAX_PARTICLES: usize = 512;
    pub const PARTICLE_FADE_PER_TICK: f32 = 0.05;

    /// Particle colors (0xRRGGBB)
    pub const COLOR_GOLD: u32 = 0xFFD700;
    pub const COLOR_LANTERN: u32 = 0xFF4500;
    pub const COLOR_PEACH: u32 = 0xFF69B4;
    pub const COLOR_WATERMELON: u32 = 0xFF6347;
    pub const COLOR_DRINK: u32 = 0x00BFFF;
    pub const COLOR_WHITE: u32 = 0xFFFFFF;
    pub const COLOR_DEBRIS: u32 = 0x555555;
}
