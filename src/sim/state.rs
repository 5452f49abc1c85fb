//! Session state and core simulation types
//!
//! One explicit [`GameState`] owns everything a run mutates; subsystems
//! receive it by `&mut` from the tick driver. No globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, sim idle
    Start,
    /// Active gameplay
    Playing,
    /// Run ended by an obstacle hit
    GameOver,
}

/// Obstacle variants (behaviorally identical, different sprites/sizes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    Firecracker,
    Roadblock,
}

/// Score item variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreItemKind {
    Lantern,
    Peach,
    Envelope,
}

/// Supply (breather) item variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyKind {
    RiceBall,
    Drink,
    Watermelon,
}

/// What an entity is, and how a collision with it resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// Fatal unless invulnerable
    Obstacle(ObstacleKind),
    /// Fixed score on pickup
    ScoreItem(ScoreItemKind),
    /// Enters fever mode
    FeverItem,
    /// Small score plus a speed breather
    SupplyItem(SupplyKind),
    /// Fever-only spawn, high score value
    Believer,
}

/// A live world entity, scrolling right to left
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    /// Center position in world units
    pub pos: Vec2,
    /// Bounding width/height
    pub size: Vec2,
}

impl Entity {
    /// True once the entity is fully past the left cull line
    pub fn off_screen(&self) -> bool {
        self.pos.x + self.size.x < OFFSCREEN_CULL_X
    }
}

/// Visual-effect family; only affects initial velocity/size/life rolls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Fast isotropic burst
    Explosion,
    /// Slower, varied-size glitter
    Sparkle,
    /// Slow upward drift, larger, short-lived
    Smoke,
}

/// A decorative particle; no collision or scoring behavior
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 -> 0.0, removed at <= 0
    pub life: f32,
    /// 0xRRGGBB
    pub color: u32,
    pub size: f32,
}

/// Dash trail snapshot for rendering
#[derive(Debug, Clone, Copy)]
pub struct Ghost {
    pub pos: Vec2,
    pub alpha: f32,
}

/// Avatar motion state (vertical axis only; x is fixed)
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Current y position
    pub pos: f32,
    /// Current y velocity
    pub vel: f32,
    /// Input-supplied target y, clamped to the play band
    pub target: f32,
}

/// Timed modifier flags, driven by wall-clock milliseconds
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub fever_active: bool,
    pub fever_until_ms: f64,
    pub dash_active: bool,
    pub dash_until_ms: f64,
    /// Cooldown gate; None until the first dash of the session
    pub last_dash_ms: Option<f64>,
}

/// Per-tick notifications for the presentation layer (audio cues, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ScoreCollected,
    SupplyCollected,
    FeverStarted,
    FeverEnded,
    DashStarted,
    /// Obstacle destroyed while invulnerable
    ObstacleSmashed,
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Viewport width/height in world units
    pub viewport: Vec2,
    pub score: u64,
    /// Running best across runs; host persists it
    pub high_score: u64,
    /// Smoothed scroll speed, world units per tick
    pub speed: f32,
    pub tick_count: u64,
    pub player: Player,
    pub modifiers: Modifiers,
    /// Live-entity set, owned by the collision pass
    pub entities: Vec<Entity>,
    pub particles: Vec<Particle>,
    /// Dash ghost trail (render-only)
    pub ghosts: Vec<Ghost>,
    /// Ticks until the next spawn attempt
    pub spawn_timer: f32,
    /// Ticks until the next ghost-trail sample
    pub ghost_timer: u32,
    /// Events since the last tick; host drains after each update
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh session for the given viewport
    pub fn new(seed: u64, viewport_w: f32, viewport_h: f32) -> Self {
        let center = viewport_h / 2.0;
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            viewport: Vec2::new(viewport_w, viewport_h),
            score: 0,
            high_score: 0,
            speed: INITIAL_SPEED,
            tick_count: 0,
            player: Player {
                pos: center,
                vel: 0.0,
                target: center,
            },
            modifiers: Modifiers::default(),
            entities: Vec::new(),
            particles: Vec::new(),
            ghosts: Vec::new(),
            spawn_timer: 0.0,
            ghost_timer: 0,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Reinitialize everything for a new run
    ///
    /// Idempotent: calling twice in a row yields the same state both times.
    /// The running high score survives; it belongs to the player, not the run.
    pub fn reset(&mut self) {
        let high_score = self.high_score;
        let viewport = self.viewport;
        *self = Self::new(self.seed, viewport.x, viewport.y);
        self.high_score = high_score;
        log::debug!("session reset (viewport {}x{})", viewport.x, viewport.y);
    }

    /// Externally-invoked Start -> Playing transition
    pub fn start(&mut self) {
        if self.phase == GamePhase::Start {
            self.phase = GamePhase::Playing;
            log::info!("run started (seed {})", self.seed);
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Playable vertical band: (top, bottom) inclusive bounds
    pub fn band(&self) -> (f32, f32) {
        (BAND_MARGIN, self.viewport.y - BAND_MARGIN)
    }

    /// Handle a viewport resize; keeps the target inside the new band
    pub fn set_viewport(&mut self, w: f32, h: f32) {
        self.viewport = Vec2::new(w, h);
        let (top, bottom) = self.band();
        self.player.target = self.player.target.clamp(top, bottom);
    }

    /// Fever or dash grants invulnerability
    pub fn is_invulnerable(&self) -> bool {
        self.modifiers.fever_active || self.modifiers.dash_active
    }
}
