//! Frame-driven simulation
//!
//! Single-threaded and cooperative: one `tick` per display refresh, no
//! parallel mutation. All session state lives in one [`GameState`] owned
//! by the driver; modifier durations run on wall-clock milliseconds while
//! motion and spawning are tick-coupled by design.

pub mod collision;
pub mod modifiers;
pub mod particles;
pub mod player;
pub mod progression;
pub mod spawn;
pub mod state;
pub mod tick;

pub use modifiers::{dash_cooldown_remaining, try_dash};
pub use state::{
    Entity, EntityKind, GameEvent, GamePhase, GameState, Ghost, Modifiers, ObstacleKind, Particle,
    ParticleKind, Player, ScoreItemKind, SupplyKind,
};
pub use tick::{TickInput, tick};
