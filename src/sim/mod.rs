//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer fixed-tick time only
//! - Seeded RNG only
//! - No platform or GPU dependencies; textures are opaque tags

pub mod collision;
pub mod pool;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, detect_collisions, overlaps};
pub use pool::EntityPool;
pub use state::{Asteroid, Bullet, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
