//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock deltas
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod obstacle;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use body::PlayerBody;
pub use collision::{Aabb, CollisionOutcome};
pub use obstacle::{Archetype, Obstacle};
pub use snapshot::{ObstacleView, Rect, Snapshot};
pub use state::{GameEvent, GamePhase, GameState, RunState};
pub use tick::{ActivateAction, TickInput, route_activate, tick};
