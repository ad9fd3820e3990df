//! Arcade Runner - deterministic side-scrolling runner simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `clock`: Frame driver, input latch and snapshot emission to the host
//! - `tuning`: Data-driven game balance
//! - `error`: Configuration errors and invariant codes
//!
//! Rendering, raw input capture and persistence belong to the host.

pub mod clock;
pub mod error;
pub mod sim;
pub mod tuning;

pub use clock::{Clock, FrameSink, HostSignals};
pub use error::{InvariantViolation, TuningError};
pub use tuning::Tuning;

/// Playfield geometry (logical units, y grows downward)
pub mod consts {
    /// Logical playfield width; obstacles spawn at this x
    pub const PLAYFIELD_WIDTH: f32 = 900.0;
    /// y of the ground surface; bodies rest with their bottom edge here
    pub const GROUND_LINE: f32 = 360.0;

    /// Player box
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// One ground jump plus one mid-air jump
    pub const MAX_JUMPS: u8 = 2;
    /// Upper bound for lives
    pub const MAX_LIVES: u8 = 3;
}
