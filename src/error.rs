//! Configuration errors and simulation invariant codes

use core::fmt;

/// A broken simulation invariant. Raised only by debug checks; a violation is
/// a programming defect, never a user-facing error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    LivesRange,
    PhaseLivesConsistency,
    JumpBudgetRange,
    PlayerBelowGround,
    SpawnIntervalFloor,
    ObstacleSpawnOrder,
    ObstacleIdAhead,
    ScoreBelowPassed,
    SpeedBelowInitial,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LivesRange => write!(f, "LIVES_RANGE"),
            Self::PhaseLivesConsistency => write!(f, "PHASE_LIVES_CONSISTENCY"),
            Self::JumpBudgetRange => write!(f, "JUMP_BUDGET_RANGE"),
            Self::PlayerBelowGround => write!(f, "PLAYER_BELOW_GROUND"),
            Self::SpawnIntervalFloor => write!(f, "SPAWN_INTERVAL_FLOOR"),
            Self::ObstacleSpawnOrder => write!(f, "OBSTACLE_SPAWN_ORDER"),
            Self::ObstacleIdAhead => write!(f, "OBSTACLE_ID_AHEAD"),
            Self::ScoreBelowPassed => write!(f, "SCORE_BELOW_PASSED"),
            Self::SpeedBelowInitial => write!(f, "SPEED_BELOW_INITIAL"),
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Failure to load or validate a [`crate::Tuning`]
#[derive(Debug)]
pub enum TuningError {
    Parse(serde_json::Error),
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "tuning is not valid JSON: {err}"),
            Self::Invalid { field, reason } => write!(f, "tuning field `{field}` {reason}"),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
