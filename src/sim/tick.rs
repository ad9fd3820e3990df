//! Simulation tick
//!
//! One logical tick per rendered frame. Input is applied before any component
//! runs, so a tick never sees a half-applied signal.

use super::collision::{self, CollisionOutcome};
use super::scoring;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// The single user action (key/tap); meaning depends on the phase
    pub activate: bool,
    /// Explicit restart, honored in any phase
    pub restart: bool,
}

/// What an activate signal means in a given phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivateAction {
    Start,
    Jump,
    Restart,
}

/// Route the overloaded activate signal
pub fn route_activate(phase: GamePhase) -> ActivateAction {
    match phase {
        GamePhase::NotStarted => ActivateAction::Start,
        GamePhase::Playing => ActivateAction::Jump,
        GamePhase::GameOver => ActivateAction::Restart,
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // A start/restart frame shows the pristine reset state
    if input.restart {
        state.restart();
        return;
    }
    if input.activate {
        match route_activate(state.phase()) {
            ActivateAction::Start | ActivateAction::Restart => {
                state.restart();
                return;
            }
            ActivateAction::Jump => {
                state.jump();
            }
        }
    }

    // Don't simulate unless playing
    if !state.is_playing() {
        return;
    }

    let lives_before = state.run.lives;
    let score_before = state.run.score;
    let speed_before = state.run.speed;

    state.time_ticks += 1;
    state.run.hit_flash_ticks = state.run.hit_flash_ticks.saturating_sub(1);

    // Physics body
    state.player.advance(state.tuning.gravity);

    // Obstacle generator
    state.update_obstacles();

    // Collision detector
    if let CollisionOutcome::Hit { first } = collision::detect(&state.player, &state.obstacles) {
        log::debug!("Collision with obstacle {} at tick {}", first, state.time_ticks);
        state.on_hit();
    }

    // Scoring and speed ramp
    let passed = scoring::update(
        &mut state.run,
        &mut state.obstacles,
        state.player.pos.x,
        &state.tuning,
    );
    for id in passed {
        log::debug!("Passed obstacle {}, score {}", id, state.run.score);
        state.events.push(GameEvent::Passed {
            id,
            score: state.run.score,
        });
    }

    log::trace!(
        "tick {} score {} lives {} speed {:.2} obstacles {}",
        state.time_ticks,
        state.run.score,
        state.run.lives,
        state.run.speed,
        state.obstacles.len()
    );

    debug_assert!(state.run.lives <= lives_before, "lives increased mid-run");
    debug_assert!(state.run.score >= score_before, "score decreased mid-run");
    debug_assert!(state.run.speed >= speed_before, "speed decreased mid-run");
    debug_assert_eq!(state.validate_invariants(), Ok(()));
}
