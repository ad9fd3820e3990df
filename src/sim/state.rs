//! Game state and the phase machine
//!
//! Everything that survives from one tick to the next lives in [`GameState`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::PlayerBody;
use super::obstacle::{self, Archetype, Obstacle};
use crate::consts::*;
use crate::error::{InvariantViolation, TuningError};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first activate signal
    NotStarted,
    /// Active gameplay
    Playing,
    /// Run ended; waits for a restart
    GameOver,
}

/// Something that happened during a tick, for hosts that want to react
/// (sounds, high score tables) without diffing snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started { seed: u64 },
    Jumped { jumps_remaining: u8 },
    Spawned { id: u32, archetype: Archetype },
    Passed { id: u32, score: u32 },
    Hit { lives_left: u8 },
    GameOver { final_score: u32 },
}

/// Per-run counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub score: u32,
    pub lives: u8,
    /// Leftward scroll per tick
    pub speed: f32,
    /// Ticks since the last spawn; negative during the post-hit grace period
    pub spawn_timer: i32,
    pub spawn_interval: u32,
    pub phase: GamePhase,
    /// Ticks left on the hit flash (0 = no flash)
    pub hit_flash_ticks: u32,
}

impl RunState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            score: 0,
            lives: tuning.starting_lives,
            speed: tuning.initial_speed,
            spawn_timer: 0,
            spawn_interval: tuning.initial_spawn_interval,
            phase: GamePhase::NotStarted,
            hit_flash_ticks: 0,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance in effect for this session
    pub tuning: Tuning,
    pub run: RunState,
    pub player: PlayerBody,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    rng: Pcg32,
    /// Next obstacle ID
    next_id: u32,
}

impl GameState {
    /// Create a state waiting for the start signal.
    ///
    /// `tuning` must already pass [`Tuning::validate`]; use
    /// [`GameState::try_new`] for values that have not been checked.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        debug_assert!(tuning.validate().is_ok(), "unvalidated tuning");
        Self {
            seed,
            run: RunState::new(&tuning),
            tuning,
            player: PlayerBody::default(),
            obstacles: Vec::new(),
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Validate `tuning` before building the state
    pub fn try_new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self::new(seed, tuning))
    }

    pub fn phase(&self) -> GamePhase {
        self.run.phase
    }

    pub fn is_playing(&self) -> bool {
        self.run.phase == GamePhase::Playing
    }

    /// Whether the transient hit flash is showing
    pub fn hit_active(&self) -> bool {
        self.run.hit_flash_ticks > 0
    }

    /// Allocate a new obstacle ID
    fn next_obstacle_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Full reset into Playing. Used for both start and restart.
    pub fn restart(&mut self) {
        let previous = self.run.phase;
        self.run = RunState::new(&self.tuning);
        self.run.phase = GamePhase::Playing;
        self.player = PlayerBody::default();
        self.obstacles.clear();
        self.time_ticks = 0;
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.next_id = 1;
        self.events.push(GameEvent::Started { seed: self.seed });
        log::info!("Run started (seed {}, from {:?})", self.seed, previous);
    }

    /// Jump if playing and the budget allows; otherwise a silent no-op
    pub fn jump(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let jumped = self.player.jump(self.tuning.jump_impulse);
        if jumped {
            self.events.push(GameEvent::Jumped {
                jumps_remaining: self.player.jumps_remaining,
            });
        }
        jumped
    }

    /// Place an obstacle at `x`. The generator spawns at the right edge;
    /// hosts and tests may inject anywhere.
    pub fn push_obstacle(&mut self, archetype: Archetype, x: f32) -> u32 {
        let id = self.next_obstacle_id();
        self.obstacles.push(Obstacle::new(id, archetype, x));
        id
    }

    /// Generator step: maybe spawn, then scroll and cull
    pub fn update_obstacles(&mut self) {
        if obstacle::tick_spawner(&mut self.run, &self.tuning) {
            let archetype = Archetype::random(&mut self.rng);
            let id = self.push_obstacle(archetype, PLAYFIELD_WIDTH);
            self.events.push(GameEvent::Spawned { id, archetype });
            log::debug!(
                "Spawned obstacle {} ({:?}), next interval {}",
                id,
                archetype,
                self.run.spawn_interval
            );
        }
        let culled = obstacle::advance_and_cull(&mut self.obstacles, self.run.speed);
        if culled > 0 {
            log::trace!("Culled {} obstacle(s)", culled);
        }
    }

    /// Penalty for a collision tick. Runs at most once per tick.
    pub fn on_hit(&mut self) {
        self.run.lives = self.run.lives.saturating_sub(1);
        self.obstacles.clear();
        self.run.spawn_timer = -(self.tuning.spawn_grace_ticks as i32);

        if self.run.lives == 0 {
            self.run.phase = GamePhase::GameOver;
            self.run.hit_flash_ticks = 0;
            self.events.push(GameEvent::GameOver {
                final_score: self.run.score,
            });
            log::info!(
                "Game over after {} ticks, final score {}",
                self.time_ticks,
                self.run.score
            );
        } else {
            self.run.hit_flash_ticks = self.tuning.hit_flash_ticks;
            self.events.push(GameEvent::Hit {
                lives_left: self.run.lives,
            });
            log::debug!("Hit! {} lives left", self.run.lives);
        }
    }

    /// Check the state-level invariants
    pub fn validate_invariants(&self) -> Result<(), InvariantViolation> {
        let run = &self.run;
        if run.lives > MAX_LIVES {
            return Err(InvariantViolation::LivesRange);
        }
        let lives_consistent = match run.phase {
            GamePhase::NotStarted => true,
            GamePhase::Playing => run.lives > 0,
            GamePhase::GameOver => run.lives == 0,
        };
        if !lives_consistent {
            return Err(InvariantViolation::PhaseLivesConsistency);
        }
        if self.player.jumps_remaining > MAX_JUMPS {
            return Err(InvariantViolation::JumpBudgetRange);
        }
        if self.player.pos.y > self.player.ground_y() {
            return Err(InvariantViolation::PlayerBelowGround);
        }
        if run.spawn_interval < self.tuning.spawn_interval_floor {
            return Err(InvariantViolation::SpawnIntervalFloor);
        }
        if self.obstacles.windows(2).any(|w| w[0].id >= w[1].id) {
            return Err(InvariantViolation::ObstacleSpawnOrder);
        }
        if self.obstacles.iter().any(|o| o.id >= self.next_id) {
            return Err(InvariantViolation::ObstacleIdAhead);
        }
        let passed = self.obstacles.iter().filter(|o| o.passed).count();
        if (run.score as usize) < passed {
            return Err(InvariantViolation::ScoreBelowPassed);
        }
        if run.speed < self.tuning.initial_speed {
            return Err(InvariantViolation::SpeedBelowInitial);
        }
        Ok(())
    }
}
