//! Frame driver
//!
//! The host calls [`Clock::frame`] once per rendered frame. Signals raised by
//! the host at any moment (including from inside [`FrameSink::present`]) are
//! latched and only consumed at the start of the next frame.

use std::cell::Cell;
use std::rc::Rc;

use crate::sim::{GameState, Snapshot, TickInput, tick};
use crate::error::TuningError;
use crate::tuning::Tuning;

/// Shared handle the host uses to deliver input. Cheap to clone; every clone
/// feeds the same latch.
#[derive(Debug, Clone, Default)]
pub struct HostSignals {
    latch: Rc<Cell<TickInput>>,
}

impl HostSignals {
    /// The single user action. Repeats before the next frame collapse into one.
    pub fn activate(&self) {
        let mut input = self.latch.get();
        input.activate = true;
        self.latch.set(input);
    }

    /// Explicit restart, honored in any phase
    pub fn restart(&self) {
        let mut input = self.latch.get();
        input.restart = true;
        self.latch.set(input);
    }

    /// Whether anything is waiting for the next frame
    pub fn pending(&self) -> bool {
        self.latch.get() != TickInput::default()
    }

    fn take(&self) -> TickInput {
        self.latch.take()
    }
}

/// Receives one snapshot per frame (the renderer side)
pub trait FrameSink {
    fn present(&mut self, frame: &Snapshot);
}

/// Records every frame
impl FrameSink for Vec<Snapshot> {
    fn present(&mut self, frame: &Snapshot) {
        self.push(frame.clone());
    }
}

/// Owns the simulation and drives it one tick per frame
pub struct Clock {
    state: GameState,
    signals: HostSignals,
    frames: u64,
}

impl Clock {
    /// `tuning` must already be validated, see [`GameState::new`]
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self::from_state(GameState::new(seed, tuning))
    }

    pub fn try_new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        GameState::try_new(seed, tuning).map(Self::from_state)
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            signals: HostSignals::default(),
            frames: 0,
        }
    }

    /// A handle for the host's input callbacks
    pub fn signals(&self) -> HostSignals {
        self.signals.clone()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Frames driven so far (counts frames outside Playing too)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one tick and return its snapshot
    pub fn step(&mut self) -> Snapshot {
        let input = self.signals.take();
        tick(&mut self.state, &input);
        self.frames += 1;
        Snapshot::capture(&self.state)
    }

    /// Run one tick and hand its snapshot to the renderer
    pub fn frame(&mut self, sink: &mut dyn FrameSink) {
        let snapshot = self.step();
        sink.present(&snapshot);
    }

    /// Drive `frames` frames back to back
    pub fn run(&mut self, frames: u64, sink: &mut dyn FrameSink) {
        for _ in 0..frames {
            self.frame(sink);
        }
    }
}
