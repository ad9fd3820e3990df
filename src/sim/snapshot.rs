//! Read-only per-tick view handed to the renderer

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacle::Archetype;
use super::state::{GameEvent, GamePhase, GameState};

/// Axis-aligned rectangle in playfield units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            w: size.x,
            h: size.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    #[serde(flatten)]
    pub rect: Rect,
    pub archetype: Archetype,
}

/// Immutable copy of everything the renderer may draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub score: u32,
    pub lives: u8,
    pub speed: f32,
    pub phase: GamePhase,
    /// Hit flash is showing
    pub hit: bool,
    pub player: Rect,
    pub obstacles: Vec<ObstacleView>,
    pub events: Vec<GameEvent>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            score: state.run.score,
            lives: state.run.lives,
            speed: state.run.speed,
            phase: state.run.phase,
            hit: state.hit_active(),
            player: Rect::new(state.player.pos, state.player.size),
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    rect: Rect::new(o.pos, o.size),
                    archetype: o.archetype,
                })
                .collect(),
            events: state.events.clone(),
        }
    }

    /// The final score, present only on the tick the run ended
    pub fn final_score(&self) -> Option<u32> {
        self.events.iter().find_map(|e| match e {
            GameEvent::GameOver { final_score } => Some(*final_score),
            _ => None,
        })
    }
}
