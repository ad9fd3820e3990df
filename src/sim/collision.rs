//! Axis-aligned bounding box collision detection
//!
//! Archetypes only change box dimensions; every obstacle collides as its box.
//! Touching edges are not a collision.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::PlayerBody;
use super::obstacle::Obstacle;

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Result of one tick's collision pass. Never a count: several simultaneous
/// overlaps are still a single hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    Clear,
    /// At least one obstacle overlaps the player; `first` is the oldest one
    Hit { first: u32 },
}

impl CollisionOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, CollisionOutcome::Hit { .. })
    }
}

/// Ids of every obstacle overlapping the player, in spawn order
pub fn overlapping(player: &PlayerBody, obstacles: &[Obstacle]) -> Vec<u32> {
    let bounds = player.bounds();
    obstacles
        .iter()
        .filter(|o| bounds.overlaps(&o.bounds()))
        .map(|o| o.id)
        .collect()
}

/// Collapse all overlaps of this tick into one outcome
pub fn detect(player: &PlayerBody, obstacles: &[Obstacle]) -> CollisionOutcome {
    let hits = overlapping(player, obstacles);
    match hits.first() {
        Some(&first) => {
            if hits.len() > 1 {
                log::debug!("{} simultaneous overlaps collapsed into one hit", hits.len());
            }
            CollisionOutcome::Hit { first }
        }
        None => CollisionOutcome::Clear,
    }
}
