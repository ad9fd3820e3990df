//! Obstacles and the procedural generator
//!
//! Spawns get more frequent over a run: every spawn shortens the interval by a
//! fixed step until it reaches the floor.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::state::RunState;
use crate::consts::*;
use crate::tuning::Tuning;

/// Obstacle shapes. Only the box size and the visual tag differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Crate,
    Spike,
    Wall,
    Log,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::Crate,
        Archetype::Spike,
        Archetype::Wall,
        Archetype::Log,
    ];

    /// Bounding box dimensions (w, h)
    pub fn size(&self) -> Vec2 {
        match self {
            Archetype::Crate => Vec2::new(40.0, 40.0),
            Archetype::Spike => Vec2::new(30.0, 44.0),
            Archetype::Wall => Vec2::new(24.0, 64.0),
            Archetype::Log => Vec2::new(64.0, 28.0),
        }
    }

    /// Uniform pick from [`Archetype::ALL`]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// A ground-aligned obstacle scrolling left
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub archetype: Archetype,
    /// Top-left corner; y is fixed so the bottom rests on the ground line
    pub pos: Vec2,
    pub size: Vec2,
    /// Set once when the trailing edge moves past the player's x
    pub passed: bool,
}

impl Obstacle {
    pub fn new(id: u32, archetype: Archetype, x: f32) -> Self {
        let size = archetype.size();
        Self {
            id,
            archetype,
            pos: Vec2::new(x, GROUND_LINE - size.y),
            size,
            passed: false,
        }
    }

    /// Right edge (x + w)
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Fully left of the playfield
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.trailing_edge() < 0.0
    }
}

/// Advance the spawn timer. Returns true when an obstacle is due; the timer
/// and interval are already updated for the next spawn in that case.
pub fn tick_spawner(run: &mut RunState, tuning: &Tuning) -> bool {
    run.spawn_timer += 1;
    if i64::from(run.spawn_timer) <= i64::from(run.spawn_interval) {
        return false;
    }
    run.spawn_timer = 0;
    run.spawn_interval = run
        .spawn_interval
        .saturating_sub(tuning.spawn_interval_step)
        .max(tuning.spawn_interval_floor);
    true
}

/// Move every obstacle left by `speed` and drop those that left the playfield.
/// Returns how many were removed.
///
/// An obstacle that has not been scored yet survives one extra tick so
/// scoring sees it, however far a single scroll step carried it.
pub fn advance_and_cull(obstacles: &mut Vec<Obstacle>, speed: f32) -> usize {
    for obstacle in obstacles.iter_mut() {
        obstacle.pos.x -= speed;
    }
    let before = obstacles.len();
    obstacles.retain(|o| !(o.passed && o.is_offscreen()));
    before - obstacles.len()
}
