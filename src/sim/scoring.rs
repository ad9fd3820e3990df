//! Scoring and the scroll-speed ramp

use super::obstacle::Obstacle;
use super::state::RunState;
use crate::tuning::Tuning;

/// Award obstacles whose trailing edge is strictly left of `player_x`.
///
/// The `passed` flag guarantees one point per obstacle. Returns the ids that
/// were passed this call, in spawn order.
pub fn update(
    run: &mut RunState,
    obstacles: &mut [Obstacle],
    player_x: f32,
    tuning: &Tuning,
) -> Vec<u32> {
    let mut newly_passed = Vec::new();
    for obstacle in obstacles.iter_mut() {
        if obstacle.passed || obstacle.trailing_edge() >= player_x {
            continue;
        }
        obstacle.passed = true;
        run.score += 1;
        run.speed += tuning.speed_step;
        newly_passed.push(obstacle.id);
    }
    newly_passed
}
