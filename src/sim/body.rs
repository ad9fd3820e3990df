//! Player physics: gravity integration, ground contact and the jump budget

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// The player's body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Vertical velocity (negative = upward)
    pub vel_y: f32,
    pub size: Vec2,
    /// Jumps left before touching the ground again (0..=MAX_JUMPS)
    pub jumps_remaining: u8,
    pub airborne: bool,
}

impl Default for PlayerBody {
    fn default() -> Self {
        let size = Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT);
        Self {
            pos: Vec2::new(PLAYER_START_X, GROUND_LINE - size.y),
            vel_y: 0.0,
            size,
            jumps_remaining: MAX_JUMPS,
            airborne: false,
        }
    }
}

impl PlayerBody {
    /// y of the top edge when standing on the ground
    #[inline]
    pub fn ground_y(&self) -> f32 {
        GROUND_LINE - self.size.y
    }

    /// Leading (right) edge
    #[inline]
    pub fn leading_edge(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Apply gravity, integrate, and resolve ground contact
    pub fn advance(&mut self, gravity: f32) {
        self.vel_y += gravity;
        self.pos.y += self.vel_y;

        let ground = self.ground_y();
        if self.pos.y >= ground {
            self.pos.y = ground;
            self.vel_y = 0.0;
            if self.airborne {
                self.airborne = false;
                self.jumps_remaining = MAX_JUMPS;
            }
        }
    }

    /// Spend one jump from the budget. Returns false when the budget is empty.
    ///
    /// Phase gating is the caller's job; see `GameState::jump`.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if self.jumps_remaining == 0 {
            return false;
        }
        self.vel_y = -impulse;
        self.jumps_remaining -= 1;
        self.airborne = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAVITY: f32 = 0.6;
    const IMPULSE: f32 = 12.0;

    #[test]
    fn test_starts_grounded() {
        let body = PlayerBody::default();
        assert_eq!(body.pos.y, body.ground_y());
        assert_eq!(body.jumps_remaining, MAX_JUMPS);
        assert!(!body.airborne);
    }

    #[test]
    fn test_resting_body_stays_on_ground() {
        let mut body = PlayerBody::default();
        for _ in 0..10 {
            body.advance(GRAVITY);
        }
        assert_eq!(body.pos.y, body.ground_y());
        assert_eq!(body.vel_y, 0.0);
    }

    #[test]
    fn test_jump_rises_then_lands() {
        let mut body = PlayerBody::default();
        assert!(body.jump(IMPULSE));
        body.advance(GRAVITY);
        assert!(body.pos.y < body.ground_y());
        assert_eq!(body.jumps_remaining, 1);

        let mut ticks = 1;
        while body.airborne {
            body.advance(GRAVITY);
            ticks += 1;
            assert!(ticks < 1000, "body never landed");
        }
        assert_eq!(body.pos.y, body.ground_y());
        assert_eq!(body.jumps_remaining, MAX_JUMPS);
    }

    #[test]
    fn test_double_jump_then_ignored() {
        let mut body = PlayerBody::default();
        assert!(body.jump(IMPULSE));
        body.advance(GRAVITY);
        assert!(body.jump(IMPULSE));
        assert_eq!(body.jumps_remaining, 0);
        body.advance(GRAVITY);

        let vel_before = body.vel_y;
        assert!(!body.jump(IMPULSE));
        assert_eq!(body.vel_y, vel_before);
        assert_eq!(body.jumps_remaining, 0);
    }

    #[test]
    fn test_second_jump_resets_velocity() {
        let mut body = PlayerBody::default();
        body.jump(IMPULSE);
        for _ in 0..15 {
            body.advance(GRAVITY);
        }
        assert!(body.vel_y > -IMPULSE);
        body.jump(IMPULSE);
        assert_eq!(body.vel_y, -IMPULSE);
    }
}
