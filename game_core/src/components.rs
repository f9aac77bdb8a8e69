use glam::Vec2;
use rand::Rng;

use crate::map::Aabb;

/// Which side of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Player,   // Left, human controlled
    Computer, // Right, scripted
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // Top-left corner
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self { side, pos, size }
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_min_size(self.pos, self.size)
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // Center
    pub vel: Vec2, // Pixels per frame
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Serve from `center`: fixed horizontal speed toward a random side and a
    /// vertical speed drawn uniformly from `[-spread, spread]`.
    pub fn reset(&mut self, center: Vec2, speed: f32, spread: f32, rng: &mut crate::GameRng) {
        self.pos = center;

        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let dy = if spread > 0.0 {
            rng.0.gen_range(-spread..=spread)
        } else {
            0.0
        };

        self.vel = Vec2::new(dir * speed, dy);
    }
}
