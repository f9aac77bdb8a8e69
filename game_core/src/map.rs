use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Strict overlap between this box and the bounding square of a circle.
    ///
    /// Touching edges do not count, so a ball placed flush against a paddle
    /// face is not hit again on the next frame.
    pub fn overlaps_circle_bounds(&self, center: Vec2, radius: f32) -> bool {
        center.x - radius < self.max.x
            && center.x + radius > self.min.x
            && center.y - radius < self.max.y
            && center.y + radius > self.min.y
    }
}

/// Playfield dimensions, read once from the drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Starting top-left corner for a paddle of the given height at `x`
    pub fn paddle_spawn(&self, x: f32, paddle_height: f32) -> Vec2 {
        Vec2::new(x, self.height / 2.0 - paddle_height / 2.0)
    }

    /// Clamp a circle's center Y so it lies fully inside the arena
    pub fn clamp_ball_y(&self, y: f32, radius: f32) -> f32 {
        y.clamp(radius, (self.height - radius).max(radius))
    }
}

impl Default for GameMap {
    fn default() -> Self {
        Self::new(
            crate::params::Params::ARENA_WIDTH,
            crate::params::Params::ARENA_HEIGHT,
        )
    }
}
