use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub pointer_speed: f32,
    pub ai_speed: f32,
    pub ai_dead_zone: f32,
    pub ball_radius: f32,
    pub ball_serve_speed: f32,
    pub ball_serve_spread: f32,
    pub ball_speed_increase: f32,
    pub ball_spin_max: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            pointer_speed: Params::POINTER_SPEED,
            ai_speed: Params::AI_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            ball_serve_speed: Params::BALL_SERVE_SPEED,
            ball_serve_spread: Params::BALL_SERVE_SPREAD,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_spin_max: Params::BALL_SPIN_MAX,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge X of a paddle for the given side
    pub fn paddle_x(&self, side: Side, arena_width: f32) -> f32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Computer => arena_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Clamp paddle top Y so the whole paddle stays inside the arena
    pub fn clamp_paddle_y(&self, y: f32, arena_height: f32) -> f32 {
        y.clamp(0.0, (arena_height - self.paddle_height).max(0.0))
    }
}
