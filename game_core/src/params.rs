/// Game tuning parameters for Pong
///
/// All distances are in surface pixels and all speeds are per frame: the
/// simulation advances one fixed step per display refresh.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (used when no surface size is supplied, e.g. in tests)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // Gap between paddle and side edge
    pub const PADDLE_SPEED: f32 = 5.0; // Keyboard
    pub const POINTER_SPEED: f32 = 3.0; // Pointer follow

    // Computer paddle
    pub const AI_SPEED: f32 = 4.0;
    pub const AI_DEAD_ZONE: f32 = 35.0;

    // Ball
    pub const BALL_RADIUS: f32 = 6.0;
    pub const BALL_START_VEL: [f32; 2] = [5.0, 5.0]; // Before the first serve
    pub const BALL_SERVE_SPEED: f32 = 5.0;
    pub const BALL_SERVE_SPREAD: f32 = 4.0; // Serve dy drawn from [-spread, spread]
    pub const BALL_SPEED_INCREASE: f32 = 1.05; // Multiply dx on paddle hit
    pub const BALL_SPIN_MAX: f32 = 8.0; // dy at the paddle's very edge

    // Colors (sRGB)
    pub const COLOR_BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const COLOR_FOREGROUND: [f32; 4] = [0.0, 1.0, 0.533, 1.0]; // #00ff88
    pub const COLOR_BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    // Center divider
    pub const DIVIDER_WIDTH: f32 = 2.0;
    pub const DIVIDER_DASH: f32 = 5.0;
    pub const DIVIDER_GAP: f32 = 10.0;
}
