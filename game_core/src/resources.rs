use crate::components::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,   // Left side
    pub computer: u32, // Right side
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }

    pub fn clear(&mut self) {
        self.player = 0;
        self.computer = 0;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub computer_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.computer_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn score_changed(&self) -> bool {
        self.player_scored || self.computer_scored
    }
}

/// Whether the simulation advances; rendering happens either way
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunState {
    pub running: bool,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the state and return the new control label
    pub fn toggle(&mut self) -> &'static str {
        self.running = !self.running;
        self.label()
    }

    /// Label for the start/pause control: names the action it will perform
    pub fn label(&self) -> &'static str {
        if self.running {
            "Pause Game"
        } else {
            "Start Game"
        }
    }
}

/// Recognised key names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    LowerW,
    UpperW,
    LowerS,
    UpperS,
}

impl Key {
    pub const ALL: [Key; 6] = [
        Key::ArrowUp,
        Key::ArrowDown,
        Key::LowerW,
        Key::UpperW,
        Key::LowerS,
        Key::UpperS,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "w" => Some(Key::LowerW),
            "W" => Some(Key::UpperW),
            "s" => Some(Key::LowerS),
            "S" => Some(Key::UpperS),
            _ => None,
        }
    }

    pub fn is_up(self) -> bool {
        matches!(self, Key::ArrowUp | Key::LowerW | Key::UpperW)
    }

    pub fn is_down(self) -> bool {
        matches!(self, Key::ArrowDown | Key::LowerS | Key::UpperS)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Latest keyboard and pointer state, written by input callbacks (last write
/// wins) and read once per step.
#[derive(Debug, Clone)]
pub struct InputState {
    held: [bool; Key::ALL.len()],
    pub pointer_y: f32,
}

impl InputState {
    /// Neutral input with the pointer resting at `pointer_y`
    pub fn new(pointer_y: f32) -> Self {
        Self {
            held: [false; Key::ALL.len()],
            pointer_y,
        }
    }

    pub fn key_down(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.held[key.index()] = true;
        }
    }

    pub fn key_up(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.held[key.index()] = false;
        }
    }

    pub fn pointer_moved(&mut self, y: f32) {
        self.pointer_y = y;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    pub fn any_held(&self, pred: impl Fn(Key) -> bool) -> bool {
        Key::ALL
            .into_iter()
            .any(|key| pred(key) && self.is_held(key))
    }
}

/// Control signals for one step, sampled from [`InputState`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    pub up: bool,
    pub down: bool,
    pub pointer_y: f32,
}

impl Controls {
    /// No keys held, pointer at `pointer_y`
    pub fn idle(pointer_y: f32) -> Self {
        Self {
            up: false,
            down: false,
            pointer_y,
        }
    }
}
