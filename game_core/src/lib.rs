pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use render::{Scene, Shape};
pub use resources::*;
pub use session::{ScoreSink, Session};

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation.
///
/// Speeds are per frame, so there is no delta time: the game runs faster on
/// faster displays.
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    controls: &Controls,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Paddles (the computer reads the ball before it moves)
    move_player_paddle(world, map, config, controls);
    move_computer_paddle(world, map, config);

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (walls, then player and computer paddles)
    check_collisions(world, map, config, events);

    // 4. Check scoring (ball exited arena)
    check_scoring(world, map, score, events, rng, config);
}

/// Helper to create a paddle entity at its starting position
pub fn create_paddle(world: &mut World, map: &GameMap, config: &Config, side: Side) -> hecs::Entity {
    let x = config.paddle_x(side, map.width);
    let pos = map.paddle_spawn(x, config.paddle_height);
    let size = Vec2::new(config.paddle_width, config.paddle_height);
    world.spawn((Paddle::new(side, pos, size),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2, radius: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, radius),))
}
