use crate::{Aabb, Ball, Config, Events, GameMap, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // Paddle boxes in fixed resolution order: player first, then computer
    let mut paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.bounds()))
        .collect();
    paddles.sort_by_key(|(side, _)| *side != Side::Player);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        bounce_off_walls(ball, map, events);

        // Both paddles are tested every frame. A ball overlapping both in the
        // same frame gets both responses applied in sequence.
        for (_side, bounds) in &paddles {
            if bounds.overlaps_circle_bounds(ball.pos, ball.radius) {
                bounce_off_paddle(ball, bounds, map, config);
                events.ball_hit_paddle = true;
            }
        }
    }
}

/// Reflect off the top and bottom walls, pulling the ball back inside
fn bounce_off_walls(ball: &mut Ball, map: &GameMap, events: &mut Events) {
    let r = ball.radius;
    if ball.pos.y - r < 0.0 || ball.pos.y + r > map.height {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = map.clamp_ball_y(ball.pos.y, r);
        events.ball_hit_wall = true;
    }
}

/// Reverse and speed up horizontally, set spin from the impact offset and
/// place the ball flush against the paddle face toward the arena center.
fn bounce_off_paddle(ball: &mut Ball, paddle: &Aabb, map: &GameMap, config: &Config) {
    ball.vel.x = -ball.vel.x * config.ball_speed_increase;

    // -1 at the top edge, 1 at the bottom edge
    let half_height = paddle.size().y / 2.0;
    let hit_pos = (ball.pos.y - paddle.center().y) / half_height;
    ball.vel.y = hit_pos * config.ball_spin_max;

    if ball.pos.x < map.width / 2.0 {
        ball.pos.x = paddle.max.x + ball.radius;
    } else {
        ball.pos.x = paddle.min.x - ball.radius;
    }
}
