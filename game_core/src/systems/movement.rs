use crate::{Ball, Config, Controls, GameMap, Paddle, Side};
use hecs::World;

/// Move the player paddle from keyboard and pointer.
///
/// Keys and pointer both apply in the same frame and can pull against each
/// other.
pub fn move_player_paddle(world: &mut World, map: &GameMap, config: &Config, controls: &Controls) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Player {
            continue;
        }

        if controls.up {
            paddle.pos.y = config.clamp_paddle_y(paddle.pos.y - config.paddle_speed, map.height);
        }
        if controls.down {
            paddle.pos.y = config.clamp_paddle_y(paddle.pos.y + config.paddle_speed, map.height);
        }

        let center = paddle.center_y();
        if controls.pointer_y < center {
            paddle.pos.y = config.clamp_paddle_y(paddle.pos.y - config.pointer_speed, map.height);
        } else if controls.pointer_y > center {
            paddle.pos.y = config.clamp_paddle_y(paddle.pos.y + config.pointer_speed, map.height);
        }
    }
}

/// Scripted opponent: follow the ball's height once it leaves the dead zone
pub fn move_computer_paddle(world: &mut World, map: &GameMap, config: &Config) {
    let ball_y = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    let Some(ball_y) = ball_y else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Computer {
            continue;
        }

        let dir = tracking_direction(paddle.center_y(), ball_y, config.ai_dead_zone);
        if dir != 0 {
            let y = paddle.pos.y + dir as f32 * config.ai_speed;
            paddle.pos.y = config.clamp_paddle_y(y, map.height);
        }
    }
}

/// -1 = up, 0 = hold, 1 = down
pub fn tracking_direction(center_y: f32, target_y: f32, dead_zone: f32) -> i8 {
    if center_y < target_y - dead_zone {
        1
    } else if center_y > target_y + dead_zone {
        -1
    } else {
        0
    }
}

/// Move ball by one frame of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, GameMap, Config) {
        (World::new(), GameMap::new(800.0, 400.0), Config::new())
    }

    fn paddle_y(world: &World, side: Side) -> f32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.pos.y)
            .unwrap()
    }

    #[test]
    fn test_keyboard_up_with_pointer_at_center() {
        let (mut world, map, config) = setup_world();
        create_paddle(&mut world, &map, &config, Side::Player);

        // Pointer at the paddle's new center after the key move: no pointer pull
        let controls = Controls {
            up: true,
            down: false,
            pointer_y: 195.0,
        };
        move_player_paddle(&mut world, &map, &config, &controls);

        assert_eq!(paddle_y(&world, Side::Player), 155.0);
    }

    #[test]
    fn test_keyboard_and_pointer_fight() {
        let (mut world, map, config) = setup_world();
        create_paddle(&mut world, &map, &config, Side::Player);

        // Key pulls up by 5, pointer far below pulls down by 3
        let controls = Controls {
            up: true,
            down: false,
            pointer_y: 400.0,
        };
        move_player_paddle(&mut world, &map, &config, &controls);

        assert_eq!(paddle_y(&world, Side::Player), 158.0);
    }

    #[test]
    fn test_pointer_follow_speed() {
        let (mut world, map, config) = setup_world();
        create_paddle(&mut world, &map, &config, Side::Player);

        move_player_paddle(&mut world, &map, &config, &Controls::idle(0.0));
        assert_eq!(paddle_y(&world, Side::Player), 157.0);

        move_player_paddle(&mut world, &map, &config, &Controls::idle(400.0));
        move_player_paddle(&mut world, &map, &config, &Controls::idle(400.0));
        assert_eq!(paddle_y(&world, Side::Player), 163.0);
    }

    #[test]
    fn test_player_paddle_clamped_to_arena() {
        let (mut world, map, config) = setup_world();
        create_paddle(&mut world, &map, &config, Side::Player);

        let up = Controls {
            up: true,
            down: false,
            pointer_y: 0.0,
        };
        for _ in 0..200 {
            move_player_paddle(&mut world, &map, &config, &up);
            let y = paddle_y(&world, Side::Player);
            assert!(y >= 0.0 && y <= map.height - config.paddle_height);
        }
        assert_eq!(paddle_y(&world, Side::Player), 0.0);

        let down = Controls {
            up: false,
            down: true,
            pointer_y: map.height,
        };
        for _ in 0..200 {
            move_player_paddle(&mut world, &map, &config, &down);
        }
        assert_eq!(
            paddle_y(&world, Side::Player),
            map.height - config.paddle_height
        );
    }

    #[test]
    fn test_player_input_does_not_move_computer() {
        let (mut world, map, config) = setup_world();
        create_paddle(&mut world, &map, &config, Side::Computer);

        let controls = Controls {
            up: true,
            down: false,
            pointer_y: 0.0,
        };
        move_player_paddle(&mut world, &map, &config, &controls);

        assert_eq!(paddle_y(&world, Side::Computer), 160.0);
    }

    #[test]
    fn test_tracking_direction_dead_zone() {
        assert_eq!(tracking_direction(200.0, 200.0, 35.0), 0);
        assert_eq!(tracking_direction(200.0, 235.0, 35.0), 0);
        assert_eq!(tracking_direction(200.0, 235.1, 35.0), 1);
        assert_eq!(tracking_direction(200.0, 164.9, 35.0), -1);
    }

    #[test]
    fn test_computer_follows_ball() {
        let (mut world, map, config) = setup_world();
        create_paddle(&mut world, &map, &config, Side::Computer);
        create_ball(&mut world, Vec2::new(400.0, 350.0), Vec2::ZERO, config.ball_radius);

        move_computer_paddle(&mut world, &map, &config);
        assert_eq!(paddle_y(&world, Side::Computer), 164.0);

        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.y = 10.0;
        }
        move_computer_paddle(&mut world, &map, &config);
        assert_eq!(paddle_y(&world, Side::Computer), 160.0);
    }

    #[test]
    fn test_computer_holds_inside_dead_zone() {
        let (mut world, map, config) = setup_world();
        create_paddle(&mut world, &map, &config, Side::Computer);
        create_ball(&mut world, Vec2::new(400.0, 220.0), Vec2::ZERO, config.ball_radius);

        move_computer_paddle(&mut world, &map, &config);
        assert_eq!(paddle_y(&world, Side::Computer), 160.0);
    }

    #[test]
    fn test_computer_clamped_to_arena() {
        let (mut world, map, config) = setup_world();
        create_paddle(&mut world, &map, &config, Side::Computer);
        create_ball(&mut world, Vec2::new(400.0, 399.0), Vec2::ZERO, config.ball_radius);

        for _ in 0..200 {
            move_computer_paddle(&mut world, &map, &config);
        }
        assert_eq!(
            paddle_y(&world, Side::Computer),
            map.height - config.paddle_height
        );
    }

    #[test]
    fn test_computer_without_ball_holds() {
        let (mut world, map, config) = setup_world();
        create_paddle(&mut world, &map, &config, Side::Computer);

        move_computer_paddle(&mut world, &map, &config);
        assert_eq!(paddle_y(&world, Side::Computer), 160.0);
    }

    #[test]
    fn test_move_ball_euler_step() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(400.0, 200.0), Vec2::new(5.0, -3.0), 6.0);

        move_ball(&mut world);

        let (_e, ball) = world.query_mut::<&Ball>().into_iter().next().unwrap();
        assert_eq!(ball.pos, Vec2::new(405.0, 197.0));
    }
}
