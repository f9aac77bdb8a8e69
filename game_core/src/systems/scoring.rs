use crate::{Ball, Config, Events, GameMap, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the arena (scoring)
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.x - ball.radius < 0.0 {
            Side::Computer
        } else if ball.pos.x + ball.radius > map.width {
            Side::Player
        } else {
            continue;
        };

        score.increment(scorer);
        match scorer {
            Side::Player => events.player_scored = true,
            Side::Computer => events.computer_scored = true,
        }
        log::debug!(
            "{:?} scored, now {}-{}",
            scorer,
            score.player,
            score.computer
        );

        serve(ball, map, config, rng);
    }
}

/// Put the ball back at the arena center with a fresh random serve
pub fn serve(ball: &mut Ball, map: &GameMap, config: &Config, rng: &mut GameRng) {
    ball.reset(
        map.center(),
        config.ball_serve_speed,
        config.ball_serve_spread,
        rng,
    );
    log::debug!("Serve from {:?} with velocity {:?}", ball.pos, ball.vel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Ball, Config, Events, GameMap, GameRng, Score};
    use glam::Vec2;

    fn setup_world() -> (World, Config, GameMap, Score, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let map = GameMap::new(800.0, 400.0);
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, map, score, events, rng)
    }

    fn ball(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap()
    }

    #[test]
    fn test_computer_scores_when_ball_exits_left() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        // x - radius < 0
        create_ball(&mut world, Vec2::new(5.0, 200.0), Vec2::new(-5.0, 0.0), config.ball_radius);

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score.computer, 1, "Computer should score");
        assert_eq!(score.player, 0, "Player should not score");
        assert!(events.computer_scored);
        assert!(!events.player_scored);
        assert_eq!(ball(&world).pos, map.center(), "Ball should reset to exact center");
    }

    #[test]
    fn test_player_scores_when_ball_exits_right() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(map.width - 5.0, 200.0),
            Vec2::new(5.0, 0.0),
            config.ball_radius,
        );

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score.player, 1, "Player should score");
        assert_eq!(score.computer, 0, "Computer should not score");
        assert!(events.player_scored);
    }

    #[test]
    fn test_serve_velocity_after_scoring() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-20.0, 200.0), Vec2::new(-9.0, 3.0), config.ball_radius);

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        let b = ball(&world);
        assert_eq!(b.vel.x.abs(), config.ball_serve_speed);
        assert!(b.vel.y.abs() <= config.ball_serve_spread);
    }

    #[test]
    fn test_no_scoring_when_ball_touches_edge() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        create_ball(
            &mut world,
            Vec2::new(config.ball_radius, 200.0),
            Vec2::new(-5.0, 0.0),
            config.ball_radius,
        );

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score, Score::new(), "Touching the edge is not a miss");
        assert!(!events.score_changed());
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, map.center(), Vec2::new(5.0, 5.0), config.ball_radius);

        check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);

        assert_eq!(score, Score::new());
        assert_eq!(ball(&world).vel, Vec2::new(5.0, 5.0), "Ball untouched");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, map, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, map.center(), Vec2::ZERO, config.ball_radius);

        for _ in 0..3 {
            for (_e, b) in world.query_mut::<&mut Ball>() {
                b.pos.x = map.width + 1.0;
            }
            check_scoring(&mut world, &map, &mut score, &mut events, &mut rng, &config);
            events.clear();
        }

        assert_eq!(score.player, 3, "Scores should accumulate");
        assert_eq!(score.computer, 0);
    }
}
