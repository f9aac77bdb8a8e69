//! Scene description for one frame
//!
//! Building the scene only reads the world. Backends turn the shapes into
//! draw calls in order, so later shapes paint over earlier ones.

use glam::Vec2;
use hecs::World;

use crate::{Ball, GameMap, Paddle, Params, Side};

pub type Color = [f32; 4];

/// A filled primitive in surface pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rect { min: Vec2, size: Vec2, color: Color },
    Disc { center: Vec2, radius: f32, color: Color },
}

/// Everything needed to redraw the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub clear: Color,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn rects(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::Rect { .. }))
    }

    pub fn discs(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::Disc { .. }))
    }
}

/// Build the full-frame scene: background, dashed divider, paddles, ball
pub fn build_scene(world: &World, map: &GameMap) -> Scene {
    let mut shapes = Vec::new();

    push_divider(&mut shapes, map);

    let mut paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();
    paddles.sort_by_key(|p| p.side != Side::Player);
    for paddle in paddles {
        shapes.push(Shape::Rect {
            min: paddle.pos,
            size: paddle.size,
            color: Params::COLOR_FOREGROUND,
        });
    }

    for (_e, ball) in world.query::<&Ball>().iter() {
        shapes.push(Shape::Disc {
            center: ball.pos,
            radius: ball.radius,
            color: Params::COLOR_BALL,
        });
    }

    Scene {
        width: map.width,
        height: map.height,
        clear: Params::COLOR_BACKGROUND,
        shapes,
    }
}

/// Vertical dashed line down the middle, last dash clipped at the bottom edge
fn push_divider(shapes: &mut Vec<Shape>, map: &GameMap) {
    let x = map.width / 2.0 - Params::DIVIDER_WIDTH / 2.0;
    let period = Params::DIVIDER_DASH + Params::DIVIDER_GAP;

    let mut y = 0.0;
    while y < map.height {
        let len = Params::DIVIDER_DASH.min(map.height - y);
        shapes.push(Shape::Rect {
            min: Vec2::new(x, y),
            size: Vec2::new(Params::DIVIDER_WIDTH, len),
            color: Params::COLOR_FOREGROUND,
        });
        y += period;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Config};

    fn setup_world() -> (World, GameMap, Config) {
        let map = GameMap::new(800.0, 400.0);
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, &map, &config, Side::Computer);
        create_paddle(&mut world, &map, &config, Side::Player);
        create_ball(&mut world, Vec2::new(123.0, 45.0), Vec2::new(5.0, 5.0), 6.0);
        (world, map, config)
    }

    #[test]
    fn test_scene_background_and_size() {
        let (world, map, _config) = setup_world();
        let scene = build_scene(&world, &map);
        assert_eq!(scene.clear, Params::COLOR_BACKGROUND);
        assert_eq!((scene.width, scene.height), (800.0, 400.0));
    }

    #[test]
    fn test_divider_dashes() {
        let (world, map, _config) = setup_world();
        let scene = build_scene(&world, &map);

        let dashes: Vec<_> = scene
            .rects()
            .filter_map(|s| match s {
                Shape::Rect { min, size, .. } if size.x == Params::DIVIDER_WIDTH => {
                    Some((*min, *size))
                }
                _ => None,
            })
            .collect();

        // y = 0, 15, ..., 390
        assert_eq!(dashes.len(), 27);
        assert_eq!(dashes[0].0, Vec2::new(399.0, 0.0));
        assert_eq!(dashes[1].0.y, 15.0);
        assert!(dashes.iter().all(|(min, size)| min.y + size.y <= map.height));
    }

    #[test]
    fn test_divider_last_dash_clipped() {
        let world = World::new();
        let map = GameMap::new(800.0, 32.0);
        let scene = build_scene(&world, &map);

        // y = 0, 15, 30 (clipped to 2px)
        let last = scene.shapes.last().copied().unwrap();
        assert_eq!(
            last,
            Shape::Rect {
                min: Vec2::new(399.0, 30.0),
                size: Vec2::new(2.0, 2.0),
                color: Params::COLOR_FOREGROUND,
            }
        );
    }

    #[test]
    fn test_paddles_then_ball_drawn_last() {
        let (world, map, config) = setup_world();
        let scene = build_scene(&world, &map);

        let n = scene.shapes.len();
        assert_eq!(
            scene.shapes[n - 3],
            Shape::Rect {
                min: Vec2::new(10.0, 160.0),
                size: Vec2::new(config.paddle_width, config.paddle_height),
                color: Params::COLOR_FOREGROUND,
            },
            "Player paddle first"
        );
        assert!(matches!(
            scene.shapes[n - 2],
            Shape::Rect { min, .. } if min.x == 780.0
        ));
        assert_eq!(
            scene.shapes[n - 1],
            Shape::Disc {
                center: Vec2::new(123.0, 45.0),
                radius: 6.0,
                color: Params::COLOR_BALL,
            }
        );
        assert_eq!(scene.discs().count(), 1);
    }

    #[test]
    fn test_build_scene_does_not_mutate() {
        let (world, map, _config) = setup_world();
        let first = build_scene(&world, &map);
        let second = build_scene(&world, &map);
        assert_eq!(first, second);
    }
}
