//! A single game session: owns the world and every resource the step reads.
//!
//! Hosts feed input into [`Session::input`] as events arrive and call
//! [`Session::frame`] once per display refresh.

use glam::Vec2;
use hecs::World;

use crate::render::{build_scene, Scene};
use crate::systems::{sample_input, serve};
use crate::*;

/// Receives score updates for display
pub trait ScoreSink {
    fn scores_changed(&mut self, player: u32, computer: u32);
}

impl<F: FnMut(u32, u32)> ScoreSink for F {
    fn scores_changed(&mut self, player: u32, computer: u32) {
        self(player, computer)
    }
}

pub struct Session {
    pub world: World,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub run: RunState,
    pub input: InputState,
}

impl Session {
    /// New paused session sized to a `width` x `height` surface
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_config(GameMap::new(width, height), Config::new(), seed)
    }

    pub fn with_config(map: GameMap, config: Config, seed: u64) -> Self {
        let mut world = World::new();

        create_paddle(&mut world, &map, &config, Side::Player);
        create_paddle(&mut world, &map, &config, Side::Computer);
        create_ball(
            &mut world,
            map.center(),
            Vec2::from(Params::BALL_START_VEL),
            config.ball_radius,
        );

        Self {
            world,
            map,
            config,
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
            run: RunState::new(),
            input: InputState::new(map.center().y),
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.running
    }

    /// Start or pause; returns the new label for the control
    pub fn toggle_run(&mut self) -> &'static str {
        let label = self.run.toggle();
        log::info!("Game {}", if self.run.running { "started" } else { "paused" });
        label
    }

    /// Zero both scores and serve a fresh ball from the center
    pub fn reset(&mut self, sink: &mut impl ScoreSink) {
        self.score.clear();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            serve(ball, &self.map, &self.config, &mut self.rng);
        }
        log::info!("Score reset");
        sink.scores_changed(self.score.player, self.score.computer);
    }

    /// Sample input and run one physics step if running.
    ///
    /// Returns whether the simulation advanced.
    pub fn advance(&mut self, sink: &mut impl ScoreSink) -> bool {
        if !self.run.running {
            return false;
        }

        let controls = sample_input(&self.input);
        step(
            &mut self.world,
            &self.map,
            &self.config,
            &controls,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );

        if self.events.score_changed() {
            sink.scores_changed(self.score.player, self.score.computer);
        }
        true
    }

    /// One display refresh: advance (if running), then describe the frame
    pub fn frame(&mut self, sink: &mut impl ScoreSink) -> Scene {
        self.advance(sink);
        self.scene()
    }

    pub fn scene(&self) -> Scene {
        build_scene(&self.world, &self.map)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.query::<&Ball>().iter().next().map(|(_e, b)| *b)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
    }
}
