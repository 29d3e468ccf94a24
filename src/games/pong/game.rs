use super::entities::{Ball, Direction, Paddle, Rect};
use super::input::{is_restart, PongControl};
use crate::config::PongConfig;
use crate::core::game::Game;
use crate::core::keys::HeldKeys;
use crossterm::event::KeyCode;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver { winner: Side },
}

/// Final numbers of a finished match, logged as JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub winner: Side,
    pub player_score: u32,
    pub opponent_score: u32,
    pub paddle_speed: u32,
    pub ball_speed: u32,
}

/// One match: two paddles, one ball, the shared speed settings and the phase.
///
/// The player owns the left paddle, the opponent the right one.
#[derive(Debug, Clone)]
pub struct PongSession {
    config: PongConfig,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    paddle_speed: u32,
    ball_speed: u32,
    phase: Phase,
    rng: StdRng,
}

impl PongSession {
    pub fn new(config: PongConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic serves, for tests and replays
    pub fn with_seed(config: PongConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: PongConfig, mut rng: StdRng) -> Self {
        let paddle_speed = config.clamp_speed(config.initial_paddle_speed);
        let ball_speed = config.clamp_speed(config.initial_ball_speed);
        let paddle_y = (config.window_height - config.paddle_height) / 2.0;

        let player = Paddle::new(
            Rect::new(config.paddle_inset, paddle_y, config.paddle_width, config.paddle_height),
            paddle_speed,
            config.window_height,
        );
        let opponent = Paddle::new(
            Rect::new(
                config.window_width - config.paddle_inset - config.paddle_width,
                paddle_y,
                config.paddle_width,
                config.paddle_height,
            ),
            paddle_speed,
            config.window_height,
        );
        let ball = Ball::new(config.ball_size, config.window_width, config.window_height, ball_speed, &mut rng);

        Self {
            config,
            player,
            opponent,
            ball,
            paddle_speed,
            ball_speed,
            phase: Phase::Playing,
            rng,
        }
    }

    pub fn config(&self) -> &PongConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    pub fn paddle_speed(&self) -> u32 {
        self.paddle_speed
    }

    pub fn ball_speed(&self) -> u32 {
        self.ball_speed
    }

    /// Apply every held control once. Movement keys move their paddle, speed
    /// keys step the shared settings within the configured bounds.
    pub fn handle_input(&mut self, is_held: impl Fn(PongControl) -> bool) {
        if is_held(PongControl::PlayerUp) {
            self.player.shift(Direction::Up);
        }
        if is_held(PongControl::PlayerDown) {
            self.player.shift(Direction::Down);
        }
        if is_held(PongControl::OpponentUp) {
            self.opponent.shift(Direction::Up);
        }
        if is_held(PongControl::OpponentDown) {
            self.opponent.shift(Direction::Down);
        }

        let step = self.config.speed_step;
        if is_held(PongControl::PaddleSlower) {
            self.set_paddle_speed(self.paddle_speed.saturating_sub(step));
        }
        if is_held(PongControl::PaddleFaster) {
            self.set_paddle_speed(self.paddle_speed.saturating_add(step));
        }
        if is_held(PongControl::BallSlower) {
            self.set_ball_speed(self.ball_speed.saturating_sub(step));
        }
        if is_held(PongControl::BallFaster) {
            self.set_ball_speed(self.ball_speed.saturating_add(step));
        }
    }

    /// Clamp and propagate to both paddles.
    pub fn set_paddle_speed(&mut self, speed: u32) {
        self.paddle_speed = self.config.clamp_speed(speed);
        self.player.speed = self.paddle_speed;
        self.opponent.speed = self.paddle_speed;
    }

    /// Clamp and reapply to the ball, discarding any speed-up from paddle hits.
    pub fn set_ball_speed(&mut self, speed: u32) {
        self.ball_speed = self.config.clamp_speed(speed);
        self.ball.set_speed(self.ball_speed);
    }

    /// Advance one tick. Returns the side that won a point this tick, if any.
    /// Does nothing once the match is over.
    pub fn update(&mut self) -> Option<Side> {
        if self.is_over() {
            return None;
        }

        self.ball.advance();

        // Paddle contact reverses and speeds up the ball; not clamped to max_speed.
        if self.ball.rect.intersects(&self.player.rect) || self.ball.rect.intersects(&self.opponent.rect) {
            self.ball.speed_x *= -self.config.paddle_bounce;
        }

        let scored = if self.ball.rect.left() <= 0.0 {
            self.opponent.score += 1;
            Some(Side::Right)
        } else if self.ball.rect.right() >= self.config.window_width {
            self.player.score += 1;
            Some(Side::Left)
        } else {
            None
        };

        if let Some(side) = scored {
            self.ball.reset(self.ball_speed, &mut self.rng);
            debug!(
                scorer = side.label(),
                player = self.player.score,
                opponent = self.opponent.score,
                "point scored"
            );
        }

        let target = self.config.winning_score;
        if self.player.score >= target || self.opponent.score >= target {
            let winner = if self.player.score > self.opponent.score { Side::Left } else { Side::Right };
            self.phase = Phase::GameOver { winner };
            match self.summary().map(|s| serde_json::to_string(&s)) {
                Some(Ok(json)) => info!(summary = %json, "game over"),
                Some(Err(e)) => warn!(error = ?e, "failed to encode match summary"),
                None => {}
            }
        }

        scored
    }

    /// Available once the match is over
    pub fn summary(&self) -> Option<MatchSummary> {
        match self.phase {
            Phase::Playing => None,
            Phase::GameOver { winner } => Some(MatchSummary {
                winner,
                player_score: self.player.score,
                opponent_score: self.opponent.score,
                paddle_speed: self.paddle_speed,
                ball_speed: self.ball_speed,
            }),
        }
    }
}

/// Local two-player Pong driven by the engine
pub struct PongGame {
    config: PongConfig,
    session: PongSession,
}

impl PongGame {
    pub fn new(config: PongConfig) -> Self {
        info!("new session");
        Self { config, session: PongSession::new(config) }
    }

    pub fn from_session(session: PongSession) -> Self {
        Self { config: *session.config(), session }
    }

    pub fn session(&self) -> &PongSession {
        &self.session
    }

    /// Replace the finished match with a fresh one; nothing carries over.
    pub fn restart(&mut self) {
        info!("restart");
        self.session = PongSession::new(self.config);
    }
}

impl Game for PongGame {
    type State = PongSession;
    type Control = PongControl;

    fn tick_rate(&self) -> Duration {
        self.config.tick_rate()
    }

    fn control_for(&self, code: KeyCode) -> Option<PongControl> {
        PongControl::from_key(code)
    }

    fn on_key_press(&mut self, code: KeyCode) {
        if is_restart(code) && self.session.is_over() {
            self.restart();
        }
    }

    fn handle_input(&mut self, held: &HeldKeys<PongControl>) {
        self.session.handle_input(|control| held.is_held(control));
    }

    fn on_tick(&mut self) {
        self.session.update();
    }

    fn state(&self) -> &PongSession {
        &self.session
    }
}
