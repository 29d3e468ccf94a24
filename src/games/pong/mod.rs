pub mod entities;
pub mod game;
pub mod input;
pub mod renderer;

pub use entities::{Ball, Direction, Paddle, Rect};
pub use game::{MatchSummary, Phase, PongGame, PongSession, Side};
pub use input::PongControl;
pub use renderer::PongRenderer;

use crate::config::PongConfig;
use crate::core::engine::Engine;
use crate::core::terminal::TerminalSession;
use anyhow::Result;

/// Game runner for Pong
pub fn run_game(session: &mut TerminalSession, config: PongConfig) -> Result<()> {
    let game = PongGame::new(config);
    let engine = Engine::new(game, session.reports_release());
    engine.run::<PongRenderer>(session)
}
