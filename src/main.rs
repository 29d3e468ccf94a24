use anyhow::Result;
use pongterm::core::terminal::TerminalSession;
use pongterm::games::pong;
use pongterm::PongConfig;
use std::io::IsTerminal;
use tracing::{info, Level};

fn main() -> Result<()> {
    init_tracing();

    let config = PongConfig::default();
    info!(?config, "starting pong");

    // The session restores the terminal when it goes out of scope, before any error is reported.
    let result = {
        let mut session = TerminalSession::start()?;
        pong::run_game(&mut session, config)
    };

    if let Err(e) = &result {
        tracing::error!(error = ?e, "pong exited with an error");
    }
    result
}

/// Logs go to stderr, but only when it is redirected: the game owns the screen.
fn init_tracing() {
    if std::io::stderr().is_terminal() {
        return;
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(Level::DEBUG)
        .init();
}
