use crate::core::game::Game;
use crate::core::renderer::GameRenderer;
use crate::core::keys::HeldKeys;
use crate::core::terminal::TerminalSession;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};
use tracing::info;

/// What the loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Fixed-rate game loop: poll events, input, update, render, wait for the next tick.
pub struct Engine<G: Game> {
    game: G,
    held: HeldKeys<G::Control>,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G, reports_release: bool) -> Self {
        Self { game, held: HeldKeys::new(reports_release) }
    }

    #[cfg(test)]
    fn game(&self) -> &G {
        &self.game
    }

    pub fn run<R: GameRenderer<G::State>>(mut self, session: &mut TerminalSession) -> Result<()> {
        let tick_rate = self.game.tick_rate();
        let mut next_tick = Instant::now();

        loop {
            // Events that arrived while we were waiting for this tick
            if self.drain_events(Duration::ZERO)? == Flow::Quit {
                break;
            }

            self.game.handle_input(&self.held);
            self.game.on_tick();
            self.held.advance();

            session
                .terminal_mut()
                .draw(|f| R::render(f, self.game.state()))
                .context("failed to draw frame")?;

            // Best-effort pacing: keep listening for input until the next tick is due.
            next_tick += tick_rate;
            let now = Instant::now();
            if next_tick <= now {
                next_tick = now;
                continue;
            }
            if self.drain_events(next_tick - now)? == Flow::Quit {
                break;
            }
            let now = Instant::now();
            if next_tick > now {
                std::thread::sleep(next_tick - now);
            }
        }

        info!("quit requested");
        Ok(())
    }

    /// Read every pending event, waiting at most `timeout` for the first one.
    fn drain_events(&mut self, timeout: Duration) -> Result<Flow> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining).context("failed to poll terminal events")? {
                return Ok(Flow::Continue);
            }
            let event = event::read().context("failed to read terminal event")?;
            if self.dispatch(event) == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    /// Route one terminal event into the held-key set and the game.
    pub fn dispatch(&mut self, event: Event) -> Flow {
        let key = match event {
            Event::Key(key) => key,
            // Releases that happen in another window never reach us
            Event::FocusLost => {
                self.held.clear();
                return Flow::Continue;
            }
            _ => return Flow::Continue,
        };
        if is_quit(&key) {
            return Flow::Quit;
        }

        let control = self.game.control_for(key.code);
        match key.kind {
            KeyEventKind::Press => {
                self.game.on_key_press(key.code);
                if let Some(control) = control {
                    self.held.press(control);
                }
            }
            KeyEventKind::Repeat => {
                if let Some(control) = control {
                    self.held.press(control);
                }
            }
            KeyEventKind::Release => {
                if let Some(control) = control {
                    self.held.release(control);
                }
            }
        }
        Flow::Continue
    }
}

/// Terminal equivalent of closing the window
fn is_quit(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
