/// Terminal session that handles all the low-level terminal setup and teardown
use anyhow::{Context, Result};
use crossterm::event::{
    DisableFocusChange, EnableFocusChange, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use ratatui::DefaultTerminal;
use std::io::stdout;
use tracing::{debug, warn};

/// Raw mode + alternate screen for the lifetime of the value.
///
/// Also asks the terminal to report key releases when it can, which is what
/// makes held keys behave like a real keyboard state, and to report focus
/// changes. Restores everything on drop.
pub struct TerminalSession {
    terminal: DefaultTerminal,
    reports_release: bool,
}

impl TerminalSession {
    pub fn start() -> Result<Self> {
        let terminal = ratatui::try_init().context("failed to initialise terminal")?;
        if let Err(e) = crossterm::execute!(stdout(), EnableFocusChange) {
            warn!(error = ?e, "could not enable focus reporting");
        }

        let reports_release = match crossterm::terminal::supports_keyboard_enhancement() {
            Ok(true) => {
                let flags = KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES;
                match crossterm::execute!(stdout(), PushKeyboardEnhancementFlags(flags)) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!(error = ?e, "could not enable key release reporting");
                        false
                    }
                }
            }
            Ok(false) => false,
            Err(e) => {
                debug!(error = ?e, "keyboard enhancement query failed");
                false
            }
        };
        debug!(reports_release, "terminal ready");

        Ok(Self { terminal, reports_release })
    }

    /// Whether key releases arrive as events
    pub fn reports_release(&self) -> bool {
        self.reports_release
    }

    pub fn terminal_mut(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = crossterm::execute!(stdout(), DisableFocusChange);
        if self.reports_release {
            let _ = crossterm::execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        ratatui::restore();
    }
}
