/// Generic game renderer trait
use ratatui::Frame;

/// Draws one game state into a Ratatui frame; called once per tick after the update.
pub trait GameRenderer<S> {
    fn render(frame: &mut Frame, state: &S);
}
