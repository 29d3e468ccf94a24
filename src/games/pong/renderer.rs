use super::entities::Rect as FieldRect;
use super::game::{Phase, PongSession};
use crate::core::renderer::GameRenderer;
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::canvas::{Canvas, Context, Line as CanvasLine},
};

const CONTROLS_HINT: &str = "Speed Controls: 1/2 - Paddle, 3/4 - Ball";
const RESTART_HINT: &str = "Press SPACE to restart";

#[derive(Debug)]
pub struct PongRenderer;

impl GameRenderer<PongSession> for PongRenderer {
    fn render(frame: &mut Frame, state: &PongSession) {
        let area = frame.area();
        let config = state.config();
        let (width, height) = (config.window_width as f64, config.window_height as f64);
        // Play-field pixels covered by one terminal column, for centring text
        let column = width / area.width.max(1) as f64;

        let canvas = Canvas::default()
            .background_color(Color::Black)
            .marker(Marker::HalfBlock)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                ctx.draw(&CanvasLine {
                    x1: width / 2.0,
                    y1: 0.0,
                    x2: width / 2.0,
                    y2: height,
                    color: Color::White,
                });

                fill(ctx, height, &state.player.rect, Color::White);
                fill(ctx, height, &state.opponent.rect, Color::White);
                fill(ctx, height, &state.ball.rect, Color::White);

                // Text positions are top-left based like the entities; the canvas y axis points up.
                let bold = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
                let gray = Style::default().fg(Color::Gray);
                ctx.print(width / 4.0, height - 20.0, Line::styled(state.player.score.to_string(), bold));
                ctx.print(width * 3.0 / 4.0, height - 20.0, Line::styled(state.opponent.score.to_string(), bold));

                ctx.print(10.0, 70.0, Line::styled(format!("Paddle Speed: {}", state.paddle_speed()), gray));
                ctx.print(10.0, 40.0, Line::styled(format!("Ball Speed: {}", state.ball_speed()), gray));
                ctx.print(centred(width, column, CONTROLS_HINT), 30.0, Line::styled(CONTROLS_HINT, gray));

                if let Phase::GameOver { winner } = state.phase() {
                    let banner = format!("{} Player Wins!", winner.label());
                    ctx.print(centred(width, column, &banner), height / 2.0, Line::styled(banner.clone(), bold));
                    ctx.print(
                        centred(width, column, RESTART_HINT),
                        height / 2.0 - 40.0,
                        Line::styled(RESTART_HINT, gray),
                    );
                }
            });

        frame.render_widget(canvas, area);
    }
}

/// Filled rectangle: a vertical line for every field pixel of width.
fn fill(ctx: &mut Context, field_height: f64, rect: &FieldRect, color: Color) {
    let top = field_height - rect.top() as f64;
    let bottom = field_height - rect.bottom() as f64;
    let left = rect.left() as f64;
    let right = rect.right() as f64;
    let mut x = left;
    while x <= right {
        ctx.draw(&CanvasLine { x1: x, y1: bottom, x2: x, y2: top, color });
        x += 1.0;
    }
}

/// Left x that centres `text` horizontally on the field.
fn centred(field_width: f64, column: f64, text: &str) -> f64 {
    let text_width = text.chars().count() as f64 * column;
    ((field_width - text_width) / 2.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PongConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(state: &PongSession) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| PongRenderer::render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn shows_speed_readout_and_controls() {
        let state = PongSession::with_seed(PongConfig::default(), 1);
        let text = screen(&state);
        assert!(text.contains("Paddle Speed: 7"));
        assert!(text.contains("Ball Speed: 7"));
        assert!(text.contains(CONTROLS_HINT));
        assert!(!text.contains("Wins!"));
    }

    #[test]
    fn shows_winner_banner_when_over() {
        let mut state = PongSession::with_seed(PongConfig::default(), 1);
        state.player.score = 4;
        state.ball.rect.x = 780.0;
        state.ball.rect.y = 100.0;
        state.ball.speed_x = 7.0;
        state.ball.speed_y = 7.0;
        state.update();

        let text = screen(&state);
        assert!(text.contains("Left Player Wins!"));
        assert!(text.contains(RESTART_HINT));
    }

    #[test]
    fn centring_accounts_for_text_width() {
        assert_eq!(centred(800.0, 8.0, "abcd"), 384.0);
        assert_eq!(centred(800.0, 8.0, &"x".repeat(200)), 0.0);
    }
}
