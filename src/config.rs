/// Compiled-in game configuration
use std::time::Duration;

/// Every tunable the game uses. The binary only ever runs with `PongConfig::default()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PongConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance between each paddle and its side wall
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub initial_paddle_speed: u32,
    pub initial_ball_speed: u32,
    pub min_speed: u32,
    pub max_speed: u32,
    pub speed_step: u32,
    /// Horizontal speed multiplier applied on every paddle contact
    pub paddle_bounce: f32,
    pub winning_score: u32,
    pub ticks_per_second: u32,
}

impl Default for PongConfig {
    fn default() -> Self {
        Self {
            window_width: 800.0,
            window_height: 600.0,
            paddle_width: 15.0,
            paddle_height: 90.0,
            paddle_inset: 50.0,
            ball_size: 15.0,
            initial_paddle_speed: 7,
            initial_ball_speed: 7,
            min_speed: 3,
            max_speed: 15,
            speed_step: 1,
            paddle_bounce: 1.1,
            winning_score: 5,
            ticks_per_second: 60,
        }
    }
}

impl PongConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    /// Clamp a speed setting into `[min_speed, max_speed]`.
    pub fn clamp_speed(&self, speed: u32) -> u32 {
        speed.clamp(self.min_speed, self.max_speed)
    }
}
