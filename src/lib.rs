pub mod config;
pub mod core;
pub mod games;

// Re-export for convenience
pub use crate::config::PongConfig;
pub use crate::core::game::Game;
pub use crate::core::renderer::GameRenderer;
