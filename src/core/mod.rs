pub mod engine;
pub mod game;
pub mod keys;      // Level-triggered key state
pub mod renderer;
pub mod terminal;  // Terminal session wrapper
