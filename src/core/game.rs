/// Core game interface for the pongterm engine
use crate::core::keys::HeldKeys;
use crossterm::event::KeyCode;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

/// Main game trait driven by the engine loop.
///
/// Each tick the engine polls terminal events, hands edge-triggered presses to
/// `on_key_press`, then calls `handle_input` with the held controls, `on_tick`,
/// and finally renders `state()`.
pub trait Game {
    /// Snapshot handed to the renderer
    type State;

    /// Abstract control a physical key maps onto
    type Control: Copy + Eq + Hash + Debug;

    /// Fixed simulation rate
    fn tick_rate(&self) -> Duration;

    /// Map a physical key to a control; unmapped keys are ignored.
    fn control_for(&self, code: KeyCode) -> Option<Self::Control>;

    /// One-shot reaction to a key going down (not repeats).
    fn on_key_press(&mut self, _code: KeyCode) {}

    /// Level-triggered input, called once per tick.
    fn handle_input(&mut self, held: &HeldKeys<Self::Control>);

    /// Advance the simulation by one tick.
    fn on_tick(&mut self);

    fn state(&self) -> &Self::State;
}
