/// Level-triggered key state built from the terminal's edge-triggered key events
use std::collections::HashMap;
use std::hash::Hash;

/// How many ticks a key stays held after its last press/repeat when the
/// terminal cannot report releases.
pub const FALLBACK_HOLD_TICKS: u64 = 8;

/// The set of controls currently held down.
///
/// Terminals that speak the keyboard enhancement protocol report releases, so a
/// key is held from press until release. Elsewhere only presses and auto-repeats
/// arrive, and a key counts as held for a short window after the last one.
#[derive(Debug, Clone)]
pub struct HeldKeys<C> {
    last_seen: HashMap<C, u64>,
    tick: u64,
    reports_release: bool,
    hold_ticks: u64,
}

impl<C: Copy + Eq + Hash> HeldKeys<C> {
    pub fn new(reports_release: bool) -> Self {
        Self {
            last_seen: HashMap::new(),
            tick: 0,
            reports_release,
            hold_ticks: FALLBACK_HOLD_TICKS,
        }
    }

    #[cfg(test)]
    pub fn with_hold_ticks(mut self, hold_ticks: u64) -> Self {
        self.hold_ticks = hold_ticks.max(1);
        self
    }

    pub fn press(&mut self, control: C) {
        self.last_seen.insert(control, self.tick);
    }

    pub fn release(&mut self, control: C) {
        self.last_seen.remove(&control);
    }

    pub fn is_held(&self, control: C) -> bool {
        self.last_seen.contains_key(&control)
    }

    /// Move to the next tick, dropping keys whose fallback window ran out.
    pub fn advance(&mut self) {
        self.tick += 1;
        if !self.reports_release {
            let (tick, hold) = (self.tick, self.hold_ticks);
            self.last_seen.retain(|_, seen| tick - *seen < hold);
        }
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_held_until_released_when_releases_are_reported() {
        let mut keys = HeldKeys::new(true);
        keys.press('w');
        for _ in 0..100 {
            keys.advance();
        }
        assert!(keys.is_held('w'));
        keys.release('w');
        assert!(!keys.is_held('w'));
    }

    #[test]
    fn key_expires_after_fallback_window() {
        let mut keys = HeldKeys::new(false).with_hold_ticks(3);
        keys.press('w');
        keys.advance();
        keys.advance();
        assert!(keys.is_held('w'));
        keys.advance();
        assert!(!keys.is_held('w'));
    }

    #[test]
    fn repeat_events_extend_the_fallback_window() {
        let mut keys = HeldKeys::new(false).with_hold_ticks(3);
        keys.press('s');
        keys.advance();
        keys.advance();
        keys.press('s');
        keys.advance();
        keys.advance();
        assert!(keys.is_held('s'));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut keys = HeldKeys::new(true);
        keys.press('1');
        keys.press('2');
        keys.clear();
        assert!(!keys.is_held('1'));
        assert!(!keys.is_held('2'));
    }
}
