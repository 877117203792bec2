//! Firmware debouncing of raw digital inputs.
//!
//! A raw level is accepted as the stable state only after it has held
//! steady for the configured window. Bounce faster than the window never
//! reaches [`Debouncer::value`], so at most one edge is reported per
//! physical actuation. A window of zero passes samples through unchanged,
//! for callers that defer all filtering to the actuation state machine.

use crate::time::TickMs;

/// Default stability window in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 10;

/// Tracks one raw input and exposes its debounced level plus the edge
/// observed on the most recent update.
///
/// Levels here are raw electrical levels. Whether "high" means "pressed"
/// is the actuation layer's concern, not the debouncer's.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    window_ms: u32,
    /// Accepted stable level.
    stable: bool,
    /// Most recent raw sample, not yet necessarily stable.
    candidate: bool,
    /// Did `stable` change on the most recent update?
    changed: bool,
    /// When the raw signal last moved off the previous sample.
    last_flip: TickMs,
}

impl Debouncer {
    pub const fn new(initial: bool, window_ms: u32, now: TickMs) -> Self {
        Self {
            window_ms,
            stable: initial,
            candidate: initial,
            changed: false,
            last_flip: now,
        }
    }

    /// Feed one raw sample. Call once per tick.
    pub fn update(&mut self, raw: bool, now: TickMs) {
        self.changed = false;

        if raw != self.candidate {
            self.candidate = raw;
            self.last_flip = now;
        }

        if raw != self.stable && now.since(self.last_flip) >= self.window_ms {
            self.stable = raw;
            self.changed = true;
        }
    }

    /// The debounced raw level.
    pub fn value(&self) -> bool {
        self.stable
    }

    /// Did the debounced level go low→high on the most recent update?
    pub fn rose(&self) -> bool {
        self.changed && self.stable
    }

    /// Did the debounced level go high→low on the most recent update?
    pub fn fell(&self) -> bool {
        self.changed && !self.stable
    }
}
