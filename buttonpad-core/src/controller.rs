//! The pad controller: a fixed set of buttons polled in a fixed order.

use crate::button::{Button, RawInput};
use crate::emitter::KeySink;
use crate::time::TickMs;

/// Owns every button on the pad.
///
/// `update` polls the buttons in array order every tick, so simultaneous
/// actuations always emit their events in the same order for a given input
/// sequence. The button set is fixed at construction; keycodes must be
/// unique across buttons.
pub struct Controller<I: RawInput, const N: usize> {
    buttons: [Button<I>; N],
}

impl<I: RawInput, const N: usize> Controller<I, N> {
    pub fn new(buttons: [Button<I>; N]) -> Self {
        Self { buttons }
    }

    /// Advance every button by one tick, in declaration order.
    pub fn update<S: KeySink>(&mut self, now: TickMs, sink: &mut S) {
        for button in self.buttons.iter_mut() {
            button.update(now, sink);
        }
    }

    /// Release every key currently held on the host.
    ///
    /// The clean-shutdown sweep: run this before the device stops ticking
    /// (or when the host goes away) so no key stays latched down.
    pub fn release_all<S: KeySink>(&mut self, sink: &mut S) {
        for button in self.buttons.iter_mut() {
            button.release_key(sink);
        }
    }

    pub fn buttons(&self) -> &[Button<I>; N] {
        &self.buttons
    }
}
