//! Boot-keyboard report slot management.

use crate::emitter::KeySink;
use crate::keycode::Keycode;

/// The six keycode slots of a boot-protocol keyboard report.
///
/// Presses take the first free slot; releases clear their own slot. A
/// seventh simultaneous key is silently dropped (6-key rollover, no
/// rollover error reporting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeySlots {
    slots: [u8; 6],
}

impl KeySlots {
    pub const fn new() -> Self {
        Self { slots: [0; 6] }
    }

    /// The slot bytes in report order, for the keycode array of a HID
    /// keyboard report.
    pub const fn keycodes(&self) -> [u8; 6] {
        self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots == [0; 6]
    }
}

impl KeySink for KeySlots {
    fn press(&mut self, key: Keycode) {
        let code = key.hid_code();
        if self.slots.contains(&code) {
            return;
        }
        if let Some(slot) = self.slots.iter_mut().find(|s| **s == 0) {
            *slot = code;
        }
        // All six slots taken: drop.
    }

    fn release(&mut self, key: Keycode) {
        let code = key.hid_code();
        for slot in self.slots.iter_mut() {
            if *slot == code {
                *slot = 0;
            }
        }
    }
}
