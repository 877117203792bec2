//! Idempotent key emission.

use crate::keycode::Keycode;

/// Receives press and release events destined for the host.
///
/// Implementations are thin transports: the firmware fills HID report
/// slots, tests record the calls. A sink only ever sees a strictly
/// alternating press/release sequence per keycode; [`KeyEmitter`]
/// guarantees it.
pub trait KeySink {
    fn press(&mut self, key: Keycode);
    fn release(&mut self, key: Keycode);
}

/// Owns the host-side state of one key.
///
/// `press` and `release` forward to the sink exactly on a state change and
/// are no-ops otherwise, so the host never sees a duplicate press or a
/// release without a matching press, even if the caller re-asserts the
/// same drive every tick.
#[derive(Debug, Clone, Copy)]
pub struct KeyEmitter {
    key: Keycode,
    key_down: bool,
}

impl KeyEmitter {
    pub const fn new(key: Keycode) -> Self {
        Self {
            key,
            key_down: false,
        }
    }

    pub fn press<S: KeySink>(&mut self, sink: &mut S) {
        if !self.key_down {
            sink.press(self.key);
            self.key_down = true;
        }
    }

    pub fn release<S: KeySink>(&mut self, sink: &mut S) {
        if self.key_down {
            sink.release(self.key);
            self.key_down = false;
        }
    }

    /// Whether a press has been emitted without a matching release.
    pub fn is_key_down(&self) -> bool {
        self.key_down
    }

    pub fn key(&self) -> Keycode {
        self.key
    }
}
