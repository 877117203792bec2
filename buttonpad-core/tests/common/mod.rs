//! Shared fixtures for buttonpad-core integration tests.

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::Cell;
use std::rc::Rc;

use buttonpad_core::{Button, KeySink, Keycode, RawInput, TickMs};

// ============================================================================
// Scripted input pin
// ============================================================================

/// A pin whose level the test flips from outside while a Button owns a
/// clone of it.
#[derive(Clone)]
pub struct TestPin {
    level: Rc<Cell<bool>>,
}

impl TestPin {
    pub fn new(initial: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(initial)),
        }
    }

    pub fn set(&self, level: bool) {
        self.level.set(level);
    }
}

impl RawInput for TestPin {
    fn read(&mut self) -> bool {
        self.level.get()
    }
}

// ============================================================================
// Recording key sink
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Press(Keycode),
    Release(Keycode),
}

/// Records every emission so tests can assert on the exact host-visible
/// event sequence.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<KeyEvent>,
}

impl KeySink for RecordingSink {
    fn press(&mut self, key: Keycode) {
        self.events.push(KeyEvent::Press(key));
    }

    fn release(&mut self, key: Keycode) {
        self.events.push(KeyEvent::Release(key));
    }
}

impl RecordingSink {
    /// Every key's event stream must strictly alternate press/release,
    /// starting with a press.
    pub fn assert_alternating(&self) {
        let mut down: Vec<Keycode> = Vec::new();
        for event in &self.events {
            match *event {
                KeyEvent::Press(key) => {
                    assert!(!down.contains(&key), "duplicate press of {key:?}");
                    down.push(key);
                }
                KeyEvent::Release(key) => {
                    assert!(down.contains(&key), "orphan release of {key:?}");
                    down.retain(|k| *k != key);
                }
            }
        }
    }
}

// ============================================================================
// Tick driver
// ============================================================================

/// Drive one button from `from` to `to` (exclusive) in `step`-ms ticks,
/// with the raw level given by `level(t)`.
pub fn drive<F: Fn(u32) -> bool>(
    button: &mut Button<TestPin>,
    pin: &TestPin,
    sink: &mut RecordingSink,
    from: u32,
    to: u32,
    step: u32,
    level: F,
) {
    let mut t = from;
    while t < to {
        pin.set(level(t));
        button.update(TickMs::new(t), sink);
        t += step;
    }
}
