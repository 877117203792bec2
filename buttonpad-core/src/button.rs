//! One physical button: input source, debouncer, actuation detection and
//! key emission chained per tick.

use crate::actuation::{
    ActuationDetector, ActuationState, KeyDrive, DEFAULT_PRESS_CONFIRM_MS,
    DEFAULT_RELEASE_CONFIRM_MS,
};
use crate::debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
use crate::emitter::{KeyEmitter, KeySink};
use crate::keycode::Keycode;
use crate::time::TickMs;

/// Source of one raw digital level, polled once per tick.
///
/// Must not block beyond a negligible delay. An input that cannot be read
/// should report its released level rather than fail.
pub trait RawInput {
    fn read(&mut self) -> bool;
}

/// Per-button configuration, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct ButtonConfig {
    /// The key this button maps to. One keycode per button.
    pub key: Keycode,
    /// When set, a low raw level means "pressed" (pull-up wiring).
    pub active_down: bool,
    pub debounce_ms: u32,
    pub press_confirm_ms: u32,
    pub release_confirm_ms: u32,
}

impl ButtonConfig {
    pub const fn new(key: Keycode) -> Self {
        Self {
            key,
            active_down: false,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            press_confirm_ms: DEFAULT_PRESS_CONFIRM_MS,
            release_confirm_ms: DEFAULT_RELEASE_CONFIRM_MS,
        }
    }

    pub const fn active_down(mut self, active_down: bool) -> Self {
        self.active_down = active_down;
        self
    }

    pub const fn debounce_ms(mut self, ms: u32) -> Self {
        self.debounce_ms = ms;
        self
    }

    pub const fn confirm_ms(mut self, press_ms: u32, release_ms: u32) -> Self {
        self.press_confirm_ms = press_ms;
        self.release_confirm_ms = release_ms;
        self
    }
}

/// A single physical control bound to one key.
///
/// Constructed once at startup and polled for the lifetime of the device.
pub struct Button<I: RawInput> {
    input: I,
    debouncer: Debouncer,
    detector: ActuationDetector,
    emitter: KeyEmitter,
}

impl<I: RawInput> Button<I> {
    /// Samples the input once so the debouncer starts from the real level
    /// instead of assuming "released".
    pub fn new(mut input: I, config: ButtonConfig, now: TickMs) -> Self {
        let initial = input.read();
        Self {
            input,
            debouncer: Debouncer::new(initial, config.debounce_ms, now),
            detector: ActuationDetector::new(
                config.active_down,
                config.press_confirm_ms,
                config.release_confirm_ms,
                now,
            ),
            emitter: KeyEmitter::new(config.key),
        }
    }

    /// Poll the input and advance the whole chain by one tick.
    pub fn update<S: KeySink>(&mut self, now: TickMs, sink: &mut S) {
        let raw = self.input.read();
        self.debouncer.update(raw, now);
        match self.detector.update(self.debouncer.value(), now) {
            Some(KeyDrive::Press) => self.emitter.press(sink),
            Some(KeyDrive::Release) => self.emitter.release(sink),
            None => {}
        }
    }

    /// Release the host-side key if it is held, regardless of FSM state.
    ///
    /// The detector is left alone: if the button is still physically held
    /// when polling resumes, the confirmed-press self-loop re-asserts the
    /// press on the next tick.
    pub fn release_key<S: KeySink>(&mut self, sink: &mut S) {
        self.emitter.release(sink);
    }

    pub fn key(&self) -> Keycode {
        self.emitter.key()
    }

    pub fn is_key_down(&self) -> bool {
        self.emitter.is_key_down()
    }

    pub fn actuation_state(&self) -> ActuationState {
        self.detector.state()
    }
}
