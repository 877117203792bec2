//! Core logic for a USB-HID button pad.
//!
//! Everything with temporal behavior lives here, free of hardware and
//! clock dependencies so it runs under the host test harness unchanged:
//!
//! - [`Debouncer`]: raw sample stream → stable logical level
//! - [`ActuationDetector`]: stable level → confirmed press/release intent
//! - [`KeyEmitter`]: intent → idempotent press/release calls on a [`KeySink`]
//! - [`KeySlots`]: a `KeySink` filling boot-keyboard report slots
//! - [`Controller`]: a fixed set of [`Button`]s polled once per tick
//!
//! Callers supply raw levels through [`RawInput`] and the current time as
//! [`TickMs`]; nothing in this crate reads a clock or a pin itself.

#![no_std]

pub mod actuation;
pub mod button;
pub mod controller;
pub mod debounce;
pub mod emitter;
pub mod keycode;
pub mod report;
pub mod time;

pub use actuation::{ActuationDetector, ActuationState, KeyDrive};
pub use button::{Button, ButtonConfig, RawInput};
pub use controller::Controller;
pub use debounce::Debouncer;
pub use emitter::{KeyEmitter, KeySink};
pub use keycode::Keycode;
pub use report::KeySlots;
pub use time::TickMs;
