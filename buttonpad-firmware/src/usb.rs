//! USB device lifecycle and HID request plumbing.

use core::sync::atomic::{AtomicBool, Ordering};

use defmt::*;
use embassy_usb::Handler;
use embassy_usb::class::hid::{ReportId, RequestHandler};
use embassy_usb::control::OutResponse;

/// Set by the device handler, read by the tick loop to decide when a
/// release-all sweep is due.
static CONFIGURED: AtomicBool = AtomicBool::new(false);

/// Whether the host currently has the device configured.
pub fn is_configured() -> bool {
    CONFIGURED.load(Ordering::Relaxed)
}

/// Answers HID class requests on the keyboard interface. The pad has no
/// host-driven outputs, so everything is log-and-acknowledge.
#[derive(Default)]
pub struct PadRequestHandler;

impl RequestHandler for PadRequestHandler {
    fn get_report(&mut self, id: ReportId, _buf: &mut [u8]) -> Option<usize> {
        info!("Get report for {:?}", id);
        None
    }

    fn set_report(&mut self, id: ReportId, data: &[u8]) -> OutResponse {
        info!("Set report for {:?}: {=[u8]}", id, data);
        OutResponse::Accepted
    }

    fn set_idle_ms(&mut self, id: Option<ReportId>, dur: u32) {
        info!("Set idle rate for {:?} to {:?}", id, dur);
    }

    fn get_idle_ms(&mut self, id: Option<ReportId>) -> Option<u32> {
        info!("Get idle rate for {:?}", id);
        None
    }
}

/// Tracks the device's configured state across bus events.
pub struct PadDeviceHandler;

impl PadDeviceHandler {
    pub fn new() -> Self {
        CONFIGURED.store(false, Ordering::Relaxed);
        Self
    }
}

impl Handler for PadDeviceHandler {
    fn enabled(&mut self, enabled: bool) {
        CONFIGURED.store(false, Ordering::Relaxed);
        if enabled {
            info!("Device enabled");
        } else {
            info!("Device disabled");
        }
    }

    fn reset(&mut self) {
        CONFIGURED.store(false, Ordering::Relaxed);
        info!("Bus reset");
    }

    fn addressed(&mut self, addr: u8) {
        CONFIGURED.store(false, Ordering::Relaxed);
        info!("USB address set to: {}", addr);
    }

    fn configured(&mut self, configured: bool) {
        CONFIGURED.store(configured, Ordering::Relaxed);
        if configured {
            info!("Device configured");
        } else {
            info!("Device no longer configured");
        }
    }
}
