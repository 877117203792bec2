#![no_std]
#![no_main]

use buttonpad_core::{Button, ButtonConfig, Controller, KeySlots, Keycode, RawInput, TickMs};
use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::{Driver, InterruptHandler};
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_time::{Duration, Instant, Ticker};
use embassy_usb::class::hid::{HidReader, HidReaderWriter, HidWriter, State};
use embassy_usb::msos::windows_version;
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;
use usbd_hid::descriptor::{KeyboardReport, SerializedDescriptor};
use {defmt_rtt as _, panic_probe as _};

mod usb;

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => InterruptHandler<USB>;
});

/// Keycode slot arrays queued from the tick loop to the HID writer task.
type ReportChannel = Channel<ThreadModeRawMutex, [u8; 6], 8>;
type ReportSender = Sender<'static, ThreadModeRawMutex, [u8; 6], 8>;
type ReportReceiver = Receiver<'static, ThreadModeRawMutex, [u8; 6], 8>;
static REPORT_CHANNEL: ReportChannel = Channel::new();

// Descriptors for the USB. Static so we can share the USB handles around tasks
static CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();

// The state for the USB
static STATE: StaticCell<State> = StaticCell::new();

// The USB device handler
static USB_DEV_HANDLER: StaticCell<usb::PadDeviceHandler> = StaticCell::new();

/// A GPIO wired as one pad button: pulled down, pressed drives it high.
struct PadInput(Input<'static>);

impl PadInput {
    fn new(mut input: Input<'static>) -> Self {
        input.set_schmitt(true);
        Self(input)
    }
}

impl RawInput for PadInput {
    fn read(&mut self) -> bool {
        self.0.is_high()
    }
}

fn pad_button(pin: Input<'static>, key: Keycode, now: TickMs) -> Button<PadInput> {
    Button::new(PadInput::new(pin), ButtonConfig::new(key), now)
}

/// The core works on a wrapping 32-bit millisecond counter.
fn now_ticks() -> TickMs {
    TickMs::new(Instant::now().as_millis() as u32)
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Connected a button pad!");
    info!("Configuring...");

    let p = embassy_rp::init(Default::default());

    // Set up USB
    let driver = Driver::new(p.USB, Irqs);
    let device_handler = USB_DEV_HANDLER.init(usb::PadDeviceHandler::new());

    // TODO: this is a test code from pid.codes, change before release
    let mut config = Config::new(0x16c0, 0x27dd);
    config.manufacturer = Some("buttonpad");
    config.product = Some("USB Button Pad");
    config.serial_number = Some("000001");
    config.max_power = 100;
    config.max_packet_size_0 = 64;

    let mut builder = Builder::new(
        driver,
        config,
        &mut CONFIG_DESC.init([0; 256])[..],
        &mut BOS_DESC.init([0; 256])[..],
        &mut MSOS_DESC.init([0; 256])[..],
        &mut CONTROL_BUF.init([0; 64])[..],
    );
    builder.handler(device_handler);
    builder.msos_descriptor(windows_version::WIN10, 2);

    // Create the HID interface
    let hid_config = embassy_usb::class::hid::Config {
        report_descriptor: KeyboardReport::desc(),
        request_handler: None,
        poll_ms: 10,
        max_packet_size: 64,
    };
    let hid = HidReaderWriter::<_, 1, 8>::new(&mut builder, STATE.init(State::new()), hid_config);
    let usb = builder.build();

    // Indicator lamps are static-on for the life of the device.
    let _lamps = [
        Output::new(p.PIN_11, Level::High),
        Output::new(p.PIN_15, Level::High),
        Output::new(p.PIN_16, Level::High),
        Output::new(p.PIN_20, Level::High),
    ];

    // One button per key, polled in this order every tick.
    let now = now_ticks();
    let controller = Controller::new([
        pad_button(Input::new(p.PIN_10, Pull::Down), Keycode::N4, now),
        pad_button(Input::new(p.PIN_21, Pull::Down), Keycode::N5, now),
        pad_button(Input::new(p.PIN_17, Pull::Down), Keycode::N6, now),
        pad_button(Input::new(p.PIN_14, Pull::Down), Keycode::N7, now),
    ]);

    info!("Configuration complete");

    info!("Spawning USB handling task");
    unwrap!(spawner.spawn(usb_loop(usb)));

    info!("Spawning USB HID transmission task");
    let (reader, writer) = hid.split();
    unwrap!(spawner.spawn(usb_hid_loop(REPORT_CHANNEL.receiver(), writer)));

    info!("Spawning USB request handler task");
    unwrap!(spawner.spawn(usb_request_handler(reader)));

    info!("Starting button poll loop");
    run_pad(controller, REPORT_CHANNEL.sender()).await
}

/// The once-per-millisecond poll loop. Owns the controller and the report
/// slots for the life of the device.
async fn run_pad(mut controller: Controller<PadInput, 4>, sender: ReportSender) -> ! {
    let mut slots = KeySlots::new();
    let mut last_sent = KeySlots::new();
    let mut was_configured = false;
    let mut ticker = Ticker::every(Duration::from_millis(1));

    loop {
        let configured = usb::is_configured();
        if was_configured && !configured {
            // Host went away mid-press: don't leave keys latched down
            // across re-enumeration.
            info!("USB deconfigured, releasing held keys");
            controller.release_all(&mut slots);
        }
        was_configured = configured;

        controller.update(now_ticks(), &mut slots);

        // Queue a report only when the slots changed. A full queue leaves
        // `last_sent` alone, so the next tick retries.
        if slots != last_sent && sender.try_send(slots.keycodes()).is_ok() {
            last_sent = slots;
        }

        ticker.next().await;
    }
}

/// The underlying USB send/receive loop on the [UsbDevice]
#[embassy_executor::task]
async fn usb_loop(mut usb: UsbDevice<'static, Driver<'static, USB>>) -> ! {
    usb.run().await
}

/// Drains queued keycode slots and writes them out as keyboard reports.
#[embassy_executor::task]
async fn usb_hid_loop(
    receiver: ReportReceiver,
    mut writer: HidWriter<'static, Driver<'static, USB>, 8>,
) {
    info!("Starting report writer loop");
    loop {
        let keycodes = receiver.receive().await;
        let report = KeyboardReport {
            keycodes,
            leds: 0,
            modifier: 0,
            reserved: 0,
        };
        match writer.write_serialize(&report).await {
            Ok(()) => {}
            Err(e) => warn!("Failed to send report: {:?}", e),
        };
    }
}

/// Handles USB requests received on the [`HidReader`]
#[embassy_executor::task]
async fn usb_request_handler(reader: HidReader<'static, Driver<'static, USB>, 1>) {
    let mut request_handler = usb::PadRequestHandler;
    reader.run(false, &mut request_handler).await;
}
