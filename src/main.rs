//! Snapshot firmware: bring up the OV2640, take one JPEG picture over DCMI and report where it
//! landed in memory.

#![no_main]
#![no_std]

use ov2640_dvp::board::{self, dcmi};
use ov2640_dvp::ov2640::{capture, HalInterface, ImageResolution, Ov2640};

use core::panic::PanicInfo;
use cortex_m_rt::entry;
use rtt_target::{rprintln, rtt_init, set_print_channel};
use stm32f7xx_hal::{
    delay::Delay,
    i2c::{BlockingI2c, Mode},
    interrupt, pac,
    prelude::*,
    rcc::{HSEClock, HSEClockMode},
};

/// Output size of the picture.
const IMAGE_RESOLUTION: ImageResolution = ImageResolution::Qvga;

/// Capture buffer size, enough for a QVGA JPEG with room to spare.
const CAPTURE_BUF_SIZE: usize = 96 * 1024;

/// The DMA writes whole words.
#[repr(align(4))]
struct CaptureBuf([u8; CAPTURE_BUF_SIZE]);

static mut CAPTURE_BUF: CaptureBuf = CaptureBuf([0; CAPTURE_BUF_SIZE]);

#[entry]
fn main() -> ! {
    // Setup RTT for logging
    let channels = rtt_init! {
        up: {
            0: {
                size: 4096
                mode: BlockIfFull
                name: "Terminal"
            }
        }
    };

    set_print_channel(channels.up.0);

    // Get peripherals
    let pac_periph = pac::Peripherals::take().unwrap();
    let cm_periph = cortex_m::Peripherals::take().unwrap();

    // Clocks: HSE from the on-board oscillator, SYSCLK 216 MHz. The camera module has its own
    // 24 MHz oscillator for XVCLK.
    let mut rcc = pac_periph.RCC.constrain();
    let hse_cfg = HSEClock::new(board::get_hse_freq(), HSEClockMode::Oscillator);
    let clocks = rcc.cfgr.hse(hse_cfg).sysclk(216.mhz()).freeze();

    let delay = Delay::new(cm_periph.SYST, clocks);

    // GPIO configuration
    let (scl, sda, pwdn, rst) = board::configure_pins();

    // I2C1 configuration (SCCB)
    let i2c = BlockingI2c::i2c1(
        pac_periph.I2C1,
        (scl, sda),
        Mode::standard(100.khz()),
        clocks,
        &mut rcc.apb1,
        10000,
    );

    // Establish communication with the OV2640
    let mut cam = Ov2640::with_interface(HalInterface::new(i2c, pwdn, rst, delay));
    cam.init().unwrap();
    rprintln!("OV2640 initialization complete!");

    // Baseline, every parameter at its default, then JPEG output at the requested size
    cam.table_init().unwrap();
    cam.apply_defaults().unwrap();
    cam.table_jpeg_init().unwrap();
    cam.set_image_resolution(IMAGE_RESOLUTION).unwrap();
    rprintln!("JPEG {:?} setup complete!", IMAGE_RESOLUTION);

    // Let the exposure settle before taking the picture
    cam.interface_mut().unwrap().delay_ms(500_u32);

    let mut dcmi = dcmi::Dcmi::new(pac_periph.DCMI, pac_periph.DMA2);
    let buf = unsafe { &mut CAPTURE_BUF.0 };

    match capture::snapshot(
        &mut dcmi,
        buf,
        cam.interface_mut().unwrap(),
        capture::DEFAULT_TIMEOUT_MS,
    ) {
        Ok(frame) => {
            let addr = buf.as_ptr() as usize + frame.start;
            rprintln!("JPEG image at {:#010x}, {} bytes", addr, frame.len());
        }
        Err(e) => rprintln!("Capture failed: {}", e),
    }

    loop {}
}

#[interrupt]
fn DCMI() {
    dcmi::dcmi_isr();
}

#[inline(never)]
#[panic_handler]
fn panic(_info: &PanicInfo) -> ! {
    rprintln!("Panicked!");
    rprintln!("{:?}", _info);
    loop {}
}
