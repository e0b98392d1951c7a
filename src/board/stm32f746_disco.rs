//! Board specific functions for the STM32F746G Discovery Board.

use embedded_hal::digital::v2::OutputPin;
use stm32f7xx_hal::{
    gpio::{self, Alternate, Output, PushPull, Speed, AF4},
    pac,
    prelude::*,
    time::MegaHertz,
};

pub type SclPin = gpio::gpiob::PB8<Alternate<AF4>>;
pub type SdaPin = gpio::gpiob::PB9<Alternate<AF4>>;

/// DCMI_PWR_EN, drives the camera module's power switch. Low powers the sensor.
pub type PwdnPin = gpio::gpioh::PH13<Output<PushPull>>;

/// Sensor RESETB, wired to Arduino header D8.
pub type RstPin = gpio::gpioi::PI2<Output<PushPull>>;

/// DCMI inputs: pulled up, open drain, fast.
macro_rules! dcmi_input {
    ($pin:expr) => {
        $pin.into_alternate_af13()
            .internal_pull_up(true)
            .set_open_drain()
            .set_speed(Speed::VeryHigh)
    };
}

/// Configure the camera connector pins and return the ones the OV2640 driver owns. Note that the
/// peripherals are stolen, so this should only be done during init to be safe.
///
/// Pin configuration:
///
///     I2C1 SCL:   PB8  --> OV2640 SIO_C
///     I2C1 SDA:   PB9 <--> OV2640 SIO_D
///     GPIO:       PH13 --> OV2640 PWDN (through the module power switch)
///     GPIO:       PI2  --> OV2640 RESETB
///     (HW OSC 24M)     --> OV2640 XVCLK
///     DCMI PCLK:  PA6  <-- OV2640 PCLK
///     DCMI HSYNC: PA4  <-- OV2640 HREF
///     DCMI VSYNC: PG9  <-- OV2640 VSYNC
///     DCMI D0:    PH9  <-- OV2640 Y2
///     DCMI D1:    PH10 <-- OV2640 Y3
///     DCMI D2:    PH11 <-- OV2640 Y4
///     DCMI D3:    PH12 <-- OV2640 Y5
///     DCMI D4:    PH14 <-- OV2640 Y6
///     DCMI D5:    PD3  <-- OV2640 Y7
///     DCMI D6:    PE5  <-- OV2640 Y8
///     DCMI D7:    PE6  <-- OV2640 Y9
pub fn configure_pins() -> (SclPin, SdaPin, PwdnPin, RstPin) {
    let pac_periph = unsafe { pac::Peripherals::steal() };
    let gpioa = pac_periph.GPIOA.split();
    let gpiob = pac_periph.GPIOB.split();
    let gpiod = pac_periph.GPIOD.split();
    let gpioe = pac_periph.GPIOE.split();
    let gpiog = pac_periph.GPIOG.split();
    let gpioh = pac_periph.GPIOH.split();
    let gpioi = pac_periph.GPIOI.split();

    // I2C1 for SCCB
    let scl = gpiob
        .pb8
        .into_alternate_af4()
        .internal_pull_up(true)
        .set_open_drain();
    let sda = gpiob
        .pb9
        .into_alternate_af4()
        .internal_pull_up(true)
        .set_open_drain();

    // Start powered down and held in reset, the driver sequences both during init
    let mut pwdn = gpioh.ph13.into_push_pull_output();
    let mut rst = gpioi.pi2.into_push_pull_output();
    pwdn.set_high().ok();
    rst.set_low().ok();

    let _pclk = dcmi_input!(gpioa.pa6);
    let _hsync = dcmi_input!(gpioa.pa4);
    let _vsync = dcmi_input!(gpiog.pg9);
    let _d0 = dcmi_input!(gpioh.ph9);
    let _d1 = dcmi_input!(gpioh.ph10);
    let _d2 = dcmi_input!(gpioh.ph11);
    let _d3 = dcmi_input!(gpioh.ph12);
    let _d4 = dcmi_input!(gpioh.ph14);
    let _d5 = dcmi_input!(gpiod.pd3);
    let _d6 = dcmi_input!(gpioe.pe5);
    let _d7 = dcmi_input!(gpioe.pe6);

    (scl, sda, pwdn, rst)
}

/// The 25 MHz external oscillator on the board (X2) is the source for HSE
pub fn get_hse_freq() -> MegaHertz {
    25.mhz()
}
