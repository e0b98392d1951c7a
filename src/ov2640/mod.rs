//! OV2640 device driver.
//!
//! * [`Ov2640`] owns an [`Interface`] (SCCB bus, power down and reset pins, delay, debug output)
//!   and gates every register access on a successful [`Ov2640::init`].
//! * Register fields are described by [`params`]; one generic codec reads and writes all of them.
//! * [`tables`] holds the mode tables (baseline, JPEG, RGB565) and picture tuning tables.
//! * [`frame`] and [`capture`] deal with the image data side: the DVP capture and finding the JPEG
//!   image in the buffer it fills.

#[macro_use]
mod field;

mod basic;
pub mod capture;
pub mod error;
pub mod frame;
pub mod interface;
#[cfg(test)]
mod mock;
pub mod params;
pub mod regs;
mod sccb;
pub mod tables;

pub use basic::{DSP_DEFAULTS, SENSOR_DEFAULTS};
pub use capture::{snapshot, CaptureError, CapturePeripheral};
pub use error::Error;
pub use field::{Domain, Field, FieldValue, Param, Segment};
pub use frame::{find_frame, Frame, FrameError};
pub use interface::{HalError, HalInterface, Interface, Level};
pub use params::{Bist, ImageResolution, ResetBlock};
pub use regs::Bank;
pub use sccb::Ov2640;
pub use tables::{Adjust, LightMode, Preset, RegWrite, SpecialEffect};

/// Driver version, major * 1000 + minor * 100.
pub const DRIVER_VERSION: u32 = 1000;

/// Static chip information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Info {
    pub chip_name: &'static str,
    pub manufacturer_name: &'static str,
    pub interface: &'static str,
    pub supply_voltage_min_v: f32,
    pub supply_voltage_max_v: f32,
    pub max_current_ma: f32,
    pub temperature_min: f32,
    pub temperature_max: f32,
    pub driver_version: u32,
}

impl<I> Ov2640<I> {
    /// Chip information. Doesn't need an interface or touch the device.
    pub fn info() -> Info {
        Info {
            chip_name: "OmniVision OV2640",
            manufacturer_name: "OmniVision",
            interface: "SCCB",
            supply_voltage_min_v: 1.7,
            supply_voltage_max_v: 3.3,
            max_current_ma: 40.0,
            temperature_min: -30.0,
            temperature_max: 70.0,
            driver_version: DRIVER_VERSION,
        }
    }
}
