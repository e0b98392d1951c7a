//! Device parameters: one [`Param`] per register field, with the enums they carry.
//!
//! Use with [`Ov2640::set`](super::Ov2640::set) and [`Ov2640::get`](super::Ov2640::get):
//!
//! ```ignore
//! cam.set(params::HORIZONTAL_MIRROR, true)?;
//! cam.set(params::OUTPUT_DRIVE, OutputDrive::X2)?;
//! let gain = cam.get(params::AGC_GAIN)?;
//! ```

use super::field::{Domain, Field, FieldValue, Param, Segment};
use super::regs::{Bank, Register as R};

const fn full(reg: u8) -> Segment {
    Segment::full(reg)
}

const fn bit(reg: u8, n: u8) -> Segment {
    Segment::bit(reg, n)
}

const fn bits(reg: u8, shift: u8, width: u8) -> Segment {
    Segment::new(reg, shift, width)
}

const BOOL: Domain = Domain::Bool;

const fn max(max: u32) -> Domain {
    Domain::Range { max }
}

macro_rules! param {
    ($(#[$meta:meta])* $name:ident: $ty:ty, $bank:ident, $domain:expr, [$($seg:expr),+ $(,)?]) => {
        $(#[$meta])*
        pub const $name: Param<$ty> = Param::new(Field {
            name: stringify!($name),
            bank: Bank::$bank,
            segments: &[$($seg),+],
            domain: $domain,
        });
    };
}

field_enum! {
    /// Dummy frames inserted by the sensor.
    pub enum DummyFrame {
        None = 0,
        One = 1,
        Three = 2,
        Seven = 3,
    }
}

field_enum! {
    pub enum Mode {
        Normal = 0,
        Standby = 1,
    }
}

field_enum! {
    /// Power line frequency for banding filter.
    pub enum Band {
        Hz60 = 0,
        Hz50 = 1,
    }
}

field_enum! {
    /// State of the clock output pins while powered down.
    pub enum PinStatus {
        TriState = 0,
        LastState = 1,
    }
}

field_enum! {
    /// Output drive capability. Note the non-monotonic encoding.
    pub enum OutputDrive {
        X1 = 0,
        X3 = 1,
        X2 = 2,
        X4 = 3,
    }
}

field_enum! {
    /// Sensor array readout mode.
    pub enum Resolution {
        Uxga = 0,
        Cif = 1,
        Svga = 4,
    }
}

field_enum! {
    pub enum Control {
        Manual = 0,
        Auto = 1,
    }
}

field_enum! {
    pub enum AgcGain {
        X2 = 0,
        X4 = 1,
        X8 = 2,
        X16 = 3,
        X32 = 4,
        X64 = 5,
        X128 = 6,
    }
}

field_enum! {
    pub enum Edge {
        Falling = 0,
        Rising = 1,
    }
}

field_enum! {
    pub enum Polarity {
        Positive = 0,
        Negative = 1,
    }
}

field_enum! {
    pub enum DvpOutputFormat {
        Yuv422 = 0,
        Raw10 = 1,
        Rgb565 = 2,
    }
}

field_enum! {
    /// HREF timing while outputting JPEG.
    pub enum HrefTiming {
        Sensor = 0,
        Vsync = 1,
    }
}

field_enum! {
    pub enum ByteSwap {
        /// High byte first.
        Yuyv = 0,
        /// Low byte first.
        Uvuv = 1,
    }
}

/// PCLK divider in `REG32[7:6]`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[repr(u8)]
pub enum Pclk {
    NoEffect = 0b00,
    Divide2 = 0b10,
    Divide4 = 0b11,
}

impl Pclk {
    pub const RAW: &'static [u32] = &[0b00, 0b10, 0b11];
}

impl FieldValue for Pclk {
    fn to_raw(self) -> u32 {
        self as u32
    }

    fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            // 0b01 is undocumented and behaves as no division
            0b00 | 0b01 => Some(Pclk::NoEffect),
            0b10 => Some(Pclk::Divide2),
            0b11 => Some(Pclk::Divide4),
            _ => None,
        }
    }
}

/// DSP blocks with a reset bit in the `RESET` register.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ResetBlock {
    Microcontroller,
    Sccb,
    Jpeg,
    Dvp,
    Ipu,
    Cif,
}

impl ResetBlock {
    pub fn param(self) -> Param<bool> {
        match self {
            ResetBlock::Microcontroller => RESET_MICROCONTROLLER,
            ResetBlock::Sccb => RESET_SCCB,
            ResetBlock::Jpeg => RESET_JPEG,
            ResetBlock::Dvp => RESET_DVP,
            ResetBlock::Ipu => RESET_IPU,
            ResetBlock::Cif => RESET_CIF,
        }
    }
}

/// Bits of the microcontroller built-in self test register.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Bist {
    MicrocontrollerReset,
    BootRomSelect,
    Rw1Error12k,
    Rw0Error12k,
    Rw1Error512,
    Rw0Error512,
    BusyOrShotReset,
    Launch,
}

impl Bist {
    pub fn param(self) -> Param<bool> {
        match self {
            Bist::MicrocontrollerReset => BIST_MICROCONTROLLER_RESET,
            Bist::BootRomSelect => BIST_BOOT_ROM_SELECT,
            Bist::Rw1Error12k => BIST_RW1_ERROR_12K,
            Bist::Rw0Error12k => BIST_RW0_ERROR_12K,
            Bist::Rw1Error512 => BIST_RW1_ERROR_512,
            Bist::Rw0Error512 => BIST_RW0_ERROR_512,
            Bist::BusyOrShotReset => BIST_BUSY_OR_SHOT_RESET,
            Bist::Launch => BIST_LAUNCH,
        }
    }
}

/// Output image size presets for [`Ov2640::set_image_resolution`](super::Ov2640::set_image_resolution).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ImageResolution {
    Qqvga,
    Qcif,
    Qvga,
    Wqvga,
    Cif,
    Vga,
    Svga,
    Xga,
    Wxga,
    Xvga,
    WxgaPlus,
    Sxga,
    Uxga,
}

impl ImageResolution {
    /// Width and height in pixels.
    pub fn size(self) -> (u16, u16) {
        match self {
            ImageResolution::Qqvga => (160, 120),
            ImageResolution::Qcif => (176, 144),
            ImageResolution::Qvga => (320, 240),
            ImageResolution::Wqvga => (400, 240),
            ImageResolution::Cif => (352, 288),
            ImageResolution::Vga => (640, 480),
            ImageResolution::Svga => (800, 600),
            ImageResolution::Xga => (1024, 768),
            ImageResolution::Wxga => (1280, 800),
            ImageResolution::Xvga => (1280, 960),
            ImageResolution::WxgaPlus => (1440, 900),
            ImageResolution::Sxga => (1280, 1024),
            ImageResolution::Uxga => (1600, 1200),
        }
    }
}

// Sensor bank

param!(AGC_GAIN: u16, Sensor, max(0x3FF), [bits(R::REG45, 6, 2), full(R::GAIN)]);
param!(DUMMY_FRAME: DummyFrame, Sensor, Domain::Enum(DummyFrame::RAW), [bits(R::COM1, 6, 2)]);
param!(
    /// Start line of the vertical window.
    VERTICAL_WINDOW_START: u16, Sensor, max(0x3FF), [full(R::VSTRT), bits(R::COM1, 0, 2)]
);
param!(VERTICAL_WINDOW_END: u16, Sensor, max(0x3FF), [full(R::VEND), bits(R::COM1, 2, 2)]);
param!(HORIZONTAL_MIRROR: bool, Sensor, BOOL, [bit(R::REG04, 7)]);
param!(VERTICAL_FLIP: bool, Sensor, BOOL, [bit(R::REG04, 6)]);
param!(
    /// Exposure value in line periods.
    AEC: u16, Sensor, max(0xFFFF), [bits(R::REG45, 0, 6), full(R::AEC), bits(R::REG04, 0, 2)]
);
param!(FRAME_EXPOSURE_PRE_CHARGE_ROWS: u8, Sensor, max(0xFF), [full(R::REG08)]);
param!(MODE: Mode, Sensor, Domain::Enum(Mode::RAW), [bit(R::COM2, 4)]);
param!(POWER_RESET_PIN_REMAP: bool, Sensor, BOOL, [bit(R::COM2, 2)]);
param!(OUTPUT_DRIVE: OutputDrive, Sensor, Domain::Enum(OutputDrive::RAW), [bits(R::COM2, 0, 2)]);
param!(BAND: Band, Sensor, Domain::Enum(Band::RAW), [bit(R::COM3, 2)]);
param!(AUTO_BAND: bool, Sensor, BOOL, [bit(R::COM3, 1)]);
param!(LIVE_VIDEO_AFTER_SNAPSHOT: bool, Sensor, BOOL, [bit(R::COM3, 0)]);
param!(CLOCK_OUTPUT_PIN_STATUS: PinStatus, Sensor, Domain::Enum(PinStatus::RAW), [bit(R::COM4, 2)]);
param!(CLOCK_RATE_DOUBLE: bool, Sensor, BOOL, [bit(R::CLKRC, 7)]);
param!(CLOCK_DIVIDER: u8, Sensor, max(0x3F), [bits(R::CLKRC, 0, 6)]);
param!(RESOLUTION: Resolution, Sensor, Domain::Enum(Resolution::RAW), [bits(R::COM7, 4, 3)]);
param!(ZOOM: bool, Sensor, BOOL, [bit(R::COM7, 2)]);
param!(COLOR_BAR_TEST: bool, Sensor, BOOL, [bit(R::COM7, 1)]);
param!(BAND_FILTER: bool, Sensor, BOOL, [bit(R::COM8, 5)]);
param!(AGC_CONTROL: Control, Sensor, Domain::Enum(Control::RAW), [bit(R::COM8, 2)]);
param!(EXPOSURE_CONTROL: Control, Sensor, Domain::Enum(Control::RAW), [bit(R::COM8, 0)]);
param!(AGC_GAIN_CEILING: AgcGain, Sensor, Domain::Enum(AgcGain::RAW), [bits(R::COM9, 5, 3)]);
param!(CHSYNC_HREF_SWAP: bool, Sensor, BOOL, [bit(R::COM10, 7)]);
param!(HREF_CHSYNC_SWAP: bool, Sensor, BOOL, [bit(R::COM10, 6)]);
param!(PCLK_QUALIFIED_BY_HREF: bool, Sensor, BOOL, [bit(R::COM10, 5)]);
param!(PCLK_EDGE: Edge, Sensor, Domain::Enum(Edge::RAW), [bit(R::COM10, 4)]);
param!(HREF_POLARITY: Polarity, Sensor, Domain::Enum(Polarity::RAW), [bit(R::COM10, 3)]);
param!(VSYNC_POLARITY: Polarity, Sensor, Domain::Enum(Polarity::RAW), [bit(R::COM10, 1)]);
param!(HSYNC_POLARITY: Polarity, Sensor, Domain::Enum(Polarity::RAW), [bit(R::COM10, 0)]);
param!(LUMINANCE_HIGH_RANGE: u8, Sensor, max(0xFF), [full(R::AEW)]);
param!(LUMINANCE_LOW_RANGE: u8, Sensor, max(0xFF), [full(R::AEB)]);
param!(FAST_MODE_HIGH_THRESHOLD: u8, Sensor, max(0xF), [bits(R::VV, 4, 4)]);
param!(FAST_MODE_LOW_THRESHOLD: u8, Sensor, max(0xF), [bits(R::VV, 0, 4)]);
param!(LINE_INTERVAL_ADJUST: u16, Sensor, max(0xFFF), [bits(R::REG2A, 4, 4), full(R::FRARL)]);
param!(HSYNC_END_POINT: u16, Sensor, max(0x3FF), [bits(R::REG2A, 2, 2), full(R::HEDY)]);
param!(HSYNC_START_POINT: u16, Sensor, max(0x3FF), [bits(R::REG2A, 0, 2), full(R::HSDY)]);
param!(VSYNC_PULSE_WIDTH: u16, Sensor, max(0xFFFF), [full(R::ADDVSH), full(R::ADDVSL)]);
param!(LUMINANCE_AVERAGE: u8, Sensor, max(0xFF), [full(R::YAVG)]);
param!(HORIZONTAL_WINDOW_START: u16, Sensor, max(0x7FF), [full(R::HREFST), bits(R::REG32, 0, 3)]);
param!(HORIZONTAL_WINDOW_END: u16, Sensor, max(0x7FF), [full(R::HREFEND), bits(R::REG32, 3, 3)]);
param!(PCLK: Pclk, Sensor, Domain::Enum(Pclk::RAW), [bits(R::REG32, 6, 2)]);
param!(ZOOM_WINDOW_HORIZONTAL_START: bool, Sensor, BOOL, [bit(R::ARCOM2, 2)]);
param!(FRAME_LENGTH_ADJUSTMENT: u16, Sensor, max(0x3FF), [bits(R::FLH, 0, 2), full(R::FLL)]);
param!(ZOOM_VERTICAL_WINDOW_START: u16, Sensor, max(0x3FF), [full(R::ZOOMS), bits(R::COM19, 0, 2)]);
param!(FLASH_LIGHT: u8, Sensor, max(0xFF), [full(R::COM22)]);
param!(BANDING_AEC_50HZ: u16, Sensor, max(0x3FF), [bits(R::COM25, 6, 2), full(R::BD50)]);
param!(BANDING_AEC_60HZ: u16, Sensor, max(0x3FF), [bits(R::COM25, 4, 2), full(R::BD60)]);
param!(
    /// Weights of the 16 AEC zones, two bits each.
    ZONE_AVERAGE_WEIGHT: u32, Sensor, max(u32::MAX),
    [full(R::REG5D), full(R::REG5E), full(R::REG5F), full(R::REG60)]
);
param!(HISTOGRAM_LOW_LEVEL: u8, Sensor, max(0xFF), [full(R::HISTO_LOW)]);
param!(HISTOGRAM_HIGH_LEVEL: u8, Sensor, max(0xFF), [full(R::HISTO_HIGH)]);

// DSP bank

param!(DSP_BYPASS: bool, Dsp, BOOL, [bit(R::R_BYPASS, 0)]);
param!(AUTO_MODE: bool, Dsp, BOOL, [bit(R::R_DVP_SP, 7)]);
param!(DVP_PCLK: u8, Dsp, max(0x7F), [bits(R::R_DVP_SP, 0, 7)]);
param!(DVP_Y8: bool, Dsp, BOOL, [bit(R::IMAGE_MODE, 6)]);
param!(JPEG_OUTPUT: bool, Dsp, BOOL, [bit(R::IMAGE_MODE, 4)]);
param!(DVP_OUTPUT_FORMAT: DvpOutputFormat, Dsp, Domain::Enum(DvpOutputFormat::RAW), [bits(R::IMAGE_MODE, 2, 2)]);
param!(JPEG_HREF_TIMING: HrefTiming, Dsp, Domain::Enum(HrefTiming::RAW), [bit(R::IMAGE_MODE, 1)]);
param!(BYTE_SWAP: ByteSwap, Dsp, Domain::Enum(ByteSwap::RAW), [bit(R::IMAGE_MODE, 0)]);
param!(RESET_MICROCONTROLLER: bool, Dsp, BOOL, [bit(R::RESET, 6)]);
param!(RESET_SCCB: bool, Dsp, BOOL, [bit(R::RESET, 5)]);
param!(RESET_JPEG: bool, Dsp, BOOL, [bit(R::RESET, 4)]);
param!(RESET_DVP: bool, Dsp, BOOL, [bit(R::RESET, 2)]);
param!(RESET_IPU: bool, Dsp, BOOL, [bit(R::RESET, 1)]);
param!(RESET_CIF: bool, Dsp, BOOL, [bit(R::RESET, 0)]);
param!(SCCB_MASTER_SPEED: u8, Dsp, max(0xFF), [full(R::SCCB_MASTER_SPEED)]);
param!(SCCB_SLAVE_ID: u8, Dsp, max(0xFF), [full(R::SCCB_SLAVE_ID)]);
param!(ADDRESS_AUTO_INCREASE: bool, Dsp, BOOL, [bit(R::SCCB_CONFIG, 5)]);
param!(SCCB_ENABLE: bool, Dsp, BOOL, [bit(R::SCCB_CONFIG, 3)]);
param!(SCCB_MASTER_CLOCK_DELAY: bool, Dsp, BOOL, [bit(R::SCCB_CONFIG, 2)]);
param!(SCCB_MASTER_ACCESS: bool, Dsp, BOOL, [bit(R::SCCB_CONFIG, 1)]);
param!(SENSOR_PASS_THROUGH_ACCESS: bool, Dsp, BOOL, [bit(R::SCCB_CONFIG, 0)]);
param!(BIST_MICROCONTROLLER_RESET: bool, Dsp, BOOL, [bit(R::MC_BIST, 7)]);
param!(BIST_BOOT_ROM_SELECT: bool, Dsp, BOOL, [bit(R::MC_BIST, 6)]);
param!(BIST_RW1_ERROR_12K: bool, Dsp, BOOL, [bit(R::MC_BIST, 5)]);
param!(BIST_RW0_ERROR_12K: bool, Dsp, BOOL, [bit(R::MC_BIST, 4)]);
param!(BIST_RW1_ERROR_512: bool, Dsp, BOOL, [bit(R::MC_BIST, 3)]);
param!(BIST_RW0_ERROR_512: bool, Dsp, BOOL, [bit(R::MC_BIST, 2)]);
param!(BIST_BUSY_OR_SHOT_RESET: bool, Dsp, BOOL, [bit(R::MC_BIST, 1)]);
param!(BIST_LAUNCH: bool, Dsp, BOOL, [bit(R::MC_BIST, 0)]);
param!(
    PROGRAM_MEMORY_POINTER: u16, Dsp, max(0xFFFF),
    [full(R::PROG_MEM_ADDR_H), full(R::PROG_MEM_ADDR_L)]
);
param!(PROGRAM_MEMORY_ACCESS_ADDRESS: u8, Dsp, max(0xFF), [full(R::PROG_MEM_ACCESS)]);
param!(SCCB_PROTOCOL_COMMAND: u8, Dsp, max(0xFF), [full(R::SCCB_PROTOCOL_CMD)]);
param!(SCCB_PROTOCOL_STATUS: u8, Dsp, max(0xFF), [full(R::SCCB_PROTOCOL_STATUS)]);
param!(CIP: bool, Dsp, BOOL, [bit(R::CTRL1, 7)]);
param!(DMY: bool, Dsp, BOOL, [bit(R::CTRL1, 6)]);
param!(RAW_GMA: bool, Dsp, BOOL, [bit(R::CTRL1, 5)]);
param!(DG: bool, Dsp, BOOL, [bit(R::CTRL1, 4)]);
param!(AWB: bool, Dsp, BOOL, [bit(R::CTRL1, 3)]);
param!(AWB_GAIN: bool, Dsp, BOOL, [bit(R::CTRL1, 2)]);
param!(LENC: bool, Dsp, BOOL, [bit(R::CTRL1, 1)]);
param!(PRE: bool, Dsp, BOOL, [bit(R::CTRL1, 0)]);
param!(AEC_ENABLE: bool, Dsp, BOOL, [bit(R::CTRL0, 7)]);
param!(AEC_SEL: bool, Dsp, BOOL, [bit(R::CTRL0, 6)]);
param!(STAT_SEL: bool, Dsp, BOOL, [bit(R::CTRL0, 5)]);
param!(VFIRST: bool, Dsp, BOOL, [bit(R::CTRL0, 4)]);
param!(YUV422: bool, Dsp, BOOL, [bit(R::CTRL0, 3)]);
param!(YUV: bool, Dsp, BOOL, [bit(R::CTRL0, 2)]);
param!(RGB: bool, Dsp, BOOL, [bit(R::CTRL0, 1)]);
param!(RAW: bool, Dsp, BOOL, [bit(R::CTRL0, 0)]);
param!(DCW: bool, Dsp, BOOL, [bit(R::CTRL2, 5)]);
param!(SDE: bool, Dsp, BOOL, [bit(R::CTRL2, 4)]);
param!(UV_ADJ: bool, Dsp, BOOL, [bit(R::CTRL2, 3)]);
param!(UV_AVG: bool, Dsp, BOOL, [bit(R::CTRL2, 2)]);
param!(CMX: bool, Dsp, BOOL, [bit(R::CTRL2, 0)]);
param!(BPC: bool, Dsp, BOOL, [bit(R::CTRL3, 7)]);
param!(WPC: bool, Dsp, BOOL, [bit(R::CTRL3, 6)]);
param!(SDE_INDIRECT_ADDRESS: u8, Dsp, max(0xFF), [full(R::BPADDR)]);
param!(SDE_INDIRECT_DATA: u8, Dsp, max(0xFF), [full(R::BPDATA)]);
param!(
    /// Image width in pixels entering the DSP.
    IMAGE_HORIZONTAL: u16, Dsp, max(0xFFF),
    [bit(R::SIZEL, 6), full(R::HSIZE8), bits(R::SIZEL, 3, 3)]
);
param!(IMAGE_VERTICAL: u16, Dsp, max(0x7FF), [full(R::VSIZE8), bits(R::SIZEL, 0, 3)]);
param!(QUANTIZATION_SCALE_FACTOR: u8, Dsp, max(0xFF), [full(R::QS)]);
param!(LP_DP: bool, Dsp, BOOL, [bit(R::CTRLI, 7)]);
param!(ROUND: bool, Dsp, BOOL, [bit(R::CTRLI, 6)]);
param!(VERTICAL_DIVIDER: u8, Dsp, max(0x7), [bits(R::CTRLI, 3, 3)]);
param!(HORIZONTAL_DIVIDER: u8, Dsp, max(0x7), [bits(R::CTRLI, 0, 3)]);
param!(
    /// Horizontal size in units of 4 pixels.
    HORIZONTAL_SIZE: u16, Dsp, max(0x3FF),
    [bit(R::TEST, 7), bit(R::VHYX, 3), full(R::HSIZE)]
);
param!(
    /// Vertical size in units of 4 pixels.
    VERTICAL_SIZE: u16, Dsp, max(0x1FF), [bit(R::VHYX, 7), full(R::VSIZE)]
);
param!(OFFSET_X: u16, Dsp, max(0x7FF), [bits(R::VHYX, 0, 3), full(R::XOFFL)]);
param!(OFFSET_Y: u16, Dsp, max(0x7FF), [bits(R::VHYX, 4, 3), full(R::YOFFL)]);
param!(DP_SELX: u8, Dsp, max(0xF), [bits(R::DPRP, 0, 4)]);
param!(DP_SELY: u8, Dsp, max(0xF), [bits(R::DPRP, 4, 4)]);
param!(
    /// Output width in units of 4 pixels.
    OUTPUT_WIDTH: u16, Dsp, max(0x3FF), [bits(R::ZMHH, 0, 2), full(R::ZMOW)]
);
param!(
    /// Output height in units of 4 pixels.
    OUTPUT_HEIGHT: u16, Dsp, max(0x1FF), [bit(R::ZMHH, 2), full(R::ZMOH)]
);
param!(ZOOM_SPEED: u8, Dsp, max(0xF), [bits(R::ZMHH, 4, 4)]);

/// Every field the driver knows about.
pub const ALL: &[Field] = &[
    AGC_GAIN.field,
    DUMMY_FRAME.field,
    VERTICAL_WINDOW_START.field,
    VERTICAL_WINDOW_END.field,
    HORIZONTAL_MIRROR.field,
    VERTICAL_FLIP.field,
    AEC.field,
    FRAME_EXPOSURE_PRE_CHARGE_ROWS.field,
    MODE.field,
    POWER_RESET_PIN_REMAP.field,
    OUTPUT_DRIVE.field,
    BAND.field,
    AUTO_BAND.field,
    LIVE_VIDEO_AFTER_SNAPSHOT.field,
    CLOCK_OUTPUT_PIN_STATUS.field,
    CLOCK_RATE_DOUBLE.field,
    CLOCK_DIVIDER.field,
    RESOLUTION.field,
    ZOOM.field,
    COLOR_BAR_TEST.field,
    BAND_FILTER.field,
    AGC_CONTROL.field,
    EXPOSURE_CONTROL.field,
    AGC_GAIN_CEILING.field,
    CHSYNC_HREF_SWAP.field,
    HREF_CHSYNC_SWAP.field,
    PCLK_QUALIFIED_BY_HREF.field,
    PCLK_EDGE.field,
    HREF_POLARITY.field,
    VSYNC_POLARITY.field,
    HSYNC_POLARITY.field,
    LUMINANCE_HIGH_RANGE.field,
    LUMINANCE_LOW_RANGE.field,
    FAST_MODE_HIGH_THRESHOLD.field,
    FAST_MODE_LOW_THRESHOLD.field,
    LINE_INTERVAL_ADJUST.field,
    HSYNC_END_POINT.field,
    HSYNC_START_POINT.field,
    VSYNC_PULSE_WIDTH.field,
    LUMINANCE_AVERAGE.field,
    HORIZONTAL_WINDOW_START.field,
    HORIZONTAL_WINDOW_END.field,
    PCLK.field,
    ZOOM_WINDOW_HORIZONTAL_START.field,
    FRAME_LENGTH_ADJUSTMENT.field,
    ZOOM_VERTICAL_WINDOW_START.field,
    FLASH_LIGHT.field,
    BANDING_AEC_50HZ.field,
    BANDING_AEC_60HZ.field,
    ZONE_AVERAGE_WEIGHT.field,
    HISTOGRAM_LOW_LEVEL.field,
    HISTOGRAM_HIGH_LEVEL.field,
    DSP_BYPASS.field,
    AUTO_MODE.field,
    DVP_PCLK.field,
    DVP_Y8.field,
    JPEG_OUTPUT.field,
    DVP_OUTPUT_FORMAT.field,
    JPEG_HREF_TIMING.field,
    BYTE_SWAP.field,
    RESET_MICROCONTROLLER.field,
    RESET_SCCB.field,
    RESET_JPEG.field,
    RESET_DVP.field,
    RESET_IPU.field,
    RESET_CIF.field,
    SCCB_MASTER_SPEED.field,
    SCCB_SLAVE_ID.field,
    ADDRESS_AUTO_INCREASE.field,
    SCCB_ENABLE.field,
    SCCB_MASTER_CLOCK_DELAY.field,
    SCCB_MASTER_ACCESS.field,
    SENSOR_PASS_THROUGH_ACCESS.field,
    BIST_MICROCONTROLLER_RESET.field,
    BIST_BOOT_ROM_SELECT.field,
    BIST_RW1_ERROR_12K.field,
    BIST_RW0_ERROR_12K.field,
    BIST_RW1_ERROR_512.field,
    BIST_RW0_ERROR_512.field,
    BIST_BUSY_OR_SHOT_RESET.field,
    BIST_LAUNCH.field,
    PROGRAM_MEMORY_POINTER.field,
    PROGRAM_MEMORY_ACCESS_ADDRESS.field,
    SCCB_PROTOCOL_COMMAND.field,
    SCCB_PROTOCOL_STATUS.field,
    CIP.field,
    DMY.field,
    RAW_GMA.field,
    DG.field,
    AWB.field,
    AWB_GAIN.field,
    LENC.field,
    PRE.field,
    AEC_ENABLE.field,
    AEC_SEL.field,
    STAT_SEL.field,
    VFIRST.field,
    YUV422.field,
    YUV.field,
    RGB.field,
    RAW.field,
    DCW.field,
    SDE.field,
    UV_ADJ.field,
    UV_AVG.field,
    CMX.field,
    BPC.field,
    WPC.field,
    SDE_INDIRECT_ADDRESS.field,
    SDE_INDIRECT_DATA.field,
    IMAGE_HORIZONTAL.field,
    IMAGE_VERTICAL.field,
    QUANTIZATION_SCALE_FACTOR.field,
    LP_DP.field,
    ROUND.field,
    VERTICAL_DIVIDER.field,
    HORIZONTAL_DIVIDER.field,
    HORIZONTAL_SIZE.field,
    VERTICAL_SIZE.field,
    OFFSET_X.field,
    OFFSET_Y.field,
    DP_SELX.field,
    DP_SELY.field,
    OUTPUT_WIDTH.field,
    OUTPUT_HEIGHT.field,
    ZOOM_SPEED.field,
];
