//! Power-on defaults for every sensor and DSP parameter.

use super::error::Error;
use super::field::Field;
use super::interface::Interface;
use super::params::*;
use super::sccb::Ov2640;

/// Sensor bank defaults, applied in order.
pub const SENSOR_DEFAULTS: &[(Field, u32)] = &[
    (CLOCK_RATE_DOUBLE.field, 0),
    (CLOCK_DIVIDER.field, 0x00),
    (MODE.field, Mode::Normal as u32),
    (POWER_RESET_PIN_REMAP.field, 0),
    (OUTPUT_DRIVE.field, OutputDrive::X2 as u32),
    (HORIZONTAL_MIRROR.field, 1),
    (VERTICAL_FLIP.field, 1),
    (BAND_FILTER.field, 1),
    (AGC_CONTROL.field, Control::Auto as u32),
    (EXPOSURE_CONTROL.field, Control::Auto as u32),
    (AGC_GAIN_CEILING.field, AgcGain::X8 as u32),
    (ZOOM_WINDOW_HORIZONTAL_START.field, 0),
    (CLOCK_OUTPUT_PIN_STATUS.field, PinStatus::TriState as u32),
    (ZOOM_VERTICAL_WINDOW_START.field, 0x0000),
    (LUMINANCE_HIGH_RANGE.field, 0x40),
    (LUMINANCE_LOW_RANGE.field, 0x38),
    (FAST_MODE_HIGH_THRESHOLD.field, 0x8),
    (FAST_MODE_LOW_THRESHOLD.field, 0x2),
    (FRAME_LENGTH_ADJUSTMENT.field, 0x0000),
    (BAND.field, Band::Hz50 as u32),
    (AUTO_BAND.field, 0),
    (LIVE_VIDEO_AFTER_SNAPSHOT.field, 0),
    (HISTOGRAM_LOW_LEVEL.field, 0x70),
    (HISTOGRAM_HIGH_LEVEL.field, 0x80),
    (BANDING_AEC_50HZ.field, 0x0CA),
    (BANDING_AEC_60HZ.field, 0x0A8),
    (RESOLUTION.field, Resolution::Uxga as u32),
    (ZOOM.field, 0),
    (COLOR_BAR_TEST.field, 0),
    (PCLK.field, Pclk::NoEffect as u32),
    (HORIZONTAL_WINDOW_START.field, 142),
    (HORIZONTAL_WINDOW_END.field, 942),
    (VERTICAL_WINDOW_START.field, 7),
    (VERTICAL_WINDOW_END.field, 607),
    (VSYNC_PULSE_WIDTH.field, 0x0000),
    (AGC_GAIN.field, 0x0000),
    (DUMMY_FRAME.field, DummyFrame::None as u32),
    (AEC.field, 0x0CC),
    (FRAME_EXPOSURE_PRE_CHARGE_ROWS.field, 0x40),
    (CHSYNC_HREF_SWAP.field, 0),
    (HREF_CHSYNC_SWAP.field, 0),
    (PCLK_QUALIFIED_BY_HREF.field, 0),
    (PCLK_EDGE.field, Edge::Falling as u32),
    (HREF_POLARITY.field, Polarity::Positive as u32),
    (VSYNC_POLARITY.field, Polarity::Positive as u32),
    (HSYNC_POLARITY.field, Polarity::Positive as u32),
    (LINE_INTERVAL_ADJUST.field, 0x000),
    (HSYNC_START_POINT.field, 0x08),
    (HSYNC_END_POINT.field, 0x30),
    (LUMINANCE_AVERAGE.field, 0x00),
    (FLASH_LIGHT.field, 0x20),
    (ZONE_AVERAGE_WEIGHT.field, 0x0000_0000),
];

/// DSP bank defaults. Written with the DSP bypassed.
pub const DSP_DEFAULTS: &[(Field, u32)] = &[
    (BPC.field, 1),
    (WPC.field, 1),
    (DVP_PCLK.field, 0x02),
    (CIP.field, 1),
    (DMY.field, 1),
    (RAW_GMA.field, 1),
    (DG.field, 0),
    (AWB.field, 1),
    (AWB_GAIN.field, 1),
    (PRE.field, 1),
    (DVP_Y8.field, 0),
    (JPEG_OUTPUT.field, 0),
    (DVP_OUTPUT_FORMAT.field, DvpOutputFormat::Rgb565 as u32),
    (JPEG_HREF_TIMING.field, HrefTiming::Sensor as u32),
    (BYTE_SWAP.field, ByteSwap::Uvuv as u32),
    (IMAGE_HORIZONTAL.field, 1600),
    (IMAGE_VERTICAL.field, 1200),
    (DCW.field, 1),
    (SDE.field, 1),
    (UV_ADJ.field, 1),
    (UV_AVG.field, 1),
    (CMX.field, 1),
    (LP_DP.field, 0),
    (ROUND.field, 0),
    (VERTICAL_DIVIDER.field, 0),
    (HORIZONTAL_DIVIDER.field, 0),
    (HORIZONTAL_SIZE.field, 1600 / 4),
    (VERTICAL_SIZE.field, 1200 / 4),
    (OFFSET_X.field, 0),
    (OFFSET_Y.field, 0),
    (OUTPUT_WIDTH.field, 1600 / 4),
    (OUTPUT_HEIGHT.field, 1200 / 4),
    (ZOOM_SPEED.field, 0),
    (QUANTIZATION_SCALE_FACTOR.field, 0x0C),
    (SCCB_MASTER_SPEED.field, 4),
    (ADDRESS_AUTO_INCREASE.field, 0),
    (SCCB_ENABLE.field, 0),
    (SCCB_MASTER_CLOCK_DELAY.field, 0),
    (SCCB_MASTER_ACCESS.field, 0),
    (SENSOR_PASS_THROUGH_ACCESS.field, 1),
    (AEC_ENABLE.field, 0),
    (AEC_SEL.field, 0),
    (STAT_SEL.field, 0),
    (VFIRST.field, 0),
    (YUV422.field, 1),
    (YUV.field, 1),
    (RGB.field, 0),
    (RAW.field, 0),
    (DP_SELX.field, 0x00),
    (DP_SELY.field, 0x00),
];

impl<I: Interface> Ov2640<I> {
    fn apply_defaults_list(&mut self, list: &[(Field, u32)]) -> Result<(), Error<I::Error>> {
        for (field, value) in list {
            if let Err(e) = self.set_field(field, *value) {
                if let Some(iface) = self.interface_mut() {
                    iface.debug_print(format_args!("ov2640: set {} failed.", field.name));
                }
                return Err(e);
            }
        }
        Ok(())
    }

    /// Write the default value of every parameter. Stops at the first failure.
    ///
    /// Meant to run after [`table_init`](Ov2640::table_init); the DSP is bypassed while its
    /// registers are written and re-enabled afterwards.
    pub fn apply_defaults(&mut self) -> Result<(), Error<I::Error>> {
        self.apply_defaults_list(SENSOR_DEFAULTS)?;
        self.set(DSP_BYPASS, true)?;
        self.apply_defaults_list(DSP_DEFAULTS)?;
        self.set(DSP_BYPASS, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ov2640::mock::{BusWrite, MockError, MockInterface};
    use crate::ov2640::regs::{Bank, Register};

    fn ready_cam() -> Ov2640<MockInterface> {
        let mut cam = Ov2640::with_interface(MockInterface::new());
        cam.init().expect("init failed");
        cam.interface_mut().expect("no interface").clear_log();
        cam
    }

    #[test]
    fn defaults_are_in_domain() {
        for (field, value) in SENSOR_DEFAULTS.iter().chain(DSP_DEFAULTS) {
            assert!(field.domain.contains(*value), "{} = {:#x}", field.name, value);
        }
        assert!(SENSOR_DEFAULTS.iter().all(|(f, _)| f.bank == Bank::Sensor));
        assert!(DSP_DEFAULTS.iter().all(|(f, _)| f.bank == Bank::Dsp));
    }

    #[test]
    fn defaults_read_back() {
        let mut cam = ready_cam();
        cam.apply_defaults().expect("defaults failed");

        assert_eq!(cam.get(OUTPUT_DRIVE), Ok(OutputDrive::X2));
        assert_eq!(cam.get(HORIZONTAL_MIRROR), Ok(true));
        assert_eq!(cam.get(VERTICAL_FLIP), Ok(true));
        assert_eq!(cam.get(AEC), Ok(0x0CC));
        assert_eq!(cam.get(BANDING_AEC_50HZ), Ok(0x0CA));
        assert_eq!(cam.get(HORIZONTAL_WINDOW_END), Ok(942));
        assert_eq!(cam.get(IMAGE_HORIZONTAL), Ok(1600));
        assert_eq!(cam.get(OUTPUT_WIDTH), Ok(400));
        assert_eq!(cam.get(BYTE_SWAP), Ok(ByteSwap::Uvuv));
        assert_eq!(cam.get(DSP_BYPASS), Ok(false));
    }

    #[test]
    fn dsp_is_bypassed_while_written() {
        let mut cam = ready_cam();
        cam.apply_defaults().expect("defaults failed");

        let m = cam.interface_mut().expect("no interface");
        let bypass: Vec<(usize, u8)> = m
            .data_writes()
            .iter()
            .enumerate()
            .filter(|(_, w)| w.bank == Bank::Dsp && w.reg == Register::R_BYPASS)
            .map(|(i, w)| (i, w.val & 0x01))
            .collect();
        assert_eq!(bypass.len(), 2);
        assert_eq!(bypass[0].1, 1);
        assert_eq!(bypass[1].1, 0);
        assert_eq!(bypass[1].0, m.data_writes().len() - 1);
    }

    #[test]
    fn first_failure_is_named() {
        let mut cam = ready_cam();
        // CLOCK_RATE_DOUBLE: bank select, then CLKRC
        cam.interface_mut().expect("no interface").fail_after_writes = Some(1);

        assert_eq!(
            cam.apply_defaults(),
            Err(Error::Transport(MockError::Write(Register::CLKRC)))
        );

        let m = cam.interface_mut().expect("no interface");
        assert_eq!(m.messages, vec!["ov2640: set CLOCK_RATE_DOUBLE failed."]);
        assert_eq!(
            m.writes,
            vec![BusWrite { bank: Bank::Sensor, reg: Register::BANK_SEL, val: 0x01 }]
        );
    }
}
