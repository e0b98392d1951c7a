//! The device handle: lifecycle, banked register access over SCCB and the field codec.

use super::error::Error;
use super::field::{Field, FieldValue, Param};
use super::interface::{Interface, Level};
use super::params::{self, Bist, ImageResolution, ResetBlock};
use super::regs::{Bank, Register, COM7_SRST, OV2640_ADDRESS, OV2640_MANF_ID, OV2640_PROD_IDS};
use super::tables::{self, Adjust, LightMode, Preset, RegWrite, SpecialEffect};

/// OV2640 driver handle.
///
/// Created empty, given an [`Interface`] with [`link`](Ov2640::link), then brought up with
/// [`init`](Ov2640::init). Everything that touches the device fails with
/// [`Error::NotInitialized`] until `init` succeeds and again after [`deinit`](Ov2640::deinit).
pub struct Ov2640<I> {
    iface: Option<I>,
    inited: bool,
}

impl<I> Default for Ov2640<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Ov2640<I> {
    /// Creates a handle with no interface linked.
    pub fn new() -> Self {
        Ov2640 {
            iface: None,
            inited: false,
        }
    }

    pub fn with_interface(iface: I) -> Self {
        Ov2640 {
            iface: Some(iface),
            inited: false,
        }
    }

    /// Link an interface, returning the one it replaces. The handle must be initialized again.
    pub fn link(&mut self, iface: I) -> Option<I> {
        self.inited = false;
        self.iface.replace(iface)
    }

    /// Consume the handle and return its interface.
    pub fn release(self) -> Option<I> {
        self.iface
    }

    pub fn interface_mut(&mut self) -> Option<&mut I> {
        self.iface.as_mut()
    }

    /// `true` between a successful `init` and the next `deinit`.
    pub fn is_ready(&self) -> bool {
        self.inited
    }
}

/// Run `op`, reporting a failure through the interface's debug output.
fn checked<I, T, F>(iface: &mut I, what: &str, op: F) -> Result<T, Error<I::Error>>
where
    I: Interface,
    F: FnOnce(&mut I) -> Result<T, I::Error>,
{
    match op(iface) {
        Ok(v) => Ok(v),
        Err(e) => {
            iface.debug_print(format_args!("ov2640: {} failed.", what));
            Err(Error::Transport(e))
        }
    }
}

fn read_register<I: Interface>(iface: &mut I, reg: u8) -> Result<u8, I::Error> {
    let mut buf = [0x00];
    iface.sccb_read(OV2640_ADDRESS, reg, &mut buf)?;
    Ok(buf[0])
}

fn write_register<I: Interface>(iface: &mut I, reg: u8, val: u8) -> Result<(), I::Error> {
    iface.sccb_write(OV2640_ADDRESS, reg, &[val])
}

fn select_bank<I: Interface>(iface: &mut I, bank: Bank) -> Result<(), I::Error> {
    write_register(iface, Register::BANK_SEL, bank.select_value())
}

fn soft_reset<I: Interface>(iface: &mut I) -> Result<(), I::Error> {
    // Setting the upper bit of COM7 resets all the registers
    select_bank(iface, Bank::Sensor)?;
    write_register(iface, Register::COM7, COM7_SRST)?;
    iface.delay_ms(10);
    Ok(())
}

fn read_id<I: Interface>(iface: &mut I, msb: u8, lsb: u8) -> Result<u16, I::Error> {
    select_bank(iface, Bank::Sensor)?;
    let hi: u16 = read_register(iface, msb)?.into();
    let lo: u16 = read_register(iface, lsb)?.into();
    Ok((hi << 8) | lo)
}

fn read_field<I: Interface>(iface: &mut I, field: &Field) -> Result<u32, I::Error> {
    select_bank(iface, field.bank)?;

    let mut value = 0u32;
    for seg in field.segments {
        let reg = read_register(iface, seg.reg)?;
        value = (value << seg.width) | u32::from(seg.extract(reg));
    }
    Ok(value)
}

fn write_field<I: Interface>(iface: &mut I, field: &Field, value: u32) -> Result<(), I::Error> {
    select_bank(iface, field.bank)?;

    for (index, seg) in field.segments.iter().enumerate() {
        let bits = field.segment_bits(index, value);
        let out = if seg.is_full() {
            bits
        } else {
            let current = read_register(iface, seg.reg)?;
            seg.merge(current, bits)
        };
        write_register(iface, seg.reg, out)?;
    }
    Ok(())
}

fn bring_up<I: Interface>(iface: &mut I) -> Result<(), Error<I::Error>> {
    checked(iface, "sccb init", |i| i.sccb_init())?;
    checked(iface, "power down init", |i| i.power_down_init())?;
    checked(iface, "reset init", |i| i.reset_init())?;

    // Power up, then pulse the hardware reset line
    checked(iface, "power down write", |i| i.power_down_write(Level::Low))?;
    checked(iface, "reset write", |i| {
        i.reset_write(Level::Low)?;
        i.delay_ms(10);
        i.reset_write(Level::High)?;
        i.delay_ms(10);
        Ok(())
    })?;

    checked(iface, "soft reset", |i| soft_reset(i))?;

    let manf_id = checked(iface, "read manufacturer id", |i| {
        read_id(i, Register::MIDH, Register::MIDL)
    })?;
    if manf_id != OV2640_MANF_ID {
        iface.debug_print(format_args!("ov2640: manufacturer id is invalid."));
        return Err(Error::ManufacturerId(manf_id));
    }

    let prod_id = checked(iface, "read product id", |i| {
        read_id(i, Register::PIDH, Register::PIDL)
    })?;
    if !OV2640_PROD_IDS.contains(&prod_id) {
        iface.debug_print(format_args!("ov2640: product id is invalid."));
        return Err(Error::ProductId(prod_id));
    }

    Ok(())
}

impl<I: Interface> Ov2640<I> {
    fn ready(&mut self) -> Result<&mut I, Error<I::Error>> {
        if !self.inited {
            return Err(Error::NotInitialized);
        }
        self.iface.as_mut().ok_or(Error::MissingInterface)
    }

    /// Bring the device up: bus and GPIO init, hardware reset pulse, soft reset, identity check.
    ///
    /// On failure the bus and GPIO are released again (errors from that are ignored) and the
    /// handle stays uninitialized. There are no retries.
    pub fn init(&mut self) -> Result<(), Error<I::Error>> {
        self.inited = false;
        let iface = match self.iface.as_mut() {
            Some(iface) => iface,
            None => return Err(Error::MissingInterface),
        };

        match bring_up(iface) {
            Ok(()) => {
                self.inited = true;
                Ok(())
            }
            Err(e) => {
                let _ = iface.power_down_write(Level::High);
                let _ = iface.reset_deinit();
                let _ = iface.power_down_deinit();
                let _ = iface.sccb_deinit();
                Err(e)
            }
        }
    }

    /// Soft reset, power down and release the bus and GPIO.
    ///
    /// Every step is attempted even if an earlier one failed, the first failure is returned. The
    /// handle is uninitialized afterwards either way.
    pub fn deinit(&mut self) -> Result<(), Error<I::Error>> {
        let iface = self.ready()?;

        let reset = checked(iface, "soft reset", |i| soft_reset(i));
        let power = checked(iface, "power down write", |i| i.power_down_write(Level::High));
        let sccb = checked(iface, "sccb deinit", |i| i.sccb_deinit());
        let pwdn = checked(iface, "power down deinit", |i| i.power_down_deinit());
        let rst = checked(iface, "reset deinit", |i| i.reset_deinit());

        self.inited = false;
        reset.and(power).and(sccb).and(pwdn).and(rst)
    }

    /// Reset all sensor registers to their defaults.
    pub fn soft_reset(&mut self) -> Result<(), Error<I::Error>> {
        let iface = self.ready()?;
        checked(iface, "soft reset", |i| soft_reset(i))
    }

    /// Read a field as its raw value.
    pub fn get_field(&mut self, field: &Field) -> Result<u32, Error<I::Error>> {
        let iface = self.ready()?;
        read_field(iface, field).map_err(Error::Transport)
    }

    /// Write a raw value to a field. The value is checked against the field's domain before any
    /// bus traffic, and bits of the registers that belong to other fields are preserved.
    pub fn set_field(&mut self, field: &Field, value: u32) -> Result<(), Error<I::Error>> {
        let iface = self.ready()?;
        if !field.domain.contains(value) {
            return Err(Error::InvalidArgument {
                field: field.name,
                value,
            });
        }
        write_field(iface, field, value).map_err(Error::Transport)
    }

    pub fn get<T: FieldValue>(&mut self, param: Param<T>) -> Result<T, Error<I::Error>> {
        let raw = self.get_field(&param.field)?;
        T::from_raw(raw).ok_or(Error::UnexpectedValue {
            field: param.field.name,
            raw,
        })
    }

    pub fn set<T: FieldValue>(&mut self, param: Param<T>, value: T) -> Result<(), Error<I::Error>> {
        self.set_field(&param.field, value.to_raw())
    }

    fn read_reg_in(&mut self, bank: Bank, reg: u8) -> Result<u8, Error<I::Error>> {
        let iface = self.ready()?;
        select_bank(iface, bank)
            .and_then(|_| read_register(iface, reg))
            .map_err(Error::Transport)
    }

    fn write_reg_in(&mut self, bank: Bank, reg: u8, val: u8) -> Result<(), Error<I::Error>> {
        let iface = self.ready()?;
        if reg == Register::BANK_SEL {
            return Err(Error::InvalidArgument {
                field: "BANK_SEL",
                value: reg.into(),
            });
        }
        select_bank(iface, bank)
            .and_then(|_| write_register(iface, reg, val))
            .map_err(Error::Transport)
    }

    pub fn get_sensor_reg(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        self.read_reg_in(Bank::Sensor, reg)
    }

    pub fn set_sensor_reg(&mut self, reg: u8, val: u8) -> Result<(), Error<I::Error>> {
        self.write_reg_in(Bank::Sensor, reg, val)
    }

    pub fn get_dsp_reg(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        self.read_reg_in(Bank::Dsp, reg)
    }

    pub fn set_dsp_reg(&mut self, reg: u8, val: u8) -> Result<(), Error<I::Error>> {
        self.write_reg_in(Bank::Dsp, reg, val)
    }

    /// Write `table` entry by entry. Stops at the first failure and reports its index, entries
    /// before it stay written.
    pub fn apply_table(&mut self, table: &[RegWrite]) -> Result<(), Error<I::Error>> {
        let iface = self.ready()?;
        for (index, entry) in table.iter().enumerate() {
            if let Err(source) = write_register(iface, entry.reg, entry.val) {
                iface.debug_print(format_args!("ov2640: write table entry {} failed.", index));
                return Err(Error::TableWrite { index, source });
            }
        }
        Ok(())
    }

    pub fn apply_preset(&mut self, preset: Preset) -> Result<(), Error<I::Error>> {
        self.apply_table(preset.table())
    }

    /// Baseline configuration, applied once after `init`.
    pub fn table_init(&mut self) -> Result<(), Error<I::Error>> {
        self.apply_preset(Preset::Normal)
    }

    pub fn table_jpeg_init(&mut self) -> Result<(), Error<I::Error>> {
        self.apply_preset(Preset::Jpeg)
    }

    pub fn table_rgb565_init(&mut self) -> Result<(), Error<I::Error>> {
        self.apply_preset(Preset::Rgb565)
    }

    pub fn set_light_mode(&mut self, mode: LightMode) -> Result<(), Error<I::Error>> {
        self.apply_table(mode.table())
    }

    pub fn set_color_saturation(&mut self, adjust: Adjust) -> Result<(), Error<I::Error>> {
        self.apply_table(tables::saturation_table(adjust))
    }

    pub fn set_brightness(&mut self, adjust: Adjust) -> Result<(), Error<I::Error>> {
        self.apply_table(tables::brightness_table(adjust))
    }

    pub fn set_contrast(&mut self, adjust: Adjust) -> Result<(), Error<I::Error>> {
        self.apply_table(tables::contrast_table(adjust))
    }

    pub fn set_special_effect(&mut self, effect: SpecialEffect) -> Result<(), Error<I::Error>> {
        self.apply_table(effect.table())
    }

    /// Program the DSP output size. The device counts in units of 4 pixels.
    pub fn set_image_resolution(&mut self, resolution: ImageResolution) -> Result<(), Error<I::Error>> {
        let (width, height) = resolution.size();
        self.set(params::OUTPUT_WIDTH, width / 4)?;
        self.set(params::OUTPUT_HEIGHT, height / 4)
    }

    /// Set both AEC fast mode thresholds. Nothing is written unless both are in range.
    pub fn set_fast_mode_large_step_range(&mut self, high: u8, low: u8) -> Result<(), Error<I::Error>> {
        self.ready()?;
        for (param, value) in [(params::FAST_MODE_HIGH_THRESHOLD, high), (params::FAST_MODE_LOW_THRESHOLD, low)].iter() {
            if !param.field.domain.contains((*value).into()) {
                return Err(Error::InvalidArgument {
                    field: param.field.name,
                    value: (*value).into(),
                });
            }
        }
        self.set(params::FAST_MODE_HIGH_THRESHOLD, high)?;
        self.set(params::FAST_MODE_LOW_THRESHOLD, low)
    }

    /// Set a block's reset bit and read it back.
    ///
    /// The read back value is returned as-is. Reset bits clear themselves on silicon, so success
    /// only means both bus transfers went through.
    pub fn pulse_reset(&mut self, block: ResetBlock) -> Result<bool, Error<I::Error>> {
        self.set(block.param(), true)?;
        self.get(block.param())
    }

    /// Set a self test bit and read it back. As with [`pulse_reset`](Ov2640::pulse_reset), only
    /// bus success is checked.
    pub fn run_bist(&mut self, bist: Bist) -> Result<bool, Error<I::Error>> {
        self.set(bist.param(), true)?;
        self.get(bist.param())
    }
}
