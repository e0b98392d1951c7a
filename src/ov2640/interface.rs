//! The capability set the driver needs from the platform, plus an implementation over the
//! embedded-hal blocking I2C, digital output and delay traits.

use core::fmt;
use embedded_hal::blocking::{delay::DelayMs, i2c};
use embedded_hal::digital::v2::OutputPin;
use heapless::{consts, Vec};

/// Logic level for the power-down and reset lines.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Level {
    Low,
    High,
}

/// Platform services used by [`Ov2640`](super::Ov2640).
///
/// SCCB addresses are 7-bit. `sccb_read` must issue the register address and the read as two
/// separate transactions, the sensor does not support a repeated start.
pub trait Interface {
    type Error: fmt::Debug;

    fn sccb_init(&mut self) -> Result<(), Self::Error>;
    fn sccb_deinit(&mut self) -> Result<(), Self::Error>;
    fn sccb_read(&mut self, addr: u8, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
    fn sccb_write(&mut self, addr: u8, reg: u8, buf: &[u8]) -> Result<(), Self::Error>;

    fn power_down_init(&mut self) -> Result<(), Self::Error>;
    fn power_down_deinit(&mut self) -> Result<(), Self::Error>;
    fn power_down_write(&mut self, level: Level) -> Result<(), Self::Error>;

    fn reset_init(&mut self) -> Result<(), Self::Error>;
    fn reset_deinit(&mut self) -> Result<(), Self::Error>;
    fn reset_write(&mut self, level: Level) -> Result<(), Self::Error>;

    fn delay_ms(&mut self, ms: u32);

    fn debug_print(&mut self, args: fmt::Arguments<'_>);
}

/// Errors from [`HalInterface`].
#[derive(Debug, Eq, PartialEq)]
pub enum HalError<E, PE> {
    /// I2C write error.
    I2cWrite(E),
    /// I2C read error.
    I2cRead(E),
    /// GPIO error.
    Pin(PE),
    /// Register address plus payload does not fit the write frame.
    FrameTooLong,
}

/// Maximum bytes in one SCCB write, register address included.
type WriteFrame = Vec<u8, consts::U16>;

/// [`Interface`] over embedded-hal. Pins are expected to be configured as outputs already, so the
/// GPIO init/deinit hooks only succeed.
pub struct HalInterface<I2C, PWDN, RST, D> {
    i2c: I2C,
    pwdn: PWDN,
    rst: RST,
    delay: D,
}

impl<I2C, PWDN, RST, D> HalInterface<I2C, PWDN, RST, D> {
    pub fn new(i2c: I2C, pwdn: PWDN, rst: RST, delay: D) -> Self {
        HalInterface {
            i2c,
            pwdn,
            rst,
            delay,
        }
    }

    /// Give back the owned peripherals.
    pub fn release(self) -> (I2C, PWDN, RST, D) {
        (self.i2c, self.pwdn, self.rst, self.delay)
    }
}

fn drive<P: OutputPin>(pin: &mut P, level: Level) -> Result<(), P::Error> {
    match level {
        Level::Low => pin.set_low(),
        Level::High => pin.set_high(),
    }
}

impl<I2C, PWDN, RST, D, E, PE> Interface for HalInterface<I2C, PWDN, RST, D>
where
    I2C: i2c::Read<Error = E> + i2c::Write<Error = E>,
    PWDN: OutputPin<Error = PE>,
    RST: OutputPin<Error = PE>,
    D: DelayMs<u32>,
    E: fmt::Debug,
    PE: fmt::Debug,
{
    type Error = HalError<E, PE>;

    fn sccb_init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn sccb_deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn sccb_read(&mut self, addr: u8, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        // Write the address
        self.i2c.write(addr, &[reg]).map_err(HalError::I2cWrite)?;

        // Read the value(s)
        self.i2c.read(addr, buf).map_err(HalError::I2cRead)
    }

    fn sccb_write(&mut self, addr: u8, reg: u8, buf: &[u8]) -> Result<(), Self::Error> {
        let mut frame = WriteFrame::new();
        frame.push(reg).map_err(|_| HalError::FrameTooLong)?;
        frame
            .extend_from_slice(buf)
            .map_err(|_| HalError::FrameTooLong)?;

        self.i2c.write(addr, &frame).map_err(HalError::I2cWrite)
    }

    fn power_down_init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn power_down_deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn power_down_write(&mut self, level: Level) -> Result<(), Self::Error> {
        drive(&mut self.pwdn, level).map_err(HalError::Pin)
    }

    fn reset_init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn reset_deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn reset_write(&mut self, level: Level) -> Result<(), Self::Error> {
        drive(&mut self.rst, level).map_err(HalError::Pin)
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn debug_print(&mut self, args: fmt::Arguments<'_>) {
        #[cfg(feature = "rttdebug")]
        rtt_target::rprintln!("{}", args);

        #[cfg(not(feature = "rttdebug"))]
        let _ = args;
    }
}

/// Lets the capture loop poll with the same delay provider the driver uses.
impl<I2C, PWDN, RST, D> DelayMs<u32> for HalInterface<I2C, PWDN, RST, D>
where
    D: DelayMs<u32>,
{
    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    #[derive(Debug, Eq, PartialEq)]
    enum Op {
        Write(u8, std::vec::Vec<u8>),
        Read(u8, usize),
    }

    #[derive(Default)]
    struct FakeI2c {
        ops: std::vec::Vec<Op>,
        reply: u8,
        fail_reads: bool,
    }

    impl i2c::Write for FakeI2c {
        type Error = u8;

        fn write(&mut self, addr: u8, bytes: &[u8]) -> Result<(), u8> {
            self.ops.push(Op::Write(addr, bytes.to_vec()));
            Ok(())
        }
    }

    impl i2c::Read for FakeI2c {
        type Error = u8;

        fn read(&mut self, addr: u8, buffer: &mut [u8]) -> Result<(), u8> {
            if self.fail_reads {
                return Err(0xEE);
            }
            self.ops.push(Op::Read(addr, buffer.len()));
            for b in buffer.iter_mut() {
                *b = self.reply;
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakePin {
        high: bool,
    }

    impl OutputPin for FakePin {
        type Error = Infallible;

        fn set_low(&mut self) -> Result<(), Infallible> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.high = true;
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeDelay {
        total_ms: u32,
    }

    impl DelayMs<u32> for FakeDelay {
        fn delay_ms(&mut self, ms: u32) {
            self.total_ms += ms;
        }
    }

    fn interface() -> HalInterface<FakeI2c, FakePin, FakePin, FakeDelay> {
        HalInterface::new(
            FakeI2c::default(),
            FakePin::default(),
            FakePin::default(),
            FakeDelay::default(),
        )
    }

    #[test]
    fn read_is_two_transactions() {
        let mut iface = interface();
        iface.i2c.reply = 0x26;

        let mut buf = [0u8];
        iface.sccb_read(0x30, 0x0A, &mut buf).expect("read failed");

        assert_eq!(buf[0], 0x26);
        assert_eq!(
            iface.i2c.ops,
            vec![Op::Write(0x30, vec![0x0A]), Op::Read(0x30, 1)]
        );
    }

    #[test]
    fn write_prefixes_register() {
        let mut iface = interface();
        iface.sccb_write(0x30, 0xFF, &[0x01]).expect("write failed");

        assert_eq!(iface.i2c.ops, vec![Op::Write(0x30, vec![0xFF, 0x01])]);
    }

    #[test]
    fn oversized_write_is_rejected_before_the_bus() {
        let mut iface = interface();
        let payload = [0u8; 16];

        assert_eq!(
            iface.sccb_write(0x30, 0x00, &payload),
            Err(HalError::FrameTooLong)
        );
        assert!(iface.i2c.ops.is_empty());
    }

    #[test]
    fn read_error_is_tagged() {
        let mut iface = interface();
        iface.i2c.fail_reads = true;

        let mut buf = [0u8];
        assert_eq!(
            iface.sccb_read(0x30, 0x1C, &mut buf),
            Err(HalError::I2cRead(0xEE))
        );
    }

    #[test]
    fn pins_and_delay_are_forwarded() {
        let mut iface = interface();
        iface.power_down_write(Level::High).expect("pwdn failed");
        iface.reset_write(Level::High).expect("reset failed");
        iface.reset_write(Level::Low).expect("reset failed");
        Interface::delay_ms(&mut iface, 10);
        DelayMs::delay_ms(&mut iface, 5);

        let (_, pwdn, rst, delay) = iface.release();
        assert!(pwdn.high);
        assert!(!rst.high);
        assert_eq!(delay.total_ms, 15);
    }
}
