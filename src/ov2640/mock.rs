//! In-memory OV2640 used by the unit tests: two register banks behind the bank-select register,
//! a log of every bus write and GPIO/delay call, and failure injection.

use super::interface::{Interface, Level};
use super::regs::{Bank, Register, OV2640_ADDRESS};
use core::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MockError {
    /// Write to the register failed.
    Write(u8),
    /// Read of the register failed.
    Read(u8),
    /// GPIO or bus setup failed.
    Setup,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Event {
    SccbInit,
    SccbDeinit,
    PowerDownInit,
    PowerDownDeinit,
    PowerDown(Level),
    ResetInit,
    ResetDeinit,
    Reset(Level),
    Delay(u32),
}

/// A register write as seen on the bus, tagged with the bank selected at the time.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BusWrite {
    pub bank: Bank,
    pub reg: u8,
    pub val: u8,
}

pub struct MockInterface {
    banks: [[u8; 256]; 2],
    selected: Bank,
    pub writes: Vec<BusWrite>,
    pub reads: usize,
    pub events: Vec<Event>,
    pub messages: Vec<String>,
    /// Fail once this many more writes have succeeded.
    pub fail_after_writes: Option<usize>,
    pub fail_reads: bool,
    pub fail_sccb_init: bool,
    /// Bits that read back as zero after being written.
    pub self_clearing: Vec<(Bank, u8, u8)>,
}

fn index(bank: Bank) -> usize {
    match bank {
        Bank::Dsp => 0,
        Bank::Sensor => 1,
    }
}

impl MockInterface {
    /// A device that answers with the OV2640 identity.
    pub fn new() -> Self {
        let mut mock = MockInterface {
            banks: [[0; 256]; 2],
            selected: Bank::Dsp,
            writes: Vec::new(),
            reads: 0,
            events: Vec::new(),
            messages: Vec::new(),
            fail_after_writes: None,
            fail_reads: false,
            fail_sccb_init: false,
            self_clearing: vec![
                (Bank::Sensor, Register::COM7, 0x80),
                (Bank::Dsp, Register::RESET, 0x77),
            ],
        };
        mock.poke(Bank::Sensor, Register::MIDH, 0x7F);
        mock.poke(Bank::Sensor, Register::MIDL, 0xA2);
        mock.poke(Bank::Sensor, Register::PIDH, 0x26);
        mock.poke(Bank::Sensor, Register::PIDL, 0x42);
        mock
    }

    /// Set a register without going through the bus.
    pub fn poke(&mut self, bank: Bank, reg: u8, val: u8) {
        self.banks[index(bank)][reg as usize] = val;
    }

    /// Read a register without going through the bus.
    pub fn peek(&self, bank: Bank, reg: u8) -> u8 {
        self.banks[index(bank)][reg as usize]
    }

    pub fn selected(&self) -> Bank {
        self.selected
    }

    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.reads = 0;
        self.events.clear();
        self.messages.clear();
    }

    /// Writes other than bank selects.
    pub fn data_writes(&self) -> Vec<BusWrite> {
        self.writes
            .iter()
            .copied()
            .filter(|w| w.reg != Register::BANK_SEL)
            .collect()
    }
}

impl Interface for MockInterface {
    type Error = MockError;

    fn sccb_init(&mut self) -> Result<(), MockError> {
        self.events.push(Event::SccbInit);
        if self.fail_sccb_init {
            return Err(MockError::Setup);
        }
        Ok(())
    }

    fn sccb_deinit(&mut self) -> Result<(), MockError> {
        self.events.push(Event::SccbDeinit);
        Ok(())
    }

    fn sccb_read(&mut self, addr: u8, reg: u8, buf: &mut [u8]) -> Result<(), MockError> {
        assert_eq!(addr, OV2640_ADDRESS);
        if self.fail_reads {
            return Err(MockError::Read(reg));
        }
        self.reads += 1;
        for (offset, b) in buf.iter_mut().enumerate() {
            *b = self.peek(self.selected, reg.wrapping_add(offset as u8));
        }
        Ok(())
    }

    fn sccb_write(&mut self, addr: u8, reg: u8, buf: &[u8]) -> Result<(), MockError> {
        assert_eq!(addr, OV2640_ADDRESS);
        for &val in buf {
            if let Some(remaining) = self.fail_after_writes {
                if remaining == 0 {
                    return Err(MockError::Write(reg));
                }
                self.fail_after_writes = Some(remaining - 1);
            }

            self.writes.push(BusWrite {
                bank: self.selected,
                reg,
                val,
            });

            if reg == Register::BANK_SEL {
                self.selected = if val & 0x01 == 0 {
                    Bank::Dsp
                } else {
                    Bank::Sensor
                };
                continue;
            }

            let mut stored = val;
            for (bank, clear_reg, mask) in &self.self_clearing {
                if *bank == self.selected && *clear_reg == reg {
                    stored &= !mask;
                }
            }
            self.poke(self.selected, reg, stored);
        }
        Ok(())
    }

    fn power_down_init(&mut self) -> Result<(), MockError> {
        self.events.push(Event::PowerDownInit);
        Ok(())
    }

    fn power_down_deinit(&mut self) -> Result<(), MockError> {
        self.events.push(Event::PowerDownDeinit);
        Ok(())
    }

    fn power_down_write(&mut self, level: Level) -> Result<(), MockError> {
        self.events.push(Event::PowerDown(level));
        Ok(())
    }

    fn reset_init(&mut self) -> Result<(), MockError> {
        self.events.push(Event::ResetInit);
        Ok(())
    }

    fn reset_deinit(&mut self) -> Result<(), MockError> {
        self.events.push(Event::ResetDeinit);
        Ok(())
    }

    fn reset_write(&mut self, level: Level) -> Result<(), MockError> {
        self.events.push(Event::Reset(level));
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.events.push(Event::Delay(ms));
    }

    fn debug_print(&mut self, args: fmt::Arguments<'_>) {
        self.messages.push(args.to_string());
    }
}
