//! OV2640 register map. The device exposes two 256-byte banks behind a shared bank-select register.

/// Device address is 0x60, however the I2C driver will left-shift the provided address by 1
pub const OV2640_ADDRESS: u8 = 0x30;

/// Expected manufacturer ID ("OV" in the datasheet, 0x7FA2 on the wire).
pub const OV2640_MANF_ID: u16 = 0x7FA2;

/// Product IDs seen on shipping parts (PID:VER).
pub const OV2640_PROD_IDS: [u16; 2] = [0x2642, 0x2641];

/// Register bank.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Bank {
    Dsp,
    Sensor,
}

impl Bank {
    /// Value written to [`Register::BANK_SEL`] to select this bank.
    pub const fn select_value(self) -> u8 {
        match self {
            Bank::Dsp => 0x00,
            Bank::Sensor => 0x01,
        }
    }
}

/// Device register addresses.
pub struct Register;

impl Register {
    // Shared by both banks
    pub const BANK_SEL: u8 = 0xFF;

    // Sensor bank
    pub const GAIN: u8 = 0x00;
    pub const COM1: u8 = 0x03;
    pub const REG04: u8 = 0x04;
    pub const REG08: u8 = 0x08;
    pub const COM2: u8 = 0x09;
    pub const PIDH: u8 = 0x0A;
    pub const PIDL: u8 = 0x0B;
    pub const COM3: u8 = 0x0C;
    pub const COM4: u8 = 0x0D;
    pub const AEC: u8 = 0x10;
    pub const CLKRC: u8 = 0x11;
    pub const COM7: u8 = 0x12;
    pub const COM8: u8 = 0x13;
    pub const COM9: u8 = 0x14;
    pub const COM10: u8 = 0x15;
    pub const HREFST: u8 = 0x17;
    pub const HREFEND: u8 = 0x18;
    pub const VSTRT: u8 = 0x19;
    pub const VEND: u8 = 0x1A;
    pub const MIDH: u8 = 0x1C;
    pub const MIDL: u8 = 0x1D;
    pub const AEW: u8 = 0x24;
    pub const AEB: u8 = 0x25;
    pub const VV: u8 = 0x26;
    pub const REG2A: u8 = 0x2A;
    pub const FRARL: u8 = 0x2B;
    pub const ADDVSL: u8 = 0x2D;
    pub const ADDVSH: u8 = 0x2E;
    pub const YAVG: u8 = 0x2F;
    pub const HSDY: u8 = 0x30;
    pub const HEDY: u8 = 0x31;
    pub const REG32: u8 = 0x32;
    pub const ARCOM2: u8 = 0x34;
    pub const REG45: u8 = 0x45;
    pub const FLL: u8 = 0x46;
    pub const FLH: u8 = 0x47;
    pub const COM19: u8 = 0x48;
    pub const ZOOMS: u8 = 0x49;
    pub const COM22: u8 = 0x4B;
    pub const COM25: u8 = 0x4E;
    pub const BD50: u8 = 0x4F;
    pub const BD60: u8 = 0x50;
    pub const REG5D: u8 = 0x5D;
    pub const REG5E: u8 = 0x5E;
    pub const REG5F: u8 = 0x5F;
    pub const REG60: u8 = 0x60;
    pub const HISTO_LOW: u8 = 0x61;
    pub const HISTO_HIGH: u8 = 0x62;

    // DSP bank
    pub const R_BYPASS: u8 = 0x05;
    pub const QS: u8 = 0x44;
    pub const CTRLI: u8 = 0x50;
    pub const HSIZE: u8 = 0x51;
    pub const VSIZE: u8 = 0x52;
    pub const XOFFL: u8 = 0x53;
    pub const YOFFL: u8 = 0x54;
    pub const VHYX: u8 = 0x55;
    pub const DPRP: u8 = 0x56;
    pub const TEST: u8 = 0x57;
    pub const ZMOW: u8 = 0x5A;
    pub const ZMOH: u8 = 0x5B;
    pub const ZMHH: u8 = 0x5C;
    pub const BPADDR: u8 = 0x7C;
    pub const BPDATA: u8 = 0x7D;
    pub const CTRL2: u8 = 0x86;
    pub const CTRL3: u8 = 0x87;
    pub const SIZEL: u8 = 0x8C;
    pub const HSIZE8: u8 = 0xC0;
    pub const VSIZE8: u8 = 0xC1;
    pub const CTRL0: u8 = 0xC2;
    pub const CTRL1: u8 = 0xC3;
    pub const R_DVP_SP: u8 = 0xD3;
    pub const IMAGE_MODE: u8 = 0xDA;
    pub const RESET: u8 = 0xE0;
    pub const SCCB_MASTER_SPEED: u8 = 0xF0;
    pub const SCCB_SLAVE_ID: u8 = 0xF7;
    pub const SCCB_CONFIG: u8 = 0xF8;
    pub const MC_BIST: u8 = 0xF9;
    pub const PROG_MEM_ADDR_L: u8 = 0xFA;
    pub const PROG_MEM_ADDR_H: u8 = 0xFB;
    pub const PROG_MEM_ACCESS: u8 = 0xFC;
    pub const SCCB_PROTOCOL_CMD: u8 = 0xFD;
    pub const SCCB_PROTOCOL_STATUS: u8 = 0xFE;
}

/// COM7 bit that resets every sensor register to its default.
pub const COM7_SRST: u8 = 0x80;
