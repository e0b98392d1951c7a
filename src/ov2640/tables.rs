//! Mode tables: ordered raw register writes that move the device between output modes, plus the
//! picture tuning tables.
//!
//! Entries are applied exactly in order and include their own bank-select writes. A table only
//! touches its own registers, so tables layer: JPEG then RGB565 leaves the JPEG-only registers as
//! JPEG set them.

use super::regs::Register;
use heapless::{consts, Vec};

/// One raw register write.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RegWrite {
    pub reg: u8,
    pub val: u8,
}

/// Statically allocated (size 64) list for composing register sequences at runtime.
pub type RegList = Vec<RegWrite, consts::U64>;

const fn w(reg: u8, val: u8) -> RegWrite {
    RegWrite { reg, val }
}

const DSP: RegWrite = w(Register::BANK_SEL, 0x00);
const SENSOR: RegWrite = w(Register::BANK_SEL, 0x01);

/// Baseline configuration applied once after init: UXGA sensor timing, auto exposure and gain,
/// gamma, white balance and YUV422 DSP output.
pub const NORMAL: &[RegWrite] = &[
    DSP,
    w(0x2C, 0xFF),
    w(0x2E, 0xDF),
    SENSOR,
    w(0x3C, 0x32),
    w(0x11, 0x00),
    w(0x09, 0x02),
    w(0x04, 0x28),
    w(0x13, 0xE5),
    w(0x14, 0x48),
    w(0x2C, 0x0C),
    w(0x33, 0x78),
    w(0x3A, 0x33),
    w(0x3B, 0xFB),
    w(0x3E, 0x00),
    w(0x43, 0x11),
    w(0x16, 0x10),
    w(0x39, 0x02),
    w(0x35, 0x88),
    w(0x22, 0x0A),
    w(0x37, 0x40),
    w(0x23, 0x00),
    w(0x34, 0xA0),
    w(0x06, 0x02),
    w(0x06, 0x88),
    w(0x07, 0xC0),
    w(0x0D, 0xB7),
    w(0x0E, 0x01),
    w(0x4C, 0x00),
    w(0x4A, 0x81),
    w(0x21, 0x99),
    w(0x24, 0x40),
    w(0x25, 0x38),
    w(0x26, 0x82),
    w(0x5C, 0x00),
    w(0x63, 0x00),
    w(0x46, 0x22),
    w(0x0C, 0x3A),
    w(0x5D, 0x55),
    w(0x5E, 0x7D),
    w(0x5F, 0x7D),
    w(0x60, 0x55),
    w(0x61, 0x70),
    w(0x62, 0x80),
    w(0x7C, 0x05),
    w(0x20, 0x80),
    w(0x28, 0x30),
    w(0x6C, 0x00),
    w(0x6D, 0x80),
    w(0x6E, 0x00),
    w(0x70, 0x02),
    w(0x71, 0x94),
    w(0x73, 0xC1),
    w(0x3D, 0x34),
    w(0x12, 0x04),
    w(0x5A, 0x57),
    w(0x4F, 0xBB),
    w(0x50, 0x9C),
    DSP,
    w(0xE5, 0x7F),
    w(0xF9, 0xC0),
    w(0x41, 0x24),
    w(0xE0, 0x14),
    w(0x76, 0xFF),
    w(0x33, 0xA0),
    w(0x42, 0x20),
    w(0x43, 0x18),
    w(0x4C, 0x00),
    w(0x87, 0xD0),
    w(0x88, 0x3F),
    w(0xD7, 0x03),
    w(0xD9, 0x10),
    w(0xD3, 0x82),
    w(0xC8, 0x08),
    w(0xC9, 0x80),
    w(0x7C, 0x00),
    w(0x7D, 0x00),
    w(0x7C, 0x03),
    w(0x7D, 0x48),
    w(0x7D, 0x48),
    w(0x7C, 0x08),
    w(0x7D, 0x20),
    w(0x7D, 0x10),
    w(0x7D, 0x0E),
    // Gamma curve
    w(0x90, 0x00),
    w(0x91, 0x0E),
    w(0x91, 0x1A),
    w(0x91, 0x31),
    w(0x91, 0x5A),
    w(0x91, 0x69),
    w(0x91, 0x75),
    w(0x91, 0x7E),
    w(0x91, 0x88),
    w(0x91, 0x8F),
    w(0x91, 0x96),
    w(0x91, 0xA3),
    w(0x91, 0xAF),
    w(0x91, 0xC4),
    w(0x91, 0xD7),
    w(0x91, 0xE8),
    w(0x91, 0x20),
    // Colour matrix
    w(0x92, 0x00),
    w(0x93, 0x06),
    w(0x93, 0xE3),
    w(0x93, 0x05),
    w(0x93, 0x05),
    w(0x93, 0x00),
    w(0x93, 0x04),
    w(0x93, 0x00),
    w(0x93, 0x00),
    w(0x93, 0x00),
    w(0x93, 0x00),
    w(0x93, 0x00),
    w(0x93, 0x00),
    w(0x93, 0x00),
    w(0x96, 0x00),
    w(0x97, 0x08),
    w(0x97, 0x19),
    w(0x97, 0x02),
    w(0x97, 0x0C),
    w(0x97, 0x24),
    w(0x97, 0x30),
    w(0x97, 0x28),
    w(0x97, 0x26),
    w(0x97, 0x02),
    w(0x97, 0x98),
    w(0x97, 0x80),
    w(0x97, 0x00),
    w(0x97, 0x00),
    // White balance
    w(0xA4, 0x00),
    w(0xA8, 0x00),
    w(0xC5, 0x11),
    w(0xC6, 0x51),
    w(0xBF, 0x80),
    w(0xC7, 0x10),
    w(0xB6, 0x66),
    w(0xB8, 0xA5),
    w(0xB7, 0x64),
    w(0xB9, 0x7C),
    w(0xB3, 0xAF),
    w(0xB4, 0x97),
    w(0xB5, 0xFF),
    w(0xB0, 0xC5),
    w(0xB1, 0x94),
    w(0xB2, 0x0F),
    w(0xC4, 0x5C),
    w(0xA6, 0x00),
    w(0xA7, 0x20),
    w(0xA7, 0xD8),
    w(0xA7, 0x1B),
    w(0xA7, 0x31),
    w(0xA7, 0x00),
    w(0xA7, 0x18),
    w(0xA7, 0x20),
    w(0xA7, 0xD8),
    w(0xA7, 0x19),
    w(0xA7, 0x31),
    w(0xA7, 0x00),
    w(0xA7, 0x18),
    w(0xA7, 0x20),
    w(0xA7, 0xD8),
    w(0xA7, 0x19),
    w(0xA7, 0x31),
    w(0xA7, 0x00),
    w(0xA7, 0x18),
    w(0x7F, 0x00),
    w(0xE5, 0x1F),
    w(0xE1, 0x77),
    w(0xDD, 0x7F),
    w(0xC2, 0x0E),
];

/// JPEG output: YUV422 source, JPEG encoder enabled, quantization scale 0x0C.
pub const JPEG: &[RegWrite] = &[
    DSP,
    w(0xE0, 0x04),
    w(0xDA, 0x01),
    w(0xD7, 0x01),
    w(0xE1, 0x67),
    w(0xE0, 0x00),
    w(0xE0, 0x14),
    w(0xE1, 0x77),
    w(0xE5, 0x1F),
    w(0xD7, 0x03),
    w(0xDA, 0x10),
    w(0x44, 0x0C),
    w(0xE0, 0x00),
    SENSOR,
    w(0x04, 0x08),
];

/// RGB565 output. Leaves the JPEG-only registers alone.
pub const RGB565: &[RegWrite] = &[DSP, w(0xE0, 0x04), w(0xDA, 0x08), w(0xD7, 0x03), w(0xE0, 0x00)];

/// Tables selectable through [`Ov2640::apply_preset`](super::Ov2640::apply_preset).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Preset {
    Normal,
    Jpeg,
    Rgb565,
}

impl Preset {
    pub fn table(self) -> &'static [RegWrite] {
        match self {
            Preset::Normal => NORMAL,
            Preset::Jpeg => JPEG,
            Preset::Rgb565 => RGB565,
        }
    }
}

/// Table literal. Plain struct expressions so the slices are promoted to `'static`.
macro_rules! table {
    ($($reg:expr => $val:expr),+ $(,)?) => {
        &[DSP, $(RegWrite { reg: $reg, val: $val }),+]
    };
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LightMode {
    Auto,
    Sunny,
    Cloudy,
    Office,
    Home,
}

impl LightMode {
    pub fn table(self) -> &'static [RegWrite] {
        match self {
            LightMode::Auto => table![0xC7 => 0x00],
            LightMode::Sunny => table![0xC7 => 0x40, 0xCC => 0x5E, 0xCD => 0x41, 0xCE => 0x54],
            LightMode::Cloudy => table![0xC7 => 0x40, 0xCC => 0x65, 0xCD => 0x41, 0xCE => 0x4F],
            LightMode::Office => table![0xC7 => 0x40, 0xCC => 0x52, 0xCD => 0x41, 0xCE => 0x66],
            LightMode::Home => table![0xC7 => 0x40, 0xCC => 0x42, 0xCD => 0x3F, 0xCE => 0x71],
        }
    }
}

/// Five-step adjustment used by saturation, brightness and contrast.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Adjust {
    Plus2,
    Plus1,
    Zero,
    Minus1,
    Minus2,
}

// Saturation, brightness, contrast and effects go through the SDE indirect registers: 0x7C
// selects an SDE address, each 0x7D write stores a byte and advances it.

pub fn saturation_table(adjust: Adjust) -> &'static [RegWrite] {
    match adjust {
        Adjust::Plus2 => table![0x7C => 0x00, 0x7D => 0x02, 0x7C => 0x03, 0x7D => 0x68, 0x7D => 0x68],
        Adjust::Plus1 => table![0x7C => 0x00, 0x7D => 0x02, 0x7C => 0x03, 0x7D => 0x58, 0x7D => 0x58],
        Adjust::Zero => table![0x7C => 0x00, 0x7D => 0x02, 0x7C => 0x03, 0x7D => 0x48, 0x7D => 0x48],
        Adjust::Minus1 => table![0x7C => 0x00, 0x7D => 0x02, 0x7C => 0x03, 0x7D => 0x38, 0x7D => 0x38],
        Adjust::Minus2 => table![0x7C => 0x00, 0x7D => 0x02, 0x7C => 0x03, 0x7D => 0x28, 0x7D => 0x28],
    }
}

pub fn brightness_table(adjust: Adjust) -> &'static [RegWrite] {
    match adjust {
        Adjust::Plus2 => table![0x7C => 0x00, 0x7D => 0x04, 0x7C => 0x09, 0x7D => 0x40, 0x7D => 0x00],
        Adjust::Plus1 => table![0x7C => 0x00, 0x7D => 0x04, 0x7C => 0x09, 0x7D => 0x30, 0x7D => 0x00],
        Adjust::Zero => table![0x7C => 0x00, 0x7D => 0x04, 0x7C => 0x09, 0x7D => 0x20, 0x7D => 0x00],
        Adjust::Minus1 => table![0x7C => 0x00, 0x7D => 0x04, 0x7C => 0x09, 0x7D => 0x10, 0x7D => 0x00],
        Adjust::Minus2 => table![0x7C => 0x00, 0x7D => 0x04, 0x7C => 0x09, 0x7D => 0x00, 0x7D => 0x00],
    }
}

pub fn contrast_table(adjust: Adjust) -> &'static [RegWrite] {
    match adjust {
        Adjust::Plus2 => table![
            0x7C => 0x00, 0x7D => 0x04, 0x7C => 0x07,
            0x7D => 0x20, 0x7D => 0x28, 0x7D => 0x0C, 0x7D => 0x06,
        ],
        Adjust::Plus1 => table![
            0x7C => 0x00, 0x7D => 0x04, 0x7C => 0x07,
            0x7D => 0x20, 0x7D => 0x24, 0x7D => 0x16, 0x7D => 0x06,
        ],
        Adjust::Zero => table![
            0x7C => 0x00, 0x7D => 0x04, 0x7C => 0x07,
            0x7D => 0x20, 0x7D => 0x20, 0x7D => 0x20, 0x7D => 0x06,
        ],
        Adjust::Minus1 => table![
            0x7C => 0x00, 0x7D => 0x04, 0x7C => 0x07,
            0x7D => 0x20, 0x7D => 0x1C, 0x7D => 0x2A, 0x7D => 0x06,
        ],
        Adjust::Minus2 => table![
            0x7C => 0x00, 0x7D => 0x04, 0x7C => 0x07,
            0x7D => 0x20, 0x7D => 0x18, 0x7D => 0x34, 0x7D => 0x06,
        ],
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SpecialEffect {
    Antique,
    Bluish,
    Greenish,
    Reddish,
    BlackWhite,
    Negative,
    BlackWhiteNegative,
    Normal,
}

impl SpecialEffect {
    pub fn table(self) -> &'static [RegWrite] {
        // SDE mode at 0x00, fixed U and V at 0x05/0x06
        match self {
            SpecialEffect::Antique => table![0x7C => 0x00, 0x7D => 0x18, 0x7C => 0x05, 0x7D => 0x40, 0x7D => 0xA6],
            SpecialEffect::Bluish => table![0x7C => 0x00, 0x7D => 0x18, 0x7C => 0x05, 0x7D => 0xA0, 0x7D => 0x40],
            SpecialEffect::Greenish => table![0x7C => 0x00, 0x7D => 0x18, 0x7C => 0x05, 0x7D => 0x40, 0x7D => 0x40],
            SpecialEffect::Reddish => table![0x7C => 0x00, 0x7D => 0x18, 0x7C => 0x05, 0x7D => 0x40, 0x7D => 0xC0],
            SpecialEffect::BlackWhite => table![0x7C => 0x00, 0x7D => 0x18, 0x7C => 0x05, 0x7D => 0x80, 0x7D => 0x80],
            SpecialEffect::Negative => table![0x7C => 0x00, 0x7D => 0x40, 0x7C => 0x05, 0x7D => 0x80, 0x7D => 0x80],
            SpecialEffect::BlackWhiteNegative => table![0x7C => 0x00, 0x7D => 0x58, 0x7C => 0x05, 0x7D => 0x80, 0x7D => 0x80],
            SpecialEffect::Normal => table![0x7C => 0x00, 0x7D => 0x00, 0x7C => 0x05, 0x7D => 0x80, 0x7D => 0x80],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tables() -> std::vec::Vec<&'static [RegWrite]> {
        let mut tables = vec![NORMAL, JPEG, RGB565];
        for mode in &[
            LightMode::Auto,
            LightMode::Sunny,
            LightMode::Cloudy,
            LightMode::Office,
            LightMode::Home,
        ] {
            tables.push(mode.table());
        }
        for adjust in &[Adjust::Plus2, Adjust::Plus1, Adjust::Zero, Adjust::Minus1, Adjust::Minus2] {
            tables.push(saturation_table(*adjust));
            tables.push(brightness_table(*adjust));
            tables.push(contrast_table(*adjust));
        }
        tables.push(SpecialEffect::Normal.table());
        tables.push(SpecialEffect::Negative.table());
        tables
    }

    #[test]
    fn tables_select_a_bank_first() {
        for table in all_tables() {
            assert_eq!(table[0].reg, Register::BANK_SEL);
            assert!(table[0].val <= 0x01);
        }
    }

    #[test]
    fn bank_select_values_are_valid() {
        for table in all_tables() {
            for entry in table.iter().filter(|e| e.reg == Register::BANK_SEL) {
                assert!(entry.val == 0x00 || entry.val == 0x01);
            }
        }
    }

    #[test]
    fn rgb565_leaves_jpeg_registers_alone() {
        assert!(RGB565.iter().all(|e| e.reg != 0xE5 && e.reg != Register::QS));
        assert!(!RGB565.contains(&SENSOR));
    }

    #[test]
    fn reg_list_composes() {
        let mut list = RegList::new();
        list.extend_from_slice(RGB565).expect("list full");
        list.push(w(Register::QS, 0x10)).expect("list full");
        assert_eq!(list.len(), RGB565.len() + 1);
    }
}
