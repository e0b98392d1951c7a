//! Register bitfield descriptors.
//!
//! A [`Field`] is a value spread over one or more register bit ranges in a single bank. Segments
//! are listed most significant first, so a 10-bit value split as `REG45[7:6], GAIN[7:0]` keeps
//! its top two bits in `REG45`. The I/O side lives in [`Ov2640`](super::Ov2640); everything here
//! is pure bit arithmetic.

use super::regs::Bank;
use core::convert::TryFrom;
use core::marker::PhantomData;

/// A contiguous bit range `[shift + width - 1 : shift]` of one register.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Segment {
    pub reg: u8,
    pub shift: u8,
    pub width: u8,
}

impl Segment {
    pub const fn new(reg: u8, shift: u8, width: u8) -> Self {
        Segment { reg, shift, width }
    }

    /// The whole register.
    pub const fn full(reg: u8) -> Self {
        Segment::new(reg, 0, 8)
    }

    /// A single bit.
    pub const fn bit(reg: u8, bit: u8) -> Self {
        Segment::new(reg, bit, 1)
    }

    /// Bits of the register owned by this segment.
    pub fn mask(&self) -> u8 {
        ((((1u16 << self.width) - 1) << self.shift) & 0xFF) as u8
    }

    /// A full-width segment is written without reading the register first.
    pub fn is_full(&self) -> bool {
        self.width == 8
    }

    /// Replace this segment's bits of `current` with `bits`, keeping its siblings.
    pub fn merge(&self, current: u8, bits: u8) -> u8 {
        (current & !self.mask()) | ((bits << self.shift) & self.mask())
    }

    /// This segment's bits of `reg_value`, right aligned.
    pub fn extract(&self, reg_value: u8) -> u8 {
        (reg_value & self.mask()) >> self.shift
    }
}

/// Values a field accepts.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Domain {
    /// 0 or 1.
    Bool,
    /// One of the listed raw values.
    Enum(&'static [u32]),
    /// `0..=max`.
    Range { max: u32 },
}

impl Domain {
    pub fn contains(&self, value: u32) -> bool {
        match *self {
            Domain::Bool => value <= 1,
            Domain::Enum(members) => members.contains(&value),
            Domain::Range { max } => value <= max,
        }
    }
}

/// Descriptor for one device parameter.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub bank: Bank,
    /// Most significant segment first.
    pub segments: &'static [Segment],
    pub domain: Domain,
}

impl Field {
    /// Total bits across all segments.
    pub fn width(&self) -> u32 {
        self.segments.iter().map(|s| s.width as u32).sum()
    }

    /// The bits of `value` that belong in `segments[index]`, right aligned.
    pub fn segment_bits(&self, index: usize, value: u32) -> u8 {
        let below: u32 = self.segments[index + 1..]
            .iter()
            .map(|s| s.width as u32)
            .sum();
        let width = self.segments[index].width as u32;
        ((value >> below) & ((1u32 << width) - 1)) as u8
    }
}

/// Conversion between a Rust type and the raw value stored in a field.
pub trait FieldValue: Sized {
    fn to_raw(self) -> u32;

    /// `None` if the raw value has no representation in `Self`.
    fn from_raw(raw: u32) -> Option<Self>;
}

impl FieldValue for bool {
    fn to_raw(self) -> u32 {
        self as u32
    }

    fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        }
    }
}

impl FieldValue for u8 {
    fn to_raw(self) -> u32 {
        self.into()
    }

    fn from_raw(raw: u32) -> Option<Self> {
        u8::try_from(raw).ok()
    }
}

impl FieldValue for u16 {
    fn to_raw(self) -> u32 {
        self.into()
    }

    fn from_raw(raw: u32) -> Option<Self> {
        u16::try_from(raw).ok()
    }
}

impl FieldValue for u32 {
    fn to_raw(self) -> u32 {
        self
    }

    fn from_raw(raw: u32) -> Option<Self> {
        Some(raw)
    }
}

/// A [`Field`] tagged with the type it holds.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Param<T> {
    pub field: Field,
    ty: PhantomData<T>,
}

impl<T> Param<T> {
    pub const fn new(field: Field) -> Self {
        Param {
            field,
            ty: PhantomData,
        }
    }
}

/// Declares a `#[repr(u8)]` enum stored in a field, along with its raw value list and
/// [`FieldValue`] impl.
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $raw:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Eq, PartialEq)]
        #[repr(u8)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $raw,)+
        }

        impl $name {
            /// Raw values accepted by the field.
            pub const RAW: &'static [u32] = &[$($raw),+];
        }

        impl $crate::ov2640::field::FieldValue for $name {
            fn to_raw(self) -> u32 {
                self as u32
            }

            fn from_raw(raw: u32) -> Option<Self> {
                $(
                    if raw == $raw {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }
    };
}
