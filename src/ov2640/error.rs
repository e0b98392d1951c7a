//! Driver errors.

use core::fmt;

/// OV2640 driver errors, generic over the transport error `E` of the linked interface.
#[derive(Debug, Eq, PartialEq)]
pub enum Error<E> {
    /// No interface has been linked to the handle.
    MissingInterface,
    /// The handle has not been initialized (or was deinitialized).
    NotInitialized,
    /// Value outside the domain of the named field. Nothing was written.
    InvalidArgument { field: &'static str, value: u32 },
    /// Bus, GPIO or delay failure reported by the interface.
    Transport(E),
    /// A mode table write failed at `index`. Earlier entries were already written.
    TableWrite { index: usize, source: E },
    /// Manufacturer ID mismatch, holds the value read.
    ManufacturerId(u16),
    /// Product ID mismatch, holds the value read.
    ProductId(u16),
    /// The device returned a value the field's type can't represent.
    UnexpectedValue { field: &'static str, raw: u32 },
}

impl<E> Error<E> {
    /// `true` for either identity check failure.
    pub fn is_identity_mismatch(&self) -> bool {
        matches!(self, Error::ManufacturerId(_) | Error::ProductId(_))
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingInterface => write!(f, "no interface linked"),
            Error::NotInitialized => write!(f, "device not initialized"),
            Error::InvalidArgument { field, value } => {
                write!(f, "value {:#x} out of range for {}", value, field)
            }
            Error::Transport(e) => write!(f, "transport error: {:?}", e),
            Error::TableWrite { index, source } => {
                write!(f, "table write {} failed: {:?}", index, source)
            }
            Error::ManufacturerId(id) => write!(f, "manufacturer id mismatch: {:#06x}", id),
            Error::ProductId(id) => write!(f, "product id mismatch: {:#06x}", id),
            Error::UnexpectedValue { field, raw } => {
                write!(f, "unexpected value {:#x} read from {}", raw, field)
            }
        }
    }
}
