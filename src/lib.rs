//! OV2640 image sensor driver: SCCB register access, mode tables and JPEG frame extraction from a
//! DVP capture buffer.

#![cfg_attr(not(test), no_std)]

pub mod ov2640;

#[cfg(feature = "board")]
pub mod board;
