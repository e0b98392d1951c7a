//! Support for the STM32F746G Discovery Board: pin setup for the camera connector (P1) and the
//! DCMI capture peripheral.

pub mod dcmi;
mod stm32f746_disco;

pub use stm32f746_disco::{configure_pins, get_hse_freq, PwdnPin, RstPin, SclPin, SdaPin};
