//! Single-shot JPEG capture with the STM32F7 DCMI peripheral and DMA2. Assumes that GPIO is set up
//! prior to using this module.

use crate::ov2640::capture::CapturePeripheral;
use core::cell::Cell;
use core::convert::TryFrom;
use cortex_m::interrupt::{free, Mutex};
use cortex_m::peripheral::NVIC;
use stm32f7xx_hal::pac::{interrupt, DCMI, DMA2, RCC};

// DMA2-Stream 1-Channel 1 is used to interface with DCMI
const DMA_STREAM: usize = 1;
const DMA_CHANNEL: u8 = 1;

// Stream 1 flags in LISR/LIFCR
const DMA_STREAM_FLAGS: u32 = 0xF40;

// DCMI data register address
const DCMI_DR_ADDR: u32 = 0x5005_0000 + 0x28;

// FRAME_RIS / FRAME_ISC
const DCMI_FRAME_FLAG: u32 = 1 << 0;

// Set by the DCMI interrupt once a whole frame has been captured
static FRAME_DONE: Mutex<Cell<bool>> = Mutex::new(Cell::new(false));

#[derive(Debug, Eq, PartialEq)]
pub enum DcmiError {
    /// More than 65535 words, DMA can't transfer it in one go.
    BufferTooLarge,
    /// The DMA writes whole words, buffer must be 4-byte aligned.
    BufferMisaligned,
}

/// DCMI + DMA2 in snapshot JPEG mode.
pub struct Dcmi {
    _dcmi: DCMI,
    _dma2: DMA2,
    /// Words programmed into NDTR for the current snapshot.
    words: u16,
}

impl Dcmi {
    /// Enable the clocks and configure both peripherals. Capture starts with
    /// [`start_snapshot`](CapturePeripheral::start_snapshot).
    pub fn new(dcmi: DCMI, dma2: DMA2) -> Self {
        let dcmi_regs = unsafe { &(*DCMI::ptr()) };
        let dma2_regs = unsafe { &(*DMA2::ptr()) };
        let rcc_regs = unsafe { &(*RCC::ptr()) };

        // Enable peripheral clocks
        rcc_regs.ahb2enr.modify(|_, w| w.dcmien().set_bit());
        rcc_regs.ahb1enr.modify(|_, w| w.dma2en().set_bit());

        // Sync polarity and PCLK edge to match the sensor defaults, then snapshot JPEG capture
        dcmi_regs.cr.write(|w| {
            w.vspol()
                .clear_bit()
                .hspol()
                .clear_bit()
                .pckpol()
                .set_bit()
                .cm()
                .set_bit()
                .jpeg()
                .set_bit()
        });

        // Only the end of frame is of interest
        dcmi_regs.ier.write(|w| w.frame_ie().set_bit());

        unsafe {
            dma2_regs.st[DMA_STREAM].cr.write(|w| {
                w
                    // Flow controller (0 = DMA, 1 = peripheral)
                    .pfctrl()
                    .clear_bit()
                    .dir()
                    .peripheral_to_memory()
                    // One buffer, stop when it is full
                    .circ()
                    .clear_bit()
                    .dbm()
                    .clear_bit()
                    .pinc()
                    .clear_bit()
                    .minc()
                    .set_bit()
                    .psize()
                    .bits32()
                    .msize()
                    .bits32()
                    .pl()
                    .high()
                    .pburst()
                    .single()
                    .mburst()
                    .single()
                    .chsel()
                    .bits(DMA_CHANNEL)
            });
        }

        dma2_regs.st[DMA_STREAM]
            .par
            .write(|w| w.pa().bits(DCMI_DR_ADDR));

        Dcmi {
            _dcmi: dcmi,
            _dma2: dma2,
            words: 0,
        }
    }
}

impl CapturePeripheral for Dcmi {
    type Error = DcmiError;

    fn start_snapshot(&mut self, buf: &mut [u8]) -> Result<(), DcmiError> {
        let dma2_regs = unsafe { &(*DMA2::ptr()) };
        let dcmi_regs = unsafe { &(*DCMI::ptr()) };

        if buf.as_ptr() as usize % 4 != 0 {
            return Err(DcmiError::BufferMisaligned);
        }
        let words = u16::try_from(buf.len() / 4).map_err(|_| DcmiError::BufferTooLarge)?;

        free(|cs| FRAME_DONE.borrow(cs).set(false));

        // Stream must be disabled to reprogram it, then clear any stale flags
        dma2_regs.st[DMA_STREAM].cr.modify(|_, w| w.en().clear_bit());
        while dma2_regs.st[DMA_STREAM].cr.read().en().bit_is_set() {}
        let stale = dma2_regs.lisr.read().bits() & DMA_STREAM_FLAGS;
        unsafe {
            dma2_regs.lifcr.write(|w| w.bits(stale));
            dcmi_regs.icr.write(|w| w.bits(DCMI_FRAME_FLAG));
        }

        dma2_regs.st[DMA_STREAM]
            .ndtr
            .write(|w| w.ndt().bits(words));
        dma2_regs.st[DMA_STREAM]
            .m0ar
            .write(|w| w.m0a().bits(buf.as_mut_ptr() as u32));
        self.words = words;

        unsafe {
            NVIC::unmask(interrupt::DCMI);
        }

        dma2_regs.st[DMA_STREAM].cr.modify(|_, w| w.en().set_bit());
        dcmi_regs
            .cr
            .modify(|_, w| w.enable().set_bit().capture().set_bit());

        Ok(())
    }

    fn stop(&mut self) -> Result<(), DcmiError> {
        let dma2_regs = unsafe { &(*DMA2::ptr()) };
        let dcmi_regs = unsafe { &(*DCMI::ptr()) };

        NVIC::mask(interrupt::DCMI);

        dcmi_regs
            .cr
            .modify(|_, w| w.capture().clear_bit().enable().clear_bit());
        dma2_regs.st[DMA_STREAM].cr.modify(|_, w| w.en().clear_bit());

        Ok(())
    }

    fn is_complete(&self) -> bool {
        free(|cs| FRAME_DONE.borrow(cs).get())
    }

    fn transferred(&self) -> usize {
        let dma2_regs = unsafe { &(*DMA2::ptr()) };
        let remaining = dma2_regs.st[DMA_STREAM].ndtr.read().ndt().bits();
        usize::from(self.words.saturating_sub(remaining)) * 4
    }
}

/// Call from the `DCMI` interrupt handler.
pub fn dcmi_isr() {
    let dcmi_regs = unsafe { &(*DCMI::ptr()) };
    let int_status = dcmi_regs.ris.read().bits();

    if int_status & DCMI_FRAME_FLAG != 0 {
        free(|cs| FRAME_DONE.borrow(cs).set(true));
    }

    // Clear whatever fired
    unsafe {
        dcmi_regs.icr.write(|w| w.bits(int_status));
    }
}
