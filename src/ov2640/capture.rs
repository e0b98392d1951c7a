//! Single-shot capture: start the DVP peripheral, wait for it to finish and locate the JPEG image
//! in the buffer it filled.

use super::frame::{find_frame, Frame, FrameError};
use core::fmt;
use embedded_hal::blocking::delay::DelayMs;

/// Time between completion checks in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 10;

/// Default time to wait for a snapshot in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// A parallel camera capture peripheral (DCMI + DMA on STM32) that fills a memory buffer in the
/// background.
pub trait CapturePeripheral {
    type Error: fmt::Debug;

    /// Begin capturing one frame into `buf`.
    fn start_snapshot(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Set once the frame has been transferred. Usually a flag raised by an interrupt handler.
    fn is_complete(&self) -> bool;

    /// Number of bytes written to the buffer by the last snapshot.
    fn transferred(&self) -> usize;
}

#[derive(Debug, Eq, PartialEq)]
pub enum CaptureError<E> {
    Peripheral(E),
    /// The peripheral did not report completion in time.
    Timeout,
    /// The capture completed but the buffer doesn't hold a whole image.
    Frame(FrameError),
}

impl<E: fmt::Debug> fmt::Display for CaptureError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Peripheral(e) => write!(f, "capture peripheral error: {:?}", e),
            CaptureError::Timeout => write!(f, "capture timed out"),
            CaptureError::Frame(e) => write!(f, "{}", e),
        }
    }
}

/// Take one snapshot into `buf` and return where the image is.
///
/// Polls the peripheral every [`POLL_INTERVAL_MS`] for up to `timeout_ms`. The peripheral is
/// stopped before returning, also on timeout.
pub fn snapshot<P, D>(
    periph: &mut P,
    buf: &mut [u8],
    delay: &mut D,
    timeout_ms: u32,
) -> Result<Frame, CaptureError<P::Error>>
where
    P: CapturePeripheral,
    D: DelayMs<u32>,
{
    periph
        .start_snapshot(buf)
        .map_err(CaptureError::Peripheral)?;

    let mut rounds = timeout_ms / POLL_INTERVAL_MS;
    while !periph.is_complete() {
        if rounds == 0 {
            let _ = periph.stop();
            return Err(CaptureError::Timeout);
        }
        rounds -= 1;
        delay.delay_ms(POLL_INTERVAL_MS);
    }

    periph.stop().map_err(CaptureError::Peripheral)?;

    find_frame(buf, periph.transferred()).map_err(CaptureError::Frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Completes after `polls` checks, writing `data` into the buffer on start.
    struct FakeDcmi {
        data: &'static [u8],
        polls: Option<usize>,
        checks: core::cell::Cell<usize>,
        stopped: bool,
        fail_start: bool,
    }

    impl FakeDcmi {
        fn new(data: &'static [u8], polls: Option<usize>) -> Self {
            FakeDcmi {
                data,
                polls,
                checks: core::cell::Cell::new(0),
                stopped: false,
                fail_start: false,
            }
        }
    }

    impl CapturePeripheral for FakeDcmi {
        type Error = &'static str;

        fn start_snapshot(&mut self, buf: &mut [u8]) -> Result<(), &'static str> {
            if self.fail_start {
                return Err("busy");
            }
            buf[..self.data.len()].copy_from_slice(self.data);
            Ok(())
        }

        fn stop(&mut self) -> Result<(), &'static str> {
            self.stopped = true;
            Ok(())
        }

        fn is_complete(&self) -> bool {
            let n = self.checks.get();
            self.checks.set(n + 1);
            self.polls.map_or(false, |p| n >= p)
        }

        fn transferred(&self) -> usize {
            self.data.len()
        }
    }

    #[derive(Default)]
    struct FakeDelay {
        total: u32,
    }

    impl DelayMs<u32> for FakeDelay {
        fn delay_ms(&mut self, ms: u32) {
            self.total += ms;
        }
    }

    const JPEG: &[u8] = &[0x00, 0xFF, 0xD8, 0x01, 0x02, 0xFF, 0xD9, 0x00];

    #[test]
    fn completes_after_a_few_polls() {
        let mut dcmi = FakeDcmi::new(JPEG, Some(3));
        let mut delay = FakeDelay::default();
        let mut buf = [0u8; 32];

        let frame = snapshot(&mut dcmi, &mut buf, &mut delay, DEFAULT_TIMEOUT_MS);
        assert_eq!(frame, Ok(Frame { start: 1, end: 6 }));
        assert_eq!(delay.total, 3 * POLL_INTERVAL_MS);
        assert!(dcmi.stopped);
    }

    #[test]
    fn times_out() {
        let mut dcmi = FakeDcmi::new(JPEG, None);
        let mut delay = FakeDelay::default();
        let mut buf = [0u8; 32];

        assert_eq!(
            snapshot(&mut dcmi, &mut buf, &mut delay, 100),
            Err(CaptureError::Timeout)
        );
        assert_eq!(delay.total, 100);
        assert!(dcmi.stopped);
    }

    #[test]
    fn frame_errors_are_not_timeouts() {
        let mut dcmi = FakeDcmi::new(&[0xFF, 0xD8, 0x00, 0x00], Some(0));
        let mut delay = FakeDelay::default();
        let mut buf = [0u8; 32];

        assert_eq!(
            snapshot(&mut dcmi, &mut buf, &mut delay, 100),
            Err(CaptureError::Frame(FrameError::Truncated { start: 0 }))
        );
        assert_eq!(delay.total, 0);
    }

    #[test]
    fn stale_bytes_after_transfer_are_ignored() {
        let mut dcmi = FakeDcmi::new(&[0x00, 0xFF, 0xD8, 0x00], Some(0));
        let mut delay = FakeDelay::default();
        // Leftover image from an earlier capture past the transferred count
        let mut buf = [0u8; 8];
        buf[6] = 0xFF;
        buf[7] = 0xD9;

        assert_eq!(
            snapshot(&mut dcmi, &mut buf, &mut delay, 100),
            Err(CaptureError::Frame(FrameError::Truncated { start: 1 }))
        );
    }

    #[test]
    fn start_failure() {
        let mut dcmi = FakeDcmi::new(JPEG, Some(0));
        dcmi.fail_start = true;
        let mut delay = FakeDelay::default();
        let mut buf = [0u8; 32];

        assert_eq!(
            snapshot(&mut dcmi, &mut buf, &mut delay, 100),
            Err(CaptureError::Peripheral("busy"))
        );
        assert!(!dcmi.stopped);
    }
}
