//! Locate a JPEG image inside a raw capture buffer.
//!
//! In JPEG mode the DMA transfers whole lines, so the buffer holds padding before the Start Of
//! Image marker and after the End Of Image marker. [`find_frame`] returns the inclusive byte
//! range between the two.

use core::fmt;

const MARKER: u8 = 0xFF;
const SOI: u8 = 0xD8;
const EOI: u8 = 0xD9;

/// Inclusive byte range `[start, end]` of one JPEG image.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Frame {
    /// Index of the `FF` of the `FF D8` marker.
    pub start: usize,
    /// Index of the `D9` of the `FF D9` marker.
    pub end: usize,
}

impl Frame {
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Never empty, both markers are included.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The image bytes, markers included.
    pub fn bytes<'a>(&self, buf: &'a [u8]) -> &'a [u8] {
        &buf[self.start..=self.end]
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FrameError {
    /// No Start Of Image marker in the valid bytes.
    NotFound,
    /// Start Of Image at `start` but no End Of Image after it. The capture was cut short or the
    /// buffer is too small.
    Truncated { start: usize },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::NotFound => write!(f, "no start of image marker"),
            FrameError::Truncated { start } => {
                write!(f, "start of image at {} without end of image", start)
            }
        }
    }
}

/// First index `i >= from` with `buf[i] == FF` and `buf[i + 1] == code`.
fn find_marker(buf: &[u8], from: usize, code: u8) -> Option<usize> {
    buf.get(from..)?
        .windows(2)
        .position(|w| w[0] == MARKER && w[1] == code)
        .map(|i| i + from)
}

/// Find the first JPEG image in `buf[..valid_len]`.
///
/// `valid_len` is the number of bytes the capture peripheral actually wrote, it is clamped to
/// the buffer length. The first Start Of Image marker wins even if a later one would give a
/// complete image. A marker is only matched if both of its bytes are below `valid_len`.
pub fn find_frame(buf: &[u8], valid_len: usize) -> Result<Frame, FrameError> {
    let valid = &buf[..valid_len.min(buf.len())];

    let start = find_marker(valid, 0, SOI).ok_or(FrameError::NotFound)?;
    let eoi = find_marker(valid, start, EOI).ok_or(FrameError::Truncated { start })?;

    Ok(Frame {
        start,
        end: eoi + 1,
    })
}
