//! # Steganography Errors
//!
//! Every failure the embedding/extraction core can report. Nothing in the core
//! terminates the process; callers match on [`StegoError`] and decide whether to
//! abort, retry with another carrier, or report to a user.

use std::io;

/// Errors produced while concealing a payload in, or revealing it from, a pixel stream.
#[derive(Debug, thiserror::Error)]
pub enum StegoError {
    /// Header plus payload need more bits than the carrier provides.
    /// Raised before any carrier byte is touched.
    #[error("payload will not fit in carrier: need {required_bits} bits but only {available_bits} are available")]
    CapacityExceeded { required_bits: u64, available_bits: u64 },

    /// The header marker does not match, so the image carries no payload written by us.
    #[error("image does not contain an embedded payload (marker {found:#010x})")]
    NotSteganographicFile { found: u32 },

    /// The stream ended before the declared payload length was reached.
    #[error("package truncated: header declares {declared} bytes but only {recovered} could be recovered")]
    TruncatedPayload { declared: u32, recovered: u64 },

    /// The stream is too short to even hold the 64-position header.
    #[error("pixel stream of {len} bytes is too short for a header")]
    TruncatedHeader { len: usize },

    /// Channel samples are not exactly one byte wide.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("unreadable image: {0}")]
    UnreadableImage(#[from] image::ImageError),

    #[error("cannot encode image: {0}")]
    ImageWrite(image::ImageError),

    /// The byte buffer does not match `width * height * channels`.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    DimensionMismatch { expected: u64, actual: u64 },

    /// The embedder ran off the end of the stream. Capacity validation makes
    /// this unreachable; seeing it means an internal invariant was broken.
    #[error("internal error: pixel stream exhausted at position {position} while embedding")]
    StreamExhausted { position: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the core.
pub type StegoResult<T> = Result<T, StegoError>;
