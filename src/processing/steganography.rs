//! # LSB Steganography Implementation
//!
//! Implements payload embedding and extraction using Least Significant Bit (LSB)
//! steganography over a row-major pixel byte stream.
//!
//! ## Algorithm
//!
//! Every byte of the stream (every channel sample of every pixel) carries one
//! bit of hidden data in its least significant bit.
//!
//! ### Encoding Process
//! 1. Check that `payload_len * 8 + 64` bits fit in the carrier (nothing is written otherwise)
//! 2. Write the 32-bit marker into positions 0..32 and the 32-bit payload length into 32..64
//! 3. Write each payload byte into the next 8 positions, LSB first
//!
//! ### Decoding Process
//! 1. Read the marker from positions 0..32 and reject the image if it does not match
//! 2. Read the payload length from positions 32..64
//! 3. Collect `length * 8` bits starting at position 64 and emit them as bytes
//!
//! ### Capacity
//! An image can store `(width * height * channels - 64) / 8` bytes of payload.
//!
//! Example: An 800x600 RGB image can store ~180 KB.

use std::io::Write;

use log::debug;

use super::capacity::check_capacity;
use super::codec;
use super::embed::PayloadEmbedder;
use super::error::StegoResult;
use super::extract::PayloadExtractor;
use super::header::{Header, DEFAULT_MARKER};
use super::stream::PixelStream;

/// Settings shared by the encoding and decoding side.
///
/// Both sides must agree on the marker, otherwise every decode fails with
/// [`StegoError::NotSteganographicFile`](super::StegoError::NotSteganographicFile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StegoOptions {
    pub marker: u32,
}

impl Default for StegoOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
        }
    }
}

/// Embed `payload` into a pixel stream in place.
///
/// # Arguments
/// - `stream`: Carrier pixels, modified in place
/// - `payload`: Bytes to hide
/// - `options`: Marker to stamp into the header
///
/// # Returns
/// - `Ok(usize)`: Number of payload bytes embedded
/// - `Err`: If the payload does not fit; the stream is left untouched in that case
///
/// # Errors
/// - [`StegoError::CapacityExceeded`](super::StegoError::CapacityExceeded) if header plus payload exceed the carrier
pub fn embed_payload(
    stream: &mut PixelStream,
    payload: &[u8],
    options: &StegoOptions,
) -> StegoResult<usize> {
    // ========== Capacity check (before any mutation) ==========
    check_capacity(
        stream.width(),
        stream.height(),
        stream.channels(),
        payload.len() as u64,
    )?;
    debug!(
        "Embedding {} bytes into {}x{}x{} carrier",
        payload.len(),
        stream.width(),
        stream.height(),
        stream.channels()
    );

    // ========== Header phase ==========
    let bytes = stream.as_bytes_mut();
    // check_capacity bounds the length to u32
    Header::new(options.marker, payload.len() as u32).write(bytes)?;

    // ========== Payload phase ==========
    let written = PayloadEmbedder::new(bytes).embed(payload)?;
    debug!("Embedding done: {} bytes", written);

    Ok(written)
}

/// Extract a hidden payload from a pixel stream into `sink`.
///
/// # Arguments
/// - `stream`: Package pixels
/// - `sink`: Receives recovered bytes as they are completed
/// - `options`: Marker the header must carry
///
/// # Returns
/// - `Ok(u64)`: Number of payload bytes written to `sink`
/// - `Err`: If the image carries no payload or the payload is cut short
///
/// # Errors
/// - [`StegoError::NotSteganographicFile`](super::StegoError::NotSteganographicFile) on marker mismatch (nothing is written)
/// - [`StegoError::TruncatedPayload`](super::StegoError::TruncatedPayload) if the stream ends early (sink holds partial data)
pub fn extract_payload<W: Write>(
    stream: &PixelStream,
    sink: W,
    options: &StegoOptions,
) -> StegoResult<u64> {
    // ========== Header phase ==========
    let payload_len = Header::validate(stream.as_bytes(), options.marker)?;
    debug!("Header found, payload declares {} bytes", payload_len);

    // ========== Payload phase ==========
    let recovered = PayloadExtractor::new(stream.as_bytes()).extract(payload_len, sink)?;
    debug!("Extraction done: {} bytes", recovered);

    Ok(recovered)
}

/// Embed a payload into an encoded image held in memory.
///
/// # Arguments
/// - `image_bytes`: Raw bytes of the carrier image (any 8-bit format supported by `image` crate)
/// - `payload`: Bytes to hide
/// - `options`: Marker to stamp into the header
///
/// # Returns
/// - `Ok(Vec<u8>)`: PNG image bytes carrying the payload
/// - `Err`: If the carrier can't be decoded, is not 8-bit, or is too small
///
/// # Example
/// ```ignore
/// let carrier = std::fs::read("input.png")?;
/// let package = embed_payload_bytes(&carrier, b"Secret", &StegoOptions::default())?;
/// std::fs::write("package.png", package)?;
/// ```
pub fn embed_payload_bytes(
    image_bytes: &[u8],
    payload: &[u8],
    options: &StegoOptions,
) -> StegoResult<Vec<u8>> {
    let mut stream = codec::decode_pixel_stream(image_bytes)?;
    embed_payload(&mut stream, payload, options)?;

    // Always PNG: a lossy container would destroy the LSBs
    codec::encode_png(stream)
}

/// Extract the payload from an encoded package image held in memory.
///
/// # Example
/// ```ignore
/// let package = std::fs::read("package.png")?;
/// let secret = extract_payload_bytes(&package, &StegoOptions::default())?;
/// ```
pub fn extract_payload_bytes(image_bytes: &[u8], options: &StegoOptions) -> StegoResult<Vec<u8>> {
    let stream = codec::decode_pixel_stream(image_bytes)?;

    let mut payload = Vec::new();
    extract_payload(&stream, &mut payload, options)?;

    Ok(payload)
}
