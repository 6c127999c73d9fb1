//! # Payload Embedder
//!
//! Spreads payload bytes over the carrier, one bit per carrier byte, starting
//! right after the header. Each payload byte occupies eight consecutive stream
//! positions, least significant bit first. The cursor is linear over the whole
//! stream, so a byte group may straddle two image rows.

use log::trace;

use super::bits::inject_bit;
use super::error::{StegoError, StegoResult};
use super::header::HEADER_BITS;

/// Writes payload bits into a mutably borrowed pixel stream.
///
/// Carrier bytes after the last payload group are never touched.
///
/// # Example
/// ```
/// use pixel_stash::processing::embed::PayloadEmbedder;
///
/// let mut stream = vec![0u8; 72];
/// let written = PayloadEmbedder::new(&mut stream).embed(&[0b1011_0001])?;
///
/// assert_eq!(written, 1);
/// assert_eq!(&stream[64..], &[1, 0, 0, 0, 1, 1, 0, 1]);
/// # Ok::<(), pixel_stash::processing::StegoError>(())
/// ```
#[derive(Debug)]
pub struct PayloadEmbedder<'a> {
    stream: &'a mut [u8],
    position: usize,
}

impl<'a> PayloadEmbedder<'a> {
    /// Creates an embedder whose cursor sits on the first position after the header.
    pub fn new(stream: &'a mut [u8]) -> Self {
        Self {
            stream,
            position: HEADER_BITS,
        }
    }

    /// Current stream position of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Embeds every byte of `payload` and returns how many bytes were written.
    ///
    /// # Errors
    /// - [`StegoError::StreamExhausted`] if the stream ends before the payload does.
    ///   Capacity is validated up front, so this indicates a broken invariant.
    pub fn embed(&mut self, payload: &[u8]) -> StegoResult<usize> {
        for &payload_byte in payload {
            let end = self.position + 8;
            let Some(group) = self.stream.get_mut(self.position..end) else {
                return Err(StegoError::StreamExhausted {
                    position: self.position,
                });
            };

            for (bit_index, carrier_byte) in group.iter_mut().enumerate() {
                *carrier_byte =
                    inject_bit(u64::from(payload_byte), bit_index as u32, *carrier_byte);
            }

            self.position = end;
        }

        trace!(
            "Embedded {} payload bytes, cursor at position {}",
            payload.len(),
            self.position
        );

        Ok(payload.len())
    }
}
