//! # Payload Extractor
//!
//! Mirror image of the embedder: walks the stream from the first position
//! after the header, collects one LSB per byte and emits a payload byte every
//! eight positions until the declared length has been produced.

use std::io::{BufWriter, Write};

use log::{trace, warn};

use super::bits::extract_lsb;
use super::error::{StegoError, StegoResult};
use super::header::HEADER_BITS;

/// Reads payload bits out of an immutably borrowed pixel stream.
#[derive(Debug)]
pub struct PayloadExtractor<'a> {
    stream: &'a [u8],
    position: usize,
}

impl<'a> PayloadExtractor<'a> {
    pub fn new(stream: &'a [u8]) -> Self {
        Self {
            stream,
            position: HEADER_BITS,
        }
    }

    /// Writes `declared_len` recovered bytes into `sink` and returns how many were written.
    ///
    /// Bytes are pushed to the sink as they complete. Extraction stops as soon as
    /// the declared length is reached; a zero length writes nothing.
    ///
    /// # Errors
    /// - [`StegoError::TruncatedPayload`] if the stream runs out first. The sink
    ///   then holds a partial payload, which the caller should discard.
    /// - [`StegoError::Io`] if the sink rejects a write
    pub fn extract<W: Write>(&mut self, declared_len: u32, sink: W) -> StegoResult<u64> {
        let mut output = BufWriter::new(sink);
        let declared = u64::from(declared_len);

        let mut accumulator = 0u8;
        let mut bit_count = 0u8;
        let mut emitted = 0u64;

        while emitted < declared {
            let Some(&package_byte) = self.stream.get(self.position) else {
                // a failed flush here must not replace the truncation error
                if let Err(e) = output.flush() {
                    warn!("Could not flush partial payload: {}", e);
                }
                return Err(StegoError::TruncatedPayload {
                    declared: declared_len,
                    recovered: emitted,
                });
            };

            accumulator |= extract_lsb(package_byte) << bit_count;
            bit_count += 1;
            self.position += 1;

            if bit_count == 8 {
                output.write_all(&[accumulator])?;
                emitted += 1;
                accumulator = 0;
                bit_count = 0;
            }
        }

        output.flush()?;
        trace!("Extracted {} payload bytes, cursor at position {}", emitted, self.position);

        Ok(emitted)
    }
}
