//! # Header Codec
//!
//! The first 64 bytes of every package stream carry the header, one bit per
//! byte in the byte's LSB:
//!
//! ```text
//! position  0 ..= 31   marker          (bit i of the marker   -> byte i)
//! position 32 ..= 63   payload length  (bit i of the length   -> byte 32 + i)
//! ```
//!
//! Both fields are written least significant bit first. A decoder that does not
//! find the expected marker refuses to go on to the payload.

use log::trace;

use super::bits::{extract_lsb, inject_bit};
use super::error::{StegoError, StegoResult};

/// Marker written by default: `0x6174_6173`.
pub const DEFAULT_MARKER: u32 = 1_635_021_427;

/// Width of the marker field in stream positions.
pub const MARKER_BITS: usize = 32;

/// Width of the payload length field in stream positions.
pub const LENGTH_BITS: usize = 32;

/// Total header width; payload bits start at this stream position.
pub const HEADER_BITS: usize = MARKER_BITS + LENGTH_BITS;

/// Marker and payload length as stored at the head of a package stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub marker: u32,
    pub payload_len: u32,
}

impl Header {
    pub fn new(marker: u32, payload_len: u32) -> Self {
        Self {
            marker,
            payload_len,
        }
    }

    /// Writes the header into the LSBs of `stream[0..64]`.
    ///
    /// # Errors
    /// - [`StegoError::TruncatedHeader`] if the stream holds fewer than 64 bytes;
    ///   the stream is left untouched
    pub fn write(&self, stream: &mut [u8]) -> StegoResult<()> {
        if stream.len() < HEADER_BITS {
            return Err(StegoError::TruncatedHeader { len: stream.len() });
        }

        for (position, byte) in stream[..HEADER_BITS].iter_mut().enumerate() {
            *byte = if position < MARKER_BITS {
                inject_bit(u64::from(self.marker), position as u32, *byte)
            } else {
                inject_bit(u64::from(self.payload_len), (position - MARKER_BITS) as u32, *byte)
            };
        }

        trace!(
            "Header written: marker={:#010x}, payload_len={}",
            self.marker,
            self.payload_len
        );

        Ok(())
    }

    /// Reassembles the header from the LSBs of `stream[0..64]` without checking the marker.
    ///
    /// # Errors
    /// - [`StegoError::TruncatedHeader`] if the stream holds fewer than 64 bytes
    pub fn read(stream: &[u8]) -> StegoResult<Self> {
        if stream.len() < HEADER_BITS {
            return Err(StegoError::TruncatedHeader { len: stream.len() });
        }

        let marker = read_field(&stream[..MARKER_BITS]);
        let payload_len = read_field(&stream[MARKER_BITS..HEADER_BITS]);

        Ok(Self::new(marker, payload_len))
    }

    /// Reads the header and checks its marker, returning the declared payload length.
    ///
    /// # Errors
    /// - [`StegoError::TruncatedHeader`] if the stream holds fewer than 64 bytes
    /// - [`StegoError::NotSteganographicFile`] if the marker is not `expected_marker`
    pub fn validate(stream: &[u8], expected_marker: u32) -> StegoResult<u32> {
        let header = Self::read(stream)?;

        if header.marker != expected_marker {
            return Err(StegoError::NotSteganographicFile {
                found: header.marker,
            });
        }

        Ok(header.payload_len)
    }
}

/// Bit `i` of the result is the LSB of `bytes[i]`.
fn read_field(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .enumerate()
        .fold(0u32, |acc, (i, &byte)| acc | (u32::from(extract_lsb(byte)) << i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let mut stream = vec![0xAAu8; 80];
        Header::new(DEFAULT_MARKER, 1234).write(&mut stream).unwrap();

        let header = Header::read(&stream).unwrap();
        assert_eq!(header.marker, DEFAULT_MARKER);
        assert_eq!(header.payload_len, 1234);
    }

    #[test]
    fn test_layout_is_lsb_first() {
        let mut stream = vec![0u8; 64];
        Header::new(0b101, 0b1).write(&mut stream).unwrap();

        assert_eq!(&stream[0..4], &[1, 0, 1, 0]);
        assert!(stream[4..32].iter().all(|&b| b == 0));
        assert_eq!(stream[32], 1);
        assert!(stream[33..64].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_write_leaves_upper_bits_and_tail_alone() {
        let mut stream: Vec<u8> = (0..100u8).map(|i| i.wrapping_mul(37)).collect();
        let original = stream.clone();
        Header::new(u32::MAX, 0).write(&mut stream).unwrap();

        for (before, after) in original.iter().zip(&stream).take(HEADER_BITS) {
            assert_eq!(before & 0xFE, after & 0xFE);
        }
        assert_eq!(&original[HEADER_BITS..], &stream[HEADER_BITS..]);
    }

    #[test]
    fn test_validate_rejects_wrong_marker() {
        let mut stream = vec![0u8; 64];
        Header::new(0xDEAD_BEEF, 10).write(&mut stream).unwrap();

        match Header::validate(&stream, DEFAULT_MARKER) {
            Err(StegoError::NotSteganographicFile { found }) => assert_eq!(found, 0xDEAD_BEEF),
            other => panic!("expected NotSteganographicFile, got {:?}", other),
        }
        assert_eq!(Header::validate(&stream, 0xDEAD_BEEF).unwrap(), 10);
    }

    #[test]
    fn test_blank_stream_is_not_a_package() {
        let stream = vec![0u8; 128];
        assert!(matches!(
            Header::validate(&stream, DEFAULT_MARKER),
            Err(StegoError::NotSteganographicFile { found: 0 })
        ));
    }

    #[test]
    fn test_short_stream() {
        assert!(matches!(
            Header::read(&[0u8; 63]),
            Err(StegoError::TruncatedHeader { len: 63 })
        ));
    }

    #[test]
    fn test_write_into_short_stream() {
        let mut stream = vec![0x11u8; 40];
        assert!(matches!(
            Header::new(DEFAULT_MARKER, 1).write(&mut stream),
            Err(StegoError::TruncatedHeader { len: 40 })
        ));
        assert!(stream.iter().all(|&b| b == 0x11));
    }
}
