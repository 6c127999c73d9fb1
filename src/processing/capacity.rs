//! # Carrier Capacity
//!
//! Each carrier byte holds one payload bit, so a `width x height` image with
//! `channels` samples per pixel offers `width * height * channels` bits. The
//! first [`HEADER_BITS`] of those are reserved for the marker and length.

use super::error::{StegoError, StegoResult};
use super::header::HEADER_BITS;

/// Total number of bits the carrier can hold, header included.
pub fn capacity_bits(width: u32, height: u32, channels: u8) -> u64 {
    u64::from(width)
        .saturating_mul(u64::from(height))
        .saturating_mul(u64::from(channels))
}

/// Largest payload (in bytes) that fits in the carrier after the header.
///
/// Saturates at zero for carriers smaller than the header and at `u32::MAX`
/// because the length field is 32 bits wide.
pub fn max_payload_len(width: u32, height: u32, channels: u8) -> u64 {
    let usable = capacity_bits(width, height, channels).saturating_sub(HEADER_BITS as u64) / 8;
    usable.min(u64::from(u32::MAX))
}

/// Checks that a payload of `payload_len` bytes plus the header fits in the carrier.
///
/// Must be called before the carrier is modified so that a rejected encode
/// leaves the stream untouched.
///
/// # Errors
/// - [`StegoError::CapacityExceeded`] when `width * height * channels < payload_len * 8 + 64`,
///   or when `payload_len` cannot be represented in the 32-bit length field
pub fn check_capacity(width: u32, height: u32, channels: u8, payload_len: u64) -> StegoResult<()> {
    let available_bits = capacity_bits(width, height, channels);
    let required_bits = payload_len
        .saturating_mul(8)
        .saturating_add(HEADER_BITS as u64);

    if payload_len > u64::from(u32::MAX) || available_bits < required_bits {
        return Err(StegoError::CapacityExceeded {
            required_bits,
            available_bits,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_boundary() {
        // 80 x 80 x 3 = 19200 bits -> (19200 - 64) / 8 = 2392 payload bytes
        assert_eq!(max_payload_len(80, 80, 3), 2392);
        assert!(check_capacity(80, 80, 3, 2392).is_ok());

        match check_capacity(80, 80, 3, 2393) {
            Err(StegoError::CapacityExceeded {
                required_bits,
                available_bits,
            }) => {
                assert_eq!(required_bits, 2393 * 8 + 64);
                assert_eq!(available_bits, 19200);
            }
            other => panic!("expected CapacityExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_capacity_is_bits_not_bytes() {
        // 2400 carrier bytes give 2400 bits, i.e. (2400 - 64) / 8 = 292 payload bytes
        assert!(check_capacity(20, 20, 6, 292).is_ok());
        assert!(check_capacity(20, 20, 6, 293).is_err());
    }

    #[test]
    fn test_header_only_carrier() {
        assert_eq!(max_payload_len(8, 8, 1), 0);
        assert!(check_capacity(8, 8, 1, 0).is_ok());
        assert!(check_capacity(8, 8, 1, 1).is_err());
    }

    #[test]
    fn test_tiny_carrier_saturates() {
        assert_eq!(max_payload_len(1, 1, 3), 0);
        assert!(check_capacity(1, 1, 3, 0).is_err());
    }

    #[test]
    fn test_length_field_limit() {
        let huge = u64::from(u32::MAX) + 1;
        assert!(check_capacity(u32::MAX, 16, 4, huge).is_err());
        assert_eq!(max_payload_len(u32::MAX, 16, 4), u64::from(u32::MAX));
    }
}
