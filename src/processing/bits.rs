//! Single-bit primitives shared by the header codec, embedder and extractor.

/// Returns `target` with its least significant bit replaced by bit `bit_index` of `source`.
///
/// Bit 0 is the least significant bit of `source`. The upper seven bits of
/// `target` are left as they were. Header fields pass indices in `0..32`,
/// payload bytes in `0..8`.
#[inline]
pub fn inject_bit(source: u64, bit_index: u32, target: u8) -> u8 {
    let bit = ((source >> bit_index) & 1) as u8;
    (target & 0xFE) | bit
}

/// Returns the least significant bit of `byte` (either 0 or 1).
#[inline]
pub fn extract_lsb(byte: u8) -> u8 {
    byte & 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_inject_sets_and_clears_lsb() {
        assert_eq!(inject_bit(0b1, 0, 0b1010_1010), 0b1010_1011);
        assert_eq!(inject_bit(0b0, 0, 0b1010_1011), 0b1010_1010);
        assert_eq!(inject_bit(0b100, 2, 0x00), 0x01);
        assert_eq!(inject_bit(0b100, 1, 0xFF), 0xFE);
    }

    #[test]
    fn test_inject_high_bit_of_marker() {
        let marker = 0x8000_0000u64;
        assert_eq!(inject_bit(marker, 31, 0x10), 0x11);
        assert_eq!(inject_bit(marker, 30, 0x11), 0x10);
    }

    #[test]
    fn test_extract_lsb() {
        assert_eq!(extract_lsb(0xFF), 1);
        assert_eq!(extract_lsb(0xFE), 0);
        assert_eq!(extract_lsb(0x01), 1);
    }

    proptest! {
        #[test]
        fn inject_is_idempotent(value in any::<u64>(), index in 0u32..64, byte in any::<u8>()) {
            let once = inject_bit(value, index, byte);
            prop_assert_eq!(inject_bit(value, index, once), once);
        }

        #[test]
        fn inject_preserves_upper_bits(value in any::<u64>(), index in 0u32..64, byte in any::<u8>()) {
            let injected = inject_bit(value, index, byte);
            prop_assert_eq!(injected & 0xFE, byte & 0xFE);
            prop_assert_eq!(u64::from(extract_lsb(injected)), (value >> index) & 1);
        }
    }
}
