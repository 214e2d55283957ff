//! Endianness utility functions

/// Convert a u64 from little-endian byte order to native byte order
///
/// Reads the first eight bytes of `bytes`; the slice must be at least that
/// long.
#[inline(always)]
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Convert a u64 from native byte order to little-endian bytes
#[inline(always)]
pub fn u64_to_le_bytes(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u64_le_round_trip() {
        for v in [0u64, 1, 0x0102_0304_0506_0708, u64::MAX] {
            assert_eq!(u64_from_le_bytes(&u64_to_le_bytes(v)), v);
        }
    }

    #[test]
    fn u64_le_byte_order() {
        let bytes = [0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80];
        assert_eq!(u64_from_le_bytes(&bytes), (1 << 63) | 1);
        // Reads exactly eight bytes even from a longer slice.
        let longer = [0xFF, 0, 0, 0, 0, 0, 0, 0, 0xAA, 0xBB];
        assert_eq!(u64_from_le_bytes(&longer), 0xFF);
    }
}
