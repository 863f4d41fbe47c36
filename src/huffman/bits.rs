//! MSB-first packing of `'0'`/`'1'` bit-strings into bytes.
//!
//! The final byte is zero-padded in its low-order bits. The padding is not recorded
//! anywhere in the packed buffer, so the caller keeps the original bit length around
//! and hands it back to [`unpack_bits`].

/// Number of bytes [`pack_bits`] produces for a bit-string of `bit_length` bits.
pub const fn packed_len(bit_length: usize) -> usize {
    bit_length.div_ceil(8)
}

/// Packs a bit-string into bytes, eight bits per byte, most significant bit first.
///
/// Every character other than `'1'` is packed as a zero bit.
pub fn pack_bits(bits: &str) -> Vec<u8> {
    let mut packed = Vec::with_capacity(packed_len(bits.len()));
    for chunk in bits.as_bytes().chunks(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            if bit == b'1' {
                byte |= 0x80 >> i;
            }
        }
        packed.push(byte);
    }
    packed
}

/// Unpacks exactly `bit_length` bits from `packed`, most significant bit first.
///
/// A `bit_length` larger than the buffer holds is clamped to `8 * packed.len()`.
pub fn unpack_bits(packed: &[u8], bit_length: usize) -> String {
    let bit_length = bit_length.min(packed.len().saturating_mul(8));
    let mut bits = String::with_capacity(bit_length);
    for i in 0..bit_length {
        let set = packed[i / 8] & (0x80 >> (i % 8)) != 0;
        bits.push(if set { '1' } else { '0' });
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_packs_to_nothing() {
        assert!(pack_bits("").is_empty());
        assert_eq!(unpack_bits(&[], 0), "");
    }

    #[test]
    fn packs_msb_first_and_pads_low_bits() {
        assert_eq!(pack_bits("10111"), vec![0b1011_1000]);
        assert_eq!(pack_bits("1"), vec![0x80]);
        assert_eq!(pack_bits("0000000011111111"), vec![0x00, 0xFF]);
        assert_eq!(pack_bits("101010101"), vec![0b1010_1010, 0b1000_0000]);
    }

    #[test]
    fn unpack_stops_at_the_original_length() {
        assert_eq!(unpack_bits(&[0b1011_1000], 5), "10111");
        assert_eq!(unpack_bits(&[0b1010_1010, 0b1000_0000], 9), "101010101");
    }

    #[test]
    fn unpack_clamps_to_available_bits() {
        assert_eq!(unpack_bits(&[0xF0], 100), "11110000");
        assert_eq!(unpack_bits(&[], 3), "");
    }

    #[test]
    fn shorter_length_truncates() {
        assert_eq!(unpack_bits(&[0xFF, 0xFF], 3), "111");
    }

    #[test]
    fn packed_size_is_ceil_of_bits_over_eight() {
        for len in 0..=33 {
            let bits = "1".repeat(len);
            assert_eq!(pack_bits(&bits).len(), len.div_ceil(8), "bit length {}", len);
            assert_eq!(packed_len(len), len.div_ceil(8));
        }
    }

    #[test]
    fn unpack_inverts_pack() {
        let samples = ["0", "1", "01", "0110100", "01101001", "011010011", "1111111100000000101"];
        for bits in samples {
            assert_eq!(unpack_bits(&pack_bits(bits), bits.len()), bits);
        }
    }
}
