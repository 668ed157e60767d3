//! Parity-keyed single-bit codec over one color channel value.
//!
//! The hidden bit is not the literal LSB: the parity of the upper seven bits
//! decides how the LSB is to be read. Encoding therefore flips at most the
//! LSB and never touches the upper bits, so the round-trip invariant holds
//! for every channel value.

/// Number of set bits among the upper seven bits of `value`.
#[inline]
pub fn count_ones_upper7(value: u8) -> u32 {
    (value & 0b1111_1110).count_ones()
}

/// Encodes `bit` into `value`, adjusting only the least significant bit.
///
/// ## Example
/// ```rust
/// use pixelveil_core::parity::{decode_bit, encode_bit};
///
/// let carrier = 0b1010_1100u8;
/// assert!(decode_bit(encode_bit(carrier, true)));
/// assert!(!decode_bit(encode_bit(carrier, false)));
/// ```
#[inline]
pub fn encode_bit(value: u8, bit: bool) -> u8 {
    let even = count_ones_upper7(value) % 2 == 0;
    let desired_lsb = if even { bit } else { !bit };
    if (value & 1 == 1) == desired_lsb {
        value
    } else {
        value ^ 1
    }
}

/// Decodes the bit carried by `value` under the parity rule.
#[inline]
pub fn decode_bit(value: u8) -> bool {
    let even = count_ones_upper7(value) % 2 == 0;
    let lsb = value & 1 == 1;
    if even {
        lsb
    } else {
        !lsb
    }
}
