//! Length-prefixed bit framing of a message payload.
//!
//! A frame is a 32 bit big-endian length header followed by the payload
//! bytes, both emitted MSB-first. The header counts payload *bits*, not
//! bytes. The frame must fit the carrier capacity including the header,
//! checked before a single pixel is touched.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader};
use byteorder::{BigEndian as BE, WriteBytesExt};

use crate::error::StegError;
use crate::result::Result;

/// Bit width of the length header.
pub const LENGTH_BITS: u64 = 32;

/// A framed payload, ready to be mapped onto carrier positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
    bit_len: u64,
}

impl Frame {
    /// Builds the frame for `payload`, enforcing `capacity_bits` up front.
    pub fn for_payload(payload: &[u8], capacity_bits: u64) -> Result<Self> {
        let payload_bits = payload.len() as u64 * 8;
        let required = LENGTH_BITS + payload_bits;
        if required > capacity_bits {
            return Err(StegError::CapacityExceeded {
                required,
                available: capacity_bits,
            });
        }

        let mut bytes = Vec::with_capacity(4 + payload.len());
        bytes.write_u32::<BE>(payload_bits as u32)?;
        bytes.extend_from_slice(payload);

        Ok(Self {
            bytes,
            bit_len: required,
        })
    }

    /// Total number of bits in the frame, header included.
    pub fn bit_len(&self) -> u64 {
        self.bit_len
    }

    /// Iterates the frame bits MSB-first, header first.
    pub fn bits(&self) -> FrameBits<'_> {
        FrameBits {
            reader: BitReader::endian(Cursor::new(self.bytes.as_slice()), BigEndian),
            remaining: self.bit_len,
        }
    }
}

/// MSB-first bit iterator over a [`Frame`].
pub struct FrameBits<'f> {
    reader: BitReader<Cursor<&'f [u8]>, BigEndian>,
    remaining: u64,
}

impl Iterator for FrameBits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.reader.read_bit().ok()
    }
}

/// Folds the first 32 bits of `bits` MSB-first into the declared payload
/// bit count.
pub fn parse_length<I: Iterator<Item = bool>>(bits: I) -> u32 {
    bits.take(LENGTH_BITS as usize)
        .fold(0u32, |acc, bit| (acc << 1) | u32::from(bit))
}
