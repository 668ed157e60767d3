//! Maps a framed bitstream onto the channel slots of a carrier image.
//!
//! Embedding and extraction share the traversal of
//! [`media::iterators`](crate::media), so the k-th frame bit always lands on
//! and is read back from the same `(row, col, channel)` slot.

use bitstream_io::{BigEndian, BitWrite, BitWriter};
use image::RgbaImage;
use log::debug;

use crate::error::StegError;
use crate::frame::{self, Frame, LENGTH_BITS};
use crate::media::iterators::{ChannelIter, ChannelIterMut};
use crate::parity;
use crate::result::Result;

/// Parity LSB codec over a carrier image.
pub struct LsbCodec;

impl LsbCodec {
    /// Number of bit-carrying channel slots the image offers.
    pub fn capacity_bits(image: &RgbaImage) -> u64 {
        image.width() as u64 * image.height() as u64 * 3
    }

    /// Embeds `payload` into `image`.
    ///
    /// The frame is checked against the capacity before any channel value
    /// is mutated; on [`StegError::CapacityExceeded`] the image is
    /// guaranteed untouched. Slots past the end of the frame are never
    /// written, the alpha channel never takes part.
    pub fn embed(image: &mut RgbaImage, payload: &[u8]) -> Result<()> {
        let frame = Frame::for_payload(payload, Self::capacity_bits(image))?;
        debug!(
            "embedding a frame of {} bits into a {}x{} carrier",
            frame.bit_len(),
            image.width(),
            image.height()
        );

        for (value, bit) in ChannelIterMut::new(image).zip(frame.bits()) {
            *value = parity::encode_bit(*value, bit);
        }

        Ok(())
    }

    /// Extracts the framed payload bytes from `image`.
    ///
    /// Reads the 32 bit length header first, then exactly the declared
    /// number of payload bits. A trailing group of fewer than 8 payload
    /// bits is dropped during byte reassembly; the encoder only ever
    /// produces whole bytes, so such a group cannot stem from [`embed`].
    ///
    /// [`embed`]: LsbCodec::embed
    pub fn extract(image: &RgbaImage) -> Result<Vec<u8>> {
        let available = Self::capacity_bits(image);
        if available < LENGTH_BITS {
            return Err(StegError::TruncatedImage {
                needed: LENGTH_BITS,
                available,
            });
        }

        let mut slots = ChannelIter::new(image);
        let declared = frame::parse_length(
            slots
                .by_ref()
                .take(LENGTH_BITS as usize)
                .map(|value| parity::decode_bit(*value)),
        );

        let needed = LENGTH_BITS + declared as u64;
        if needed > available {
            return Err(StegError::TruncatedImage { needed, available });
        }
        debug!("extracting {declared} payload bits from the carrier");

        let mut writer = BitWriter::endian(Vec::new(), BigEndian);
        for value in slots.take(declared as usize) {
            writer.write_bit(parity::decode_bit(*value))?;
        }
        if !writer.byte_aligned() {
            writer.byte_align()?;
        }

        let mut bytes = writer.into_writer();
        bytes.truncate(declared as usize / 8);

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{prepare_image, slot_coordinates};
    use image::Rgba;

    #[test]
    fn should_round_trip_a_payload() {
        let mut img = prepare_image(16, 16);
        let payload = "Hello World!".as_bytes();

        LsbCodec::embed(&mut img, payload).expect("embedding failed");
        let extracted = LsbCodec::extract(&img).expect("extraction failed");

        assert_eq!(extracted.as_slice(), payload);
    }

    #[test]
    fn should_round_trip_an_empty_payload() {
        let mut img = prepare_image(8, 8);
        LsbCodec::embed(&mut img, b"").expect("embedding failed");
        let extracted = LsbCodec::extract(&img).expect("extraction failed");
        assert!(extracted.is_empty());
    }

    #[test]
    fn should_succeed_on_an_exactly_filled_carrier() {
        // 8x5 pixels offer 120 slots, the frame needs 32 + 11 * 8 = 120
        let mut img = prepare_image(8, 5);
        let payload = [0x5A; 11];
        LsbCodec::embed(&mut img, &payload).expect("exact fit must succeed");
        assert_eq!(LsbCodec::extract(&img).unwrap(), payload);
    }

    #[test]
    fn should_fail_with_capacity_exceeded_one_byte_past_the_limit() {
        let mut img = prepare_image(8, 5);
        let payload = [0x5A; 12];
        match LsbCodec::embed(&mut img, &payload) {
            Err(StegError::CapacityExceeded {
                required: 128,
                available: 120,
            }) => (),
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
    }

    #[test]
    fn should_not_touch_any_pixel_when_capacity_is_exceeded() {
        // a 2x2 grid offers 12 slots, not even enough for the header
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255]));
        let before = img.clone();

        let result = LsbCodec::embed(&mut img, &[0b1000_0000]);
        assert!(matches!(
            result,
            Err(StegError::CapacityExceeded {
                required: 40,
                available: 12
            })
        ));
        assert_eq!(img, before, "no partial writes on capacity failure");
    }

    #[test]
    fn should_fail_extraction_on_a_grid_smaller_than_the_header() {
        // 3x3 pixels offer 27 slots, fewer than the 32 header bits
        let img = prepare_image(3, 3);
        match LsbCodec::extract(&img) {
            Err(StegError::TruncatedImage {
                needed: 32,
                available: 27,
            }) => (),
            other => panic!("expected TruncatedImage, got {other:?}"),
        }
    }

    #[test]
    fn should_fail_extraction_when_the_declared_length_overruns_the_grid() {
        // every slot decodes to a one, so the header reads as u32::MAX
        let img = RgbaImage::from_pixel(4, 3, Rgba([1, 1, 1, 255]));
        match LsbCodec::extract(&img) {
            Err(StegError::TruncatedImage {
                needed,
                available: 36,
            }) => assert_eq!(needed, 32 + u32::MAX as u64),
            other => panic!("expected TruncatedImage, got {other:?}"),
        }
    }

    #[test]
    fn should_traverse_row_major_then_column_then_channel() {
        // all channels zero carry even parity, so after embedding each
        // written slot literally equals its frame bit
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let payload = [0b1011_0010];
        LsbCodec::embed(&mut img, &payload).expect("embedding failed");

        let mut expected_bits = vec![false; 32];
        expected_bits[28] = true; // header: 8 payload bits
        for bit in [true, false, true, true, false, false, true, false] {
            expected_bits.push(bit);
        }

        for (k, bit) in expected_bits.iter().enumerate() {
            let (x, y, c) = slot_coordinates(k as u32, img.width());
            let value = img.get_pixel(x, y).0[c as usize];
            assert_eq!(
                value,
                u8::from(*bit),
                "slot {k} maps to (row {y}, col {x}, channel {c})"
            );
        }

        // spot-check the first payload bit lands right after the header
        let (x, y, c) = slot_coordinates(32, img.width());
        assert_eq!((x, y, c), (2, 2, 2));
        assert_eq!(img.get_pixel(x, y).0[2], 1);
    }

    #[test]
    fn should_leave_alpha_and_slots_past_the_frame_untouched() {
        let mut img = prepare_image(16, 16);
        let before = img.clone();
        let payload = [0xff; 4];
        LsbCodec::embed(&mut img, &payload).expect("embedding failed");

        let frame_slots = 32 + payload.len() as u32 * 8;
        for y in 0..img.height() {
            for x in 0..img.width() {
                let b = before.get_pixel(x, y).0;
                let a = img.get_pixel(x, y).0;
                assert_eq!(a[3], b[3], "alpha changed at ({x}, {y})");
                for c in 0..3u32 {
                    let k = (y * img.width() + x) * 3 + c;
                    if k >= frame_slots {
                        assert_eq!(
                            a[c as usize], b[c as usize],
                            "slot {k} past the frame changed at ({x}, {y})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn should_drop_a_trailing_partial_byte_group() {
        // handcraft a frame declaring 9 payload bits: one full byte plus one
        let mut img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 255]));
        let mut bits = vec![false; 32];
        bits[28] = true; // 0b1001 = 9
        bits[31] = true;
        bits.extend([true, true, true, true, false, false, false, false]); // 0xF0
        bits.push(true); // the odd ninth bit

        for (value, bit) in ChannelIterMut::new(&mut img).zip(bits.into_iter()) {
            *value = parity::encode_bit(*value, bit);
        }

        let extracted = LsbCodec::extract(&img).expect("extraction failed");
        assert_eq!(extracted, vec![0xF0], "the ninth bit must be discarded");
    }

    #[test]
    fn should_report_capacity_in_bits() {
        let img = prepare_image(5, 4);
        assert_eq!(LsbCodec::capacity_bits(&img), 60);
        assert_eq!(LsbCodec::capacity_bits(&RgbaImage::new(0, 0)), 0);
    }
}
