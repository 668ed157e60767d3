//! Row-major channel traversal of a carrier image.
//!
//! Both directions of the codec walk the very same order: rows outer, then
//! columns, then the three color channels of each pixel. The alpha channel
//! is never yielded. The k-th yielded slot corresponds to the k-th bit of
//! the logical frame.

use image::buffer::{Pixels, PixelsMut};
use image::{Pixel, Rgba, RgbaImage};
use std::iter::Take;
use std::slice::{Iter, IterMut};

/// Channels of one pixel that take part in the encoding.
const USED_CHANNELS: usize = 3;

/// Read-only iterator over the R, G and B channel values of an image.
pub(crate) struct ChannelIter<'i> {
    pixels: Pixels<'i, Rgba<u8>>,
    channels: Take<Iter<'i, u8>>,
}

impl<'i> ChannelIter<'i> {
    pub fn new(image: &'i RgbaImage) -> Self {
        let mut pixels = image.pixels();
        let channels = match pixels.next() {
            Some(pixel) => pixel.channels().iter().take(USED_CHANNELS),
            None => Iter::default().take(USED_CHANNELS),
        };
        Self { pixels, channels }
    }
}

impl<'i> Iterator for ChannelIter<'i> {
    type Item = &'i u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.channels.next().or_else(|| {
            if let Some(pixel) = self.pixels.next() {
                self.channels = pixel.channels().iter().take(USED_CHANNELS);
            }
            self.channels.next()
        })
    }
}

/// Mutable sibling of [`ChannelIter`], same traversal order.
pub(crate) struct ChannelIterMut<'i> {
    pixels: PixelsMut<'i, Rgba<u8>>,
    channels: Take<IterMut<'i, u8>>,
}

impl<'i> ChannelIterMut<'i> {
    pub fn new(image: &'i mut RgbaImage) -> Self {
        let mut pixels = image.pixels_mut();
        let channels = match pixels.next() {
            Some(pixel) => pixel.channels_mut().iter_mut().take(USED_CHANNELS),
            None => IterMut::default().take(USED_CHANNELS),
        };
        Self { pixels, channels }
    }
}

impl<'i> Iterator for ChannelIterMut<'i> {
    type Item = &'i mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.channels.next().or_else(|| {
            if let Some(pixel) = self.pixels.next() {
                self.channels = pixel.channels_mut().iter_mut().take(USED_CHANNELS);
            }
            self.channels.next()
        })
    }
}
