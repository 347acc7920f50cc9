// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::color::{ColorFormat, ColorU16, ColorU8};

/// A container that references pixels of any supported format.
///
/// Can be created from `PixmapMut` or from a user provided data.
///
/// Unlike an owned image, rows can be padded: `stride` is the distance
/// between the starts of two consecutive rows, in pixels.
#[derive(Clone, Copy, PartialEq)]
pub struct PixmapRef<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride: u32,
    format: ColorFormat,
}

impl<'a> PixmapRef<'a> {
    /// Creates a new `PixmapRef` from bytes.
    ///
    /// The data must hold at least `(height - 1) * stride + width` pixels
    /// and `stride` must be >= `width`.
    ///
    /// Zero width or height is allowed and describes an empty region.
    ///
    /// `Rgb565A8` is rejected, since its alpha plane cannot be described
    /// by a single stride.
    pub fn from_bytes(
        data: &'a [u8],
        width: u32,
        height: u32,
        stride: u32,
        format: ColorFormat,
    ) -> Option<Self> {
        if format == ColorFormat::Rgb565A8 || stride < width {
            return None;
        }

        let data_len = compute_data_len(width, height, stride, format.bytes_per_pixel())?;
        if data.len() < data_len {
            return None;
        }

        Some(PixmapRef {
            data,
            width,
            height,
            stride,
            format,
        })
    }

    /// Returns pixmap's width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns pixmap's height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns pixmap's stride in pixels.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Returns pixmap's color format.
    #[inline]
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Returns the internal data.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns a pixel color.
    ///
    /// Alpha and padding bytes are ignored.
    ///
    /// Returns `None` when position is out of bounds or the format has no color channels.
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorU8> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let bpp = self.format.bytes_per_pixel();
        let offset = y as usize * self.row_bytes() + x as usize * bpp;
        let px = self.data.get(offset..offset + bpp)?;
        match self.format {
            ColorFormat::Rgb565 => {
                Some(ColorU16::from_ne_bytes(arrayref::array_ref![px, 0, 2]).to_color_u8())
            }
            ColorFormat::Rgb888 | ColorFormat::Xrgb8888 | ColorFormat::Argb8888 => {
                Some(ColorU8::from_bgr(*arrayref::array_ref![px, 0, 3]))
            }
            _ => None,
        }
    }

    /// Returns the number of bytes between two rows.
    #[inline]
    pub(crate) fn row_bytes(&self) -> usize {
        self.stride as usize * self.format.bytes_per_pixel()
    }

    /// Returns `width` pixels of the row `y`.
    #[inline]
    pub(crate) fn row(&self, y: u32) -> &'a [u8] {
        let start = y as usize * self.row_bytes();
        let len = self.width as usize * self.format.bytes_per_pixel();
        &self.data[start..start + len]
    }
}

impl core::fmt::Debug for PixmapRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixmapRef")
            .field("data", &"...")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("format", &self.format)
            .finish()
    }
}


/// A container that references a mutable framebuffer region.
///
/// Only `Rgb888` and `Xrgb8888` are valid destination formats.
/// The padding byte of `Xrgb8888` pixels is preserved by every blend
/// except an opaque unmasked fill, which sets it to 255.
#[derive(PartialEq)]
pub struct PixmapMut<'a> {
    data: &'a mut [u8],
    width: u32,
    height: u32,
    stride: u32,
    format: ColorFormat,
}

impl<'a> PixmapMut<'a> {
    /// Creates a new `PixmapMut` from bytes.
    ///
    /// The data must hold at least `(height - 1) * stride + width` pixels
    /// and `stride` must be >= `width`.
    ///
    /// Returns `None` for a format that cannot be a blend destination.
    pub fn from_bytes(
        data: &'a mut [u8],
        width: u32,
        height: u32,
        stride: u32,
        format: ColorFormat,
    ) -> Option<Self> {
        if !format.is_destination() || stride < width {
            return None;
        }

        let data_len = compute_data_len(width, height, stride, format.bytes_per_pixel())?;
        if data.len() < data_len {
            return None;
        }

        Some(PixmapMut {
            data,
            width,
            height,
            stride,
            format,
        })
    }

    /// Returns a container that references the same data.
    pub fn as_ref(&self) -> PixmapRef {
        PixmapRef {
            data: &*self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
            format: self.format,
        }
    }

    /// Returns pixmap's width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns pixmap's height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns pixmap's stride in pixels.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Returns pixmap's color format.
    #[inline]
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Returns the number of bytes a single pixel occupies.
    #[inline]
    pub fn bytes_per_pixel(&self) -> usize {
        self.format.bytes_per_pixel()
    }

    /// Returns the mutable internal data.
    pub fn data_mut(&mut self) -> &mut [u8] {
        self.data
    }

    /// Returns a pixel color.
    ///
    /// Returns `None` when position is out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorU8> {
        self.as_ref().pixel(x, y)
    }

    #[inline]
    pub(crate) fn row_bytes(&self) -> usize {
        self.stride as usize * self.bytes_per_pixel()
    }

    /// Returns `width` pixels of the row `y`.
    #[inline]
    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = y as usize * self.row_bytes();
        let len = self.width as usize * self.bytes_per_pixel();
        &mut self.data[start..start + len]
    }

    /// Copies the first row into every other row.
    pub(crate) fn replicate_first_row(&mut self) {
        let len = self.width as usize * self.bytes_per_pixel();
        let row_bytes = self.row_bytes();
        for y in 1..self.height as usize {
            self.data.copy_within(0..len, y * row_bytes);
        }
    }
}

impl core::fmt::Debug for PixmapMut<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PixmapMut")
            .field("data", &"...")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("format", &self.format)
            .finish()
    }
}


/// Returns storage size required by a pixel array.
///
/// The last row doesn't have to be padded to the full stride.
pub(crate) fn compute_data_len(width: u32, height: u32, stride: u32, bpp: usize) -> Option<usize> {
    if width == 0 || height == 0 {
        return Some(0);
    }

    let row_bytes = (stride as usize).checked_mul(bpp)?;
    let h = (height as usize - 1).checked_mul(row_bytes)?;
    let w = (width as usize).checked_mul(bpp)?;
    h.checked_add(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_len() {
        assert_eq!(compute_data_len(10, 1, 10, 3), Some(30));
        assert_eq!(compute_data_len(10, 2, 16, 3), Some(78));
        assert_eq!(compute_data_len(0, 5, 16, 4), Some(0));
        assert_eq!(compute_data_len(5, 0, 16, 4), Some(0));
        assert_eq!(compute_data_len(4, 3, 0, 1), Some(4));
    }

    #[test]
    fn row_access() {
        let data: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let pixmap = PixmapRef::from_bytes(&data, 1, 2, 2, ColorFormat::Rgb888).unwrap();
        assert_eq!(pixmap.row(0), &[1, 2, 3]);
        assert_eq!(pixmap.row(1), &[7, 8, 9]);
    }

    #[test]
    fn last_row_without_padding() {
        let mut data = [0u8; 2 * 4 + 1 * 4];
        let mut pixmap = PixmapMut::from_bytes(&mut data, 1, 2, 2, ColorFormat::Xrgb8888).unwrap();
        assert_eq!(pixmap.row_mut(1).len(), 4);
    }

    #[test]
    fn replicate_rows() {
        let mut data = [0u8; 2 * 9 + 6];
        {
            let mut pixmap = PixmapMut::from_bytes(&mut data, 2, 3, 3, ColorFormat::Rgb888).unwrap();
            pixmap.row_mut(0).copy_from_slice(&[1, 2, 3, 4, 5, 6]);
            pixmap.replicate_first_row();
        }

        assert_eq!(&data[9..15], &[1, 2, 3, 4, 5, 6]);
        assert_eq!(&data[18..24], &[1, 2, 3, 4, 5, 6]);
        assert_eq!(&data[6..9], &[0, 0, 0]);
    }
}
