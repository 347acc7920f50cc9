// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::pixmap::compute_data_len;

/// A coverage mask.
///
/// During blending, mask's black (0) "pixels" would block rendering
/// and white (255) will allow it.
/// Anything in between is used for gradual masking and anti-aliasing.
///
/// One byte per destination pixel. `stride` is in bytes and can be zero,
/// in which case the first row is reused for every scanline.
#[derive(Clone, Copy, PartialEq)]
pub struct MaskRef<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride: u32,
}

impl<'a> MaskRef<'a> {
    /// Creates a new `MaskRef` from bytes.
    ///
    /// The data must hold at least `(height - 1) * stride + width` bytes.
    /// `stride` must be either zero or >= `width`.
    pub fn from_bytes(data: &'a [u8], width: u32, height: u32, stride: u32) -> Option<Self> {
        if stride != 0 && stride < width {
            return None;
        }

        let data_len = compute_data_len(width, height, stride, 1)?;
        if data.len() < data_len {
            return None;
        }

        Some(MaskRef {
            data,
            width,
            height,
            stride,
        })
    }

    /// Creates a new `MaskRef` where rows are not padded.
    pub fn from_slice(data: &'a [u8], width: u32, height: u32) -> Option<Self> {
        Self::from_bytes(data, width, height, width)
    }

    /// Returns mask's width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns mask's height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns mask's stride in bytes.
    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Returns the internal data.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Checks that the mask covers a `width` x `height` region.
    #[inline]
    pub(crate) fn covers(&self, width: u32, height: u32) -> bool {
        self.width >= width && self.height >= height
    }

    /// Returns `width` values of the row `y`.
    #[inline]
    pub(crate) fn row(&self, y: u32) -> &'a [u8] {
        let start = y as usize * self.stride as usize;
        &self.data[start..start + self.width as usize]
    }
}

impl core::fmt::Debug for MaskRef<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MaskRef")
            .field("data", &"...")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .finish()
    }
}
