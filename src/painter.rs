// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::{AlphaU8, BlendMode, ColorU8, MaskRef, PixmapRef, ALPHA_U8_OPAQUE};

/// Controls how a solid color should be painted.
///
/// Fills always use normal compositing.
#[derive(Clone, Copy, Debug)]
pub struct FillPaint<'a> {
    /// A fill color.
    ///
    /// Default: black
    pub color: ColorU8,

    /// A uniform opacity.
    ///
    /// Anything >= `OPA_MAX` is treated as fully opaque.
    ///
    /// Default: 255
    pub opacity: AlphaU8,

    /// An optional coverage mask.
    ///
    /// Must cover the whole destination region.
    ///
    /// Default: None
    pub mask: Option<MaskRef<'a>>,
}

impl Default for FillPaint<'_> {
    #[inline]
    fn default() -> Self {
        FillPaint {
            color: ColorU8::BLACK,
            opacity: ALPHA_U8_OPAQUE,
            mask: None,
        }
    }
}

impl<'a> FillPaint<'a> {
    /// Creates an opaque, unmasked paint.
    #[inline]
    pub fn from_color(color: ColorU8) -> Self {
        FillPaint {
            color,
            ..FillPaint::default()
        }
    }

    /// Sets a paint color.
    ///
    /// `self.color = ColorU8::from_rgb(50, 127, 150);` shorthand.
    #[inline]
    pub fn set_color_rgb8(&mut self, r: u8, g: u8, b: u8) {
        self.color = ColorU8::from_rgb(r, g, b);
    }
}


/// Controls how an image should be painted.
#[derive(Clone, Copy, Debug)]
pub struct ImagePaint<'a> {
    /// A source image.
    ///
    /// Must be at least as large as the destination region.
    pub source: PixmapRef<'a>,

    /// A uniform opacity.
    ///
    /// Anything >= `OPA_MAX` is treated as fully opaque.
    ///
    /// Default: 255
    pub opacity: AlphaU8,

    /// An optional coverage mask.
    ///
    /// Default: None
    pub mask: Option<MaskRef<'a>>,

    /// Paint blending mode.
    ///
    /// Default: Normal
    pub blend_mode: BlendMode,
}

impl<'a> ImagePaint<'a> {
    /// Creates an opaque, unmasked paint with the normal blending mode.
    #[inline]
    pub fn new(source: PixmapRef<'a>) -> Self {
        ImagePaint {
            source,
            opacity: ALPHA_U8_OPAQUE,
            mask: None,
            blend_mode: BlendMode::default(),
        }
    }
}
