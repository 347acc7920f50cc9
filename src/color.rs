// Copyright 2006 The Android Open Source Project
// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// 8-bit type for an alpha value. 255 is 100% opaque, zero is 100% transparent.
pub type AlphaU8 = u8;

/// Represents fully transparent AlphaU8 value.
pub const ALPHA_U8_TRANSPARENT: AlphaU8 = 0x00;

/// Represents fully opaque AlphaU8 value.
pub const ALPHA_U8_OPAQUE: AlphaU8 = 0xFF;

/// Opacity at and above which a weight is treated as fully opaque.
///
/// Mixing with such a weight copies the source instead of blending it,
/// so repeated opaque draws do not drift.
pub const OPA_MAX: AlphaU8 = 253;

/// A 24-bit RGB color value.
///
/// Byteorder: BGR0
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ColorU8(u32);

impl ColorU8 {
    /// Black color.
    pub const BLACK: ColorU8 = ColorU8::from_rgb(0, 0, 0);

    /// White color.
    pub const WHITE: ColorU8 = ColorU8::from_rgb(255, 255, 255);

    /// Creates a new color.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorU8(pack_rgb(r, g, b))
    }

    /// Creates a new color from its framebuffer byte representation.
    ///
    /// `bytes` must be in the destination byte order: blue, green, red.
    #[inline]
    pub const fn from_bgr(bytes: [u8; 3]) -> Self {
        ColorU8::from_rgb(bytes[2], bytes[1], bytes[0])
    }

    /// Returns color's red component.
    #[inline]
    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Returns color's green component.
    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Returns color's blue component.
    #[inline]
    pub const fn blue(self) -> u8 {
        ((self.0 >> 0) & 0xFF) as u8
    }

    /// Returns the value as a primitive type.
    ///
    /// Layout: `0x00RRGGBB`
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns color channels in the framebuffer byte order.
    #[inline]
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.blue(), self.green(), self.red()]
    }

    /// Returns a 32-bit framebuffer pixel with an opaque padding byte.
    #[inline]
    pub const fn to_bgrx(self) -> [u8; 4] {
        [self.blue(), self.green(), self.red(), ALPHA_U8_OPAQUE]
    }
}

impl core::fmt::Debug for ColorU8 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ColorU8")
            .field("r", &self.red())
            .field("g", &self.green())
            .field("b", &self.blue())
            .finish()
    }
}


/// A 16-bit RGB565 color value.
///
/// Bits: `RRRRRGGG GGGBBBBB`
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
pub struct ColorU16(u16);

impl ColorU16 {
    /// Creates a color from a packed RGB565 value.
    #[inline]
    pub const fn from_bits(bits: u16) -> Self {
        ColorU16(bits)
    }

    /// Creates a color from 5-bit red, 6-bit green and 5-bit blue channels.
    ///
    /// Extra high bits are discarded.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = (r as u16) & 0x1F;
        let g = (g as u16) & 0x3F;
        let b = (b as u16) & 0x1F;
        ColorU16((r << 11) | (g << 5) | b)
    }

    /// Reads a native-endian pixel.
    #[inline]
    pub(crate) fn from_ne_bytes(bytes: &[u8; 2]) -> Self {
        ColorU16(u16::from_ne_bytes(*bytes))
    }

    /// Returns the packed value.
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Returns the 5-bit red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Returns the 6-bit green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Returns the 5-bit blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Expands the color to 8 bits per channel.
    #[inline]
    pub const fn to_color_u8(self) -> ColorU8 {
        ColorU8::from_rgb(expand_5(self.red()), expand_6(self.green()), expand_5(self.blue()))
    }
}


/// Describes how pixels are laid out in a buffer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ColorFormat {
    /// An 8-bit alpha-only mask.
    A8,
    /// An 8-bit luminance.
    L8,
    /// A 16-bit color with 5/6/5 bit channels.
    Rgb565,
    /// A 16-bit color followed by a separate 8-bit alpha plane.
    Rgb565A8,
    /// A 24-bit color.
    ///
    /// Byteorder: BGR
    Rgb888,
    /// A 32-bit color with an unused padding byte.
    ///
    /// Byteorder: BGRX
    Xrgb8888,
    /// A 32-bit color with a real alpha channel.
    ///
    /// Byteorder: BGRA
    Argb8888,
}

impl ColorFormat {
    /// Returns the number of bytes a single pixel occupies.
    ///
    /// `Rgb565A8` reports only the color plane, so it cannot be used
    /// for extent checks.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            ColorFormat::A8 | ColorFormat::L8 => 1,
            ColorFormat::Rgb565 | ColorFormat::Rgb565A8 => 2,
            ColorFormat::Rgb888 => 3,
            ColorFormat::Xrgb8888 | ColorFormat::Argb8888 => 4,
        }
    }

    /// Checks that the format can be used as a blend destination.
    #[inline]
    pub const fn is_destination(self) -> bool {
        matches!(self, ColorFormat::Rgb888 | ColorFormat::Xrgb8888)
    }
}


/// Expands a 5-bit channel to 8 bits.
///
/// Approximates `v * 255 / 31` without a division. The multiplier has rounding built in.
#[inline]
pub const fn expand_5(v: u8) -> u8 {
    ((v as u32 * 2106) >> 8) as u8
}

/// Expands a 6-bit channel to 8 bits.
///
/// Approximates `v * 255 / 63` without a division.
#[inline]
pub const fn expand_6(v: u8) -> u8 {
    ((v as u32 * 1037) >> 8) as u8
}

#[inline]
const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | ((b as u32) << 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_u8_channels() {
        let c = ColorU8::from_rgb(10, 20, 30);
        assert_eq!(c.red(), 10);
        assert_eq!(c.green(), 20);
        assert_eq!(c.blue(), 30);
        assert_eq!(c.to_bgr(), [30, 20, 10]);
        assert_eq!(c.to_bgrx(), [30, 20, 10, 255]);
        assert_eq!(ColorU8::from_bgr([30, 20, 10]), c);
    }

    #[test]
    fn expand_5_range() {
        assert_eq!(expand_5(0), 0);
        assert_eq!(expand_5(16), 131);
        assert_eq!(expand_5(31), 255);
    }

    #[test]
    fn expand_6_range() {
        assert_eq!(expand_6(0), 0);
        assert_eq!(expand_6(32), 129);
        assert_eq!(expand_6(63), 255);
    }

    #[test]
    fn expand_5_is_monotonic() {
        for v in 1..32 {
            assert!(expand_5(v) >= expand_5(v - 1), "{}", v);
        }
    }

    #[test]
    fn expand_6_is_monotonic() {
        for v in 1..64 {
            assert!(expand_6(v) >= expand_6(v - 1), "{}", v);
        }
    }

    #[test]
    fn color_u16_unpack() {
        let c = ColorU16::from_rgb(31, 0, 31);
        assert_eq!(c.get(), 0xF81F);
        assert_eq!(c.red(), 31);
        assert_eq!(c.green(), 0);
        assert_eq!(c.blue(), 31);
        assert_eq!(c.to_color_u8(), ColorU8::from_rgb(255, 0, 255));

        let c = ColorU16::from_bits(0x07E0);
        assert_eq!(c.to_color_u8(), ColorU8::from_rgb(0, 255, 0));
    }

    #[test]
    fn bytes_per_pixel() {
        assert_eq!(ColorFormat::Rgb565.bytes_per_pixel(), 2);
        assert_eq!(ColorFormat::Rgb888.bytes_per_pixel(), 3);
        assert_eq!(ColorFormat::Xrgb8888.bytes_per_pixel(), 4);
        assert_eq!(ColorFormat::Argb8888.bytes_per_pixel(), 4);
        assert!(ColorFormat::Rgb888.is_destination());
        assert!(!ColorFormat::Argb8888.is_destination());
    }
}
