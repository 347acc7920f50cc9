// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/*!
Per-pixel math shared by every blend loop.

All the color bits are changed by `mix_rgb`. Opacity, mask and source alpha
are folded into a single 8-bit weight before it is called.

Only the first three bytes of a destination pixel are touched, so the same
code works for 24-bit and padded 32-bit pixels.
*/

use crate::color::{AlphaU8, ColorU8, ALPHA_U8_OPAQUE, ALPHA_U8_TRANSPARENT, OPA_MAX};
use crate::BlendMode;

/// Mixes `src` into `dest` using `weight`.
///
/// `dest = (src * weight + dest * (255 - weight)) >> 8`, per channel.
///
/// A weight >= `OPA_MAX` copies the source. A zero weight and channels that
/// are already equal leave the destination untouched.
#[inline(always)]
pub fn mix_rgb(src: &[u8; 3], dest: &mut [u8; 3], weight: AlphaU8) {
    if weight == ALPHA_U8_TRANSPARENT {
        return;
    }

    if weight >= OPA_MAX {
        *dest = *src;
        return;
    }

    let w = u32::from(weight);
    let inv_w = u32::from(ALPHA_U8_OPAQUE - weight);
    dest[0] = mix_channel(src[0], dest[0], w, inv_w);
    dest[1] = mix_channel(src[1], dest[1], w, inv_w);
    dest[2] = mix_channel(src[2], dest[2], w, inv_w);
}

#[inline(always)]
fn mix_channel(s: u8, d: u8, w: u32, inv_w: u32) -> u8 {
    if s == d {
        return d;
    }

    ((u32::from(s) * w + u32::from(d) * inv_w) >> 8) as u8
}

/// Combines `src` with `dest` using a non-normal `mode` and then mixes
/// the result into `dest` using `alpha`.
///
/// Destination bytes are paired with source channels in red, green, blue order.
/// Since destination byte 0 is blue, red and blue are crossed for sources
/// read from the framebuffer byte order.
#[inline(always)]
pub fn blend_non_normal(dest: &mut [u8; 3], src: ColorU8, alpha: AlphaU8, mode: BlendMode) {
    blend_non_normal_bytes(dest, &[src.red(), src.green(), src.blue()], alpha, mode);
}

/// Same as `blend_non_normal`, but `src[i]` is combined with `dest[i]`.
#[inline(always)]
pub(crate) fn blend_non_normal_bytes(
    dest: &mut [u8; 3],
    src: &[u8; 3],
    alpha: AlphaU8,
    mode: BlendMode,
) {
    let res = [
        mode.combine(dest[0], src[0]),
        mode.combine(dest[1], src[1]),
        mode.combine(dest[2], src[2]),
    ];

    mix_rgb(&res, dest, alpha);
}

/// `(a * b) >> 8`
#[inline(always)]
pub(crate) fn mul_div256(a: u8, b: u8) -> u8 {
    ((u32::from(a) * u32::from(b)) >> 8) as u8
}

/// `(a * b * c) >> 16`
#[inline(always)]
pub(crate) fn mul3_div65536(a: u8, b: u8, c: u8) -> u8 {
    ((u32::from(a) * u32::from(b) * u32::from(c)) >> 16) as u8
}


/// A coverage regime.
///
/// Decided once per call from the opacity and the presence of a mask.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum Coverage {
    /// No mask, full opacity.
    Opaque,
    /// No mask, partial opacity.
    Opacity(AlphaU8),
    /// Mask, full opacity.
    Mask,
    /// Mask, partial opacity.
    MaskOpacity(AlphaU8),
}

impl Coverage {
    pub fn new(opacity: AlphaU8, masked: bool) -> Self {
        match (masked, opacity >= OPA_MAX) {
            (false, true) => Coverage::Opaque,
            (false, false) => Coverage::Opacity(opacity),
            (true, true) => Coverage::Mask,
            (true, false) => Coverage::MaskOpacity(opacity),
        }
    }
}

/// Binds `$weight` to a closure computing the effective weight for the
/// coverage regime and evaluates `$body` with it.
///
/// The closure has the `Fn(mask_row: &[u8], x: usize) -> AlphaU8` signature.
/// Each regime gets its own closure type, so `$body` is monomorphized
/// per regime and no coverage branch is left in the inner loop.
macro_rules! with_weight {
    ($coverage:expr, |$weight:ident| $body:expr) => {
        match $coverage {
            $crate::mix::Coverage::Opaque => {
                let $weight = |_: &[u8], _: usize| $crate::ALPHA_U8_OPAQUE;
                $body
            }
            $crate::mix::Coverage::Opacity(opacity) => {
                let $weight = move |_: &[u8], _: usize| opacity;
                $body
            }
            $crate::mix::Coverage::Mask => {
                let $weight = |mask: &[u8], x: usize| mask[x];
                $body
            }
            $crate::mix::Coverage::MaskOpacity(opacity) => {
                let $weight = move |mask: &[u8], x: usize| {
                    $crate::mix::mul_div256(opacity, mask[x])
                };
                $body
            }
        }
    };
}

/// Same as `with_weight`, but the source alpha is a part of the weight.
///
/// The closure has the `Fn(alpha: u8, mask_row: &[u8], x: usize) -> AlphaU8` signature.
macro_rules! with_alpha_weight {
    ($coverage:expr, |$weight:ident| $body:expr) => {
        match $coverage {
            $crate::mix::Coverage::Opaque => {
                let $weight = |alpha: u8, _: &[u8], _: usize| alpha;
                $body
            }
            $crate::mix::Coverage::Opacity(opacity) => {
                let $weight = move |alpha: u8, _: &[u8], _: usize| {
                    $crate::mix::mul_div256(alpha, opacity)
                };
                $body
            }
            $crate::mix::Coverage::Mask => {
                let $weight = |alpha: u8, mask: &[u8], x: usize| {
                    $crate::mix::mul_div256(alpha, mask[x])
                };
                $body
            }
            $crate::mix::Coverage::MaskOpacity(opacity) => {
                let $weight = move |alpha: u8, mask: &[u8], x: usize| {
                    $crate::mix::mul3_div65536(alpha, mask[x], opacity)
                };
                $body
            }
        }
    };
}

pub(crate) use with_alpha_weight;
pub(crate) use with_weight;
