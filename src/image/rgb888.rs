// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! `Rgb888` and `Xrgb8888` sources. The padding byte is never read.

use crate::{BlendMode, ColorU8, ImagePaint, PixmapMut, PixmapRef};

use crate::mix::{blend_non_normal, mix_rgb, mul_div256, with_weight, Coverage};

use super::for_each_pixel;

pub fn blend(dest: &mut PixmapMut, paint: &ImagePaint) {
    let src = paint.source;
    let mask = paint.mask;

    if paint.blend_mode == BlendMode::Normal {
        match Coverage::new(paint.opacity, mask.is_some()) {
            Coverage::Opaque => copy(dest, src),
            coverage => with_weight!(coverage, |weight| {
                for_each_pixel(dest, src, mask, |d, s, m, x| {
                    mix_rgb(arrayref::array_ref![s, 0, 3], d, weight(m, x));
                })
            }),
        }
    } else {
        let opacity = paint.opacity;
        let mode = paint.blend_mode;
        let masked = mask.is_some();
        for_each_pixel(dest, src, mask, |d, s, m, x| {
            let alpha = if masked { mul_div256(m[x], opacity) } else { opacity };
            // Channels are read as B, G, R, matching the source byte order.
            blend_non_normal(d, ColorU8::from_bgr(*arrayref::array_ref![s, 0, 3]), alpha, mode);
        });
    }
}

/// Opaque copy.
///
/// When pixel sizes match, rows are copied as is, padding bytes included.
fn copy(dest: &mut PixmapMut, src: PixmapRef) {
    if dest.bytes_per_pixel() == src.format().bytes_per_pixel() {
        for y in 0..dest.height() {
            let row = dest.row_mut(y);
            let len = row.len();
            row.copy_from_slice(&src.row(y)[..len]);
        }
    } else {
        for_each_pixel(dest, src, None, |d, s, _, _| {
            *d = *arrayref::array_ref![s, 0, 3];
        });
    }
}
