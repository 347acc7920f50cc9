// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! `Argb8888` sources. The source alpha is always a part of the weight.

use crate::{BlendMode, ColorU8, ImagePaint, PixmapMut};

use crate::mix::{blend_non_normal, mix_rgb, mul3_div65536, mul_div256, with_alpha_weight, Coverage};

use super::for_each_pixel;

pub fn blend(dest: &mut PixmapMut, paint: &ImagePaint) {
    let src = paint.source;
    let mask = paint.mask;

    if paint.blend_mode == BlendMode::Normal {
        let coverage = Coverage::new(paint.opacity, mask.is_some());
        with_alpha_weight!(coverage, |weight| {
            for_each_pixel(dest, src, mask, |d, s, m, x| {
                mix_rgb(arrayref::array_ref![s, 0, 3], d, weight(s[3], m, x));
            })
        })
    } else {
        // Unlike the normal mode, full opacity is not special-cased here.
        let opacity = paint.opacity;
        let mode = paint.blend_mode;
        let masked = mask.is_some();
        for_each_pixel(dest, src, mask, |d, s, m, x| {
            let alpha = if masked {
                mul3_div65536(s[3], m[x], opacity)
            } else {
                mul_div256(s[3], opacity)
            };

            blend_non_normal(d, ColorU8::from_bgr(*arrayref::array_ref![s, 0, 3]), alpha, mode);
        });
    }
}
