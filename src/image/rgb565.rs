// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::{BlendMode, ColorU16, ColorU8, ImagePaint, PixmapMut};

use crate::mix::{blend_non_normal_bytes, mix_rgb, mul_div256, with_weight, Coverage};

use super::for_each_pixel;

pub fn blend(dest: &mut PixmapMut, paint: &ImagePaint) {
    let src = paint.source;
    let mask = paint.mask;

    if paint.blend_mode == BlendMode::Normal {
        match Coverage::new(paint.opacity, mask.is_some()) {
            Coverage::Opaque => {
                for_each_pixel(dest, src, None, |d, s, _, _| *d = load(s).to_bgr());
            }
            coverage => with_weight!(coverage, |weight| {
                for_each_pixel(dest, src, mask, |d, s, m, x| {
                    mix_rgb(&load(s).to_bgr(), d, weight(m, x));
                })
            }),
        }
    } else {
        let opacity = paint.opacity;
        let mode = paint.blend_mode;
        let masked = mask.is_some();
        for_each_pixel(dest, src, mask, |d, s, m, x| {
            let alpha = if masked { mul_div256(m[x], opacity) } else { opacity };
            // Same byte order as the normal mode: blue goes to byte 0.
            blend_non_normal_bytes(d, &load(s).to_bgr(), alpha, mode);
        });
    }
}

#[inline(always)]
fn load(px: &[u8]) -> ColorU8 {
    ColorU16::from_ne_bytes(arrayref::array_ref![px, 0, 2]).to_color_u8()
}
