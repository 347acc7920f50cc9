// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::{AlphaU8, ColorFormat, ColorU8, FillPaint, MaskRef, PixmapMut};

use crate::mix::{mix_rgb, with_weight, Coverage};

/// Number of 32-bit pixels stored per iteration by the opaque fill.
pub(crate) const FILL_BATCH: usize = 16;

/// Paints the whole destination region with a solid color.
///
/// Does nothing when the mask doesn't cover the destination region.
pub fn blend_fill(dest: &mut PixmapMut, paint: &FillPaint) {
    if dest.width() == 0 || dest.height() == 0 {
        return;
    }

    if let Some(mask) = paint.mask {
        if !mask.covers(dest.width(), dest.height()) {
            log::warn!(
                "a {}x{} mask cannot cover a {}x{} fill",
                mask.width(), mask.height(), dest.width(), dest.height()
            );
            return;
        }
    }

    match Coverage::new(paint.opacity, paint.mask.is_some()) {
        Coverage::Opaque => fill_opaque(dest, paint.color),
        coverage => {
            let src = paint.color.to_bgr();
            with_weight!(coverage, |weight| fill_mix(dest, &src, paint.mask, weight))
        }
    }
}

fn fill_opaque(dest: &mut PixmapMut, color: ColorU8) {
    if dest.format() == ColorFormat::Xrgb8888 {
        let word = color.to_bgrx();
        for y in 0..dest.height() {
            let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(dest.row_mut(y));
            let mut batches = pixels.chunks_exact_mut(FILL_BATCH);
            for batch in &mut batches {
                *arrayref::array_mut_ref![batch, 0, FILL_BATCH] = [word; FILL_BATCH];
            }

            for p in batches.into_remainder() {
                *p = word;
            }
        }
    } else {
        // The pattern doesn't depend on the position,
        // so only the first row has to be expanded.
        let bgr = color.to_bgr();
        for p in dest.row_mut(0).chunks_exact_mut(3) {
            p.copy_from_slice(&bgr);
        }

        dest.replicate_first_row();
    }
}

fn fill_mix<W>(dest: &mut PixmapMut, src: &[u8; 3], mask: Option<MaskRef>, weight: W)
where
    W: Fn(&[u8], usize) -> AlphaU8,
{
    let bpp = dest.bytes_per_pixel();
    for y in 0..dest.height() {
        let mask_row = mask.map_or(&[][..], |m| m.row(y));
        for (x, p) in dest.row_mut(y).chunks_exact_mut(bpp).enumerate() {
            mix_rgb(src, arrayref::array_mut_ref![p, 0, 3], weight(mask_row, x));
        }
    }
}
