// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

mod argb8888;
mod rgb565;
mod rgb888;

use crate::{ColorFormat, ImagePaint, MaskRef, PixmapMut, PixmapRef};

/// Composites a source image onto the whole destination region.
///
/// The routine is selected by the source color format.
/// `Rgb565`, `Rgb888`, `Xrgb8888` and `Argb8888` are supported;
/// anything else is logged and ignored.
///
/// Does nothing when the source or the mask doesn't cover the destination region.
pub fn blend_image(dest: &mut PixmapMut, paint: &ImagePaint) {
    if dest.width() == 0 || dest.height() == 0 {
        return;
    }

    let src = paint.source;
    if src.width() < dest.width() || src.height() < dest.height() {
        log::warn!(
            "a {}x{} image cannot cover a {}x{} region",
            src.width(), src.height(), dest.width(), dest.height()
        );
        return;
    }

    if let Some(mask) = paint.mask {
        if !mask.covers(dest.width(), dest.height()) {
            log::warn!(
                "a {}x{} mask cannot cover a {}x{} region",
                mask.width(), mask.height(), dest.width(), dest.height()
            );
            return;
        }
    }

    match src.format() {
        ColorFormat::Rgb565 => rgb565::blend(dest, paint),
        ColorFormat::Rgb888 | ColorFormat::Xrgb8888 => rgb888::blend(dest, paint),
        ColorFormat::Argb8888 => argb8888::blend(dest, paint),
        format => log::warn!("{:?} is not supported as a source color format", format),
    }
}

/// Walks the destination region and the matching source and mask rows.
///
/// `f` receives the destination color bytes, the whole source pixel,
/// the current mask row (empty when there is no mask) and the column.
#[inline(always)]
fn for_each_pixel<F>(dest: &mut PixmapMut, src: PixmapRef, mask: Option<MaskRef>, mut f: F)
where
    F: FnMut(&mut [u8; 3], &[u8], &[u8], usize),
{
    let dest_bpp = dest.bytes_per_pixel();
    let src_bpp = src.format().bytes_per_pixel();
    for y in 0..dest.height() {
        let src_row = src.row(y);
        let mask_row = mask.map_or(&[][..], |m| m.row(y));
        let pixels = dest
            .row_mut(y)
            .chunks_exact_mut(dest_bpp)
            .zip(src_row.chunks_exact(src_bpp));
        for (x, (d, s)) in pixels.enumerate() {
            f(arrayref::array_mut_ref![d, 0, 3], s, mask_row, x);
        }
    }
}
