/*!
`tiny-blend` is a tiny software compositor for 24-bit and 32-bit RGB framebuffers.

It paints solid colors and composites `Rgb565`, `Rgb888`, `Xrgb8888` and `Argb8888`
images onto a caller-owned framebuffer region, honoring a uniform opacity,
an optional coverage mask and a blending mode.

The crate never allocates and never retains buffers.
All pixel memory is borrowed for the duration of a single call.

```
use tiny_blend::*;

let mut data = vec![0u8; 4 * 4 * 3];
let mut dest = PixmapMut::from_bytes(&mut data, 4, 4, 4, ColorFormat::Rgb888).unwrap();

let mut paint = FillPaint::default();
paint.set_color_rgb8(50, 127, 150);
paint.opacity = 128;
blend_fill(&mut dest, &paint);
```
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![allow(clippy::identity_op)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::new_without_default)]

mod blend_mode;
mod color;
mod fill;
mod image;
mod mask;
mod mix;
mod painter;
mod pixmap;

pub use blend_mode::BlendMode;
pub use color::{AlphaU8, ALPHA_U8_OPAQUE, ALPHA_U8_TRANSPARENT, OPA_MAX};
pub use color::{ColorFormat, ColorU16, ColorU8};
pub use color::{expand_5, expand_6};
pub use fill::blend_fill;
pub use image::blend_image;
pub use mask::MaskRef;
pub use mix::{blend_non_normal, mix_rgb};
pub use painter::{FillPaint, ImagePaint};
pub use pixmap::{PixmapMut, PixmapRef};
