use bencher::{benchmark_group, benchmark_main, Bencher};
use tiny_blend::*;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 1000;

fn blend(src_format: ColorFormat, blend_mode: BlendMode, opacity: u8, bencher: &mut Bencher) {
    let src_len = (WIDTH * HEIGHT) as usize * src_format.bytes_per_pixel();
    let src_data: Vec<u8> = (0..src_len).map(|i| (i * 31 % 251) as u8).collect();
    let source = PixmapRef::from_bytes(&src_data, WIDTH, HEIGHT, WIDTH, src_format).unwrap();

    let mut data = vec![0u8; (WIDTH * HEIGHT) as usize * 4];

    let mut paint = ImagePaint::new(source);
    paint.opacity = opacity;
    paint.blend_mode = blend_mode;

    bencher.iter(|| {
        let mut dest = PixmapMut::from_bytes(&mut data, WIDTH, HEIGHT, WIDTH, ColorFormat::Xrgb8888).unwrap();
        blend_image(&mut dest, &paint);
    });
}

fn copy_rgb565(bencher: &mut Bencher)           { blend(ColorFormat::Rgb565, BlendMode::Normal, 255, bencher); }
fn copy_rgb888(bencher: &mut Bencher)           { blend(ColorFormat::Rgb888, BlendMode::Normal, 255, bencher); }
fn copy_xrgb8888(bencher: &mut Bencher)         { blend(ColorFormat::Xrgb8888, BlendMode::Normal, 255, bencher); }
fn normal_rgb565(bencher: &mut Bencher)         { blend(ColorFormat::Rgb565, BlendMode::Normal, 128, bencher); }
fn normal_rgb888(bencher: &mut Bencher)         { blend(ColorFormat::Rgb888, BlendMode::Normal, 128, bencher); }
fn normal_argb8888(bencher: &mut Bencher)       { blend(ColorFormat::Argb8888, BlendMode::Normal, 255, bencher); }
fn additive_rgb888(bencher: &mut Bencher)       { blend(ColorFormat::Rgb888, BlendMode::Additive, 255, bencher); }
fn subtractive_rgb888(bencher: &mut Bencher)    { blend(ColorFormat::Rgb888, BlendMode::Subtractive, 255, bencher); }
fn multiply_rgb888(bencher: &mut Bencher)       { blend(ColorFormat::Rgb888, BlendMode::Multiply, 255, bencher); }
fn multiply_argb8888(bencher: &mut Bencher)     { blend(ColorFormat::Argb8888, BlendMode::Multiply, 200, bencher); }

benchmark_group!(blend_benches,
    copy_rgb565,
    copy_rgb888,
    copy_xrgb8888,
    normal_rgb565,
    normal_rgb888,
    normal_argb8888,
    additive_rgb888,
    subtractive_rgb888,
    multiply_rgb888,
    multiply_argb8888
);

benchmark_main!(blend_benches);
