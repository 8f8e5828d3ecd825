use criterion::{black_box, criterion_group, criterion_main, Criterion};

use svg2lvgl::{encode, generate_c_source, ConvertConfig, RasterImage};

// Synthetic gradient raster so the encoder sees varied channel values.
fn test_image(width: u32, height: u32) -> RasterImage {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 2) as u8);
            data.push((y * 2) as u8);
            data.push((x ^ y) as u8);
            data.push(255 - (x % 256) as u8);
        }
    }
    RasterImage::new(width, height, data)
}

fn config(use_alpha: bool) -> ConvertConfig {
    ConvertConfig {
        var_name: "bench_img".to_string(),
        size: None,
        use_alpha,
    }
}

fn bench_encode(c: &mut Criterion) {
    let image = test_image(128, 128);
    let color_only = config(false);
    let with_alpha = config(true);

    c.bench_function("encode_128x128", |b| {
        b.iter(|| encode(black_box(&image), &color_only))
    });

    c.bench_function("encode_128x128_alpha", |b| {
        b.iter(|| encode(black_box(&image), &with_alpha))
    });
}

fn bench_generate_c_source(c: &mut Criterion) {
    let image = test_image(128, 128);
    let color_only = encode(&image, &config(false));
    let with_alpha = encode(&image, &config(true));

    c.bench_function("generate_c_source_128x128", |b| {
        b.iter(|| generate_c_source(black_box(&color_only)))
    });

    c.bench_function("generate_c_source_128x128_alpha", |b| {
        b.iter(|| generate_c_source(black_box(&with_alpha)))
    });
}

criterion_group!(benches, bench_encode, bench_generate_c_source);
criterion_main!(benches);
