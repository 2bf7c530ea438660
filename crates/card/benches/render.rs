//! Benchmarks for card rendering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dilse_card::layout::wrap_words;
use dilse_card::{paint_linear_gradient, Color, GRADIENTS};
use image::RgbaImage;

fn bench_wrap(c: &mut Criterion) {
    let text = "\"The best way to find yourself is to lose yourself in the service of others.\"";
    let measure = |s: &str| s.chars().count() as f32 * 32.0;

    c.bench_function("wrap_words", |b| {
        b.iter(|| wrap_words(black_box(text), black_box(864.0), measure))
    });
}

fn bench_gradient(c: &mut Criterion) {
    let (from, to): (Color, Color) = GRADIENTS[0];
    let mut image = RgbaImage::new(1080, 1080);

    c.bench_function("paint_linear_gradient_1080", |b| {
        b.iter(|| paint_linear_gradient(black_box(&mut image), from, to))
    });
}

criterion_group!(benches, bench_wrap, bench_gradient);
criterion_main!(benches);
