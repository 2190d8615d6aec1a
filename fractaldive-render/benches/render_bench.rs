use criterion::{criterion_group, criterion_main, Criterion};

use fractaldive_core::{Complex, FractalParams, ViewTransform, Viewport};
use fractaldive_render::{FrameGenerator, Palette, RenderMode};

fn setup(width: u32, height: u32) -> (FrameGenerator, ViewTransform) {
    let viewport = Viewport::new(width, height).unwrap();
    let generator = FrameGenerator::new(viewport, FractalParams::default(), Palette::default());
    let view = ViewTransform::fit(&viewport, Complex::new(-0.75, 0.0));
    (generator, view)
}

fn bench_full_frame(c: &mut Criterion) {
    let (mut generator, view) = setup(512, 512);
    c.bench_function("full_frame_512x512", |b| {
        b.iter(|| generator.generate(&view, RenderMode::Full));
    });
}

fn bench_grey_probe(c: &mut Criterion) {
    let (mut generator, view) = setup(512, 512);
    c.bench_function("grey_only_512x512", |b| {
        b.iter(|| generator.generate(&view, RenderMode::GreyOnly));
    });
}

fn bench_deep_view(c: &mut Criterion) {
    let viewport = Viewport::new(256, 256).unwrap();
    let mut generator = FrameGenerator::new(viewport, FractalParams::default(), Palette::default());
    let view = ViewTransform::centered(&viewport, Complex::new(-0.743643, 0.131825), 1.0e5).unwrap();
    c.bench_function("grey_only_256x256_deep", |b| {
        b.iter(|| generator.generate(&view, RenderMode::GreyOnly));
    });
}

criterion_group!(benches, bench_full_frame, bench_grey_probe, bench_deep_view);
criterion_main!(benches);
