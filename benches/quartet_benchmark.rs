//! Benchmarks for quartet-style plot rendering.

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use ggviz::prelude::*;
use std::hint::black_box;

fn quartet_plot() -> GGPlot {
    ggplot(anscombes_quartet(), Aes::new().x("x").y("y"))
        + Geom::point()
            .color(Rgba::parse("sienna").unwrap())
            .fill(Rgba::parse("darkorange").unwrap())
            .size(3.0)
        + Geom::smooth()
            .method(SmoothMethod::Lm)
            .se(false)
            .fullrange(true)
            .color(Rgba::parse("steelblue").unwrap())
            .width(1.0)
        + Facet::wrap("dataset")
        + ScaleContinuous::y().breaks(&[4.0, 8.0, 12.0])
        + Coord::fixed(1.0).xlim(3.0, 22.0).ylim(2.0, 14.0)
        + Labs::new().title("Anscombe's Quartet")
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("quartet_build", |b| {
        b.iter(|| black_box(quartet_plot()).build().unwrap());
    });
}

fn bench_render(c: &mut Criterion) {
    let built = quartet_plot().build().unwrap();
    c.bench_function("quartet_render_800x600", |b| {
        b.iter(|| built.to_framebuffer().unwrap());
    });
}

fn bench_png_encode(c: &mut Criterion) {
    let built = quartet_plot().build().unwrap();
    c.bench_function("quartet_png_encode", |b| {
        b.iter(|| built.to_png_bytes().unwrap());
    });
}

criterion_group!(benches, bench_build, bench_render, bench_png_encode);
criterion_main!(benches);
