// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the tintlab-filter transforms. Each benchmark runs
// on a 256x256 synthetic gradient, roughly one redraw of the session loop.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{GrayImage, Luma, Rgb, RgbImage};

use tintlab_core::{ColorFilter, EdgeOperation};
use tintlab_filter::{apply_edge, apply_filter};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn gradient_rgb() -> RgbImage {
    RgbImage::from_fn(256, 256, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]))
}

fn gradient_gray() -> GrayImage {
    GrayImage::from_fn(256, 256, |x, y| Luma([((x + y) / 2) as u8]))
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_color_filters(c: &mut Criterion) {
    let img = gradient_rgb();

    c.bench_function("red_tint (256x256)", |b| {
        b.iter(|| black_box(apply_filter(black_box(&img), ColorFilter::RedTint)));
    });

    c.bench_function("increased_green (256x256)", |b| {
        b.iter(|| {
            black_box(apply_filter(
                black_box(&img),
                ColorFilter::IncreasedGreen { amount: 50 },
            ))
        });
    });
}

fn bench_edge_operations(c: &mut Criterion) {
    let img = gradient_gray();

    c.bench_function("sobel (256x256)", |b| {
        b.iter(|| black_box(apply_edge(black_box(&img), EdgeOperation::Sobel)));
    });

    c.bench_function("canny 50/150 (256x256)", |b| {
        b.iter(|| {
            black_box(apply_edge(
                black_box(&img),
                EdgeOperation::Canny {
                    low: 50.0,
                    high: 150.0,
                },
            ))
        });
    });

    c.bench_function("median k=5 (256x256)", |b| {
        b.iter(|| {
            black_box(apply_edge(
                black_box(&img),
                EdgeOperation::MedianBlur { kernel: 5 },
            ))
        });
    });
}

criterion_group!(benches, bench_color_filters, bench_edge_operations);
criterion_main!(benches);
