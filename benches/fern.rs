// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate criterion;
extern crate barnsley;

use barnsley::{FernConfig, FernPoints, FernRenderer, SeededDraws};
use criterion::{black_box, Criterion};

fn walk(c: &mut Criterion) {
    c.bench_function("walk 100k points", |b| {
        b.iter(|| {
            FernPoints::new(SeededDraws::new(42))
                .take(100_000)
                .fold(0.0, |acc, p| acc + black_box(p.y))
        })
    });
}

fn render(c: &mut Criterion) {
    let config = FernConfig {
        iterations: 100_000,
        ..FernConfig::with_size(500, 100.0)
    };
    let renderer = FernRenderer::new(config).unwrap();
    c.bench_function("render 100k points", |b| {
        b.iter(|| renderer.render(SeededDraws::new(42)).unwrap())
    });
}

criterion_group!(benches, walk, render);
criterion_main!(benches);
