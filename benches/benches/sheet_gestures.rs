// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use understory_detent::{Detent, DetentSet};
use understory_sheet::{DragResponse, Sheet, SheetConfig};

// Xorshift64 stream of uniform values in [0, 1).
struct Uniform(u64);

impl Uniform {
    fn sample(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn gen_detents(n: usize) -> DetentSet {
    let mut rng = Uniform(0xD373_A7F0_0D5E_7001);
    DetentSet::new((0..n).map(|_| Detent::Fraction(rng.sample())))
}

// Per-frame drag deltas in [-40, 40), the range of a finger moving at a brisk pace.
fn gen_deltas(count: usize) -> Vec<f64> {
    let mut rng = Uniform(0xF1A6_E125_0000_BEEF);
    (0..count).map(|_| (rng.sample() - 0.5) * 80.0).collect()
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    for &n in &[3usize, 8, 64] {
        let set = gen_detents(n);
        let mut rng = Uniform(0x5EED_0000_1234_5678);
        let queries: Vec<f64> = (0..1024).map(|_| rng.sample()).collect();
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("detents_n{}", n), |b| {
            b.iter(|| {
                for &q in &queries {
                    black_box(set.nearest(q));
                }
            })
        });
    }
    group.finish();
}

fn bench_drag_stream(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_stream");
    let deltas = gen_deltas(600);
    for (name, response) in [
        ("direct", DragResponse::Direct),
        ("smoothed", DragResponse::default()),
    ] {
        group.throughput(Throughput::Elements(deltas.len() as u64));
        group.bench_function(name, |b| {
            b.iter_batched(
                || {
                    let detents = DetentSet::new([Detent::Small, Detent::Medium, Detent::Large]);
                    let mut config = SheetConfig::new(detents);
                    config.set_drag_response(response);
                    let mut sheet = Sheet::new(config);
                    let _ = sheet.layout(Size::new(390.0, 844.0));
                    sheet
                },
                |mut sheet| {
                    let _ = sheet.drag_began();
                    for &dy in &deltas {
                        black_box(sheet.drag_changed(Vec2::new(0.0, dy)));
                    }
                    black_box(sheet.drag_ended());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_scroll_arbitration(c: &mut Criterion) {
    let mut group = c.benchmark_group("scroll_arbitration");
    let mut rng = Uniform(0xA5B1_7EA7_0000_0001);
    let offsets: Vec<f64> = (0..600).map(|_| (rng.sample() - 0.2) * 400.0).collect();
    group.throughput(Throughput::Elements(offsets.len() as u64));
    group.bench_function("offsets_with_overscroll", |b| {
        b.iter_batched(
            || {
                let detents = DetentSet::new([Detent::Small, Detent::Medium, Detent::Large]);
                let mut sheet = Sheet::new(SheetConfig::new(detents));
                let _ = sheet.layout(Size::new(390.0, 844.0));
                sheet
            },
            |mut sheet| {
                for &o in &offsets {
                    black_box(sheet.scroll_offset_changed(o));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_nearest,
    bench_drag_stream,
    bench_scroll_arbitration
);
criterion_main!(benches);
