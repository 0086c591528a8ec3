// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Line, Point};
use understory_connector::{
    SegmentHitParams, axis_align, clamp_to_segment_bounds, connector_path_data,
    connector_segments, nearest_segment, point_to_segment_distance,
};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// A coordinate in `0.0..1024.0` on a quarter-unit grid.
    fn coord(&mut self) -> f64 {
        f64::from(self.next_u32() % 4096) * 0.25
    }

    fn point(&mut self) -> Point {
        Point::new(self.coord(), self.coord())
    }
}

/// Connector point lists as an editor stores them: pairs of leg endpoints.
fn random_connector(n_legs: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    (0..n_legs * 2).map(|_| rng.point()).collect()
}

fn bench_connector(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_connector");

    let queries: Vec<Point> = {
        let mut rng = Lcg::new(0xC0DE_0000_0000_0001);
        (0..1_024).map(|_| rng.point()).collect()
    };

    group.bench_function("point_to_segment_distance(1024)", |b| {
        let a = Point::new(10.0, 20.0);
        let e = Point::new(900.0, 700.0);
        b.iter(|| {
            let sum: f64 = queries
                .iter()
                .map(|&p| point_to_segment_distance(p, a, e))
                .sum();
            black_box(sum);
        });
    });

    group.bench_function("axis_align_then_clamp(1024)", |b| {
        let target = Point::new(512.0, 512.0);
        let edge = Line::new((100.0, 512.0), (800.0, 512.0));
        b.iter(|| {
            for &p in &queries {
                black_box(clamp_to_segment_bounds(axis_align(p, target), edge));
            }
        });
    });

    for &n_legs in &[4_usize, 64, 1_024] {
        let points = random_connector(n_legs, 0xC0DE_0000_0000_0002);

        group.bench_function(format!("connector_path_data(legs={n_legs})"), |b| {
            b.iter(|| black_box(connector_path_data(black_box(&points))));
        });

        group.bench_function(format!("nearest_segment(legs={n_legs})"), |b| {
            let params = SegmentHitParams::with_tolerance(16.0);
            b.iter(|| {
                for &p in queries.iter().take(64) {
                    black_box(nearest_segment(p, connector_segments(&points), &params));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_connector);
criterion_main!(benches);
