//! Criterion benchmarks for the segment predicates.
//! Sizes: n segment pairs in {16, 256, 4096}, snapped (many collinear cases) and continuous.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use planar::geom2::rand::{draw_segment_pairs, SegmentCfg};
use planar::geom2::{do_intersect, LatticePoint};

fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("do_intersect");
    for &n in &[16usize, 256, 4096] {
        for snap in [true, false] {
            let cfg = SegmentCfg {
                half_extent: 64.0,
                snap_to_grid: snap,
            };
            let pairs = draw_segment_pairs(cfg, 43, n);
            let label = if snap { "f64_grid" } else { "f64_cont" };
            group.bench_with_input(BenchmarkId::new(label, n), &pairs, |b, pairs| {
                b.iter(|| {
                    pairs
                        .iter()
                        .filter(|(s, t)| do_intersect(s.a, s.b, t.a, t.b))
                        .count()
                })
            });
        }

        let lattice: Vec<[LatticePoint; 4]> = draw_segment_pairs(SegmentCfg::default(), 44, n)
            .into_iter()
            .map(|(s, t)| {
                [s.a, s.b, t.a, t.b].map(|p| LatticePoint::new(p.x as i32, p.y as i32))
            })
            .collect();
        group.bench_with_input(BenchmarkId::new("lattice", n), &lattice, |b, quads| {
            b.iter(|| {
                quads
                    .iter()
                    .filter(|q| do_intersect(black_box(q[0]), q[1], q[2], q[3]))
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_intersect);
criterion_main!(benches);
