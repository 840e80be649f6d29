//! Benchmarks for stroke geometry and shape analysis.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stroke_wave::geometry::{convex_hull, extract_polygon, normalized, ExtractConfig, LoopForm};
use stroke_wave::shape::{douglas_peucker, reduce_to_count, SimplifyConfig};
use stroke_wave::stroke::{generate_polygon_stroke, jitter};
use stroke_wave::{analyze_stroke, ShapeConfig};

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("Polygon Extraction");
    let config = ExtractConfig::default();

    for per_edge in [10, 50, 200] {
        let stroke = jitter(&generate_polygon_stroke(3, 200.0, per_edge, 0.1), 1.0, 42);

        group.throughput(Throughput::Elements(stroke.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("extract_polygon", stroke.len()),
            &stroke,
            |b, stroke| {
                b.iter(|| {
                    black_box(extract_polygon(stroke, &config));
                });
            },
        );
    }

    group.finish();
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("Convex Hull");

    for sides in [3, 8, 32] {
        let stroke = jitter(&generate_polygon_stroke(sides, 200.0, 40, 0.1), 2.0, 7);
        let Some(polygon) = extract_polygon(&stroke, &ExtractConfig::default()) else {
            continue;
        };
        let polygon = normalized(polygon, LoopForm::Open);

        group.throughput(Throughput::Elements(polygon.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("convex_hull", polygon.len()),
            &polygon,
            |b, polygon| {
                b.iter(|| {
                    black_box(convex_hull(polygon));
                });
            },
        );
    }

    group.finish();
}

fn bench_simplification(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simplification");
    let config = SimplifyConfig::default();

    for per_edge in [20, 100] {
        let stroke = jitter(&generate_polygon_stroke(3, 200.0, per_edge, 0.1), 1.5, 3);
        let Some(polygon) = extract_polygon(&stroke, &ExtractConfig::default()) else {
            continue;
        };

        group.bench_with_input(
            BenchmarkId::new("douglas_peucker", polygon.len()),
            &polygon,
            |b, polygon| {
                b.iter(|| {
                    black_box(douglas_peucker(polygon.vertices(), 2.0));
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("reduce_to_triangle", polygon.len()),
            &polygon,
            |b, polygon| {
                b.iter(|| {
                    black_box(reduce_to_count(polygon, 3, &config).ok());
                });
            },
        );
    }

    group.finish();
}

fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("Full Shape Analysis");
    let config = ShapeConfig::default();

    for sides in [3, 4, 6] {
        let stroke = jitter(&generate_polygon_stroke(sides, 150.0, 30, 0.15), 1.0, 11);

        group.bench_with_input(
            BenchmarkId::new("analyze_stroke", format!("{}-gon", sides)),
            &stroke,
            |b, stroke| {
                b.iter(|| {
                    black_box(analyze_stroke(stroke, &config).ok());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extraction,
    bench_hull,
    bench_simplification,
    bench_full_analysis,
);
criterion_main!(benches);
