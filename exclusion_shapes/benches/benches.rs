use criterion::{Bencher, BenchmarkId, Criterion, criterion_group, criterion_main};
use exclusion_shapes::{
    core::math::Vector2,
    polygon::Polygon,
    shape::{
        PolygonShape,
        internal::offset_bounds::{compute_shape_margin_bounds, compute_shape_padding_bounds},
    },
};
use test_polygons::*;

fn bench_excluded_intervals(b: &mut Bencher, shape: &PolygonShape<f64>) {
    b.iter(|| {
        shape.excluded_intervals(20.0, 10.0);
    })
}

fn bench_included_intervals(b: &mut Bencher, shape: &PolygonShape<f64>) {
    b.iter(|| {
        shape.included_intervals(20.0, 10.0);
    })
}

fn bench_first_fit(b: &mut Bencher, shape: &PolygonShape<f64>) {
    b.iter(|| {
        shape.first_included_interval_logical_top(0.0, Vector2::new(10.0, 10.0));
    })
}

fn bench_margin_bounds(b: &mut Bencher, polygon: &Polygon<f64>) {
    b.iter(|| {
        compute_shape_margin_bounds(polygon, 5.0, 1.0 / 64.0);
    })
}

fn bench_padding_bounds(b: &mut Bencher, polygon: &Polygon<f64>) {
    b.iter(|| {
        compute_shape_padding_bounds(polygon, 5.0, 1.0 / 64.0);
    })
}

fn excluded_intervals_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("excluded_intervals");
    let tooth_counts = &[10, 100, 1000];
    for &i in tooth_counts {
        group.bench_with_input(BenchmarkId::new("comb_teeth", i), &i, |b, i| {
            bench_excluded_intervals(b, &PolygonShape::new(comb_polygon(*i), 0.0, 0.0))
        });
    }

    group.finish();
}

fn included_intervals_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("included_intervals");
    let tooth_counts = &[10, 100, 1000];
    for &i in tooth_counts {
        group.bench_with_input(BenchmarkId::new("comb_teeth", i), &i, |b, i| {
            bench_included_intervals(b, &PolygonShape::new(comb_polygon(*i), 0.0, 0.0))
        });
    }

    group.finish();
}

fn first_fit_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_fit");
    let vertex_counts = &[25, 100, 250];
    for &i in vertex_counts {
        group.bench_with_input(BenchmarkId::new("regular_polygon", i), &i, |b, i| {
            bench_first_fit(b, &PolygonShape::new(regular_polygon(*i), 0.0, 0.0))
        });
    }

    group.finish();
}

fn offset_bounds_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("offset_bounds");
    let vertex_counts = &[25, 250, 2500];
    for &i in vertex_counts {
        group.bench_with_input(BenchmarkId::new("regular_polygon_margin", i), &i, |b, i| {
            bench_margin_bounds(b, &regular_polygon(*i))
        });
        group.bench_with_input(BenchmarkId::new("regular_polygon_padding", i), &i, |b, i| {
            bench_padding_bounds(b, &regular_polygon(*i))
        });
    }

    group.finish();
}

criterion_group!(excluded_intervals, excluded_intervals_group,);
criterion_group!(included_intervals, included_intervals_group,);
criterion_group!(first_fit, first_fit_group,);
criterion_group!(offset_bounds, offset_bounds_group,);
criterion_main!(excluded_intervals, included_intervals, first_fit, offset_bounds);
