// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use overstory_radial::{Navigator, NavigatorConfig};
use serde_json::{Value, json};
use understory_camera::ViewportController;
use understory_hierarchy::Hierarchy;
use understory_radial_layout::LayoutEngine;

/// Root with `fanout` children, each with `fanout` leaves.
fn synthetic(fanout: usize) -> Value {
    let children: Vec<Value> = (0..fanout)
        .map(|i| {
            let leaves: Vec<Value> = (0..fanout)
                .map(|j| json!({ "name": format!("leaf {i}.{j}"), "email": "null" }))
                .collect();
            json!({ "name": format!("group {i}"), "children": leaves })
        })
        .collect();
    json!({ "name": "root", "children": children })
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierarchy/from_json");
    for fanout in [8usize, 32, 128] {
        let text = synthetic(fanout).to_string();
        group.throughput(Throughput::Elements((fanout * fanout + fanout + 1) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(fanout), &text, |b, text| {
            b.iter(|| black_box(Hierarchy::from_json_str(text).unwrap()));
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("radial_layout/compute");
    let engine = LayoutEngine::default();
    for fanout in [4usize, 16, 64, 256] {
        let h = Hierarchy::from_json_str(&synthetic(fanout).to_string()).unwrap();
        group.throughput(Throughput::Elements(fanout as u64));
        group.bench_with_input(BenchmarkId::from_parameter(fanout), &h, |b, h| {
            b.iter(|| black_box(engine.compute(h, h.root(), Size::new(1280.0, 800.0))));
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let h = Hierarchy::from_json_str(&synthetic(64).to_string()).unwrap();
    let layout = LayoutEngine::default().compute(&h, h.root(), Size::new(1280.0, 800.0));
    let samples: Vec<Point> = (0..256)
        .map(|i| {
            let a = f64::from(i) * 0.1;
            Point::new(a.cos() * layout.ring_radius, a.sin() * layout.ring_radius)
        })
        .collect();
    c.bench_function("radial_layout/hit_test_64", |b| {
        b.iter(|| {
            for &p in &samples {
                black_box(layout.hit_test(p));
            }
        });
    });
}

fn bench_camera(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera");
    group.bench_function("fit", |b| {
        let mut camera = ViewportController::default();
        b.iter(|| black_box(camera.reset_to_fit(Size::new(1280.0, 800.0), 384.0)));
    });
    group.bench_function("wheel_and_drag", |b| {
        let mut camera = ViewportController::default();
        camera.reset_to_fit(Size::new(1280.0, 800.0), 384.0);
        b.iter(|| {
            camera.zoom_at_point(Point::new(300.0, 200.0), -120.0);
            camera.zoom_at_point(Point::new(300.0, 200.0), 120.0);
            camera.begin_drag(1, Point::new(10.0, 10.0));
            camera.update_drag(Point::new(40.0, 25.0));
            camera.update_drag(Point::new(10.0, 10.0));
            black_box(camera.end_drag());
        });
    });
    group.finish();
}

fn bench_navigator(c: &mut Criterion) {
    let h = Hierarchy::from_json_str(&synthetic(32).to_string()).unwrap();
    let mut nav = Navigator::new(h, NavigatorConfig::default());
    nav.resize(Size::new(1280.0, 800.0));
    let first = nav.hierarchy().children(nav.hierarchy().root())[0];

    c.bench_function("navigator/drill_and_back", |b| {
        b.iter(|| {
            black_box(nav.focus_child(first).unwrap());
            black_box(nav.back());
        });
    });
    c.bench_function("navigator/frame_32", |b| {
        b.iter(|| black_box(nav.frame().children.len()));
    });
}

criterion_group!(
    benches,
    bench_load,
    bench_layout,
    bench_hit_test,
    bench_camera,
    bench_navigator
);
criterion_main!(benches);
