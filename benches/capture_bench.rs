//! Benchmarks for the capture hot path
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use visuomotor_rs::capture::{
    InputDispatcher, PointerCapture, RenderSink, Rotation, TelemetryLog,
};
use visuomotor_rs::{ExperimentMode, Point, PointerEvent, PointerId, Result};

/// Sink that discards all drawing instructions
struct NullSurface;

impl RenderSink for NullSurface {
    fn begin_path(&mut self, _at: Point) {}
    fn draw_segment(&mut self, _from: Point, _to: Point, _pressure: f64) {}
    fn clear_and_redraw_guides(&mut self) {}
}

impl PointerCapture for NullSurface {
    fn request_capture(&mut self, _pointer: PointerId) -> Result<()> {
        Ok(())
    }
}

fn stroke_events(moves: usize) -> Vec<PointerEvent> {
    let pointer = PointerId(0);
    let mut events = Vec::with_capacity(moves + 2);
    events.push(PointerEvent::Down {
        pointer,
        position: Point::new(0.0, 0.0),
        on_surface: true,
    });
    for i in 0..moves {
        events.push(PointerEvent::Move {
            pointer,
            position: Point::new(i as f64 * 0.7, (i as f64 * 0.3).sin() * 50.0),
            pressure: Some(0.6),
            cancelable: true,
        });
    }
    events.push(PointerEvent::Up { pointer });
    events
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    for mode in [ExperimentMode::Baseline, ExperimentMode::Perturbation] {
        let events = stroke_events(1000);
        group.throughput(Throughput::Elements(events.len() as u64));
        group.bench_function(format!("stroke_1000_moves_{}", mode.as_str()), |b| {
            b.iter(|| {
                let mut dispatcher = InputDispatcher::new(Rotation::from_degrees(30.0), 0.5);
                dispatcher.set_mode(mode);
                let mut surface = NullSurface;
                let mut log = TelemetryLog::new();
                for event in &events {
                    black_box(dispatcher.handle_event(*event, &mut surface, &mut log));
                }
                log
            })
        });
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let mut dispatcher = InputDispatcher::new(Rotation::from_degrees(30.0), 0.5);
    let mut surface = NullSurface;
    let mut log = TelemetryLog::new();
    for event in stroke_events(10_000) {
        dispatcher.handle_event(event, &mut surface, &mut log);
    }

    c.bench_function("export_csv_10k_samples", |b| {
        b.iter(|| black_box(log.export_csv().unwrap()).len())
    });
}

criterion_group!(benches, bench_dispatch, bench_export);
criterion_main!(benches);
