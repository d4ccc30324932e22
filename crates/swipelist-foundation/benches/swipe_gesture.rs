use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::rc::Rc;
use swipelist_foundation::{
    ListHost, Point, Rect, RowId, SwipeToDismissTracker, TouchEvent, VisibleRow,
};

const ROW_WIDTH: f32 = 1080.0;
const ROW_HEIGHT: f32 = 144.0;
const MOVE_SAMPLES: &[usize] = &[16, 64, 256];

struct BenchList {
    rows: Vec<VisibleRow>,
}

impl BenchList {
    fn new(count: u64) -> Self {
        let rows = (0..count)
            .map(|i| {
                VisibleRow::new(
                    RowId(i),
                    Rect::new(0.0, i as f32 * ROW_HEIGHT, ROW_WIDTH, ROW_HEIGHT),
                )
            })
            .collect();
        Self { rows }
    }
}

impl ListHost for BenchList {
    fn location_on_screen(&self) -> Point {
        Point::ZERO
    }

    fn visible_rows(&self) -> &[VisibleRow] {
        &self.rows
    }

    fn first_visible_position(&self) -> usize {
        0
    }
}

fn swipe_events(moves: usize) -> Vec<TouchEvent> {
    let y = ROW_HEIGHT * 6.5;
    let step = ROW_WIDTH * 0.6 / moves as f32;
    let mut events = Vec::with_capacity(moves + 2);
    events.push(TouchEvent::down(40.0, y, 0));
    for i in 1..=moves {
        events.push(TouchEvent::moved(40.0 + step * i as f32, y, i as i64 * 8));
    }
    events.push(TouchEvent::up(
        40.0 + step * moves as f32,
        y,
        (moves as i64 + 1) * 8,
    ));
    events
}

fn bench_swipe(c: &mut Criterion) {
    let host = BenchList::new(14);
    let handler = Rc::new(|position: usize| {
        black_box(position);
    });
    let weak = Rc::downgrade(&handler);

    let mut group = c.benchmark_group("swipe_gesture");
    for &moves in MOVE_SAMPLES {
        let events = swipe_events(moves);
        group.bench_with_input(BenchmarkId::from_parameter(moves), &events, |b, events| {
            let mut tracker = SwipeToDismissTracker::new();
            tracker.set_dismiss_handler(weak.clone());
            b.iter(|| {
                for event in events {
                    black_box(tracker.handle(&host, event));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_swipe);
criterion_main!(benches);
