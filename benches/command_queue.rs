use std::sync::Arc;
use std::thread;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use painter::{CommandQueue, EventLoop, Frame, FrameSink, Operation, PixelRect};

struct NullSink;

impl FrameSink for NullSink {
    fn publish(&self, _frame: &Frame<'_>) {}
}

fn bench_push_then_drain(c: &mut Criterion) {
    c.bench_function("queue_push_then_drain_10k", |b| {
        b.iter_batched(
            CommandQueue::<u64>::new,
            |queue| {
                for i in 0..10_000 {
                    queue.push(i);
                }
                while queue.try_pull().is_some() {}
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_producer_consumer(c: &mut Criterion) {
    c.bench_function("queue_producer_consumer_10k", |b| {
        b.iter(|| {
            let queue = Arc::new(CommandQueue::<u64>::new());
            let producer = {
                let queue = Arc::clone(&queue);
                thread::spawn(move || {
                    for i in 0..10_000 {
                        queue.push(i);
                    }
                })
            };

            let mut sum = 0;
            for _ in 0..10_000 {
                sum += queue.pull();
            }
            producer.join().unwrap();
            sum
        })
    });
}

fn bench_event_loop_updates(c: &mut Criterion) {
    let rect = PixelRect::from_size(64, 64).unwrap();

    c.bench_function("event_loop_1k_figure_updates_64px", |b| {
        b.iter(|| {
            let event_loop = EventLoop::start(rect, Arc::new(NullSink)).unwrap();
            for i in 0..1_000 {
                let t = f64::from(i) / 1_000.0;
                event_loop.post(Operation::figure(t, t));
                event_loop.post(Operation::Update);
            }
            event_loop.stop_and_wait();
            event_loop.published_frames()
        })
    });
}

criterion_group!(
    benches,
    bench_push_then_drain,
    bench_producer_consumer,
    bench_event_loop_updates
);
criterion_main!(benches);
