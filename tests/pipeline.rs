use std::sync::{Arc, Mutex};
use std::thread;

use painter::{
    CanvasState, Colour, EventLoop, Frame, FrameSink, Operation, ParseError, PixelBuffer,
    PixelRect, Point, PpmFrameSink, parse_str,
};

#[derive(Default)]
struct RecordingSink {
    frames: Mutex<Vec<(u64, PixelBuffer)>>,
}

impl FrameSink for RecordingSink {
    fn publish(&self, frame: &Frame<'_>) {
        self.frames
            .lock()
            .unwrap()
            .push((frame.generation, frame.surface.clone()));
    }
}

impl RecordingSink {
    fn take(&self) -> Vec<(u64, PixelBuffer)> {
        std::mem::take(&mut *self.frames.lock().unwrap())
    }
}

fn start(size: u32) -> (EventLoop, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let event_loop = EventLoop::start(
        PixelRect::from_size(size, size).unwrap(),
        Arc::clone(&sink) as Arc<dyn FrameSink>,
    )
    .unwrap();
    (event_loop, sink)
}

fn run_script(size: u32, script: &str) -> Vec<(u64, PixelBuffer)> {
    let (event_loop, sink) = start(size);
    for operation in parse_str(script).unwrap() {
        event_loop.post(operation);
    }
    event_loop.stop_and_wait();
    sink.take()
}

fn at(surface: &PixelBuffer, x: i32, y: i32) -> Colour {
    surface.pixel(Point { x, y }).unwrap()
}

#[test]
fn script_publishes_rect_and_figure_in_one_frame() {
    let frames = run_script(100, "white\nbgrect 0.1 0.1 0.5 0.5\nfigure 0.2 0.2\nupdate\n");

    assert_eq!(frames.len(), 1);
    let (generation, surface) = &frames[0];
    assert_eq!(*generation, 1);

    assert_eq!(at(surface, 30, 10), Colour::YELLOW, "bar");
    assert_eq!(at(surface, 15, 30), Colour::YELLOW, "stem");
    assert_eq!(at(surface, 40, 40), Colour::BLACK, "background rect");
    assert_eq!(at(surface, 5, 30), Colour::WHITE, "left of the rect");
    assert_eq!(at(surface, 60, 60), Colour::WHITE, "outside the rect");
}

#[test]
fn rejected_script_posts_nothing() {
    let error = parse_str("white\nbgrect 1 1\nupdate\n").unwrap_err();

    assert!(matches!(
        error,
        ParseError::Arity {
            line: 2,
            expected: 4,
            found: 2,
            ..
        }
    ));
}

#[test]
fn each_update_publishes_the_state_at_that_point() {
    let frames = run_script(40, "white\nupdate\ngreen\nupdate\nreset\nupdate\n");

    let summary: Vec<(u64, Colour)> = frames
        .iter()
        .map(|(generation, surface)| (*generation, at(surface, 20, 20)))
        .collect();
    assert_eq!(
        summary,
        vec![(1, Colour::WHITE), (2, Colour::GREEN), (3, CanvasState::DEFAULT_BACKGROUND)]
    );
}

#[test]
fn move_places_every_figure_at_the_target() {
    let frames = run_script(100, "figure 0.2 0.2\nfigure 0.8 0.8\nmove 0.5 0.5\nupdate\n");

    let (_, surface) = &frames[0];
    assert_eq!(at(surface, 50, 40), Colour::YELLOW);
    assert_eq!(at(surface, 80, 90), CanvasState::DEFAULT_BACKGROUND);
    assert_eq!(at(surface, 20, 25), CanvasState::DEFAULT_BACKGROUND);
}

#[test]
fn composite_operation_publishes_once() {
    let (event_loop, sink) = start(20);

    event_loop.post(Operation::List(vec![
        Operation::white_fill(),
        Operation::Update,
        Operation::figure(0.5, 0.5),
        Operation::Update,
    ]));
    event_loop.stop_and_wait();

    let frames = sink.take();
    assert_eq!(frames.len(), 1);
    assert_eq!(at(&frames[0].1, 10, 8), Colour::YELLOW);
}

#[test]
fn concurrent_producers_each_get_their_updates_published() {
    let (event_loop, sink) = start(16);

    thread::scope(|scope| {
        for _ in 0..2 {
            scope.spawn(|| {
                for _ in 0..50 {
                    event_loop.post(Operation::green_fill());
                    event_loop.post(Operation::Update);
                }
            });
        }
    });
    event_loop.stop_and_wait();

    let generations: Vec<u64> = sink.take().into_iter().map(|(g, _)| g).collect();
    assert_eq!(generations, (1..=100).collect::<Vec<_>>());
    assert_eq!(event_loop.published_frames(), 100);
}

#[test]
fn ppm_sink_writes_one_file_per_frame() {
    let dir = tempfile::tempdir().unwrap();
    let sink = Arc::new(PpmFrameSink::new(dir.path()));
    let event_loop = EventLoop::start(
        PixelRect::from_size(4, 3).unwrap(),
        Arc::clone(&sink) as Arc<dyn FrameSink>,
    )
    .unwrap();

    for operation in parse_str("update\nwhite\nupdate\n").unwrap() {
        event_loop.post(operation);
    }
    event_loop.stop_and_wait();

    let written = sink.finish().unwrap();
    assert_eq!(written.len(), 2);
    let bytes = std::fs::read(dir.path().join("frame_0002.ppm")).unwrap();
    assert!(bytes.starts_with(b"P6\n4 3\n255\n"));
    assert!(bytes[b"P6\n4 3\n255\n".len()..].iter().all(|&b| b == 255));
}
