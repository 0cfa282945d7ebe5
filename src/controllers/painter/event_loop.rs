use crate::controllers::painter::buffers::FrameBuffers;
use crate::controllers::painter::completion::{Completion, FireOnDrop};
use crate::controllers::painter::data::frame::Frame;
use crate::controllers::painter::ports::frame_sink::FrameSink;
use crate::controllers::painter::queue::CommandQueue;
use crate::core::canvas::paint::paint;
use crate::core::canvas::state::CanvasState;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::operations::operation::Operation;
use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info, trace};

const WORKER_THREAD_NAME: &str = "painter-loop";

enum Job {
    Apply(Operation),
    /// Sets the loop-owned stop flag. Queued like any operation so that work
    /// posted before it is drained first.
    Stop,
}

struct SharedState {
    queue: CommandQueue<Job>,
    finished: Completion,
    published: AtomicU64,
}

/// Handle to the worker thread that turns posted operations into frames.
///
/// All methods take `&self`; share the handle between producer threads with an
/// `Arc` or scoped threads.
pub struct EventLoop {
    shared: Arc<SharedState>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl EventLoop {
    /// Allocates both surfaces at `pixel_rect` size and starts the `painter-loop`
    /// worker thread.
    pub fn start(pixel_rect: PixelRect, sink: Arc<dyn FrameSink>) -> io::Result<Self> {
        let shared = Arc::new(SharedState {
            queue: CommandQueue::new(),
            finished: Completion::new(),
            published: AtomicU64::new(0),
        });

        let buffers = FrameBuffers::new(pixel_rect);
        let worker_shared = Arc::clone(&shared);

        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_owned())
            .spawn(move || {
                Self::worker_loop(&worker_shared, buffers, sink.as_ref());
            })?;

        info!(
            width = pixel_rect.width(),
            height = pixel_rect.height(),
            "event loop started"
        );

        Ok(Self {
            shared,
            worker: Mutex::new(Some(worker)),
        })
    }

    /// Queues `operation`. Operations posted after the loop has stopped are dropped.
    pub fn post(&self, operation: Operation) {
        if self.shared.finished.is_fired() {
            trace!(?operation, "discarding operation posted after stop");
            return;
        }

        self.shared.queue.push(Job::Apply(operation));
    }

    /// Requests shutdown and blocks until the worker has applied everything queued
    /// before the request and exited.
    ///
    /// Safe to call more than once and from several threads.
    pub fn stop_and_wait(&self) {
        if !self.shared.finished.is_fired() {
            self.shared.queue.push(Job::Stop);
        }

        self.shared.finished.wait();

        let worker = self
            .worker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(handle) = worker
            && handle.join().is_err()
        {
            error!("event loop worker panicked");
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.shared.finished.is_fired()
    }

    #[must_use]
    pub fn published_frames(&self) -> u64 {
        self.shared.published.load(Ordering::Acquire)
    }

    fn worker_loop(shared: &SharedState, mut buffers: FrameBuffers, sink: &dyn FrameSink) {
        let _finished = FireOnDrop(&shared.finished);

        let mut state = CanvasState::new();
        let mut stop_requested = false;

        paint(&state, buffers.next_mut());

        while !(stop_requested && shared.queue.is_empty()) {
            let operation = match shared.queue.pull() {
                Job::Apply(operation) => operation,
                Job::Stop => {
                    debug!(pending = shared.queue.len(), "stop requested");
                    stop_requested = true;
                    continue;
                }
            };

            if !operation.apply(&mut state, buffers.next_mut()) {
                continue;
            }

            let generation = shared.published.fetch_add(1, Ordering::AcqRel) + 1;
            debug!(generation, "publishing frame");

            sink.publish(&Frame {
                generation,
                surface: buffers.next(),
            });

            buffers.swap();
            paint(&state, buffers.next_mut());
        }

        info!(
            published = shared.published.load(Ordering::Acquire),
            "event loop stopped"
        );
    }
}

impl Drop for EventLoop {
    fn drop(&mut self) {
        self.stop_and_wait();
    }
}
