use std::collections::VecDeque;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

/// Unbounded multi-producer, single-consumer FIFO with a blocking `pull`.
///
/// The emptiness check in `pull` and the wait on the condvar happen under the same
/// lock that `push` takes, so a push can never slip between them unnoticed.
pub struct CommandQueue<T> {
    items: Mutex<VecDeque<T>>,
    available: Condvar,
}

impl<T> CommandQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
        }
    }

    /// Appends to the tail. Never blocks on anything but the internal lock.
    pub fn push(&self, item: T) {
        let mut items = self.lock();
        items.push_back(item);

        // Only the empty -> non-empty transition can have a parked consumer.
        if items.len() == 1 {
            self.available.notify_one();
        }
    }

    /// Removes the head, parking the caller while the queue is empty.
    pub fn pull(&self) -> T {
        let mut items = self.lock();

        loop {
            if let Some(item) = items.pop_front() {
                return item;
            }

            items = self
                .available
                .wait(items)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Non-blocking removal of the head.
    pub fn try_pull(&self) -> Option<T> {
        self.lock().pop_front()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<T>> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for CommandQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
