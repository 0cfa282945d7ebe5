use std::sync::{Condvar, Mutex, PoisonError};

/// One-shot latch: fired once, after which every `wait` returns immediately.
#[derive(Default)]
pub(crate) struct Completion {
    fired: Mutex<bool>,
    changed: Condvar,
}

impl Completion {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fire(&self) {
        let mut fired = self.fired.lock().unwrap_or_else(PoisonError::into_inner);
        *fired = true;
        self.changed.notify_all();
    }

    pub(crate) fn wait(&self) {
        let fired = self.fired.lock().unwrap_or_else(PoisonError::into_inner);
        let _fired = self
            .changed
            .wait_while(fired, |fired| !*fired)
            .unwrap_or_else(PoisonError::into_inner);
    }

    pub(crate) fn is_fired(&self) -> bool {
        *self.fired.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Fires the latch when dropped, including while unwinding from a panic.
pub(crate) struct FireOnDrop<'a>(pub(crate) &'a Completion);

impl Drop for FireOnDrop<'_> {
    fn drop(&mut self) {
        self.0.fire();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn wait_returns_after_fire() {
        let completion = Arc::new(Completion::new());

        let waiters: Vec<_> = (0..3)
            .map(|_| {
                let completion = Arc::clone(&completion);
                thread::spawn(move || completion.wait())
            })
            .collect();

        thread::sleep(Duration::from_millis(20));
        assert!(!completion.is_fired());
        completion.fire();

        for waiter in waiters {
            waiter.join().unwrap();
        }
        assert!(completion.is_fired());
    }

    #[test]
    fn wait_after_fire_does_not_block() {
        let completion = Completion::new();
        completion.fire();
        completion.fire();

        completion.wait();
        completion.wait();
    }

    #[test]
    fn guard_fires_on_panic() {
        let completion = Arc::new(Completion::new());

        let worker = {
            let completion = Arc::clone(&completion);
            thread::spawn(move || {
                let _guard = FireOnDrop(&completion);
                panic!("worker failed");
            })
        };

        assert!(worker.join().is_err());
        completion.wait();
        assert!(completion.is_fired());
    }
}
