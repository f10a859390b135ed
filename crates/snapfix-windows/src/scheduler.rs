//! Delayed task execution on a worker thread.
//!
//! The adjuster's settle delay must block neither the window's event
//! processing nor the caller, so deferred tasks run on a dedicated thread.
//! Sleeping there also serializes adjustments for the windows sharing this
//! executor, which the adjuster's generation coalescing already tolerates.

use std::sync::mpsc::{Sender, channel};
use std::thread;
use std::time::Duration;

use snapfix_core::Scheduler;

type Task = Box<dyn FnOnce() + Send + 'static>;

/// Win32 implementation of [`Scheduler`]: one worker thread draining a
/// channel of (delay, task) pairs in FIFO order.
///
/// Clones share the same worker. Dropping the last clone (and the handle
/// from [`DelayedExecutor::spawn`]) shuts the worker down.
#[derive(Clone)]
pub struct DelayedExecutor {
    tx: Sender<(Duration, Task)>,
}

/// Join handle for the executor's worker thread.
pub struct ExecutorHandle {
    handle: thread::JoinHandle<()>,
}

impl ExecutorHandle {
    /// Waits for the worker to finish. Returns once every sender clone has
    /// been dropped and the queue has drained.
    pub fn join(self) {
        let _ = self.handle.join();
    }
}

impl DelayedExecutor {
    /// Starts the worker thread.
    pub fn spawn() -> (Self, ExecutorHandle) {
        let (tx, rx) = channel::<(Duration, Task)>();
        let handle = thread::spawn(move || {
            while let Ok((delay, task)) = rx.recv() {
                thread::sleep(delay);
                task();
            }
        });
        (Self { tx }, ExecutorHandle { handle })
    }
}

impl Scheduler for DelayedExecutor {
    fn defer(&self, delay: Duration, task: Task) {
        // A send can only fail after the worker has exited, at which point
        // dropping the task is the right thing to do anyway.
        let _ = self.tx.send((delay, task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn runs_deferred_tasks_in_order() {
        let (executor, handle) = DelayedExecutor::spawn();
        let counter = Arc::new(AtomicUsize::new(0));

        for expected in 0..3 {
            let counter = Arc::clone(&counter);
            executor.defer(
                Duration::from_millis(1),
                Box::new(move || {
                    let previous = counter.fetch_add(1, Ordering::SeqCst);
                    assert_eq!(previous, expected);
                }),
            );
        }

        drop(executor);
        handle.join();
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }
}
