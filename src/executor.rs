//! The single-threaded cooperative driver: owns the broker,
//! pairers, and handshakes, and is the only task that ever touches their
//! state. Platform-thread callbacks (advertisement received, GATT
//! notification, classic-pairing result) are marshaled onto it by posting
//! a boxed closure through a channel, mirroring the host crate's own
//! practice of routing platform-thread events onto a single async task
//! before they touch shared state.

use tokio::sync::mpsc;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A handle other threads (or the platform's callback threads) use to post
/// work onto the executor. Cheap to clone.
#[derive(Clone)]
pub struct ExecutorHandle {
    sender: mpsc::UnboundedSender<Job>,
}

impl ExecutorHandle {
    /// Posts `job` to run on the executor thread. Silently dropped if the
    /// executor has already shut down.
    pub fn post(&self, job: impl FnOnce() + Send + 'static) {
        let _ = self.sender.send(Box::new(job));
    }
}

/// Owns the single-threaded run loop. Spawned as a plain tokio task (not a
/// dedicated OS thread); its single-threaded-ness is a correctness
/// property of never touching broker/pairer/handshake state from anywhere
/// else, not of a special runtime configuration.
pub struct Executor {
    receiver: mpsc::UnboundedReceiver<Job>,
}

impl Executor {
    pub fn new() -> (Self, ExecutorHandle) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Executor { receiver }, ExecutorHandle { sender })
    }

    /// Runs the drain loop until every handle has been dropped. Callers
    /// typically `tokio::spawn` this directly, having kept the
    /// [`ExecutorHandle`] returned by [`Executor::new`] to post work.
    pub async fn run(mut self) {
        while let Some(job) = self.receiver.recv().await {
            job();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn posted_jobs_run_in_order() {
        let (executor, handle) = Executor::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        for i in 0..5 {
            let order = Arc::clone(&order);
            let counter = Arc::clone(&counter);
            handle.post(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                order.lock().unwrap().push(i);
            });
        }
        drop(handle);

        executor.run().await;

        assert_eq!(counter.load(Ordering::SeqCst), 5);
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    }
}
