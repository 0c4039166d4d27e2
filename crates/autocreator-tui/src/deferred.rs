// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

/// Sends one event after a delay unless cancelled first. Dropping the task
/// cancels it.
#[derive(Debug)]
pub struct DeferredTask {
    cancelled: Arc<AtomicBool>,
}

impl DeferredTask {
    pub fn schedule<T>(delay: Duration, tx: Sender<T>, event: T) -> Self
    where
        T: Send + 'static,
    {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        thread::spawn(move || {
            thread::sleep(delay);
            if !flag.load(Ordering::Acquire) {
                let _ = tx.send(event);
            }
        });
        Self { cancelled }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Drop for DeferredTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::DeferredTask;
    use std::sync::mpsc::{self, RecvTimeoutError};
    use std::time::{Duration, Instant};

    #[test]
    fn fires_after_delay() {
        let (tx, rx) = mpsc::channel();
        let started = Instant::now();
        let _task = DeferredTask::schedule(Duration::from_millis(30), tx, 7_u8);

        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(7));
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn cancelled_task_never_sends() {
        let (tx, rx) = mpsc::channel::<u8>();
        let task = DeferredTask::schedule(Duration::from_millis(30), tx, 1);
        task.cancel();
        assert!(task.is_cancelled());

        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)),
            Err(RecvTimeoutError::Disconnected)
        );
    }

    #[test]
    fn dropping_task_cancels_it() {
        let (tx, rx) = mpsc::channel::<u8>();
        drop(DeferredTask::schedule(Duration::from_millis(30), tx, 1));

        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)),
            Err(RecvTimeoutError::Disconnected)
        );
    }
}
