//! Cancellable one-shot timers
//!
//! A slot holds at most one pending task. Scheduling replaces (and aborts)
//! whatever was pending, so re-entrant callers never stack timers.

use parking_lot::Mutex;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A single tracked timer
#[derive(Debug, Default)]
pub(crate) struct TimerSlot {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl TimerSlot {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Run `f` after `delay`, replacing any pending timer
    ///
    /// Outside a tokio runtime there is nothing to sleep on, so `f` runs
    /// immediately.
    pub(crate) fn schedule<F>(&self, delay: Duration, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut pending = self.pending.lock();
        if let Some(task) = pending.take() {
            task.abort();
        }

        match Handle::try_current() {
            Ok(handle) => {
                *pending = Some(handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    f();
                }));
            }
            Err(_) => {
                drop(pending);
                f();
            }
        }
    }

    /// Abort the pending timer; returns true if one was still waiting
    pub(crate) fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(task) => {
                let waiting = !task.is_finished();
                task.abort();
                waiting
            }
            None => false,
        }
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        if let Some(task) = self.pending.get_mut().take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> Box<dyn FnOnce() + Send>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let handle = fired.clone();
        let make = move || {
            let fired = handle.clone();
            Box::new(move || {
                fired.fetch_add(1, Ordering::SeqCst);
            }) as Box<dyn FnOnce() + Send>
        };
        (fired, make)
    }

    #[test]
    fn test_runs_immediately_without_runtime() {
        let (fired, make) = counter();
        let slot = TimerSlot::new();
        slot.schedule(Duration::from_secs(10), make());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!slot.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (fired, make) = counter();
        let slot = TimerSlot::new();
        slot.schedule(Duration::from_millis(150), make());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!slot.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_pending() {
        let (fired, make) = counter();
        let slot = TimerSlot::new();
        slot.schedule(Duration::from_millis(50), make());
        slot.schedule(Duration::from_millis(50), make());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let (fired, make) = counter();
        let slot = TimerSlot::new();
        slot.schedule(Duration::from_millis(50), make());

        assert!(slot.cancel());
        assert!(!slot.cancel());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
