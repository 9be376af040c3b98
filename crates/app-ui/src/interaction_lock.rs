//! Interaction lock
//!
//! Pointer input is disabled for the whole length of a page transition so a
//! second tap cannot start a competing navigation mid-animation. Release is
//! delayed by a short grace period; a new acquire during that window keeps
//! input disabled without a flicker.

use crate::timer::TimerSlot;
use crate::tokens::timing;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Host seam for global pointer input (`pointer-events` on the body)
#[cfg_attr(test, mockall::automock)]
pub trait PointerInput: Send + Sync {
    /// Enable or disable pointer input
    fn set_pointer_events(&self, enabled: bool);
}

/// Process-wide latch around page transitions
pub struct InteractionLock {
    pointer: Arc<dyn PointerInput>,
    grace: Duration,
    depth: Mutex<usize>,
    held_tx: watch::Sender<bool>,
    release_timer: TimerSlot,
    acquires: AtomicU64,
    releases: AtomicU64,
}

impl InteractionLock {
    /// Create a lock with the default grace period
    pub fn new(pointer: Arc<dyn PointerInput>) -> Arc<Self> {
        Self::with_grace(pointer, timing::LOCK_RELEASE_GRACE)
    }

    /// Create a lock with a custom grace period
    pub fn with_grace(pointer: Arc<dyn PointerInput>, grace: Duration) -> Arc<Self> {
        let (held_tx, _) = watch::channel(false);
        Arc::new(Self {
            pointer,
            grace,
            depth: Mutex::new(0),
            held_tx,
            release_timer: TimerSlot::new(),
            acquires: AtomicU64::new(0),
            releases: AtomicU64::new(0),
        })
    }

    /// Disable pointer input until the returned guard is dropped
    ///
    /// Nested acquires are fine; input stays disabled until the last guard
    /// goes away.
    pub fn acquire(self: &Arc<Self>) -> LockGuard {
        let mut depth = self.depth.lock();
        // A pending re-enable from the previous transition must not fire.
        self.release_timer.cancel();

        if *depth == 0 {
            self.pointer.set_pointer_events(false);
            self.held_tx.send_replace(true);
            tracing::trace!("Interaction lock acquired");
        }
        *depth += 1;
        self.acquires.fetch_add(1, Ordering::Relaxed);

        LockGuard { lock: Some(Arc::clone(self)) }
    }

    fn release(&self) {
        let mut depth = self.depth.lock();
        *depth = depth.saturating_sub(1);
        self.releases.fetch_add(1, Ordering::Relaxed);

        if *depth > 0 {
            return;
        }

        self.held_tx.send_replace(false);
        let pointer = Arc::clone(&self.pointer);
        self.release_timer.schedule(self.grace, move || {
            pointer.set_pointer_events(true);
            tracing::trace!("Pointer input re-enabled");
        });
    }

    /// Whether a transition currently holds the lock
    pub fn is_held(&self) -> bool {
        *self.held_tx.borrow()
    }

    /// Wait until no transition holds the lock
    pub async fn wait_released(&self) {
        let mut rx = self.held_tx.subscribe();
        // The sender lives in self, so the channel cannot close here.
        let _ = rx.wait_for(|held| !*held).await;
    }

    /// Subscribe to held/released changes
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.held_tx.subscribe()
    }

    /// Number of acquires so far
    pub fn acquire_count(&self) -> u64 {
        self.acquires.load(Ordering::Relaxed)
    }

    /// Number of releases so far
    pub fn release_count(&self) -> u64 {
        self.releases.load(Ordering::Relaxed)
    }
}

impl Drop for InteractionLock {
    fn drop(&mut self) {
        // The grace timer dies with the lock; re-enable input now.
        if self.release_timer.cancel() {
            self.pointer.set_pointer_events(true);
            tracing::trace!("Pointer input re-enabled on shutdown");
        }
    }
}

/// Releases the interaction lock when dropped
///
/// Dropping covers every exit path: normal completion, cancellation of the
/// owning future, and unwinding.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct LockGuard {
    lock: Option<Arc<InteractionLock>>,
}

impl LockGuard {
    /// Release now instead of at end of scope
    pub fn release(mut self) {
        if let Some(lock) = self.lock.take() {
            lock.release();
        }
    }
}

impl Drop for LockGuard {
    fn drop(&mut self) {
        if let Some(lock) = self.lock.take() {
            lock.release();
        }
    }
}
