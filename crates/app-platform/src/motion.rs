//! Reduced-motion preference tracking
//!
//! The initial value is read synchronously from the host media query; the
//! host then forwards every change notification to
//! [`ReducedMotionMonitor::notify_change`]. Nothing here polls.

use crate::host::HostDocument;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;

/// Live view of the user's motion preferences
///
/// A low-power flag set by the app is folded into the same answer: either
/// one asks the transition engine for the reduced-motion recipe. The watch
/// channel carries that combined answer.
pub struct ReducedMotionMonitor {
    media: AtomicBool,
    low_power: AtomicBool,
    requested_tx: watch::Sender<bool>,
}

impl ReducedMotionMonitor {
    /// Create a monitor seeded with an initial media preference
    pub fn new(initial: bool) -> Self {
        let (requested_tx, _) = watch::channel(initial);
        Self { media: AtomicBool::new(initial), low_power: AtomicBool::new(false), requested_tx }
    }

    /// Create a monitor seeded from the host media query
    pub fn from_host(host: &dyn HostDocument) -> Self {
        Self::new(host.prefers_reduced_motion())
    }

    /// Forward a media-preference change notification
    pub fn notify_change(&self, matches: bool) {
        if self.media.swap(matches, Ordering::SeqCst) != matches {
            tracing::debug!("Reduced-motion preference changed to {}", matches);
            self.publish();
        }
    }

    /// Whether the media query currently asks for reduced motion
    pub fn media_preference(&self) -> bool {
        self.media.load(Ordering::SeqCst)
    }

    /// Enable or disable low-power mode
    pub fn set_low_power_mode(&self, enabled: bool) {
        if self.low_power.swap(enabled, Ordering::SeqCst) != enabled {
            tracing::debug!("Low-power mode set to {}", enabled);
            self.publish();
        }
    }

    /// Whether low-power mode is enabled
    pub fn low_power_mode(&self) -> bool {
        self.low_power.load(Ordering::SeqCst)
    }

    /// Whether transitions should use the reduced-motion recipe
    pub fn requested(&self) -> bool {
        self.media_preference() || self.low_power_mode()
    }

    /// Subscribe to changes of [`requested`](Self::requested)
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.requested_tx.subscribe()
    }

    fn publish(&self) {
        // Read inside the closure so concurrent updates publish in order.
        self.requested_tx.send_if_modified(|current| {
            let requested = self.requested();
            if *current == requested {
                false
            } else {
                *current = requested;
                true
            }
        });
    }
}

impl Default for ReducedMotionMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockHostDocument;

    #[test]
    fn test_initial_value_from_host() {
        let mut host = MockHostDocument::new();
        host.expect_prefers_reduced_motion().times(1).returning(|| true);

        let monitor = ReducedMotionMonitor::from_host(&host);
        assert!(monitor.requested());
    }

    #[test]
    fn test_change_notification_updates_value() {
        let monitor = ReducedMotionMonitor::new(false);
        assert!(!monitor.requested());

        monitor.notify_change(true);
        assert!(monitor.requested());

        monitor.notify_change(false);
        assert!(!monitor.requested());
    }

    #[test]
    fn test_low_power_folds_into_request() {
        let monitor = ReducedMotionMonitor::new(false);
        monitor.set_low_power_mode(true);

        assert!(monitor.low_power_mode());
        assert!(!monitor.media_preference());
        assert!(monitor.requested());
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let monitor = ReducedMotionMonitor::new(false);
        let mut rx = monitor.subscribe();

        monitor.notify_change(true);
        rx.changed().await.unwrap();
        assert!(*rx.borrow());
    }

    #[tokio::test]
    async fn test_low_power_reaches_subscribers() {
        let monitor = ReducedMotionMonitor::new(false);
        let mut rx = monitor.subscribe();

        monitor.set_low_power_mode(true);
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());

        // Media preference flipping on does not change the combined answer
        monitor.notify_change(true);
        assert!(!rx.has_changed().unwrap());

        monitor.notify_change(false);
        monitor.set_low_power_mode(false);
        rx.changed().await.unwrap();
        assert!(!*rx.borrow());
    }

    #[test]
    fn test_duplicate_notification_is_not_a_change() {
        let monitor = ReducedMotionMonitor::new(true);
        let rx = monitor.subscribe();

        monitor.notify_change(true);
        assert!(!rx.has_changed().unwrap());
    }
}
