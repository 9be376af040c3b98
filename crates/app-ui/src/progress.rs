//! Navigation progress indicator
//!
//! Desktop layouts drive a thin top progress bar. Mobile layouts flip a
//! loading flag, but only once a navigation has been running for a short
//! while, so fast navigations never flash a spinner.

use crate::timer::TimerSlot;
use crate::tokens::{breakpoints, timing};
use app_platform::HostDocument;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Host seam for the desktop progress bar
#[cfg_attr(test, mockall::automock)]
pub trait ProgressBar: Send + Sync {
    /// Apply bar settings
    fn configure(&self, show_spinner: bool, speed_ms: u32);

    /// Start (or restart) the bar
    fn start(&self);

    /// Complete and hide the bar
    fn done(&self);
}

/// Router lifecycle hooks
pub trait NavigationHooks: Send + Sync {
    /// Navigation is about to start
    fn before_each(&self);

    /// Navigation finished
    fn after_each(&self);

    /// Navigation failed
    fn on_error(&self);
}

/// Progress indicator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressConfig {
    /// Minimum viewport width for the desktop bar (px)
    pub desktop_breakpoint: u32,
    /// Delay before the mobile flag is raised (ms)
    pub show_delay_ms: u64,
    /// Delay before the mobile flag is lowered (ms)
    pub hide_delay_ms: u64,
    /// Desktop bar speed (ms)
    pub bar_speed_ms: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            desktop_breakpoint: breakpoints::DESKTOP,
            show_delay_ms: timing::PROGRESS_SHOW_DELAY.as_millis() as u64,
            hide_delay_ms: timing::PROGRESS_HIDE_DELAY.as_millis() as u64,
            bar_speed_ms: timing::PROGRESS_BAR_SPEED_MS,
        }
    }
}

/// Loading affordance driven by router hooks
pub struct NavigationProgress {
    config: ProgressConfig,
    host: Arc<dyn HostDocument>,
    bar: Arc<dyn ProgressBar>,
    loading_tx: Arc<watch::Sender<bool>>,
    show_timer: TimerSlot,
    hide_timer: TimerSlot,
}

impl NavigationProgress {
    /// Create the indicator and configure the desktop bar
    pub fn new(config: ProgressConfig, host: Arc<dyn HostDocument>, bar: Arc<dyn ProgressBar>) -> Self {
        bar.configure(false, config.bar_speed_ms);
        let (loading_tx, _) = watch::channel(false);

        Self {
            config,
            host,
            bar,
            loading_tx: Arc::new(loading_tx),
            show_timer: TimerSlot::new(),
            hide_timer: TimerSlot::new(),
        }
    }

    fn is_desktop(&self) -> bool {
        self.host.viewport_width() >= self.config.desktop_breakpoint
    }

    /// A navigation started
    pub fn start(&self) {
        if self.is_desktop() {
            self.show_timer.cancel();
            self.bar.start();
            return;
        }

        self.hide_timer.cancel();
        let loading_tx = Arc::clone(&self.loading_tx);
        self.show_timer.schedule(Duration::from_millis(self.config.show_delay_ms), move || {
            loading_tx.send_replace(true);
        });
    }

    /// A navigation finished or failed
    pub fn stop(&self) {
        if self.is_desktop() {
            self.bar.done();
        }

        if self.show_timer.cancel() {
            tracing::trace!("Navigation finished before the loading flag was shown");
        }

        if self.is_mobile_loading() {
            let loading_tx = Arc::clone(&self.loading_tx);
            self.hide_timer.schedule(Duration::from_millis(self.config.hide_delay_ms), move || {
                loading_tx.send_replace(false);
            });
        }
    }

    /// Start tracking one navigation
    ///
    /// The returned guard stops the indicator when dropped, so a navigation
    /// future that is abandoned mid-flight never leaves the flag raised.
    pub fn track(&self) -> ProgressGuard<'_> {
        self.before_each();
        ProgressGuard { progress: Some(self) }
    }

    /// Whether the mobile loading flag is raised
    pub fn is_mobile_loading(&self) -> bool {
        *self.loading_tx.borrow()
    }

    /// Subscribe to the mobile loading flag
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.loading_tx.subscribe()
    }
}

impl NavigationHooks for NavigationProgress {
    fn before_each(&self) {
        self.start();
    }

    fn after_each(&self) {
        self.stop();
    }

    fn on_error(&self) {
        tracing::debug!("Navigation failed, stopping progress indicator");
        self.stop();
    }
}

/// Stops the progress indicator when dropped
#[must_use = "the indicator stops as soon as the guard is dropped"]
pub struct ProgressGuard<'a> {
    progress: Option<&'a NavigationProgress>,
}

impl ProgressGuard<'_> {
    /// The navigation finished
    pub fn finish(mut self) {
        if let Some(progress) = self.progress.take() {
            progress.after_each();
        }
    }

    /// The navigation failed
    pub fn fail(mut self) {
        if let Some(progress) = self.progress.take() {
            progress.on_error();
        }
    }
}

impl Drop for ProgressGuard<'_> {
    fn drop(&mut self) {
        if let Some(progress) = self.progress.take() {
            tracing::debug!("Navigation abandoned, stopping progress indicator");
            progress.stop();
        }
    }
}
