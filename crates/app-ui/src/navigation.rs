//! Navigation primitives for Native Shell
//!
//! This module provides:
//! - Navigation direction as reported by the routing collaborator
//! - The iOS edge-swipe back gesture

use app_platform::Platform;
use i18n::{DirectionSource, TextDirection};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::tokens::gesture;

// =============================================================================
// Navigation Direction
// =============================================================================

/// Direction of a route change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationDirection {
    /// Push onto the stack
    #[default]
    Forward,
    /// Pop off the stack
    Back,
}

// =============================================================================
// Edge Swipe
// =============================================================================

/// Direction reported by the swipe primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    /// Finger moving left
    Left,
    /// Finger moving right
    Right,
    /// Finger moving up
    Up,
    /// Finger moving down
    Down,
    /// Below threshold
    None,
}

/// One observation from the swipe primitive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeSample {
    /// Dominant direction
    pub direction: SwipeDirection,
    /// Horizontal travel since the touch started (px, signed)
    pub length_x: f32,
    /// Horizontal coordinate where the touch started (px)
    pub start_x: f32,
    /// A swipe is in progress
    pub is_swiping: bool,
}

/// Router back-navigation seam
#[cfg_attr(test, mockall::automock)]
pub trait BackNavigator: Send + Sync {
    /// Whether there is history to go back to
    fn can_go_back(&self) -> bool;

    /// Navigate back one entry
    fn back(&self);
}

/// Edge-swipe tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EdgeSwipeConfig {
    /// Horizontal travel before a sample counts as a swipe (px)
    pub threshold: f32,
    /// Edge zone as a fraction of the screen width
    pub edge_zone_ratio: f32,
    /// Minimum horizontal travel (px)
    pub min_distance: f32,
    /// Cooldown between triggers (ms)
    pub cooldown_ms: u64,
}

impl Default for EdgeSwipeConfig {
    fn default() -> Self {
        Self {
            threshold: gesture::SWIPE_THRESHOLD,
            edge_zone_ratio: gesture::EDGE_ZONE_RATIO,
            min_distance: gesture::MIN_SWIPE_DISTANCE,
            cooldown_ms: gesture::COOLDOWN.as_millis() as u64,
        }
    }
}

impl EdgeSwipeConfig {
    fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

/// iOS edge-swipe back gesture
///
/// Starting a swipe in the edge zone on the reading-start side and moving
/// toward the reading end navigates back. The edge flips with the document
/// direction. Other platforms rely on their own back affordances.
pub struct EdgeSwipeBack {
    config: EdgeSwipeConfig,
    platform: Platform,
    direction: Arc<dyn DirectionSource>,
    navigator: Arc<dyn BackNavigator>,
    enabled: AtomicBool,
    cooldown_until: Mutex<Option<Instant>>,
}

impl EdgeSwipeBack {
    /// Create a gesture handler
    pub fn new(
        config: EdgeSwipeConfig,
        platform: Platform,
        direction: Arc<dyn DirectionSource>,
        navigator: Arc<dyn BackNavigator>,
    ) -> Self {
        Self {
            config,
            platform,
            direction,
            navigator,
            enabled: AtomicBool::new(true),
            cooldown_until: Mutex::new(None),
        }
    }

    /// Whether the gesture is active on this platform
    pub fn is_active(&self) -> bool {
        self.platform == Platform::Ios && self.enabled.load(Ordering::Relaxed)
    }

    /// Enable or disable the gesture
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Navigate back, or log when already at the root
    pub fn navigate_back(&self) -> bool {
        if self.navigator.can_go_back() {
            self.navigator.back();
            true
        } else {
            tracing::debug!("Root of navigation stack, ignoring back");
            false
        }
    }

    /// Feed a swipe sample; returns true when it triggered a back navigation
    pub fn on_swipe(&self, sample: &SwipeSample, screen_width: f32) -> bool {
        if !self.is_active() || !sample.is_swiping {
            return false;
        }

        // Travel below the primitive threshold is not a swipe yet.
        if sample.length_x.abs() < self.config.threshold {
            return false;
        }

        let mut cooldown = self.cooldown_until.lock();
        let now = Instant::now();
        if cooldown.is_some_and(|until| now < until) {
            return false;
        }

        if !self.navigator.can_go_back() {
            return false;
        }

        let rtl = self.direction.text_direction() == TextDirection::Rtl;
        let edge_zone = screen_width * self.config.edge_zone_ratio;
        let from_edge = if rtl {
            sample.start_x > screen_width - edge_zone
        } else {
            sample.start_x < edge_zone
        };
        let back_direction = if rtl { SwipeDirection::Left } else { SwipeDirection::Right };

        if sample.direction == back_direction
            && from_edge
            && sample.length_x.abs() > self.config.min_distance
        {
            *cooldown = Some(now + self.config.cooldown());
            drop(cooldown);
            tracing::debug!(rtl, "Edge swipe back");
            return self.navigate_back();
        }

        false
    }
}
