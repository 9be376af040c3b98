//! Transition runtime
//!
//! Owns the per-context state the selector reads (cached platform, live
//! reduced-motion preference, live text direction) and runs descriptors on
//! the host engine one navigation at a time.

use super::descriptor::{AnimationDescriptor, ElementHandle};
use super::recipes::RecipeKind;
use super::selector::{select_recipe, EnvironmentSnapshot, NavigationEvent};
use crate::interaction_lock::InteractionLock;
use crate::navigation::NavigationDirection;
use crate::TransitionError;
use app_platform::{EnvironmentProbe, HostDocument, Platform, ReducedMotionMonitor};
use async_trait::async_trait;
use i18n::DirectionSource;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How a played transition ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackOutcome {
    /// Ran to the end
    Finished,
    /// Abandoned mid-way (e.g. a released swipe)
    Cancelled,
}

/// Host animation engine
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostAnimator: Send + Sync {
    /// Play a descriptor to completion or cancellation
    async fn play(&self, descriptor: &AnimationDescriptor) -> Result<PlaybackOutcome, TransitionError>;
}

/// Options the router passes to the navigation builder callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuilderOptions {
    /// Page being navigated to
    pub entering_el: Option<ElementHandle>,
    /// Page being navigated away from
    pub leaving_el: Option<ElementHandle>,
    /// Navigation direction
    pub direction: NavigationDirection,
    /// Progress is driven by a swipe gesture
    pub progress_animation: bool,
}

impl From<BuilderOptions> for NavigationEvent {
    fn from(options: BuilderOptions) -> Self {
        Self {
            entering: options.entering_el,
            leaving: options.leaving_el,
            direction: options.direction,
            gesture_driven: options.progress_animation,
        }
    }
}

/// Per-context transition runtime
pub struct TransitionEngine {
    probe: EnvironmentProbe,
    document: Arc<dyn HostDocument>,
    motion: Arc<ReducedMotionMonitor>,
    direction: Arc<dyn DirectionSource>,
    lock: Arc<InteractionLock>,
}

impl TransitionEngine {
    /// Create an engine
    pub fn new(
        probe: EnvironmentProbe,
        document: Arc<dyn HostDocument>,
        motion: Arc<ReducedMotionMonitor>,
        direction: Arc<dyn DirectionSource>,
        lock: Arc<InteractionLock>,
    ) -> Self {
        Self { probe, document, motion, direction, lock }
    }

    /// Current environment
    pub fn snapshot(&self) -> EnvironmentSnapshot {
        let info = self.probe.platform();
        let os_major_version = match info.platform {
            Platform::Android => self.probe.android_version(),
            _ => 0,
        };

        EnvironmentSnapshot {
            is_native: info.is_native,
            platform: info.platform,
            os_major_version,
            reduced_motion_requested: self.motion.requested(),
            text_direction: self.direction.text_direction(),
            view_transitions_supported: self.document.supports_view_transitions(),
        }
    }

    /// Recipe for an event in the current environment
    pub fn select(&self, event: &NavigationEvent) -> RecipeKind {
        select_recipe(event, &self.snapshot())
    }

    /// Select a recipe and build its descriptor
    pub fn describe(&self, event: &NavigationEvent) -> AnimationDescriptor {
        let env = self.snapshot();
        let recipe = select_recipe(event, &env);
        tracing::debug!(
            recipe = %recipe,
            direction = ?event.direction,
            gesture = event.gesture_driven,
            native = env.is_native,
            platform = ?env.platform,
            "Selected transition"
        );
        recipe.build(&event.request(env.text_direction))
    }

    /// Navigation builder callback registered with the router
    pub fn build(&self, base: Option<ElementHandle>, options: BuilderOptions) -> AnimationDescriptor {
        tracing::trace!(?base, "Building navigation animation");
        self.describe(&options.into())
    }

    /// Play one navigation on the host engine
    ///
    /// Waits for the previous transition to release the interaction lock,
    /// then holds the lock for the whole playback. The lock is released
    /// whether playback finishes, is cancelled, fails, or this future is
    /// dropped.
    pub async fn run(
        &self,
        event: &NavigationEvent,
        animator: &dyn HostAnimator,
    ) -> Result<PlaybackOutcome, TransitionError> {
        self.lock.wait_released().await;
        let descriptor = self.describe(event);
        let _guard = self.lock.acquire();

        match animator.play(&descriptor).await {
            Ok(outcome) => {
                tracing::debug!(recipe = %descriptor.recipe, ?outcome, "Transition ended");
                Ok(outcome)
            }
            Err(e) => {
                tracing::warn!(recipe = %descriptor.recipe, "Transition failed: {}", e);
                Err(e)
            }
        }
    }

    /// Reduced-motion monitor
    pub fn motion(&self) -> &ReducedMotionMonitor {
        &self.motion
    }

    /// Interaction lock
    pub fn lock(&self) -> &Arc<InteractionLock> {
        &self.lock
    }
}
