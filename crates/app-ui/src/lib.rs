//! Transition engine for Native Shell
//!
//! This crate decides how the shell animates between pages and keeps the
//! UI well-behaved while it does.
//!
//! # Modules
//!
//! - [`tokens`] - Durations, curves, geometry and delays
//! - [`transition`] - Recipe selection, descriptors and the runtime engine
//! - [`interaction_lock`] - Pointer lock around running transitions
//! - [`progress`] - Navigation loading affordance
//! - [`navigation`] - Navigation direction and the iOS edge-swipe back gesture
//!
//! # Example
//!
//! ```rust
//! use app_platform::Platform;
//! use app_ui::navigation::NavigationDirection;
//! use app_ui::transition::{select_recipe, ElementHandle, EnvironmentSnapshot, NavigationEvent, RecipeKind};
//!
//! let env = EnvironmentSnapshot {
//!     is_native: true,
//!     platform: Platform::Android,
//!     os_major_version: 15,
//!     ..Default::default()
//! };
//! let event = NavigationEvent::forward(ElementHandle(1), ElementHandle(2));
//!
//! let recipe = select_recipe(&event, &env);
//! assert_eq!(recipe, RecipeKind::AndroidFadeForward);
//!
//! let descriptor = recipe.build(&event.request(env.text_direction));
//! assert_eq!(descriptor.total_duration_ms, 350);
//! assert_eq!(event.direction, NavigationDirection::Forward);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod interaction_lock;
pub mod navigation;
pub mod progress;
mod timer;
pub mod tokens;
pub mod transition;

pub use interaction_lock::{InteractionLock, LockGuard, PointerInput};
pub use navigation::{
    BackNavigator, EdgeSwipeBack, EdgeSwipeConfig, NavigationDirection, SwipeDirection, SwipeSample,
};
pub use progress::{NavigationHooks, NavigationProgress, ProgressBar, ProgressConfig, ProgressGuard};
pub use transition::{
    AnimationDescriptor, BuilderOptions, EnvironmentSnapshot, HostAnimator, NavigationEvent,
    PlaybackOutcome, RecipeKind, TransitionEngine,
};

/// Errors reported by the host animation engine
#[derive(Debug, thiserror::Error)]
pub enum TransitionError {
    /// The host engine failed to play a descriptor
    #[error("Host animation error: {0}")]
    Host(String),

    /// A descriptor could not be handed across the host boundary
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for transition operations
pub type Result<T> = std::result::Result<T, TransitionError>;
