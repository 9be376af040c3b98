//! Page transitions
//!
//! - [`selector`] picks a recipe for a navigation
//! - [`recipes`] turns a recipe into an [`AnimationDescriptor`]
//! - [`engine`] ties both to the live environment and the host animator

pub mod descriptor;
pub mod easing;
pub mod engine;
pub mod recipes;
pub mod selector;

pub use descriptor::{
    AnimatedProperty, AnimationDescriptor, ElementAnimation, ElementHandle, ElementRole,
    StyleDeclaration, StyleKeyframe, StyleProperty, StyleValue, ViewTransitionDelegate, ZOrder,
    PAGE_INVISIBLE_CLASS,
};
pub use easing::Easing;
pub use engine::{BuilderOptions, HostAnimator, PlaybackOutcome, TransitionEngine};
pub use recipes::{RecipeKind, RecipeParams, TransitionRequest};
pub use selector::{select_recipe, EnvironmentSnapshot, NavigationEvent};
