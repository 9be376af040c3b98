//! Recipe library
//!
//! Each recipe is a constant parameter record plus one shared shape
//! builder. Builders only ever produce `transform`/`opacity` keyframes and
//! always bracket them with compositor hints.

use super::descriptor::{
    AnimationDescriptor, ElementAnimation, ElementHandle, StyleDeclaration, StyleKeyframe,
    StyleProperty, ViewTransitionDelegate,
};
use super::easing::Easing;
use crate::navigation::NavigationDirection;
use crate::tokens::{curve, duration, geometry, z_index};
use i18n::TextDirection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transition recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeKind {
    /// iOS push/pop slide with parallax
    IosSlide,
    /// Android 8 and older
    AndroidFadeUp,
    /// Android 9
    AndroidOpenUp,
    /// Android 10 to 13
    AndroidZoom,
    /// Android 14 and newer
    AndroidFadeForward,
    /// Plain fade for web and desktop
    CrossFade,
    /// Hand-off to the browser view-transition primitive
    ViewTransition,
    /// Short fade used when the user asks for less motion
    ReducedMotion,
}

/// Constant parameters of a recipe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecipeParams {
    /// Duration in milliseconds
    pub duration_ms: u32,
    /// Root easing
    pub easing: Easing,
    /// Root easing while a gesture drives progress, if different
    pub gesture_easing: Option<Easing>,
}

impl RecipeParams {
    const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self { duration_ms, easing, gesture_easing: None }
    }

    /// Root easing for a transition
    pub fn easing_for(&self, gesture_driven: bool) -> Easing {
        match (gesture_driven, self.gesture_easing) {
            (true, Some(easing)) => easing,
            _ => self.easing,
        }
    }
}

const IOS_PARAMS: RecipeParams = RecipeParams {
    duration_ms: duration::IOS,
    easing: curve::IOS_FAST,
    gesture_easing: Some(curve::IOS_GESTURE),
};

impl RecipeKind {
    /// Every recipe
    pub const ALL: [RecipeKind; 8] = [
        RecipeKind::IosSlide,
        RecipeKind::AndroidFadeUp,
        RecipeKind::AndroidOpenUp,
        RecipeKind::AndroidZoom,
        RecipeKind::AndroidFadeForward,
        RecipeKind::CrossFade,
        RecipeKind::ViewTransition,
        RecipeKind::ReducedMotion,
    ];

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            RecipeKind::IosSlide => "ios_slide",
            RecipeKind::AndroidFadeUp => "android_fade_up",
            RecipeKind::AndroidOpenUp => "android_open_up",
            RecipeKind::AndroidZoom => "android_zoom",
            RecipeKind::AndroidFadeForward => "android_fade_forward",
            RecipeKind::CrossFade => "cross_fade",
            RecipeKind::ViewTransition => "view_transition",
            RecipeKind::ReducedMotion => "reduced_motion",
        }
    }

    /// Parameter record
    pub fn params(&self) -> RecipeParams {
        match self {
            RecipeKind::IosSlide => IOS_PARAMS,
            RecipeKind::AndroidFadeUp => RecipeParams::new(duration::ANDROID_FADE, curve::ANDROID_EASE),
            RecipeKind::AndroidOpenUp => {
                RecipeParams::new(duration::ANDROID_OPEN, curve::ANDROID_DECELERATE)
            }
            RecipeKind::AndroidZoom => RecipeParams::new(duration::ANDROID_ZOOM, curve::ANDROID_ZOOM),
            RecipeKind::AndroidFadeForward => {
                RecipeParams::new(duration::ANDROID_FORWARD, curve::ANDROID_EMPHASIZED)
            }
            RecipeKind::CrossFade => RecipeParams::new(duration::CROSS_FADE, curve::CROSS_FADE),
            RecipeKind::ViewTransition => {
                RecipeParams::new(duration::VIEW_TRANSITION, curve::VIEW_TRANSITION)
            }
            RecipeKind::ReducedMotion => {
                RecipeParams::new(duration::REDUCED_MOTION, curve::REDUCED_MOTION)
            }
        }
    }

    /// Build the descriptor for a request
    pub fn build(&self, request: &TransitionRequest) -> AnimationDescriptor {
        let params = self.params();
        let mut delegate = None;

        let elements = match self {
            RecipeKind::IosSlide => ios_slide(request),
            RecipeKind::AndroidFadeUp => fade_up(request),
            RecipeKind::AndroidOpenUp => open_up(request),
            RecipeKind::AndroidZoom => zoom(request),
            RecipeKind::AndroidFadeForward => fade_forward(request),
            RecipeKind::CrossFade => fade(request, 0.0),
            RecipeKind::ReducedMotion => fade(request, geometry::REDUCED_MOTION_START_OPACITY),
            RecipeKind::ViewTransition => {
                delegate = Some(ViewTransitionDelegate {
                    reveal: request.entering,
                    hide: request.leaving,
                });
                Vec::new()
            }
        };

        AnimationDescriptor {
            recipe: *self,
            total_duration_ms: params.duration_ms,
            root_easing: params.easing_for(request.gesture_driven),
            elements,
            delegate,
        }
    }
}

impl fmt::Display for RecipeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Input to a recipe builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRequest {
    /// Page being navigated to
    pub entering: Option<ElementHandle>,
    /// Page being navigated away from
    pub leaving: Option<ElementHandle>,
    /// Navigation direction
    pub direction: NavigationDirection,
    /// Document text direction
    pub text_direction: TextDirection,
    /// Progress is driven by a swipe gesture
    pub gesture_driven: bool,
}

impl TransitionRequest {
    /// Forward navigation in a left-to-right document
    pub fn forward(entering: Option<ElementHandle>, leaving: Option<ElementHandle>) -> Self {
        Self {
            entering,
            leaving,
            direction: NavigationDirection::Forward,
            text_direction: TextDirection::Ltr,
            gesture_driven: false,
        }
    }

    /// Set the navigation direction
    pub fn with_direction(mut self, direction: NavigationDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the document text direction
    pub fn with_text_direction(mut self, text_direction: TextDirection) -> Self {
        self.text_direction = text_direction;
        self
    }

    /// Mark the transition as gesture driven
    pub fn with_gesture(mut self, gesture_driven: bool) -> Self {
        self.gesture_driven = gesture_driven;
        self
    }

    fn is_back(&self) -> bool {
        self.direction == NavigationDirection::Back
    }

    /// Sign applied to horizontal offsets
    fn mirror(&self) -> f32 {
        if self.text_direction.is_rtl() {
            -1.0
        } else {
            1.0
        }
    }
}

// =============================================================================
// Compositor hints
// =============================================================================

const SNAPSHOT_PROPERTIES: [StyleProperty; 4] = [
    StyleProperty::WillChange,
    StyleProperty::Contain,
    StyleProperty::BackfaceVisibility,
    StyleProperty::TransformStyle,
];

/// Treat the page as a flat texture while it moves
fn snapshot_styles() -> [StyleDeclaration; 4] {
    [
        StyleDeclaration::new(StyleProperty::WillChange, "transform, opacity"),
        StyleDeclaration::new(StyleProperty::Contain, "strict"),
        StyleDeclaration::new(StyleProperty::BackfaceVisibility, "hidden"),
        StyleDeclaration::new(StyleProperty::TransformStyle, "preserve-3d"),
    ]
}

fn with_snapshot(animation: ElementAnimation) -> ElementAnimation {
    animation.before_styles(snapshot_styles()).after_clear_styles(SNAPSHOT_PROPERTIES)
}

fn with_fade_hint(animation: ElementAnimation) -> ElementAnimation {
    animation
        .before_styles([StyleDeclaration::new(StyleProperty::WillChange, "opacity")])
        .after_clear_styles([StyleProperty::WillChange])
}

fn with_edge_shadow(animation: ElementAnimation) -> ElementAnimation {
    animation
        .before_styles([StyleDeclaration::new(StyleProperty::BoxShadow, geometry::IOS_EDGE_SHADOW)])
        .after_clear_styles([StyleProperty::BoxShadow])
}

fn pair(
    request: &TransitionRequest,
    entering: impl FnOnce(ElementAnimation) -> ElementAnimation,
    leaving: impl FnOnce(ElementAnimation) -> ElementAnimation,
) -> Vec<ElementAnimation> {
    let mut elements = Vec::with_capacity(2);
    if let Some(el) = request.entering {
        elements.push(entering(ElementAnimation::entering(el)));
    }
    if let Some(el) = request.leaving {
        elements.push(leaving(ElementAnimation::leaving(el)));
    }
    elements
}

// =============================================================================
// Shapes
// =============================================================================

const ORIGIN: (f32, f32) = (0.0, 0.0);

fn ios_slide(request: &TransitionRequest) -> Vec<ElementAnimation> {
    let off_screen = (geometry::IOS_OFF_SCREEN * request.mirror(), 0.0);
    let parallax = (-geometry::IOS_PARALLAX * request.mirror(), 0.0);

    if request.is_back() {
        // The page underneath comes forward; the top page slides away.
        pair(
            request,
            |a| {
                with_snapshot(a)
                    .z_order(z_index::BELOW, Some(z_index::PROMOTED))
                    .from_to(StyleKeyframe::translate(parallax, ORIGIN))
            },
            |a| {
                with_edge_shadow(with_snapshot(a).z_order(z_index::TOP, None))
                    .from_to(StyleKeyframe::translate(ORIGIN, off_screen))
            },
        )
    } else {
        pair(
            request,
            |a| {
                with_edge_shadow(with_snapshot(a).z_order(z_index::TOP, None))
                    .from_to(StyleKeyframe::translate(off_screen, ORIGIN))
            },
            |a| {
                with_snapshot(a)
                    .z_order(z_index::BELOW, None)
                    .from_to(StyleKeyframe::translate(ORIGIN, parallax))
            },
        )
    }
}

fn fade_up(request: &TransitionRequest) -> Vec<ElementAnimation> {
    let lowered = (0.0, geometry::FADE_UP_OFFSET);

    if request.is_back() {
        pair(
            request,
            |a| with_snapshot(a).from_to(StyleKeyframe::opacity(0.0, 1.0)),
            |a| {
                with_snapshot(a)
                    .from_to(StyleKeyframe::translate(ORIGIN, lowered))
                    .from_to(StyleKeyframe::opacity(1.0, 0.0))
            },
        )
    } else {
        pair(
            request,
            |a| {
                with_snapshot(a)
                    .from_to(StyleKeyframe::translate(lowered, ORIGIN))
                    .from_to(StyleKeyframe::opacity(0.0, 1.0))
            },
            |a| with_snapshot(a).from_to(StyleKeyframe::opacity(1.0, 0.0)),
        )
    }
}

fn open_up(request: &TransitionRequest) -> Vec<ElementAnimation> {
    let offset = geometry::OPEN_UP_OFFSET;
    let dimmed = geometry::OPEN_UP_DIMMED_OPACITY;
    let back = request.is_back();

    let enter_from = (0.0, if back { -offset } else { offset });
    let leave_to = (0.0, if back { offset } else { -offset });

    pair(
        request,
        |a| {
            with_snapshot(a)
                .from_to(StyleKeyframe::translate(enter_from, ORIGIN))
                .from_to(StyleKeyframe::opacity(if back { dimmed } else { 0.0 }, 1.0))
        },
        |a| {
            with_snapshot(a)
                .from_to(StyleKeyframe::translate(ORIGIN, leave_to))
                .from_to(StyleKeyframe::opacity(1.0, if back { 0.0 } else { dimmed }))
        },
    )
}

fn zoom(request: &TransitionRequest) -> Vec<ElementAnimation> {
    let (enter_scale, leave_scale) = if request.is_back() {
        (geometry::ZOOM_SCALE_EXIT, geometry::ZOOM_SCALE_ENTER)
    } else {
        (geometry::ZOOM_SCALE_ENTER, geometry::ZOOM_SCALE_EXIT)
    };

    pair(
        request,
        |a| {
            with_snapshot(a)
                .from_to(StyleKeyframe::scale(enter_scale, 1.0))
                .from_to(StyleKeyframe::opacity(0.0, 1.0))
        },
        |a| {
            with_snapshot(a)
                .from_to(StyleKeyframe::scale(1.0, leave_scale))
                .from_to(StyleKeyframe::opacity(1.0, 0.0))
        },
    )
}

fn fade_forward(request: &TransitionRequest) -> Vec<ElementAnimation> {
    // Forward travels toward the reading start; back is its time reverse.
    let travel = if request.is_back() { -1.0 } else { 1.0 };
    let offset = geometry::FADE_FORWARD_OFFSET * request.mirror() * travel;

    pair(
        request,
        |a| {
            with_snapshot(a)
                .from_to(StyleKeyframe::translate((offset, 0.0), ORIGIN))
                .from_to(StyleKeyframe::opacity(0.0, 1.0))
        },
        |a| {
            with_snapshot(a)
                .from_to(StyleKeyframe::translate(ORIGIN, (-offset, 0.0)))
                .from_to(StyleKeyframe::opacity(1.0, 0.0))
        },
    )
}

fn fade(request: &TransitionRequest, entering_from: f32) -> Vec<ElementAnimation> {
    pair(
        request,
        |a| with_fade_hint(a).from_to(StyleKeyframe::opacity(entering_from, 1.0)),
        |a| with_fade_hint(a).from_to(StyleKeyframe::opacity(1.0, 0.0)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::descriptor::{AnimatedProperty, StyleValue, PAGE_INVISIBLE_CLASS};

    const ENTERING: ElementHandle = ElementHandle(1);
    const LEAVING: ElementHandle = ElementHandle(2);

    fn request(direction: NavigationDirection, text: TextDirection) -> TransitionRequest {
        TransitionRequest::forward(Some(ENTERING), Some(LEAVING))
            .with_direction(direction)
            .with_text_direction(text)
    }

    fn transform(animation: &ElementAnimation) -> StyleKeyframe {
        *animation.keyframe(AnimatedProperty::Transform).unwrap()
    }

    fn opacity(animation: &ElementAnimation) -> StyleKeyframe {
        *animation.keyframe(AnimatedProperty::Opacity).unwrap()
    }

    #[test]
    fn test_params_table() {
        let expected = [
            (RecipeKind::IosSlide, 500, "cubic-bezier(0.32, 0.72, 0, 1)"),
            (RecipeKind::AndroidFadeUp, 300, "cubic-bezier(0.4, 0, 0.2, 1)"),
            (RecipeKind::AndroidOpenUp, 550, "cubic-bezier(0, 0, 0.2, 1)"),
            (RecipeKind::AndroidZoom, 280, "cubic-bezier(0.35, 0.91, 0.33, 0.97)"),
            (RecipeKind::AndroidFadeForward, 350, "cubic-bezier(0.2, 0, 0, 1)"),
            (RecipeKind::CrossFade, 200, "ease-out"),
            (RecipeKind::ViewTransition, 400, "ease-in-out"),
            (RecipeKind::ReducedMotion, 120, "ease-in-out"),
        ];

        for (kind, ms, easing) in expected {
            let params = kind.params();
            assert_eq!(params.duration_ms, ms, "{}", kind);
            assert_eq!(params.easing.to_string(), easing, "{}", kind);
        }
    }

    #[test]
    fn test_ios_gesture_easing() {
        let req = request(NavigationDirection::Back, TextDirection::Ltr).with_gesture(true);
        let descriptor = RecipeKind::IosSlide.build(&req);
        assert_eq!(descriptor.root_easing.to_string(), "cubic-bezier(0.1, 0.1, 0.1, 1)");

        // Only the iOS recipe has a gesture curve
        let descriptor = RecipeKind::AndroidZoom.build(&req);
        assert_eq!(descriptor.root_easing, curve::ANDROID_ZOOM);
    }

    #[test]
    fn test_every_recipe_reveals_entering_page() {
        for kind in RecipeKind::ALL {
            for direction in [NavigationDirection::Forward, NavigationDirection::Back] {
                let descriptor = kind.build(&request(direction, TextDirection::Ltr));
                assert!(descriptor.total_duration_ms > 0);

                if kind == RecipeKind::ViewTransition {
                    assert!(descriptor.elements.is_empty());
                    assert_eq!(descriptor.delegate.unwrap().reveal, Some(ENTERING));
                    continue;
                }

                let entering = descriptor.entering().unwrap();
                assert!(entering
                    .class_mutations
                    .remove_before
                    .contains(&PAGE_INVISIBLE_CLASS.to_string()));
            }
        }
    }

    #[test]
    fn test_hints_are_cleared_after() {
        for kind in RecipeKind::ALL {
            let descriptor = kind.build(&request(NavigationDirection::Forward, TextDirection::Ltr));
            for element in &descriptor.elements {
                assert!(!element.before_styles.is_empty(), "{} sets hints", kind);
                for style in &element.before_styles {
                    assert!(
                        element.after_clear_styles.contains(&style.property),
                        "{} leaves {} behind",
                        kind,
                        style.property.css_name()
                    );
                }
            }
        }
    }

    #[test]
    fn test_missing_handles_omit_side() {
        let req = TransitionRequest::forward(None, Some(LEAVING));
        let descriptor = RecipeKind::AndroidZoom.build(&req);
        assert_eq!(descriptor.elements.len(), 1);
        assert!(descriptor.entering().is_none());
        assert!(descriptor.leaving().is_some());

        let descriptor = RecipeKind::IosSlide.build(&TransitionRequest::forward(None, None));
        assert!(descriptor.elements.is_empty());
    }

    #[test]
    fn test_ios_forward_ltr() {
        let descriptor = RecipeKind::IosSlide.build(&request(NavigationDirection::Forward, TextDirection::Ltr));
        let entering = descriptor.entering().unwrap();
        let leaving = descriptor.leaving().unwrap();

        assert_eq!(transform(entering), StyleKeyframe::translate((100.0, 0.0), ORIGIN));
        assert_eq!(transform(leaving), StyleKeyframe::translate(ORIGIN, (-33.0, 0.0)));
        assert_eq!(entering.z_index.unwrap().during, 50);
        assert_eq!(leaving.z_index.unwrap().during, 1);
        assert!(entering.before_styles.iter().any(|s| s.property == StyleProperty::BoxShadow));
        assert!(!leaving.before_styles.iter().any(|s| s.property == StyleProperty::BoxShadow));
        assert_eq!(transform(entering).from.to_string(), "translate3d(100%, 0, 0)");
    }

    #[test]
    fn test_ios_back_promotes_entering_page() {
        let descriptor = RecipeKind::IosSlide.build(&request(NavigationDirection::Back, TextDirection::Ltr));
        let entering = descriptor.entering().unwrap();
        let leaving = descriptor.leaving().unwrap();

        assert_eq!(entering.z_index.unwrap().during, 1);
        assert_eq!(entering.z_index.unwrap().after, Some(100));
        assert_eq!(leaving.z_index.unwrap().during, 50);
        assert!(leaving.after_clear_styles.contains(&StyleProperty::BoxShadow));
        assert_eq!(transform(leaving), StyleKeyframe::translate(ORIGIN, (100.0, 0.0)));
    }

    #[test]
    fn test_rtl_mirrors_horizontal_offsets() {
        for kind in [RecipeKind::IosSlide, RecipeKind::AndroidFadeForward] {
            for direction in [NavigationDirection::Forward, NavigationDirection::Back] {
                let ltr = kind.build(&request(direction, TextDirection::Ltr));
                let rtl = kind.build(&request(direction, TextDirection::Rtl));

                for (l, r) in ltr.elements.iter().zip(&rtl.elements) {
                    let (l, r) = (transform(l), transform(r));
                    let lx = l.from.translate_x().unwrap() + l.to.translate_x().unwrap();
                    let rx = r.from.translate_x().unwrap() + r.to.translate_x().unwrap();
                    assert_ne!(lx, 0.0);
                    assert_eq!(lx, -rx, "{} {:?}", kind, direction);
                }
            }
        }
    }

    #[test]
    fn test_vertical_recipes_ignore_text_direction() {
        for kind in [RecipeKind::AndroidFadeUp, RecipeKind::AndroidOpenUp, RecipeKind::AndroidZoom] {
            let ltr = kind.build(&request(NavigationDirection::Forward, TextDirection::Ltr));
            let rtl = kind.build(&request(NavigationDirection::Forward, TextDirection::Rtl));
            assert_eq!(ltr, rtl);
        }
    }

    #[test]
    fn test_back_is_time_reverse_of_forward() {
        for kind in [RecipeKind::IosSlide, RecipeKind::AndroidFadeForward] {
            for text in [TextDirection::Ltr, TextDirection::Rtl] {
                let forward = kind.build(&request(NavigationDirection::Forward, text));
                let back = kind.build(&request(NavigationDirection::Back, text));

                let fwd_enter = transform(forward.entering().unwrap());
                let fwd_leave = transform(forward.leaving().unwrap());
                let back_enter = transform(back.entering().unwrap());
                let back_leave = transform(back.leaving().unwrap());

                assert_eq!((fwd_enter.from, fwd_enter.to), (back_leave.to, back_leave.from), "{} {}", kind, text);
                assert_eq!((fwd_leave.from, fwd_leave.to), (back_enter.to, back_enter.from), "{} {}", kind, text);
            }
        }
    }

    #[test]
    fn test_fade_forward_offsets() {
        let descriptor =
            RecipeKind::AndroidFadeForward.build(&request(NavigationDirection::Forward, TextDirection::Ltr));
        assert_eq!(transform(descriptor.entering().unwrap()).from, StyleValue::Translate { x: 20.0, y: 0.0 });
        assert_eq!(transform(descriptor.leaving().unwrap()).to, StyleValue::Translate { x: -20.0, y: 0.0 });

        let descriptor =
            RecipeKind::AndroidFadeForward.build(&request(NavigationDirection::Back, TextDirection::Rtl));
        assert_eq!(transform(descriptor.entering().unwrap()).from, StyleValue::Translate { x: 20.0, y: 0.0 });
        assert_eq!(transform(descriptor.leaving().unwrap()).to, StyleValue::Translate { x: -20.0, y: 0.0 });
    }

    #[test]
    fn test_open_up_paths() {
        let forward = RecipeKind::AndroidOpenUp.build(&request(NavigationDirection::Forward, TextDirection::Ltr));
        assert_eq!(transform(forward.entering().unwrap()), StyleKeyframe::translate((0.0, 4.0), ORIGIN));
        assert_eq!(opacity(forward.leaving().unwrap()), StyleKeyframe::opacity(1.0, 0.6));

        let back = RecipeKind::AndroidOpenUp.build(&request(NavigationDirection::Back, TextDirection::Ltr));
        assert_eq!(transform(back.entering().unwrap()), StyleKeyframe::translate((0.0, -4.0), ORIGIN));
        assert_eq!(opacity(back.entering().unwrap()), StyleKeyframe::opacity(0.6, 1.0));
        assert_eq!(opacity(back.leaving().unwrap()), StyleKeyframe::opacity(1.0, 0.0));
    }

    #[test]
    fn test_fade_up_paths() {
        let forward = RecipeKind::AndroidFadeUp.build(&request(NavigationDirection::Forward, TextDirection::Ltr));
        assert!(forward.leaving().unwrap().keyframe(AnimatedProperty::Transform).is_none());
        assert_eq!(transform(forward.entering().unwrap()), StyleKeyframe::translate((0.0, 20.0), ORIGIN));

        let back = RecipeKind::AndroidFadeUp.build(&request(NavigationDirection::Back, TextDirection::Ltr));
        assert!(back.entering().unwrap().keyframe(AnimatedProperty::Transform).is_none());
        assert_eq!(transform(back.leaving().unwrap()), StyleKeyframe::translate(ORIGIN, (0.0, 20.0)));
    }

    #[test]
    fn test_zoom_back_swaps_scales() {
        let forward = RecipeKind::AndroidZoom.build(&request(NavigationDirection::Forward, TextDirection::Ltr));
        assert_eq!(transform(forward.entering().unwrap()), StyleKeyframe::scale(0.88, 1.0));
        assert_eq!(transform(forward.leaving().unwrap()), StyleKeyframe::scale(1.0, 1.05));

        let back = RecipeKind::AndroidZoom.build(&request(NavigationDirection::Back, TextDirection::Ltr));
        assert_eq!(transform(back.entering().unwrap()), StyleKeyframe::scale(1.05, 1.0));
        assert_eq!(transform(back.leaving().unwrap()), StyleKeyframe::scale(1.0, 0.88));
    }

    #[test]
    fn test_reduced_motion_is_opacity_only() {
        let descriptor = RecipeKind::ReducedMotion.build(&request(NavigationDirection::Forward, TextDirection::Ltr));
        assert_eq!(opacity(descriptor.entering().unwrap()), StyleKeyframe::opacity(0.5, 1.0));
        assert_eq!(opacity(descriptor.leaving().unwrap()), StyleKeyframe::opacity(1.0, 0.0));
        for element in &descriptor.elements {
            assert!(element.keyframe(AnimatedProperty::Transform).is_none());
        }
    }

    #[test]
    fn test_view_transition_delegate() {
        let descriptor = RecipeKind::ViewTransition.build(&request(NavigationDirection::Forward, TextDirection::Ltr));
        assert_eq!(
            descriptor.delegate,
            Some(ViewTransitionDelegate { reveal: Some(ENTERING), hide: Some(LEAVING) })
        );
        assert_eq!(descriptor.total_duration_ms, 400);
    }

    #[test]
    fn test_descriptor_serializes() {
        let descriptor = RecipeKind::IosSlide.build(&request(NavigationDirection::Forward, TextDirection::Ltr));
        let json = descriptor.to_json().unwrap();
        assert!(json.contains("\"recipe\":\"ios_slide\""));
        assert!(json.contains("\"totalDurationMs\":500"));
        assert!(json.contains("ion-page-invisible"));
    }
}
