//! Transition selection
//!
//! A pure decision over one navigation event and one environment snapshot.
//! The rules are checked in order and the first match wins.

use super::descriptor::ElementHandle;
use super::recipes::{RecipeKind, TransitionRequest};
use crate::navigation::NavigationDirection;
use app_platform::Platform;
use i18n::TextDirection;
use serde::{Deserialize, Serialize};

/// One route change, as raised by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEvent {
    /// Page being navigated to
    pub entering: Option<ElementHandle>,
    /// Page being navigated away from
    pub leaving: Option<ElementHandle>,
    /// Navigation direction
    pub direction: NavigationDirection,
    /// Progress is driven by a swipe gesture
    pub gesture_driven: bool,
}

impl NavigationEvent {
    /// A forward push between two pages
    pub fn forward(entering: ElementHandle, leaving: ElementHandle) -> Self {
        Self {
            entering: Some(entering),
            leaving: Some(leaving),
            direction: NavigationDirection::Forward,
            gesture_driven: false,
        }
    }

    /// A back pop between two pages
    pub fn back(entering: ElementHandle, leaving: ElementHandle) -> Self {
        Self { direction: NavigationDirection::Back, ..Self::forward(entering, leaving) }
    }

    /// Mark the event as gesture driven
    pub fn with_gesture(mut self, gesture_driven: bool) -> Self {
        self.gesture_driven = gesture_driven;
        self
    }

    /// Recipe builder input for this event
    pub fn request(&self, text_direction: TextDirection) -> TransitionRequest {
        TransitionRequest {
            entering: self.entering,
            leaving: self.leaving,
            direction: self.direction,
            text_direction,
            gesture_driven: self.gesture_driven,
        }
    }
}

/// Everything the selector knows about the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentSnapshot {
    /// Running inside a packaged native container
    pub is_native: bool,
    /// Platform family
    pub platform: Platform,
    /// Android major version; 0 when unknown or not Android
    pub os_major_version: u32,
    /// Reduced motion or low power mode
    pub reduced_motion_requested: bool,
    /// Document text direction
    pub text_direction: TextDirection,
    /// Browser view-transition primitive is available
    pub view_transitions_supported: bool,
}

/// Pick the recipe for a navigation
pub fn select_recipe(event: &NavigationEvent, env: &EnvironmentSnapshot) -> RecipeKind {
    if env.reduced_motion_requested {
        return RecipeKind::ReducedMotion;
    }

    if !env.is_native {
        // Web never imitates native physics.
        return if !event.gesture_driven && env.view_transitions_supported {
            RecipeKind::ViewTransition
        } else {
            RecipeKind::CrossFade
        };
    }

    if env.platform == Platform::Ios || event.gesture_driven {
        return RecipeKind::IosSlide;
    }

    if env.platform == Platform::Android {
        return match env.os_major_version {
            v if v >= 14 => RecipeKind::AndroidFadeForward,
            v if v >= 10 => RecipeKind::AndroidZoom,
            9 => RecipeKind::AndroidOpenUp,
            _ => RecipeKind::AndroidFadeUp,
        };
    }

    RecipeKind::CrossFade
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event() -> NavigationEvent {
        NavigationEvent::forward(ElementHandle(1), ElementHandle(2))
    }

    fn native(platform: Platform, version: u32) -> EnvironmentSnapshot {
        EnvironmentSnapshot {
            is_native: true,
            platform,
            os_major_version: version,
            ..Default::default()
        }
    }

    #[test]
    fn test_reduced_motion_dominates() {
        let environments = [
            native(Platform::Ios, 0),
            native(Platform::Android, 15),
            native(Platform::Desktop, 0),
            EnvironmentSnapshot { view_transitions_supported: true, ..Default::default() },
        ];

        for env in environments {
            let env = EnvironmentSnapshot { reduced_motion_requested: true, ..env };
            for gesture in [false, true] {
                assert_eq!(select_recipe(&event().with_gesture(gesture), &env), RecipeKind::ReducedMotion);
            }
        }
    }

    #[test]
    fn test_web_uses_view_transition_when_supported() {
        let env = EnvironmentSnapshot { view_transitions_supported: true, ..Default::default() };
        assert_eq!(select_recipe(&event(), &env), RecipeKind::ViewTransition);

        // Gestures on web never hand off
        assert_eq!(select_recipe(&event().with_gesture(true), &env), RecipeKind::CrossFade);

        let env = EnvironmentSnapshot::default();
        assert_eq!(select_recipe(&event(), &env), RecipeKind::CrossFade);
    }

    #[test]
    fn test_web_ignores_platform_family() {
        // Mobile Safari in a browser tab is still web
        let env = EnvironmentSnapshot { platform: Platform::Ios, ..Default::default() };
        assert_eq!(select_recipe(&event(), &env), RecipeKind::CrossFade);
    }

    #[test]
    fn test_ios_slide() {
        assert_eq!(select_recipe(&event(), &native(Platform::Ios, 0)), RecipeKind::IosSlide);
        assert_eq!(
            select_recipe(&event().with_gesture(true), &native(Platform::Ios, 0)),
            RecipeKind::IosSlide
        );
    }

    #[test]
    fn test_gesture_on_android_uses_slide() {
        assert_eq!(
            select_recipe(&event().with_gesture(true), &native(Platform::Android, 14)),
            RecipeKind::IosSlide
        );
    }

    #[test]
    fn test_android_version_partition() {
        for version in 0..=40 {
            let expected = if version >= 14 {
                RecipeKind::AndroidFadeForward
            } else if version >= 10 {
                RecipeKind::AndroidZoom
            } else if version == 9 {
                RecipeKind::AndroidOpenUp
            } else {
                RecipeKind::AndroidFadeUp
            };
            assert_eq!(
                select_recipe(&event(), &native(Platform::Android, version)),
                expected,
                "Android {}",
                version
            );
        }
    }

    #[test]
    fn test_native_desktop_falls_back_to_cross_fade() {
        assert_eq!(select_recipe(&event(), &native(Platform::Desktop, 0)), RecipeKind::CrossFade);
    }

    #[test]
    fn test_event_request_carries_direction() {
        let request = NavigationEvent::back(ElementHandle(3), ElementHandle(4))
            .with_gesture(true)
            .request(TextDirection::Rtl);

        assert_eq!(request.entering, Some(ElementHandle(3)));
        assert_eq!(request.direction, NavigationDirection::Back);
        assert_eq!(request.text_direction, TextDirection::Rtl);
        assert!(request.gesture_driven);
    }
}
