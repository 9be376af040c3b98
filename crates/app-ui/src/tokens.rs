//! Design tokens for Native Shell transitions
//!
//! This module provides the fixed numeric tables behind the page
//! transitions: durations, easing curves, geometry, z-order layers,
//! breakpoints and the timing of the shell's loading affordances.

use crate::transition::easing::Easing;
use std::time::Duration;

// =============================================================================
// Duration Tokens
// =============================================================================

/// Transition duration tokens (in milliseconds)
pub mod duration {
    /// iOS push/pop slide (500ms)
    pub const IOS: u32 = 500;
    /// Android fade-up, pre-9 (300ms)
    pub const ANDROID_FADE: u32 = 300;
    /// Android open-up, Android 9 (550ms)
    pub const ANDROID_OPEN: u32 = 550;
    /// Android zoom, Android 10-13 (280ms)
    pub const ANDROID_ZOOM: u32 = 280;
    /// Android fade-forward, Android 14+ (350ms)
    pub const ANDROID_FORWARD: u32 = 350;
    /// Plain cross-fade on web and desktop (200ms)
    pub const CROSS_FADE: u32 = 200;
    /// Browser view-transition hand-off (400ms)
    pub const VIEW_TRANSITION: u32 = 400;
    /// Reduced-motion fade (120ms)
    pub const REDUCED_MOTION: u32 = 120;
}

// =============================================================================
// Easing Tokens
// =============================================================================

/// Easing curves
pub mod curve {
    use super::Easing;

    /// iOS navigation curve
    pub const IOS_FAST: Easing = Easing::cubic_bezier(0.32, 0.72, 0.0, 1.0);
    /// iOS curve while a swipe gesture drives progress
    pub const IOS_GESTURE: Easing = Easing::cubic_bezier(0.1, 0.1, 0.1, 1.0);
    /// Material standard easing
    pub const ANDROID_EASE: Easing = Easing::cubic_bezier(0.4, 0.0, 0.2, 1.0);
    /// Material emphasized easing
    pub const ANDROID_EMPHASIZED: Easing = Easing::cubic_bezier(0.2, 0.0, 0.0, 1.0);
    /// Material decelerate easing
    pub const ANDROID_DECELERATE: Easing = Easing::cubic_bezier(0.0, 0.0, 0.2, 1.0);
    /// Android 10 zoom easing
    pub const ANDROID_ZOOM: Easing = Easing::cubic_bezier(0.35, 0.91, 0.33, 0.97);
    /// Cross-fade easing
    pub const CROSS_FADE: Easing = Easing::EaseOut;
    /// View-transition hand-off easing
    pub const VIEW_TRANSITION: Easing = Easing::EaseInOut;
    /// Reduced-motion easing
    pub const REDUCED_MOTION: Easing = Easing::EaseInOut;
}

// =============================================================================
// Geometry Tokens
// =============================================================================

/// Offsets (percent of the page box), scales and opacities
pub mod geometry {
    /// iOS page travel (a full page width)
    pub const IOS_OFF_SCREEN: f32 = 100.0;
    /// iOS parallax of the page underneath
    pub const IOS_PARALLAX: f32 = 33.0;
    /// Android fade-up vertical offset
    pub const FADE_UP_OFFSET: f32 = 20.0;
    /// Android open-up vertical offset
    pub const OPEN_UP_OFFSET: f32 = 4.0;
    /// Android open-up opacity of the page underneath
    pub const OPEN_UP_DIMMED_OPACITY: f32 = 0.6;
    /// Android zoom scale of a page entering the front
    pub const ZOOM_SCALE_ENTER: f32 = 0.88;
    /// Android zoom scale of a page leaving the front
    pub const ZOOM_SCALE_EXIT: f32 = 1.05;
    /// Android fade-forward horizontal offset
    pub const FADE_FORWARD_OFFSET: f32 = 20.0;
    /// Reduced-motion starting opacity of the entering page
    pub const REDUCED_MOTION_START_OPACITY: f32 = 0.5;
    /// iOS edge shadow on the top page
    pub const IOS_EDGE_SHADOW: &str = "-5px 0 25px rgba(0,0,0,0.15)";
}

// =============================================================================
// Z-Index Tokens
// =============================================================================

/// Page layers during a transition
pub mod z_index {
    /// Page underneath
    pub const BELOW: i32 = 1;
    /// Page on top, travelling
    pub const TOP: i32 = 50;
    /// Page promoted after a back transition settles
    pub const PROMOTED: i32 = 100;
}

// =============================================================================
// Breakpoint Tokens
// =============================================================================

/// Breakpoint widths
pub mod breakpoints {
    /// Desktop layout (`min-width: 1024px`)
    pub const DESKTOP: u32 = 1024;

    /// Check if width uses the desktop layout
    pub fn is_desktop(width: u32) -> bool {
        width >= DESKTOP
    }
}

// =============================================================================
// Timing Tokens
// =============================================================================

/// Delays for the shell's own affordances
pub mod timing {
    use super::Duration;

    /// Grace period before pointer input comes back after a transition
    pub const LOCK_RELEASE_GRACE: Duration = Duration::from_millis(50);
    /// Delay before the mobile loading affordance appears
    pub const PROGRESS_SHOW_DELAY: Duration = Duration::from_millis(150);
    /// Delay before the mobile loading affordance hides
    pub const PROGRESS_HIDE_DELAY: Duration = Duration::from_millis(50);
    /// Desktop progress bar animation speed (ms)
    pub const PROGRESS_BAR_SPEED_MS: u32 = 500;
}

// =============================================================================
// Gesture Tokens
// =============================================================================

/// Edge-swipe back gesture
pub mod gesture {
    use super::Duration;

    /// Distance before the swipe primitive reports a swipe (px)
    pub const SWIPE_THRESHOLD: f32 = 50.0;
    /// Edge zone as a fraction of the screen width
    pub const EDGE_ZONE_RATIO: f32 = 0.05;
    /// Minimum horizontal travel to trigger back (px)
    pub const MIN_SWIPE_DISTANCE: f32 = 30.0;
    /// Cooldown between two triggered back navigations
    pub const COOLDOWN: Duration = Duration::from_millis(300);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_are_positive() {
        for ms in [
            duration::IOS,
            duration::ANDROID_FADE,
            duration::ANDROID_OPEN,
            duration::ANDROID_ZOOM,
            duration::ANDROID_FORWARD,
            duration::CROSS_FADE,
            duration::VIEW_TRANSITION,
            duration::REDUCED_MOTION,
        ] {
            assert!(ms > 0);
        }
    }

    #[test]
    fn test_reduced_motion_is_shortest() {
        assert!(duration::REDUCED_MOTION < duration::CROSS_FADE);
        assert!(duration::REDUCED_MOTION < duration::ANDROID_ZOOM);
    }

    #[test]
    fn test_desktop_breakpoint() {
        assert!(!breakpoints::is_desktop(1023));
        assert!(breakpoints::is_desktop(1024));
        assert!(breakpoints::is_desktop(1920));
    }

    #[test]
    fn test_z_layers_ordered() {
        assert!(z_index::BELOW < z_index::TOP);
        assert!(z_index::TOP < z_index::PROMOTED);
    }

    #[test]
    fn test_curve_css() {
        assert_eq!(curve::IOS_FAST.to_string(), "cubic-bezier(0.32, 0.72, 0, 1)");
        assert_eq!(curve::CROSS_FADE.to_string(), "ease-out");
    }
}
