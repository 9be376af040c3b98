//! Animation descriptors handed to the host engine
//!
//! A descriptor is a complete, immutable description of one page
//! transition. Keyframes can only animate `transform` and `opacity`: the
//! property enum has no other variants, so a recipe cannot introduce a
//! layout-triggering animation by accident.

use super::easing::Easing;
use super::recipes::RecipeKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Class that keeps a freshly mounted page hidden until its transition starts
pub const PAGE_INVISIBLE_CLASS: &str = "ion-page-invisible";

/// Opaque handle to a page element owned by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementHandle(pub u64);

/// Which side of the navigation an element is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementRole {
    /// Page being navigated to
    Entering,
    /// Page being navigated away from
    Leaving,
}

/// Compositor-cheap properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimatedProperty {
    /// `transform`
    Transform,
    /// `opacity`
    Opacity,
}

impl AnimatedProperty {
    /// CSS property name
    pub fn css_name(&self) -> &'static str {
        match self {
            AnimatedProperty::Transform => "transform",
            AnimatedProperty::Opacity => "opacity",
        }
    }
}

/// A transform or opacity value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StyleValue {
    /// `translate3d(x%, y%, 0)`
    Translate {
        /// Horizontal offset in percent
        x: f32,
        /// Vertical offset in percent
        y: f32,
    },
    /// `scale3d(s, s, 1)`
    Scale {
        /// Uniform scale factor
        factor: f32,
    },
    /// Opacity between 0 and 1
    Opacity {
        /// Opacity value
        value: f32,
    },
}

impl StyleValue {
    /// The property this value animates
    pub fn property(&self) -> AnimatedProperty {
        match self {
            StyleValue::Translate { .. } | StyleValue::Scale { .. } => AnimatedProperty::Transform,
            StyleValue::Opacity { .. } => AnimatedProperty::Opacity,
        }
    }

    /// Horizontal translation, if this is a translate value
    pub fn translate_x(&self) -> Option<f32> {
        match self {
            StyleValue::Translate { x, .. } => Some(*x),
            _ => None,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Translate { x, y } => {
                write!(f, "translate3d({}, {}, 0)", Percent(*x), Percent(*y))
            }
            StyleValue::Scale { factor } => write!(f, "scale3d({}, {}, 1)", factor, factor),
            StyleValue::Opacity { value } => write!(f, "{}", value),
        }
    }
}

/// Renders `0` bare and anything else with a percent sign
struct Percent(f32);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}%", self.0)
        }
    }
}

/// One animated property going from one value to another
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleKeyframe {
    /// Value at the start of the transition
    pub from: StyleValue,
    /// Value at the end of the transition
    pub to: StyleValue,
}

impl StyleKeyframe {
    /// Translate between two offsets (percent)
    pub fn translate(from: (f32, f32), to: (f32, f32)) -> Self {
        Self {
            from: StyleValue::Translate { x: from.0, y: from.1 },
            to: StyleValue::Translate { x: to.0, y: to.1 },
        }
    }

    /// Scale between two uniform factors
    pub fn scale(from: f32, to: f32) -> Self {
        Self { from: StyleValue::Scale { factor: from }, to: StyleValue::Scale { factor: to } }
    }

    /// Fade between two opacities
    pub fn opacity(from: f32, to: f32) -> Self {
        Self { from: StyleValue::Opacity { value: from }, to: StyleValue::Opacity { value: to } }
    }

    /// Animated property
    pub fn property(&self) -> AnimatedProperty {
        self.from.property()
    }
}

/// Static styles applied around a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleProperty {
    /// `will-change`
    WillChange,
    /// `contain`
    Contain,
    /// `backface-visibility`
    BackfaceVisibility,
    /// `transform-style`
    TransformStyle,
    /// `box-shadow`
    BoxShadow,
}

impl StyleProperty {
    /// CSS property name
    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::WillChange => "will-change",
            StyleProperty::Contain => "contain",
            StyleProperty::BackfaceVisibility => "backface-visibility",
            StyleProperty::TransformStyle => "transform-style",
            StyleProperty::BoxShadow => "box-shadow",
        }
    }
}

/// A static style declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDeclaration {
    /// Property
    pub property: StyleProperty,
    /// CSS value
    pub value: String,
}

impl StyleDeclaration {
    /// Create a declaration
    pub fn new(property: StyleProperty, value: impl Into<String>) -> Self {
        Self { property, value: value.into() }
    }
}

/// Z-index applied for the duration of a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZOrder {
    /// Z-index while animating
    pub during: i32,
    /// Z-index applied once the transition settles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<i32>,
}

/// Class list changes around a transition
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMutations {
    /// Classes added before the first frame
    pub add_before: Vec<String>,
    /// Classes removed before the first frame
    pub remove_before: Vec<String>,
    /// Classes added after the last frame
    pub add_after: Vec<String>,
    /// Classes removed after the last frame
    pub remove_after: Vec<String>,
}

/// Animation of one page element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementAnimation {
    /// Target element
    pub element: ElementHandle,
    /// Side of the navigation
    pub role: ElementRole,
    /// Animated properties, in application order
    pub keyframes: Vec<StyleKeyframe>,
    /// Z-index override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<ZOrder>,
    /// Styles applied before the first frame
    pub before_styles: Vec<StyleDeclaration>,
    /// Styles cleared after the last frame
    pub after_clear_styles: Vec<StyleProperty>,
    /// Class list changes
    pub class_mutations: ClassMutations,
}

impl ElementAnimation {
    /// Animation for the entering page
    ///
    /// The page-invisible marker is always removed before the first frame.
    pub fn entering(element: ElementHandle) -> Self {
        let mut animation = Self::new(element, ElementRole::Entering);
        animation.class_mutations.remove_before.push(PAGE_INVISIBLE_CLASS.to_string());
        animation
    }

    /// Animation for the leaving page
    pub fn leaving(element: ElementHandle) -> Self {
        Self::new(element, ElementRole::Leaving)
    }

    fn new(element: ElementHandle, role: ElementRole) -> Self {
        Self {
            element,
            role,
            keyframes: Vec::new(),
            z_index: None,
            before_styles: Vec::new(),
            after_clear_styles: Vec::new(),
            class_mutations: ClassMutations::default(),
        }
    }

    /// Add an animated property
    pub fn from_to(mut self, keyframe: StyleKeyframe) -> Self {
        self.keyframes.push(keyframe);
        self
    }

    /// Apply static styles before the first frame
    pub fn before_styles<I>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = StyleDeclaration>,
    {
        self.before_styles.extend(styles);
        self
    }

    /// Clear static styles after the last frame
    pub fn after_clear_styles<I>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = StyleProperty>,
    {
        self.after_clear_styles.extend(properties);
        self
    }

    /// Set the z-index override
    pub fn z_order(mut self, during: i32, after: Option<i32>) -> Self {
        self.z_index = Some(ZOrder { during, after });
        self
    }

    /// Keyframe for a given property
    pub fn keyframe(&self, property: AnimatedProperty) -> Option<&StyleKeyframe> {
        self.keyframes.iter().find(|k| k.property() == property)
    }
}

/// Instructions for a host-side view transition
///
/// The host snapshots both pages, removes the page-invisible marker from
/// the entering page and hides the leaving page (`display: none`). Without
/// native support the host applies the same two mutations directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewTransitionDelegate {
    /// Page to reveal
    pub reveal: Option<ElementHandle>,
    /// Page to hide
    pub hide: Option<ElementHandle>,
}

/// A complete, parameterized page transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationDescriptor {
    /// Recipe that produced this descriptor
    pub recipe: RecipeKind,
    /// Total duration in milliseconds
    pub total_duration_ms: u32,
    /// Root timing function
    pub root_easing: Easing,
    /// Per-element animations
    pub elements: Vec<ElementAnimation>,
    /// View-transition hand-off, for the delegate recipe
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate: Option<ViewTransitionDelegate>,
}

impl AnimationDescriptor {
    /// Animation of the entering page, if present
    pub fn entering(&self) -> Option<&ElementAnimation> {
        self.elements.iter().find(|e| e.role == ElementRole::Entering)
    }

    /// Animation of the leaving page, if present
    pub fn leaving(&self) -> Option<&ElementAnimation> {
        self.elements.iter().find(|e| e.role == ElementRole::Leaving)
    }

    /// Serialize for the host engine
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
