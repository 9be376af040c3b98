//! Host capability seams
//!
//! The shell runs inside something else: a packaged native container or a
//! plain browser tab. Everything it needs to know about that container goes
//! through these two traits.

/// Native-container capabilities
#[cfg_attr(test, mockall::automock)]
pub trait HostPlatform: Send + Sync {
    /// Whether the app runs as a compiled native app
    ///
    /// `None` when the capability API itself is unavailable.
    fn is_native_platform(&self) -> Option<bool>;

    /// Platform name as reported by the container (`"ios"`, `"android"`, `"web"`)
    fn platform_name(&self) -> Option<String>;

    /// Raw OS identification string (a user agent)
    fn user_agent(&self) -> Option<String>;
}

/// Document / environment capabilities
#[cfg_attr(test, mockall::automock)]
pub trait HostDocument: Send + Sync {
    /// Current value of the reduced-motion media preference
    fn prefers_reduced_motion(&self) -> bool;

    /// Whether the document exposes a native view-transition primitive
    fn supports_view_transitions(&self) -> bool;

    /// Viewport width in CSS pixels
    fn viewport_width(&self) -> u32;
}

/// Plain-data host used by desktop builds and tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHost {
    /// Reported native flag (`None` = capability missing)
    pub native: Option<bool>,
    /// Reported platform name
    pub platform: Option<String>,
    /// Reported user agent
    pub user_agent: Option<String>,
    /// Reduced-motion preference
    pub reduced_motion: bool,
    /// View-transition support
    pub view_transitions: bool,
    /// Viewport width
    pub viewport_width: u32,
}

impl StaticHost {
    /// A browser tab with no native container
    pub fn web() -> Self {
        Self {
            native: Some(false),
            platform: Some("web".to_string()),
            viewport_width: 1280,
            ..Default::default()
        }
    }

    /// A packaged iOS app
    pub fn ios() -> Self {
        Self {
            native: Some(true),
            platform: Some("ios".to_string()),
            user_agent: Some(
                "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15".to_string(),
            ),
            viewport_width: 390,
            ..Default::default()
        }
    }

    /// A packaged Android app on the given major OS version
    pub fn android(version: u32) -> Self {
        Self {
            native: Some(true),
            platform: Some("android".to_string()),
            user_agent: Some(format!(
                "Mozilla/5.0 (Linux; Android {version}; Pixel) AppleWebKit/537.36 Chrome/124.0 Mobile"
            )),
            viewport_width: 412,
            ..Default::default()
        }
    }

    /// Set the reduced-motion preference
    pub fn with_reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    /// Set view-transition support
    pub fn with_view_transitions(mut self, supported: bool) -> Self {
        self.view_transitions = supported;
        self
    }

    /// Set the viewport width
    pub fn with_viewport_width(mut self, width: u32) -> Self {
        self.viewport_width = width;
        self
    }
}

impl HostPlatform for StaticHost {
    fn is_native_platform(&self) -> Option<bool> {
        self.native
    }

    fn platform_name(&self) -> Option<String> {
        self.platform.clone()
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }
}

impl HostDocument for StaticHost {
    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    fn supports_view_transitions(&self) -> bool {
        self.view_transitions
    }

    fn viewport_width(&self) -> u32 {
        self.viewport_width
    }
}
