//! Platform probing for Native Shell
//!
//! This crate answers the environment questions the transition engine asks
//! on every navigation: which shell am I running in, which OS version, and
//! is the user asking for reduced motion. Host capabilities are reached
//! through the traits in [`host`], so everything here runs unchanged under
//! tests, on desktop and inside a packaged mobile shell.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod host;
pub mod motion;
pub mod probe;

pub use host::{HostDocument, HostPlatform, StaticHost};
pub use motion::ReducedMotionMonitor;
pub use probe::{detect_platform, parse_android_version, EnvironmentProbe, Platform, PlatformInfo};
