//! Native Shell
//!
//! Wires the shell's components together once at startup: the durable
//! preference store, the locale store, platform probing, the transition
//! engine with its interaction lock, the navigation progress indicator and
//! the iOS edge-swipe gesture.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod logging;
mod shell;

pub use config::ShellConfig;
pub use shell::{HostBindings, Shell};

/// Result type for shell operations
pub type Result<T> = std::result::Result<T, ShellError>;

/// Errors raised while bootstrapping the shell
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Durable store could not be opened
    #[error("Storage error: {0}")]
    Storage(#[from] storage::KvError),

    /// Configuration could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// A navigation's transition failed
    #[error("Transition error: {0}")]
    Transition(#[from] app_ui::TransitionError),
}
