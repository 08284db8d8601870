//! # Dependency Sources
//!
//! Where the update list comes from. The controller only ever sees the
//! `DependencySource` trait; `GoModules` is the implementation that talks
//! to the `go` tool.
//!
//! Both operations are slow (they run external processes), so they are
//! async and the TUI runs them off the event loop.

pub mod go;

use std::fmt;

use async_trait::async_trait;

use crate::core::modules::Module;

pub use go::GoModules;

/// Errors that can occur while listing or updating modules.
/// Every variant is fatal to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The command could not be started (missing binary, permissions).
    Spawn { command: String, message: String },
    /// The command ran but did not exit successfully. `code` is `None`
    /// when the process was killed by a signal.
    Exit { command: String, code: Option<i32> },
    /// The listing output was not a valid stream of module records.
    Parse(String),
    /// An update was requested for a module that has none.
    NoUpdate(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Spawn { command, message } => {
                write!(f, "failed to run `{command}`: {message}")
            }
            SourceError::Exit {
                command,
                code: Some(code),
            } => write!(f, "`{command}` exited with status {code}"),
            SourceError::Exit { command, code: None } => {
                write!(f, "`{command}` was terminated by a signal")
            }
            SourceError::Parse(msg) => write!(f, "malformed module record: {msg}"),
            SourceError::NoUpdate(path) => write!(f, "no update available for {path}"),
        }
    }
}

impl std::error::Error for SourceError {}

#[async_trait]
pub trait DependencySource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// Lists the modules that have an update available, in display order.
    async fn load(&self) -> Result<Vec<Module>, SourceError>;

    /// Applies the update for `module`, then lists again.
    async fn apply_update(&self, module: &Module) -> Result<Vec<Module>, SourceError>;
}
