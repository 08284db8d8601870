//! `go` command implementation of `DependencySource`.
//!
//! Listing runs `go list -m -u -json all`, whose stdout is a stream of
//! concatenated JSON objects (one per module, no surrounding array).
//! Updating runs `go get -u <path>@<version>` and then lists again.

use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::process::Command;

use crate::core::modules::{Module, sort_modules};
use crate::source::{DependencySource, SourceError};

const LIST_ARGS: &[&str] = &["list", "-m", "-u", "-json", "all"];

/// Parses `go list -m -json` output into the update list: drops the main
/// module and anything without an update, then sorts for display.
pub fn parse_module_stream(stdout: &[u8]) -> Result<Vec<Module>, SourceError> {
    let mut modules = Vec::new();
    for record in serde_json::Deserializer::from_slice(stdout).into_iter::<Module>() {
        let module = record.map_err(|e| SourceError::Parse(e.to_string()))?;
        if module.is_updatable() {
            modules.push(module);
        }
    }
    sort_modules(&mut modules);
    Ok(modules)
}

/// Runs the `go` tool, optionally inside a specific module directory.
pub struct GoModules {
    go_binary: PathBuf,
    dir: Option<PathBuf>,
}

impl GoModules {
    pub fn new(go_binary: impl Into<PathBuf>) -> Self {
        Self {
            go_binary: go_binary.into(),
            dir: None,
        }
    }

    /// Runs every command with `dir` as its working directory.
    pub fn with_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.dir = dir;
        self
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.go_binary);
        cmd.args(args).stdin(Stdio::null());
        if let Some(ref dir) = self.dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Human-readable command line for logs and error messages.
    fn describe(&self, args: &[&str]) -> String {
        format!("{} {}", self.go_binary.display(), args.join(" "))
    }

    fn check_status(&self, args: &[&str], status: ExitStatus) -> Result<(), SourceError> {
        if status.success() {
            return Ok(());
        }
        let command = self.describe(args);
        warn!("`{}` failed: {}", command, status);
        Err(SourceError::Exit {
            command,
            code: status.code(),
        })
    }

    fn spawn_error(&self, args: &[&str], err: std::io::Error) -> SourceError {
        SourceError::Spawn {
            command: self.describe(args),
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl DependencySource for GoModules {
    fn name(&self) -> &str {
        "go"
    }

    async fn load(&self) -> Result<Vec<Module>, SourceError> {
        info!("Listing modules: {}", self.describe(LIST_ARGS));

        // stderr goes straight to the terminal, unmodified. `output()` would
        // pipe it, so spawn and wait instead.
        let child = self
            .command(LIST_ARGS)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| self.spawn_error(LIST_ARGS, e))?;
        let output = child
            .wait_with_output()
            .await
            .map_err(|e| self.spawn_error(LIST_ARGS, e))?;
        self.check_status(LIST_ARGS, output.status)?;

        debug!("go list produced {} bytes", output.stdout.len());
        let modules = parse_module_stream(&output.stdout)?;
        info!("{} modules have updates", modules.len());
        Ok(modules)
    }

    async fn apply_update(&self, module: &Module) -> Result<Vec<Module>, SourceError> {
        let target = module
            .update_target()
            .ok_or_else(|| SourceError::NoUpdate(module.path.clone()))?;
        let args = ["get", "-u", target.as_str()];
        info!("Updating module: {}", self.describe(&args));

        let status = self
            .command(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| self.spawn_error(&args, e))?;
        self.check_status(&args, status)?;

        self.load().await
    }
}
