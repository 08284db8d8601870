//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.modup/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::LevelFilter;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ModupConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub go_binary: Option<String>,
    pub tick_interval_ms: Option<u64>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

/// Values given on the command line (None = flag not passed).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub go_binary: Option<PathBuf>,
    pub module_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_GO_BINARY: &str = "go";
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;
pub const MIN_TICK_INTERVAL_MS: u64 = 10;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "modup.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub go_binary: PathBuf,
    /// Directory the `go` commands run in. None = current directory.
    pub module_dir: Option<PathBuf>,
    pub tick_interval: Duration,
    pub log_level: LevelFilter,
    /// None when there is no home directory to put the log in.
    pub log_path: Option<PathBuf>,
    /// Settings that were rejected and replaced by defaults. Logged once
    /// the logger exists.
    pub warnings: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the loaded config came from. Config loads before logging starts,
/// so `main` logs this afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// No home directory; defaults only.
    NoHome,
    /// No file existed; a commented default was written.
    Generated(PathBuf),
    /// No file existed and writing the default failed.
    NotGenerated { path: PathBuf, reason: String },
    File(PathBuf),
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOrigin::NoHome => {
                write!(f, "Could not determine home directory, using default config")
            }
            ConfigOrigin::Generated(path) => {
                write!(f, "No config file found, generated default at {}", path.display())
            }
            ConfigOrigin::NotGenerated { path, reason } => write!(
                f,
                "No config file found, failed to write default at {}: {}",
                path.display(),
                reason
            ),
            ConfigOrigin::File(path) => write!(f, "Loaded config from {}", path.display()),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.modup/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".modup"))
}

/// Returns the path to `~/.modup/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.modup/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ModupConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<(ModupConfig, ConfigOrigin), ConfigError> {
    let Some(path) = config_path() else {
        return Ok((ModupConfig::default(), ConfigOrigin::NoHome));
    };
    load_config_from(&path)
}

/// Same as `load_config`, for an explicit path.
pub fn load_config_from(path: &Path) -> Result<(ModupConfig, ConfigOrigin), ConfigError> {
    if !path.exists() {
        let origin = match generate_default_config(path) {
            Ok(()) => ConfigOrigin::Generated(path.to_path_buf()),
            Err(e) => ConfigOrigin::NotGenerated {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        };
        return Ok((ModupConfig::default(), origin));
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    Ok((config, ConfigOrigin::File(path.to_path_buf())))
}

pub fn parse_config(contents: &str) -> Result<ModupConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# modup configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# go_binary = "go"             # Or set MODUP_GO, or pass --go
# tick_interval_ms = 100       # Busy spinner frame interval
# log_level = "info"           # off, error, warn, info, debug, trace (MODUP_LOG, --log-level)
# log_file = "modup.log"       # Relative paths are resolved against ~/.modup/
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ModupConfig, cli: &CliOverrides) -> ResolvedConfig {
    // go binary: CLI → env → config → default
    let go_binary = cli
        .go_binary
        .clone()
        .or_else(|| std::env::var("MODUP_GO").ok().map(PathBuf::from))
        .or_else(|| config.general.go_binary.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GO_BINARY));

    let tick_ms = config
        .general
        .tick_interval_ms
        .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
        .max(MIN_TICK_INTERVAL_MS);

    let mut warnings = Vec::new();

    // Log level: CLI → env → config → default
    let log_level = match cli
        .log_level
        .clone()
        .or_else(|| std::env::var("MODUP_LOG").ok())
        .or_else(|| config.general.log_level.clone())
    {
        Some(level) => parse_log_level(&level).unwrap_or_else(|| {
            warnings.push(format!(
                "Unknown log level {:?}, using {}",
                level, DEFAULT_LOG_LEVEL
            ));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    let log_file = config
        .general
        .log_file
        .as_deref()
        .unwrap_or(DEFAULT_LOG_FILE);
    // join() keeps absolute paths as they are
    let log_path = config_dir().map(|dir| dir.join(log_file));

    ResolvedConfig {
        go_binary,
        module_dir: cli.module_dir.clone(),
        tick_interval: Duration::from_millis(tick_ms),
        log_level,
        log_path,
        warnings,
    }
}

fn parse_log_level(level: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(level.trim()).ok()
}
