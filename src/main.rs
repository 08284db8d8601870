use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use modup::core::config::{self, CliOverrides, ResolvedConfig};
use modup::tui;
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(
    name = "modup",
    version,
    about = "Interactively update out-of-date Go module dependencies"
)]
struct Args {
    /// Path to the go binary
    #[arg(long, value_name = "PATH")]
    go: Option<PathBuf>,

    /// Run in this module directory instead of the current one
    #[arg(short = 'C', long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Log file verbosity (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// File logger only: the terminal belongs to the UI.
fn init_logging(config: &ResolvedConfig) {
    let Some(ref path) = config.log_path else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, origin) = match config::load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("modup: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            go_binary: args.go,
            module_dir: args.dir,
            log_level: args.log_level,
        },
    );
    init_logging(&resolved);

    log::info!("{}", origin);
    for warning in &resolved.warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Config: {:?}", resolved);
    log::info!(
        "modup starting: go={}, dir={:?}",
        resolved.go_binary.display(),
        resolved.module_dir
    );

    match tui::run(resolved).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Exiting with error: {}", e);
            eprintln!("modup: {e}");
            ExitCode::FAILURE
        }
    }
}
