//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, runs the event loop, and
//! executes the effects returned by `core::action::update`.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! Every producer feeds the same unbounded channel, so the loop sees one
//! ordered stream of `Action`s:
//!
//! ```text
//!  input reader (blocking thread) ──┐
//!  spinner ticker (interval) ───────┼──▶ mpsc ──▶ update() ──▶ draw
//!  load / update task (tokio) ──────┘                │
//!                                                    └─ Effect::Spawn ─▶ new task
//! ```
//!
//! The loop redraws after every action and stops on `Effect::Quit`. A fatal
//! source error stops it before anything else is drawn.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::core::action::{Action, Effect, Task, init, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::source::{DependencySource, GoModules, SourceError};

/// How long the input reader blocks before checking whether the loop is gone.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Size assumed when the terminal cannot report its own.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Why a session ended unsuccessfully.
#[derive(Debug)]
pub enum RunError {
    /// Drawing to or reading from the terminal failed.
    Terminal(std::io::Error),
    /// Listing or updating modules failed.
    Source(SourceError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Terminal(e) => write!(f, "terminal error: {e}"),
            RunError::Source(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<std::io::Error> for RunError {
    fn from(e: std::io::Error) -> Self {
        RunError::Terminal(e)
    }
}

/// Runs an interactive session against the `go` tool described by `config`.
///
/// The terminal is restored before this returns, on success and on error,
/// so the caller can print the error straight to stderr.
pub async fn run(config: ResolvedConfig) -> Result<(), RunError> {
    let source: Arc<dyn DependencySource> =
        Arc::new(GoModules::new(&config.go_binary).with_dir(config.module_dir.clone()));
    info!("Using dependency source: {}", source.name());

    let mut terminal = ratatui::init();
    let result = run_loop(&mut terminal, source, config.tick_interval).await;
    ratatui::restore();
    result
}

async fn run_loop(
    terminal: &mut DefaultTerminal,
    source: Arc<dyn DependencySource>,
    tick_interval: Duration,
) -> Result<(), RunError> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new();

    spawn_input_reader(tx.clone());
    spawn_ticker(tick_interval, tx.clone());
    if let Effect::Spawn(task) = init() {
        spawn_task(task, source.clone(), tx.clone());
    }

    terminal.draw(|f| ui::draw_ui(f, &app))?;

    while let Some(action) = rx.recv().await {
        if !matches!(action, Action::Tick) {
            debug!("Event loop received: {}", action.summary());
        }
        match update(&mut app, action) {
            Effect::Quit => break,
            Effect::Spawn(task) => spawn_task(task, source.clone(), tx.clone()),
            Effect::None => {}
        }
        terminal.draw(|f| ui::draw_ui(f, &app))?;
    }

    session_result(&mut app)
}

/// How the session ended, from the state the loop stopped in.
fn session_result(app: &mut App) -> Result<(), RunError> {
    if let Some(e) = app.error.take() {
        return Err(RunError::Source(e));
    }
    if let Some(message) = app.input_error.take() {
        return Err(RunError::Terminal(std::io::Error::other(message)));
    }
    info!("Session ended by user");
    Ok(())
}

/// Runs `task` on the runtime and posts its completion action back.
fn spawn_task(task: Task, source: Arc<dyn DependencySource>, tx: UnboundedSender<Action>) {
    info!("Spawning task: {:?}", TaskLabel(&task));
    tokio::spawn(async move {
        let result = match task {
            Task::Load => source.load().await,
            Task::Update(ref module) => source.apply_update(module).await,
        };
        if let Err(ref e) = result {
            warn!("Task failed: {}", e);
        }
        if tx.send(task.complete(result)).is_err() {
            warn!("Failed to send task result: event loop gone");
        }
    });
}

/// `Task` debug output without the full module record.
struct TaskLabel<'a>(&'a Task);

impl fmt::Debug for TaskLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Task::Load => write!(f, "Load"),
            Task::Update(module) => write!(f, "Update({})", module.path),
        }
    }
}

/// Sends `Action::Tick` every `period` until the loop goes away.
fn spawn_ticker(period: Duration, tx: UnboundedSender<Action>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            if tx.send(Action::Tick).is_err() {
                break;
            }
        }
    });
}

/// Reads terminal input on a blocking thread. Starts by reporting the
/// current size, which is what marks the app ready.
fn spawn_input_reader(tx: UnboundedSender<Action>) {
    tokio::task::spawn_blocking(move || {
        let (width, height) = crossterm::terminal::size().unwrap_or_else(|e| {
            warn!("Could not read terminal size: {}", e);
            FALLBACK_SIZE
        });
        if tx.send(Action::Resize { width, height }).is_err() {
            return;
        }
        read_input(&tx, event::poll_action);
    });
}

/// Forwards polled input until the loop goes away. A read failure is
/// forwarded as `Action::InputFailed` and ends the reader.
fn read_input<P>(tx: &UnboundedSender<Action>, mut poll: P)
where
    P: FnMut(Duration) -> std::io::Result<Option<Action>>,
{
    while !tx.is_closed() {
        match poll(INPUT_POLL_INTERVAL) {
            Ok(Some(action)) => {
                if tx.send(action).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Terminal input failed: {}", e);
                let _ = tx.send(Action::InputFailed(e.to_string()));
                break;
            }
        }
    }
    debug!("Input reader stopped");
}
