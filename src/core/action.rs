//! # Actions
//!
//! Everything that can happen in modup becomes an `Action`.
//! User presses Enter? That's `Action::Key(Key::Enter)`.
//! `go list` finishes? That's `Action::Loaded(result)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing follow-up work.
//! No I/O happens here; the TUI executes effects.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{error, info};

use crate::core::modules::Module;
use crate::core::state::App;
use crate::source::SourceError;

/// Keys the controller reacts to. Mapping from raw terminal input lives in
/// the TUI adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Quit,
    Enter,
    Down,
    Up,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Terminal size changed (also sent once at startup).
    Resize { width: u16, height: u16 },
    /// Result of the startup listing.
    Loaded(Result<Vec<Module>, SourceError>),
    /// Result of an update followed by a fresh listing.
    Updated(Result<Vec<Module>, SourceError>),
    Key(Key),
    /// Spinner animation tick.
    Tick,
    /// Terminal input can no longer be read. Nothing could quit the
    /// session after this, so it ends it.
    InputFailed(String),
}

impl Action {
    /// Short name for logging. `Loaded`/`Updated` can carry hundreds of
    /// modules, so they are summarized.
    pub fn summary(&self) -> String {
        match self {
            Action::Resize { width, height } => format!("Resize({width}x{height})"),
            Action::Loaded(Ok(list)) => format!("Loaded({} modules)", list.len()),
            Action::Updated(Ok(list)) => format!("Updated({} modules)", list.len()),
            Action::Loaded(Err(_)) => "Loaded(error)".to_string(),
            Action::Updated(Err(_)) => "Updated(error)".to_string(),
            Action::Key(key) => format!("Key({key:?})"),
            Action::Tick => "Tick".to_string(),
            Action::InputFailed(_) => "InputFailed".to_string(),
        }
    }
}

/// Background work the controller asks for. At most one is outstanding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Load,
    Update(Module),
}

impl Task {
    /// Wraps the task's result in the action that reports it.
    pub fn complete(self, result: Result<Vec<Module>, SourceError>) -> Action {
        match self {
            Task::Load => Action::Loaded(result),
            Task::Update(_) => Action::Updated(result),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Spawn(Task),
}

/// Work to start before the first action arrives.
pub fn init() -> Effect {
    Effect::Spawn(Task::Load)
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Resize { width, height } => {
            app.resize(width, height);
            Effect::None
        }
        Action::Loaded(Ok(modules)) => {
            info!("Loaded {} updatable modules", modules.len());
            app.set_modules(modules);
            Effect::None
        }
        Action::Updated(Ok(modules)) => {
            info!("Update finished, {} modules still updatable", modules.len());
            app.busy = false;
            app.set_modules(modules);
            Effect::None
        }
        Action::Loaded(Err(e)) | Action::Updated(Err(e)) => {
            error!("Fatal: {}", e);
            app.error = Some(e);
            app.should_quit = true;
            Effect::Quit
        }
        Action::Key(key) => handle_key(app, key),
        Action::InputFailed(message) => {
            error!("Fatal: terminal input failed: {}", message);
            app.input_error = Some(message);
            app.should_quit = true;
            Effect::Quit
        }
        Action::Tick => {
            app.spinner.tick();
            Effect::None
        }
    }
}

fn handle_key(app: &mut App, key: Key) -> Effect {
    match key {
        Key::Quit => {
            app.should_quit = true;
            Effect::Quit
        }
        // Navigation is locked together with Enter while an update runs.
        _ if app.busy => Effect::None,
        Key::Enter => match app.selected() {
            Some(module) => {
                let module = module.clone();
                info!("Requesting update for {}", module.path);
                app.busy = true;
                Effect::Spawn(Task::Update(module))
            }
            None => Effect::None,
        },
        Key::Down => {
            app.move_cursor(1);
            Effect::None
        }
        Key::Up => {
            app.move_cursor(-1);
            Effect::None
        }
        Key::PageUp => {
            app.scroll(-1);
            Effect::None
        }
        Key::PageDown => {
            app.scroll(1);
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{direct, indirect, numbered, ready_app};

    #[test]
    fn test_init_requests_load() {
        assert_eq!(init(), Effect::Spawn(Task::Load));
    }

    #[test]
    fn test_task_complete_builds_matching_action() {
        assert_eq!(Task::Load.complete(Ok(vec![])), Action::Loaded(Ok(vec![])));
        let m = direct("a", "v1", "v2");
        assert_eq!(
            Task::Update(m).complete(Err(SourceError::Parse("x".into()))),
            Action::Updated(Err(SourceError::Parse("x".into())))
        );
    }

    #[test]
    fn test_down_on_single_module_stays_put() {
        let mut app = ready_app(24, vec![direct("a", "v1", "v2")]);
        assert_eq!(update(&mut app, Action::Key(Key::Down)), Effect::None);
        assert_eq!(app.cursor(), Some(0));
    }

    #[test]
    fn test_down_from_last_wraps_to_first() {
        let mut app = ready_app(24, numbered(3));
        update(&mut app, Action::Key(Key::Up));
        assert_eq!(app.cursor(), Some(2));
        update(&mut app, Action::Key(Key::Down));
        assert_eq!(app.cursor(), Some(0));
    }

    #[test]
    fn test_enter_spawns_update_for_selected() {
        let mut app = ready_app(24, numbered(3));
        update(&mut app, Action::Key(Key::Down));
        let expected = app.selected().cloned().unwrap();

        let effect = update(&mut app, Action::Key(Key::Enter));
        assert_eq!(effect, Effect::Spawn(Task::Update(expected)));
        assert!(app.busy);
    }

    #[test]
    fn test_enter_while_busy_is_ignored() {
        let mut app = ready_app(24, numbered(3));
        update(&mut app, Action::Key(Key::Enter));
        let cursor = app.cursor();

        assert_eq!(update(&mut app, Action::Key(Key::Enter)), Effect::None);
        assert!(app.busy);
        assert_eq!(app.cursor(), cursor);
    }

    #[test]
    fn test_navigation_while_busy_is_ignored() {
        let mut app = ready_app(5, numbered(10));
        update(&mut app, Action::Key(Key::Enter));
        for key in [Key::Down, Key::Up, Key::PageDown, Key::PageUp] {
            assert_eq!(update(&mut app, Action::Key(key)), Effect::None);
        }
        assert_eq!(app.cursor(), Some(0));
        assert_eq!(app.viewport.top_offset(), 0);
    }

    #[test]
    fn test_tick_always_accepted() {
        let mut app = ready_app(24, numbered(2));
        update(&mut app, Action::Key(Key::Enter));
        update(&mut app, Action::Tick);
        assert_eq!(app.spinner.frame(), 1);
    }

    #[test]
    fn test_enter_on_empty_list_is_noop() {
        let mut app = ready_app(24, Vec::new());
        assert_eq!(update(&mut app, Action::Key(Key::Enter)), Effect::None);
        assert!(!app.busy);
    }

    #[test]
    fn test_enter_before_load_is_noop() {
        let mut app = App::new();
        assert_eq!(update(&mut app, Action::Key(Key::Enter)), Effect::None);
        assert!(!app.busy);
    }

    #[test]
    fn test_updated_clears_busy_and_replaces_list() {
        let mut app = ready_app(24, numbered(3));
        update(&mut app, Action::Key(Key::Enter));
        update(&mut app, Action::Updated(Ok(numbered(2))));
        assert!(!app.busy);
        assert_eq!(app.modules.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_load_error_is_fatal() {
        let mut app = ready_app(24, Vec::new());
        let err = SourceError::Exit {
            command: "go list -m -u -json all".into(),
            code: Some(1),
        };
        assert_eq!(update(&mut app, Action::Loaded(Err(err.clone()))), Effect::Quit);
        assert_eq!(app.error, Some(err));
        assert!(app.should_quit);
    }

    #[test]
    fn test_update_error_is_fatal() {
        let mut app = ready_app(24, numbered(2));
        update(&mut app, Action::Key(Key::Enter));
        let err = SourceError::Parse("EOF while parsing an object".into());
        assert_eq!(update(&mut app, Action::Updated(Err(err))), Effect::Quit);
        assert!(app.error.is_some());
    }

    #[test]
    fn test_input_failure_is_fatal() {
        let mut app = ready_app(24, numbered(2));
        let effect = update(&mut app, Action::InputFailed("stdin closed".into()));
        assert_eq!(effect, Effect::Quit);
        assert!(app.should_quit);
        assert_eq!(app.input_error.as_deref(), Some("stdin closed"));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_quit_works_while_busy() {
        let mut app = ready_app(24, numbered(2));
        update(&mut app, Action::Key(Key::Enter));
        assert_eq!(update(&mut app, Action::Key(Key::Quit)), Effect::Quit);
        assert!(app.should_quit);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_page_down_three_times() {
        // 5 terminal rows → 3 visible lines
        let mut app = ready_app(5, numbered(10));
        for _ in 0..3 {
            update(&mut app, Action::Key(Key::PageDown));
        }
        assert_eq!(app.viewport.top_offset(), 3);
        assert_eq!(app.cursor(), Some(3));
    }

    #[test]
    fn test_page_down_stops_at_last_full_window() {
        let mut app = ready_app(5, numbered(4));
        for _ in 0..5 {
            update(&mut app, Action::Key(Key::PageDown));
        }
        assert_eq!(app.viewport.top_offset(), 1);
        assert_eq!(app.cursor(), Some(1));
    }

    #[test]
    fn test_loaded_keeps_order_from_source() {
        let mut app = ready_app(24, Vec::new());
        let list = vec![direct("b", "v1", "v2"), indirect("a", "v1", "v2")];
        update(&mut app, Action::Loaded(Ok(list.clone())));
        assert_eq!(app.modules.as_ref().unwrap().modules(), list.as_slice());
    }

    #[test]
    fn test_action_summary_hides_payload() {
        assert_eq!(Action::Loaded(Ok(numbered(7))).summary(), "Loaded(7 modules)");
        assert_eq!(Action::Key(Key::PageUp).summary(), "Key(PageUp)");
    }
}
