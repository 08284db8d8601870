//! # Application State
//!
//! Everything the controller knows, in one struct. No TUI types here;
//! rendering reads this, it never writes it.
//!
//! ```text
//! App
//! ├── ready: bool                     // first terminal size received
//! ├── modules: Option<ModuleList>     // None until the first load lands
//! ├── busy: bool                      // an update task is outstanding
//! ├── error: Option<SourceError>      // fatal, ends the session
//! ├── input_error: Option<String>     // terminal input died, also fatal
//! ├── viewport: Viewport              // visible window over the list
//! ├── spinner: Spinner                // busy indicator frame
//! └── should_quit: bool
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::debug;

use crate::core::modules::{Module, ModuleList};
use crate::core::spinner::Spinner;
use crate::core::viewport::Viewport;
use crate::source::SourceError;

/// Terminal lines taken by the header and the footer.
pub const CHROME_LINES: usize = 2;

/// What the header line should say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    UpToDate,
    /// `position` is 1-based.
    Ready { position: usize, total: usize },
}

#[derive(Debug, Default)]
pub struct App {
    pub ready: bool,
    pub modules: Option<ModuleList>,
    pub busy: bool,
    pub error: Option<SourceError>,
    pub input_error: Option<String>,
    pub viewport: Viewport,
    pub spinner: Spinner,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> Status {
        match self.modules {
            Some(ref list) if self.ready => {
                if list.is_empty() {
                    Status::UpToDate
                } else {
                    Status::Ready {
                        position: list.cursor() + 1,
                        total: list.len(),
                    }
                }
            }
            _ => Status::Loading,
        }
    }

    /// The module under the cursor, if any.
    pub fn selected(&self) -> Option<&Module> {
        self.modules.as_ref().and_then(ModuleList::selected)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.modules
            .as_ref()
            .filter(|list| !list.is_empty())
            .map(ModuleList::cursor)
    }

    /// Sizes the viewport to the terminal minus header and footer.
    pub(crate) fn resize(&mut self, width: u16, height: u16) {
        debug!("Resize to {}x{}", width, height);
        self.viewport
            .set_height((height as usize).saturating_sub(CHROME_LINES));
        if !self.ready {
            self.ready = true;
            return;
        }
        self.snap_cursor_to_window();
    }

    /// Installs a freshly loaded list; the cursor wraps into its range.
    pub(crate) fn set_modules(&mut self, modules: Vec<Module>) {
        match self.modules {
            Some(ref mut list) => list.replace(modules),
            None => self.modules = Some(ModuleList::new(modules)),
        }
        let len = self.modules.as_ref().map_or(0, ModuleList::len);
        self.viewport.set_content_len(len);
        if let Some(cursor) = self.cursor() {
            self.viewport.reconcile_after_cursor_move(cursor);
        }
    }

    /// Moves the cursor with wraparound; the window follows.
    pub(crate) fn move_cursor(&mut self, delta: isize) {
        let Some(ref mut list) = self.modules else {
            return;
        };
        if list.is_empty() {
            return;
        }
        list.move_cursor(delta);
        self.viewport.reconcile_after_cursor_move(list.cursor());
    }

    /// Scrolls the window; the cursor follows.
    pub(crate) fn scroll(&mut self, delta: isize) {
        self.viewport.scroll_by(delta);
        self.snap_cursor_to_window();
    }

    fn snap_cursor_to_window(&mut self) {
        let Some(ref mut list) = self.modules else {
            return;
        };
        if list.is_empty() {
            return;
        }
        list.set_cursor(self.viewport.reconcile_after_scroll(list.cursor()));
    }
}
