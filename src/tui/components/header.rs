//! # Header Component
//!
//! Single status line at the top of the screen:
//!
//! 1. **Loading**: `"⠋ Loading..."` with the spinner glyph in green
//! 2. **Nothing to do**: `"All modules are up-to-date"`
//! 3. **Ready**: `"Press enter to update [3/12]"`
//!
//! Stateless: it receives `Status` and the current spinner glyph as props.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::core::state::Status;
use crate::tui::component::Component;
use crate::tui::ui::spinner_style;

pub struct Header<'a> {
    pub status: Status,
    pub spinner_glyph: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(status: Status, spinner_glyph: &'a str) -> Self {
        Self {
            status,
            spinner_glyph,
        }
    }

    fn line(&self) -> Line<'a> {
        match self.status {
            Status::Loading => Line::from(vec![
                Span::styled(self.spinner_glyph, spinner_style()),
                Span::raw(" Loading..."),
            ]),
            Status::UpToDate => Line::raw("All modules are up-to-date"),
            Status::Ready { position, total } => {
                Line::raw(format!("Press enter to update [{position}/{total}]"))
            }
        }
    }
}

impl Component for Header<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
