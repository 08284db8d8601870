//! # UpdateList Component
//!
//! The body: the slice of the module list that fits the viewport, one
//! line per module.
//!
//! ```text
//! > github.com/spf13/cobra [v1.7.0 -> v1.8.0]
//!   golang.org/x/net [v0.17.0 -> v0.19.0] // indirect
//! ```
//!
//! The cursor line is marked with a red `>`; while an update runs the
//! spinner glyph takes its place.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::modules::{Module, ModuleList};
use crate::core::viewport::Viewport;
use crate::tui::component::Component;
use crate::tui::ui::spinner_style;

const fn cursor_style() -> Style {
    Style::new().fg(Color::Red)
}

/// `path [current -> available]`, plus an `// indirect` note.
pub fn describe(module: &Module) -> String {
    let available = module.update.as_ref().map_or("?", |u| u.version.as_str());
    let mut text = format!("{} [{} -> {}]", module.path, module.version, available);
    if module.indirect {
        text.push_str(" // indirect");
    }
    text
}

pub struct UpdateList<'a> {
    pub modules: &'a ModuleList,
    pub viewport: &'a Viewport,
    pub busy: bool,
    pub spinner_glyph: &'a str,
}

impl<'a> UpdateList<'a> {
    fn marker(&self, index: usize) -> Span<'a> {
        if index != self.modules.cursor() {
            Span::raw(" ")
        } else if self.busy {
            Span::styled(self.spinner_glyph, spinner_style())
        } else {
            Span::styled(">", cursor_style())
        }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let modules = self.modules.modules();
        self.viewport
            .visible_range()
            .filter_map(|i| modules.get(i).map(|m| (i, m)))
            .map(|(i, module)| {
                Line::from(vec![
                    self.marker(i),
                    Span::raw(" "),
                    Span::raw(describe(module)),
                ])
            })
            .collect()
    }
}

impl Component for UpdateList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines()), area);
    }
}
