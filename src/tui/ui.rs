use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::state::{App, Status};
use crate::tui::component::Component;
use crate::tui::components::{Header, UpdateList};

const FOOTER_TEXT: &str = "(press 'q' to quit)";

pub(crate) const fn spinner_style() -> Style {
    Style::new().fg(Color::Green)
}

/// Draws one frame. Reads `app` only, so drawing the same state twice
/// produces the same buffer.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [header_area, body_area, footer_area] = layout.areas(frame.area());

    let status = app.status();
    let spinner_glyph = app.spinner.glyph();

    Header::new(status, spinner_glyph).render(frame, header_area);

    if let (Status::Ready { .. }, Some(modules)) = (status, app.modules.as_ref()) {
        UpdateList {
            modules,
            viewport: &app.viewport,
            busy: app.busy,
            spinner_glyph,
        }
        .render(frame, body_area);
    }

    frame.render_widget(
        Span::styled(FOOTER_TEXT, Style::new().add_modifier(Modifier::DIM)),
        footer_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, Key, update};
    use crate::test_support::{indirect, numbered, ready_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    const WIDTH: u16 = 60;

    fn render(app: &App, height: u16) -> Buffer {
        let backend = TestBackend::new(WIDTH, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .map(|row| row.trim_end().to_string())
            .collect()
    }

    #[test]
    fn test_draw_loading() {
        let app = App::new();
        let rows = rows(&render(&app, 6));
        assert_eq!(rows[0], "⠋ Loading...");
        assert_eq!(rows[5], FOOTER_TEXT);
    }

    #[test]
    fn test_draw_up_to_date() {
        let app = ready_app(6, Vec::new());
        let rows = rows(&render(&app, 6));
        assert_eq!(rows[0], "All modules are up-to-date");
        assert!(rows[1..5].iter().all(|r| r.is_empty()));
    }

    #[test]
    fn test_draw_list_with_cursor() {
        let mut modules = numbered(2);
        modules.push(indirect("golang.org/x/sys", "v0.1.0", "v0.15.0"));
        let app = ready_app(6, modules);

        let rows = rows(&render(&app, 6));
        assert_eq!(rows[0], "Press enter to update [1/3]");
        assert_eq!(rows[1], "> example.com/mod00 [v1.0.0 -> v1.1.0]");
        assert_eq!(rows[2], "  example.com/mod01 [v1.0.0 -> v1.1.0]");
        assert_eq!(rows[3], "  golang.org/x/sys [v0.1.0 -> v0.15.0] // indirect");
    }

    #[test]
    fn test_draw_only_visible_window() {
        // 5 rows → 3 list lines
        let mut app = ready_app(5, numbered(10));
        update(&mut app, Action::Key(Key::PageDown));
        update(&mut app, Action::Key(Key::PageDown));

        let rows = rows(&render(&app, 5));
        assert_eq!(rows[0], "Press enter to update [3/10]");
        assert_eq!(rows[1], "> example.com/mod02 [v1.0.0 -> v1.1.0]");
        assert_eq!(rows[3], "  example.com/mod04 [v1.0.0 -> v1.1.0]");
        assert!(!rows.iter().any(|r| r.contains("mod01") || r.contains("mod05")));
    }

    #[test]
    fn test_draw_busy_shows_spinner_on_cursor() {
        let mut app = ready_app(6, numbered(2));
        update(&mut app, Action::Key(Key::Enter));
        update(&mut app, Action::Tick);

        let rows = rows(&render(&app, 6));
        assert_eq!(rows[1], "⠙ example.com/mod00 [v1.0.0 -> v1.1.0]");
        assert!(!rows.iter().any(|r| r.starts_with('>')));
    }

    #[test]
    fn test_draw_is_idempotent() {
        let mut app = ready_app(8, numbered(12));
        update(&mut app, Action::Key(Key::Up));
        let first = render(&app, 8);
        let second = render(&app, 8);
        assert_eq!(first, second);
    }
}
