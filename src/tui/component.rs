use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive everything they show as props (struct fields),
/// usually borrowed from `App`, and render into a given `Rect`.
/// They are rebuilt every frame and never write back to `App`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
