//! Busy indicator. Advances one frame per tick, independent of everything
//! else in `App`.

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spinner {
    frame: usize,
}

impl Spinner {
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame]
    }
}
