//! # Viewport
//!
//! A window of `height` lines over the rendered module list, starting at
//! `top_offset`. One module renders as one line, so line indices and list
//! indices coincide.
//!
//! Two reconciliation directions:
//!
//! - cursor moved → the window follows the cursor
//! - window scrolled → the cursor follows the window

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    top_offset: usize,
    height: usize,
    /// Number of content lines the window slides over.
    content_len: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            top_offset: 0,
            height,
            content_len: 0,
        }
    }

    pub fn top_offset(&self) -> usize {
        self.top_offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Last line inside the window. `None` while the window has no height.
    pub fn bottom(&self) -> Option<usize> {
        if self.height == 0 {
            return None;
        }
        Some(self.top_offset + self.height - 1)
    }

    /// Largest offset that still fills the window (0 for short content).
    fn max_offset(&self) -> usize {
        self.content_len.saturating_sub(self.height)
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.top_offset = self.top_offset.min(self.max_offset());
    }

    pub fn set_content_len(&mut self, content_len: usize) {
        self.content_len = content_len;
        self.top_offset = self.top_offset.min(self.max_offset());
    }

    /// Scrolls by `delta` lines, never past the start or the last full window.
    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.top_offset.saturating_add_signed(delta);
        self.top_offset = target.min(self.max_offset());
    }

    /// Scrolls just far enough that `cursor` is inside the window.
    pub fn reconcile_after_cursor_move(&mut self, cursor: usize) {
        let Some(bottom) = self.bottom() else {
            return;
        };
        if cursor < self.top_offset {
            self.top_offset = cursor;
        } else if cursor > bottom {
            self.top_offset = cursor + 1 - self.height;
        }
    }

    /// Returns `cursor` snapped to the nearest edge of the window.
    pub fn reconcile_after_scroll(&self, cursor: usize) -> usize {
        let Some(bottom) = self.bottom() else {
            return cursor;
        };
        cursor.clamp(self.top_offset, bottom)
    }

    /// Range of content lines currently visible.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = self.top_offset.min(self.content_len);
        let end = (self.top_offset + self.height).min(self.content_len);
        start..end
    }
}
