//! Text measurement used when a label sizes itself to its contents.

/// Measures rendered text in pixels.
pub trait TextMeasurer {
    /// Returns `(width, height)` of `text` as it would be drawn.
    fn measure(&self, text: &str) -> (i32, i32);
}

/// Fixed-advance font estimate: every glyph is `char_width` wide, every line
/// `line_height` tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMeasurer {
    /// Horizontal advance per character.
    pub char_width: i32,
    /// Height of one line.
    pub line_height: i32,
}

impl MonospaceMeasurer {
    /// Creates a measurer with the given metrics.
    #[must_use]
    pub const fn new(char_width: i32, line_height: i32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(8, 16)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn measure(&self, text: &str) -> (i32, i32) {
        let mut lines = 0;
        let mut widest = 0;
        for line in text.split('\n') {
            lines += 1;
            widest = widest.max(line.chars().count() as i32);
        }
        (widest * self.char_width, lines * self.line_height)
    }
}
