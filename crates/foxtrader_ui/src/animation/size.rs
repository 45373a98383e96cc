//! Pixel size transitions.

/// Interpolates one integer pixel dimension from a start value to an end
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeTransition {
    start: i32,
    delta: i32,
    hide_on_finish: bool,
}

impl SizeTransition {
    /// Transition from `from` to `to`.
    #[must_use]
    pub const fn new(from: i32, to: i32) -> Self {
        Self {
            start: from,
            delta: to - from,
            hide_on_finish: false,
        }
    }

    /// Hides the widget once the end value is reached.
    #[must_use]
    pub const fn hiding(mut self) -> Self {
        self.hide_on_finish = true;
        self
    }

    /// Value written when the animation starts.
    #[must_use]
    pub const fn start(&self) -> i32 {
        self.start
    }

    /// Exact value written when the animation finishes.
    #[must_use]
    pub const fn end(&self) -> i32 {
        self.start + self.delta
    }

    /// Whether finishing hides the widget.
    #[must_use]
    pub const fn hides_on_finish(&self) -> bool {
        self.hide_on_finish
    }

    /// Value at eased progress `eased`, rounded to the nearest pixel with
    /// ties going to the even neighbour. Over an even-length range growing
    /// and shrinking visit mirrored sizes.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn value_at(&self, eased: f32) -> i32 {
        round_half_even(self.start as f32 + self.delta as f32 * eased) as i32
    }
}

/// Nearest integer, halfway cases to even.
fn round_half_even(value: f32) -> f32 {
    let floor = value.floor();
    let diff = value - floor;
    if diff > 0.5 {
        floor + 1.0
    } else if diff < 0.5 {
        floor
    } else if floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    }
}
