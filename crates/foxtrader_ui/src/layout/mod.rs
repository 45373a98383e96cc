//! Layout system for UI positioning.
//!
//! Geometry is in whole pixels. Controls take part in the two-phase frame
//! layout through [`LayoutPass`]: every control runs `layout` first, then
//! every control runs `post_layout`.

mod positioner;
mod splitter;
mod table;
mod table_row;

pub use positioner::{Center, Positioner};
pub use splitter::{SplitDirection, Splitter};
pub use table::{Table, MAX_TABLE_COLUMNS};
pub use table_row::TableRow;

use std::ops::{BitOr, BitOrAssign};

use crate::widget::WidgetTree;

/// A rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// X position (left edge).
    pub x: i32,
    /// Y position (top edge).
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge.
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Returns the covered area. Degenerate rectangles cover nothing.
    #[must_use]
    pub fn area(&self) -> i64 {
        i64::from(self.width.max(0)) * i64::from(self.height.max(0))
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns true if two rectangles share any area.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns the same rectangle with negative extents clamped to zero.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self::new(self.x, self.y, self.width.max(0), self.height.max(0))
    }

    /// Shrinks the rectangle by a margin.
    #[must_use]
    pub const fn inset(&self, margin: Margin) -> Self {
        Self::new(
            self.x + margin.left,
            self.y + margin.top,
            self.width - margin.left - margin.right,
            self.height - margin.top - margin.bottom,
        )
    }
}

/// Outer spacing around a widget, or per-side sizes of a nine-slice border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Margin {
    /// Left side.
    pub left: i32,
    /// Top side.
    pub top: i32,
    /// Right side.
    pub right: i32,
    /// Bottom side.
    pub bottom: i32,
}

/// Inner spacing of a widget. Same shape as [`Margin`].
pub type Padding = Margin;

impl Margin {
    /// No spacing.
    pub const ZERO: Self = Self::uniform(0);

    /// Creates a margin from its four sides.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same spacing on every side.
    #[must_use]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left plus right.
    #[must_use]
    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Top plus bottom.
    #[must_use]
    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }

    /// Multiplies every side by `factor`, truncating to whole pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn scaled(&self, factor: f32) -> Self {
        Self::new(
            (self.left as f32 * factor) as i32,
            (self.top as f32 * factor) as i32,
            (self.right as f32 * factor) as i32,
            (self.bottom as f32 * factor) as i32,
        )
    }
}

/// Relative placement of a widget inside its parent.
///
/// Flags combine; when both a side and a centre flag of the same axis are
/// set, the centre wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Anchor(u32);

impl Anchor {
    /// No placement; position is left untouched.
    pub const NONE: Self = Self(0);
    /// Flush with the parent's left padding edge.
    pub const LEFT: Self = Self(1 << 1);
    /// Flush with the parent's right padding edge.
    pub const RIGHT: Self = Self(1 << 2);
    /// Flush with the parent's top padding edge.
    pub const TOP: Self = Self(1 << 3);
    /// Flush with the parent's bottom padding edge.
    pub const BOTTOM: Self = Self(1 << 4);
    /// Centered vertically.
    pub const CENTER_V: Self = Self(1 << 5);
    /// Centered horizontally.
    pub const CENTER_H: Self = Self(1 << 6);
    /// Centered on both axes.
    pub const CENTER: Self = Self(Self::CENTER_V.0 | Self::CENTER_H.0);

    /// Returns true if every flag in `other` is set.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0 && other.0 != 0
    }

    /// Returns the raw flag bits.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for Anchor {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Anchor {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Participation in the per-frame two-phase layout.
///
/// The frame driver calls `layout` on every control, then `post_layout` on
/// every control. Both default to doing nothing.
pub trait LayoutPass {
    /// First phase: push geometry down to children.
    fn layout(&mut self, tree: &mut WidgetTree) {
        let _ = tree;
    }

    /// Second phase: react to the geometry produced by the first phase.
    fn post_layout(&mut self, tree: &mut WidgetTree) {
        let _ = tree;
    }
}
