//! Core widget types.

use crate::layout::{Margin, Padding, Rect};
use crate::style::Color;

/// Unique identifier for a widget.
///
/// Ids are handed out by [`WidgetTree`](super::WidgetTree) and never reused,
/// so a stale id held after removal simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Wraps a raw value. Only the tree mints ids.
    #[must_use]
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Widget state flags (bitfield for efficiency).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is visible.
    pub const VISIBLE: u32 = 1 << 0;
    /// Widget receives mouse input.
    pub const MOUSE_INPUT: u32 = 1 << 1;
    /// Widget receives keyboard input.
    pub const KEYBOARD_INPUT: u32 = 1 << 2;
    /// Widget needs layout recalculation.
    pub const DIRTY_LAYOUT: u32 = 1 << 5;

    /// Default flags for a new widget.
    pub const DEFAULT: Self = Self(Self::VISIBLE | Self::MOUSE_INPUT | Self::DIRTY_LAYOUT);

    /// Creates new flags with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

impl Default for WidgetFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Docking hint consumed by the control that arranges the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dock {
    /// Placed explicitly.
    #[default]
    None,
    /// Packed against the left edge after earlier left-docked siblings.
    Left,
    /// Stacked under earlier top-docked siblings.
    Top,
    /// Takes whatever space is left.
    Fill,
}

/// Common widget state.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Widget identifier.
    pub id: WidgetId,
    /// Bounds relative to the parent.
    pub rect: Rect,
    /// Outer spacing.
    pub margin: Margin,
    /// Inner spacing.
    pub padding: Padding,
    /// State flags.
    pub flags: WidgetFlags,
    /// Docking hint.
    pub dock: Dock,
    /// Label text, if the widget displays any.
    pub text: Option<String>,
    /// Label text colour override.
    pub text_color: Option<Color>,
    /// Parent widget ID (None for root).
    pub parent: Option<WidgetId>,
}

impl WidgetState {
    /// Creates a new widget state.
    #[must_use]
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            rect: Rect::ZERO,
            margin: Margin::ZERO,
            padding: Padding::ZERO,
            flags: WidgetFlags::DEFAULT,
            dock: Dock::None,
            text: None,
            text_color: None,
            parent: None,
        }
    }

    /// Returns true if the widget is visible.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.has(WidgetFlags::VISIBLE)
    }

    /// Returns true if the widget is waiting for a layout pass.
    #[inline]
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.flags.has(WidgetFlags::DIRTY_LAYOUT)
    }

    /// Marks the widget as needing layout.
    #[inline]
    pub fn invalidate(&mut self) {
        self.flags.set(WidgetFlags::DIRTY_LAYOUT);
    }
}
