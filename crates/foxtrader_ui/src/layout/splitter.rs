//! Two-pane splitter.

use super::{Anchor, LayoutPass, Rect};
use crate::error::{UiError, UiResult};
use crate::widget::{WidgetId, WidgetTree};

/// Axis along which a [`Splitter`] divides its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitDirection {
    /// Upper and lower halves.
    #[default]
    Vertical,
    /// Left and right halves. Not implemented.
    Horizontal,
}

/// Divides its rectangle into an upper and a lower half at the 50% line.
///
/// A scaled panel is stretched to fill its half minus the panel's margin. An
/// unscaled panel keeps its size and is centred a quarter of the height above
/// (slot 0) or below (slot 1) the middle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splitter {
    id: WidgetId,
    panels: [Option<WidgetId>; 2],
    scale: [bool; 2],
    direction: SplitDirection,
}

impl Splitter {
    /// Number of panel slots.
    pub const SLOTS: usize = 2;

    /// Creates the splitter widget with both slots empty and scaled.
    pub fn new(tree: &mut WidgetTree, parent: Option<WidgetId>) -> Self {
        Self {
            id: tree.create(parent),
            panels: [None; Self::SLOTS],
            scale: [true; Self::SLOTS],
            direction: SplitDirection::Vertical,
        }
    }

    /// The splitter's own widget.
    #[must_use]
    pub const fn id(&self) -> WidgetId {
        self.id
    }

    fn check_index(index: usize) -> UiResult<()> {
        if index < Self::SLOTS {
            Ok(())
        } else {
            tracing::warn!(index, "invalid splitter panel index");
            Err(UiError::InvalidPanelIndex(index))
        }
    }

    /// Puts `panel` into slot `index`, reparenting it under the splitter.
    /// `None` empties the slot without touching the previous panel.
    ///
    /// # Errors
    ///
    /// [`UiError::InvalidPanelIndex`] if `index` is not 0 or 1.
    pub fn set_panel(
        &mut self,
        tree: &mut WidgetTree,
        index: usize,
        panel: Option<WidgetId>,
        scale: bool,
    ) -> UiResult<()> {
        Self::check_index(index)?;

        self.panels[index] = panel;
        self.scale[index] = scale;
        if let Some(panel) = panel {
            tree.set_parent(panel, self.id);
        }
        tree.invalidate(self.id);
        Ok(())
    }

    /// Widget in slot `index`.
    ///
    /// # Errors
    ///
    /// [`UiError::InvalidPanelIndex`] if `index` is not 0 or 1.
    pub fn panel(&self, index: usize) -> UiResult<Option<WidgetId>> {
        Self::check_index(index)?;
        Ok(self.panels[index])
    }

    /// Whether slot `index` is stretched to its half.
    ///
    /// # Errors
    ///
    /// [`UiError::InvalidPanelIndex`] if `index` is not 0 or 1.
    pub fn is_scaled(&self, index: usize) -> UiResult<bool> {
        Self::check_index(index)?;
        Ok(self.scale[index])
    }

    /// Current split axis.
    #[must_use]
    pub const fn direction(&self) -> SplitDirection {
        self.direction
    }

    /// Changes the split axis.
    ///
    /// # Errors
    ///
    /// [`UiError::Unimplemented`] for [`SplitDirection::Horizontal`].
    pub fn set_direction(&mut self, direction: SplitDirection) -> UiResult<()> {
        if direction == SplitDirection::Horizontal {
            tracing::warn!("horizontal split requested");
            return Err(UiError::Unimplemented("horizontal split"));
        }
        self.direction = direction;
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn layout_vertical(&self, tree: &mut WidgetTree) {
        let (width, height) = tree.size(self.id);
        let half = (height as f32 * 0.5) as i32;
        let quarter = (height as f32 * 0.25) as i32;

        for (slot, offset) in [(0, -quarter), (1, quarter)] {
            let Some(panel) = self.panels[slot] else {
                continue;
            };
            if self.scale[slot] {
                let m = tree.margin(panel);
                let top = if slot == 0 { m.top } else { m.top + half };
                tree.set_bounds(
                    panel,
                    Rect::new(m.left, top, width - m.horizontal(), half - m.vertical()),
                );
            } else {
                tree.set_relative_position(panel, Anchor::CENTER, 0, offset);
            }
        }
    }
}

impl LayoutPass for Splitter {
    fn layout(&mut self, tree: &mut WidgetTree) {
        match self.direction {
            SplitDirection::Vertical => self.layout_vertical(tree),
            SplitDirection::Horizontal => {
                tracing::warn!(splitter = self.id.raw(), "horizontal split has no layout, panels left as is");
            }
        }
    }
}
