//! Widget tree for hierarchical UI management.
//!
//! The tree owns every widget's geometry and text. Layout controls and
//! animations hold [`WidgetId`]s into it and go through the accessors below;
//! accessors on an id that is no longer in the tree do nothing and return
//! defaults.

use std::collections::HashMap;

use super::{Dock, MonospaceMeasurer, TextMeasurer, WidgetFlags, WidgetId, WidgetState};
use crate::layout::{Anchor, Margin, Padding, Rect};
use crate::style::Color;

/// Manages the widget hierarchy.
pub struct WidgetTree {
    /// Widget states indexed by ID.
    widgets: HashMap<WidgetId, WidgetState>,
    /// Root widget IDs.
    roots: Vec<WidgetId>,
    /// Parent-child relationships, in insertion order.
    children: HashMap<WidgetId, Vec<WidgetId>>,
    /// ID counter for generating unique IDs.
    next_id: u64,
    /// Font metrics for labels.
    measurer: Box<dyn TextMeasurer>,
}

impl WidgetTree {
    /// Creates a new empty widget tree measuring text with the default
    /// monospace metrics.
    #[must_use]
    pub fn new() -> Self {
        Self::with_measurer(MonospaceMeasurer::default())
    }

    /// Creates a new empty widget tree with custom font metrics.
    #[must_use]
    pub fn with_measurer(measurer: impl TextMeasurer + 'static) -> Self {
        Self {
            widgets: HashMap::with_capacity(256),
            roots: Vec::with_capacity(16),
            children: HashMap::with_capacity(256),
            next_id: 1,
            measurer: Box::new(measurer),
        }
    }

    fn next_id(&mut self) -> WidgetId {
        let id = WidgetId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Creates a blank widget under `parent`, or as a root.
    ///
    /// A missing parent makes the widget a root.
    pub fn create(&mut self, parent: Option<WidgetId>) -> WidgetId {
        let id = self.next_id();
        match parent {
            Some(parent) if self.contains(parent) => self.add_child(parent, WidgetState::new(id)),
            _ => self.add_root(WidgetState::new(id)),
        }
        id
    }

    fn add_root(&mut self, state: WidgetState) {
        let id = state.id;
        self.widgets.insert(id, state);
        self.roots.push(id);
        self.children.insert(id, Vec::new());
    }

    fn add_child(&mut self, parent: WidgetId, state: WidgetState) {
        let id = state.id;
        let mut state = state;
        state.parent = Some(parent);

        self.widgets.insert(id, state);
        self.children.entry(parent).or_default().push(id);
        self.children.insert(id, Vec::new());
        self.invalidate(parent);
    }

    /// Removes a widget and all its children.
    ///
    /// Returns every removed ID, the widget itself first.
    pub fn remove(&mut self, id: WidgetId) -> Vec<WidgetId> {
        let mut removed = Vec::new();
        if !self.contains(id) {
            return removed;
        }

        self.detach(id);
        self.remove_subtree(id, &mut removed);
        removed
    }

    fn remove_subtree(&mut self, id: WidgetId, removed: &mut Vec<WidgetId>) {
        removed.push(id);
        if let Some(children) = self.children.remove(&id) {
            for child in children {
                self.remove_subtree(child, removed);
            }
        }
        self.widgets.remove(&id);
    }

    /// Unlinks a widget from its parent's child list or from the roots.
    fn detach(&mut self, id: WidgetId) {
        let parent = self.widgets.get(&id).and_then(|state| state.parent);
        match parent {
            Some(parent) => {
                if let Some(siblings) = self.children.get_mut(&parent) {
                    siblings.retain(|&c| c != id);
                }
                self.invalidate(parent);
            }
            None => self.roots.retain(|&r| r != id),
        }
    }

    /// Moves a widget (with its subtree) under a new parent, appending it to
    /// the parent's children.
    ///
    /// Returns false, changing nothing, if either widget is missing or the
    /// move would create a cycle.
    pub fn set_parent(&mut self, id: WidgetId, parent: WidgetId) -> bool {
        if !self.contains(id) || !self.contains(parent) || self.is_ancestor_or_self(id, parent) {
            return false;
        }
        if self.parent(id) == Some(parent) {
            return true;
        }

        self.detach(id);
        if let Some(state) = self.widgets.get_mut(&id) {
            state.parent = Some(parent);
        }
        self.children.entry(parent).or_default().push(id);
        self.invalidate(parent);
        true
    }

    fn is_ancestor_or_self(&self, ancestor: WidgetId, mut node: WidgetId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.parent(node) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    /// Returns true if the widget is in the tree.
    #[must_use]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(&id)
    }

    /// Returns the number of widgets in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns true if the tree has no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Gets a widget state by ID.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&WidgetState> {
        self.widgets.get(&id)
    }

    /// Gets mutable access to a widget state.
    #[must_use]
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetState> {
        self.widgets.get_mut(&id)
    }

    /// Returns the parent of a widget.
    #[must_use]
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.widgets.get(&id).and_then(|state| state.parent)
    }

    /// Returns the children of a widget.
    #[must_use]
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns all root widgets.
    #[must_use]
    pub fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    /// Returns all widget IDs in depth-first order.
    pub fn iter_dfs(&self) -> impl Iterator<Item = WidgetId> + '_ {
        WidgetDfsIterator {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Returns a widget and all its descendants, depth-first.
    #[must_use]
    pub fn subtree(&self, id: WidgetId) -> Vec<WidgetId> {
        if !self.contains(id) {
            return Vec::new();
        }
        WidgetDfsIterator {
            tree: self,
            stack: vec![id],
        }
        .collect()
    }

    // ---------------------------------------------------------------------
    // Geometry
    // ---------------------------------------------------------------------

    /// Returns the parent-relative bounds, or [`Rect::ZERO`] for an unknown id.
    #[must_use]
    pub fn rect(&self, id: WidgetId) -> Rect {
        self.widgets.get(&id).map_or(Rect::ZERO, |state| state.rect)
    }

    /// Returns `(width, height)`.
    #[must_use]
    pub fn size(&self, id: WidgetId) -> (i32, i32) {
        let rect = self.rect(id);
        (rect.width, rect.height)
    }

    /// Sets the bounds. Returns true if they changed.
    pub fn set_bounds(&mut self, id: WidgetId, bounds: Rect) -> bool {
        let Some(state) = self.widgets.get_mut(&id) else {
            return false;
        };
        if state.rect == bounds {
            return false;
        }
        state.rect = bounds;
        state.invalidate();
        let parent = state.parent;
        if let Some(parent) = parent {
            self.invalidate(parent);
        }
        true
    }

    /// Sets the size, keeping the position. Returns true if it changed.
    pub fn set_size(&mut self, id: WidgetId, width: i32, height: i32) -> bool {
        let rect = self.rect(id);
        self.set_bounds(id, Rect::new(rect.x, rect.y, width, height))
    }

    /// Sets the width, keeping everything else.
    pub fn set_width(&mut self, id: WidgetId, width: i32) -> bool {
        let rect = self.rect(id);
        self.set_bounds(id, Rect::new(rect.x, rect.y, width, rect.height))
    }

    /// Sets the height, keeping everything else.
    pub fn set_height(&mut self, id: WidgetId, height: i32) -> bool {
        let rect = self.rect(id);
        self.set_bounds(id, Rect::new(rect.x, rect.y, rect.width, height))
    }

    /// Moves the widget, keeping its size.
    pub fn set_position(&mut self, id: WidgetId, x: i32, y: i32) -> bool {
        let rect = self.rect(id);
        self.set_bounds(id, Rect::new(x, y, rect.width, rect.height))
    }

    /// Returns the outer spacing.
    #[must_use]
    pub fn margin(&self, id: WidgetId) -> Margin {
        self.widgets.get(&id).map_or(Margin::ZERO, |state| state.margin)
    }

    /// Sets the outer spacing.
    pub fn set_margin(&mut self, id: WidgetId, margin: Margin) {
        if let Some(state) = self.widgets.get_mut(&id) {
            state.margin = margin;
            state.invalidate();
        }
    }

    /// Returns the inner spacing.
    #[must_use]
    pub fn padding(&self, id: WidgetId) -> Padding {
        self.widgets.get(&id).map_or(Padding::ZERO, |state| state.padding)
    }

    /// Sets the inner spacing.
    pub fn set_padding(&mut self, id: WidgetId, padding: Padding) {
        if let Some(state) = self.widgets.get_mut(&id) {
            state.padding = padding;
            state.invalidate();
        }
    }

    /// Returns the docking hint.
    #[must_use]
    pub fn dock(&self, id: WidgetId) -> Dock {
        self.widgets.get(&id).map_or(Dock::None, |state| state.dock)
    }

    /// Sets the docking hint.
    pub fn set_dock(&mut self, id: WidgetId, dock: Dock) {
        if let Some(state) = self.widgets.get_mut(&id) {
            state.dock = dock;
            state.invalidate();
        }
    }

    /// Positions the widget inside its parent's padded area according to
    /// `anchor`, offset by `(dx, dy)`. Axes the anchor leaves unset keep
    /// their current coordinate.
    ///
    /// Returns false for roots and unknown ids.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn set_relative_position(&mut self, id: WidgetId, anchor: Anchor, dx: i32, dy: i32) -> bool {
        let Some(parent) = self.parent(id) else {
            return false;
        };
        let rect = self.rect(id);
        let (parent_width, parent_height) = self.size(parent);
        let padding = self.padding(parent);

        let mut x = rect.x;
        let mut y = rect.y;

        if anchor.contains(Anchor::LEFT) {
            x = padding.left + dx;
        }
        if anchor.contains(Anchor::RIGHT) {
            x = parent_width - rect.width - padding.right - dx;
        }
        if anchor.contains(Anchor::CENTER_H) {
            let free = parent_width - rect.width - padding.horizontal();
            x = padding.left + dx + (free as f32 * 0.5) as i32;
        }

        if anchor.contains(Anchor::TOP) {
            y = padding.top + dy;
        }
        if anchor.contains(Anchor::BOTTOM) {
            y = parent_height - rect.height - padding.bottom - dy;
        }
        if anchor.contains(Anchor::CENTER_V) {
            let free = parent_height - rect.height - padding.vertical();
            y = padding.top + dy + (free as f32 * 0.5) as i32;
        }

        self.set_position(id, x, y);
        true
    }

    /// Returns the bottom-right extent of all visible children.
    #[must_use]
    pub fn children_size(&self, id: WidgetId) -> (i32, i32) {
        self.children(id)
            .iter()
            .filter_map(|child| self.widgets.get(child))
            .filter(|state| state.is_visible())
            .fold((0, 0), |(w, h), state| {
                (w.max(state.rect.right()), h.max(state.rect.bottom()))
            })
    }

    /// Resizes the widget to enclose its visible children plus its right and
    /// bottom padding.
    pub fn size_to_children(&mut self, id: WidgetId) -> bool {
        let (width, height) = self.children_size(id);
        let padding = self.padding(id);
        self.set_size(id, width + padding.right, height + padding.bottom)
    }

    /// Resizes the widget to its measured text plus padding.
    ///
    /// A widget without text measures as zero.
    pub fn size_to_contents(&mut self, id: WidgetId) -> bool {
        let Some(state) = self.widgets.get(&id) else {
            return false;
        };
        let (width, height) = state
            .text
            .as_deref()
            .map_or((0, 0), |text| self.measurer.measure(text));
        let padding = state.padding;
        self.set_size(id, width + padding.horizontal(), height + padding.vertical())
    }

    // ---------------------------------------------------------------------
    // Text, flags, invalidation
    // ---------------------------------------------------------------------

    /// Returns the label text.
    #[must_use]
    pub fn text(&self, id: WidgetId) -> Option<&str> {
        self.widgets.get(&id).and_then(|state| state.text.as_deref())
    }

    /// Sets the label text.
    pub fn set_text(&mut self, id: WidgetId, text: impl Into<String>) {
        if let Some(state) = self.widgets.get_mut(&id) {
            state.text = Some(text.into());
            state.invalidate();
        }
    }

    /// Returns the label text colour override.
    #[must_use]
    pub fn text_color(&self, id: WidgetId) -> Option<Color> {
        self.widgets.get(&id).and_then(|state| state.text_color)
    }

    /// Sets the label text colour.
    pub fn set_text_color(&mut self, id: WidgetId, color: Color) {
        if let Some(state) = self.widgets.get_mut(&id) {
            state.text_color = Some(color);
        }
    }

    /// Returns true if the widget is hidden or unknown.
    #[must_use]
    pub fn is_hidden(&self, id: WidgetId) -> bool {
        self.widgets.get(&id).map_or(true, |state| !state.is_visible())
    }

    /// Shows or hides the widget.
    pub fn set_hidden(&mut self, id: WidgetId, hidden: bool) {
        self.set_flag(id, WidgetFlags::VISIBLE, !hidden);
        if let Some(parent) = self.parent(id) {
            self.invalidate(parent);
        }
    }

    /// Returns true if the flag is set on a known widget.
    #[must_use]
    pub fn has_flag(&self, id: WidgetId, flag: u32) -> bool {
        self.widgets.get(&id).is_some_and(|state| state.flags.has(flag))
    }

    /// Sets or clears a flag.
    pub fn set_flag(&mut self, id: WidgetId, flag: u32, on: bool) {
        if let Some(state) = self.widgets.get_mut(&id) {
            state.flags.assign(flag, on);
        }
    }

    /// Requests a layout pass for the widget.
    pub fn invalidate(&mut self, id: WidgetId) {
        if let Some(state) = self.widgets.get_mut(&id) {
            state.invalidate();
        }
    }

    /// Clears the layout request after a pass.
    pub fn mark_laid_out(&mut self, id: WidgetId) {
        self.set_flag(id, WidgetFlags::DIRTY_LAYOUT, false);
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WidgetTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetTree")
            .field("widgets", &self.widgets.len())
            .field("roots", &self.roots)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

/// Depth-first iterator over widget tree.
struct WidgetDfsIterator<'a> {
    tree: &'a WidgetTree,
    stack: Vec<WidgetId>,
}

impl Iterator for WidgetDfsIterator<'_> {
    type Item = WidgetId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;

        // Push children in reverse order so they're processed left-to-right
        if let Some(children) = self.tree.children.get(&id) {
            for &child in children.iter().rev() {
                self.stack.push(child);
            }
        }

        Some(id)
    }
}
