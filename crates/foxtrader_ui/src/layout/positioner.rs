//! Controls that snap their children to an anchor.

use std::ops::{Deref, DerefMut};

use super::{Anchor, LayoutPass};
use crate::widget::{WidgetId, WidgetTree};

/// Places every direct child at one anchor inside its padded area.
///
/// Positions are recomputed from scratch after every layout pass, so
/// whatever a child's own layout decided is overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positioner {
    id: WidgetId,
    anchor: Anchor,
}

impl Positioner {
    /// Creates the positioner widget with the default `LEFT | TOP` anchor.
    pub fn new(tree: &mut WidgetTree, parent: Option<WidgetId>) -> Self {
        Self::with_anchor(tree, parent, Anchor::LEFT | Anchor::TOP)
    }

    /// Creates the positioner widget with a specific anchor.
    pub fn with_anchor(tree: &mut WidgetTree, parent: Option<WidgetId>, anchor: Anchor) -> Self {
        Self {
            id: tree.create(parent),
            anchor,
        }
    }

    /// The positioner's own widget.
    #[must_use]
    pub const fn id(&self) -> WidgetId {
        self.id
    }

    /// Anchor applied to the children.
    #[must_use]
    pub const fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Changes the anchor. Takes effect on the next pass.
    pub fn set_anchor(&mut self, anchor: Anchor) {
        self.anchor = anchor;
    }
}

impl LayoutPass for Positioner {
    fn post_layout(&mut self, tree: &mut WidgetTree) {
        let children = tree.children(self.id).to_vec();
        for child in children {
            tree.set_relative_position(child, self.anchor, 0, 0);
        }
    }
}

/// A [`Positioner`] that centres its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Center(Positioner);

impl Center {
    /// Creates the centring widget.
    pub fn new(tree: &mut WidgetTree, parent: Option<WidgetId>) -> Self {
        Self(Positioner::with_anchor(tree, parent, Anchor::CENTER))
    }
}

impl Deref for Center {
    type Target = Positioner;

    fn deref(&self) -> &Positioner {
        &self.0
    }
}

impl DerefMut for Center {
    fn deref_mut(&mut self) -> &mut Positioner {
        &mut self.0
    }
}

impl LayoutPass for Center {
    fn post_layout(&mut self, tree: &mut WidgetTree) {
        self.0.post_layout(tree);
    }
}
