//! Frame driver.
//!
//! A [`Canvas`] owns the widget tree and the animation scheduler and runs
//! one frame as: animation tick, then the two layout phases.

use crate::animation::{Animation, AnimationScheduler};
use crate::config::UiConfig;
use crate::layout::LayoutPass;
use crate::platform::Clock;
use crate::widget::{WidgetId, WidgetTree};

/// Root of a UI: the widget tree plus the animations driving it.
#[derive(Debug, Default)]
pub struct Canvas {
    /// Every widget of this UI.
    pub tree: WidgetTree,
    /// Live animations on those widgets.
    pub scheduler: AnimationScheduler,
}

impl Canvas {
    /// Creates an empty canvas.
    #[must_use]
    pub fn new(tree: WidgetTree, scheduler: AnimationScheduler) -> Self {
        Self { tree, scheduler }
    }

    /// Creates an empty canvas configured from `config`.
    #[must_use]
    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(WidgetTree::new(), AnimationScheduler::from_config(&config.animation))
    }

    /// Attaches `animation` to `widget`.
    pub fn animate(&mut self, widget: WidgetId, animation: Animation) {
        self.scheduler.attach(widget, animation);
    }

    /// Advances every animation once.
    pub fn think(&mut self, clock: &mut impl Clock) {
        self.scheduler.tick(&mut self.tree, clock);
    }

    /// Runs `layout` on every pass, then `post_layout` on every pass.
    pub fn layout(&mut self, passes: &mut [&mut dyn LayoutPass]) {
        for pass in passes.iter_mut() {
            pass.layout(&mut self.tree);
        }
        for pass in passes.iter_mut() {
            pass.post_layout(&mut self.tree);
        }
    }

    /// One full frame: [`Canvas::think`] then [`Canvas::layout`].
    pub fn frame(&mut self, clock: &mut impl Clock, passes: &mut [&mut dyn LayoutPass]) {
        self.think(clock);
        self.layout(passes);
    }

    /// Cancels the animations of `widget` and its descendants, then removes
    /// them from the tree. Returns the removed ids.
    pub fn destroy(&mut self, widget: WidgetId) -> Vec<WidgetId> {
        for id in self.tree.subtree(widget) {
            self.scheduler.cancel(id);
        }
        let removed = self.tree.remove(widget);
        tracing::debug!(widget = widget.raw(), removed = removed.len(), "widget destroyed");
        removed
    }
}
