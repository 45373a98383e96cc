//! Time-driven widget animations.
//!
//! An [`Animation`] pairs a [`TimedAnimation`] clock window with one
//! [`AnimationKind`] describing which widget attribute it drives. The
//! [`AnimationScheduler`] owns every live animation and advances them once
//! per frame.
//!
//! Each kind reacts to three moments of the timer's lifecycle:
//! - start: write the start value,
//! - run: write the interpolated value,
//! - finish: write the exact end value and apply finish side effects.

mod scheduler;
mod size;
mod timed;

pub use scheduler::{AnimationScheduler, RegistryRetention, SharedScheduler};
pub use size::SizeTransition;
pub use timed::{AnimationPhase, TimedAnimation, TimerStep, Timing};

use crate::error::UiResult;
use crate::widget::{WidgetId, WidgetTree};

/// The attribute an animation drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    /// Widget width in pixels.
    Width(SizeTransition),
    /// Widget height in pixels.
    Height(SizeTransition),
}

impl AnimationKind {
    fn write(&self, tree: &mut WidgetTree, widget: WidgetId, value: i32) {
        match self {
            Self::Width(_) => tree.set_width(widget, value),
            Self::Height(_) => tree.set_height(widget, value),
        };
    }

    const fn transition(&self) -> &SizeTransition {
        match self {
            Self::Width(t) | Self::Height(t) => t,
        }
    }

    fn on_start(&self, tree: &mut WidgetTree, widget: WidgetId) {
        self.write(tree, widget, self.transition().start());
    }

    fn run(&self, tree: &mut WidgetTree, widget: WidgetId, eased: f32) {
        self.write(tree, widget, self.transition().value_at(eased));
    }

    fn on_finish(&self, tree: &mut WidgetTree, widget: WidgetId) {
        let transition = self.transition();
        self.write(tree, widget, transition.end());
        if transition.hides_on_finish() {
            tree.set_hidden(widget, true);
        }
    }
}

/// A single animation instance, driven by the scheduler until it finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    target: Option<WidgetId>,
    timer: TimedAnimation,
    kind: AnimationKind,
}

impl Animation {
    /// Creates an animation whose timing window opens `timing.delay`
    /// seconds after `now`.
    ///
    /// # Errors
    ///
    /// Rejects a non-positive duration or ease exponent.
    pub fn new(now: f32, timing: Timing, kind: AnimationKind) -> UiResult<Self> {
        Ok(Self {
            target: None,
            timer: TimedAnimation::new(now, timing)?,
            kind,
        })
    }

    /// Width transition from `from` to `to` pixels.
    ///
    /// # Errors
    ///
    /// See [`Animation::new`].
    pub fn width(now: f32, from: i32, to: i32, timing: Timing) -> UiResult<Self> {
        Self::new(now, timing, AnimationKind::Width(SizeTransition::new(from, to)))
    }

    /// Height transition from `from` to `to` pixels.
    ///
    /// # Errors
    ///
    /// See [`Animation::new`].
    pub fn height(now: f32, from: i32, to: i32, timing: Timing) -> UiResult<Self> {
        Self::new(now, timing, AnimationKind::Height(SizeTransition::new(from, to)))
    }

    /// Hides the widget when the animation finishes.
    #[must_use]
    pub fn hide_on_finish(mut self) -> Self {
        self.kind = match self.kind {
            AnimationKind::Width(t) => AnimationKind::Width(t.hiding()),
            AnimationKind::Height(t) => AnimationKind::Height(t.hiding()),
        };
        self
    }

    /// Widget this animation is attached to.
    #[must_use]
    pub const fn target(&self) -> Option<WidgetId> {
        self.target
    }

    /// Driven attribute.
    #[must_use]
    pub const fn kind(&self) -> &AnimationKind {
        &self.kind
    }

    /// Timing window and phase.
    #[must_use]
    pub const fn timer(&self) -> &TimedAnimation {
        &self.timer
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> AnimationPhase {
        self.timer.phase()
    }

    /// True once the end value has been written.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.timer.is_finished()
    }

    pub(crate) fn bind(&mut self, widget: WidgetId) {
        self.target = Some(widget);
    }

    /// Advances the timer to `now` and writes the result to the target.
    pub(crate) fn think(&mut self, now: f32, tree: &mut WidgetTree) {
        let Some(widget) = self.target else {
            return;
        };
        let step = self.timer.advance(now);
        if step.started {
            self.kind.on_start(tree, widget);
        }
        if let Some(eased) = step.eased {
            self.kind.run(tree, widget, eased);
        }
        if step.finished {
            self.kind.on_finish(tree, widget);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_think_writes_start_value_first() {
        let mut tree = WidgetTree::new();
        let panel = tree.create(None);
        tree.set_size(panel, 999, 40);

        let mut anim = Animation::height(0.0, 10, 50, Timing::new(1.0)).unwrap();
        anim.bind(panel);

        anim.think(0.0, &mut tree);
        assert_eq!(tree.size(panel), (999, 10));
        assert_eq!(anim.phase(), AnimationPhase::Running);

        anim.think(0.25, &mut tree);
        assert_eq!(tree.size(panel).1, 20);
    }

    #[test]
    fn test_finish_snaps_and_hides() {
        let mut tree = WidgetTree::new();
        let drawer = tree.create(None);

        let mut anim = Animation::width(0.0, 200, 0, Timing::new(0.5).with_ease(2.0))
            .unwrap()
            .hide_on_finish();
        anim.bind(drawer);

        anim.think(0.4, &mut tree);
        assert!(!tree.is_hidden(drawer));

        anim.think(0.6, &mut tree);
        assert!(anim.is_finished());
        assert_eq!(tree.size(drawer).0, 0);
        assert!(tree.is_hidden(drawer));
    }

    #[test]
    fn test_unbound_animation_does_nothing() {
        let mut tree = WidgetTree::new();
        let mut anim = Animation::width(0.0, 0, 10, Timing::new(1.0)).unwrap();
        anim.think(5.0, &mut tree);
        assert_eq!(anim.phase(), AnimationPhase::Pending);
    }
}
