//! Per-widget animation registry.
//!
//! The frame loop owns one [`AnimationScheduler`] and passes it by reference
//! to whatever starts animations. Every tick reads the clock once, so all
//! animations advanced in the same tick observe the same time.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::Animation;
use crate::config::AnimationConfig;
use crate::platform::Clock;
use crate::widget::{WidgetId, WidgetTree};

/// Scheduler behind a coarse lock, for hosts that tick on a dedicated
/// update thread while other threads start animations.
pub type SharedScheduler = Arc<Mutex<AnimationScheduler>>;

/// What happens to a widget's registry entry once its last animation
/// finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryRetention {
    /// Keep the empty entry until the widget is cancelled.
    #[default]
    Retain,
    /// Drop empty entries at the end of every tick.
    Evict,
}

/// Registry of live animations keyed by the widget they drive.
///
/// Within one widget, animations are advanced in attach order. Order across
/// widgets is unspecified.
#[derive(Debug, Default)]
pub struct AnimationScheduler {
    registry: HashMap<WidgetId, Vec<Animation>>,
    retention: RegistryRetention,
    now: f32,
}

impl AnimationScheduler {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new(retention: RegistryRetention) -> Self {
        Self {
            registry: HashMap::with_capacity(64),
            retention,
            now: 0.0,
        }
    }

    /// Creates a scheduler from the `[animation]` config section.
    #[must_use]
    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.retention)
    }

    /// Moves the scheduler behind a lock.
    #[must_use]
    pub fn into_shared(self) -> SharedScheduler {
        Arc::new(Mutex::new(self))
    }

    /// Empty-entry policy.
    #[must_use]
    pub const fn retention(&self) -> RegistryRetention {
        self.retention
    }

    /// Time observed by the most recent tick. New animations should start
    /// from here so their first tick does not skip ahead.
    #[must_use]
    pub const fn now(&self) -> f32 {
        self.now
    }

    /// Binds `animation` to `widget` and appends it to the widget's
    /// sequence.
    pub fn attach(&mut self, widget: WidgetId, mut animation: Animation) {
        animation.bind(widget);
        let sequence = self.registry.entry(widget).or_default();
        sequence.push(animation);
        tracing::debug!(widget = widget.raw(), active = sequence.len(), "animation attached");
    }

    /// Drops every animation of `widget`, mid-flight or not, along with its
    /// registry entry. Does nothing if the widget has none.
    pub fn cancel(&mut self, widget: WidgetId) {
        if let Some(sequence) = self.registry.remove(&widget) {
            tracing::debug!(widget = widget.raw(), dropped = sequence.len(), "animations cancelled");
        }
    }

    /// Advances every animation once, reading `clock` a single time.
    pub fn tick(&mut self, tree: &mut WidgetTree, clock: &mut impl Clock) {
        let now = clock.seconds();
        self.tick_at(tree, now);
    }

    /// Advances every animation to `now` and removes the ones that finished.
    pub fn tick_at(&mut self, tree: &mut WidgetTree, now: f32) {
        self.now = now;
        let mut finished = 0usize;

        for (widget, sequence) in &mut self.registry {
            sequence.retain_mut(|animation| {
                animation.think(now, tree);
                let done = animation.is_finished();
                if done {
                    finished += 1;
                    tracing::debug!(widget = widget.raw(), "animation finished");
                }
                !done
            });
        }

        if self.retention == RegistryRetention::Evict {
            self.registry.retain(|_, sequence| !sequence.is_empty());
        }

        tracing::trace!(now, finished, tracked = self.registry.len(), "animation tick");
    }

    /// True if the widget has at least one live animation.
    #[must_use]
    pub fn is_animating(&self, widget: WidgetId) -> bool {
        self.animation_count(widget) > 0
    }

    /// Number of live animations on the widget.
    #[must_use]
    pub fn animation_count(&self, widget: WidgetId) -> usize {
        self.registry.get(&widget).map_or(0, Vec::len)
    }

    /// Live animations on the widget, in think order.
    #[must_use]
    pub fn animations(&self, widget: WidgetId) -> &[Animation] {
        self.registry.get(&widget).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if the widget has a registry entry, possibly empty.
    #[must_use]
    pub fn is_tracked(&self, widget: WidgetId) -> bool {
        self.registry.contains_key(&widget)
    }

    /// Number of registry entries, including empty ones.
    #[must_use]
    pub fn tracked_widgets(&self) -> usize {
        self.registry.len()
    }
}
