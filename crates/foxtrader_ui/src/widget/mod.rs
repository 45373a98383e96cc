//! Widget arena.
//!
//! Widgets are plain state records in a [`WidgetTree`]; layout controls and
//! animations refer to them by [`WidgetId`].

mod core;
mod measure;
mod tree;

pub use self::core::{Dock, WidgetFlags, WidgetId, WidgetState};
pub use measure::{MonospaceMeasurer, TextMeasurer};
pub use tree::WidgetTree;
