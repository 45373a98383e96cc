//! # FoxTrader UI System
//!
//! Retained-mode widget toolkit for the FoxTrader trading game:
//! - Frame-stepped size animations with power-curve easing
//! - Anchor, splitter and table layout in whole pixels
//! - Nine-slice skinning from a texture atlas
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UI FRAME                           │
//! ├──────────────────────────────────────────────────────────┤
//! │  Clock → Scheduler tick → Layout → Post-layout → Skin   │
//! │    ↓           ↓             ↓          ↓          ↓     │
//! │ 0.1s cap   Width/Height   Rows/Cells  Autosize   Batches │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Canvas`] owns the [`WidgetTree`] and the [`AnimationScheduler`]; layout
//! controls ([`Positioner`], [`Splitter`], [`Table`]) keep [`WidgetId`]s into
//! the tree and run through [`LayoutPass`]. Skin patches draw through any
//! [`SkinRenderer`], such as the batching [`UIRenderer`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod canvas;
pub mod config;
pub mod error;
pub mod layout;
pub mod platform;
pub mod render;
pub mod skin;
pub mod style;
pub mod widget;

pub use animation::{
    Animation, AnimationKind, AnimationPhase, AnimationScheduler, RegistryRetention,
    SharedScheduler, SizeTransition, TimedAnimation, Timing,
};
pub use canvas::Canvas;
pub use config::UiConfig;
pub use error::{UiError, UiResult};
pub use layout::{
    Anchor, Center, LayoutPass, Margin, Padding, Positioner, Rect, SplitDirection, Splitter,
    Table, TableRow, MAX_TABLE_COLUMNS,
};
pub use platform::{Clipboard, Clock, ManualClock, MemoryClipboard, SteppedClock};
pub use render::{RenderCommand, UIBatch, UIRenderer, UIVertex};
pub use skin::{Bordered, Single, SkinRenderer, Texture, UvRect};
pub use style::Color;
pub use widget::{Dock, WidgetId, WidgetTree};
