//! # UI Error Types
//!
//! Fatal layout and animation requests. These are programming errors at the
//! call site; nothing here is retried.
//!
//! Cell access on a table never produces one of these: addressing an empty
//! or out-of-range cell is a silent no-op.

use thiserror::Error;

/// Errors raised by layout controls, animations and configuration loading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    /// Splitter panel slot outside `{0, 1}`.
    #[error("invalid panel index: {0} (expected 0 or 1)")]
    InvalidPanelIndex(usize),

    /// Table column count at or above the fixed maximum.
    #[error("invalid column count: {requested} (maximum is {max}, exclusive)")]
    InvalidColumnCount {
        /// The rejected count.
        requested: usize,
        /// The exclusive upper bound.
        max: usize,
    },

    /// A capability that exists in the API but has no implementation.
    #[error("not implemented: {0}")]
    Unimplemented(&'static str),

    /// Animation length must be strictly positive and finite.
    #[error("invalid animation duration: {0}s")]
    InvalidDuration(f32),

    /// Ease exponent must be strictly positive and finite.
    #[error("invalid ease exponent: {0}")]
    InvalidEase(f32),

    /// Configuration could not be read or parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
