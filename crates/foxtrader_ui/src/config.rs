//! # UI Configuration
//!
//! Tunables loaded once at startup from TOML. Every section is optional;
//! missing keys fall back to the stock values below.
//!
//! ```toml
//! [table]
//! default_row_height = 22
//! default_column_width = 20
//! cell_padding = 3
//! cell_spacing = 2
//!
//! [animation]
//! retention = "evict"
//!
//! [clock]
//! max_step_seconds = 0.1
//!
//! [skin]
//! draw_margin_scale = 1.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::RegistryRetention;
use crate::error::{UiError, UiResult};

/// Table and row defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Height given to every new row.
    pub default_row_height: i32,
    /// Initial pixel width of every column.
    pub default_column_width: i32,
    /// Padding on all four sides of a cell.
    pub cell_padding: i32,
    /// Right margin of a cell, separating it from the next one.
    pub cell_spacing: i32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_row_height: 22,
            default_column_width: 20,
            cell_padding: 3,
            cell_spacing: 2,
        }
    }
}

/// Animation scheduler settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// What happens to a widget's registry entry once it has no animations.
    pub retention: RegistryRetention,
}

/// Frame clock settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Largest amount of time a single clock read may advance.
    pub max_step_seconds: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            max_step_seconds: 0.1,
        }
    }
}

/// Skin patch settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinConfig {
    /// Scale applied to nine-slice margins at draw time.
    pub draw_margin_scale: f32,
}

impl Default for SkinConfig {
    fn default() -> Self {
        Self {
            draw_margin_scale: 1.0,
        }
    }
}

/// Complete UI configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Table defaults.
    pub table: TableConfig,
    /// Animation scheduler settings.
    pub animation: AnimationConfig,
    /// Frame clock settings.
    pub clock: ClockConfig,
    /// Skin settings.
    pub skin: SkinConfig,
}

impl UiConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] if the text is not valid TOML or a value
    /// has the wrong type.
    pub fn from_toml_str(text: &str) -> UiResult<Self> {
        toml::from_str(text).map_err(|e| UiError::Config(e.to_string()))
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| UiError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded ui config");
        Ok(config)
    }
}
