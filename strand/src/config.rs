//! TOML configuration for display and prompt settings.
//!
//! Every field has a default, so a missing file, a missing section, or a
//! missing key all behave the same: ANSI green-background marker and a bare
//! `>` prompt.
//!
//! ```toml
//! [display]
//! marker_start = "["
//! marker_end = "]"
//!
//! [prompt]
//! text = "edit> "
//! ```

use crate::{
    error::{ParseConfigSnafu, ReadConfigSnafu, Result},
    marker::{Marker, DEFAULT_MARKER_END, DEFAULT_MARKER_START},
};
use serde::Deserialize;
use snafu::ResultExt;
use std::{fs, path::Path};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Sequence emitted before the character under the cursor.
    pub marker_start: String,
    /// Sequence emitted after the character under the cursor.
    pub marker_end: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            marker_start: DEFAULT_MARKER_START.to_string(),
            marker_end: DEFAULT_MARKER_END.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub text: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            text: ">".to_string(),
        }
    }
}

impl Config {
    /// Loads and parses a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).context(ReadConfigSnafu { path })?;
        let config = toml::from_str(&raw).context(ParseConfigSnafu { path })?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The overlay marker described by this config.
    pub fn marker(&self) -> Marker {
        Marker::new(&*self.display.marker_start, &*self.display.marker_end)
    }
}
