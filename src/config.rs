//! Configuration loaded from TOML.
//!
//! ```toml
//! mode = "light"            # initial color mode: "light" | "dark"
//! render_mode = "inline"    # "fullscreen" | "inline"
//!
//! [breakpoints]             # first column of each tier above `sm`
//! md = 60
//! lg = 100
//! xl = 140
//! 2xl = 180
//! 3xl = 220
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::responsive::Breakpoints;
use crate::theme::ColorMode;

/// How frames reach the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Alternate screen, differential rendering, height fixed to the terminal.
    #[default]
    Fullscreen,
    /// Normal screen buffer, redrawn in place, height follows the content.
    Inline,
}

/// Minimum terminal widths at which each tier above `sm` begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BreakpointConfig {
    pub md: u16,
    pub lg: u16,
    pub xl: u16,
    #[serde(rename = "2xl")]
    pub xxl: u16,
    #[serde(rename = "3xl")]
    pub xxxl: u16,
}

impl Default for BreakpointConfig {
    fn default() -> Self {
        Self {
            md: 60,
            lg: 100,
            xl: 140,
            xxl: 180,
            xxxl: 220,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComposeConfig {
    #[serde(default)]
    pub breakpoints: BreakpointConfig,
    #[serde(default)]
    pub mode: ColorMode,
    #[serde(default)]
    pub render_mode: RenderMode,
}

impl ComposeConfig {
    /// Parse and validate a configuration document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.breakpoints()?;
        Ok(config)
    }

    /// Read and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Like [`load`](Self::load), but any failure yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    /// The configured thresholds as validated [`Breakpoints`].
    pub fn breakpoints(&self) -> Result<Breakpoints> {
        let b = &self.breakpoints;
        Breakpoints::new([b.md, b.lg, b.xl, b.xxl, b.xxxl])
    }
}
