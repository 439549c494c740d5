// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Window configuration
//!
//! Everything the application layer decides before the window exists:
//! title, minimum size, appearance and the footer text.
//!
//! # Size resolution
//!
//! Each minimum dimension is either given explicitly or falls back to the
//! detected screen size:
//!
//! ```text
//! requested width  = Some(800)  ──►  800
//! requested height = None       ──►  screen height
//! ```

mod error;

pub use error::ConfigError;

use chrono::NaiveDate;

use crate::core::{Appearance, ColorTheme};

/// Default window title
pub const DEFAULT_TITLE: &str = "uJFlasher";

/// Default minimum window width
pub const DEFAULT_WIDTH: i32 = 800;

/// Default minimum window height
pub const DEFAULT_HEIGHT: i32 = 600;

/// Software version shown in the footer
pub const VERSION: &str = "1.0.0";

/// Release date shown in the footer (`YYYY-MM-DD`)
pub const VERSION_DATE: &str = "2024-06-02";

/// A width/height pair in pixels
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Width requested for the sidebar (a third of the window height)
    pub fn sidebar_width(&self) -> i32 {
        self.height / 3
    }
}

/// Formats the footer version string, e.g. `v1.0.0 (2024-06-02)`
///
/// # Errors
///
/// Returns [`ConfigError::InvalidDate`] if `date` is not `YYYY-MM-DD`.
pub fn version_string(version: &str, date: &str) -> Result<String, ConfigError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| ConfigError::InvalidDate(format!("{}: {}", date, e)))?;

    Ok(format_version(version, &date.format("%Y-%m-%d").to_string()))
}

/// Footer text for the built-in version and release date
pub fn default_version_string() -> String {
    format_version(VERSION, VERSION_DATE)
}

fn format_version(version: &str, date: &str) -> String {
    format!("v{} ({})", version, date)
}

/// Configuration of the main window
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Minimum width; `None` uses the screen width
    pub min_width: Option<i32>,
    /// Minimum height; `None` uses the screen height
    pub min_height: Option<i32>,
    /// Light/dark appearance
    pub appearance: Appearance,
    /// Accent colour family
    pub color_theme: ColorTheme,
    /// Fixed text shown in the footer bar
    pub footbar_text: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            min_width: Some(DEFAULT_WIDTH),
            min_height: Some(DEFAULT_HEIGHT),
            appearance: Appearance::default(),
            color_theme: ColorTheme::default(),
            footbar_text: default_version_string(),
        }
    }
}

impl WindowConfig {
    /// Creates a config with the given title and screen-sized minimums
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            min_width: None,
            min_height: None,
            ..Self::default()
        }
    }

    /// Sets the minimum size
    pub fn with_min_size(mut self, width: Option<i32>, height: Option<i32>) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    /// Sets the footer text
    pub fn with_footbar_text(mut self, text: impl Into<String>) -> Self {
        self.footbar_text = text.into();
        self
    }

    /// Sets appearance and accent colour
    pub fn with_theme(mut self, appearance: Appearance, color_theme: ColorTheme) -> Self {
        self.appearance = appearance;
        self.color_theme = color_theme;
        self
    }

    /// Checks the explicitly requested sizes
    ///
    /// Sizes left to the screen cannot be checked until a display exists.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] if an explicit dimension is
    /// not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("width", self.min_width)?;
        check_dimension("height", self.min_height)?;
        Ok(())
    }

    /// Resolves the minimum window size against the detected screen size
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSize`] if an explicit dimension is
    /// not positive.
    pub fn resolve_size(&self, screen: WindowSize) -> Result<WindowSize, ConfigError> {
        let width = resolve_dimension("width", self.min_width, screen.width)?;
        let height = resolve_dimension("height", self.min_height, screen.height)?;
        Ok(WindowSize::new(width, height))
    }
}

fn check_dimension(dimension: &'static str, requested: Option<i32>) -> Result<(), ConfigError> {
    match requested {
        Some(value) if value <= 0 => Err(ConfigError::InvalidSize { dimension, value }),
        _ => Ok(()),
    }
}

fn resolve_dimension(
    dimension: &'static str,
    requested: Option<i32>,
    screen: i32,
) -> Result<i32, ConfigError> {
    check_dimension(dimension, requested)?;
    Ok(requested.unwrap_or(screen))
}

#[cfg(test)]
mod tests;
