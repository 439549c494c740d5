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

//! Theme definitions
//!
//! The window is dark-grey with a blue-ish accent by default. The accent
//! (footer bar and selected sidebar button) follows the chosen
//! [`ColorTheme`]; the greys are fixed.

use clap::ValueEnum;
use std::fmt;

/// Light/dark appearance requested from GTK
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Appearance {
    /// Follow the desktop setting
    System,
    #[default]
    Dark,
    Light,
}

impl Appearance {
    /// Value for GTK's `gtk-application-prefer-dark-theme` setting
    ///
    /// `None` means the setting is left untouched.
    pub fn prefers_dark(self) -> Option<bool> {
        match self {
            Appearance::System => None,
            Appearance::Dark => Some(true),
            Appearance::Light => Some(false),
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Appearance::System => "system",
            Appearance::Dark => "dark",
            Appearance::Light => "light",
        };
        write!(f, "{}", name)
    }
}

/// Accent colour family
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ColorTheme {
    #[default]
    Blue,
    Green,
    DarkBlue,
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorTheme::Blue => "blue",
            ColorTheme::Green => "green",
            ColorTheme::DarkBlue => "dark-blue",
        };
        write!(f, "{}", name)
    }
}

/// Colours used by the stylesheet
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Palette {
    pub window_bg: &'static str,
    pub header_fg: &'static str,
    pub sidebar_bg: &'static str,
    pub sidebar_btn_bg: &'static str,
    pub sidebar_btn_fg: &'static str,
    pub sidebar_btn_hover_bg: &'static str,
    pub sidebar_btn_selected_bg: &'static str,
    pub sidebar_btn_selected_hover_bg: &'static str,
    pub footbar_bg: &'static str,
}

impl Palette {
    /// Builds the palette for an accent colour
    pub fn for_theme(theme: ColorTheme) -> Self {
        let (footbar_bg, selected_bg, selected_hover_bg) = match theme {
            ColorTheme::Blue => ("#1D6AB8", "#04395E", "#06558C"),
            ColorTheme::Green => ("#2FA572", "#106A43", "#168A57"),
            ColorTheme::DarkBlue => ("#144870", "#0D2F4A", "#1A4D75"),
        };

        Self {
            window_bg: "#28292A",
            header_fg: "#FFFFFF",
            sidebar_bg: "#2B2B2B",
            sidebar_btn_bg: "#252526",
            sidebar_btn_fg: "#C7C7C7",
            sidebar_btn_hover_bg: "#353737",
            sidebar_btn_selected_bg: selected_bg,
            sidebar_btn_selected_hover_bg: selected_hover_bg,
            footbar_bg,
        }
    }

    /// Renders the application stylesheet
    ///
    /// Class names match the ones set by the UI components:
    /// `sidebar`, `sidebar-title`, `sidebar-button`, `selected`,
    /// `content-header`, `footbar`, `footbar-label`.
    pub fn stylesheet(&self) -> String {
        format!(
            r#"window.main-window {{
    background-color: {window_bg};
}}

.sidebar {{
    background-color: {sidebar_bg};
    padding: 0 5px;
}}

.sidebar-title {{
    font-size: 20px;
    font-weight: bold;
    color: {header_fg};
}}

button.sidebar-button {{
    background-image: none;
    background-color: {btn_bg};
    color: {btn_fg};
}}

button.sidebar-button:hover {{
    background-color: {btn_hover_bg};
}}

button.sidebar-button.selected {{
    background-color: {selected_bg};
}}

button.sidebar-button.selected:hover {{
    background-color: {selected_hover_bg};
}}

.content-header {{
    font-size: 20px;
    font-weight: bold;
    color: {header_fg};
}}

.footbar {{
    background-color: {footbar_bg};
}}

.footbar-label {{
    font-size: 10px;
    font-weight: bold;
    color: {header_fg};
}}
"#,
            window_bg = self.window_bg,
            sidebar_bg = self.sidebar_bg,
            header_fg = self.header_fg,
            btn_bg = self.sidebar_btn_bg,
            btn_fg = self.sidebar_btn_fg,
            btn_hover_bg = self.sidebar_btn_hover_bg,
            selected_bg = self.sidebar_btn_selected_bg,
            selected_hover_bg = self.sidebar_btn_selected_hover_bg,
            footbar_bg = self.footbar_bg,
        )
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(ColorTheme::default())
    }
}
