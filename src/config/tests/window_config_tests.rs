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

use crate::config::{
    default_version_string, version_string, ConfigError, WindowConfig, WindowSize,
    DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH, VERSION, VERSION_DATE,
};
use crate::core::{Appearance, ColorTheme};

const SCREEN: WindowSize = WindowSize::new(1920, 1080);

#[test]
fn test_default_config() {
    let config = WindowConfig::default();

    assert_eq!(config.title, DEFAULT_TITLE);
    assert_eq!(config.min_width, Some(DEFAULT_WIDTH));
    assert_eq!(config.min_height, Some(DEFAULT_HEIGHT));
    assert_eq!(config.appearance, Appearance::Dark);
    assert_eq!(config.color_theme, ColorTheme::Blue);
    assert_eq!(config.footbar_text, "v1.0.0 (2024-06-02)");
}

#[test]
fn test_explicit_size_wins_over_screen() {
    let config = WindowConfig::new("uJFlasher").with_min_size(Some(800), Some(600));

    assert_eq!(config.resolve_size(SCREEN), Ok(WindowSize::new(800, 600)));
}

#[test]
fn test_missing_size_defaults_to_screen() {
    let config = WindowConfig::new("uJFlasher");

    assert_eq!(config.resolve_size(SCREEN), Ok(SCREEN));
}

#[test]
fn test_partial_size_mixes_explicit_and_screen() {
    let config = WindowConfig::new("uJFlasher").with_min_size(Some(1024), None);

    assert_eq!(config.resolve_size(SCREEN), Ok(WindowSize::new(1024, 1080)));
}

#[test]
fn test_non_positive_size_rejected() {
    let config = WindowConfig::new("uJFlasher").with_min_size(Some(0), Some(600));

    assert_eq!(
        config.resolve_size(SCREEN),
        Err(ConfigError::InvalidSize {
            dimension: "width",
            value: 0
        })
    );

    let config = WindowConfig::new("uJFlasher").with_min_size(Some(800), Some(-5));
    assert!(matches!(
        config.resolve_size(SCREEN),
        Err(ConfigError::InvalidSize {
            dimension: "height",
            ..
        })
    ));
}

#[test]
fn test_sidebar_width_is_third_of_height() {
    assert_eq!(WindowSize::new(800, 600).sidebar_width(), 200);
}

#[test]
fn test_builder_methods() {
    let config = WindowConfig::new("Tool")
        .with_footbar_text("v2")
        .with_theme(Appearance::Light, ColorTheme::Green);

    assert_eq!(config.title, "Tool");
    assert_eq!(config.footbar_text, "v2");
    assert_eq!(config.appearance, Appearance::Light);
    assert_eq!(config.color_theme, ColorTheme::Green);
}

#[test]
fn test_version_string_format() {
    assert_eq!(
        version_string("1.0.0", "2024-06-02").as_deref(),
        Ok("v1.0.0 (2024-06-02)")
    );
}

#[test]
fn test_version_string_rejects_bad_date() {
    let result = version_string("1.0.0", "2024-13-40");

    assert!(matches!(result, Err(ConfigError::InvalidDate(_))));
}

#[test]
fn test_validate_rejects_non_positive_explicit_size() {
    let config = WindowConfig::new("uJFlasher").with_min_size(Some(0), Some(600));

    assert_eq!(
        config.validate(),
        Err(ConfigError::InvalidSize {
            dimension: "width",
            value: 0
        })
    );
}

#[test]
fn test_validate_accepts_screen_sized_and_default_configs() {
    assert_eq!(WindowConfig::new("uJFlasher").validate(), Ok(()));
    assert_eq!(WindowConfig::default().validate(), Ok(()));
}

#[test]
fn test_default_footbar_matches_version_string() {
    let expected = version_string(VERSION, VERSION_DATE).unwrap();

    assert_eq!(default_version_string(), expected);
    assert_eq!(WindowConfig::default().footbar_text, expected);
}
