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

//! src/core/mod.rs
//!
//! Core module
//!
//! Toolkit-independent pieces of the application:
//! - Type definitions for sidebar buttons and their identifiers
//! - The button registry and its dispatch contract
//! - Theme and colour palette definitions
//!
//! Nothing in here touches GTK, so everything can be unit tested
//! without a display server.

pub mod registry;
pub mod theme;
pub mod types;

pub use registry::{ButtonRegistry, HeaderDisplay};
pub use theme::{Appearance, ColorTheme, Palette};
pub use types::*;

#[cfg(test)]
mod tests;
