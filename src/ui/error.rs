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

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur while building the user interface.
#[derive(Debug, Error)]
pub enum UiError {
    /// No buttons were registered, so there is no initial header label.
    #[error("No sidebar buttons registered")]
    EmptyRegistry,
    /// GTK could not connect to a display.
    #[error("Could not connect to a display")]
    NoDisplay,
    /// The window configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
