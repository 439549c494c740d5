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

/// Errors that can occur while resolving window configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A requested window dimension is zero or negative.
    #[error("Invalid window {dimension}: {value} (must be greater than zero)")]
    InvalidSize {
        dimension: &'static str,
        value: i32,
    },
    /// The version date is not a valid calendar date.
    #[error("Invalid version date: {0}")]
    InvalidDate(String),
}
