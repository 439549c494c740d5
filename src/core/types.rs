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

//! src/core/types.rs
//!
//! Core type definitions for the sidebar button registry
//!
//! - `ButtonId`: Sequential identifier handed out at registration time
//! - `Callback`: Zero-argument action bound to a sidebar button
//! - `SidebarButton`: Immutable registration entry (id, label, callback)

use std::fmt;

/// Identifier of a registered sidebar button
///
/// Identifiers start at 0 and grow by one per registration. They are
/// never reused within a single run.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ButtonId(usize);

impl ButtonId {
    /// Wraps a raw index as a button identifier
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ButtonId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-argument action bound to a button
///
/// Callbacks run on the GTK main loop, so they are neither `Send` nor
/// `Sync`. A callback that blocks stalls rendering.
pub type Callback = Box<dyn Fn()>;

/// A registered sidebar button
///
/// Created by [`ButtonRegistry::register`](crate::core::ButtonRegistry::register)
/// and never modified afterwards.
pub struct SidebarButton {
    id: ButtonId,
    label: String,
    callback: Callback,
}

impl SidebarButton {
    pub(crate) fn new(id: ButtonId, label: String, callback: Callback) -> Self {
        Self {
            id,
            label,
            callback,
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the bound callback
    pub fn invoke(&self) {
        (self.callback)();
    }
}

impl fmt::Debug for SidebarButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidebarButton")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for SidebarButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.label)
    }
}
