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

//! Sidebar button registry
//!
//! Holds every registered button in insertion order. Because identifiers
//! are handed out sequentially and never removed, a button's identifier
//! is also its position in the backing vector, so lookups are a plain
//! index.

use tracing::{debug, info};

use crate::core::types::{ButtonId, Callback, SidebarButton};

/// Something that can show the header text of the content area
///
/// Implemented by the UI controller; tests use a recording stub.
pub trait HeaderDisplay {
    /// Replaces the displayed header text
    fn show_header(&self, text: &str);
}

/// Ordered collection of sidebar buttons
#[derive(Debug, Default)]
pub struct ButtonRegistry {
    buttons: Vec<SidebarButton>,
}

impl ButtonRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a button and assigns it the next identifier
    ///
    /// # Example
    ///
    /// ```
    /// use ujflasher::core::{ButtonId, ButtonRegistry};
    ///
    /// let mut registry = ButtonRegistry::new();
    /// let id = registry.register("Device Info", || println!("info"));
    /// assert_eq!(id, ButtonId::new(0));
    /// ```
    pub fn register<F>(&mut self, label: impl Into<String>, callback: F) -> ButtonId
    where
        F: Fn() + 'static,
    {
        let id = ButtonId::new(self.buttons.len());
        let label = label.into();
        debug!("Registered button {} \"{}\"", id, label);

        let callback: Callback = Box::new(callback);
        self.buttons.push(SidebarButton::new(id, label, callback));
        id
    }

    /// Looks up a button by identifier
    pub fn get(&self, id: ButtonId) -> Option<&SidebarButton> {
        self.buttons.get(id.index())
    }

    /// Returns the first registered button, if any
    pub fn first(&self) -> Option<&SidebarButton> {
        self.buttons.first()
    }

    /// Number of registered buttons
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Iterates buttons in registration order
    pub fn iter(&self) -> impl Iterator<Item = &SidebarButton> {
        self.buttons.iter()
    }

    /// Handles a press of the button with the given identifier
    ///
    /// Unknown identifiers are ignored. For a known button the header is
    /// updated to its label first, then its callback runs.
    ///
    /// # Returns
    ///
    /// `true` if a button was found and invoked
    pub fn dispatch(&self, id: ButtonId, header: &dyn HeaderDisplay) -> bool {
        let Some(button) = self.get(id) else {
            debug!("Ignoring press of unregistered button {}", id);
            return false;
        };

        info!("Button \"{}\" pressed", button.label());
        header.show_header(button.label());
        button.invoke();
        true
    }
}

impl<'a> IntoIterator for &'a ButtonRegistry {
    type Item = &'a SidebarButton;
    type IntoIter = std::slice::Iter<'a, SidebarButton>;

    fn into_iter(self) -> Self::IntoIter {
        self.buttons.iter()
    }
}
