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

//! MVC Controller - Mediates between Model (ButtonRegistry) and View (GTK4 components)
//!
//! # Responsibilities
//!
//! - Own the button registry for the lifetime of the window
//! - Dispatch sidebar presses to the registered callbacks
//! - Track the header text and the selected button
//! - Notify subscribed views when either changes
//!
//! # Architecture
//!
//! The Controller owns the Model but doesn't know about GTK4 widgets.
//! Views subscribe with `connect_*` methods and update their widgets
//! from the notifications.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::core::{ButtonId, ButtonRegistry, HeaderDisplay, SidebarButton};
use crate::ui::UiError;

type TextListener = Box<dyn Fn(&str)>;
type SelectionListener = Box<dyn Fn(ButtonId)>;

/// MVC Controller coordinating Model and View
pub struct Controller {
    /// Registered sidebar buttons (immutable once handed over)
    registry: ButtonRegistry,
    /// Text currently shown in the content header
    header_text: RefCell<String>,
    /// Button whose label is in the header
    selected: Cell<ButtonId>,
    /// Fixed text of the footer bar
    footbar_text: String,
    header_listeners: RefCell<Vec<TextListener>>,
    selection_listeners: RefCell<Vec<SelectionListener>>,
}

impl Controller {
    /// Creates a new Controller owning the given registry
    ///
    /// The header starts out showing the first registered button's label.
    ///
    /// # Returns
    ///
    /// * `Ok(Controller)` - Successfully initialised
    /// * `Err(UiError::EmptyRegistry)` - No buttons were registered
    ///
    /// # Example
    ///
    /// ```
    /// use ujflasher::core::ButtonRegistry;
    /// use ujflasher::ui::Controller;
    ///
    /// let mut registry = ButtonRegistry::new();
    /// registry.register("Device Info", || {});
    ///
    /// let controller = Controller::new(registry, "v1.0.0")?;
    /// assert_eq!(controller.header_text(), "Device Info");
    /// # Ok::<(), ujflasher::ui::UiError>(())
    /// ```
    pub fn new(registry: ButtonRegistry, footbar_text: impl Into<String>) -> Result<Self, UiError> {
        let first = registry.first().ok_or(UiError::EmptyRegistry)?;
        let header_text = first.label().to_string();
        let selected = first.id();

        Ok(Self {
            registry,
            header_text: RefCell::new(header_text),
            selected: Cell::new(selected),
            footbar_text: footbar_text.into(),
            header_listeners: RefCell::new(Vec::new()),
            selection_listeners: RefCell::new(Vec::new()),
        })
    }

    /// Handles a sidebar button press
    ///
    /// Unknown identifiers are a silent no-op: neither the header nor the
    /// selection changes and no callback runs.
    ///
    /// # Returns
    ///
    /// `true` if a registered button handled the press
    pub fn press(&self, id: ButtonId) -> bool {
        if !self.registry.dispatch(id, self) {
            return false;
        }

        self.selected.set(id);
        for listener in self.selection_listeners.borrow().iter() {
            listener(id);
        }
        true
    }

    /// Returns a press handler for widget signals
    ///
    /// The handler keeps only a weak reference, so widgets holding it do
    /// not keep the Controller alive. Once the Controller is dropped the
    /// handler does nothing.
    pub fn press_handler(self: &Rc<Self>) -> impl Fn(ButtonId) + 'static {
        let controller: Weak<Self> = Rc::downgrade(self);

        move |id| {
            if let Some(controller) = controller.upgrade() {
                controller.press(id);
            }
        }
    }

    /// Returns the registered buttons in identifier order
    pub fn buttons(&self) -> impl Iterator<Item = &SidebarButton> {
        self.registry.iter()
    }

    /// Returns total count of registered buttons
    pub fn button_count(&self) -> usize {
        self.registry.len()
    }

    /// Returns the current header text
    pub fn header_text(&self) -> String {
        self.header_text.borrow().clone()
    }

    /// Returns the currently selected button
    pub fn selected(&self) -> ButtonId {
        self.selected.get()
    }

    pub fn footbar_text(&self) -> &str {
        &self.footbar_text
    }

    /// Subscribes to header text changes
    pub fn connect_header_changed<F>(&self, listener: F)
    where
        F: Fn(&str) + 'static,
    {
        self.header_listeners.borrow_mut().push(Box::new(listener));
    }

    /// Subscribes to selection changes
    pub fn connect_selection_changed<F>(&self, listener: F)
    where
        F: Fn(ButtonId) + 'static,
    {
        self.selection_listeners.borrow_mut().push(Box::new(listener));
    }
}

impl HeaderDisplay for Controller {
    fn show_header(&self, text: &str) {
        debug!("Header -> \"{}\"", text);
        *self.header_text.borrow_mut() = text.to_string();

        for listener in self.header_listeners.borrow().iter() {
            listener(text);
        }
    }
}
