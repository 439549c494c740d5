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

//! Sidebar component
//!
//! Vertical panel with a "Menu" title and one button per registered
//! sidebar entry, in identifier order.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────┐
//! │    Menu      │
//! │ [Device Info]│
//! │ [ Flash FW  ]│
//! │ [   Debug   ]│
//! │ [   About   ]│
//! └──────────────┘
//! ```

use gtk4::{prelude::*, Box as GtkBox, Button, Label, Orientation};
use std::rc::Rc;

use crate::core::ButtonId;
use crate::ui::Controller;

/// CSS class marking the button whose label is in the header
const SELECTED_CLASS: &str = "selected";

/// Left-hand menu of sidebar buttons
pub struct Sidebar {
    /// Root widget (vertical box)
    widget: GtkBox,
    /// Buttons in identifier order
    buttons: Vec<(ButtonId, Button)>,
}

impl Sidebar {
    /// Creates the sidebar from the controller's registered buttons
    ///
    /// # Arguments
    /// * `controller` - Shared Controller reference
    /// * `width` - Requested sidebar width in pixels
    pub fn new(controller: Rc<Controller>, width: i32) -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .width_request(width)
            .vexpand(true)
            .margin_start(5)
            .margin_end(5)
            .build();
        widget.add_css_class("sidebar");

        let title = Label::builder()
            .label("Menu")
            .margin_start(20)
            .margin_end(20)
            .margin_top(10)
            .margin_bottom(30)
            .build();
        title.add_css_class("sidebar-title");
        widget.append(&title);

        let buttons: Vec<(ButtonId, Button)> = controller
            .buttons()
            .map(|entry| {
                let button = Button::builder()
                    .label(entry.label())
                    .margin_start(20)
                    .margin_end(20)
                    .margin_top(10)
                    .margin_bottom(10)
                    .build();
                button.add_css_class("sidebar-button");
                widget.append(&button);
                (entry.id(), button)
            })
            .collect();

        let sidebar = Self { widget, buttons };
        sidebar.set_selected(controller.selected());
        sidebar
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Highlights the given button and clears the others
    pub fn set_selected(&self, id: ButtonId) {
        for (button_id, button) in &self.buttons {
            if *button_id == id {
                button.add_css_class(SELECTED_CLASS);
            } else {
                button.remove_css_class(SELECTED_CLASS);
            }
        }
    }

    /// Connects a handler called with the identifier of a clicked button
    pub fn connect_pressed<F>(&self, handler: F)
    where
        F: Fn(ButtonId) + 'static,
    {
        let handler = Rc::new(handler);

        for (id, button) in &self.buttons {
            let id = *id;
            let handler = handler.clone();
            button.connect_clicked(move |_| handler(id));
        }
    }
}
