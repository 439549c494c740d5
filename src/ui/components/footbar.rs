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

//! Footer bar component
//!
//! Accent-coloured strip along the bottom of the window with a fixed,
//! right-aligned status string (the version).

use gtk4::{prelude::*, Align, Box as GtkBox, Label, Orientation};

/// Bottom status strip
pub struct Footbar {
    /// Root widget (horizontal box)
    widget: GtkBox,
}

impl Footbar {
    /// Creates a footer bar showing `text`
    pub fn new(text: &str) -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Horizontal)
            .hexpand(true)
            .build();
        widget.add_css_class("footbar");

        let label = Label::builder()
            .label(text)
            .halign(Align::End)
            .hexpand(true)
            .margin_end(15)
            .build();
        label.add_css_class("footbar-label");
        widget.append(&label);

        Self { widget }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }
}
