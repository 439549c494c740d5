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

//! Content panel component
//!
//! Main area to the right of the sidebar. Shows a bold header with the
//! label of the last pressed sidebar button.

use gtk4::{prelude::*, Align, Box as GtkBox, Label, Orientation};

/// Main content area with its header label
pub struct ContentPanel {
    /// Root widget (vertical box)
    widget: GtkBox,
    /// Header label
    header: Label,
}

impl ContentPanel {
    /// Creates the content panel showing `header_text`
    pub fn new(header_text: &str) -> Self {
        let widget = GtkBox::builder()
            .orientation(Orientation::Vertical)
            .hexpand(true)
            .vexpand(true)
            .margin_start(25)
            .margin_end(30)
            .margin_top(30)
            .margin_bottom(30)
            .build();
        widget.add_css_class("content");

        let header = Label::builder()
            .label(header_text)
            .halign(Align::Center)
            .margin_top(20)
            .margin_bottom(20)
            .build();
        header.add_css_class("content-header");
        widget.append(&header);

        Self { widget, header }
    }

    /// Returns the root widget for adding to parent container
    pub fn widget(&self) -> &GtkBox {
        &self.widget
    }

    /// Replaces the header text
    pub fn set_header(&self, text: &str) {
        self.header.set_text(text);
    }
}
