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

//! Layout builder
//!
//! Creates the main application layout structure.

use crate::{
    config::WindowSize,
    ui::{
        components::{ContentPanel, Footbar, Sidebar},
        Controller,
    },
};
use gtk4::{prelude::*, Box as GtkBox, Orientation};
use std::rc::Rc;

/// Builds the main application layout
///
/// Creates a vertical box containing:
/// - Horizontal box with:
///   - Left: Sidebar (one third of the window height wide)
///   - Right: Content panel with the header label
/// - Footer bar spanning the full width
///
/// # Returns
///
/// Tuple of (main_vbox, sidebar, content_panel)
pub fn build_main_layout(
    controller: Rc<Controller>,
    size: WindowSize,
) -> (GtkBox, Rc<Sidebar>, Rc<ContentPanel>) {
    let main_vbox = GtkBox::new(Orientation::Vertical, 0);

    let body = GtkBox::builder()
        .orientation(Orientation::Horizontal)
        .vexpand(true)
        .build();

    let sidebar = Rc::new(Sidebar::new(controller.clone(), size.sidebar_width()));
    body.append(sidebar.widget());

    let content_panel = Rc::new(ContentPanel::new(&controller.header_text()));
    body.append(content_panel.widget());

    main_vbox.append(&body);

    let footbar = Footbar::new(controller.footbar_text());
    main_vbox.append(footbar.widget());

    (main_vbox, sidebar, content_panel)
}
