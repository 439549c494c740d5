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

//! Event handler setup
//!
//! Wires the views to the Controller:
//! - Sidebar clicks → Controller::press (weak, the sidebar is owned by
//!   a Controller listener)
//! - Header changes → content panel label
//! - Selection changes → sidebar highlight

use std::rc::Rc;

use crate::ui::components::{ContentPanel, Sidebar};
use crate::ui::Controller;

/// Wires up all event handlers for the main UI
pub fn wire_up_handlers(
    controller:    Rc<Controller>,
    sidebar:       Rc<Sidebar>,
    content_panel: Rc<ContentPanel>,
) {
    sidebar.connect_pressed(controller.press_handler());

    controller.connect_header_changed(move |text| {
        content_panel.set_header(text);
    });

    controller.connect_selection_changed(move |id| {
        sidebar.set_selected(id);
    });
}
