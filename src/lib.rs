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

//! uJFlasher GUI shell
//!
//! A GTK4 window with a themed sidebar, a content header and a footer
//! bar. The application registers sidebar buttons with a label and a
//! callback; pressing a button runs its callback and shows its label in
//! the header.
//!
//! # Architecture
//!
//! - **`core`:** Toolkit-free model (button registry, ids, theme palette)
//! - **`config`:** Window configuration (title, size resolution, version)
//! - **`ui`:** GTK4 GUI components (MVC pattern)
//!
//! # Examples
//!
//! ## Registering and dispatching buttons
//!
//! ```
//! use ujflasher::core::{ButtonId, ButtonRegistry};
//! use ujflasher::ui::Controller;
//!
//! let mut registry = ButtonRegistry::new();
//! registry.register("Device Info", || println!("Showing Device Info Frame"));
//! registry.register("Flash FW", || println!("Showing FW Flash Frame"));
//!
//! let controller = Controller::new(registry, "v1.0.0 (2024-06-02)")?;
//! controller.press(ButtonId::new(1));
//! assert_eq!(controller.header_text(), "Flash FW");
//!
//! // Unknown identifiers are ignored
//! controller.press(ButtonId::new(99));
//! assert_eq!(controller.header_text(), "Flash FW");
//! # Ok::<(), ujflasher::ui::UiError>(())
//! ```
//!
//! ## Using the GUI
//!
//! ```no_run
//! use ujflasher::config::WindowConfig;
//! use ujflasher::core::ButtonRegistry;
//! use ujflasher::ui::App;
//!
//! let mut registry = ButtonRegistry::new();
//! registry.register("About", || println!("Showing About Frame"));
//!
//! let app = App::new(registry, WindowConfig::default())?;
//! app.run(); // Blocks until window closes
//! # Ok::<(), ujflasher::ui::UiError>(())
//! ```

pub mod config;
pub mod core;
pub mod ui;

// Re-export commonly used types for convenience
pub use crate::core::{ButtonId, ButtonRegistry, HeaderDisplay};
