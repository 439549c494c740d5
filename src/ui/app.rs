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

//! GTK4 Application wrapper
//!
//! This module sets up the GTK4 application lifecycle and creates
//! the main window. It hands the registered buttons to the Controller
//! and connects the components to it.
//!
//! # Architecture
//!
//! ```text
//! App (GTK4 Application)
//!   ├─ Creates Controller (owns the ButtonRegistry)
//!   ├─ Applies theme and stylesheet
//!   ├─ Builds main window
//!   └─ Connects components to Controller
//! ```

use gtk4::prelude::*;
use gtk4::{gdk, Application, ApplicationWindow, CssProvider};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{error, info, warn};

use crate::config::{WindowConfig, WindowSize, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::core::{Appearance, ButtonRegistry, Palette};
use crate::ui::{actions, builders, Controller, UiError};

/// GTK4 Application showing the sidebar shell
pub struct App {
    /// GTK4 Application instance
    app: Application,
    /// MVC Controller
    controller: Rc<Controller>,
    /// Window settings
    config: WindowConfig,
}

impl App {
    /// Creates a new App from the registered buttons and window settings
    ///
    /// # Arguments
    ///
    /// * `registry` - Sidebar buttons, at least one
    /// * `config` - Window title, size and theme
    ///
    /// # Returns
    ///
    /// * `Ok(App)` - Successfully initialised
    /// * `Err(UiError::EmptyRegistry)` - No buttons were registered
    /// * `Err(UiError::Config)` - An explicit window size is not positive
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ujflasher::config::WindowConfig;
    /// use ujflasher::core::ButtonRegistry;
    /// use ujflasher::ui::App;
    ///
    /// let mut registry = ButtonRegistry::new();
    /// registry.register("Device Info", || println!("Showing Device Info Frame"));
    ///
    /// let app = App::new(registry, WindowConfig::default())?;
    /// app.run(); // Blocks until window closes
    /// # Ok::<(), ujflasher::ui::UiError>(())
    /// ```
    pub fn new(registry: ButtonRegistry, config: WindowConfig) -> Result<Self, UiError> {
        // Both checks run before any GTK object exists
        config.validate()?;
        let controller = Controller::new(registry, config.footbar_text.clone())?;

        let app = Application::builder()
            .application_id("io.github.jrios6.ujflasher")
            .build();

        Ok(Self {
            app,
            controller: Rc::new(controller),
            config,
        })
    }

    /// Runs the GTK4 application
    ///
    /// This starts the GTK4 main loop and blocks until the application
    /// exits. Process arguments are not forwarded to GTK.
    ///
    /// Returns [`glib::ExitCode::FAILURE`] if the window could not be built.
    pub fn run(self) -> glib::ExitCode {
        let controller = self.controller.clone();
        let config = self.config.clone();
        let build_failed = Rc::new(Cell::new(false));
        let build_failed_for_activate = build_failed.clone();

        self.app.connect_activate(move |app| {
            if let Err(e) = Self::build_ui(app, controller.clone(), &config) {
                error!("Failed to build window: {}", e);
                build_failed_for_activate.set(true);
                app.quit();
            }
        });

        let code = self.app.run_with_args::<&str>(&[]);
        if build_failed.get() {
            glib::ExitCode::FAILURE
        } else {
            code
        }
    }

    /// Forces the light/dark preference unless following the system
    fn apply_appearance(appearance: Appearance) {
        let Some(prefer_dark) = appearance.prefers_dark() else {
            return;
        };

        match gtk4::Settings::default() {
            Some(settings) => settings.set_gtk_application_prefer_dark_theme(prefer_dark),
            None => warn!("No GTK settings available, keeping system appearance"),
        }
    }

    /// Loads the palette's stylesheet at APPLICATION priority
    fn load_css(display: &gdk::Display, palette: &Palette) {
        let provider = CssProvider::new();
        provider.load_from_string(&palette.stylesheet());

        gtk4::style_context_add_provider_for_display(
            display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }

    /// Detects the size of the first monitor
    ///
    /// Falls back to the default window size if no monitor is reported.
    fn screen_size(display: &gdk::Display) -> WindowSize {
        let monitor = display
            .monitors()
            .item(0)
            .and_then(|item| item.downcast::<gdk::Monitor>().ok());

        match monitor {
            Some(monitor) => {
                let geometry = monitor.geometry();
                WindowSize::new(geometry.width(), geometry.height())
            }
            None => {
                warn!("No monitor detected, assuming {}x{}", DEFAULT_WIDTH, DEFAULT_HEIGHT);
                WindowSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
            }
        }
    }

    /// Builds the main window UI
    ///
    /// This is called when the application activates. It creates
    /// the window and all components.
    fn build_ui(
        app: &Application,
        controller: Rc<Controller>,
        config: &WindowConfig,
    ) -> Result<(), UiError> {
        let display = gdk::Display::default().ok_or(UiError::NoDisplay)?;

        Self::apply_appearance(config.appearance);
        Self::load_css(&display, &Palette::for_theme(config.color_theme));
        actions::setup_quit_action(app);

        let size = config.resolve_size(Self::screen_size(&display))?;
        info!(
            "Creating window \"{}\" ({}x{}, {} buttons)",
            config.title,
            size.width,
            size.height,
            controller.button_count()
        );

        let window = ApplicationWindow::builder()
            .application(app)
            .title(config.title.as_str())
            .default_width(size.width)
            .default_height(size.height)
            .build();
        window.set_size_request(size.width, size.height);
        window.add_css_class("main-window");
        window.set_titlebar(Some(&builders::build_header_bar()));

        let (main_vbox, sidebar, content_panel) =
            builders::build_main_layout(controller.clone(), size);
        window.set_child(Some(&main_vbox));

        builders::wire_up_handlers(controller, sidebar, content_panel);

        window.present();
        Ok(())
    }
}
