//! GTK Action setup for the application
//!
//! This module contains the GTK action definitions and their setup
//! functions

use gtk4::{gio, prelude::*, Application};

/// Keyboard shortcut for the quit action
const QUIT_ACCEL: &str = "<Ctrl>q";

/// Sets up the quit action
///
/// Creates a GTK action that quits the application when triggered,
/// bound to Ctrl+Q.
pub fn setup_quit_action(app: &Application) {
    let quit_action = gio::SimpleAction::new("quit", None);
    let app_for_quit = app.clone();

    quit_action.connect_activate(move |_, _| {
        tracing::info!("Quit requested");
        app_for_quit.quit();
    });

    app.add_action(&quit_action);
    app.set_accels_for_action("app.quit", &[QUIT_ACCEL]);
}
