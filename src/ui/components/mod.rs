//! UI Components
//!
//! GTK4 widgets making up the main window.
//!
//! # Components
//!
//! - `sidebar.rs` - Menu title and one button per registered entry
//! - `content_panel.rs` - Header showing the selected entry
//! - `footbar.rs` - Bottom strip with the version string

mod content_panel;
mod footbar;
mod sidebar;

pub use content_panel::ContentPanel;
pub use footbar::Footbar;
pub use sidebar::Sidebar;
