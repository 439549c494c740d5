//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Button registry tests (registration, dispatch)
//! - Theme tests (appearance, palette, stylesheet)
//! - Type tests (ButtonId, SidebarButton)
