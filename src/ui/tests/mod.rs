//! UI module tests
//!
//! Only the toolkit-free Controller is tested here; widgets need a
//! display server.

#[cfg(test)]
mod controller_tests;
