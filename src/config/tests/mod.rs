//! Config module tests

#[cfg(test)]
mod window_config_tests;
