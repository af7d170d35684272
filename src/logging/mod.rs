//! # Logging Module
//!
//! This module provides logging utilities for the pkglicense tool, including:
//! - Verbose logging that can be enabled/disabled
//! - Color mode control for stdout formatting
//! - A tracing subscriber wired to stderr
//!
//! Diagnostics go to stderr so that stdout stays predictable for piping and
//! automation: the summary printed at the end of a run is the only stdout
//! output the tool produces.
//!
//! ## Example
//!
//! ```rust
//! use pkglicense::logging::{ColorMode, set_verbose};
//! use pkglicense::verbose_log;
//!
//! // Enable verbose logging
//! set_verbose();
//!
//! // Set color mode to Auto (uses owo-colors' automatic TTY detection)
//! ColorMode::Auto.apply();
//!
//! // Log a verbose message (goes to stderr)
//! verbose_log!("Stamping file: {}", "index.ts");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};

/// Logs a message to stderr if verbose mode is enabled.
///
/// This macro is used for detailed logging that is only shown when verbose mode
/// is enabled via [`set_verbose`]. It uses the same format string syntax as
/// the standard [`eprintln!`] macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}
