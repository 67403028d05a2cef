// Rust guideline compliant 2026-02-06

//! Consolidate CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod output;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use terminal::{print_error, print_success, print_warning, should_use_color};
