// Rust guideline compliant 2026-02-06

//! Consolidate Core Library
//!
//! This crate provides the components for consolidating sorted text files:
//! - Frontier priority queue (one pending line per open source)
//! - Merge driver (streaming k-way merge with deduplication)
//! - Input discovery (directory scanning, text-file validation)
//! - Configuration loading (TOML file, environment overrides)
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod frontier;
pub mod merge;
pub mod sources;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use frontier::{Frontier, PendingEntry};
pub use merge::{consolidate, MergeStats, SourceReport};
pub use sources::{open_output, SourceSet};
