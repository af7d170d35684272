//! # pkglicense
//!
//! A tool that stamps package-scoped license headers onto source files in a monorepo.
//!
//! `pkglicense` walks the tree rooted at the working directory, maps each candidate file
//! to the package it belongs to (the directory following a `packages` path segment),
//! looks up that package's license header in a compiled-in table, and prepends the
//! header when it is not already present. Files are modified in place and a file that
//! already carries its header is never touched, so repeated runs are idempotent.
//!
//! ## Usage as a Library
//!
//! This crate can be used as a library in your Rust projects:
//!
//! ```rust,no_run
//! use pkglicense::processor::HeaderApplier;
//!
//! fn main() -> anyhow::Result<()> {
//!     let root = std::env::current_dir()?;
//!     let applier = HeaderApplier::new(root);
//!
//!     let summary = applier.run()?;
//!     println!("stamped {} files", summary.modified().count());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Core functionality for traversing directories and stamping files
//! * [`headers`] - The fixed package-to-header table and target extension set
//! * [`packages`] - Package-name resolution from file paths
//!
//! [`processor`]: crate::processor
//! [`headers`]: crate::headers
//! [`packages`]: crate::packages

// Re-export modules for public API
pub mod header_detection;
pub mod headers;
pub mod logging;
pub mod packages;
pub mod processor;
pub mod report;
