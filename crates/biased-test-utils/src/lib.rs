//! Shared test utilities for the BIASED workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] builder for a temporary project root
//! - [`fixtures`]: canned file contents (valid framework files, `.docx` bytes)

pub mod fixtures;
pub mod project;

pub use project::TestProject;
