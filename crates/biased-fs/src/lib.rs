//! Filesystem primitives for the BIASED toolkit
//!
//! Provides normalized path handling, atomic writes, checksums, config
//! loading and the fixed set of project-relative paths every command works
//! against.

pub mod checksum;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::ProjectPath;
pub use error::{Error, Result};
pub use path::NormalizedPath;
