//! Project scaffolding for the BIASED toolkit
//!
//! Everything around the knowledge base that touches a project's files:
//!
//! - [`template`]: copy a template tree with `{{TOKEN}}` substitution
//! - [`validate`]: check the required framework files exist and parse
//! - [`ci`]: emit the evaluation workflow
//! - [`bdd`]: detect the project type and install a BDD framework

pub mod bdd;
pub mod ci;
pub mod error;
pub mod template;
pub mod validate;

pub use bdd::{CommandRunner, InstallReport, ProjectKind, TokioRunner, install_bdd};
pub use ci::{CiOutcome, emit_workflow};
pub use error::{Error, Result};
pub use template::{COMMON_TEMPLATE, CopyReport, Variables, copy_template};
pub use validate::{ValidationReport, validate};
