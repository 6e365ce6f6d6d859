//! BDD framework installation
//!
//! The project type is read from marker files in the project root, then the
//! matching package manager is invoked through a [`CommandRunner`].

mod detect;
mod installer;
mod runner;

pub use detect::ProjectKind;
pub use installer::{InstallCommand, InstallReport, install_bdd};
pub use runner::{CommandRunner, TokioRunner};
