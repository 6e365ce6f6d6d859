//! Command implementations for biased-cli

pub mod ci;
pub mod completions;
pub mod init;
pub mod install_bdd;
pub mod knowledge;
pub mod remove;
pub mod validate;

pub use ci::run_ci;
pub use completions::run_completions;
pub use init::run_init;
pub use install_bdd::run_install_bdd;
pub use knowledge::run_update_knowledge;
pub use remove::run_remove;
pub use validate::run_validate;
