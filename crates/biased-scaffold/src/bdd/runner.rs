//! Command execution seam

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::{Error, Result};

/// Runs an external command in a working directory.
///
/// Returns whether the command exited successfully. Failing to spawn the
/// program at all is an error.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<bool>;
}

/// Spawns real processes with `tokio::process`, inheriting stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioRunner;

#[async_trait]
impl CommandRunner for TokioRunner {
    async fn run(&self, program: &str, args: &[&str], cwd: &Path) -> Result<bool> {
        tracing::debug!(program, ?args, cwd = %cwd.display(), "spawning");
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|_| Error::CommandNotFound {
                command: program.to_string(),
            })?;
        Ok(status.success())
    }
}
