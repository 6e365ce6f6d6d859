//! Locating the template directory for `init`

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Templates shipped with the source tree, for `cargo run` and tests.
const BUILTIN_TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates");

/// Find the templates root.
///
/// An explicit directory (flag or `BIASED_TEMPLATES`) must exist. Otherwise
/// the first existing candidate wins: next to the executable, the
/// `share/biased` install prefix, the user data directory, and finally the
/// source tree.
pub fn resolve(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        if dir.is_dir() {
            return Ok(dir.to_path_buf());
        }
        return Err(CliError::user(format!(
            "Templates directory not found: {}",
            dir.display()
        )));
    }

    let found = candidates().into_iter().find(|dir| dir.is_dir());
    match found {
        Some(dir) => {
            tracing::debug!(path = %dir.display(), "using templates");
            Ok(dir)
        }
        None => Err(CliError::user(
            "No templates directory found. Pass --templates or set BIASED_TEMPLATES.",
        )),
    }
}

fn candidates() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Some(exe_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        dirs.push(exe_dir.join("templates"));
        dirs.push(exe_dir.join("../share/biased/templates"));
    }
    if let Some(data) = dirs::data_dir() {
        dirs.push(data.join("biased").join("templates"));
    }
    dirs.push(PathBuf::from(BUILTIN_TEMPLATES));

    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_directory_wins() {
        let temp = TempDir::new().unwrap();
        assert_eq!(resolve(Some(temp.path())).unwrap(), temp.path());
    }

    #[test]
    fn missing_explicit_directory_is_an_error() {
        let err = resolve(Some(Path::new("/definitely/not/here"))).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here"));
    }

    #[test]
    fn source_tree_templates_are_the_last_resort() {
        let last = candidates().pop().unwrap();
        assert!(last.ends_with("templates"));
        assert!(resolve(None).is_ok());
    }
}
