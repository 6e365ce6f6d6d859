//! Tree walking for the docs and knowledge directories

use std::fs;

use walkdir::{DirEntry, WalkDir};

use biased_fs::NormalizedPath;

use crate::document::{ARTIFACT_SUFFIX, SourceDocument};
use crate::format::FormatKind;

/// Hidden entries (dotfiles, editor swap files, in-flight temp writes) are
/// not part of either tree.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn files_under(root: &NormalizedPath) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(root.to_native())
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
}

/// Every file under the docs directory, sorted by path.
pub fn source_documents(docs_dir: &NormalizedPath) -> Vec<SourceDocument> {
    let base = docs_dir.to_native();

    files_under(docs_dir)
        .filter_map(|entry| {
            let relative = NormalizedPath::relative_to(entry.path(), &base).ok()?;
            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(e) => {
                    tracing::warn!(path = %relative, error = %e, "cannot stat source, skipping");
                    return None;
                }
            };
            let modified = match metadata.modified() {
                Ok(modified) => modified,
                Err(e) => {
                    tracing::warn!(path = %relative, error = %e, "no modification time, skipping");
                    return None;
                }
            };

            Some(SourceDocument {
                absolute: NormalizedPath::new(entry.path()),
                kind: FormatKind::from_path(&relative),
                relative,
                modified,
                size: metadata.len(),
            })
        })
        .collect()
}

/// Relative paths of every markdown file under the knowledge directory.
pub fn artifact_files(knowledge_dir: &NormalizedPath) -> Vec<NormalizedPath> {
    let base = knowledge_dir.to_native();

    files_under(knowledge_dir)
        .filter_map(|entry| NormalizedPath::relative_to(entry.path(), &base).ok())
        .filter(|relative| relative.as_str().ends_with(ARTIFACT_SUFFIX))
        .collect()
}

/// Remove directories under `root` that are empty, deepest first.
///
/// `root` itself is kept. Returns the number of directories removed.
pub fn prune_empty_dirs(root: &NormalizedPath) -> usize {
    let mut removed = 0;

    let dirs: Vec<_> = WalkDir::new(root.to_native())
        .min_depth(1)
        .contents_first(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .collect();

    for dir in dirs {
        let is_empty = fs::read_dir(dir.path())
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false);
        if is_empty && fs::remove_dir(dir.path()).is_ok() {
            tracing::debug!(path = %dir.path().display(), "pruned empty directory");
            removed += 1;
        }
    }

    removed
}
