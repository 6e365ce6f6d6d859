//! Template copying with `{{TOKEN}}` substitution

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use walkdir::WalkDir;

use biased_fs::{NormalizedPath, io};

use crate::{Error, Result};

/// Shared template overlaid on top of every other template.
pub const COMMON_TEMPLATE: &str = "_common";

/// Marker files that keep empty template directories in version control.
const KEEP_MARKER: &str = ".keep";

/// Extensions of files that get token substitution.
const TEXT_EXTENSIONS: &[&str] = &[
    "md",
    "json",
    "yml",
    "yaml",
    "ts",
    "js",
    "cjs",
    "mjs",
    "txt",
    "feature",
    "java",
    "cs",
    "py",
    "xml",
    "csproj",
    "properties",
    "jsx",
];

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("Invalid token regex"));

/// Token values, e.g. `PROJECT_NAME`.
pub type Variables = BTreeMap<String, String>;

/// Files written by a template copy, relative to the destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub files: Vec<NormalizedPath>,
}

/// Copy `templates_root/<name>` into `dest`, overlay the common template,
/// then substitute tokens in the copied text files.
///
/// Existing files are overwritten. Files outside the template are never
/// touched.
///
/// # Errors
///
/// Returns [`Error::TemplateNotFound`] if the named template does not
/// exist, or an error if any copy or rewrite fails.
pub fn copy_template(
    templates_root: &Path,
    name: &str,
    dest: &Path,
    vars: &Variables,
) -> Result<CopyReport> {
    let template_dir = templates_root.join(name);
    if !template_dir.is_dir() {
        return Err(Error::TemplateNotFound {
            name: name.to_string(),
            path: template_dir,
        });
    }

    let mut report = CopyReport::default();
    copy_tree(&template_dir, dest, &mut report)?;

    let common_dir = templates_root.join(COMMON_TEMPLATE);
    if name != COMMON_TEMPLATE && common_dir.is_dir() {
        copy_tree(&common_dir, dest, &mut report)?;
    }

    report.files.sort();
    report.files.dedup();

    let dest_root = NormalizedPath::new(dest);
    for relative in &report.files {
        if is_text_file(relative) {
            let path = dest_root.join(relative.as_str());
            let content = io::read_text(&path)?;
            let substituted = substitute(&content, vars);
            if substituted != content {
                io::write_text(&path, &substituted)?;
            }
        }
    }

    tracing::debug!(template = name, files = report.files.len(), "template copied");
    Ok(report)
}

fn copy_tree(from: &Path, to: &Path, report: &mut CopyReport) -> Result<()> {
    for entry in WalkDir::new(from).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::Copy {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source: e.into(),
        })?;
        let relative = NormalizedPath::relative_to(entry.path(), from)?;
        let target = to.join(relative.to_native());

        if entry.file_type().is_dir() {
            io::ensure_dir(&NormalizedPath::new(&target))?;
            continue;
        }
        if relative.file_name() == Some(KEEP_MARKER) {
            continue;
        }

        fs::copy(entry.path(), &target).map_err(|source| Error::Copy {
            from: entry.path().to_path_buf(),
            to: target.clone(),
            source,
        })?;
        report.files.push(relative);
    }
    Ok(())
}

fn is_text_file(path: &NormalizedPath) -> bool {
    path.extension()
        .is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext))
}

/// Replace every `{{KEY}}` with its value. Unknown keys are left intact.
pub fn substitute(content: &str, vars: &Variables) -> String {
    TOKEN
        .replace_all(content, |caps: &Captures| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
