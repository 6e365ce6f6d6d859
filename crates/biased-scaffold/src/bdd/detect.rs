//! Project type detection from marker files

use std::fs;
use std::path::Path;

use serde::Serialize;

/// Project ecosystems a BDD framework can be set up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Node,
    Python,
    DotNet,
    Java,
    Unknown,
}

const PYTHON_MARKERS: &[&str] = &["requirements.txt", "setup.py", "pyproject.toml"];
const JAVA_MARKERS: &[&str] = &["pom.xml", "build.gradle", "build.gradle.kts"];
const DOTNET_EXTENSIONS: &[&str] = &["csproj", "sln"];

impl ProjectKind {
    /// Detect the project type of `root`.
    ///
    /// Checked in priority order: Node, Python, .NET, Java.
    pub fn detect(root: &Path) -> Self {
        if root.join("package.json").exists() {
            Self::Node
        } else if any_exists(root, PYTHON_MARKERS) {
            Self::Python
        } else if has_dotnet_project(root) {
            Self::DotNet
        } else if any_exists(root, JAVA_MARKERS) {
            Self::Java
        } else {
            Self::Unknown
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Node => "Node.js",
            Self::Python => "Python",
            Self::DotNet => ".NET",
            Self::Java => "Java",
            Self::Unknown => "unknown",
        }
    }
}

fn any_exists(root: &Path, markers: &[&str]) -> bool {
    markers.iter().any(|marker| root.join(marker).exists())
}

/// A `*.csproj` or `*.sln` directly in `root`.
fn has_dotnet_project(root: &Path) -> bool {
    let Ok(entries) = fs::read_dir(root) else {
        return false;
    };
    entries.filter_map(|entry| entry.ok()).any(|entry| {
        entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| DOTNET_EXTENSIONS.contains(&ext))
    })
}
