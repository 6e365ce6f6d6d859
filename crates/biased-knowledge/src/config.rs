//! Knowledge sync settings from the project config file

use std::path::Path;

use serde::{Deserialize, Serialize};

use biased_fs::{ConfigStore, NormalizedPath, ProjectPath};

use crate::{Error, Result};
use crate::detect::ChangeDetection;

/// Extensions tried for the project config file, in order.
const CONFIG_EXTENSIONS: &[&str] = &["toml", "json", "yaml", "yml"];

/// Settings of the `[knowledge]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// Source tree, relative to the project root
    pub docs_dir: String,
    /// Output tree, relative to the project root
    pub knowledge_dir: String,
    pub change_detection: ChangeDetection,
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            docs_dir: ProjectPath::Docs.as_str().to_string(),
            knowledge_dir: ProjectPath::Knowledge.as_str().to_string(),
            change_detection: ChangeDetection::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectConfig {
    knowledge: KnowledgeConfig,
}

impl KnowledgeConfig {
    /// Load from `biased/config.{toml,json,yaml,yml}` under `root`.
    ///
    /// The first existing file wins. No file means defaults.
    pub fn load(root: &NormalizedPath) -> Result<Self> {
        let base = root.join(ProjectPath::Config.as_str());
        let stem = base
            .as_str()
            .strip_suffix(".toml")
            .unwrap_or(base.as_str())
            .to_string();

        let path = CONFIG_EXTENSIONS
            .iter()
            .map(|extension| NormalizedPath::new(format!("{stem}.{extension}")))
            .find(NormalizedPath::is_file)
            .unwrap_or(base);

        tracing::debug!(path = %path, "loading project config");
        let config: ProjectConfig = ConfigStore::new().load_or_default(&path)?;
        config.knowledge.check_trees()?;
        Ok(config.knowledge)
    }

    /// Reject docs and knowledge directories that are equal or nested.
    ///
    /// The sync would otherwise convert its own output on every run.
    pub fn check_trees(&self) -> Result<()> {
        reject_overlap(Path::new(&self.docs_dir), Path::new(&self.knowledge_dir))
    }
}

/// Fail when one tree is equal to or contains the other.
pub(crate) fn reject_overlap(docs: &Path, knowledge: &Path) -> Result<()> {
    if docs.starts_with(knowledge) || knowledge.starts_with(docs) {
        return Err(Error::OverlappingTrees {
            docs: docs.to_path_buf(),
            knowledge: knowledge.to_path_buf(),
        });
    }
    Ok(())
}
