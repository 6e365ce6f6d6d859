//! BDD framework installation per project type

use std::path::Path;

use serde::Serialize;

use super::{CommandRunner, ProjectKind};
use crate::{Error, Result};

const FEATURE_HINT: &str = "Create .feature files in biased/eval/ to get started";

/// A package-manager invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
    /// Framework being installed, for messages
    pub framework: &'static str,
}

impl InstallCommand {
    pub fn for_kind(kind: ProjectKind) -> Option<Self> {
        match kind {
            ProjectKind::Node => Some(Self {
                program: "npm",
                args: &["install", "--save-dev", "@cucumber/cucumber"],
                framework: "Cucumber",
            }),
            ProjectKind::Python => Some(Self {
                program: "pip",
                args: &["install", "behave"],
                framework: "behave",
            }),
            ProjectKind::DotNet => Some(Self {
                program: "dotnet",
                args: &["add", "package", "SpecFlow"],
                framework: "SpecFlow",
            }),
            ProjectKind::Java | ProjectKind::Unknown => None,
        }
    }

    pub fn command_line(&self) -> String {
        std::iter::once(self.program)
            .chain(self.args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// What the installer did, or what the user has to do by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallReport {
    pub kind: ProjectKind,
    pub success: bool,
    pub actions_taken: Vec<String>,
    pub errors: Vec<String>,
    /// Instructions printed instead of (or after) an installation
    pub manual_steps: Vec<String>,
}

impl InstallReport {
    fn installed(kind: ProjectKind, command: &InstallCommand) -> Self {
        Self {
            kind,
            success: true,
            actions_taken: vec![format!(
                "{} installed for {}",
                command.framework,
                kind.display_name()
            )],
            errors: vec![],
            manual_steps: vec![FEATURE_HINT.to_string()],
        }
    }

    fn failed(kind: ProjectKind, command: &InstallCommand) -> Self {
        Self {
            kind,
            success: false,
            actions_taken: vec![],
            errors: vec![format!(
                "Failed to install {}. Try: {}",
                command.framework,
                command.command_line()
            )],
            manual_steps: vec![],
        }
    }

    fn manual(kind: ProjectKind, steps: Vec<String>) -> Self {
        Self {
            kind,
            success: true,
            actions_taken: vec![],
            errors: vec![],
            manual_steps: steps,
        }
    }
}

fn java_steps() -> Vec<String> {
    vec![
        "Maven:".to_string(),
        "  <dependency>\n    <groupId>io.cucumber</groupId>\n    <artifactId>cucumber-java</artifactId>\n    <version>7.14.0</version>\n    <scope>test</scope>\n  </dependency>".to_string(),
        "Gradle:".to_string(),
        "  testImplementation 'io.cucumber:cucumber-java:7.14.0'".to_string(),
    ]
}

fn generic_steps() -> Vec<String> {
    vec![
        "Node.js:  npm install --save-dev @cucumber/cucumber".to_string(),
        "Python:   pip install behave".to_string(),
        "Java:     See https://cucumber.io/docs/installation/java/".to_string(),
        "C#:       dotnet add package SpecFlow".to_string(),
    ]
}

/// Detect the project at `root` and install its BDD framework.
///
/// # Errors
///
/// A failed Node installation is an error. Python and .NET failures come
/// back as an unsuccessful report with a retry hint.
pub async fn install_bdd(root: &Path, runner: &dyn CommandRunner) -> Result<InstallReport> {
    let kind = ProjectKind::detect(root);
    tracing::info!(kind = kind.display_name(), "detected project type");

    let Some(command) = InstallCommand::for_kind(kind) else {
        let steps = match kind {
            ProjectKind::Java => java_steps(),
            _ => generic_steps(),
        };
        return Ok(InstallReport::manual(kind, steps));
    };

    let outcome = runner.run(command.program, command.args, root).await;
    match (kind, outcome) {
        (_, Ok(true)) => Ok(InstallReport::installed(kind, &command)),
        (ProjectKind::Node, Ok(false)) => Err(Error::CommandFailed {
            command: command.command_line(),
        }),
        (ProjectKind::Node, Err(e)) => Err(e),
        (_, Ok(false)) => Ok(InstallReport::failed(kind, &command)),
        (_, Err(e)) => {
            tracing::warn!(error = %e, "installer could not be started");
            Ok(InstallReport::failed(kind, &command))
        }
    }
}
