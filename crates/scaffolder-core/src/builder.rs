//! Project creation workflow, independent of any UI
//!
//! [`ProjectBuilder`] runs the steps in a fixed order: folders and files,
//! `package.json`, runtime install, dev install, then `git init` when
//! requested. Each step only starts after the previous one succeeded and
//! nothing is rolled back on failure.

use crate::config::ProjectConfig;
use crate::runtime::command::CommandRunner;
use crate::runtime::{git, install, DependencyPlan};
use crate::templates::{layout, manifest, writer, WriteReport};
use anyhow::Result;
use std::path::{Component, Path, PathBuf};

/// Resolve the project root for a project name given on the command line.
///
/// `.` and `..` are folded lexically so the root always ends in a real
/// directory name; the filesystem is not consulted.
pub fn resolve_project_dir(cwd: &Path, project_name: &str) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in cwd.join(project_name).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

/// Files touched by [`ProjectBuilder::scaffold`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub files: WriteReport,
    pub manifest_written: bool,
}

pub struct ProjectBuilder<R> {
    root: PathBuf,
    config: ProjectConfig,
    runner: R,
}

impl<R: CommandRunner> ProjectBuilder<R> {
    pub fn new(root: impl Into<PathBuf>, config: ProjectConfig, runner: R) -> Self {
        Self {
            root: root.into(),
            config,
            runner,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dependency_plan(&self) -> DependencyPlan {
        DependencyPlan::for_config(&self.config)
    }

    /// Create the folder layout, the rendered files, and `package.json`
    pub async fn scaffold(&self) -> Result<ScaffoldReport> {
        let files = layout::project_files(&self.config);
        let files = writer::write_project(&self.root, &layout::FOLDERS, &files).await?;
        let manifest_written = manifest::write_manifest(&self.root, &self.config).await?;

        Ok(ScaffoldReport {
            files,
            manifest_written,
        })
    }

    /// Install runtime and dev dependencies
    pub async fn install(&self) -> Result<()> {
        install::install_dependencies(&self.runner, &self.root, &self.dependency_plan()).await?;
        Ok(())
    }

    /// Run `git init` if the configuration asks for it; returns whether it ran
    pub async fn init_git(&self) -> Result<bool> {
        if !self.config.initialize_git {
            return Ok(false);
        }
        git::init_repository(&self.runner, &self.root).await?;
        Ok(true)
    }

    /// Run every step in order
    pub async fn build(&self) -> Result<ScaffoldReport> {
        let report = self.scaffold().await?;
        self.install().await?;
        self.init_git().await?;
        Ok(report)
    }

    #[cfg(test)]
    fn runner(&self) -> &R {
        &self.runner
    }
}
