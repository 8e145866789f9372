//! npm dependency installation

use crate::config::{Database, ProjectConfig};
use crate::runtime::command::{CommandError, CommandRunner, CommandSpec};
use colored::Colorize;
use std::path::Path;

/// npm executable name for the host platform
pub const NPM: &str = if cfg!(windows) { "npm.cmd" } else { "npm" };

/// Runtime and development packages implied by a configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyPlan {
    pub runtime: Vec<&'static str>,
    pub dev: Vec<&'static str>,
}

impl DependencyPlan {
    pub fn for_config(config: &ProjectConfig) -> Self {
        let mut runtime = vec!["express"];
        let mut dev = vec!["@types/express", "@types/node"];

        if config.use_dotenv {
            runtime.push("dotenv");
        }

        match config.database {
            Database::None => {}
            Database::SequelizeSqlServer => {
                runtime.extend(["sequelize", "tedious"]);
                dev.push("@types/sequelize");
            }
        }

        if config.use_typescript {
            dev.push("typescript");
        }

        Self { runtime, dev }
    }

    /// `npm install <runtime...>`
    pub fn runtime_command(&self) -> CommandSpec {
        CommandSpec::new(NPM, std::iter::once("install").chain(self.runtime.iter().copied()))
    }

    /// `npm install <dev...> --save-dev`
    pub fn dev_command(&self) -> CommandSpec {
        CommandSpec::new(
            NPM,
            std::iter::once("install")
                .chain(self.dev.iter().copied())
                .chain(std::iter::once("--save-dev")),
        )
    }
}

/// Install runtime then dev dependencies in `root`, stopping at the first failure
pub async fn install_dependencies<R: CommandRunner>(
    runner: &R,
    root: &Path,
    plan: &DependencyPlan,
) -> Result<(), CommandError> {
    println!("{}", "Installing dependencies...".cyan());
    runner.run(&plan.runtime_command(), root).await?;

    println!("{}", "Installing dev dependencies...".cyan());
    runner.run(&plan.dev_command(), root).await?;

    Ok(())
}
