//! Git repository initialization

use crate::runtime::command::{CommandError, CommandRunner, CommandSpec};
use colored::Colorize;
use std::path::Path;

pub fn init_command() -> CommandSpec {
    CommandSpec::new("git", ["init"])
}

/// Run `git init` in `root`
pub async fn init_repository<R: CommandRunner>(runner: &R, root: &Path) -> Result<(), CommandError> {
    println!("{}", "Initializing Git repository...".cyan());
    runner.run(&init_command(), root).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::command::testing::RecordingRunner;

    #[tokio::test]
    async fn test_runs_git_init_in_root() {
        let runner = RecordingRunner::default();

        init_repository(&runner, Path::new("demo")).await.unwrap();

        assert_eq!(runner.commands(), vec!["git init"]);
        assert_eq!(runner.calls.borrow()[0].1, Path::new("demo"));
    }
}
