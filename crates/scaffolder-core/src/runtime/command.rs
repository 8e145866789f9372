//! Foreground subprocess execution
//!
//! Commands run to completion with the terminal attached, so package manager
//! and git output shows up live. The [`CommandRunner`] trait lets the project
//! builder be driven without spawning real processes.

use colored::Colorize;
use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Failure of a foreground command
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with {}", describe_exit(.code))]
    Failed { command: String, code: Option<i32> },
}

impl CommandError {
    /// Process exit code to report for this failure
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Spawn { .. } => 1,
            CommandError::Failed { code, .. } => code.unwrap_or(1),
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code: {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Runs a command in a working directory and waits for it to exit
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<(), CommandError>;
}

/// Spawns real processes with inherited stdio
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<(), CommandError> {
        println!("{} {}", "Running:".dimmed(), command.to_string().yellow());

        let status = TokioCommand::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::Failed {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Records invocations instead of spawning; optionally fails one program
    #[derive(Default)]
    pub struct RecordingRunner {
        pub calls: RefCell<Vec<(CommandSpec, PathBuf)>>,
        pub fail_on: Option<(String, i32)>,
    }

    impl RecordingRunner {
        pub fn failing(program: &str, code: i32) -> Self {
            Self {
                calls: RefCell::default(),
                fail_on: Some((program.to_string(), code)),
            }
        }

        pub fn commands(&self) -> Vec<String> {
            self.calls.borrow().iter().map(|(c, _)| c.to_string()).collect()
        }
    }

    impl CommandRunner for RecordingRunner {
        async fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<(), CommandError> {
            self.calls
                .borrow_mut()
                .push((command.clone(), cwd.to_path_buf()));

            match &self.fail_on {
                Some((program, code)) if *program == command.program => {
                    Err(CommandError::Failed {
                        command: command.to_string(),
                        code: Some(*code),
                    })
                }
                _ => Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let cmd = CommandSpec::new("npm", ["install", "express", "dotenv"]);
        assert_eq!(cmd.to_string(), "npm install express dotenv");
    }

    #[test]
    fn test_exit_code_is_surfaced() {
        let err = CommandError::Failed {
            command: "npm install express".to_string(),
            code: Some(254),
        };
        assert_eq!(err.exit_code(), 254);
        assert_eq!(
            err.to_string(),
            "`npm install express` failed with exit code: 254"
        );

        let killed = CommandError::Failed {
            command: "git init".to_string(),
            code: None,
        };
        assert_eq!(killed.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_missing_program_is_a_spawn_error() {
        let cmd = CommandSpec::new("definitely-not-a-real-program-xyz", Vec::<String>::new());
        let err = SystemRunner
            .run(&cmd, &std::env::temp_dir())
            .await
            .unwrap_err();

        assert!(matches!(err, CommandError::Spawn { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
