//! External tools: detection and subprocess execution
//!
//! This module provides:
//! - Advisory detection of Node.js, npm, and Git
//! - A [`CommandRunner`] seam for foreground subprocesses
//! - npm dependency installation and `git init`

pub mod check;
pub mod command;
pub mod git;
pub mod install;

pub use check::{check_git, check_node, check_npm, check_tools, RuntimeInfo};
pub use command::{CommandError, CommandRunner, CommandSpec, SystemRunner};
pub use git::init_repository;
pub use install::{install_dependencies, DependencyPlan};
