//! Scaffolder Core - Shared library for the Express API project generator
//!
//! This library asks four setup questions, renders a small set of built-in
//! templates from the answers, writes them into a new project directory, and
//! runs `npm install` and `git init` there.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure template rendering, skip-on-exists file writing,
//!   manifest generation, subprocess execution
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait and `ProjectBuilder` for custom UIs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{ProjectBuilder, ProjectConfig, SystemRunner};
//!
//! let config = ProjectConfig::default();
//! let builder = ProjectBuilder::new("demo", config, SystemRunner);
//! builder.build().await?;
//! ```

pub mod builder;
pub mod config;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use builder::{resolve_project_dir, ProjectBuilder, ScaffoldReport};
pub use config::{Database, ProjectConfig};
pub use product::ProductConfig;
pub use runtime::{CommandError, CommandRunner, CommandSpec, DependencyPlan, SystemRunner};
pub use templates::{render, TemplateKind, WriteReport};

#[cfg(feature = "tui")]
pub use tui::run;
