//! Project templates and their materialization
//!
//! This module provides:
//! - Built-in file templates rendered from a [`ProjectConfig`](crate::config::ProjectConfig)
//! - The fixed folder layout and per-configuration file plan
//! - Skip-on-exists writing of folders and files
//! - `package.json` manifest generation

pub mod layout;
pub mod manifest;
pub mod render;
pub mod writer;

pub use layout::{project_files, ProjectFile, FOLDERS};
pub use manifest::{write_manifest, PackageManifest};
pub use render::{render, TemplateKind};
pub use writer::{write_project, WriteReport};
