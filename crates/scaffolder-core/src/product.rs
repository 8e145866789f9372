//! Product configuration trait for CLI binaries
//!
//! The binary crate implements this trait to give the shared workflow its
//! identity and closing instructions.

use crate::config::ProjectConfig;
use std::path::Path;

/// Configuration trait for the scaffolding CLI product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (the binary name)
    fn name(&self) -> &'static str;

    /// Human-readable display name, shown in the intro banner
    fn display_name(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, config: &ProjectConfig) -> Vec<String>;
}
