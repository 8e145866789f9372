//! `package.json` manifest generation

use crate::config::ProjectConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// File name of the manifest in the project root
pub const MANIFEST_FILE: &str = "package.json";

/// npm scripts section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripts {
    pub start: String,
    pub test: String,
}

/// Initial `package.json` contents; field order is the serialized key order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub main: String,
    pub scripts: Scripts,
    pub keywords: Vec<String>,
    pub author: String,
    pub license: String,
}

impl PackageManifest {
    /// Build the manifest for a project rooted at `root`
    ///
    /// The package name is the root directory's base name.
    pub fn new(root: &Path, config: &ProjectConfig) -> Self {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let main = config.entry_point();

        Self {
            name,
            version: "1.0.0".to_string(),
            scripts: Scripts {
                start: format!("node {}", main),
                test: "echo \"Error: no test specified\" && exit 1".to_string(),
            },
            main,
            keywords: Vec::new(),
            author: String::new(),
            license: "ISC".to_string(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize package.json")
    }
}

/// Write `package.json` unless one already exists.
///
/// Returns `true` when a new manifest was written. An existing manifest is left
/// byte-for-byte untouched, including its dependency lists.
pub async fn write_manifest(root: &Path, config: &ProjectConfig) -> Result<bool> {
    let path = root.join(MANIFEST_FILE);

    if fs::try_exists(&path)
        .await
        .with_context(|| format!("Failed to inspect: {}", path.display()))?
    {
        return Ok(false);
    }

    let content = PackageManifest::new(root, config).to_json()?;
    fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_manifest_fields() {
        let manifest = PackageManifest::new(Path::new("/work/demo"), &ProjectConfig::default());

        assert_eq!(manifest.name, "demo");
        assert_eq!(manifest.version, "1.0.0");
        assert_eq!(manifest.main, "src/app.ts");
        assert_eq!(manifest.scripts.start, "node src/app.ts");
        assert!(manifest.keywords.is_empty());
        assert!(manifest.author.is_empty());
    }

    #[test]
    fn test_entry_point_extension_follows_language() {
        for use_typescript in [true, false] {
            let config = ProjectConfig {
                use_typescript,
                ..ProjectConfig::default()
            };
            let manifest = PackageManifest::new(Path::new("demo"), &config);
            let ext = if use_typescript { ".ts" } else { ".js" };

            assert!(manifest.main.ends_with(ext));
            assert!(manifest.scripts.start.ends_with(ext));
        }
    }

    #[test]
    fn test_json_key_order_and_indent() {
        let json = PackageManifest::new(Path::new("demo"), &ProjectConfig::default())
            .to_json()
            .unwrap();

        assert!(json.starts_with("{\n  \"name\": \"demo\",\n  \"version\": \"1.0.0\","));
        let keys = ["\"main\"", "\"scripts\"", "\"keywords\"", "\"author\"", "\"license\""];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains(r#""test": "echo \"Error: no test specified\" && exit 1""#));
    }

    #[tokio::test]
    async fn test_existing_manifest_is_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("demo");
        std::fs::create_dir_all(&root).unwrap();

        let existing = r#"{"name":"demo","dependencies":{"express":"^4.0.0"}}"#;
        std::fs::write(root.join(MANIFEST_FILE), existing).unwrap();

        let js = ProjectConfig {
            use_typescript: false,
            ..ProjectConfig::default()
        };
        assert!(!write_manifest(&root, &js).await.unwrap());

        let after = std::fs::read_to_string(root.join(MANIFEST_FILE)).unwrap();
        assert_eq!(after, existing);
    }

    #[tokio::test]
    async fn test_new_manifest_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("demo");
        std::fs::create_dir_all(&root).unwrap();

        assert!(write_manifest(&root, &ProjectConfig::default()).await.unwrap());

        let content = std::fs::read_to_string(root.join(MANIFEST_FILE)).unwrap();
        let parsed: PackageManifest = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, PackageManifest::new(&root, &ProjectConfig::default()));
    }
}
