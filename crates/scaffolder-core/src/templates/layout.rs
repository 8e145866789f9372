//! Directory layout and file plan of a generated project

use crate::config::{Database, ProjectConfig};
use crate::templates::render::{render, TemplateKind};

/// Folders created in every project, parents before children.
///
/// Some of these stay empty; they are placeholders for the user's own code.
pub const FOLDERS: [&str; 7] = [
    "src",
    "src/routes",
    "src/controllers",
    "src/models",
    "src/services",
    "src/middlewares",
    "src/db",
];

/// A file to generate, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub path: String,
    pub content: String,
}

impl ProjectFile {
    fn rendered(kind: TemplateKind, config: &ProjectConfig) -> Self {
        Self {
            path: kind.path(config),
            content: render(kind, config),
        }
    }
}

/// Templates selected by the configuration, in write order
pub fn template_kinds(config: &ProjectConfig) -> Vec<TemplateKind> {
    let mut kinds = vec![TemplateKind::Entrypoint, TemplateKind::Router];

    if config.use_dotenv {
        kinds.push(TemplateKind::Env);
    }

    match config.database {
        Database::None => {}
        Database::SequelizeSqlServer => kinds.push(TemplateKind::DatabaseConfig),
    }

    if config.use_typescript {
        kinds.push(TemplateKind::TsConfig);
    }

    if config.initialize_git {
        kinds.push(TemplateKind::GitIgnore);
    }

    kinds
}

/// Render every file the configuration calls for
pub fn project_files(config: &ProjectConfig) -> Vec<ProjectFile> {
    template_kinds(config)
        .into_iter()
        .map(|kind| ProjectFile::rendered(kind, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(config: &ProjectConfig) -> Vec<String> {
        project_files(config).into_iter().map(|f| f.path).collect()
    }

    #[test]
    fn test_minimal_typescript_project() {
        let config = ProjectConfig {
            use_typescript: true,
            use_dotenv: false,
            database: Database::None,
            initialize_git: false,
        };

        assert_eq!(
            paths(&config),
            vec!["src/app.ts", "src/routes/index.ts", "tsconfig.json"]
        );
    }

    #[test]
    fn test_full_javascript_project() {
        let config = ProjectConfig {
            use_typescript: false,
            use_dotenv: true,
            database: Database::SequelizeSqlServer,
            initialize_git: true,
        };

        assert_eq!(
            paths(&config),
            vec![
                "src/app.js",
                "src/routes/index.js",
                ".env",
                "src/db/config.js",
                ".gitignore",
            ]
        );
    }

    #[test]
    fn test_folders_are_parent_first() {
        for (i, folder) in FOLDERS.iter().enumerate() {
            if let Some((parent, _)) = folder.rsplit_once('/') {
                let parent_idx = FOLDERS.iter().position(|f| *f == parent);
                assert!(matches!(parent_idx, Some(p) if p < i), "{}", folder);
            }
        }
    }
}
