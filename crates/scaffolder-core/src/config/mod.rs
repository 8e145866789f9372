//! Project configuration collected from the questionnaire

use std::fmt;

/// Database library wired into the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Database {
    #[default]
    None,
    SequelizeSqlServer,
}

impl Database {
    /// All choices, in the order they are offered to the user
    pub const ALL: [Database; 2] = [Database::None, Database::SequelizeSqlServer];

    pub fn display_name(&self) -> &'static str {
        match self {
            Database::None => "None",
            Database::SequelizeSqlServer => "Sequelize (SQL Server only)",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Answers to the four setup questions.
///
/// Built once per run and passed by value to every later step; every file,
/// dependency, and manifest field is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectConfig {
    pub use_typescript: bool,
    pub use_dotenv: bool,
    pub database: Database,
    pub initialize_git: bool,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            use_typescript: true,
            use_dotenv: true,
            database: Database::None,
            initialize_git: true,
        }
    }
}

impl ProjectConfig {
    /// Source file extension, without the dot
    pub fn extension(&self) -> &'static str {
        if self.use_typescript {
            "ts"
        } else {
            "js"
        }
    }

    /// Path of the application entrypoint relative to the project root
    pub fn entry_point(&self) -> String {
        format!("src/app.{}", self.extension())
    }
}
