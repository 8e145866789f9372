//! Built-in file templates for Express API projects
//!
//! Every template is a pure function of [`ProjectConfig`]. The output only
//! varies with the language (import vs require syntax), the dotenv answer, and
//! for the database config, the selected database library.

use crate::config::{Database, ProjectConfig};

/// The kinds of files the scaffolder can generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Entrypoint,
    Router,
    Env,
    DatabaseConfig,
    TsConfig,
    GitIgnore,
}

impl TemplateKind {
    /// Destination path relative to the project root
    pub fn path(&self, config: &ProjectConfig) -> String {
        let ext = config.extension();
        match self {
            TemplateKind::Entrypoint => format!("src/app.{}", ext),
            TemplateKind::Router => format!("src/routes/index.{}", ext),
            TemplateKind::Env => ".env".to_string(),
            TemplateKind::DatabaseConfig => format!("src/db/config.{}", ext),
            TemplateKind::TsConfig => "tsconfig.json".to_string(),
            TemplateKind::GitIgnore => ".gitignore".to_string(),
        }
    }
}

/// Render a template to its file contents
pub fn render(kind: TemplateKind, config: &ProjectConfig) -> String {
    match kind {
        TemplateKind::Entrypoint => entrypoint(config),
        TemplateKind::Router => router(config),
        TemplateKind::Env => ENV_FILE.to_string(),
        TemplateKind::DatabaseConfig => database_config(config),
        TemplateKind::TsConfig => TSCONFIG.to_string(),
        TemplateKind::GitIgnore => GITIGNORE.to_string(),
    }
}

/// Lines that load `.env` into `process.env`, empty when dotenv is off
fn dotenv_prelude(config: &ProjectConfig) -> &'static str {
    match (config.use_dotenv, config.use_typescript) {
        (false, _) => "",
        (true, true) => "import dotenv from 'dotenv';\ndotenv.config();\n\n",
        (true, false) => "require('dotenv').config();\n\n",
    }
}

fn entrypoint(config: &ProjectConfig) -> String {
    let imports = if config.use_typescript {
        "import express from 'express';\nimport router from './routes';\n"
    } else {
        "const express = require('express');\nconst router = require('./routes');\n"
    };

    format!(
        r#"{prelude}{imports}
const app = express();

app.use(express.json());
app.use('/api', router);

const PORT = process.env.PORT || 3000;
app.listen(PORT, () => {{
    console.log(`🚀 Server is running on http://localhost:${{PORT}}`);
}});
"#,
        prelude = dotenv_prelude(config),
        imports = imports,
    )
}

fn router(config: &ProjectConfig) -> String {
    let (import, export) = if config.use_typescript {
        ("import express from 'express';", "export default router;")
    } else {
        ("const express = require('express');", "module.exports = router;")
    };

    format!(
        r#"{import}
const router = express.Router();

router.get('/', (req, res) => {{
    res.send('Hello, world!');
}});

{export}
"#
    )
}

fn database_config(config: &ProjectConfig) -> String {
    match config.database {
        Database::None => String::new(),
        Database::SequelizeSqlServer => sequelize_config(config),
    }
}

fn sequelize_config(config: &ProjectConfig) -> String {
    let (import, export) = if config.use_typescript {
        (
            "import { Sequelize } from 'sequelize';",
            "export { sequelize };",
        )
    } else {
        (
            "const { Sequelize } = require('sequelize');",
            "module.exports = { sequelize };",
        )
    };

    format!(
        r#"{prelude}{import}

const DATABASE_NAME = process.env.SQL_SERVER_DATABASE ?? '';
const DATABASE_USER = process.env.SQL_SERVER_USER ?? '';
const DATABASE_PASSWORD = process.env.SQL_SERVER_PASSWORD ?? '';
const DATABASE_HOST = process.env.SQL_SERVER_HOST ?? '';
const DATABASE_INSTANCE = process.env.SQL_SERVER_INSTANCE ?? '';

const sequelize = new Sequelize(DATABASE_NAME, DATABASE_USER, DATABASE_PASSWORD, {{
    host: DATABASE_HOST,
    dialect: 'mssql',
    dialectOptions: {{
        options: {{
            encrypt: true,
            instancename: DATABASE_INSTANCE
        }}
    }},
    logging: false
}});

sequelize.sync();

sequelize.authenticate()
    .then(() => {{
        console.log('🔌 Connection to database has been established successfully');
    }})
    .catch((error) => {{
        console.error('Unable to connect to the database:', error);
    }});

{export}
"#,
        prelude = dotenv_prelude(config),
    )
}

const ENV_FILE: &str = "PORT=3000
SQL_SERVER_HOST=localhost
SQL_SERVER_DATABASE=mydatabase
SQL_SERVER_USER=sa
SQL_SERVER_PASSWORD=password
SQL_SERVER_INSTANCE=SQLEXPRESS
";

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES6",
    "module": "CommonJS",
    "outDir": "./dist",
    "strict": true,
    "esModuleInterop": true
  }
}
"#;

const GITIGNORE: &str = "# dotenv environment variable files
.env
.env.development.local
.env.test.local
.env.production.local
.env.local

# node_modules
node_modules

# build output
dist
";
