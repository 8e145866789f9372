//! generate-api - Project scaffolding for Express APIs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use scaffolder_core::tui::CreateArgs;
use scaffolder_core::{CommandError, ProductConfig, ProjectConfig};
use std::path::Path;

/// Express API product configuration
#[derive(Clone)]
pub struct ExpressApiConfig;

impl ProductConfig for ExpressApiConfig {
    fn name(&self) -> &'static str {
        "generate-api"
    }

    fn display_name(&self) -> &'static str {
        "Express API generator"
    }

    fn next_steps(&self, dir: &Path, _config: &ProjectConfig) -> Vec<String> {
        let project_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| dir.display().to_string());

        vec![
            format!(
                "Navigate to your project folder: {}",
                format!("cd {}", project_name).yellow()
            ),
            format!("Start your development server: {}", "npm start".yellow()),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "generate-api")]
#[command(about = "CLI for scaffolding Express API projects")]
#[command(version)]
pub struct Args {
    /// Name of the project directory to create
    #[arg(value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub project_name: String,

    /// Answer the four setup questions with their defaults (TypeScript, dotenv,
    /// no database, Git) instead of prompting
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.project_name,
            yes: args.yes,
        }
    }
}

/// Exit status for a failed run; subprocess failures keep the child's code
fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CommandError>()
        .map(CommandError::exit_code)
        .unwrap_or(1)
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    // Missing project name: clap prints usage and exits before any prompt
    let args = Args::parse();
    let config = ExpressApiConfig;

    let result: Result<()> = scaffolder_core::run(&config, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(exit_code(&err));
    }
}
