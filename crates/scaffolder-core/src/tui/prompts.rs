//! Charm-style CLI prompts using cliclack

use crate::builder::{resolve_project_dir, ProjectBuilder};
use crate::config::{Database, ProjectConfig};
use crate::product::ProductConfig;
use crate::runtime::{check, SystemRunner};
use anyhow::{Context, Result};
use std::path::Path;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Name of the project directory to create under the current directory
    pub project_name: String,

    /// Accept the default answer for every question (non-interactive mode)
    pub yes: bool,
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Ask the setup questions
    let project = if args.yes {
        cliclack::log::info(format!("{}: using default answers (--yes)", config.name()))?;
        ProjectConfig::default()
    } else {
        ask_questions()?
    };

    // Step 2: Resolve the project directory
    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    let root = resolve_project_dir(&current_dir, &args.project_name);
    report_existing_directory(&root)?;

    // Step 3: Check tools (advisory only)
    check_tools(&project)?;

    let builder = ProjectBuilder::new(&root, project, SystemRunner);

    // Step 4: Write folders, files, and package.json
    create_project(&builder).await?;

    // Step 5: Install dependencies
    cliclack::log::step("Installing dependencies with npm")?;
    builder.install().await?;
    cliclack::log::success("Dependencies installed")?;

    // Step 6: Initialize Git
    if builder.init_git().await? {
        cliclack::log::success("Git repository initialized")?;
    }

    // Step 7: Show next steps
    print_next_steps(config, &root, &project)?;

    Ok(())
}

/// The four setup questions, in order, each with its default preselected
fn ask_questions() -> Result<ProjectConfig> {
    let use_typescript: bool = cliclack::confirm("Would you like to use TypeScript (recommended)?")
        .initial_value(true)
        .interact()?;

    let use_dotenv: bool =
        cliclack::confirm("Would you like to include dotenv for environment variables?")
            .initial_value(true)
            .interact()?;

    let mut select = cliclack::select("Which database library would you like to use?");
    for database in Database::ALL {
        select = select.item(database, database.display_name(), "");
    }
    let database: Database = select.initial_value(Database::None).interact()?;

    let initialize_git: bool = cliclack::confirm("Would you like to initialize a Git repository?")
        .initial_value(true)
        .interact()?;

    Ok(ProjectConfig {
        use_typescript,
        use_dotenv,
        database,
        initialize_git,
    })
}

fn report_existing_directory(root: &Path) -> Result<()> {
    if root.is_dir() {
        if let Ok(entries) = std::fs::read_dir(root) {
            let count = entries.count();
            if count > 0 {
                cliclack::log::warning(format!(
                    "{} already has {} items; existing files will be kept",
                    root.display(),
                    count
                ))?;
            }
        }
    }
    Ok(())
}

fn check_tools(project: &ProjectConfig) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking tools...");

    let tools = check::check_tools(project);
    let detected: Vec<String> = tools
        .iter()
        .filter(|t| t.available)
        .map(|t| format!("{} ({})", t.name, t.version.as_deref().unwrap_or("unknown")))
        .collect();

    if detected.is_empty() {
        spinner.stop("No tools detected");
    } else {
        spinner.stop(format!("Detected tools: {}", detected.join(", ")));
    }

    let missing = check::missing_tool_hints(&tools);
    if !missing.is_empty() {
        cliclack::log::warning(format!(
            "Not found on PATH, the following steps may fail:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        ))?;
    }

    Ok(())
}

async fn create_project(builder: &ProjectBuilder<SystemRunner>) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    let report = match builder.scaffold().await {
        Ok(report) => report,
        Err(e) => {
            spinner.error("Failed to create project");
            return Err(e);
        }
    };

    spinner.stop(format!(
        "Created {} files in {}",
        report.files.written.len() + usize::from(report.manifest_written),
        builder.root().display()
    ));

    if !report.files.skipped.is_empty() {
        cliclack::log::info(format!(
            "Kept existing files: {}",
            report.files.skipped.join(", ")
        ))?;
    }

    if !report.manifest_written {
        cliclack::log::info("package.json already exists; leaving it unchanged")?;
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    project: &ProjectConfig,
) -> Result<()> {
    let steps = config.next_steps(project_dir, project);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
