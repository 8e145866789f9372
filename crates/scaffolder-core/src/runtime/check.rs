//! Detection of the external tools a generated project needs

use crate::config::ProjectConfig;
use crate::runtime::install::NPM;
use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Run `<program> --version` and report what it printed
fn probe(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    probe("npm", NPM)
}

/// Check if Git is available
pub fn check_git() -> RuntimeInfo {
    probe("Git", "git")
}

/// Check every tool the configuration will invoke or run against.
///
/// Git is only checked when the user asked for a repository.
pub fn check_tools(config: &ProjectConfig) -> Vec<RuntimeInfo> {
    let mut results = vec![check_node(), check_npm()];
    if config.initialize_git {
        results.push(check_git());
    }
    results
}

/// Install hint for each tool that was not found
pub fn missing_tool_hints(results: &[RuntimeInfo]) -> Vec<String> {
    results
        .iter()
        .filter(|r| !r.available)
        .map(|r| match r.name {
            "Git" => "Git (install from https://git-scm.com)".to_string(),
            "Node.js" | "npm" => format!("{} (install from https://nodejs.org)", r.name),
            other => other.to_string(),
        })
        .collect()
}
