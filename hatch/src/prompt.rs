//! Interactive prompts.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use eyre::{Context, Result};
use hatch_core::Flavor;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateProject,
    Exit,
}

pub fn main_menu() -> Result<MenuChoice> {
    let items = ["Create New Project", "Exit"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What are we making today?")
        .items(&items)
        .default(0)
        .interact()
        .wrap_err("Failed to get menu selection")?;

    Ok(match selection {
        0 => MenuChoice::CreateProject,
        _ => MenuChoice::Exit,
    })
}

/// Ask whether to go back to the main menu after a run.
pub fn return_to_menu() -> Result<bool> {
    let items = ["Return To Main Menu", "Exit"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .items(&items)
        .default(0)
        .interact()
        .wrap_err("Failed to get menu selection")?;

    Ok(selection == 0)
}

pub fn project_name() -> Result<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Project name")
        .validate_with(|input: &String| validate_project_name(input))
        .interact_text()
        .wrap_err("Failed to get project name")
}

pub fn needs_web_frontend() -> Result<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Does this project need a web frontend?")
        .default(false)
        .interact()
        .wrap_err("Failed to get web frontend choice")
}

pub fn flavor(default: Flavor) -> Result<Flavor> {
    let labels: Vec<&str> = Flavor::ALL.iter().map(|f| f.label()).collect();
    let default_idx = Flavor::ALL.iter().position(|f| *f == default).unwrap_or(0);

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which frontend flavor (TypeScript)?")
        .items(&labels)
        .default(default_idx)
        .interact()
        .wrap_err("Failed to get flavor selection")?;

    Ok(Flavor::ALL[selection])
}

/// Reject names that cannot become a directory and package name.
///
/// Cargo performs the full package-name validation; this only catches what
/// would break paths or shell arguments before it runs.
pub fn validate_project_name(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("project name cannot be empty".to_string());
    }
    if name == "." || name == ".." {
        return Err(format!("'{}' is not a valid project name", name));
    }
    if let Some(c) = name
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '/' | '\\'))
    {
        return Err(format!("project name cannot contain {:?}", c));
    }
    if name.starts_with('-') {
        return Err("project name cannot start with '-'".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_project_name("my_api").is_ok());
        assert!(validate_project_name("my-api").is_ok());
        assert!(validate_project_name("api2").is_ok());
    }

    #[test]
    fn test_invalid_names() {
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("..").is_err());
        assert!(validate_project_name("my api").is_err());
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("--help").is_err());
    }
}
