use crate::cli::{OutputFormat, ProjectCommands};
use crate::output;
use anyhow::{Context, Result};
use helpdesk_core::HelpdeskApi;

pub fn run(api: &dyn HelpdeskApi, action: &ProjectCommands, format: OutputFormat) -> Result<()> {
    match action {
        ProjectCommands::List => list(api, format),
    }
}

fn list(api: &dyn HelpdeskApi, format: OutputFormat) -> Result<()> {
    let projects = api.list_projects().context("Failed to list projects")?;

    if projects.is_empty() && format == OutputFormat::Text {
        println!("No projects found");
        return Ok(());
    }
    output::output_list(&projects, format);
    Ok(())
}
