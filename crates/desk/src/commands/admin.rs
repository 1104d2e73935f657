use crate::cli::{AdminCommands, OutputFormat};
use crate::output;
use crate::session::StoredSession;
use anyhow::{Context, Result};
use colored::Colorize;
use helpdesk_core::AdminApi;

pub fn run(admin: &dyn AdminApi, action: &AdminCommands, format: OutputFormat) -> Result<()> {
    match action {
        AdminCommands::Users => users(admin, format),
        AdminCommands::Projects => projects(admin, format),
        AdminCommands::Table => table(admin, format),
        AdminCommands::AddProject { name, pm } => add_project(admin, name, pm),
        AdminCommands::Assign { user, project } => assign(admin, user, project),
        AdminCommands::Analytics => analytics(admin, format),
    }
}

fn users(admin: &dyn AdminApi, format: OutputFormat) -> Result<()> {
    let users = admin.all_users().context("Failed to list users")?;
    output::output_list(&users, format);
    Ok(())
}

fn projects(admin: &dyn AdminApi, format: OutputFormat) -> Result<()> {
    let projects = admin.project_list().context("Failed to list projects")?;
    output::output_list(&projects, format);
    Ok(())
}

fn table(admin: &dyn AdminApi, format: OutputFormat) -> Result<()> {
    let rows = admin.users_table().context("Failed to load the user table")?;
    output::output_list(&rows, format);
    Ok(())
}

fn add_project(admin: &dyn AdminApi, name: &str, pm_id: &str) -> Result<()> {
    admin
        .add_project(name, pm_id)
        .context("Failed to create project")?;
    println!("Project {} created", name.bold());
    Ok(())
}

fn assign(admin: &dyn AdminApi, user_id: &str, project_id: &str) -> Result<()> {
    admin
        .assign_user_to_project(user_id, project_id)
        .context("Failed to assign user to project")?;
    println!("User {} assigned to project {}", user_id, project_id);
    Ok(())
}

fn analytics(admin: &dyn AdminApi, format: OutputFormat) -> Result<()> {
    let session = StoredSession::require()?;
    let analytics = admin
        .admin_analytics(&session.user.email)
        .context("Failed to load analytics")?;
    output::output_result(&analytics, format);
    Ok(())
}
