use crate::cli::{ColorChoice, OutputFormat};
use crate::session::StoredSession;
use colored::Colorize;
use helpdesk_core::{
    AdminAnalytics, Comment, Project, ProjectMember, Role, Stack, Ticket, UserAccount,
    UserSummary, UsersTableRow,
};
use serde::Serialize;
use std::io::IsTerminal;

/// Apply the --color choice before anything prints. An explicit choice
/// wins outright; auto honors NO_COLOR (https://no-color.org/) and only
/// colors when stdout is a terminal.
pub fn init_colors(choice: ColorChoice) {
    let enable = match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    };
    colored::control::set_override(enable);
}

pub fn output_result<T: Serialize + Displayable>(result: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            println!("{}", result.display());
        }
    }
}

pub fn output_list<T: Serialize + Displayable>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&items) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            for item in items {
                println!("{}", item.display());
                println!();
            }
        }
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: "error".to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err)
                .unwrap_or_else(|_| format!(r#"{{"error": true, "message": "{}"}}"#, err))
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

/// Console-level diagnostic for non-fatal conditions (e.g. a failed
/// mention notification); never alters the command's exit status
pub fn warn(message: &str) {
    eprintln!("{}: {}", "Warning".yellow().bold(), message);
}

pub trait Displayable {
    fn display(&self) -> String;
}

fn colorize_status(status: &str) -> String {
    match status.to_lowercase().as_str() {
        "high" => status.red().bold().to_string(),
        "medium" => status.yellow().to_string(),
        "low" => status.dimmed().to_string(),
        "in progress" => status.blue().to_string(),
        "resolved" => status.green().to_string(),
        _ => status.to_string(),
    }
}

impl Displayable for Ticket {
    fn display(&self) -> String {
        let mut output = format!(
            "{} - {}\n  {}: {}",
            self.ticket_id.cyan().bold(),
            self.description.white().bold(),
            "Status".dimmed(),
            colorize_status(&self.status)
        );

        output.push_str(&format!(
            "\n  {}: {}",
            "Project".dimmed(),
            self.project_name.as_deref().unwrap_or("Not Assigned")
        ));
        output.push_str(&format!(
            "\n  {}: {}",
            "Assigned To".dimmed(),
            self.assigned_to.as_deref().unwrap_or("Unassigned")
        ));
        output.push_str(&format!(
            "\n  {}: {}",
            "Created By".dimmed(),
            self.created_by.as_deref().unwrap_or("Unknown")
        ));

        if let Some(created) = &self.created_at {
            output.push_str(&format!(
                "\n  {}: {}",
                "Created".dimmed(),
                created.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
            ));
        }
        if let Some(done) = &self.completion_date {
            output.push_str(&format!(
                "\n  {}: {}",
                "Completed".dimmed(),
                done.format("%Y-%m-%d").to_string().green()
            ));
        }

        output
    }
}

impl Displayable for Comment {
    fn display(&self) -> String {
        let date = self
            .created
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "Unknown date".to_string());

        let mut output = format!("[{}] {} - {}", date.dimmed(), self.author.cyan(), self.text);

        for reply in &self.replies {
            output.push_str(&format!(
                "\n    {} {} - {}",
                "↳".dimmed(),
                reply.author.cyan(),
                reply.message
            ));
        }

        output
    }
}

impl Displayable for ProjectMember {
    fn display(&self) -> String {
        format!(
            "{} <{}> ({})",
            self.name.white().bold(),
            self.email,
            self.user_id.dimmed()
        )
    }
}

impl Displayable for Project {
    fn display(&self) -> String {
        format!(
            "{} ({})",
            self.project_name.white().bold(),
            self.project_id.dimmed()
        )
    }
}

impl Displayable for Stack {
    fn display(&self) -> String {
        format!("{} ({})", self.stack_name.white().bold(), self.stack_id)
    }
}

impl Displayable for Role {
    fn display(&self) -> String {
        format!("{} ({})", self.role_name.white().bold(), self.role_id)
    }
}

impl Displayable for UserAccount {
    fn display(&self) -> String {
        let role = if self.is_admin() { "Admin" } else { "User" };
        format!(
            "{} <{}> - {} ({})",
            self.name.white().bold(),
            self.email,
            role,
            self.user_id.dimmed()
        )
    }
}

impl Displayable for UsersTableRow {
    fn display(&self) -> String {
        let role = if self.role_id == 1 { "Admin" } else { "User" };
        format!("{} - {}", self.name.white().bold(), role)
    }
}

impl Displayable for AdminAnalytics {
    fn display(&self) -> String {
        let mut output = format!(
            "{}: {}",
            "Total Tickets".dimmed(),
            self.total_tickets.to_string().white().bold()
        );

        for (status, count) in &self.status_count {
            output.push_str(&format!("\n  {}: {}", colorize_status(status), count));
        }

        if !self.assigned_users.is_empty() {
            output.push_str(&format!("\n{}:", "Tickets Assigned to Users".dimmed()));
            for user in &self.assigned_users {
                output.push_str(&format!(
                    "\n  {} <{}>: {} ticket(s)",
                    user.name.cyan(),
                    user.email,
                    user.tickets_assigned.len()
                ));
            }
        }

        if !self.all_tickets.is_empty() {
            output.push_str(&format!("\n{}:", "All Tickets".dimmed()));
            for ticket in &self.all_tickets {
                output.push_str(&format!(
                    "\n  {} [{}] {}",
                    ticket.ticket_id.cyan(),
                    colorize_status(&ticket.status),
                    ticket.description
                ));
            }
        }

        output
    }
}

impl Displayable for StoredSession {
    fn display(&self) -> String {
        let expiry = if self.is_expired() {
            format!("expired {}", self.expires_at.format("%Y-%m-%d %H:%M:%S UTC"))
                .red()
                .to_string()
        } else {
            format!("expires {}", self.expires_at.format("%Y-%m-%d %H:%M:%S UTC"))
                .dimmed()
                .to_string()
        };
        format!(
            "{} <{}> - {}",
            self.user.name.white().bold(),
            self.user.email,
            expiry
        )
    }
}

impl Displayable for UserSummary {
    fn display(&self) -> String {
        let mut output = format!(
            "{}: {}",
            "Total Tickets".dimmed(),
            self.total_tickets.to_string().white().bold()
        );

        for ticket in &self.tickets {
            let completion = ticket
                .completion_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "Pending".to_string());
            output.push_str(&format!(
                "\n  {} [{}] {} - {}: {}",
                ticket.ticket_id.cyan(),
                colorize_status(&ticket.status),
                ticket.description,
                "Completion".dimmed(),
                completion
            ));
        }

        output
    }
}
