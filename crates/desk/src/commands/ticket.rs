use crate::cli::{OutputFormat, TicketCommands};
use crate::output;
use crate::session::StoredSession;
use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use helpdesk_core::{
    extract_mentions, resolve_and_notify, AdminApi, CreateTicket, HelpdeskApi, MemberSource,
    MentionResolver, TicketStatus,
};

pub fn run(
    api: &dyn HelpdeskApi,
    admin: &dyn AdminApi,
    members: &dyn MemberSource,
    action: &TicketCommands,
    format: OutputFormat,
) -> Result<()> {
    match action {
        TicketCommands::Create {
            description,
            status,
            stack_id,
            project_id,
        } => create(api, description, status, *stack_id, project_id),
        TicketCommands::List { all } => list(api, admin, *all, format),
        TicketCommands::Comment { id, text } => comment(api, id, text, format),
        TicketCommands::Comments { id } => comments(api, id, format),
        TicketCommands::Status { id, status } => update_status(api, id, status),
        TicketCommands::Suggest { text, pick } => suggest(members, text, pick.as_deref(), format),
    }
}

fn parse_status(input: &str) -> Result<TicketStatus> {
    TicketStatus::parse(input).ok_or_else(|| {
        anyhow!(
            "Invalid status '{}'. Expected High, Medium, Low, In Progress, or Resolved",
            input
        )
    })
}

fn create(
    api: &dyn HelpdeskApi,
    description: &str,
    status: &str,
    stack_id: i64,
    project_id: &str,
) -> Result<()> {
    let session = StoredSession::require()?;
    let status = parse_status(status)?;

    let ticket = CreateTicket {
        description: description.to_string(),
        status,
        stack_id,
        project_id: project_id.to_string(),
        email: session.user.email,
    };

    api.create_ticket(&ticket).context("Failed to create ticket")?;
    println!("Ticket created");
    Ok(())
}

fn list(
    api: &dyn HelpdeskApi,
    admin: &dyn AdminApi,
    all: bool,
    format: OutputFormat,
) -> Result<()> {
    let tickets = if all {
        admin.all_tickets().context("Failed to list tickets")?
    } else {
        let session = StoredSession::require()?;
        api.tickets_for_user(&session.user.email)
            .context("Failed to list tickets")?
    };

    if tickets.is_empty() && format == OutputFormat::Text {
        println!("No tickets found");
        return Ok(());
    }
    output::output_list(&tickets, format);
    Ok(())
}

/// Post the comment, then resolve any @mentions against the project
/// member list and request email notifications. The comment is the
/// operation; notification failures are warnings, never errors.
fn comment(api: &dyn HelpdeskApi, id: &str, text: &str, format: OutputFormat) -> Result<()> {
    let session = StoredSession::require()?;

    let comment = api
        .add_comment(id, &session.user.user_id, text)
        .context("Failed to add comment")?;
    output::output_result(&comment, format);

    if extract_mentions(text).is_empty() {
        return Ok(());
    }

    let members = match api.project_members(&session.user.user_id) {
        Ok(members) => members,
        Err(err) => {
            output::warn(&format!(
                "Could not load project members for mention notifications: {}",
                err
            ));
            return Ok(());
        }
    };

    match resolve_and_notify(api, id, text, &members, &session.user.name) {
        Ok(notified) if !notified.is_empty() => {
            eprintln!("Notified {} mentioned member(s)", notified.len());
        }
        Ok(_) => {}
        Err(err) => output::warn(&format!("Mention notifications failed: {}", err)),
    }

    Ok(())
}

fn comments(api: &dyn HelpdeskApi, id: &str, format: OutputFormat) -> Result<()> {
    let comments = api.list_comments(id).context("Failed to list comments")?;

    if comments.is_empty() && format == OutputFormat::Text {
        println!("No comments on ticket {}", id);
        return Ok(());
    }
    output::output_list(&comments, format);
    Ok(())
}

fn update_status(api: &dyn HelpdeskApi, id: &str, status: &str) -> Result<()> {
    let status = parse_status(status)?;
    api.update_ticket_status(id, status)
        .context("Failed to update ticket status")?;
    println!("Ticket {} moved to {}", id.cyan(), status);
    Ok(())
}

fn suggest(
    members: &dyn MemberSource,
    text: &str,
    pick: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    if let Some(name) = pick {
        println!("{}", MentionResolver::on_suggestion_selected(text, name));
        return Ok(());
    }

    let session = StoredSession::require()?;
    let mut resolver = MentionResolver::new(&session.user.user_id);
    let suggestions = resolver
        .on_text_changed(text, members)
        .context("Failed to load mention suggestions")?;

    if suggestions.is_empty() && format == OutputFormat::Text {
        println!("No suggestions");
        return Ok(());
    }
    output::output_list(&suggestions, format);
    Ok(())
}

pub fn summary(api: &dyn HelpdeskApi, format: OutputFormat) -> Result<()> {
    let session = StoredSession::require()?;
    let summary = api
        .user_summary(&session.user.email)
        .context("Failed to load ticket summary")?;
    output::output_result(&summary, format);
    Ok(())
}
