use crate::cli::{OutputFormat, SessionCommands};
use crate::output;
use crate::session::StoredSession;
use anyhow::{Context, Result};
use colored::Colorize;
use helpdesk_core::{HelpdeskApi, NewUser, Session};

#[allow(clippy::too_many_arguments)]
pub fn register(
    api: &dyn HelpdeskApi,
    name: &str,
    email: &str,
    password: &str,
    project_role: &str,
    role_id: i64,
    stack_id: i64,
) -> Result<()> {
    let new_user = NewUser {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        project_role: project_role.to_string(),
        role_id,
        stack_id,
    };

    api.register(&new_user).context("Registration failed")?;

    println!(
        "Account registered. Sign in with 'desk login {} --password <PASSWORD>'",
        email
    );
    Ok(())
}

pub fn login(
    api: &dyn HelpdeskApi,
    email: &str,
    password: Option<&str>,
    code: Option<&str>,
    admin: bool,
    format: OutputFormat,
) -> Result<()> {
    let session = if let Some(password) = password {
        if admin {
            api.admin_sign_in(email, password)
                .context("Administrator sign-in failed")?
        } else {
            api.sign_in(email, password).context("Sign-in failed")?
        }
    } else if let Some(code) = code {
        api.verify_otp(email, code)
            .context("One-time password verification failed")?
    } else {
        // --otp: request the code; sign-in completes on the next call
        api.request_otp(email)
            .context("Failed to request a one-time password")?;
        println!(
            "One-time password sent to {}. Complete sign-in with 'desk login {} --code <CODE>'",
            email, email
        );
        return Ok(());
    };

    store_session(session, format)
}

fn store_session(session: Session, format: OutputFormat) -> Result<()> {
    let stored = StoredSession::from_session(session);
    stored.save()?;

    match format {
        OutputFormat::Json => output::output_result(&stored.user, format),
        OutputFormat::Text => println!(
            "Signed in as {} <{}>",
            stored.user.name.bold(),
            stored.user.email
        ),
    }
    Ok(())
}

pub fn logout() -> Result<()> {
    StoredSession::delete()?;
    println!("Signed out");
    Ok(())
}

pub fn roles(api: &dyn HelpdeskApi, format: OutputFormat) -> Result<()> {
    let roles = api.list_roles().context("Failed to list roles")?;
    output::output_list(&roles, format);
    Ok(())
}

pub fn stacks(api: &dyn HelpdeskApi, format: OutputFormat) -> Result<()> {
    let stacks = api.list_stacks().context("Failed to list stacks")?;
    output::output_list(&stacks, format);
    Ok(())
}

pub fn session(action: &SessionCommands, format: OutputFormat) -> Result<()> {
    match action {
        SessionCommands::Show => match StoredSession::load()? {
            None => println!("Not signed in"),
            Some(stored) => output::output_result(&stored, format),
        },
        SessionCommands::Clear => {
            StoredSession::delete()?;
            println!("Session cleared");
        }
        SessionCommands::Path => {
            println!("{}", StoredSession::session_path()?.display());
        }
    }
    Ok(())
}
