mod cli;
mod commands;
mod config;
mod output;
mod session;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use portal_backend::PortalClient;
use session::StoredSession;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    output::init_colors(cli.color);

    if let Commands::Completions { shell } = &cli.command {
        Cli::generate_completions(*shell);
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::output_error(&err, cli.format);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Commands that only touch local state never need a configured URL
    match &cli.command {
        Commands::Logout => return commands::auth::logout(),
        Commands::Session { action } => return commands::auth::session(action, cli.format),
        _ => {}
    }

    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.url.clone(), cli.token.clone());
    config.validate()?;

    let url = config
        .url
        .as_deref()
        .ok_or_else(|| anyhow!("Portal URL not configured"))?;

    // Explicit token beats the stored session; an expired session is as
    // good as none
    let token = match config.token {
        Some(token) => Some(token),
        None => StoredSession::load()?
            .filter(|s| !s.is_expired())
            .map(|s| s.token),
    };

    let client = match token {
        Some(token) => PortalClient::with_token(url, &token),
        None => PortalClient::new(url),
    };

    dispatch(&client, cli)
}

fn dispatch(client: &PortalClient, cli: &Cli) -> Result<()> {
    let format = cli.format;
    match &cli.command {
        Commands::Register {
            name,
            email,
            password,
            project_role,
            role_id,
            stack_id,
        } => commands::auth::register(
            client,
            name,
            email,
            password,
            project_role,
            *role_id,
            *stack_id,
        ),
        Commands::Login {
            email,
            password,
            otp: _,
            code,
            admin,
        } => commands::auth::login(
            client,
            email,
            password.as_deref(),
            code.as_deref(),
            *admin,
            format,
        ),
        Commands::Roles => commands::auth::roles(client, format),
        Commands::Stacks => commands::auth::stacks(client, format),
        Commands::Ticket { action } => commands::ticket::run(client, client, client, action, format),
        Commands::Project { action } => commands::project::run(client, action, format),
        Commands::Admin { action } => commands::admin::run(client, action, format),
        Commands::Summary => commands::ticket::summary(client, format),
        // Handled before the client is built
        Commands::Logout | Commands::Session { .. } | Commands::Completions { .. } => Ok(()),
    }
}
