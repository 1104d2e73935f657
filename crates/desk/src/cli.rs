use clap::{ArgGroup, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "desk", version, about = "CLI for the helpdesk portal")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "DESK_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Portal backend URL (overrides config file)
    #[arg(long, env = "DESK_URL", global = true)]
    pub url: Option<String>,

    /// API token (overrides the stored session token)
    #[arg(long, env = "DESK_TOKEN", global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new account
    Register {
        /// Full name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long, short = 'e')]
        email: String,
        /// Password
        #[arg(long, short = 'p')]
        password: String,
        /// Free-form project role (e.g. Developer, QA, Manager)
        #[arg(long)]
        project_role: String,
        /// Account role id (see 'desk roles')
        #[arg(long)]
        role_id: i64,
        /// Department / stack id (see 'desk stacks')
        #[arg(long)]
        stack_id: i64,
    },
    /// Sign in and store a session
    #[command(group(ArgGroup::new("method").required(true).args(["password", "otp", "code"])))]
    Login {
        /// Email address
        email: String,
        /// Password sign-in
        #[arg(long, short = 'p')]
        password: Option<String>,
        /// Request a one-time password by email, then sign in with --code
        #[arg(long)]
        otp: bool,
        /// Complete an OTP sign-in with the emailed code
        #[arg(long, value_name = "CODE")]
        code: Option<String>,
        /// Sign in to an administrator account
        #[arg(long)]
        admin: bool,
    },
    /// Discard the stored session
    Logout,
    /// List account roles
    Roles,
    /// List departments / stacks
    Stacks,
    /// Ticket operations
    #[command(visible_alias = "t")]
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },
    /// Project operations
    #[command(visible_alias = "p")]
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Administrator operations
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Your ticket summary dashboard
    Summary,
    /// Stored session (token, identity, expiry)
    Session {
        #[command(subcommand)]
        action: SessionCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "desk", &mut std::io::stdout());
    }
}

#[derive(Subcommand, Debug)]
pub enum TicketCommands {
    /// Create a new support ticket
    Create {
        /// Ticket description
        description: String,
        /// Status (High, Medium, Low, In Progress, Resolved)
        #[arg(long, short = 's')]
        status: String,
        /// Department / stack id (see 'desk stacks')
        #[arg(long)]
        stack_id: i64,
        /// Project id (see 'desk project list')
        #[arg(long)]
        project_id: String,
    },
    /// List your tickets
    List {
        /// List every ticket in the system (administrators)
        #[arg(long)]
        all: bool,
    },
    /// Add a comment to a ticket; @mentions of project members trigger
    /// email notifications
    Comment {
        /// Ticket id
        id: String,
        /// Comment text
        text: String,
    },
    /// List the comments on a ticket
    Comments {
        /// Ticket id
        id: String,
    },
    /// Move a ticket to a new status
    Status {
        /// Ticket id
        id: String,
        /// New status (High, Medium, Low, In Progress, Resolved)
        status: String,
    },
    /// Show mention suggestions for an in-progress comment draft
    Suggest {
        /// The draft comment text (e.g. "hello @bo")
        text: String,
        /// Apply a suggestion and print the completed text
        #[arg(long, value_name = "NAME")]
        pick: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List projects visible to you
    List,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommands {
    /// List every registered user
    Users,
    /// List every project
    Projects,
    /// The user/role table
    Table,
    /// Create a project with a project manager
    AddProject {
        /// Project name
        name: String,
        /// Project manager's user id
        #[arg(long)]
        pm: String,
    },
    /// Assign a user to a project
    Assign {
        /// User id
        #[arg(long)]
        user: String,
        /// Project id
        #[arg(long)]
        project: String,
    },
    /// Admin analytics dashboard
    Analytics,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Show the stored session
    Show,
    /// Delete the stored session
    Clear,
    /// Print the session file path
    Path,
}
