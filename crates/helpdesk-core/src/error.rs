use thiserror::Error;

/// Common errors for all helpdesk API operations
#[derive(Error, Debug)]
pub enum HelpdeskError {
    #[error("Authentication failed")]
    Unauthorized,

    #[error("Session expired, please sign in again")]
    SessionExpired,

    #[error("Ticket not found: {0}")]
    TicketNotFound(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, HelpdeskError>;
