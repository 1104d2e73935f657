use helpdesk_core::HelpdeskError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, PortalError>;

impl From<PortalError> for HelpdeskError {
    fn from(err: PortalError) -> Self {
        match err {
            PortalError::Http(e) => HelpdeskError::Http(e.to_string()),
            PortalError::Parse(e) => HelpdeskError::Parse(e.to_string()),
            PortalError::Io(e) => HelpdeskError::Io(e.to_string()),
            PortalError::Unauthorized => HelpdeskError::Unauthorized,
            PortalError::Api { status, message } => HelpdeskError::Api { status, message },
        }
    }
}
