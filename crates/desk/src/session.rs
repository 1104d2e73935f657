use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Duration, Utc};
use directories::ProjectDirs;
use helpdesk_core::{HelpdeskError, Session, UserAccount};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const SESSION_FILE_NAME: &str = "session.json";

/// How long a sign-in stays valid. The original portal force-logged users
/// out on an hourly timer; here expiry is an explicit timestamp checked
/// on load instead of a background task.
const SESSION_TTL_HOURS: i64 = 1;

/// Session persisted between invocations in the user config dir
#[derive(Debug, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user: UserAccount,
    pub expires_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn from_session(session: Session) -> Self {
        Self {
            token: session.token,
            user: session.user,
            expires_at: Utc::now() + Duration::hours(SESSION_TTL_HOURS),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Load the stored session if one exists; expiry is not checked here
    pub fn load() -> Result<Option<Self>> {
        let path = Self::session_path()?;
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session file: {}", path.display()))?;
        let session = serde_json::from_str(&content).context("Failed to parse session file")?;
        Ok(Some(session))
    }

    /// Load the session a command needs to act as the current user. A
    /// missing session is an error; an expired one is deleted and
    /// reported as such.
    pub fn require() -> Result<Self> {
        match Self::load()? {
            None => Err(anyhow!("Not signed in. Run 'desk login <email>' first")),
            Some(session) if session.is_expired() => {
                Self::delete()?;
                Err(HelpdeskError::SessionExpired.into())
            }
            Some(session) => Ok(session),
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::session_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write session file: {}", path.display()))?;
        Ok(())
    }

    pub fn delete() -> Result<()> {
        let path = Self::session_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete session file: {}", path.display()))?;
        }
        Ok(())
    }

    pub fn session_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "desk")
            .ok_or_else(|| anyhow!("Could not determine the user config directory"))?;
        Ok(dirs.config_dir().join(SESSION_FILE_NAME))
    }
}
