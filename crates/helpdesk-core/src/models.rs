use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A user associated with the project that owns a ticket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectMember {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

/// Recipient of a mention notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MentionedUser {
    pub email: String,
    pub name: String,
}

/// Comment on a ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    /// Display name of the comment author
    pub author: String,
    pub text: String,
    pub created: Option<DateTime<Utc>>,
    /// Append-only; replies are never reordered or edited
    pub replies: Vec<Reply>,
}

/// Reply nested under a comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub id: String,
    pub author: String,
    pub message: String,
}

/// Support ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: String,
    pub description: String,
    /// Raw status string as stored by the backend (see [`TicketStatus`])
    pub status: String,
    pub project_name: Option<String>,
    /// Display name of the assigned user
    pub assigned_to: Option<String>,
    /// Display name of the creator
    pub created_by: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub completion_date: Option<DateTime<Utc>>,
}

/// The backend's closed status vocabulary (priorities and workflow states
/// share one field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    High,
    Medium,
    Low,
    InProgress,
    Resolved,
}

impl TicketStatus {
    /// Parse from user input (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" => Some(TicketStatus::High),
            "medium" => Some(TicketStatus::Medium),
            "low" => Some(TicketStatus::Low),
            "in progress" | "in-progress" | "inprogress" => Some(TicketStatus::InProgress),
            "resolved" => Some(TicketStatus::Resolved),
            _ => None,
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TicketStatus::High => "High",
            TicketStatus::Medium => "Medium",
            TicketStatus::Low => "Low",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
        };
        write!(f, "{}", s)
    }
}

/// Project that tickets and users are assigned to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub project_id: String,
    pub project_name: String,
}

/// Department / technology stack a ticket is filed under
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stack {
    pub stack_id: i64,
    pub stack_name: String,
}

/// Account role (role_id 1 is the administrator role)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub role_id: i64,
    pub role_name: String,
}

/// Registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role_id: i64,
}

impl UserAccount {
    pub fn is_admin(&self) -> bool {
        self.role_id == 1
    }
}

/// Authenticated session returned by sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserAccount,
}

/// Data for registering a new account
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub project_role: String,
    pub role_id: i64,
    pub stack_id: i64,
}

/// Data for creating a new ticket. The creator is resolved server-side
/// from the explicit email.
#[derive(Debug, Clone)]
pub struct CreateTicket {
    pub description: String,
    pub status: TicketStatus,
    pub stack_id: i64,
    pub project_id: String,
    pub email: String,
}

/// Row of the admin user/role table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersTableRow {
    pub name: String,
    pub role_id: i64,
}

/// Per-user assignment stats in the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignedUserStats {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub tickets_assigned: Vec<String>,
}

/// Admin analytics dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAnalytics {
    pub total_tickets: i64,
    pub status_count: BTreeMap<String, i64>,
    pub assigned_users: Vec<AssignedUserStats>,
    pub all_tickets: Vec<Ticket>,
}

/// Per-user analytics payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub total_tickets: i64,
    pub tickets: Vec<Ticket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_status_parses_case_insensitively() {
        assert_eq!(TicketStatus::parse("high"), Some(TicketStatus::High));
        assert_eq!(TicketStatus::parse("HIGH"), Some(TicketStatus::High));
        assert_eq!(
            TicketStatus::parse("in progress"),
            Some(TicketStatus::InProgress)
        );
        assert_eq!(
            TicketStatus::parse("in-progress"),
            Some(TicketStatus::InProgress)
        );
        assert_eq!(TicketStatus::parse("Resolved"), Some(TicketStatus::Resolved));
        assert_eq!(TicketStatus::parse("urgent"), None);
    }

    #[test]
    fn ticket_status_displays_backend_vocabulary() {
        assert_eq!(TicketStatus::InProgress.to_string(), "In Progress");
        assert_eq!(TicketStatus::High.to_string(), "High");
    }

    #[test]
    fn ticket_deserializes_with_optional_columns_absent() {
        let json = r#"{"ticket_id":"t-1","description":"printer on fire","status":"High"}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.ticket_id, "t-1");
        assert!(ticket.project_name.is_none());
        assert!(ticket.assigned_to.is_none());
        assert!(ticket.created_at.is_none());
        assert!(ticket.completion_date.is_none());
    }

    #[test]
    fn user_account_without_role_defaults_to_non_admin() {
        let json = r#"{"user_id":"u-1","name":"Ann","email":"ann@example.com"}"#;
        let user: UserAccount = serde_json::from_str(json).unwrap();
        assert_eq!(user.role_id, 0);
        assert!(!user.is_admin());
    }

    #[test]
    fn session_round_trips_through_json() {
        let session = Session {
            token: "jwt-token".to_string(),
            user: UserAccount {
                user_id: "u-1".to_string(),
                name: "Ann".to_string(),
                email: "ann@example.com".to_string(),
                role_id: 2,
            },
        };

        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.token, "jwt-token");
        assert_eq!(parsed.user.email, "ann@example.com");
        assert_eq!(parsed.user.role_id, 2);
    }

    #[test]
    fn user_account_role_one_is_admin() {
        let user = UserAccount {
            user_id: "u-1".to_string(),
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            role_id: 1,
        };
        assert!(user.is_admin());

        let user = UserAccount { role_id: 2, ..user };
        assert!(!user.is_admin());
    }
}
