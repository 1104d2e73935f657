use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /sendticket`. Field names are the backend's; `des` is
/// the ticket description and `email` identifies the creator.
#[derive(Debug, Serialize)]
pub struct SendTicketRequest {
    pub des: String,
    pub status: String,
    pub stack_id: i64,
    pub project_id: String,
    pub email: String,
}

/// Body of the ticket-listing and analytics posts that key on the caller
#[derive(Debug, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusRequest {
    pub ticket_id: String,
    pub status: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireTicket {
    pub ticket_id: String,
    pub ticket_description: String,
    pub status: String,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub assigned_user_name: Option<String>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completion_date: Option<DateTime<Utc>>,
}

/// `POST /admin-analytics` response. The top level is camelCase while the
/// nested objects keep the backend's snake_case columns.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAnalyticsResponse {
    pub total_tickets: i64,
    #[serde(default)]
    pub status_count: BTreeMap<String, i64>,
    #[serde(default)]
    pub assigned_users: Vec<WireAssignedUser>,
    #[serde(default)]
    pub all_tickets: Vec<WireTicket>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireAssignedUser {
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub tickets_assigned: Vec<String>,
}

/// `POST /user-summary` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub total_tickets: i64,
    #[serde(default)]
    pub tickets: Vec<WireTicket>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_tolerates_missing_optional_columns() {
        let json = r#"{"ticket_id":"t-1","ticket_description":"printer on fire","status":"High"}"#;
        let ticket: WireTicket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.status, "High");
        assert!(ticket.project_name.is_none());
        assert!(ticket.created_at.is_none());
    }

    #[test]
    fn ticket_parses_rfc3339_timestamps() {
        let json = r#"{
            "ticket_id": "t-1",
            "ticket_description": "printer on fire",
            "status": "In Progress",
            "created_at": "2026-01-15T09:30:00Z"
        }"#;
        let ticket: WireTicket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.created_at.unwrap().to_rfc3339(), "2026-01-15T09:30:00+00:00");
    }

    #[test]
    fn admin_analytics_parses_mixed_casing() {
        let json = r#"{
            "totalTickets": 3,
            "statusCount": {"High": 2, "Resolved": 1},
            "assignedUsers": [
                {"user_id": "u-1", "name": "Ann", "email": "ann@example.com", "tickets_assigned": ["t-1"]}
            ],
            "allTickets": []
        }"#;
        let parsed: AdminAnalyticsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.total_tickets, 3);
        assert_eq!(parsed.status_count["High"], 2);
        assert_eq!(parsed.assigned_users[0].tickets_assigned, vec!["t-1"]);
    }
}
