use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /comment`
#[derive(Debug, Serialize)]
pub struct AddCommentRequest {
    pub ticket_id: String,
    pub user_id: String,
    pub comment_text: String,
}

/// Comment as the backend returns it
#[derive(Debug, Clone, Deserialize)]
pub struct WireComment {
    pub id: i64,
    /// Author display name
    pub user: String,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub replies: Vec<WireReply>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireReply {
    pub id: i64,
    pub user: String,
    pub message: String,
}

/// `POST /comment` wraps the created comment
#[derive(Debug, Deserialize)]
pub struct AddCommentResponse {
    pub comment: WireComment,
}

/// `GET /all-comment` answers a bare array, a single wrapped comment, or
/// nothing at all; an absent body is handled by the client and the other
/// two shapes here
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CommentListResponse {
    List(Vec<WireComment>),
    Wrapped { comment: WireComment },
}

impl CommentListResponse {
    pub fn into_comments(self) -> Vec<WireComment> {
        match self {
            CommentListResponse::List(comments) => comments,
            CommentListResponse::Wrapped { comment } => vec![comment],
        }
    }
}

/// Body of `POST /mention-emails`
#[derive(Debug, Serialize)]
pub struct MentionEmailsRequest {
    pub ticket_id: String,
    pub mentioned_users: Vec<MentionedUserRequest>,
    pub comment_text: String,
    pub added_by: String,
}

#[derive(Debug, Serialize)]
pub struct MentionedUserRequest {
    pub email: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_list_accepts_bare_array() {
        let json = r#"[{"id":1,"user":"Bob","message":"hi","replies":[]}]"#;
        let parsed: CommentListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.into_comments().len(), 1);
    }

    #[test]
    fn comment_list_accepts_wrapped_single_comment() {
        let json = r#"{"comment":{"id":2,"user":"Alice","message":"hello"}}"#;
        let parsed: CommentListResponse = serde_json::from_str(json).unwrap();
        let comments = parsed.into_comments();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].user, "Alice");
        // Missing replies default to empty
        assert!(comments[0].replies.is_empty());
    }

    #[test]
    fn mention_emails_request_serializes_expected_shape() {
        let req = MentionEmailsRequest {
            ticket_id: "t-1".to_string(),
            mentioned_users: vec![MentionedUserRequest {
                email: "bob@example.com".to_string(),
                name: "Bob".to_string(),
            }],
            comment_text: "hi @Bob".to_string(),
            added_by: "u-9".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"mentioned_users\""));
        assert!(json.contains("\"added_by\":\"u-9\""));
        assert!(json.contains("\"email\":\"bob@example.com\""));
    }
}
