use serde::{Deserialize, Serialize};

/// User object embedded in sign-in responses and `/getallUsers`
#[derive(Debug, Clone, Deserialize)]
pub struct WireUser {
    pub user_id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role_id: i64,
}

/// Member entry from `/get-project-users`
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectUser {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

/// `/get-project-users` answers either a bare array or an object wrapping
/// one; both shapes are accepted
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProjectUsersResponse {
    List(Vec<ProjectUser>),
    Wrapped { users: Vec<ProjectUser> },
}

impl ProjectUsersResponse {
    pub fn into_users(self) -> Vec<ProjectUser> {
        match self {
            ProjectUsersResponse::List(users) => users,
            ProjectUsersResponse::Wrapped { users } => users,
        }
    }
}

/// Row from `/get_users_table`
#[derive(Debug, Clone, Deserialize)]
pub struct WireUsersTableRow {
    pub name: String,
    #[serde(default)]
    pub role_id: i64,
}

/// Body of `/updateUserProject` (the backend expects camelCase here only)
#[derive(Debug, Serialize)]
pub struct AssignProjectRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub project_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_users_accepts_bare_array() {
        let json = r#"[{"user_id":"u-1","name":"Bob","email":"bob@example.com"}]"#;
        let parsed: ProjectUsersResponse = serde_json::from_str(json).unwrap();
        let users = parsed.into_users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].name, "Bob");
    }

    #[test]
    fn project_users_accepts_wrapped_array() {
        let json = r#"{"users":[{"user_id":"u-1","name":"Bob","email":"bob@example.com"}]}"#;
        let parsed: ProjectUsersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.into_users().len(), 1);
    }

    #[test]
    fn assign_project_serializes_camel_case_user_id() {
        let req = AssignProjectRequest {
            user_id: "u-1".to_string(),
            project_id: "p-1".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"userId\":\"u-1\""));
        assert!(json.contains("\"project_id\":\"p-1\""));
    }
}
