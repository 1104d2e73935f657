use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct WireProject {
    pub project_id: String,
    pub project_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireStack {
    pub stack_id: i64,
    pub stack_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireRole {
    pub role_id: i64,
    pub role_name: String,
}

/// Body of `POST /add_project`; `pm_id` is the project manager's user id
#[derive(Debug, Serialize)]
pub struct AddProjectRequest {
    pub project_name: String,
    pub pm_id: String,
}
