use crate::error::{PortalError, Result};
use crate::models::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use ureq::Agent;

pub struct PortalClient {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl PortalClient {
    pub fn new(base_url: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a session token; subsequent requests carry it as a bearer
    /// header. Auth endpoints themselves work without one.
    pub fn with_token(base_url: &str, token: &str) -> Self {
        let mut client = Self::new(base_url);
        client.token = Some(token.to_string());
        client
    }

    fn handle_error(&self, err: ureq::Error) -> PortalError {
        match &err {
            ureq::Error::StatusCode(code) => {
                if *code == 401 {
                    PortalError::Unauthorized
                } else if *code == 404 {
                    PortalError::Api {
                        status: *code,
                        message: "Resource not found".to_string(),
                    }
                } else {
                    PortalError::Api {
                        status: *code,
                        message: err.to_string(),
                    }
                }
            }
            _ => PortalError::Http(err),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .agent
            .get(&url)
            .header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let mut response = request.call().map_err(|e| self.handle_error(e))?;
        Ok(response.body_mut().read_json()?)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let mut response = self.post_raw(path, body)?;
        Ok(response.body_mut().read_json()?)
    }

    /// POST where only the status code matters; the response body is
    /// discarded
    fn post_accepted<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        self.post_raw(path, body)?;
        Ok(())
    }

    fn post_raw<B: Serialize>(&self, path: &str, body: &B) -> Result<ureq::http::Response<ureq::Body>> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        request.send_json(body).map_err(|e| self.handle_error(e))
    }

    // ========== Accounts ==========

    pub fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.post_accepted("/login", request)
    }

    pub fn sign_in(&self, request: &CredentialsRequest) -> Result<SessionResponse> {
        self.post_json("/signin", request)
    }

    pub fn admin_sign_in(&self, request: &CredentialsRequest) -> Result<SessionResponse> {
        self.post_json("/admin_login", request)
    }

    pub fn request_otp(&self, email: &str) -> Result<()> {
        self.post_accepted(
            "/send-otp",
            &OtpRequest {
                email: email.to_string(),
            },
        )
    }

    pub fn verify_otp(&self, email: &str, otp: &str) -> Result<SessionResponse> {
        self.post_json(
            "/verify-otp",
            &VerifyOtpRequest {
                email: email.to_string(),
                otp: otp.to_string(),
            },
        )
    }

    // ========== Reference data ==========

    pub fn list_roles(&self) -> Result<Vec<WireRole>> {
        self.get_json("/all_roles")
    }

    pub fn list_stacks(&self) -> Result<Vec<WireStack>> {
        self.get_json("/all_stacks")
    }

    /// Projects visible to the caller. The backend expects a bodyless
    /// POST here.
    pub fn list_projects(&self) -> Result<Vec<WireProject>> {
        let url = format!("{}/getProject", self.base_url);
        let mut request = self.agent.post(&url).header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let mut response = request.send_empty().map_err(|e| self.handle_error(e))?;
        Ok(response.body_mut().read_json()?)
    }

    // ========== Tickets ==========

    pub fn send_ticket(&self, request: &SendTicketRequest) -> Result<()> {
        self.post_accepted("/sendticket", request)
    }

    pub fn all_tickets(&self) -> Result<Vec<WireTicket>> {
        self.get_json("/allTickets")
    }

    pub fn tickets_for_user(&self, email: &str) -> Result<Vec<WireTicket>> {
        self.post_json(
            "/getTicketForUsers",
            &EmailRequest {
                email: email.to_string(),
            },
        )
    }

    pub fn update_ticket_status(&self, request: &UpdateStatusRequest) -> Result<()> {
        self.post_accepted("/updateTicketStatus", request)
    }

    // ========== Comments & mentions ==========

    pub fn project_users(&self, user_id: &str) -> Result<Vec<ProjectUser>> {
        let path = format!("/get-project-users?user_id={}", urlencoding::encode(user_id));
        let response: ProjectUsersResponse = self.get_json(&path)?;
        Ok(response.into_users())
    }

    pub fn add_comment(&self, request: &AddCommentRequest) -> Result<WireComment> {
        let response: AddCommentResponse = self.post_json("/comment", request)?;
        Ok(response.comment)
    }

    /// All comments on a ticket. An absent or empty body is an empty
    /// list, and a single wrapped comment is normalized to a list of one.
    pub fn all_comments(&self, ticket_id: &str) -> Result<Vec<WireComment>> {
        let path = format!("/all-comment?ticket_id={}", urlencoding::encode(ticket_id));
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .agent
            .get(&url)
            .header("Accept", "application/json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let mut response = request.call().map_err(|e| self.handle_error(e))?;
        let body = response.body_mut().read_to_string()?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(Vec::new());
        }

        let parsed: CommentListResponse = serde_json::from_str(&body)?;
        Ok(parsed.into_comments())
    }

    /// Fire the mention notification request. Success is any 2xx; the
    /// body is ignored.
    pub fn mention_emails(&self, request: &MentionEmailsRequest) -> Result<()> {
        self.post_accepted("/mention-emails", request)
    }

    // ========== Admin ==========

    pub fn all_users(&self) -> Result<Vec<WireUser>> {
        self.get_json("/getallUsers")
    }

    pub fn project_list(&self) -> Result<Vec<WireProject>> {
        self.get_json("/getprojectlist")
    }

    pub fn users_table(&self) -> Result<Vec<WireUsersTableRow>> {
        self.get_json("/get_users_table")
    }

    pub fn add_project(&self, request: &AddProjectRequest) -> Result<()> {
        self.post_accepted("/add_project", request)
    }

    pub fn assign_user_project(&self, request: &AssignProjectRequest) -> Result<()> {
        self.post_accepted("/updateUserProject", request)
    }

    pub fn admin_analytics(&self, email: &str) -> Result<AdminAnalyticsResponse> {
        self.post_json(
            "/admin-analytics",
            &EmailRequest {
                email: email.to_string(),
            },
        )
    }

    pub fn user_summary(&self, email: &str) -> Result<UserSummaryResponse> {
        self.post_json(
            "/user-summary",
            &EmailRequest {
                email: email.to_string(),
            },
        )
    }
}
