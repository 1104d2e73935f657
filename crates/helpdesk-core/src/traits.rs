use crate::error::Result;
use crate::models::*;

/// Operations available to every signed-in user.
///
/// Identity is always explicit: operations take the acting user's
/// identifier (or email) as a parameter instead of reading it from
/// ambient session state.
pub trait HelpdeskApi: Send + Sync {
    // ========== Account Operations ==========

    /// Register a new account
    fn register(&self, new_user: &NewUser) -> Result<()>;

    /// Sign in with email and password
    fn sign_in(&self, email: &str, password: &str) -> Result<Session>;

    /// Sign in to an administrator account
    fn admin_sign_in(&self, email: &str, password: &str) -> Result<Session>;

    /// Request a one-time password to be emailed
    fn request_otp(&self, email: &str) -> Result<()>;

    /// Complete an OTP sign-in
    fn verify_otp(&self, email: &str, otp: &str) -> Result<Session>;

    // ========== Reference Data ==========

    /// List account roles (for the registration form)
    fn list_roles(&self) -> Result<Vec<Role>>;

    /// List departments / stacks
    fn list_stacks(&self) -> Result<Vec<Stack>>;

    /// List projects visible to the caller
    fn list_projects(&self) -> Result<Vec<Project>>;

    // ========== Ticket Operations ==========

    /// Create a new support ticket
    fn create_ticket(&self, ticket: &CreateTicket) -> Result<()>;

    /// List tickets created by or assigned to the given user
    fn tickets_for_user(&self, email: &str) -> Result<Vec<Ticket>>;

    /// Move a ticket to a new status
    fn update_ticket_status(&self, ticket_id: &str, status: TicketStatus) -> Result<()>;

    // ========== Comment & Mention Operations ==========

    /// List the members of the projects associated with the given user
    fn project_members(&self, user_id: &str) -> Result<Vec<ProjectMember>>;

    /// Add a comment to a ticket
    fn add_comment(&self, ticket_id: &str, user_id: &str, text: &str) -> Result<Comment>;

    /// Get all comments on a ticket (newest first)
    fn list_comments(&self, ticket_id: &str) -> Result<Vec<Comment>>;

    /// Request email notifications for mentioned users. Fire-and-forget
    /// from the caller's perspective; failure never blocks the comment
    /// flow that triggered it.
    fn notify_mentions(
        &self,
        ticket_id: &str,
        users: &[MentionedUser],
        comment_text: &str,
        added_by: &str,
    ) -> Result<()>;

    // ========== Analytics ==========

    /// Per-user ticket summary
    fn user_summary(&self, email: &str) -> Result<UserSummary>;
}

/// Administrator-only operations.
///
/// Separate from [`HelpdeskApi`] because most commands never need them;
/// the backend client implements both.
pub trait AdminApi: Send + Sync {
    /// List every ticket in the system
    fn all_tickets(&self) -> Result<Vec<Ticket>>;

    /// List every registered user
    fn all_users(&self) -> Result<Vec<UserAccount>>;

    /// List every project (admin dropdowns)
    fn project_list(&self) -> Result<Vec<Project>>;

    /// The user/role table shown on the admin portal
    fn users_table(&self) -> Result<Vec<UsersTableRow>>;

    /// Create a project with the given project manager
    fn add_project(&self, project_name: &str, pm_id: &str) -> Result<()>;

    /// Assign a user to a project (team membership)
    fn assign_user_to_project(&self, user_id: &str, project_id: &str) -> Result<()>;

    /// Admin analytics dashboard
    fn admin_analytics(&self, email: &str) -> Result<AdminAnalytics>;
}
