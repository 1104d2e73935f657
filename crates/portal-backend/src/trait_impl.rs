//! HelpdeskApi, AdminApi and MemberSource trait implementations for PortalClient

use crate::client::PortalClient;
use crate::models::{
    AddCommentRequest, AddProjectRequest, AssignProjectRequest, CredentialsRequest,
    MentionEmailsRequest, MentionedUserRequest, RegisterRequest, SendTicketRequest,
    UpdateStatusRequest,
};
use helpdesk_core::{
    AdminAnalytics, AdminApi, Comment, CreateTicket, HelpdeskApi, HelpdeskError, MemberSource,
    MentionedUser, NewUser, Project, ProjectMember, Result, Role, Session, Stack, Ticket,
    TicketStatus, UserAccount, UserSummary, UsersTableRow,
};

impl HelpdeskApi for PortalClient {
    fn register(&self, new_user: &NewUser) -> Result<()> {
        let request = RegisterRequest {
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            password: new_user.password.clone(),
            project_role: new_user.project_role.clone(),
            role_id: new_user.role_id,
            stack_id: new_user.stack_id,
        };
        self.register(&request).map_err(HelpdeskError::from)
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<Session> {
        self.sign_in(&CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map(Into::into)
        .map_err(HelpdeskError::from)
    }

    fn admin_sign_in(&self, email: &str, password: &str) -> Result<Session> {
        self.admin_sign_in(&CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
        .map(Into::into)
        .map_err(HelpdeskError::from)
    }

    fn request_otp(&self, email: &str) -> Result<()> {
        self.request_otp(email).map_err(HelpdeskError::from)
    }

    fn verify_otp(&self, email: &str, otp: &str) -> Result<Session> {
        self.verify_otp(email, otp)
            .map(Into::into)
            .map_err(HelpdeskError::from)
    }

    fn list_roles(&self) -> Result<Vec<Role>> {
        self.list_roles()
            .map(|roles| roles.into_iter().map(Into::into).collect())
            .map_err(HelpdeskError::from)
    }

    fn list_stacks(&self) -> Result<Vec<Stack>> {
        self.list_stacks()
            .map(|stacks| stacks.into_iter().map(Into::into).collect())
            .map_err(HelpdeskError::from)
    }

    fn list_projects(&self) -> Result<Vec<Project>> {
        self.list_projects()
            .map(|projects| projects.into_iter().map(Into::into).collect())
            .map_err(HelpdeskError::from)
    }

    fn create_ticket(&self, ticket: &CreateTicket) -> Result<()> {
        let request = SendTicketRequest {
            des: ticket.description.clone(),
            status: ticket.status.to_string(),
            stack_id: ticket.stack_id,
            project_id: ticket.project_id.clone(),
            email: ticket.email.clone(),
        };
        self.send_ticket(&request).map_err(HelpdeskError::from)
    }

    fn tickets_for_user(&self, email: &str) -> Result<Vec<Ticket>> {
        self.tickets_for_user(email)
            .map(|tickets| tickets.into_iter().map(Into::into).collect())
            .map_err(HelpdeskError::from)
    }

    fn update_ticket_status(&self, ticket_id: &str, status: TicketStatus) -> Result<()> {
        let request = UpdateStatusRequest {
            ticket_id: ticket_id.to_string(),
            status: status.to_string(),
        };
        self.update_ticket_status(&request)
            .map_err(HelpdeskError::from)
    }

    fn project_members(&self, user_id: &str) -> Result<Vec<ProjectMember>> {
        self.project_users(user_id)
            .map(|users| users.into_iter().map(Into::into).collect())
            .map_err(HelpdeskError::from)
    }

    fn add_comment(&self, ticket_id: &str, user_id: &str, text: &str) -> Result<Comment> {
        let request = AddCommentRequest {
            ticket_id: ticket_id.to_string(),
            user_id: user_id.to_string(),
            comment_text: text.to_string(),
        };
        self.add_comment(&request)
            .map(Into::into)
            .map_err(HelpdeskError::from)
    }

    fn list_comments(&self, ticket_id: &str) -> Result<Vec<Comment>> {
        self.all_comments(ticket_id)
            .map(|comments| comments.into_iter().map(Into::into).collect())
            .map_err(HelpdeskError::from)
    }

    fn notify_mentions(
        &self,
        ticket_id: &str,
        users: &[MentionedUser],
        comment_text: &str,
        added_by: &str,
    ) -> Result<()> {
        let request = MentionEmailsRequest {
            ticket_id: ticket_id.to_string(),
            mentioned_users: users
                .iter()
                .map(|u| MentionedUserRequest {
                    email: u.email.clone(),
                    name: u.name.clone(),
                })
                .collect(),
            comment_text: comment_text.to_string(),
            added_by: added_by.to_string(),
        };
        self.mention_emails(&request).map_err(HelpdeskError::from)
    }

    fn user_summary(&self, email: &str) -> Result<UserSummary> {
        self.user_summary(email)
            .map(Into::into)
            .map_err(HelpdeskError::from)
    }
}

impl AdminApi for PortalClient {
    fn all_tickets(&self) -> Result<Vec<Ticket>> {
        self.all_tickets()
            .map(|tickets| tickets.into_iter().map(Into::into).collect())
            .map_err(HelpdeskError::from)
    }

    fn all_users(&self) -> Result<Vec<UserAccount>> {
        self.all_users()
            .map(|users| users.into_iter().map(Into::into).collect())
            .map_err(HelpdeskError::from)
    }

    fn project_list(&self) -> Result<Vec<Project>> {
        self.project_list()
            .map(|projects| projects.into_iter().map(Into::into).collect())
            .map_err(HelpdeskError::from)
    }

    fn users_table(&self) -> Result<Vec<UsersTableRow>> {
        self.users_table()
            .map(|rows| rows.into_iter().map(Into::into).collect())
            .map_err(HelpdeskError::from)
    }

    fn add_project(&self, project_name: &str, pm_id: &str) -> Result<()> {
        let request = AddProjectRequest {
            project_name: project_name.to_string(),
            pm_id: pm_id.to_string(),
        };
        self.add_project(&request).map_err(HelpdeskError::from)
    }

    fn assign_user_to_project(&self, user_id: &str, project_id: &str) -> Result<()> {
        let request = AssignProjectRequest {
            user_id: user_id.to_string(),
            project_id: project_id.to_string(),
        };
        self.assign_user_project(&request)
            .map_err(HelpdeskError::from)
    }

    fn admin_analytics(&self, email: &str) -> Result<AdminAnalytics> {
        self.admin_analytics(email)
            .map(Into::into)
            .map_err(HelpdeskError::from)
    }
}

impl MemberSource for PortalClient {
    fn project_members(&self, user_id: &str) -> Result<Vec<ProjectMember>> {
        HelpdeskApi::project_members(self, user_id)
    }
}
