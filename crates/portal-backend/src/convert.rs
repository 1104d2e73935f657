//! Conversion functions between portal API wire models and helpdesk-core models

use crate::models as wire;
use helpdesk_core::models as core;

impl From<wire::WireTicket> for core::Ticket {
    fn from(ticket: wire::WireTicket) -> Self {
        Self {
            ticket_id: ticket.ticket_id,
            description: ticket.ticket_description,
            status: ticket.status,
            project_name: ticket.project_name,
            assigned_to: ticket.assigned_user_name,
            created_by: ticket.creator_name,
            created_at: ticket.created_at,
            completion_date: ticket.completion_date,
        }
    }
}

impl From<wire::WireComment> for core::Comment {
    fn from(comment: wire::WireComment) -> Self {
        Self {
            id: comment.id.to_string(),
            author: comment.user,
            text: comment.message,
            created: comment.created_at,
            replies: comment.replies.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<wire::WireReply> for core::Reply {
    fn from(reply: wire::WireReply) -> Self {
        Self {
            id: reply.id.to_string(),
            author: reply.user,
            message: reply.message,
        }
    }
}

impl From<wire::ProjectUser> for core::ProjectMember {
    fn from(user: wire::ProjectUser) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
        }
    }
}

impl From<wire::WireProject> for core::Project {
    fn from(project: wire::WireProject) -> Self {
        Self {
            project_id: project.project_id,
            project_name: project.project_name,
        }
    }
}

impl From<wire::WireStack> for core::Stack {
    fn from(stack: wire::WireStack) -> Self {
        Self {
            stack_id: stack.stack_id,
            stack_name: stack.stack_name,
        }
    }
}

impl From<wire::WireRole> for core::Role {
    fn from(role: wire::WireRole) -> Self {
        Self {
            role_id: role.role_id,
            role_name: role.role_name,
        }
    }
}

impl From<wire::WireUser> for core::UserAccount {
    fn from(user: wire::WireUser) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            role_id: user.role_id,
        }
    }
}

impl From<wire::WireUsersTableRow> for core::UsersTableRow {
    fn from(row: wire::WireUsersTableRow) -> Self {
        Self {
            name: row.name,
            role_id: row.role_id,
        }
    }
}

impl From<wire::SessionResponse> for core::Session {
    fn from(session: wire::SessionResponse) -> Self {
        Self {
            token: session.token,
            user: session.user.into(),
        }
    }
}

impl From<wire::WireAssignedUser> for core::AssignedUserStats {
    fn from(user: wire::WireAssignedUser) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            tickets_assigned: user.tickets_assigned,
        }
    }
}

impl From<wire::AdminAnalyticsResponse> for core::AdminAnalytics {
    fn from(analytics: wire::AdminAnalyticsResponse) -> Self {
        Self {
            total_tickets: analytics.total_tickets,
            status_count: analytics.status_count,
            assigned_users: analytics.assigned_users.into_iter().map(Into::into).collect(),
            all_tickets: analytics.all_tickets.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<wire::UserSummaryResponse> for core::UserSummary {
    fn from(summary: wire::UserSummaryResponse) -> Self {
        Self {
            total_tickets: summary.total_tickets,
            tickets: summary.tickets.into_iter().map(Into::into).collect(),
        }
    }
}
