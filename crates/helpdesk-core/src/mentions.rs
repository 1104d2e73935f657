//! Mention detection and resolution for ticket comments.
//!
//! A mention is an `@name` token inside comment text. While a comment is
//! being drafted, the resolver turns the in-progress token into a
//! suggestion list drawn from the project's members; on submission,
//! completed mentions are matched against the member list and a single
//! notification request is issued for the matched users.

use crate::error::Result;
use crate::models::{MentionedUser, ProjectMember};
use crate::traits::HelpdeskApi;
use std::collections::BTreeSet;

/// Source of the member list for suggestion lookups.
///
/// Separate from [`HelpdeskApi`] so the resolver can be exercised without
/// a full backend; backend clients implement both.
pub trait MemberSource {
    fn project_members(&self, user_id: &str) -> Result<Vec<ProjectMember>>;
}

/// Per-comment-session resolver. Fetches the project member list at most
/// once and caches it wholesale; the suggestion list itself is derived
/// state, recomputed from the current input text on every call.
pub struct MentionResolver {
    user_id: String,
    members: Option<Vec<ProjectMember>>,
}

impl MentionResolver {
    /// `user_id` keys the member fetch (the current user, passed
    /// explicitly rather than read from ambient session state).
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            members: None,
        }
    }

    /// The in-progress mention draft: the substring after the last `@`,
    /// provided it contains no whitespace. `None` means no mention is
    /// being drafted (no `@`, or the token is already closed).
    pub fn mention_draft(text: &str) -> Option<&str> {
        let at = text.rfind('@')?;
        let draft = &text[at + 1..];
        if draft.contains(char::is_whitespace) {
            None
        } else {
            Some(draft)
        }
    }

    /// Recompute the suggestion list for the current input text.
    ///
    /// Returns the members whose name contains the draft substring,
    /// case-insensitive, in member-list order. An empty vec means the
    /// suggestion list is hidden. A fetch failure propagates as `Err`;
    /// callers log it and treat the list as empty. Never mutates the
    /// cached member list.
    pub fn on_text_changed(
        &mut self,
        text: &str,
        source: &dyn MemberSource,
    ) -> Result<Vec<ProjectMember>> {
        let Some(draft) = Self::mention_draft(text) else {
            return Ok(Vec::new());
        };

        if self.members.is_none() {
            self.members = Some(source.project_members(&self.user_id)?);
        }

        let needle = draft.to_lowercase();
        let members = self.members.as_deref().unwrap_or_default();
        Ok(members
            .iter()
            .filter(|m| m.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    /// Apply a suggestion chosen from the list: the trailing `@<partial>`
    /// becomes `@<name> ` (one trailing space), text before the last `@`
    /// is preserved. Selecting also closes the draft, so the next
    /// `on_text_changed` yields an empty list.
    pub fn on_suggestion_selected(text: &str, name: &str) -> String {
        match text.rfind('@') {
            Some(at) => format!("{}@{} ", &text[..at], name),
            None => text.to_string(),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// All completed mentions in a comment: `@` followed by one or more word
/// characters, deduplicated and lowercased, `@` stripped. Trailing
/// punctuation is excluded by the word-character class.
pub fn extract_mentions(text: &str) -> BTreeSet<String> {
    let mut mentions = BTreeSet::new();
    for (i, c) in text.char_indices() {
        if c != '@' {
            continue;
        }
        let rest = &text[i + 1..];
        let end = rest
            .find(|ch: char| !is_word_char(ch))
            .unwrap_or(rest.len());
        if end > 0 {
            mentions.insert(rest[..end].to_lowercase());
        }
    }
    mentions
}

/// Match the mentions in `comment_text` against `members` and request one
/// email notification for the matched users.
///
/// No mentions, or mentions matching no member, is a no-op: zero requests
/// are issued and an empty vec is returned. Unmatched names are silently
/// dropped. The caller treats a failed notification as fire-and-forget
/// (logged, never blocking the comment flow).
pub fn resolve_and_notify(
    api: &dyn HelpdeskApi,
    ticket_id: &str,
    comment_text: &str,
    members: &[ProjectMember],
    added_by: &str,
) -> Result<Vec<MentionedUser>> {
    let mentions = extract_mentions(comment_text);
    if mentions.is_empty() {
        return Ok(Vec::new());
    }

    let matched: Vec<MentionedUser> = members
        .iter()
        .filter(|m| mentions.contains(&m.name.to_lowercase()))
        .map(|m| MentionedUser {
            email: m.email.clone(),
            name: m.name.clone(),
        })
        .collect();
    if matched.is_empty() {
        return Ok(Vec::new());
    }

    api.notify_mentions(ticket_id, &matched, comment_text, added_by)?;
    Ok(matched)
}
