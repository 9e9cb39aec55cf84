//! Ticket types for the report desk.
//!
//! Every submitted report becomes a Ticket. Tickets are immutable once
//! created except for `status`, which an external operator advances
//! (Pending Review -> In Progress -> Resolved); this core only assigns
//! the initial state.

use crate::error::VigilError;
use serde::{Deserialize, Serialize};

/// Maximum title length after normalization
pub const TITLE_MAX_CHARS: usize = 140;

/// Issue types offered by the intake UI. Free text is also accepted;
/// validation only requires a non-empty value.
pub const KNOWN_ISSUE_TYPES: &[&str] = &[
    "phishing",
    "strange-login",
    "lost-device",
    "terror-threat",
    "suspicious-individual",
];

/// Ticket status in the report desk workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TicketStatus {
    /// Submitted, not yet looked at
    #[default]
    #[serde(rename = "Pending Review")]
    PendingReview,
    /// Picked up by an operator
    #[serde(rename = "In Progress")]
    InProgress,
    /// Closed out
    #[serde(rename = "Resolved")]
    Resolved,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PendingReview => write!(f, "Pending Review"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Resolved => write!(f, "Resolved"),
        }
    }
}

/// A stored report record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID, assigned by the store at creation
    pub ticket_id: String,
    /// Issue classification (see [`KNOWN_ISSUE_TYPES`]) or free text
    pub issue_type: String,
    /// Short summary, at most [`TITLE_MAX_CHARS`] characters
    pub title: String,
    /// Full description of what was observed
    pub description: String,
    /// Where it happened, if given
    pub location: Option<String>,
    /// Workflow status, `Pending Review` at creation
    pub status: TicketStatus,
    /// RFC 3339 creation timestamp, immutable
    pub created_at: String,
}

/// A report submission before validation and id assignment.
///
/// Doubles as the `POST /api/reports` request body. Every field is
/// defaulted so an absent field reaches [`NewTicket::validate`] as an
/// empty value and comes back as a 400, not a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewTicket {
    pub issue_type: String,
    pub title: String,
    pub description: String,
    pub location: Option<String>,
}

impl NewTicket {
    /// Check required fields are non-empty after trimming
    pub fn validate(&self) -> Result<(), VigilError> {
        if self.issue_type.trim().is_empty() {
            return Err(VigilError::Validation("issue_type".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(VigilError::Validation("title".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(VigilError::Validation("description".to_string()));
        }
        Ok(())
    }
}

impl Ticket {
    /// Build a ticket from a validated submission. Normalizes the
    /// fields (trim, title capped at [`TITLE_MAX_CHARS`]) and stamps
    /// the creation time.
    pub fn new(ticket_id: String, submission: &NewTicket) -> Self {
        Self {
            ticket_id,
            issue_type: submission.issue_type.trim().to_string(),
            title: truncate_chars(submission.title.trim(), TITLE_MAX_CHARS),
            description: submission.description.trim().to_string(),
            location: submission
                .location
                .as_deref()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string),
            status: TicketStatus::PendingReview,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Case-insensitive free-text match over the searchable fields
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.ticket_id.to_lowercase().contains(&needle)
            || self.issue_type.to_lowercase().contains(&needle)
            || self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Char-boundary-safe truncation
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
