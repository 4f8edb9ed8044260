//! Swap request domain types
//!
//! A swap request proposes exchanging one of the requester's offered skills
//! for one the recipient offers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::profiles::ProfileSummary;
use super::skills::SkillTag;

/// Swap request status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SwapStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl SwapStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Accepted and Rejected are terminal
    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    /// Only Pending may move, and only to Accepted or Rejected.
    /// Re-applying the current status is not a transition.
    pub fn can_transition_to(&self, next: SwapStatus) -> bool {
        *self == next || (self.is_pending() && next.is_terminal())
    }
}

impl std::fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Accepted => write!(f, "Accepted"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Swap request entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwapRequest {
    pub id: Uuid,
    pub requester_profile_id: Uuid,
    pub recipient_profile_id: Uuid,
    pub skill_offered: String,
    pub skill_wanted: String,
    pub message: String,
    pub status: SwapStatus,
    pub feedback: Option<String>,
    pub rating: Option<u8>,
    pub created_at: DateTime<Utc>,
}

impl SwapRequest {
    pub fn involves(&self, profile_id: Uuid) -> bool {
        self.requester_profile_id == profile_id || self.recipient_profile_id == profile_id
    }
}

/// Everything needed to create a swap request; id, timestamp and status are store-assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSwapRequest {
    pub requester_profile_id: Uuid,
    pub recipient_profile_id: Uuid,
    pub skill_offered: String,
    pub skill_wanted: String,
    pub message: String,
}

/// Partial swap request changes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwapRequestChanges {
    pub status: Option<SwapStatus>,
    pub feedback: Option<String>,
    pub rating: Option<u8>,
}

impl SwapRequestChanges {
    pub fn status(status: SwapStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// Request DTO for the swap request form
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSwapRequest {
    pub recipient_profile_id: Uuid,
    #[serde(default)]
    pub skill_offered: String,
    #[serde(default)]
    pub skill_wanted: String,
    #[serde(default)]
    pub message: String,
}

/// Request DTO for leaving feedback on an accepted swap
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    pub rating: u8,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Query params for deleting a sent request
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DeleteSwapQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// What the viewer may do with a request
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SwapAction {
    Accept,
    Reject,
    Delete,
}

/// Response DTO for a swap request, as seen by one of its parties
#[derive(Debug, Clone, Serialize)]
pub struct SwapRequestView {
    pub id: Uuid,
    pub requester: Option<ProfileSummary>,
    pub recipient: Option<ProfileSummary>,
    pub requester_profile_id: Uuid,
    pub recipient_profile_id: Uuid,
    pub skill_offered: SkillTag,
    pub skill_wanted: SkillTag,
    pub message: String,
    pub status: SwapStatus,
    pub feedback: Option<String>,
    pub rating: Option<u8>,
    pub created_at: DateTime<Utc>,
    pub actions: Vec<SwapAction>,
}

/// Counts shown above the sent/received lists
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SwapSummary {
    pub sent: usize,
    pub received: usize,
    pub accepted: usize,
    pub pending: usize,
}

/// Response DTO for the "my swaps" inbox
#[derive(Debug, Clone, Serialize)]
pub struct MySwapsResponse {
    pub sent: Vec<SwapRequestView>,
    pub received: Vec<SwapRequestView>,
    pub summary: SwapSummary,
}
