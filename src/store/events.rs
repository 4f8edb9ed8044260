//! Store mutation events

use crate::domain::{Profile, SwapRequest, SwapStatus};

/// One applied mutation, carrying the entity as it was right after the change
#[derive(Debug, Clone)]
pub enum StoreEvent {
    ProfileCreated {
        profile: Profile,
    },
    ProfileUpdated {
        profile: Profile,
    },
    SwapRequested {
        request: SwapRequest,
    },
    SwapStatusChanged {
        request: SwapRequest,
        previous: SwapStatus,
    },
    SwapFeedbackLeft {
        request: SwapRequest,
    },
    /// Carries the request as it was when removed
    SwapDeleted {
        request: SwapRequest,
    },
}

impl StoreEvent {
    /// Stable name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ProfileCreated { .. } => "profile_created",
            Self::ProfileUpdated { .. } => "profile_updated",
            Self::SwapRequested { .. } => "swap_requested",
            Self::SwapStatusChanged { .. } => "swap_status_changed",
            Self::SwapFeedbackLeft { .. } => "swap_feedback_left",
            Self::SwapDeleted { .. } => "swap_deleted",
        }
    }
}
