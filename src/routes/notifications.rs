//! Notification routes
//!
//! Inboxes are filled in the background from store events; these endpoints
//! only read them and flip read flags.

use axum::extract::{Query, State};
use std::sync::Arc;

use super::require_profile;
use crate::api::{DataResponse, MessageResponse};
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::notifications::{Notification, NotificationQuery, UnreadCountResponse};
use crate::error::ApiResult;

/// GET /notifications
///
/// Newest first. `unread_only=true` hides notifications already read.
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NotificationQuery>,
    auth: RequireAuth,
) -> ApiResult<DataResponse<Vec<Notification>>> {
    let profile = require_profile(&state, &auth)?;
    let unread_only = query.unread_only.unwrap_or(false);

    Ok(DataResponse::new(
        state.notifications.list(profile.id, unread_only),
    ))
}

/// GET /notifications/unread-count
pub async fn get_unread_count(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
) -> ApiResult<DataResponse<UnreadCountResponse>> {
    let profile = require_profile(&state, &auth)?;

    Ok(DataResponse::new(UnreadCountResponse {
        count: state.notifications.unread_count(profile.id),
    }))
}

/// POST /notifications/read
pub async fn mark_all_read(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
) -> ApiResult<MessageResponse> {
    let profile = require_profile(&state, &auth)?;
    let changed = state.notifications.mark_all_read(profile.id);

    tracing::debug!(profile_id = %profile.id, changed, "Notifications marked read");

    Ok(MessageResponse::new(format!(
        "Marked {} notifications as read",
        changed
    )))
}
