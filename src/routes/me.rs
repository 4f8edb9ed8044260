use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::auth::User;

#[derive(Serialize)]
pub struct MeResponse {
    pub user: User,
    /// The signed-in user's profile id, once they have created one
    pub profile_id: Option<Uuid>,
    pub unread_notifications: usize,
    /// Received requests still waiting for an answer
    pub pending_requests: usize,
}

/// Get current authenticated user info
pub async fn get_me(State(state): State<Arc<AppState>>, auth: RequireAuth) -> Json<MeResponse> {
    let profile_id = state.store.profile_by_user_id(auth.user_id).map(|p| p.id);
    let (unread_notifications, pending_requests) = match profile_id {
        Some(id) => (
            state.notifications.unread_count(id),
            state.store.partition_for(id).pending_received().count(),
        ),
        None => (0, 0),
    };

    Json(MeResponse {
        user: auth.user(),
        profile_id,
        unread_notifications,
        pending_requests,
    })
}
