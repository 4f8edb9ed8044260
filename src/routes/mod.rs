pub mod auth;
pub mod health;
pub mod me;
pub mod notifications;
pub mod profiles;
pub mod skills;
pub mod swaps;

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::{Profile, ProfileResponse, ProfileSummary, SkillTag, SwapRequest, SwapRequestView};
use crate::error::{ApiError, ApiResult};
use crate::store::query::available_actions;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Public routes
        .route("/health", get(health::health_check))
        .route("/skills", get(skills::list_skills))
        .route("/auth/login", post(auth::sign_in))
        // Protected routes
        .route("/auth/logout", post(auth::sign_out))
        .route("/me", get(me::get_me))
        // Profiles
        .route("/profiles", get(profiles::list_profiles))
        .route(
            "/profiles/me",
            get(profiles::get_my_profile)
                .put(profiles::save_my_profile)
                .patch(profiles::update_my_profile),
        )
        .route("/profiles/me/skills/toggle", post(profiles::toggle_skill))
        .route("/profiles/me/projects", post(profiles::add_project))
        .route(
            "/profiles/me/projects/:index",
            delete(profiles::remove_project),
        )
        .route("/profiles/me/events", post(profiles::add_event))
        .route("/profiles/me/events/:index", delete(profiles::remove_event))
        .route("/profiles/:id", get(profiles::get_profile))
        // Swap requests
        .route(
            "/swaps",
            post(swaps::create_swap_request).get(swaps::list_my_swaps),
        )
        .route(
            "/swaps/:id",
            get(swaps::get_swap_request).delete(swaps::delete_swap_request),
        )
        .route("/swaps/:id/accept", post(swaps::accept_swap_request))
        .route("/swaps/:id/reject", post(swaps::reject_swap_request))
        .route("/swaps/:id/feedback", post(swaps::leave_feedback))
        // Notifications
        .route("/notifications", get(notifications::list_notifications))
        .route(
            "/notifications/unread-count",
            get(notifications::get_unread_count),
        )
        .route("/notifications/read", post(notifications::mark_all_read))
}

/// The caller's profile, or 412 when they have not created one yet
pub(crate) fn require_profile(state: &AppState, auth: &RequireAuth) -> ApiResult<Profile> {
    state
        .store
        .profile_by_user_id(auth.user_id)
        .ok_or_else(ApiError::profile_required)
}

pub(crate) fn profile_response(state: &AppState, profile: Profile) -> ProfileResponse {
    ProfileResponse::with_icons(profile, |name| state.store.skill_icon(name))
}

/// A swap request as `viewer_profile_id` sees it
pub(crate) fn swap_view(
    state: &AppState,
    request: &SwapRequest,
    viewer_profile_id: Uuid,
) -> SwapRequestView {
    let summary = |id: Uuid| state.store.profile(id).as_ref().map(ProfileSummary::from);
    let tag = |name: &str| SkillTag {
        name: name.to_string(),
        icon: state.store.skill_icon(name),
    };

    SwapRequestView {
        id: request.id,
        requester: summary(request.requester_profile_id),
        recipient: summary(request.recipient_profile_id),
        requester_profile_id: request.requester_profile_id,
        recipient_profile_id: request.recipient_profile_id,
        skill_offered: tag(&request.skill_offered),
        skill_wanted: tag(&request.skill_wanted),
        message: request.message.clone(),
        status: request.status,
        feedback: request.feedback.clone(),
        rating: request.rating,
        created_at: request.created_at,
        actions: available_actions(request, viewer_profile_id),
    }
}
