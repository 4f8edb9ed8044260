//! Profile routes
//!
//! Browsing other people's profiles and editing your own. Every edit goes
//! through a [`ProfileDraft`] so the same normalization applies whether the
//! whole form is saved or a single list entry changes.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{profile_response, require_profile};
use crate::api::{Created, DataResponse, Paginated, PaginationParams};
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::{
    BrowseQuery, ListEntryRequest, Profile, ProfileChanges, ProfileResponse, SaveProfileRequest,
    ToggleSkillRequest, UpdateProfileRequest,
};
use crate::error::{ApiError, ApiResult};
use crate::forms::ProfileDraft;

/// GET /profiles
///
/// Public profiles other than the caller's, optionally narrowed by `search`.
pub async fn list_profiles(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BrowseQuery>,
    auth: RequireAuth,
) -> Paginated<ProfileResponse> {
    let search = query.search.unwrap_or_default();
    let params = PaginationParams::new(query.page, query.per_page);

    let profiles: Vec<ProfileResponse> = state
        .store
        .browse(&search, auth.user_id)
        .into_iter()
        .map(|p| profile_response(&state, p))
        .collect();

    tracing::debug!(
        user_id = %auth.user_id,
        matches = profiles.len(),
        "Browsed profiles"
    );

    Paginated::from_items(profiles, &params)
}

/// GET /profiles/:id
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    auth: RequireAuth,
) -> ApiResult<DataResponse<ProfileResponse>> {
    let profile = state
        .store
        .profile(id)
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    if !profile.is_visible_to(auth.user_id) {
        return Err(ApiError::forbidden("This profile is private"));
    }

    Ok(DataResponse::new(profile_response(&state, profile)))
}

/// GET /profiles/me
pub async fn get_my_profile(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
) -> ApiResult<DataResponse<ProfileResponse>> {
    let profile = state
        .store
        .profile_by_user_id(auth.user_id)
        .ok_or_else(|| ApiError::not_found("You have not created a profile yet"))?;

    Ok(DataResponse::new(profile_response(&state, profile)))
}

/// PUT /profiles/me
///
/// Save the whole edit form. Creates the profile on first save (201).
pub async fn save_my_profile(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    Json(req): Json<SaveProfileRequest>,
) -> ApiResult<Response> {
    let existing = state.store.profile_by_user_id(auth.user_id);
    let draft = ProfileDraft::from_request(req, existing.as_ref());
    if draft.name.is_empty() {
        return Err(ApiError::bad_request("Name is required"));
    }

    let profile = draft.save(&state.store, auth.user_id)?;
    let body = DataResponse::new(profile_response(&state, profile));

    Ok(match existing {
        Some(_) => body.into_response(),
        None => Created(body).into_response(),
    })
}

/// PATCH /profiles/me
pub async fn update_my_profile(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<DataResponse<ProfileResponse>> {
    let profile = require_profile(&state, &auth)?;

    let changes = ProfileChanges::from(req);
    if changes.name.as_deref() == Some("") {
        return Err(ApiError::bad_request("Name is required"));
    }
    if changes.is_empty() {
        return Ok(DataResponse::new(profile_response(&state, profile)));
    }

    let updated = state
        .store
        .update_profile(profile.id, changes)
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    Ok(DataResponse::new(profile_response(&state, updated)))
}

/// Load the caller's profile into a draft, apply `edit`, and save when it changed anything
fn edit_my_profile(
    state: &AppState,
    auth: &RequireAuth,
    edit: impl FnOnce(&mut ProfileDraft) -> ApiResult<bool>,
) -> ApiResult<DataResponse<ProfileResponse>> {
    let profile = require_profile(state, auth)?;
    let mut draft = ProfileDraft::from_profile(&profile);

    let saved: Profile = if edit(&mut draft)? {
        draft.save(&state.store, auth.user_id)?
    } else {
        profile
    };

    Ok(DataResponse::new(profile_response(state, saved)))
}

/// POST /profiles/me/skills/toggle
pub async fn toggle_skill(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    Json(req): Json<ToggleSkillRequest>,
) -> ApiResult<DataResponse<ProfileResponse>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("Skill name is required"));
    }

    edit_my_profile(&state, &auth, |draft| {
        let selected = draft.toggle_skill(req.side, &req.name);
        tracing::debug!(side = ?req.side, skill = %req.name.trim(), selected, "Skill toggled");
        Ok(true)
    })
}

/// POST /profiles/me/projects
pub async fn add_project(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    Json(req): Json<ListEntryRequest>,
) -> ApiResult<DataResponse<ProfileResponse>> {
    edit_my_profile(&state, &auth, |draft| {
        if draft.add_project(&req.text) {
            Ok(true)
        } else {
            Err(ApiError::bad_request("Project cannot be empty"))
        }
    })
}

/// DELETE /profiles/me/projects/:index
///
/// An index past the end leaves the profile as it is.
pub async fn remove_project(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
    auth: RequireAuth,
) -> ApiResult<DataResponse<ProfileResponse>> {
    edit_my_profile(&state, &auth, |draft| {
        Ok(draft.remove_project(index).is_some())
    })
}

/// POST /profiles/me/events
pub async fn add_event(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    Json(req): Json<ListEntryRequest>,
) -> ApiResult<DataResponse<ProfileResponse>> {
    edit_my_profile(&state, &auth, |draft| {
        if draft.add_event(&req.text) {
            Ok(true)
        } else {
            Err(ApiError::bad_request("Event cannot be empty"))
        }
    })
}

/// DELETE /profiles/me/events/:index
pub async fn remove_event(
    State(state): State<Arc<AppState>>,
    Path(index): Path<usize>,
    auth: RequireAuth,
) -> ApiResult<DataResponse<ProfileResponse>> {
    edit_my_profile(&state, &auth, |draft| Ok(draft.remove_event(index).is_some()))
}
