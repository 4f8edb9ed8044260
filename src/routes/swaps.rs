//! Swap request routes
//!
//! Sending, answering, withdrawing and rating swap requests. Only the
//! recipient answers a request, only the requester withdraws or rates it.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::{require_profile, swap_view};
use crate::api::{Created, DataResponse, NoContent};
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::{
    CreateSwapRequest, DeleteSwapQuery, FeedbackRequest, MySwapsResponse, SwapRequest,
    SwapRequestChanges, SwapRequestView, SwapStatus,
};
use crate::error::{ApiError, ApiResult};
use crate::forms::SwapRequestForm;

fn find_request(state: &AppState, id: Uuid) -> ApiResult<SwapRequest> {
    state
        .store
        .swap_request(id)
        .ok_or_else(|| ApiError::not_found("Swap request not found"))
}

/// POST /swaps
pub async fn create_swap_request(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    Json(req): Json<CreateSwapRequest>,
) -> ApiResult<Created<DataResponse<SwapRequestView>>> {
    let requester = state.store.profile_by_user_id(auth.user_id);
    let recipient = state.store.profile(req.recipient_profile_id);

    let new = SwapRequestForm::from(req).validate(requester.as_ref(), recipient.as_ref())?;
    let request = state.store.create_swap_request(new)?;

    tracing::info!(
        swap_request_id = %request.id,
        user_id = %auth.user_id,
        "Swap request sent"
    );

    Ok(Created(DataResponse::new(swap_view(
        &state,
        &request,
        request.requester_profile_id,
    ))))
}

/// GET /swaps
///
/// The caller's sent and received requests with the actions available on each.
pub async fn list_my_swaps(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
) -> ApiResult<DataResponse<MySwapsResponse>> {
    let profile = require_profile(&state, &auth)?;
    let partition = state.store.partition_for(profile.id);

    let to_views = |requests: &[SwapRequest]| -> Vec<SwapRequestView> {
        requests
            .iter()
            .map(|r| swap_view(&state, r, profile.id))
            .collect()
    };

    Ok(DataResponse::new(MySwapsResponse {
        sent: to_views(&partition.sent),
        received: to_views(&partition.received),
        summary: partition.summary(),
    }))
}

/// GET /swaps/:id
pub async fn get_swap_request(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    auth: RequireAuth,
) -> ApiResult<DataResponse<SwapRequestView>> {
    let profile = require_profile(&state, &auth)?;
    let request = find_request(&state, id)?;

    if !request.involves(profile.id) {
        return Err(ApiError::forbidden(
            "You are not part of this swap request",
        ));
    }

    Ok(DataResponse::new(swap_view(&state, &request, profile.id)))
}

/// Move a received pending request to `status`
fn answer(
    state: &AppState,
    auth: &RequireAuth,
    id: Uuid,
    status: SwapStatus,
) -> ApiResult<DataResponse<SwapRequestView>> {
    let profile = require_profile(state, auth)?;
    let request = find_request(state, id)?;

    if request.recipient_profile_id != profile.id {
        return Err(ApiError::forbidden(
            "Only the recipient can answer this swap request",
        ));
    }
    if !request.status.is_pending() {
        return Err(ApiError::conflict(format!(
            "This swap request was already {}",
            request.status.to_string().to_lowercase()
        )));
    }

    let updated = state
        .store
        .update_swap_request(id, SwapRequestChanges::status(status))?
        .ok_or_else(|| ApiError::not_found("Swap request not found"))?;

    Ok(DataResponse::new(swap_view(state, &updated, profile.id)))
}

/// POST /swaps/:id/accept
pub async fn accept_swap_request(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    auth: RequireAuth,
) -> ApiResult<DataResponse<SwapRequestView>> {
    answer(&state, &auth, id, SwapStatus::Accepted)
}

/// POST /swaps/:id/reject
pub async fn reject_swap_request(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    auth: RequireAuth,
) -> ApiResult<DataResponse<SwapRequestView>> {
    answer(&state, &auth, id, SwapStatus::Rejected)
}

/// DELETE /swaps/:id?confirm=true
///
/// Withdraw a pending request you sent.
pub async fn delete_swap_request(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<DeleteSwapQuery>,
    auth: RequireAuth,
) -> ApiResult<NoContent> {
    if !query.confirm {
        return Err(ApiError::bad_request(
            "Deleting a swap request must be confirmed with confirm=true",
        ));
    }

    let profile = require_profile(&state, &auth)?;
    let request = find_request(&state, id)?;

    if request.requester_profile_id != profile.id {
        return Err(ApiError::forbidden(
            "Only the requester can delete this swap request",
        ));
    }

    state
        .store
        .delete_pending_swap_request(id)?
        .ok_or_else(|| ApiError::not_found("Swap request not found"))?;

    Ok(NoContent)
}

/// POST /swaps/:id/feedback
pub async fn leave_feedback(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    auth: RequireAuth,
    Json(req): Json<FeedbackRequest>,
) -> ApiResult<DataResponse<SwapRequestView>> {
    if !(1..=5).contains(&req.rating) {
        return Err(ApiError::bad_request("Rating must be between 1 and 5"));
    }

    let profile = require_profile(&state, &auth)?;
    let request = find_request(&state, id)?;

    if request.requester_profile_id != profile.id {
        return Err(ApiError::forbidden(
            "Only the requester can leave feedback on this swap",
        ));
    }
    if request.status != SwapStatus::Accepted {
        return Err(ApiError::conflict(
            "Feedback can only be left on accepted swaps",
        ));
    }

    let changes = SwapRequestChanges {
        status: None,
        feedback: req
            .feedback
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty()),
        rating: Some(req.rating),
    };

    let updated = state
        .store
        .update_swap_request(id, changes)?
        .ok_or_else(|| ApiError::not_found("Swap request not found"))?;

    Ok(DataResponse::new(swap_view(&state, &updated, profile.id)))
}
