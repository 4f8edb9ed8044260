//! Authentication routes
//!
//! Login is mocked by the in-process session registry.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::{DataResponse, MessageResponse};
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::auth::{AuthResponse, SignInRequest};
use crate::error::ApiResult;

/// POST /auth/login
///
/// Any non-empty email/password pair signs in.
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignInRequest>,
) -> ApiResult<DataResponse<AuthResponse>> {
    let response = state.sessions.login(&req.email, &req.password)?;
    Ok(DataResponse::new(response))
}

/// POST /auth/logout
pub async fn sign_out(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
) -> MessageResponse {
    state.sessions.logout(auth.token());
    tracing::info!(user_id = %auth.user_id, "User logged out");

    MessageResponse::new("Signed out")
}
