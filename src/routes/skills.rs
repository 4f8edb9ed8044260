use axum::extract::State;
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::Skill;

/// GET /skills - the skill catalog, public
pub async fn list_skills(State(state): State<Arc<AppState>>) -> DataResponse<Vec<Skill>> {
    DataResponse::new(state.store.skills())
}
