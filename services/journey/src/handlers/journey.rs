use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use service_common::error::AppError;
use types::fare::Journey;

pub async fn get_journey(
    State(state): State<AppState>,
    Path((origin, destination)): Path<(String, String)>,
) -> Result<Json<Journey>, AppError> {
    let journey = state.planner.get_journey(&origin, &destination).await?;
    Ok(Json(journey))
}
