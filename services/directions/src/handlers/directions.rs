use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use service_common::error::AppError;
use types::route::RouteQuote;

pub async fn get_directions(
    State(state): State<AppState>,
    Path((origin, destination)): Path<(String, String)>,
) -> Result<Json<RouteQuote>, AppError> {
    tracing::info!(%origin, %destination, "Finding distance");
    let quote = state.provider.route(&origin, &destination).await?;
    Ok(Json(quote))
}
