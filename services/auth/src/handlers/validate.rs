use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use service_common::error::AppError;
use types::identity::Identity;

pub async fn validate_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<Identity>, AppError> {
    let identity = state.tokens.validate(&token)?;

    tracing::info!(username = %identity.username, "Token validated");
    Ok(Json(identity))
}
