use crate::models::{LoginForm, TokenResponse};
use crate::state::AppState;
use crate::token::TokenError;
use axum::{
    extract::{rejection::FormRejection, State},
    Form, Json,
};
use service_common::error::AppError;

pub async fn login(
    State(state): State<AppState>,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Json<TokenResponse>, AppError> {
    let Form(form) = form?;

    // Argon2 verification is CPU bound
    let tokens = state.tokens.clone();
    let issued = tokio::task::spawn_blocking(move || tokens.issue(&form.username, &form.password))
        .await
        .map_err(|err| AppError::InternalError(err.into()))?
        .map_err(|err| match err {
            TokenError::Rejected(fare) => AppError::Fare(fare),
            TokenError::Signing(err) => AppError::InternalError(err.into()),
        })?;

    Ok(Json(TokenResponse {
        token: issued.token,
    }))
}
