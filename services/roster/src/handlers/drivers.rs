use crate::models::{LeaveRequest, RateRequest};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use service_common::error::AppError;
use types::driver::Driver;

pub async fn join_roster(
    State(state): State<AppState>,
    payload: Result<Json<RateRequest>, JsonRejection>,
) -> Result<Json<Driver>, AppError> {
    let Json(request) = payload?;
    let driver = state.roster.join(&request.token, request.rate).await?;
    Ok(Json(driver))
}

pub async fn leave_roster(
    State(state): State<AppState>,
    payload: Result<Json<LeaveRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = payload?;
    state.roster.leave(&request.token).await?;
    Ok(StatusCode::OK)
}

pub async fn change_rate(
    State(state): State<AppState>,
    payload: Result<Json<RateRequest>, JsonRejection>,
) -> Result<Json<Driver>, AppError> {
    let Json(request) = payload?;
    let driver = state.roster.update_rate(&request.token, request.rate).await?;
    Ok(Json(driver))
}

pub async fn list_drivers(State(state): State<AppState>) -> Json<Vec<Driver>> {
    Json(state.roster.list())
}

pub async fn cheapest_driver(State(state): State<AppState>) -> Result<Json<Driver>, AppError> {
    Ok(Json(state.roster.cheapest()?))
}
