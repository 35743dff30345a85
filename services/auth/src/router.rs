use crate::handlers::{login, validate};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use service_common::server::with_http_layers;

pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/login", post(login::login))
        .route("/validate/{token}", get(validate::validate_token))
        .with_state(state);

    with_http_layers(routes)
}
