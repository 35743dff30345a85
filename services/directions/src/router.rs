use crate::handlers::directions;
use crate::state::AppState;
use axum::{routing::get, Router};
use service_common::server::with_http_layers;

pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/directions/{from}/{to}", get(directions::get_directions))
        .with_state(state);

    with_http_layers(routes)
}
