use crate::handlers::drivers;
use crate::state::AppState;
use axum::{routing::get, Router};
use service_common::server::with_http_layers;

pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route(
            "/roster",
            get(drivers::list_drivers)
                .post(drivers::join_roster)
                .put(drivers::change_rate)
                .delete(drivers::leave_roster),
        )
        .route("/roster/cheapest", get(drivers::cheapest_driver))
        .with_state(state);

    with_http_layers(routes)
}
