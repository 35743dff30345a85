//! HTTP surface of the journey service

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use common::{drivers, FixedRoster, FixedRoute};
use journey_service::planner::JourneyPlanner;
use journey_service::router::create_router;
use journey_service::state::AppState;
use pricing_engine::PricingEngine;
use serde_json::{json, Value};
use service_common::clock::ManualClock;
use std::sync::Arc;
use tower::ServiceExt;
use types::errors::FareError;

fn app(route: FixedRoute, roster: FixedRoster) -> Router {
    let planner = JourneyPlanner::new(
        Arc::new(route),
        Arc::new(roster),
        PricingEngine::new(),
        Arc::new(ManualClock::at_hour(2)),
    );
    create_router(AppState::new(planner))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_journey_wire_shape() {
    let app = app(FixedRoute(Ok((10_400, 8_000))), FixedRoster(Ok(drivers(6, 4))));

    let (status, body) = get(app, "/journey/Exeter/Crediton").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "origin": "Exeter",
            "destination": "Crediton",
            "totalDistance": 10400,
            "aRoadDistance": 8000,
            "driver": {"username": "driver0", "name": "Driver driver0", "rate": 4},
            "baseCost": 40,
            "surcharges": ["ARTERIAL_ROUTE", "NIGHT_TIME"],
            "cost": 160
        })
    );
}

#[tokio::test]
async fn test_empty_roster_is_not_found() {
    let app = app(FixedRoute(Ok((10_000, 0))), FixedRoster(Ok(vec![])));
    let (status, body) = get(app, "/journey/Exeter/Crediton").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "No drivers available"}));
}

#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let app = app(
        FixedRoute(Err(FareError::upstream("directions", "connection refused"))),
        FixedRoster(Ok(drivers(5, 1))),
    );
    let (status, body) = get(app, "/journey/Exeter/Crediton").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        body,
        json!({"error": "directions service unavailable: connection refused"})
    );
}
