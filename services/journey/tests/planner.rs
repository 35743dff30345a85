//! Journey composition over fake sources

mod common;

use common::{driver, drivers, FixedRoster, FixedRoute};
use journey_service::planner::JourneyPlanner;
use pricing_engine::PricingEngine;
use service_common::clock::ManualClock;
use std::sync::Arc;
use types::errors::FareError;
use types::fare::Surcharge;

fn planner(route: FixedRoute, roster: FixedRoster, hour: u32) -> JourneyPlanner {
    JourneyPlanner::new(
        Arc::new(route),
        Arc::new(roster),
        PricingEngine::new(),
        Arc::new(ManualClock::at_hour(hour)),
    )
}

#[tokio::test]
async fn test_plain_daytime_journey() {
    let planner = planner(
        FixedRoute(Ok((12_500, 2_000))),
        FixedRoster(Ok(drivers(5, 3))),
        12,
    );

    let journey = planner.get_journey("Exeter", "Crediton").await.unwrap();

    assert_eq!(journey.origin, "Exeter");
    assert_eq!(journey.destination, "Crediton");
    assert_eq!(journey.driver.username.as_str(), "driver0");
    assert_eq!(journey.base_cost, 36);
    assert!(journey.surcharges.is_empty());
    assert_eq!(journey.cost, 36);
}

#[tokio::test]
async fn test_every_surcharge_applies_at_night() {
    let planner = planner(
        FixedRoute(Ok((20_000, 15_000))),
        FixedRoster(Ok(vec![driver("sebvet", 5), driver("babydriver", 10)])),
        23,
    );

    let journey = planner.get_journey("Bristol", "Bath").await.unwrap();

    assert_eq!(journey.driver.username.as_str(), "sebvet");
    assert_eq!(journey.base_cost, 100);
    assert_eq!(
        journey.surcharges,
        vec![Surcharge::ArterialRoute, Surcharge::ThinRoster, Surcharge::NightTime]
    );
    assert_eq!(journey.cost, 800);
}

#[tokio::test]
async fn test_empty_roster_has_no_driver() {
    let planner = planner(FixedRoute(Ok((10_000, 0))), FixedRoster(Ok(vec![])), 12);
    assert_eq!(
        planner.get_journey("Exeter", "Crediton").await,
        Err(FareError::NoDriversAvailable)
    );
}

#[tokio::test]
async fn test_route_failure_short_circuits() {
    let planner = planner(
        FixedRoute(Err(FareError::upstream("directions", "connection refused"))),
        FixedRoster(Ok(drivers(5, 1))),
        12,
    );
    assert_eq!(
        planner.get_journey("Exeter", "Crediton").await,
        Err(FareError::upstream("directions", "connection refused"))
    );
}

#[tokio::test]
async fn test_roster_failure_short_circuits() {
    let planner = planner(
        FixedRoute(Ok((10_000, 0))),
        FixedRoster(Err(FareError::upstream("roster", "timed out"))),
        12,
    );
    assert!(matches!(
        planner.get_journey("Exeter", "Crediton").await,
        Err(FareError::UpstreamUnavailable { service, .. }) if service == "roster"
    ));
}
