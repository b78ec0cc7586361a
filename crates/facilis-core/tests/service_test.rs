#![allow(clippy::unwrap_used)]
// Integration tests for `LocationService` using wiremock.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use facilis_api::types::PartialStats;
use facilis_api::{PortalClient, TransportConfig};
use facilis_core::{
    CommonStatus, CoreError, ListSession, LocationKind, LocationService, ZoneParent,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, LocationService) {
    let server = MockServer::start().await;
    let client = PortalClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    let service = LocationService::from_client(Arc::new(client));
    (server, service)
}

fn building_json(id: &str, name: &str, created: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "floorCount": 3,
        "status": "ACTIVE",
        "campus": { "id": "c1", "name": "North Campus" },
        "createdAt": created,
        "updatedAt": created,
    })
}

fn area_json(id: &str, name: &str, created: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "status": "INACTIVE",
        "description": null,
        "zoneType": "TECHNICAL",
        "campus": { "id": "c1", "name": "North Campus" },
        "createdAt": created,
        "updatedAt": created,
    })
}

async fn mount_get(server: &MockServer, endpoint: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

// ── Combined view ───────────────────────────────────────────────────

#[tokio::test]
async fn merged_locations_interleaves_by_created_at() {
    let (server, service) = setup().await;

    mount_get(
        &server,
        "/buildings",
        json!([
            building_json("b1", "Library", "2024-01-10T00:00:00Z"),
            building_json("b2", "Gym", "2024-04-10T00:00:00Z"),
        ]),
    )
    .await;
    mount_get(
        &server,
        "/areas",
        json!([area_json("a1", "East Lawn", "2024-02-10T00:00:00Z")]),
    )
    .await;

    let merged = service.merged_locations().await.unwrap();

    assert_eq!(merged.len(), 3);
    let ids: Vec<&str> = merged.iter().map(|i| i.id()).collect();
    assert_eq!(ids, vec!["b2", "a1", "b1"]);
    assert_eq!(merged[0].kind(), LocationKind::Building);
    assert_eq!(merged[1].kind(), LocationKind::Area);
}

#[tokio::test]
async fn merged_locations_fails_when_either_half_fails() {
    let (server, service) = setup().await;

    mount_get(
        &server,
        "/buildings",
        json!([building_json("b1", "Library", "2024-01-10T00:00:00Z")]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/areas"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .mount(&server)
        .await;

    let result = service.merged_locations().await;
    assert!(
        matches!(result, Err(CoreError::Api { .. })),
        "a half-merged list must not be returned, got: {result:?}"
    );
}

// ── Aggregate statistics ────────────────────────────────────────────

#[tokio::test]
async fn aggregate_stats_sums_both_partials() {
    let (server, service) = setup().await;

    mount_get(
        &server,
        "/buildings-stats",
        json!({ "total": 5, "active": 3, "inactive": 2, "newThisMonth": 1 }),
    )
    .await;
    mount_get(
        &server,
        "/areas-stats",
        json!({ "data": { "data": { "total": 10, "active": 8, "inactive": 2, "newThisMonth": 3 } } }),
    )
    .await;

    let agg = service.aggregate_stats().await;
    assert_eq!(agg.total_all, 15);
    assert_eq!(agg.total_active, 11);
    assert_eq!(agg.total_inactive, 4);
    assert_eq!(agg.total_under_maintenance, 0);
}

#[tokio::test]
async fn aggregate_stats_degrades_failed_half_to_zeros() {
    let (server, service) = setup().await;

    // Buildings endpoint down; areas healthy.
    Mock::given(method("GET"))
        .and(path("/buildings-stats"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    mount_get(
        &server,
        "/areas-stats",
        json!({ "total": 10, "active": 8, "inactive": 2, "newThisMonth": 3 }),
    )
    .await;

    let agg = service.aggregate_stats().await;
    assert_eq!(agg.buildings, PartialStats::default());
    assert_eq!(
        agg.areas,
        PartialStats {
            total: 10,
            active: 8,
            inactive: 2,
            new_this_month: 3
        }
    );
    assert_eq!(agg.total_all, 10);
    assert_eq!(agg.total_active, 8);
    assert_eq!(agg.total_inactive, 2);
    assert_eq!(agg.total_under_maintenance, 0);
}

#[tokio::test]
async fn stats_by_campus_lists_stay_independent() {
    let (server, service) = setup().await;

    mount_get(
        &server,
        "/buildings-stats-by-campus",
        json!([{
            "campusId": "c1",
            "campusName": "North Campus",
            "total": 4,
            "active": 3,
            "inactive": 1,
            "underMaintenance": 0,
        }]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/areas-stats-by-campus"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let breakdown = service.stats_by_campus().await;
    assert_eq!(breakdown.buildings.len(), 1);
    assert!(breakdown.areas.is_empty());
}

// ── Paginated fetches ───────────────────────────────────────────────

#[tokio::test]
async fn fetch_page_sends_session_query_and_applies_response() {
    let (server, service) = setup().await;

    let body = json!({
        "buildings": [building_json("b1", "Library", "2024-01-10T00:00:00Z")],
        "pagination": {
            "currentPage": 2,
            "totalPages": 4,
            "totalItems": 31,
            "itemsPerPage": 10,
        },
    });

    Mock::given(method("GET"))
        .and(path("/buildings"))
        .and(query_param("campus", "c1"))
        .and(query_param("status", "ACTIVE"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let mut session = ListSession::for_kind(LocationKind::Building, 10);
    session.set_campus(Some("c1".into()));
    session.set_status(Some(CommonStatus::Active));
    session.set_page(2);

    let page = service.fetch_page(&mut session).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].floor_count(), Some(3));
    assert_eq!(session.last_response().unwrap().total_items, 31);
    assert_eq!(session.last_response().unwrap().current_page, 2);
}

#[tokio::test]
async fn fetch_page_failure_zeroes_pagination_state() {
    let (server, service) = setup().await;

    Mock::given(method("GET"))
        .and(path("/areas"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut session = ListSession::for_kind(LocationKind::Area, 20);
    session.set_page(5);

    let result = service.fetch_page(&mut session).await;
    assert!(result.is_err());

    let response = session.last_response().unwrap();
    assert_eq!(response.total_items, 0);
    assert_eq!(response.current_page, 1);
    assert_eq!(response.items_per_page, 20);
}

#[tokio::test]
async fn fetch_page_without_kind_merges_both() {
    let (server, service) = setup().await;

    mount_get(
        &server,
        "/buildings",
        json!([building_json("b1", "Library", "2024-03-01T00:00:00Z")]),
    )
    .await;
    mount_get(
        &server,
        "/areas",
        json!([area_json("a1", "East Lawn", "2024-05-01T00:00:00Z")]),
    )
    .await;

    let mut session = ListSession::new(10);
    let page = service.fetch_page(&mut session).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[0].id(), "a1");
    // Unpaginated path reports a single complete page.
    assert_eq!(session.last_response().unwrap().total_pages, 1);
    assert_eq!(session.last_response().unwrap().total_items, 2);
}

// ── Bootstrap ───────────────────────────────────────────────────────

#[tokio::test]
async fn bootstrap_seeds_first_campus_into_session() {
    let (server, service) = setup().await;

    mount_get(
        &server,
        "/campuses",
        json!([
            { "id": "c7", "name": "Riverside" },
            { "id": "c1", "name": "North Campus" },
        ]),
    )
    .await;

    let mut session = ListSession::for_kind(LocationKind::Building, 10);
    let campuses = service.bootstrap(&mut session).await.unwrap();

    assert_eq!(campuses.len(), 2);
    assert_eq!(session.filter().campus.as_deref(), Some("c7"));

    // Clearing filters goes back to the bootstrap default, not empty.
    session.set_campus(Some("c1".into()));
    session.clear_filters();
    assert_eq!(session.filter().campus.as_deref(), Some("c7"));
}

// ── Zones ───────────────────────────────────────────────────────────

#[tokio::test]
async fn zones_for_building_converts_parent() {
    let (server, service) = setup().await;

    mount_get(
        &server,
        "/zones/by-building/b1",
        json!([{
            "id": "z1",
            "name": "Plant Room",
            "description": "Basement plant room",
            "status": "UNDERMAINTENANCE",
            "zoneType": "TECHNICAL",
            "floorLocation": -1,
            "building": { "id": "b1", "name": "Library" },
            "area": null,
        }]),
    )
    .await;

    let zones = service.zones_for_building("b1").await.unwrap();
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].floor(), Some(-1));
    assert!(matches!(
        zones[0].parent,
        ZoneParent::Building { ref id, .. } if id == "b1"
    ));
}

#[tokio::test]
async fn zones_for_unknown_building_maps_to_not_found() {
    let (server, service) = setup().await;

    Mock::given(method("GET"))
        .and(path("/zones/by-building/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "no such building" })))
        .mount(&server)
        .await;

    let result = service.zones_for_building("nope").await;
    assert!(matches!(
        result,
        Err(CoreError::BuildingNotFound { ref identifier }) if identifier == "nope"
    ));
}

#[tokio::test]
async fn zones_with_invalid_parent_shape_fail_conversion() {
    let (server, service) = setup().await;

    mount_get(
        &server,
        "/zones/by-building/b1",
        json!([{
            "id": "z1",
            "name": "Orphan",
            "status": "ACTIVE",
            "zoneType": "SERVICE",
            "building": null,
            "area": null,
        }]),
    )
    .await;

    let result = service.zones_for_building("b1").await;
    assert!(matches!(result, Err(CoreError::InvalidRecord { .. })));
}

// ── Transport failures ──────────────────────────────────────────────

#[tokio::test]
async fn slow_portal_surfaces_timeout_with_url() {
    let server = MockServer::start().await;
    let transport = TransportConfig {
        timeout: Duration::from_millis(100),
    };
    let client = PortalClient::new(&server.uri(), &transport).unwrap();
    let service = LocationService::from_client(Arc::new(client));

    Mock::given(method("GET"))
        .and(path("/campuses"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let err = service.campuses().await.unwrap_err();
    assert!(
        matches!(err, CoreError::Timeout { ref url } if url.contains("campuses")),
        "expected a timeout naming the endpoint, got: {err:?}"
    );
}
