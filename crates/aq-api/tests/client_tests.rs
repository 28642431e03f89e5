//! Integration tests for the HTTP client against a mock metrics API

use std::collections::HashMap;
use std::net::SocketAddr;

use aq_api::{fetch_snapshot, AirQualityApi, HttpApi};
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock api");
    });
    addr
}

fn daily_routes() -> Router {
    Router::new().route(
        "/api/historical/daily",
        get(|Query(q): Query<HashMap<String, String>>| async move {
            let city = q.get("city").cloned().unwrap_or_default();
            Json(json!({
                "data": [
                    {
                        "date": "2024-01-05",
                        "main.aqi": 2.0,
                        "components.pm2_5": 12.0,
                        "components.pm10": 25.0,
                        "components.o3": 40.0,
                        "components.no2": 6.0,
                        "components.so2": 3.0,
                        "city_name": city,
                    },
                    {
                        "date": "2024-02-10",
                        "main.aqi": 3.0,
                        "city_name": city,
                    }
                ],
                "timezone": "Asia/Manila"
            }))
        }),
    )
}

fn full_api() -> Router {
    daily_routes()
        .route(
            "/api/cities",
            get(|| async { Json(json!(["Manila", "Cebu"])) }),
        )
        .route(
            "/api/predictions",
            get(|| async {
                Json(json!([
                    {"datetime": "2024-03-01T00:00:00+08:00", "predicted_aqi": 2.4},
                    {"datetime": "2024-03-02T00:00:00+08:00", "predicted_aqi": 2.6}
                ]))
            }),
        )
        .route(
            "/api/pollutants",
            get(|| async { Json(json!({"SO2": 4.0, "PM2_5": 15.0, "O3": 38.5})) }),
        )
        .route(
            "/api/health-risk",
            get(|| async {
                Json(json!({
                    "level": "Moderate",
                    "color": "yellow",
                    "description": "Air quality is acceptable."
                }))
            }),
        )
        .route(
            "/api/metrics",
            get(|| async {
                Json(json!({
                    "average_aqi": 2.3,
                    "primary_pollutant": "PM2_5",
                    "trend": "Improving"
                }))
            }),
        )
        .route(
            "/api/heatmap",
            get(|| async {
                Json(json!([
                    {"lat": 14.6, "lon": 121.0, "avg_aqi": 2.1, "city_name": "Manila", "data_points": 365}
                ]))
            }),
        )
}

#[tokio::test]
async fn snapshot_happy_path() {
    let addr = serve(full_api()).await;
    let api = HttpApi::new(&format!("http://{addr}/api")).unwrap();

    let snapshot = fetch_snapshot(&api, "all").await.unwrap();

    assert_eq!(snapshot.records.len(), 2);
    assert_eq!(snapshot.records[0].city_name, "all");
    assert_eq!(snapshot.records[0].aqi, 2.0);
    assert_eq!(snapshot.records[0].components.pm2_5, Some(12.0));
    assert!(snapshot.records[0].datetime.is_some());

    assert_eq!(snapshot.predictions.len(), 2);
    assert_eq!(snapshot.predictions[0].aqi, 2.4);

    let names: Vec<&str> = snapshot.pollutants.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["O3", "PM2_5", "SO2"]);

    assert_eq!(snapshot.health_risk.level, "Moderate");
    assert_eq!(snapshot.health_risk.css_class, "bg-yellow-500");
    assert_eq!(snapshot.metrics.primary_pollutant, "PM2_5");
    assert_eq!(snapshot.heatmap.len(), 1);
    assert_eq!(snapshot.heatmap[0].data_points, 365);
}

#[tokio::test]
async fn cities_endpoint() {
    let addr = serve(full_api()).await;
    let api = HttpApi::new(&format!("http://{addr}/api")).unwrap();

    let cities = api.cities().await.unwrap();
    assert_eq!(cities, vec!["Manila", "Cebu"]);
}

#[tokio::test]
async fn city_query_parameter_is_forwarded() {
    let addr = serve(full_api()).await;
    let api = HttpApi::new(&format!("http://{addr}/api")).unwrap();

    let records = api.historical_daily("Quezon City").await.unwrap();
    // The mock echoes the received city parameter back into city_name
    assert_eq!(records[0].city_name, "Quezon City");
}

#[tokio::test]
async fn failed_endpoint_names_the_resource() {
    let app = Router::new()
        .merge(daily_routes())
        .route(
            "/api/predictions",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route(
            "/api/pollutants",
            get(|| async { Json(json!({"PM2_5": 15.0})) }),
        )
        .route(
            "/api/health-risk",
            get(|| async { Json(json!({"level": "Good", "color": "green", "description": "ok"})) }),
        )
        .route("/api/metrics", get(|| async { Json(json!({})) }))
        .route("/api/heatmap", get(|| async { Json(json!([])) }));
    let addr = serve(app).await;
    let api = HttpApi::new(&format!("http://{addr}/api")).unwrap();

    let err = fetch_snapshot(&api, "all").await.unwrap_err();
    assert!(err.to_string().contains("predictions"), "{err}");
    assert_eq!(err.resource(), Some("predictions"));
}

#[tokio::test]
async fn heatmap_failure_degrades_to_empty() {
    let app = Router::new()
        .merge(daily_routes())
        .route(
            "/api/predictions",
            get(|| async { Json(json!([])) }),
        )
        .route(
            "/api/pollutants",
            get(|| async { Json(json!({"PM2_5": 15.0})) }),
        )
        .route(
            "/api/health-risk",
            get(|| async { Json(json!({"level": "Good", "color": "green", "description": "ok"})) }),
        )
        .route(
            "/api/metrics",
            get(|| async { Json(json!({"average_aqi": 1.0})) }),
        )
        .route(
            "/api/heatmap",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let addr = serve(app).await;
    let api = HttpApi::new(&format!("http://{addr}/api")).unwrap();

    let snapshot = fetch_snapshot(&api, "all").await.unwrap();
    assert!(snapshot.heatmap.is_empty());
    assert_eq!(snapshot.records.len(), 2);
    // Metrics fields absent from the body degrade to defaults
    assert_eq!(snapshot.metrics.primary_pollutant, "");
}
