use std::time::Duration;

use pretty_assertions::assert_eq;
use pricer_engine::{
    ApiError, ClientSettings, CompStatus, EstimateApi, EstimateRequest, ReqwestEstimateClient,
};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestEstimateClient {
    ReqwestEstimateClient::new(ClientSettings {
        api_base: server.uri(),
        ..ClientSettings::default()
    })
}

fn sample_request() -> EstimateRequest {
    EstimateRequest {
        file_name: "clock.jpg".to_string(),
        mime_type: "image/jpeg".to_string(),
        bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
        category: "furniture".to_string(),
        notes: "brass inlay, 1890s".to_string(),
    }
}

fn full_body() -> serde_json::Value {
    serde_json::json!({
        "normalized_title": "French gilt mantel clock",
        "value_range": { "low": 180.0, "high": 420.0, "confidence": "medium" },
        "pricing_rationale": ["4 sold comps in the last year", "condition assumed fair"],
        "top_comps_used": [0, 1],
        "notes": ["photo partially obscures the dial"],
        "suggested_keywords": ["gilt", "mantel clock"],
        "comps": [
            {
                "title": "Gilt mantel clock, c. 1880",
                "price": 210.0,
                "url": "https://listings.example/1",
                "currency": "USD",
                "thumbnail": "https://img.example/1-new.jpg",
                "thumb": "https://img.example/1-old.jpg",
                "status": "sold",
                "ended_at": "2025-05-02",
                "sold_date": "2025-04-30"
            },
            {
                "title": "Similar clock, legacy record",
                "price": 175.5,
                "url": "https://listings.example/2",
                "thumb": "https://img.example/2.jpg",
                "sold_date": "2024-12-01"
            }
        ],
        "image_url": "https://img.example/upload.jpg",
        "duration_ms": 1830.0
    })
}

#[tokio::test]
async fn estimate_parses_full_response_and_sends_form_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/estimate"))
        // Multipart text parts appear verbatim in the body.
        .and(body_string_contains("furniture"))
        .and(body_string_contains("brass inlay, 1890s"))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_body()))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .estimate(&sample_request())
        .await
        .expect("estimate ok");

    assert_eq!(response.normalized_title, "French gilt mantel clock");
    assert_eq!(response.value_range.low, 180.0);
    assert_eq!(response.value_range.high, 420.0);
    assert_eq!(response.value_range.confidence, "medium");
    assert_eq!(response.pricing_rationale.len(), 2);
    assert_eq!(response.top_comps_used, vec![0, 1]);
    assert_eq!(response.comps.len(), 2);
    assert_eq!(response.comps[0].status, CompStatus::Sold);
    assert_eq!(
        response.comps[0].thumbnail.as_deref(),
        Some("https://img.example/1-new.jpg")
    );
    // Legacy-only record: new fields absent, status defaults to active.
    assert_eq!(response.comps[1].status, CompStatus::Active);
    assert_eq!(response.comps[1].thumbnail, None);
    assert_eq!(
        response.comps[1].sold_date.as_deref(),
        Some("2024-12-01")
    );
    assert_eq!(response.duration_ms, 1830.0);
}

#[tokio::test]
async fn estimate_accepts_minimal_body_with_required_fields_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/estimate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "normalized_title": "Unknown item",
            "value_range": { "low": 10.0, "high": 20.0 },
            "pricing_rationale": [],
            "comps": []
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .estimate(&sample_request())
        .await
        .expect("estimate ok");

    assert_eq!(response.normalized_title, "Unknown item");
    assert_eq!(response.value_range.confidence, "");
    assert!(response.top_comps_used.is_empty());
    assert_eq!(response.image_url, None);
    assert_eq!(response.duration_ms, 0.0);
}

#[tokio::test]
async fn success_status_with_wrong_shape_is_a_schema_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/estimate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "done"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .estimate(&sample_request())
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::UnexpectedSchema);
    assert_eq!(err.to_string(), "Unexpected response format.");
}

#[tokio::test]
async fn error_status_surfaces_body_error_field_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/estimate"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(serde_json::json!({"error": "Image could not be decoded"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .estimate(&sample_request())
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Http {
            status: 422,
            message: "Image could not be decoded".to_string(),
        }
    );
    assert_eq!(err.to_string(), "Image could not be decoded");
}

#[tokio::test]
async fn error_status_without_error_field_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/estimate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .estimate(&sample_request())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Request failed (500)");
}

#[tokio::test]
async fn error_status_with_non_json_body_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/estimate"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .estimate(&sample_request())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Request failed (404)");
}

#[tokio::test]
async fn slow_response_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/estimate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(full_body()),
        )
        .mount(&server)
        .await;

    let client = ReqwestEstimateClient::new(ClientSettings {
        api_base: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    });

    let err = client.estimate(&sample_request()).await.unwrap_err();
    assert_eq!(err, ApiError::Timeout);
    assert_eq!(err.to_string(), "Network error. Try again.");
}

#[tokio::test]
async fn oversized_image_never_reaches_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/estimate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(full_body()))
        .expect(0)
        .mount(&server)
        .await;

    let client = ReqwestEstimateClient::new(ClientSettings {
        api_base: server.uri(),
        max_image_bytes: 10,
        ..ClientSettings::default()
    });
    let request = EstimateRequest {
        bytes: vec![0u8; 11],
        ..sample_request()
    };

    let err = client.estimate(&request).await.unwrap_err();
    assert_eq!(
        err,
        ApiError::TooLarge {
            max_bytes: 10,
            actual: 11,
        }
    );
    assert_eq!(err.to_string(), "Image too large (max 10MB).");
}

#[tokio::test]
async fn health_reports_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&server)
        .await;

    let status = client_for(&server).health().await.expect("health ok");
    assert!(status.ok);
    assert_eq!(status.error, None);
}

#[tokio::test]
async fn health_surfaces_degraded_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"error": "database unavailable"})),
        )
        .mount(&server)
        .await;

    let status = client_for(&server).health().await.expect("health parsed");
    assert!(!status.ok);
    assert_eq!(status.error.as_deref(), Some("database unavailable"));
}
