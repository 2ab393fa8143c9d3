mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use std::sync::Arc;
use thumb_overlay::api::handlers::health_handler;

use common::StubProbe;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state(Arc::new(StubProbe::all_present()));
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["probe"]["status"], "ok");
    assert_eq!(json["checks"]["probe"]["message"], "Backend: stub");
    assert!(json.get("version").is_some());
}
