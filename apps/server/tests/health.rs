use axum::{body::Body, http::Request};
use marketdash_server::{api::app_router, build_state, config::Config};
use tower::ServiceExt;

#[tokio::test]
async fn healthz_works() {
    let config = Config::default();
    let state = build_state(&config).unwrap();
    let app = app_router(state, &config);

    let response = app
        .oneshot(Request::builder().uri("/api/v1/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}
