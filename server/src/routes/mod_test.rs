use super::*;
use crate::state::test_helpers;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn api_routes_build_without_conflicts() {
    let _router = api_routes(test_helpers::test_app_state());
}
