use crate::{AgentBearer, ApiError};

use axum::extract::FromRequestParts;
use http::Request;

async fn extract(authorization: Option<&str>) -> Result<AgentBearer, ApiError> {
    let mut builder = Request::builder().uri("/save-user-data");
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _) = builder.body(()).unwrap().into_parts();

    AgentBearer::from_request_parts(&mut parts, &()).await
}

#[tokio::test]
async fn test_bearer_header_is_extracted() {
    let AgentBearer(bearer) = extract(Some("Bearer agent-token")).await.unwrap();

    assert_eq!(bearer.as_str(), "agent-token");
}

#[tokio::test]
async fn test_missing_header_is_forbidden() {
    let result = extract(None).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}

#[tokio::test]
async fn test_header_without_value_is_forbidden() {
    let result = extract(Some("Bearer ")).await;

    assert!(matches!(result, Err(ApiError::Forbidden { .. })));
}
