use crate::ApiError;

use rp_auth::AuthGate;
use rp_core::ErrorLocation;
use rp_service::ServiceError;
use rp_store::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Missing required user data.".into(),
        field: Some("city".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "Missing required user data.");
    assert_eq!(json["error"]["field"], "city");
}

#[tokio::test]
async fn test_forbidden_returns_403_without_field() {
    let error = ApiError::Forbidden {
        message: "Forbidden: Invalid auth token".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Internal server error".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_store_error_converts_to_fixed_internal_message() {
    let service_error = ServiceError::from(StoreError::unexpected("connection reset by peer"));

    let api_error = ApiError::from(service_error);

    match api_error {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Failed to save user data.");
            assert!(!message.contains("connection reset"));
        }
        other => panic!("expected internal error, got {:?}", other),
    }
}

#[test]
fn test_signing_error_converts_to_internal() {
    let service_error = ServiceError::from(rp_auth::AuthError::MissingSigningKey {
        location: ErrorLocation::from(Location::caller()),
    });

    let api_error = ApiError::from(service_error);

    assert!(matches!(api_error, ApiError::Internal { ref message, .. } if message == "Internal server error"));
}

#[test]
fn test_service_validation_keeps_field() {
    let service_error = ServiceError::validation("roomName", "roomName is required");

    let api_error = ApiError::from(service_error);

    match api_error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("roomName")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_gate_denial_converts_to_forbidden() {
    let denial = AuthGate::authorize(None).unwrap_err();

    let api_error = ApiError::from(denial);

    assert!(matches!(api_error, ApiError::Forbidden { .. }));
}

#[test]
fn test_only_internal_errors_log_at_error_level() {
    let location = ErrorLocation::from(Location::caller());

    let validation = ApiError::Validation {
        message: "Missing required user data.".into(),
        field: Some("age".into()),
        location,
    };
    let bad_request = ApiError::BadRequest {
        message: "expected value".into(),
        location,
    };
    let forbidden = ApiError::Forbidden {
        message: "Forbidden: Invalid auth token".into(),
        location,
    };
    let internal = ApiError::Internal {
        message: "Internal server error".into(),
        location,
    };

    assert_eq!(validation.log_level(), log::Level::Warn);
    assert_eq!(bad_request.log_level(), log::Level::Warn);
    assert_eq!(forbidden.log_level(), log::Level::Debug);
    assert_eq!(internal.log_level(), log::Level::Error);
    assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
