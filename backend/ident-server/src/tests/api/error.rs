use crate::ApiError;

use ident_service::ServiceError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User not found");
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_specific_code() {
    let error = ApiError::Unauthorized {
        code: "INVALID_TOKEN",
        message: "signature mismatch".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_TOKEN");
    assert_eq!(json["error"]["message"], "signature mismatch");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        code: "STORAGE_ERROR",
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "STORAGE_ERROR");
}

#[test]
fn test_service_errors_convert_by_severity() {
    let not_found: ApiError = ServiceError::not_found("User not found").into();
    let missing: ApiError = ServiceError::MissingCredentials {
        message: "No token provided".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let internal: ApiError = ServiceError::Internal {
        message: "Authentication backend failure".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert!(matches!(not_found, ApiError::NotFound { .. }));
    assert!(matches!(
        missing,
        ApiError::Unauthorized {
            code: "MISSING_CREDENTIALS",
            ..
        }
    ));
    assert!(matches!(
        internal,
        ApiError::Internal {
            code: "INTERNAL_ERROR",
            ..
        }
    ));
}
