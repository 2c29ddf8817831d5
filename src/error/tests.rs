//! Unit tests for error module.

use super::*;
use crate::validation::ValidationError;

// ============================================================================
// Response Body Tests
// ============================================================================

#[test]
fn test_error_response_serialization() {
    let response = ErrorResponse {
        error: "Restaurant not found".to_string(),
    };

    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"error":"Restaurant not found"}"#);
}

#[test]
fn test_errors_response_serialization() {
    let response = ErrorsResponse {
        errors: vec!["price must be between 1 and 30".to_string()],
    };

    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"errors":["price must be between 1 and 30"]}"#);
}

// ============================================================================
// ApiError Display Tests
// ============================================================================

#[test]
fn test_api_error_restaurant_not_found_display() {
    let error = ApiError::RestaurantNotFound(3);
    assert_eq!(format!("{}", error), "Restaurant not found");
}

#[test]
fn test_api_error_validation_display() {
    let error = ApiError::Validation(ValidationError::new("price is required").into());
    assert_eq!(format!("{}", error), "Validation failed: price is required");
}

#[test]
fn test_api_error_integrity_display() {
    let error = ApiError::Integrity("Invalid pizza_id or restaurant_id".to_string());
    assert_eq!(
        format!("{}", error),
        "Integrity error: Invalid pizza_id or restaurant_id"
    );
}

// ============================================================================
// ApiError IntoResponse Tests
// ============================================================================

#[test]
fn test_api_error_not_found_into_response() {
    let response = ApiError::RestaurantNotFound(3).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_api_error_validation_into_response() {
    let error = ApiError::Validation(ValidationError::new("price is required").into());
    assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_api_error_integrity_into_response() {
    let error = ApiError::Integrity("Invalid pizza_id or restaurant_id".to_string());
    assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_api_error_unexpected_into_response() {
    let error = ApiError::Unexpected("connection reset".to_string());
    assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_api_error_database_into_response() {
    let error = ApiError::Database("pool timed out".to_string());
    assert_eq!(
        error.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// ============================================================================
// StoreError Mapping Tests
// ============================================================================

#[test]
fn test_foreign_key_violation_maps_to_integrity() {
    let error = ApiError::from_write(StoreError::ForeignKeyViolation(
        "fk_restaurant_pizzas_pizza_id_pizzas".to_string(),
    ));
    assert!(matches!(
        error,
        ApiError::Integrity(ref message) if message == "Invalid pizza_id or restaurant_id"
    ));
}

#[test]
fn test_check_violation_maps_to_validation() {
    let error = ApiError::from_write(StoreError::CheckViolation("price".to_string()));
    match error {
        ApiError::Validation(errors) => {
            assert_eq!(errors.messages(), vec!["price must be between 1 and 30"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_write_database_error_maps_to_unexpected() {
    let error = ApiError::from_write(StoreError::Database(sqlx::Error::PoolTimedOut));
    assert!(matches!(error, ApiError::Unexpected(_)));
}

#[test]
fn test_read_database_error_maps_to_database() {
    let error = ApiError::from_read(StoreError::Database(sqlx::Error::PoolTimedOut));
    assert!(matches!(error, ApiError::Database(_)));
}
