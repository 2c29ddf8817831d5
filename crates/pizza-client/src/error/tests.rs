//! Unit tests for error module.

use super::*;

#[test]
fn test_api_error_display() {
    let error = Error::Api {
        status: 500,
        message: "Internal server error".to_string(),
    };

    let display = format!("{}", error);
    assert!(display.contains("500"));
    assert!(display.contains("Internal server error"));
}

#[test]
fn test_not_found_error_display() {
    let error = Error::NotFound("Restaurant not found".to_string());

    let display = format!("{}", error);
    assert_eq!(display, "Not found: Restaurant not found");
}

#[test]
fn test_validation_error_display() {
    let error = Error::Validation {
        status: 400,
        errors: vec![
            "price must be between 1 and 30".to_string(),
            "pizza_id is required".to_string(),
        ],
    };

    assert_eq!(
        format!("{}", error),
        "Rejected (400): price must be between 1 and 30; pizza_id is required"
    );
}

#[test]
fn test_error_debug() {
    let error = Error::Validation {
        status: 400,
        errors: vec!["Invalid pizza_id or restaurant_id".to_string()],
    };

    let debug = format!("{:?}", error);
    assert!(debug.contains("Validation"));
    assert!(debug.contains("400"));
}
