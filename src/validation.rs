//! Input validation for restaurant pizza creation.
//!
//! Every check here is pure and runs before the store is touched.

use crate::db::NewRestaurantPizza;
use crate::models::CreateRestaurantPizzaRequest;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Lowest accepted price.
pub const MIN_PRICE: i32 = 1;

/// Highest accepted price.
pub const MAX_PRICE: i32 = 30;

/// A single failed input rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    /// Creates a validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Returns the message shown to API callers.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// All rules a request failed, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Returns the failed rules' messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|e| e.message().to_string()).collect()
    }

    /// Returns `true` if no rule failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Converts a JSON value to an integer.
///
/// Integers pass through, finite floats are truncated toward zero and
/// strings are parsed after trimming. Booleans, arrays and objects never
/// convert. `None` is returned for values that are present but unusable.
fn to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            // Integers above i64::MAX are still integers, just never in range.
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            // Float to int casts saturate, so huge floats stay out of range.
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_integer(s.trim()),
        _ => None,
    }
}

/// Parses a decimal integer string, saturating digit strings that overflow.
fn parse_integer(s: &str) -> Option<i64> {
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }

    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(if negative { i64::MIN } else { i64::MAX })
}

/// Validates a raw price value and returns it as an integer.
///
/// # Errors
/// Returns a [`ValidationError`] when the price is absent, not an integer,
/// or outside `MIN_PRICE..=MAX_PRICE`.
pub fn validate_price(raw: Option<&Value>) -> Result<i32, ValidationError> {
    let value = match raw {
        None | Some(Value::Null) => return Err(ValidationError::new("price is required")),
        Some(value) => value,
    };

    let price = to_integer(value).ok_or_else(|| ValidationError::new("price must be an integer"))?;

    if price < i64::from(MIN_PRICE) || price > i64::from(MAX_PRICE) {
        return Err(ValidationError::new(format!(
            "price must be between {MIN_PRICE} and {MAX_PRICE}"
        )));
    }

    // In range, so the narrowing cannot truncate.
    Ok(price as i32)
}

/// Validates a raw foreign key value.
///
/// Only presence and integer shape are checked here; existence is enforced
/// by the store.
///
/// # Errors
/// Returns a [`ValidationError`] naming `field` when the value is absent or
/// not an integer.
pub fn validate_foreign_key(field: &str, raw: Option<&Value>) -> Result<i64, ValidationError> {
    match raw {
        None | Some(Value::Null) => Err(ValidationError::new(format!("{field} is required"))),
        Some(value) => to_integer(value)
            .ok_or_else(|| ValidationError::new(format!("{field} must be an integer"))),
    }
}

impl NewRestaurantPizza {
    /// Validates every field of a creation request.
    ///
    /// # Errors
    /// Returns all failed rules at once.
    pub fn from_request(request: &CreateRestaurantPizzaRequest) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let price = validate_price(request.price.as_ref())
            .map_err(|e| errors.push(e))
            .ok();
        let pizza_id = validate_foreign_key("pizza_id", request.pizza_id.as_ref())
            .map_err(|e| errors.push(e))
            .ok();
        let restaurant_id = validate_foreign_key("restaurant_id", request.restaurant_id.as_ref())
            .map_err(|e| errors.push(e))
            .ok();

        match (price, pizza_id, restaurant_id) {
            (Some(price), Some(pizza_id), Some(restaurant_id)) => Ok(Self {
                price,
                pizza_id,
                restaurant_id,
            }),
            _ => Err(errors),
        }
    }
}
