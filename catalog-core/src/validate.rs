//! Field-presence validation for create and update payloads.
//!
//! The rules are asymmetric on purpose: `name`, `description` and `category`
//! must be present and truthy, while `price` and `inStock` only need to be
//! non-null, so `0` and `false` pass. `price` must additionally be a number;
//! `inStock`'s type is not checked.

use serde_json::Value;

use crate::error::ValidationError;

/// Validates a raw JSON body against the product field rules.
///
/// The missing-fields check runs before the price type check, so a body with
/// both violations reports the missing field.
///
/// # Errors
/// Returns [`ValidationError::MissingFields`] when a required field is
/// absent, null, or falsy as described in the module docs, and
/// [`ValidationError::PriceNotNumeric`] when `price` is present but not a
/// JSON number.
pub fn validate_product_payload(body: &Value) -> Result<(), ValidationError> {
    let Some(fields) = body.as_object() else {
        // A non-object body has no fields at all.
        return Err(ValidationError::MissingFields);
    };

    let truthy = |key: &str| fields.get(key).is_some_and(is_truthy);
    let non_null = |key: &str| fields.get(key).is_some_and(|v| !v.is_null());

    if !truthy("name")
        || !truthy("description")
        || !non_null("price")
        || !truthy("category")
        || !non_null("inStock")
    {
        return Err(ValidationError::MissingFields);
    }

    if !fields.get("price").is_some_and(Value::is_number) {
        return Err(ValidationError::PriceNotNumeric);
    }

    Ok(())
}

/// Loose truthiness over JSON values: `null`, `false`, `0` and the empty
/// string are falsy; arrays and objects are always truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
