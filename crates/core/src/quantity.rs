//! Quantities and their dynamic-input boundary.

use serde_json::Value as JsonValue;

/// Signed count of units held for an item.
///
/// Signed so that arithmetic may pass through zero or below; removal never
/// leaves a non-positive entry behind.
pub type Quantity = i64;

/// Threshold used by low-stock queries when the caller has no preference.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;

/// Interpret a dynamic value as a quantity.
///
/// JSON integers that fit in an `i64` qualify, and booleans count as 1 or 0.
/// Floats and numeric strings are rejected.
pub fn quantity_from_value(value: &JsonValue) -> Option<Quantity> {
    match value {
        JsonValue::Number(n) => n.as_i64(),
        JsonValue::Bool(b) => Some(Quantity::from(*b)),
        _ => None,
    }
}

/// Render a dynamic value for operator-facing messages.
///
/// Strings are shown verbatim (no quotes); everything else in JSON form.
pub fn render_value(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether a dynamic value counts as "present".
///
/// Null, `false`, zero, the empty string and empty collections are absent.
pub fn is_present(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => false,
        JsonValue::Bool(b) => *b,
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Array(a) => !a.is_empty(),
        JsonValue::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_and_booleans_are_quantities() {
        assert_eq!(quantity_from_value(&json!(10)), Some(10));
        assert_eq!(quantity_from_value(&json!(-3)), Some(-3));
        assert_eq!(quantity_from_value(&json!("ten")), None);
        assert_eq!(quantity_from_value(&json!("10")), None);
        assert_eq!(quantity_from_value(&json!(1.5)), None);
        assert_eq!(quantity_from_value(&json!(true)), Some(1));
        assert_eq!(quantity_from_value(&json!(false)), Some(0));
        assert_eq!(quantity_from_value(&JsonValue::Null), None);
    }

    #[test]
    fn rendering_keeps_strings_bare() {
        assert_eq!(render_value(&json!("ten")), "ten");
        assert_eq!(render_value(&json!(123)), "123");
        assert_eq!(render_value(&json!(null)), "null");
    }

    #[test]
    fn presence_follows_emptiness() {
        assert!(!is_present(&json!(null)));
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!(0)));
        assert!(!is_present(&json!(false)));
        assert!(!is_present(&json!([])));
        assert!(is_present(&json!("apple")));
        assert!(is_present(&json!(123)));
    }
}
