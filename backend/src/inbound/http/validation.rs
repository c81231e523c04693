//! Validation helpers for the generate request.
//!
//! Clients send `quantity` in whatever shape their form produced: a JSON
//! number, a numeric string, occasionally a boolean. Coercion accepts the
//! same inputs as a lenient integer conversion would and leaves range checks
//! to [`Quantity::new`].

use serde_json::{Map, Value};

use crate::domain::{Error, Quantity};

/// Field name of the raw name text.
pub(crate) const NAME_FIELD: &str = "name";
/// Field name of the requested address count.
pub(crate) const QUANTITY_FIELD: &str = "quantity";

/// Raw request fields after the body shape has been checked.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RequestFields {
    pub(crate) name: Value,
    pub(crate) quantity: Value,
}

/// Parse the raw body into its two required fields.
///
/// Empty bodies, invalid JSON, non-objects and objects missing either key
/// all collapse into [`Error::malformed_request`].
pub(crate) fn request_fields(body: &[u8]) -> Result<RequestFields, Error> {
    if body.is_empty() {
        return Err(Error::malformed_request());
    }
    let mut object: Map<String, Value> = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => object,
        _ => return Err(Error::malformed_request()),
    };
    match (object.remove(NAME_FIELD), object.remove(QUANTITY_FIELD)) {
        (Some(name), Some(quantity)) => Ok(RequestFields { name, quantity }),
        _ => Err(Error::malformed_request()),
    }
}

/// Borrow the name text; `null` counts as an empty name.
pub(crate) fn parse_name(value: &Value) -> Result<&str, Error> {
    match value {
        Value::String(name) => Ok(name.as_str()),
        Value::Null => Ok(""),
        _ => Err(Error::malformed_request()),
    }
}

/// Coerce and range-check the requested quantity.
pub(crate) fn parse_quantity(value: &Value) -> Result<Quantity, Error> {
    let count = coerce_integer(value).ok_or_else(Error::invalid_quantity_type)?;
    Quantity::new(count)
}

/// Coerce a JSON value to an integer.
///
/// Floats truncate toward zero and values beyond `i128` saturate, so huge
/// inputs fail the range check instead of the type check.
fn coerce_integer(value: &Value) -> Option<i128> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .map(i128::from)
            .or_else(|| number.as_u64().map(i128::from))
            .or_else(|| number.as_f64().map(truncate_float)),
        Value::Bool(flag) => Some(i128::from(*flag)),
        Value::String(text) => parse_integer_literal(text),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Truncate toward zero, saturating at the `i128` bounds.
#[expect(
    clippy::cast_possible_truncation,
    reason = "float-to-int casts saturate, which is the intended clamp"
)]
fn truncate_float(float: f64) -> i128 {
    float.trunc() as i128
}

/// Parse a decimal integer literal such as `" 42 "`, `"+7"`, `"-3"` or
/// `"1_000"`. Underscores may only separate digits.
fn parse_integer_literal(text: &str) -> Option<i128> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let well_formed = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c.is_ascii_digit() || c == '_');
    if !well_formed {
        return None;
    }

    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0_i128, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i128::from(digit))
        });
    Some(if negative {
        magnitude.saturating_neg()
    } else {
        magnitude
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(5), 5)]
    #[case(json!(5000), 5000)]
    #[case(json!(3.9), 3)]
    #[case(json!("42"), 42)]
    #[case(json!("  17\n"), 17)]
    #[case(json!("+8"), 8)]
    #[case(json!("1_000"), 1000)]
    #[case(json!(true), 1)]
    fn coercible_quantities_are_accepted(#[case] value: Value, #[case] expected: usize) {
        let quantity = parse_quantity(&value).expect("valid quantity");
        assert_eq!(quantity.get(), expected);
    }

    #[rstest]
    #[case(json!("abc"))]
    #[case(json!("3.5"))]
    #[case(json!(""))]
    #[case(json!("1__0"))]
    #[case(json!("_10"))]
    #[case(json!("-"))]
    #[case(json!(null))]
    #[case(json!([5]))]
    #[case(json!({"n": 5}))]
    fn non_integers_are_type_errors(#[case] value: Value) {
        let err = parse_quantity(&value).expect_err("type error");
        assert_eq!(err.code(), ErrorCode::InvalidQuantityType);
    }

    #[rstest]
    #[case(json!(0))]
    #[case(json!(-1))]
    #[case(json!(5001))]
    #[case(json!(false))]
    #[case(json!(0.5))]
    #[case(json!(18_446_744_073_709_551_615_u64))]
    #[case(json!(1e300))]
    #[case(json!("99999999999999999999999999999999999999999999"))]
    #[case(json!("-7"))]
    fn integers_outside_range_are_rejected(#[case] value: Value) {
        let err = parse_quantity(&value).expect_err("range error");
        assert_eq!(err.code(), ErrorCode::QuantityOutOfRange);
    }

    #[rstest]
    #[case(3.9, 3)]
    #[case(-3.9, -3)]
    #[case(1e300, i128::MAX)]
    #[case(-1e300, i128::MIN)]
    fn floats_truncate_and_saturate(#[case] float: f64, #[case] expected: i128) {
        assert_eq!(truncate_float(float), expected);
    }

    #[rstest]
    #[case(br#"{"name": "Ada", "quantity": 3}"#.as_slice())]
    #[case(br#"{"quantity": 3, "name": null, "extra": true}"#.as_slice())]
    fn well_shaped_bodies_yield_fields(#[case] body: &[u8]) {
        let fields = request_fields(body).expect("fields present");
        assert_eq!(fields.quantity, json!(3));
    }

    #[rstest]
    #[case(b"".as_slice())]
    #[case(b"not json".as_slice())]
    #[case(b"{}".as_slice())]
    #[case(b"[1, 2]".as_slice())]
    #[case(b"null".as_slice())]
    #[case(br#"{"name": "Ada"}"#.as_slice())]
    #[case(br#"{"quantity": 2}"#.as_slice())]
    fn malformed_bodies_are_rejected(#[case] body: &[u8]) {
        let err = request_fields(body).expect_err("malformed");
        assert_eq!(err.code(), ErrorCode::MalformedRequest);
    }

    #[rstest]
    #[case(json!("Ada Lovelace"), "Ada Lovelace")]
    #[case(json!(null), "")]
    fn names_accept_strings_and_null(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(parse_name(&value).expect("usable name"), expected);
    }

    #[rstest]
    #[case(json!(42))]
    #[case(json!(["Ada"]))]
    fn non_string_names_are_malformed(#[case] value: Value) {
        let err = parse_name(&value).expect_err("malformed");
        assert_eq!(err.code(), ErrorCode::MalformedRequest);
    }
}
