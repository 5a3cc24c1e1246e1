//! Multi-shape decoding for union fields that carry no wire discriminant.
//!
//! Some logical fields arrive as one of several alternative shapes — a user
//! message's `content` is either a plain string or a list of structured
//! parts, and nothing in the payload says which.  The only way to decode
//! such a field is to try each candidate shape in a fixed priority order.
//!
//! The order is part of the contract: it is documented at every use site,
//! and changing it is a breaking behavioural change.  When *every*
//! candidate fails, the aggregated error keeps each candidate's name and
//! failure so the caller can see exactly what was attempted — this function
//! never silently substitutes an empty or degenerate result.

use serde_json::Value;

use crate::error::{DecodeError, Result, ShapeAttempt};

/// Try each `(shape name, decode)` candidate in order against the same raw
/// value and return the first success.
///
/// # Errors
///
/// [`DecodeError::NoShapeMatched`] with one [`ShapeAttempt`] per candidate,
/// in priority order, if none of them decodes.
pub fn decode_one_of<T>(
    value: &Value,
    path: &str,
    candidates: &[(&'static str, &dyn Fn(&Value) -> Result<T>)],
) -> Result<T> {
    let mut attempts = Vec::with_capacity(candidates.len());

    for (shape, decode) in candidates {
        match decode(value) {
            Ok(decoded) => return Ok(decoded),
            Err(error) => attempts.push(ShapeAttempt {
                shape,
                error: Box::new(error),
            }),
        }
    }

    Err(DecodeError::NoShapeMatched {
        path: path.to_owned(),
        attempts,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::object::json_type_name;

    #[derive(Debug, PartialEq)]
    enum Either {
        Int(i64),
        Text(String),
    }

    fn int(value: &Value) -> Result<Either> {
        value
            .as_i64()
            .map(Either::Int)
            .ok_or_else(|| DecodeError::TypeMismatch {
                path: "field".into(),
                expected: "integer",
                found: json_type_name(value),
            })
    }

    fn text(value: &Value) -> Result<Either> {
        value
            .as_str()
            .map(|s| Either::Text(s.to_owned()))
            .ok_or_else(|| DecodeError::TypeMismatch {
                path: "field".into(),
                expected: "string",
                found: json_type_name(value),
            })
    }

    #[test]
    fn first_matching_candidate_wins() {
        let decoded = decode_one_of(&json!("hi"), "field", &[("integer", &int), ("string", &text)]);
        assert_eq!(decoded.unwrap(), Either::Text("hi".into()));
    }

    #[test]
    fn priority_order_is_respected() {
        // Both candidates accept an integer-shaped decode here; the first
        // listed one must win.
        let to_text = |value: &Value| -> Result<Either> {
            Ok(Either::Text(value.to_string()))
        };
        let decoded = decode_one_of(&json!(5), "field", &[("integer", &int), ("stringified", &to_text)]);
        assert_eq!(decoded.unwrap(), Either::Int(5));
    }

    #[test]
    fn exhaustion_aggregates_every_attempt() {
        let err = decode_one_of(&json!(true), "field", &[("integer", &int), ("string", &text)])
            .unwrap_err();

        let DecodeError::NoShapeMatched { path, attempts } = err else {
            panic!("expected NoShapeMatched");
        };
        assert_eq!(path, "field");
        assert_eq!(attempts.len(), 2);
        assert_eq!(attempts[0].shape, "integer");
        assert_eq!(attempts[1].shape, "string");
    }
}
