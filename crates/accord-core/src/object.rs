//! The lenient field reader at the heart of the decoding engine.
//!
//! [`ObjectDecoder`] is a borrowed cursor over one JSON object: the field
//! table, the dotted path that led here, and the ambient [`DecodeOptions`].
//! All the per-field leniencies live on it:
//!
//! * required scalars with a call-site default (`string_or`, `i64_or`),
//! * cross-type coercion via textual round-trip when enabled,
//! * plain optionals where `null` and “absent” are the same thing,
//! * tolerant optional subtrees whose decode failures become `None`,
//! * strict discriminant reads for polymorphic dispatch.
//!
//! Every leniency that actually fires — a filled default, a coercion, a
//! swallowed subtree — emits a `tracing` debug event naming the field path,
//! so relaxed decoding stays observable without ever failing fast.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    error::{DecodeError, Result},
    options::DecodeOptions,
};

/// Human-readable JSON type name used in [`DecodeError::TypeMismatch`].
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A borrowed view of one JSON object during decoding.
///
/// Construction is either [`ObjectDecoder::root`] for the whole document or
/// [`ObjectDecoder::at`] for a nested value whose path is already known.
/// The decoder never mutates the underlying value and holds no state beyond
/// the path and options, so cloning is cheap and decoding stays pure.
#[derive(Debug, Clone)]
pub struct ObjectDecoder<'a> {
    fields: &'a Map<String, Value>,
    path: String,
    options: DecodeOptions,
}

impl<'a> ObjectDecoder<'a> {
    /// Open the top-level document.
    ///
    /// # Errors
    ///
    /// [`DecodeError::TopLevel`] if the document is not a JSON object —
    /// the one shape the engine cannot be lenient about.
    pub fn root(document: &'a Value, options: DecodeOptions) -> Result<Self> {
        let fields = document.as_object().ok_or(DecodeError::TopLevel)?;
        Ok(Self {
            fields,
            path: String::new(),
            options,
        })
    }

    /// Open a nested value at an already-computed path.
    pub fn at(value: &'a Value, path: String, options: DecodeOptions) -> Result<Self> {
        let Some(fields) = value.as_object() else {
            return Err(DecodeError::TypeMismatch {
                path,
                expected: "object",
                found: json_type_name(value),
            });
        };
        Ok(Self {
            fields,
            path,
            options,
        })
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Dotted path of `key` below this object, e.g. `choices[0].message`.
    pub fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_owned()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    /// Raw field access; `null` counts as absent everywhere in this engine.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match self.fields.get(key) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    /// Raw field access for a field the caller considers required.
    pub fn required(&self, key: &str) -> Result<&'a Value> {
        self.get(key).ok_or_else(|| DecodeError::MissingField {
            path: self.field_path(key),
        })
    }

    /// Required string field.
    pub fn string(&self, key: &str) -> Result<String> {
        self.string_field(key, None)
    }

    /// Required string field with a fallback default for absent/`null`.
    pub fn string_or(&self, key: &str, default: &str) -> Result<String> {
        self.string_field(key, Some(default))
    }

    /// Required integer field.
    pub fn i64(&self, key: &str) -> Result<i64> {
        self.i64_field(key, None)
    }

    /// Required integer field with a fallback default for absent/`null`.
    pub fn i64_or(&self, key: &str, default: i64) -> Result<i64> {
        self.i64_field(key, Some(default))
    }

    /// Optional string field; same coercion rules as [`Self::string`].
    pub fn opt_string(&self, key: &str) -> Result<Option<String>> {
        self.get(key)
            .map(|value| self.string_value(key, value))
            .transpose()
    }

    /// Optional integer field; same coercion rules as [`Self::i64`].
    pub fn opt_i64(&self, key: &str) -> Result<Option<i64>> {
        self.get(key)
            .map(|value| self.i64_value(key, value))
            .transpose()
    }

    /// Optional list of strings (e.g. provider-specific citation lists).
    pub fn opt_string_array(&self, key: &str) -> Result<Option<Vec<String>>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let Some(elements) = value.as_array() else {
            return Err(DecodeError::TypeMismatch {
                path: self.field_path(key),
                expected: "array",
                found: json_type_name(value),
            });
        };

        let mut decoded = Vec::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            match element {
                Value::String(s) => decoded.push(s.clone()),
                other => {
                    return Err(DecodeError::TypeMismatch {
                        path: format!("{}[{index}]", self.field_path(key)),
                        expected: "string",
                        found: json_type_name(other),
                    });
                }
            }
        }
        Ok(Some(decoded))
    }

    /// Required array field, returned raw so the caller can drive indexed
    /// decoding with per-element paths.
    pub fn array(&self, key: &str) -> Result<&'a Vec<Value>> {
        let value = self.required(key)?;
        value.as_array().ok_or_else(|| DecodeError::TypeMismatch {
            path: self.field_path(key),
            expected: "array",
            found: json_type_name(value),
        })
    }

    /// Required nested object.
    pub fn object(&self, key: &str) -> Result<ObjectDecoder<'a>> {
        let value = self.required(key)?;
        ObjectDecoder::at(value, self.field_path(key), self.options)
    }

    /// Optional nested object; present-but-wrong-type is still an error
    /// (use [`Self::tolerant`] for subtrees that may arrive malformed).
    pub fn opt_object(&self, key: &str) -> Result<Option<ObjectDecoder<'a>>> {
        self.get(key)
            .map(|value| ObjectDecoder::at(value, self.field_path(key), self.options))
            .transpose()
    }

    /// Decode an optional subtree with derived `Deserialize`, treating
    /// *any* failure as absence.
    ///
    /// This is the one place decode errors are intentionally discarded.
    /// It must stay restricted to fields explicitly documented as observed
    /// non-conforming in the wild — applying it broadly would mask real
    /// bugs, so call sites carry the allow-list, not this method.
    pub fn tolerant<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value::<T>(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(error) => {
                tracing::debug!(
                    path = %self.field_path(key),
                    %error,
                    "discarding non-conforming optional subtree"
                );
                None
            }
        }
    }

    /// Decode a required conformant subtree with derived `Deserialize`,
    /// wrapping failures as [`DecodeError::Invalid`] at the field's path.
    pub fn typed<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self.required(key)?;
        self.typed_value(key, value)
    }

    /// Optional variant of [`Self::typed`].
    pub fn opt_typed<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.get(key)
            .map(|value| self.typed_value(key, value))
            .transpose()
    }

    /// Read a discriminant field for polymorphic dispatch.
    ///
    /// Discriminants select a wire schema, so they are read strictly: no
    /// default, no coercion, regardless of the ambient options.
    pub fn discriminant(&self, key: &str) -> Result<&'a str> {
        match self.required(key)? {
            Value::String(value) => Ok(value),
            other => Err(DecodeError::TypeMismatch {
                path: self.field_path(key),
                expected: "string",
                found: json_type_name(other),
            }),
        }
    }

    fn string_field(&self, key: &str, default: Option<&str>) -> Result<String> {
        match self.get(key) {
            Some(value) => self.string_value(key, value),
            None => match default.filter(|_| self.options.fill_defaults) {
                Some(default) => {
                    tracing::debug!(
                        path = %self.field_path(key),
                        default,
                        "filling missing field with default"
                    );
                    Ok(default.to_owned())
                }
                None => Err(DecodeError::MissingField {
                    path: self.field_path(key),
                }),
            },
        }
    }

    fn i64_field(&self, key: &str, default: Option<i64>) -> Result<i64> {
        match self.get(key) {
            Some(value) => self.i64_value(key, value),
            None => match default.filter(|_| self.options.fill_defaults) {
                Some(default) => {
                    tracing::debug!(
                        path = %self.field_path(key),
                        default,
                        "filling missing field with default"
                    );
                    Ok(default)
                }
                None => Err(DecodeError::MissingField {
                    path: self.field_path(key),
                }),
            },
        }
    }

    fn string_value(&self, key: &str, value: &Value) -> Result<String> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) if self.options.coerce_primitives => {
                tracing::debug!(path = %self.field_path(key), "coercing number to string");
                Ok(n.to_string())
            }
            other => Err(DecodeError::TypeMismatch {
                path: self.field_path(key),
                expected: "string",
                found: json_type_name(other),
            }),
        }
    }

    fn i64_value(&self, key: &str, value: &Value) -> Result<i64> {
        let mismatch = || DecodeError::TypeMismatch {
            path: self.field_path(key),
            expected: "integer",
            found: json_type_name(value),
        };

        match value {
            Value::Number(n) => {
                if let Some(int) = n.as_i64() {
                    return Ok(int);
                }
                // Some backends emit integral floats (1700000000.0).
                if self.options.coerce_primitives {
                    if let Some(float) = n.as_f64() {
                        if float.fract() == 0.0
                            && float >= i64::MIN as f64
                            && float <= i64::MAX as f64
                        {
                            tracing::debug!(
                                path = %self.field_path(key),
                                "coercing integral float to integer"
                            );
                            return Ok(float as i64);
                        }
                    }
                }
                Err(mismatch())
            }
            Value::String(s) if self.options.coerce_primitives => match s.trim().parse::<i64>() {
                Ok(int) => {
                    tracing::debug!(path = %self.field_path(key), "coercing string to integer");
                    Ok(int)
                }
                Err(_) => Err(mismatch()),
            },
            _ => Err(mismatch()),
        }
    }

    fn typed_value<T: DeserializeOwned>(&self, key: &str, value: &Value) -> Result<T> {
        serde_json::from_value(value.clone()).map_err(|error| DecodeError::Invalid {
            path: self.field_path(key),
            reason: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn lenient(document: &Value) -> ObjectDecoder<'_> {
        ObjectDecoder::root(document, DecodeOptions::default()).unwrap()
    }

    fn strict(document: &Value) -> ObjectDecoder<'_> {
        ObjectDecoder::root(document, DecodeOptions::strict()).unwrap()
    }

    #[test]
    fn root_rejects_non_objects() {
        assert!(matches!(
            ObjectDecoder::root(&json!([1, 2]), DecodeOptions::default()),
            Err(DecodeError::TopLevel)
        ));
    }

    #[test]
    fn missing_field_fills_default_when_lenient() {
        let doc = json!({});
        assert_eq!(lenient(&doc).string_or("model", "unknown").unwrap(), "unknown");
        assert_eq!(lenient(&doc).i64_or("created", 0).unwrap(), 0);
    }

    #[test]
    fn null_counts_as_absent() {
        let doc = json!({ "model": null });
        assert_eq!(lenient(&doc).string_or("model", "unknown").unwrap(), "unknown");
        assert_eq!(lenient(&doc).opt_string("model").unwrap(), None);
    }

    #[test]
    fn strict_mode_ignores_defaults() {
        let doc = json!({});
        assert!(matches!(
            strict(&doc).string_or("model", "unknown"),
            Err(DecodeError::MissingField { path }) if path == "model"
        ));
    }

    #[test]
    fn numeric_string_coerces_to_integer() {
        let doc = json!({ "created": "1700000000" });
        assert_eq!(lenient(&doc).i64("created").unwrap(), 1_700_000_000);
    }

    #[test]
    fn integral_float_coerces_to_integer() {
        let doc = json!({ "created": 1700000000.0 });
        assert_eq!(lenient(&doc).i64("created").unwrap(), 1_700_000_000);
    }

    #[test]
    fn number_coerces_to_string() {
        let doc = json!({ "id": 42 });
        assert_eq!(lenient(&doc).string("id").unwrap(), "42");
    }

    #[test]
    fn coercion_can_be_disabled() {
        let doc = json!({ "created": "1700000000" });
        let err = strict(&doc).i64("created").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch { path, expected: "integer", found: "string" } if path == "created"
        ));
    }

    #[test]
    fn unparseable_string_still_mismatches() {
        let doc = json!({ "created": "soon" });
        assert!(matches!(
            lenient(&doc).i64("created"),
            Err(DecodeError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn nested_errors_carry_the_full_path() {
        let doc = json!({ "usage": { "total_tokens": true } });
        let usage = lenient(&doc).object("usage").unwrap();
        let err = usage.i64("total_tokens").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::TypeMismatch { path, .. } if path == "usage.total_tokens"
        ));
    }

    #[test]
    fn tolerant_swallows_malformed_subtrees() {
        #[derive(serde::Deserialize)]
        struct Usage {
            #[allow(dead_code)]
            total_tokens: i64,
        }

        let doc = json!({ "usage": "n/a" });
        assert!(lenient(&doc).tolerant::<Usage>("usage").is_none());

        let doc = json!({ "usage": {} });
        assert!(lenient(&doc).tolerant::<Usage>("usage").is_none());

        let doc = json!({ "usage": { "total_tokens": 7 } });
        assert!(lenient(&doc).tolerant::<Usage>("usage").is_some());
    }

    #[test]
    fn typed_failures_are_tagged_with_the_path() {
        #[derive(serde::Deserialize, Debug)]
        struct Call {
            #[allow(dead_code)]
            id: String,
        }

        let doc = json!({ "tool_calls": [{ "no_id": true }] });
        let err = lenient(&doc).opt_typed::<Vec<Call>>("tool_calls").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Invalid { path, .. } if path == "tool_calls"
        ));
    }

    #[test]
    fn discriminants_are_never_coerced() {
        let doc = json!({ "role": 3 });
        assert!(matches!(
            lenient(&doc).discriminant("role"),
            Err(DecodeError::TypeMismatch { .. })
        ));

        let doc = json!({});
        assert!(matches!(
            lenient(&doc).discriminant("role"),
            Err(DecodeError::MissingField { path }) if path == "role"
        ));
    }
}
