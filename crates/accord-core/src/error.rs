//! Unified error type exposed by **`accord-core`**.
//!
//! Every hard failure carries the dotted path of the field that caused it
//! (`choices[0].message.content`), so a caller can tell *where* a provider
//! response went off the rails without re-parsing the document.  Soft
//! failures — default fills, coercions, tolerated subtrees — are not errors
//! at all; they surface as `tracing` debug events instead.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DecodeError>;

#[derive(Debug, Error)]
pub enum DecodeError {
    /// The document could not be parsed as JSON at all.
    #[error("document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level value is valid JSON but not an object.
    #[error("top-level value is not a JSON object")]
    TopLevel,

    /// A required field was absent (or `null`) and no default applied.
    #[error("`{path}`: required field is missing")]
    MissingField { path: String },

    /// A field was present with an unexpected JSON type and could not be
    /// coerced (or coercion was disabled).
    #[error("`{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A role/kind tag outside the closed set of recognised variants.
    ///
    /// Deliberately distinct from [`DecodeError::TypeMismatch`] so callers
    /// can tell “new provider feature” apart from “malformed data”.
    #[error("`{path}`: unknown discriminant `{value}` (known: {})", .known.join(", "))]
    UnknownDiscriminant {
        path: String,
        value: String,
        known: &'static [&'static str],
    },

    /// Every candidate shape of a multi-shape field failed.  The attempts
    /// are kept in priority order for diagnosability.
    #[error("`{path}`: none of the candidate shapes matched: {}", fmt_attempts(.attempts))]
    NoShapeMatched {
        path: String,
        attempts: Vec<ShapeAttempt>,
    },

    /// A nested subtree that is decoded with derived `Deserialize` (tool
    /// calls, logprobs, …) failed to conform.
    #[error("`{path}`: {reason}")]
    Invalid { path: String, reason: String },
}

/// One failed candidate of a multi-shape decode: the shape's documented
/// name plus the error it produced.
#[derive(Debug)]
pub struct ShapeAttempt {
    pub shape: &'static str,
    pub error: Box<DecodeError>,
}

fn fmt_attempts(attempts: &[ShapeAttempt]) -> String {
    attempts
        .iter()
        .map(|attempt| format!("{} ({})", attempt.shape, attempt.error))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_exhaustion_message_lists_every_attempt_in_order() {
        let error = DecodeError::NoShapeMatched {
            path: "content".into(),
            attempts: vec![
                ShapeAttempt {
                    shape: "string",
                    error: Box::new(DecodeError::TypeMismatch {
                        path: "content".into(),
                        expected: "string",
                        found: "number",
                    }),
                },
                ShapeAttempt {
                    shape: "list of content parts",
                    error: Box::new(DecodeError::TypeMismatch {
                        path: "content".into(),
                        expected: "array",
                        found: "number",
                    }),
                },
            ],
        };

        let rendered = error.to_string();
        let string_at = rendered.find("string (").unwrap();
        let parts_at = rendered.find("list of content parts (").unwrap();
        assert!(string_at < parts_at);
    }

    #[test]
    fn unknown_discriminant_message_names_the_closed_set() {
        let error = DecodeError::UnknownDiscriminant {
            path: "role".into(),
            value: "carrier-pigeon".into(),
            known: &["system", "user"],
        };

        assert_eq!(
            error.to_string(),
            "`role`: unknown discriminant `carrier-pigeon` (known: system, user)"
        );
    }
}
