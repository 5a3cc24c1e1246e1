use accord_core::{
    error::{DecodeError, Result},
    object::{ObjectDecoder, json_type_name},
    one_of::decode_one_of,
    options::DecodeOptions,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Part kinds recognised by [`ContentPart::decode`].
const KNOWN_PART_TYPES: &[&str] = &["text", "image_url", "input_audio"];

/// Content of a user message.
///
/// The wire carries either a plain string or a list of structured parts,
/// with no discriminant to tell them apart — the union is resolved purely
/// by trying each candidate shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UserContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl UserContent {
    /// Shape priority is fixed: `string` first, then `list of content
    /// parts`.  Reordering the candidates is a breaking behavioural change.
    pub fn decode(value: &Value, path: &str, options: DecodeOptions) -> Result<Self> {
        let as_text = |value: &Value| -> Result<UserContent> {
            match value {
                Value::String(text) => Ok(UserContent::Text(text.clone())),
                other => Err(DecodeError::TypeMismatch {
                    path: path.to_owned(),
                    expected: "string",
                    found: json_type_name(other),
                }),
            }
        };

        let as_parts = |value: &Value| -> Result<UserContent> {
            let Some(elements) = value.as_array() else {
                return Err(DecodeError::TypeMismatch {
                    path: path.to_owned(),
                    expected: "array",
                    found: json_type_name(value),
                });
            };
            let mut parts = Vec::with_capacity(elements.len());
            for (index, element) in elements.iter().enumerate() {
                parts.push(ContentPart::decode(
                    element,
                    &format!("{path}[{index}]"),
                    options,
                )?);
            }
            Ok(UserContent::Parts(parts))
        };

        decode_one_of(
            value,
            path,
            &[("string", &as_text), ("list of content parts", &as_parts)],
        )
    }
}

/// One structured element of multi-modal user content, keyed by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
    InputAudio { input_audio: InputAudio },
}

impl ContentPart {
    /// Same two-state dispatch as message params: read `type`, then decode
    /// the full payload as that variant.  An unrecognised part kind is a
    /// hard failure — it means a genuinely new content modality.
    pub fn decode(value: &Value, path: &str, options: DecodeOptions) -> Result<Self> {
        let fields = ObjectDecoder::at(value, path.to_owned(), options)?;

        match fields.discriminant("type")? {
            "text" => Ok(Self::Text {
                text: fields.string("text")?,
            }),
            "image_url" => Ok(Self::ImageUrl {
                image_url: fields.typed("image_url")?,
            }),
            "input_audio" => Ok(Self::InputAudio {
                input_audio: fields.typed("input_audio")?,
            }),
            unknown => Err(DecodeError::UnknownDiscriminant {
                path: fields.field_path("type"),
                value: unknown.to_owned(),
                known: KNOWN_PART_TYPES,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageUrl {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputAudio {
    /// Base64-encoded audio payload.
    pub data: String,
    pub format: String,
}
