use accord_core::{
    error::{DecodeError, Result},
    object::ObjectDecoder,
    options::DecodeOptions,
};
use serde::Serialize;
use serde_json::Value;

use super::{content::UserContent, tools::ToolCall};

/// The closed set of roles [`MessageParam::decode`] dispatches on.
pub const KNOWN_ROLES: &[&str] = &["system", "developer", "user", "assistant", "tool"];

/// An outbound chat message, keyed by its `role` discriminant.
///
/// The set of variants is deliberately closed and exhaustively matched:
/// adding a role is a compile-time-visible change, and an unrecognised
/// role on the wire is a hard [`DecodeError::UnknownDiscriminant`] — that
/// is a genuinely new message kind the caller must hear about, not a
/// format quirk to paper over.
///
/// Serialization writes the `role` tag back into the payload, so a decoded
/// param re-encodes to its wire form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum MessageParam {
    System(SystemMessage),
    Developer(DeveloperMessage),
    User(UserMessage),
    Assistant(AssistantMessage),
    Tool(ToolMessage),
}

impl MessageParam {
    /// Two-state decode: read the `role` discriminant, then re-decode the
    /// entire payload against that variant's shape.  Single pass, no
    /// retries, no fallback variant.
    pub fn decode(value: &Value, options: DecodeOptions) -> Result<Self> {
        let fields = ObjectDecoder::root(value, options)?;

        match fields.discriminant("role")? {
            "system" => Ok(Self::System(SystemMessage::decode(&fields)?)),
            "developer" => Ok(Self::Developer(DeveloperMessage::decode(&fields)?)),
            "user" => Ok(Self::User(UserMessage::decode(&fields)?)),
            "assistant" => Ok(Self::Assistant(AssistantMessage::decode(&fields)?)),
            "tool" => Ok(Self::Tool(ToolMessage::decode(&fields)?)),
            unknown => Err(DecodeError::UnknownDiscriminant {
                path: fields.field_path("role"),
                value: unknown.to_owned(),
                known: KNOWN_ROLES,
            }),
        }
    }
}

/// Global behaviour and style instructions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemMessage {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SystemMessage {
    fn decode(fields: &ObjectDecoder<'_>) -> Result<Self> {
        Ok(Self {
            content: fields.string("content")?,
            name: fields.opt_string("name")?,
        })
    }
}

/// Replacement for `system` on newer model generations; same shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeveloperMessage {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DeveloperMessage {
    fn decode(fields: &ObjectDecoder<'_>) -> Result<Self> {
        Ok(Self {
            content: fields.string("content")?,
            name: fields.opt_string("name")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserMessage {
    pub content: UserContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserMessage {
    fn decode(fields: &ObjectDecoder<'_>) -> Result<Self> {
        let content = UserContent::decode(
            fields.required("content")?,
            &fields.field_path("content"),
            fields.options(),
        )?;
        Ok(Self {
            content,
            name: fields.opt_string("name")?,
        })
    }
}

/// A previous assistant turn echoed back to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssistantMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refusal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl AssistantMessage {
    fn decode(fields: &ObjectDecoder<'_>) -> Result<Self> {
        Ok(Self {
            content: fields.opt_string("content")?,
            refusal: fields.opt_string("refusal")?,
            name: fields.opt_string("name")?,
            tool_calls: fields.opt_typed("tool_calls")?,
        })
    }
}

/// The result of a tool invocation, answering a specific [`ToolCall`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolMessage {
    pub content: String,
    pub tool_call_id: String,
}

impl ToolMessage {
    fn decode(fields: &ObjectDecoder<'_>) -> Result<Self> {
        Ok(Self {
            content: fields.string("content")?,
            tool_call_id: fields.string("tool_call_id")?,
        })
    }
}
