use accord_core::{
    error::Result,
    merge::first_present,
    object::ObjectDecoder,
    options::DecodeOptions,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    common::{ServiceTier, Usage},
    tools::ToolCall,
};

/// One fully-decoded chat completion, provider-agnostic.
///
/// This is the single result type for the primary provider and every
/// loosely-compatible backend; the decoder absorbs the wire-level
/// differences so callers never branch on who answered.  Construction goes
/// through [`ChatCompletionResult::decode`] exclusively.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionResult {
    pub id: String,
    /// Creation time in unix seconds.
    pub created: i64,
    pub model: String,
    /// Expected to be [`super::CHAT_COMPLETION_OBJECT`], not enforced.
    pub object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_tier: Option<ServiceTier>,
    /// Optional even though the primary protocol marks it required —
    /// observed backends omit it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_fingerprint: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    /// Non-standard citation URLs some backends attach to the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<String>>,
}

/// One candidate completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    pub index: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<ChoiceLogprobs>,
    pub message: ChatResponseMessage,
    /// Open string; known values in [`super::finish_reason`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// The generated content unit of a choice.
///
/// All payload fields may be simultaneously absent — some backends emit
/// messages with nothing in them, and that decodes successfully.  Whether
/// an all-absent message is useful is the caller's judgement, not a wire
/// error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatResponseMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refusal: Option<String>,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Vec<Annotation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    /// Merged from the wire fields `reasoning` and `reasoning_content`,
    /// in that priority order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
}

/// A citation span anchoring part of the content to a source URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub r#type: String,
    pub url_citation: UrlCitation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlCitation {
    /// Character offsets into the owning message's `content`.
    pub start_index: i64,
    pub end_index: i64,
    pub title: String,
    pub url: String,
}

/// Audio payload of a voice response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioResponse {
    pub id: String,
    /// Unix seconds after which the audio id can no longer be referenced.
    pub expires_at: i64,
    /// Base64-encoded audio bytes.
    pub data: String,
    pub transcript: String,
}

/// Log-probability report for one choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceLogprobs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<TokenLogprob>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refusal: Option<Vec<TokenLogprob>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenLogprob {
    pub token: String,
    pub logprob: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<Vec<u8>>,
    #[serde(default)]
    pub top_logprobs: Vec<TopLogprob>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopLogprob {
    pub token: String,
    pub logprob: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes: Option<Vec<u8>>,
}

impl ChatCompletionResult {
    /// Decode one chat-completion document.
    ///
    /// Hard failures (missing `id` or `choices`, top level not an object)
    /// abort the whole decode with a path-carrying error; everything else
    /// degrades per the ambient [`DecodeOptions`].  All-or-nothing at this
    /// boundary — a failed decode never hands back a partial aggregate.
    pub fn decode(document: &Value, options: DecodeOptions) -> Result<Self> {
        let fields = ObjectDecoder::root(document, options)?;

        let mut choices = Vec::new();
        for (index, element) in fields.array("choices")?.iter().enumerate() {
            let fields = ObjectDecoder::at(element, format!("choices[{index}]"), options)?;
            choices.push(Choice::decode(&fields)?);
        }

        Ok(Self {
            id: fields.string("id")?,
            created: fields.i64_or("created", 0)?,
            model: fields.string_or("model", "")?,
            object: fields.string_or("object", "")?,
            service_tier: decode_service_tier(&fields)?,
            system_fingerprint: fields.opt_string("system_fingerprint")?,
            choices,
            // Tolerant allow-list: `usage` is the one subtree observed
            // non-conforming in the wild (`"usage": "n/a"`, empty objects).
            usage: fields.tolerant("usage"),
            citations: fields.opt_string_array("citations")?,
        })
    }

    /// Parse and decode in one step.
    pub fn decode_str(document: &str, options: DecodeOptions) -> Result<Self> {
        let value: Value = serde_json::from_str(document)?;
        Self::decode(&value, options)
    }

    /// Parse and decode a raw body in one step.
    pub fn decode_slice(document: &[u8], options: DecodeOptions) -> Result<Self> {
        let value: Value = serde_json::from_slice(document)?;
        Self::decode(&value, options)
    }
}

impl Choice {
    fn decode(fields: &ObjectDecoder<'_>) -> Result<Self> {
        Ok(Self {
            index: fields.i64_or("index", 0)?,
            logprobs: fields.opt_typed("logprobs")?,
            message: ChatResponseMessage::decode(&fields.object("message")?)?,
            finish_reason: fields.opt_string("finish_reason")?,
        })
    }
}

impl ChatResponseMessage {
    fn decode(fields: &ObjectDecoder<'_>) -> Result<Self> {
        // `reasoning` and `reasoning_content` are the same logical field
        // under different provider names; priority is fixed.
        let reasoning = first_present([
            fields.opt_string("reasoning")?,
            fields.opt_string("reasoning_content")?,
        ]);

        Ok(Self {
            content: fields.opt_string("content")?,
            refusal: fields.opt_string("refusal")?,
            role: fields.string_or("role", "assistant")?,
            annotations: fields.opt_typed("annotations")?,
            audio: fields.opt_typed("audio")?,
            tool_calls: fields.opt_typed("tool_calls")?,
            reasoning,
        })
    }
}

fn decode_service_tier(fields: &ObjectDecoder<'_>) -> Result<Option<ServiceTier>> {
    let Some(raw) = fields.opt_string("service_tier")? else {
        return Ok(None);
    };
    let tier = ServiceTier::from_wire(&raw);
    if tier.is_none() {
        tracing::debug!(
            path = %fields.field_path("service_tier"),
            value = %raw,
            "ignoring unknown service tier"
        );
    }
    Ok(tier)
}
