use serde::{Deserialize, Serialize};

/// Wire value of `object` on a non-streaming chat completion.  Expected
/// but not enforced: the field decodes as an open string.
pub const CHAT_COMPLETION_OBJECT: &str = "chat.completion";

/// Known `finish_reason` values.
///
/// The field is modelled as an open string because new reasons keep
/// appearing across providers; these constants only name the ones observed
/// so far.  No validation happens at decode time.
pub mod finish_reason {
    pub const STOP: &str = "stop";
    pub const LENGTH: &str = "length";
    pub const TOOL_CALLS: &str = "tool_calls";
    pub const CONTENT_FILTER: &str = "content_filter";
    pub const FUNCTION_CALL: &str = "function_call";
    pub const ERROR: &str = "error";
}

/// Processing tier that actually served the request.
///
/// Kept as a closed enum — the observed value set is small and stable.  An
/// unrecognised wire value decodes as *absent* (with a debug log), so a new
/// tier degrades instead of failing the whole result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    Auto,
    Default,
    Flex,
    Scale,
    Priority,
}

impl ServiceTier {
    pub(crate) fn from_wire(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(Self::Auto),
            "default" => Some(Self::Default),
            "flex" => Some(Self::Flex),
            "scale" => Some(Self::Scale),
            "priority" => Some(Self::Priority),
            _ => None,
        }
    }
}

/// Token accounting for one completed request.
///
/// Decoded through the tolerant path: some backends put placeholders here
/// (`"usage": "n/a"`) instead of omitting the field, and a broken usage
/// report must never sink an otherwise good result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    pub completion_tokens: i64,
    pub prompt_tokens: i64,
    pub total_tokens: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_tokens_details: Option<CompletionTokensDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_tokens_details: Option<PromptTokensDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionTokensDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_tokens: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_tokens: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_prediction_tokens: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejected_prediction_tokens: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptTokensDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_tokens: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_tokens: Option<i64>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn usage_decodes_with_and_without_breakdowns() {
        let bare: Usage = serde_json::from_value(json!({
            "completion_tokens": 9,
            "prompt_tokens": 20,
            "total_tokens": 29,
        }))
        .unwrap();
        assert_eq!(bare.total_tokens, 29);
        assert!(bare.completion_tokens_details.is_none());

        let detailed: Usage = serde_json::from_value(json!({
            "completion_tokens": 9,
            "prompt_tokens": 20,
            "total_tokens": 29,
            "completion_tokens_details": { "reasoning_tokens": 4, "audio_tokens": 0 },
            "prompt_tokens_details": { "cached_tokens": 16 },
        }))
        .unwrap();
        assert_eq!(
            detailed.completion_tokens_details.unwrap().reasoning_tokens,
            Some(4)
        );
        assert_eq!(detailed.prompt_tokens_details.unwrap().cached_tokens, Some(16));
    }

    #[test]
    fn service_tier_wire_names() {
        assert_eq!(ServiceTier::from_wire("flex"), Some(ServiceTier::Flex));
        assert_eq!(ServiceTier::from_wire("priority"), Some(ServiceTier::Priority));
        assert_eq!(ServiceTier::from_wire("economy"), None);
    }
}
