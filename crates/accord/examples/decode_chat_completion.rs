use accord::api_v1::ChatCompletionResult;
use accord::options::DecodeOptions;

/// # Decode, leniently – one decoder, two providers
///
/// This example is the “smallest viable program” that
///
/// 1. **Decodes** a conforming primary-provider response.
/// 2. **Decodes** a quirky secondary-provider response — `created` as a
///    numeric string, reasoning under `reasoning_content`, a `usage`
///    placeholder that is not even an object.
/// 3. **Prints** both strongly-typed results; neither decode branches on
///    which backend produced the body.
///
/// ## How to run
///
/// ```bash
/// cargo run -p accord --example decode_chat_completion
/// ```
///
/// You should see output similar to:
///
/// ```text
/// primary   : "Hello there, how may I assist you today?" (usage: 21 tokens)
/// secondary : "hi" (reasoning: "because", usage: absent)
/// ```
////////////////////////////////////////////////////////////////////////////////

/// Captured body from the primary provider, verbatim.
const PRIMARY: &str = r#"{
    "id": "chatcmpl-123",
    "object": "chat.completion",
    "created": 1700000000,
    "model": "gpt-x",
    "system_fingerprint": "fp_44709d6fcb",
    "choices": [{
        "index": 0,
        "finish_reason": "stop",
        "message": { "role": "assistant", "content": "Hello there, how may I assist you today?" }
    }],
    "usage": { "prompt_tokens": 9, "completion_tokens": 12, "total_tokens": 21 }
}"#;

/// Captured body from a loosely-compatible secondary provider.
const SECONDARY: &str = r#"{
    "id": "c1",
    "object": "chat.completion",
    "created": "1700000000",
    "model": "gpt-x",
    "usage": "n/a",
    "choices": [{
        "finish_reason": "stop",
        "message": { "role": "assistant", "content": "hi", "reasoning_content": "because" }
    }]
}"#;

fn main() -> anyhow::Result<()> {
    // 1. Both bodies go through the same decoder with the same options.
    let options = DecodeOptions::default();
    let primary = ChatCompletionResult::decode_str(PRIMARY, options)?;
    let secondary = ChatCompletionResult::decode_str(SECONDARY, options)?;

    // 2. The primary response maps one-to-one.
    let message = &primary.choices[0].message;
    let tokens = primary.usage.as_ref().map(|usage| usage.total_tokens);
    println!(
        "primary   : {:?} (usage: {} tokens)",
        message.content.as_deref().unwrap_or_default(),
        tokens.unwrap_or_default(),
    );

    // 3. The secondary response decodes too: the numeric-string timestamp
    //    was coerced, the reasoning alias merged, the broken usage dropped.
    let message = &secondary.choices[0].message;
    println!(
        "secondary : {:?} (reasoning: {:?}, usage: {})",
        message.content.as_deref().unwrap_or_default(),
        message.reasoning.as_deref().unwrap_or_default(),
        if secondary.usage.is_none() { "absent" } else { "present" },
    );
    assert_eq!(secondary.created, 1_700_000_000);

    Ok(())
}
