//! # `accord` – The umbrella crate
//!
//! A *one-stop import* gluing together the building-block crates in the
//! workspace:
//!
//! | Crate              | What it provides                                                        |
//! |--------------------|-------------------------------------------------------------------------|
//! | **`accord-core`**  | The lenient decoding engine: errors, options, field reader, shape candidates, alias merging |
//! | **`accord-openai`**| The OpenAI-compatible `api_v1` wire model and result decoder *(optional)* |
//!
//! The `openai` feature (on by default) pulls in the wire-model crate; with
//! it disabled only the provider-agnostic engine remains.
//!
//! ## Design philosophy
//!
//! * **Never hard-fail on a quirk** – unknown extra fields, off-type
//!   scalars, missing optionals and broken usage reports all degrade
//!   gracefully; only genuinely structural problems (missing `id`, an
//!   unknown message role) abort a decode.
//! * **Leniency stays observable** – every default fill, coercion and
//!   tolerated subtree emits a `tracing` debug event naming the field path.
//! * **One result model** – callers never branch on which backend answered;
//!   provider detection is implicit, by shape.
//!
//! ## Quick example
//!
//! ```rust
//! use accord::api_v1::ChatCompletionResult;
//! use accord::options::DecodeOptions;
//!
//! let raw = r#"{
//!     "id": "c1",
//!     "object": "chat.completion",
//!     "created": 1700000000,
//!     "model": "gpt-x",
//!     "choices": [{
//!         "index": 0,
//!         "finish_reason": "stop",
//!         "message": { "role": "assistant", "content": "hi", "reasoning_content": "because" }
//!     }]
//! }"#;
//!
//! let result = ChatCompletionResult::decode_str(raw, DecodeOptions::default())?;
//! assert_eq!(result.choices[0].message.content.as_deref(), Some("hi"));
//! assert_eq!(result.choices[0].message.reasoning.as_deref(), Some("because"));
//! # Ok::<(), accord::error::DecodeError>(())
//! ```

pub use accord_core::{error, merge, object, one_of, options};

#[cfg(feature = "openai")]
pub use accord_openai::api_v1;
