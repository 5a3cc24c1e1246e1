//! OpenAI-compatible wire model for chat completions, decoded leniently.
//!
//! One decoder accepts responses from the primary provider *and* from the
//! loosely-compatible backends that imitate its wire format — provider
//! detection is implicit, by shape, never a caller-supplied flag.  The
//! decoding discipline itself (defaults, coercion, tolerant subtrees,
//! shape candidates, alias merging) lives in `accord-core`; this crate
//! applies it field by field to the `v1` chat-completion schema.

pub mod api_v1;
