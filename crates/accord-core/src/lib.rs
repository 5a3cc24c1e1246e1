//! # `accord-core` – the lenient decoding engine
//!
//! Provider-agnostic building blocks for decoding heterogeneous JSON chat
//! responses without hard-failing on backend quirks:
//!
//! * [`object::ObjectDecoder`] – lenient field reader: defaults, primitive
//!   coercion, tolerant optional subtrees, strict discriminant reads.
//! * [`one_of::decode_one_of`] – fixed-priority shape-candidate decoding
//!   with aggregated failure.
//! * [`merge::first_present`] – ordered-priority merge for cross-provider
//!   field aliases.
//! * [`error::DecodeError`] – the path-carrying failure taxonomy.
//! * [`options::DecodeOptions`] – caller-supplied leniency switches, passed
//!   through every nested decode as ambient context.
//!
//! The engine is purely synchronous and free of shared mutable state: one
//! immutable document in, one immutable value (or one structured error)
//! out.  Wire models live in adapter crates (`accord-openai`); this crate
//! knows nothing about any concrete provider.

pub mod error;
pub mod merge;
pub mod object;
pub mod one_of;
pub mod options;
