//! Caller-tunable leniency switches.
//!
//! The option set is handed to the top-level decode call once and threaded
//! through every nested decode as ambient context — it is never re-derived
//! per subtree.  Both flags default to **on** because tolerating provider
//! quirks is the whole point of this engine; `strict()` exists for callers
//! that want a conforming-or-bust decode (mostly tests and debugging).

/// Flags enabling/disabling specific leniencies of the decoding engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// When a required field is absent or `null` and the call site supplies
    /// a default, return the default instead of failing.
    pub fill_defaults: bool,

    /// When a scalar arrives with the wrong primitive type, attempt a
    /// textual round-trip (`"42"` → `42`, `42` → `"42"`) before failing.
    pub coerce_primitives: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            fill_defaults: true,
            coerce_primitives: true,
        }
    }
}

impl DecodeOptions {
    /// All leniencies enabled.  Equivalent to `Default::default()`.
    pub fn lenient() -> Self {
        Self::default()
    }

    /// All leniencies disabled: absent fields and off-type scalars fail
    /// even where the call site documents a fallback.
    pub fn strict() -> Self {
        Self {
            fill_defaults: false,
            coerce_primitives: false,
        }
    }

    pub fn with_fill_defaults(mut self, enabled: bool) -> Self {
        self.fill_defaults = enabled;
        self
    }

    pub fn with_primitive_coercion(mut self, enabled: bool) -> Self {
        self.coerce_primitives = enabled;
        self
    }
}
