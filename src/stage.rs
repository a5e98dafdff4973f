//! Pipeline stage abstraction.
//!
//! Every stage is a pure `Cow<str> -> Cow<str>` step. `needs_apply` is the
//! fast pre-check: when it returns `false` the pipeline hands the input back
//! untouched, so a clean text flows through a whole pipeline without a single
//! allocation.

pub mod change_case;
pub mod strip_hidden;

use std::borrow::Cow;

/// A single text transformation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used in logs and for lookup by name.
    fn name(&self) -> &'static str;

    /// Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must return `text` itself (not a copy)
    /// when nothing changes.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}
