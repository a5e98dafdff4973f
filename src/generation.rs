//! Last-generation-wins coalescing for interactive callers.
//!
//! Each edit of the input takes a fresh [`Generation`] from a [`Latest`]
//! counter. Work runs synchronously for a given generation; its result is
//! only handed back if no newer generation was issued in the meantime.
//! Nothing is merged: a stale result is dropped whole.
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Monotonically increasing tag of one input state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A result tagged with the generation it was computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagged<T> {
    pub generation: Generation,
    pub value: T,
}

/// Issues generations and decides which results are still wanted.
#[derive(Debug, Default)]
pub struct Latest {
    current: AtomicU64,
}

impl Latest {
    pub const fn new() -> Self {
        Self {
            current: AtomicU64::new(0),
        }
    }

    /// Tag a new input state. Every earlier generation becomes stale.
    #[inline]
    pub fn next(&self) -> Generation {
        Generation(self.current.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// The newest generation issued so far (`0` before the first edit).
    #[inline]
    pub fn current(&self) -> Generation {
        Generation(self.current.load(Ordering::Acquire))
    }

    #[inline]
    pub fn is_current(&self, generation: Generation) -> bool {
        self.current() == generation
    }

    /// Keep `value` only if `generation` is still the newest one.
    pub fn settle<T>(&self, generation: Generation, value: T) -> Option<Tagged<T>> {
        if self.is_current(generation) {
            Some(Tagged { generation, value })
        } else {
            debug!(
                stale = generation.get(),
                current = self.current().get(),
                "discarding stale result"
            );
            None
        }
    }

    /// Run `work` on `input` for `generation` and settle the outcome.
    pub fn run<I, T>(
        &self,
        generation: Generation,
        input: I,
        work: impl FnOnce(I) -> T,
    ) -> Option<Tagged<T>> {
        if !self.is_current(generation) {
            debug!(stale = generation.get(), "skipping superseded input");
            return None;
        }
        let value = work(input);
        self.settle(generation, value)
    }
}
