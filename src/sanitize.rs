//! Fold an annotated sequence back into clean text.
//!
//! Visible records pass through untouched, viable hidden records become a
//! single U+0020, everything else hidden is dropped. The result never contains
//! a registered codepoint, so a second pass is a no-op.
use crate::{
    detect::{Annotated, Detect, DetectUtf16},
    registry::is_hidden,
    unicode::SPACE,
};
use std::borrow::Cow;

/// What a single record contributes to the cleaned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    Keep,
    Space,
    Drop,
}

impl Fate {
    #[inline(always)]
    pub fn of(record: &Annotated<'_>) -> Self {
        match record.class {
            None => Fate::Keep,
            Some(class) if class.viable => Fate::Space,
            Some(_) => Fate::Drop,
        }
    }
}

/// Clean an annotated sequence.
pub fn sanitize(records: &[Annotated<'_>]) -> String {
    sanitize_iter(records.iter().copied())
}

/// Clean any stream of records, e.g. a [`Detect`] scan.
pub fn sanitize_iter<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = Annotated<'a>>,
{
    let records = records.into_iter();
    let mut out = String::with_capacity(records.size_hint().0);
    for record in records {
        match Fate::of(&record) {
            Fate::Keep => record.raw.push_to(&mut out),
            Fate::Space => out.push(SPACE),
            Fate::Drop => {}
        }
    }
    out
}

/// `true` if any scalar value of `text` is registered as hidden.
#[inline]
pub fn contains_hidden(text: &str) -> bool {
    text.chars().any(is_hidden)
}

/// `sanitize(detect(text))`, zero-copy when nothing is hidden.
pub fn sanitize_str(text: &str) -> Cow<'_, str> {
    if !contains_hidden(text) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(sanitize_iter(Detect::new(text)))
}

/// UTF-16 counterpart of [`sanitize_str`]. Lone surrogates survive untouched.
pub fn sanitize_utf16(units: &[u16]) -> Cow<'_, [u16]> {
    let scan = DetectUtf16::new(units);
    if !scan.clone().any(|r| r.is_hidden()) {
        return Cow::Borrowed(units);
    }
    let mut out = Vec::with_capacity(units.len());
    for record in scan {
        match Fate::of(&record) {
            Fate::Keep => record.raw.push_utf16(&mut out),
            Fate::Space => out.push(SPACE as u16),
            Fate::Drop => {}
        }
    }
    Cow::Owned(out)
}
