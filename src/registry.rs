//! Hidden-character classification registry.
//!
//! A compile-time `phf` table keyed by codepoint. Built once, never mutated,
//! safe to read from any thread without synchronization.
pub mod data;

use serde::Serialize;
use std::fmt;

use crate::{registry::data::REGISTRY, unicode::codepoint_marker};

/// Broad family a hidden character belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ZeroWidth,
    Whitespace,
    Control,
    BidiControl,
    Formatting,
    SoftHyphen,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::ZeroWidth,
        Category::Whitespace,
        Category::Control,
        Category::BidiControl,
        Category::Formatting,
        Category::SoftHyphen,
        Category::Other,
    ];

    #[inline(always)]
    pub const fn name(self) -> &'static str {
        match self {
            Category::ZeroWidth => "zero_width",
            Category::Whitespace => "whitespace",
            Category::Control => "control",
            Category::BidiControl => "bidi_control",
            Category::Formatting => "formatting",
            Category::SoftHyphen => "soft_hyphen",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata for one registered hidden codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HiddenChar {
    pub codepoint: u32,
    pub category: Category,
    /// Acted as a word separator: sanitizing leaves a single U+0020 behind.
    pub viable: bool,
    pub name: &'static str,
    /// Visible stand-in for previews. `None` renders as a `U+XXXX` marker.
    pub glyph: Option<&'static str>,
}

impl HiddenChar {
    /// `U+XXXX` marker, uppercase hex, at least four digits.
    pub fn marker(&self) -> String {
        codepoint_marker(self.codepoint)
    }

    /// What a preview shows in place of the character.
    pub fn preview(&self) -> String {
        match self.glyph {
            Some(glyph) => glyph.to_owned(),
            None => self.marker(),
        }
    }
}

/// Look up a codepoint. Unknown codepoints (and U+0020) are not hidden.
#[inline]
pub fn classify(codepoint: u32) -> Option<&'static HiddenChar> {
    REGISTRY.get(&codepoint)
}

#[inline(always)]
pub fn classify_char(c: char) -> Option<&'static HiddenChar> {
    classify(c as u32)
}

#[inline(always)]
pub fn is_hidden(c: char) -> bool {
    REGISTRY.contains_key(&(c as u32))
}

/// Every registered record, ordered by codepoint.
pub fn all() -> Vec<&'static HiddenChar> {
    let mut records: Vec<_> = REGISTRY.values().collect();
    records.sort_unstable_by_key(|r| r.codepoint);
    records
}
