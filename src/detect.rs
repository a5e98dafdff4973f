//! Decompose text into annotated Unicode scalar values.
//!
//! One record per scalar value, in input order. Concatenating every record's
//! raw text reconstructs the input exactly. Both front doors are lazy,
//! `Clone`-able iterators, so a scan can be restarted or replayed for free.
use crate::registry::{HiddenChar, classify};
use std::char::REPLACEMENT_CHARACTER;
use std::iter::FusedIterator;
use std::str::CharIndices;

/// The exact input units a record was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawText<'a> {
    Utf8(&'a str),
    /// One unit for BMP scalars and lone surrogates, two for a surrogate pair.
    Utf16(&'a [u16]),
}

impl<'a> RawText<'a> {
    /// Length in input units (bytes or UTF-16 code units).
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            RawText::Utf8(s) => s.len(),
            RawText::Utf16(units) => units.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append as UTF-8. A lone surrogate becomes U+FFFD.
    #[inline]
    pub fn push_to(&self, out: &mut String) {
        match self {
            RawText::Utf8(s) => out.push_str(s),
            RawText::Utf16(units) => out.extend(
                char::decode_utf16(units.iter().copied())
                    .map(|r| r.unwrap_or(REPLACEMENT_CHARACTER)),
            ),
        }
    }

    /// Append as UTF-16. Lone surrogates are kept as-is.
    #[inline]
    pub fn push_utf16(&self, out: &mut Vec<u16>) {
        match self {
            RawText::Utf8(s) => out.extend(s.encode_utf16()),
            RawText::Utf16(units) => out.extend_from_slice(units),
        }
    }
}

/// One scalar value of the input and what the registry says about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotated<'a> {
    pub scalar: u32,
    pub raw: RawText<'a>,
    /// Present iff the scalar value is hidden.
    pub class: Option<&'static HiddenChar>,
    /// 0-based position in the scalar-value sequence.
    pub index: usize,
    /// Position of `raw` in the input, in input units.
    pub offset: usize,
}

impl Annotated<'_> {
    #[inline(always)]
    pub fn is_hidden(&self) -> bool {
        self.class.is_some()
    }

    #[inline]
    pub fn as_char(&self) -> char {
        char::from_u32(self.scalar).unwrap_or(REPLACEMENT_CHARACTER)
    }

    /// `true` for the stand-in record of an unpaired UTF-16 surrogate.
    #[inline]
    pub fn is_lone_surrogate(&self) -> bool {
        matches!(self.raw, RawText::Utf16([unit]) if (0xD800..=0xDFFF).contains(unit))
    }
}

/// Annotate every scalar value of `text`.
pub fn detect(text: &str) -> Vec<Annotated<'_>> {
    Detect::new(text).collect()
}

/// Annotate every scalar value of UTF-16 input.
///
/// Surrogate pairs produce a single record. An unpaired surrogate produces a
/// visible U+FFFD record whose raw text is the lone unit, so decomposition
/// stays lossless.
pub fn detect_utf16(units: &[u16]) -> Vec<Annotated<'_>> {
    DetectUtf16::new(units).collect()
}

#[derive(Debug, Clone)]
pub struct Detect<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
    index: usize,
}

impl<'a> Detect<'a> {
    #[inline]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices(),
            index: 0,
        }
    }
}

impl<'a> Iterator for Detect<'a> {
    type Item = Annotated<'a>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (offset, c) = self.chars.next()?;
        let index = self.index;
        self.index += 1;
        Some(Annotated {
            scalar: c as u32,
            raw: RawText::Utf8(&self.text[offset..offset + c.len_utf8()]),
            class: classify(c as u32),
            index,
            offset,
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl FusedIterator for Detect<'_> {}

#[derive(Debug, Clone)]
pub struct DetectUtf16<'a> {
    units: &'a [u16],
    pos: usize,
    index: usize,
}

impl<'a> DetectUtf16<'a> {
    #[inline]
    pub fn new(units: &'a [u16]) -> Self {
        Self {
            units,
            pos: 0,
            index: 0,
        }
    }
}

impl<'a> Iterator for DetectUtf16<'a> {
    type Item = Annotated<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.units.get(self.pos..).filter(|r| !r.is_empty())?;
        let (scalar, width) = match char::decode_utf16(rest.iter().copied()).next()? {
            Ok(c) => (c as u32, c.len_utf16()),
            Err(_) => (REPLACEMENT_CHARACTER as u32, 1),
        };
        let offset = self.pos;
        let index = self.index;
        self.pos += width;
        self.index += 1;
        Some(Annotated {
            scalar,
            raw: RawText::Utf16(&rest[..width]),
            class: classify(scalar),
            index,
            offset,
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.units.len() - self.pos;
        (left.div_ceil(2), Some(left))
    }
}

impl FusedIterator for DetectUtf16<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Category;

    fn rebuild(records: &[Annotated<'_>]) -> String {
        let mut out = String::new();
        for r in records {
            r.raw.push_to(&mut out);
        }
        out
    }

    #[test]
    fn empty_input() {
        assert!(detect("").is_empty());
        assert!(detect_utf16(&[]).is_empty());
    }

    #[test]
    fn flags_hidden_characters() {
        let records = detect("be\u{200B}hind");
        assert_eq!(records.len(), 7);
        let zwsp = &records[2];
        assert!(zwsp.is_hidden());
        assert_eq!(zwsp.scalar, 0x200B);
        assert_eq!(zwsp.class.map(|c| c.category), Some(Category::ZeroWidth));
        assert!(records.iter().filter(|r| r.is_hidden()).count() == 1);
    }

    #[test]
    fn positions_count_scalars_not_bytes() {
        let records = detect("é\u{FEFF}x");
        assert_eq!(records[1].index, 1);
        assert_eq!(records[1].offset, 2);
        assert_eq!(records[2].index, 2);
        assert_eq!(records[2].offset, 5);
    }

    #[test]
    fn lossless_decomposition() {
        let text = "This text contains so many mysteries  …\tor be\u{200B}hind\u{FEFF}\u{AD}d 🦀";
        assert_eq!(rebuild(&detect(text)), text);
    }

    #[test]
    fn astral_scalar_is_one_record() {
        let records = detect("a🦀\u{1D173}b");
        assert_eq!(records.len(), 4);
        assert_eq!(records[1].scalar, 0x1F980);
        assert!(!records[1].is_hidden());
        assert!(records[2].is_hidden());
    }

    #[test]
    fn surrogate_pair_is_one_record() {
        let units: Vec<u16> = "x\u{1D173}y".encode_utf16().collect();
        assert_eq!(units.len(), 4);
        let records = detect_utf16(&units);
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].scalar, 0x1D173);
        assert_eq!(records[1].raw.len(), 2);
        assert_eq!(records[1].offset, 1);
        assert_eq!(records[2].offset, 3);
        assert!(records[1].is_hidden());
    }

    #[test]
    fn lone_surrogate_is_visible_replacement() {
        let units: [u16; 4] = [0x0061, 0xD800, 0x0062, 0xDC00];
        let records = detect_utf16(&units);
        assert_eq!(records.len(), 4);
        for r in [&records[1], &records[3]] {
            assert_eq!(r.scalar, 0xFFFD);
            assert!(!r.is_hidden());
            assert!(r.is_lone_surrogate());
        }
        let mut rebuilt = Vec::new();
        for r in &records {
            r.raw.push_utf16(&mut rebuilt);
        }
        assert_eq!(rebuilt, units);
    }

    #[test]
    fn restartable() {
        let scan = Detect::new("a\u{200E}b");
        let replay = scan.clone();
        assert_eq!(scan.collect::<Vec<_>>(), replay.collect::<Vec<_>>());
    }
}
