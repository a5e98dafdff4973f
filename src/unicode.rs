// Character predicates and casing helpers shared by the tokenizer and the
// case transformer. Case boundaries are ASCII-only on purpose: `[a-z][A-Z]`
// and `[A-Z][A-Z][a-z]` are the only shapes that split a word.

/// Separator inserted between tokens and emitted for viable hidden chars.
pub const SPACE: char = ' ';

/// `oW` → boundary before `W`.
#[inline(always)]
pub const fn is_camel_boundary(prev: char, curr: char) -> bool {
    prev.is_ascii_lowercase() && curr.is_ascii_uppercase()
}

/// `ABc` → boundary before `B`.
#[inline(always)]
pub const fn is_acronym_boundary(prev: char, curr: char, next: Option<char>) -> bool {
    match next {
        Some(next) => {
            prev.is_ascii_uppercase() && curr.is_ascii_uppercase() && next.is_ascii_lowercase()
        }
        None => false,
    }
}

/// `_` and `-` act as spaces when auto-splitting.
#[inline(always)]
pub const fn is_word_punct(c: char) -> bool {
    matches!(c, '_' | '-')
}

/// Push `c` uppercased; full mapping, so `ß` becomes `SS`.
#[inline(always)]
pub fn push_upper(out: &mut String, c: char) {
    if c.is_ascii() {
        out.push(c.to_ascii_uppercase());
    } else {
        out.extend(c.to_uppercase());
    }
}

/// Split `s` before its first alphanumeric scalar: `("(", "hello)")`.
/// Returns `None` when `s` has no letter or digit at all.
#[inline]
fn split_at_first_letter(s: &str) -> Option<(&str, char, &str)> {
    let (i, first) = s.char_indices().find(|(_, c)| c.is_alphanumeric())?;
    Some((&s[..i], first, &s[i + first.len_utf8()..]))
}

/// Push `s` with its first letter uppercased. Leading punctuation is copied
/// through, so `'world` becomes `'World`.
#[inline]
pub fn push_upper_first(out: &mut String, s: &str) {
    match split_at_first_letter(s) {
        Some((lead, first, rest)) => {
            out.push_str(lead);
            push_upper(out, first);
            out.push_str(rest);
        }
        None => out.push_str(s),
    }
}

/// Push `s` with its first letter uppercased and everything after it lowered.
#[inline]
pub fn push_capitalized(out: &mut String, s: &str) {
    match split_at_first_letter(s) {
        Some((lead, first, rest)) => {
            out.push_str(lead);
            push_upper(out, first);
            out.push_str(&rest.to_lowercase());
        }
        None => out.push_str(s),
    }
}

/// `U+XXXX` marker, at least four uppercase hex digits.
#[inline]
pub fn codepoint_marker(scalar: u32) -> String {
    format!("U+{scalar:04X}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_boundaries() {
        assert!(is_camel_boundary('o', 'W'));
        assert!(!is_camel_boundary('O', 'W'));
        assert!(!is_camel_boundary('1', 'W'));
        assert!(!is_camel_boundary('é', 'W')); // ASCII-only
    }

    #[test]
    fn acronym_boundaries() {
        assert!(is_acronym_boundary('B', 'C', Some('d')));
        assert!(!is_acronym_boundary('B', 'C', Some('D')));
        assert!(!is_acronym_boundary('B', 'C', None));
        assert!(!is_acronym_boundary('b', 'C', Some('d')));
    }

    #[test]
    fn capitalization_helpers() {
        let mut out = String::new();
        push_upper_first(&mut out, "hELLO");
        assert_eq!(out, "HELLO");

        out.clear();
        push_capitalized(&mut out, "hELLO");
        assert_eq!(out, "Hello");

        out.clear();
        push_upper_first(&mut out, "ßtraße");
        assert_eq!(out, "SStraße");

        out.clear();
        push_capitalized(&mut out, "");
        assert_eq!(out, "");
    }

    #[test]
    fn first_letter_skips_leading_punctuation() {
        let mut out = String::new();
        push_upper_first(&mut out, "(hELLO)");
        assert_eq!(out, "(HELLO)");

        out.clear();
        push_capitalized(&mut out, "«wORLD»");
        assert_eq!(out, "«World»");

        out.clear();
        push_capitalized(&mut out, "'...");
        assert_eq!(out, "'...");
    }

    #[test]
    fn markers() {
        assert_eq!(codepoint_marker(0x9), "U+0009");
        assert_eq!(codepoint_marker(0x1D173), "U+1D173");
    }
}
