//! Word tokenizer.
//!
//! Splits on runs of U+0020. With `auto_split`, `_` and `-` also separate,
//! and two ASCII case shapes open a new word:
//! * `oW`  → `o` | `W`   (lower followed by upper)
//! * `ABc` → `A` | `Bc`  (upper, upper, lower)
//!
//! Only separators are ever removed, so every token is a contiguous slice of
//! the input with its original casing.
use crate::unicode::{SPACE, is_acronym_boundary, is_camel_boundary, is_word_punct};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Deref;

/// A maximal run of non-separator text, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a>(&'a str);

impl<'a> Token<'a> {
    #[inline(always)]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }
}

impl Deref for Token<'_> {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Tokens in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence<'a>(SmallVec<[Token<'a>; 8]>);

impl<'a> TokenSequence<'a> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, token: &'a str) {
        if !token.is_empty() {
            self.0.push(Token(token));
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token<'a>] {
        &self.0
    }

    /// Tokens as plain string slices.
    pub fn to_strs(&self) -> Vec<&'a str> {
        self.0.iter().map(Token::as_str).collect()
    }

    /// Total byte length of all tokens plus one separator between each pair.
    #[inline]
    pub fn joined_len(&self) -> usize {
        self.0.iter().map(|t| t.len()).sum::<usize>() + self.0.len().saturating_sub(1)
    }
}

impl<'a> Deref for TokenSequence<'a> {
    type Target = [Token<'a>];

    #[inline(always)]
    fn deref(&self) -> &[Token<'a>] {
        &self.0
    }
}

impl<'a> IntoIterator for TokenSequence<'a> {
    type Item = Token<'a>;
    type IntoIter = smallvec::IntoIter<[Token<'a>; 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s TokenSequence<'a> {
    type Item = &'s Token<'a>;
    type IntoIter = std::slice::Iter<'s, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> FromIterator<&'a str> for TokenSequence<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut seq = Self::new();
        for token in iter {
            seq.push(token);
        }
        seq
    }
}

/// Split `text` into tokens. Empty or all-separator input yields no tokens.
pub fn tokenize(text: &str, auto_split: bool) -> TokenSequence<'_> {
    let mut tokens = TokenSequence::new();

    // No space byte, no auto-split: the whole input is one token.
    if !auto_split && memchr::memchr(SPACE as u8, text.as_bytes()).is_none() {
        tokens.push(text);
        return tokens;
    }

    let mut start: Option<usize> = None;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let is_separator = c == SPACE || (auto_split && is_word_punct(c));
        if is_separator {
            if let Some(s) = start.take() {
                tokens.push(&text[s..i]);
            }
        } else {
            if let Some(p) = prev.filter(|_| auto_split) {
                let next = chars.peek().map(|&(_, n)| n);
                if is_camel_boundary(p, c) || is_acronym_boundary(p, c, next) {
                    if let Some(s) = start.take() {
                        tokens.push(&text[s..i]);
                    }
                }
            }
            start.get_or_insert(i);
        }
        prev = Some(c);
    }

    if let Some(s) = start {
        tokens.push(&text[s..]);
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str, auto_split: bool) -> Vec<&str> {
        tokenize(text, auto_split).to_strs()
    }

    #[test]
    fn camel_boundary() {
        assert_eq!(words("helloWorld", true), ["hello", "World"]);
        assert_eq!(words("helloWorld", false), ["helloWorld"]);
    }

    #[test]
    fn punctuation_separators() {
        assert_eq!(words("hello_world", true), ["hello", "world"]);
        assert_eq!(words("hello-big--world", true), ["hello", "big", "world"]);
        assert_eq!(words("hello_world", false), ["hello_world"]);
    }

    #[test]
    fn acronym_boundary() {
        assert_eq!(words("ABCd", true), ["AB", "Cd"]);
        assert_eq!(words("parseHTTPRequest", true), ["parse", "HTTP", "Request"]);
        assert_eq!(words("XMLHttpRequest", true), ["XML", "Http", "Request"]);
        assert_eq!(words("ALLCAPS", true), ["ALLCAPS"]);
    }

    #[test]
    fn collapses_and_trims_space_runs() {
        assert_eq!(words("   many   spaces  here ", false), ["many", "spaces", "here"]);
        assert_eq!(words("  _-_ ", true), Vec::<&str>::new());
    }

    #[test]
    fn only_u0020_splits() {
        assert_eq!(words("tab\tseparated line\nbreak", false), ["tab\tseparated", "line\nbreak"]);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("", true).is_empty());
        assert!(tokenize("", false).is_empty());
    }

    #[test]
    fn single_token_keeps_casing() {
        assert_eq!(words("Straße", true), ["Straße"]);
        assert_eq!(words("MiXeD", false), ["MiXeD"]);
    }

    #[test]
    fn non_ascii_letters_do_not_split() {
        assert_eq!(words("éÉ", true), ["éÉ"]);
        assert_eq!(words("straßeWeg", true), ["straße", "Weg"]);
    }

    #[test]
    fn tokens_borrow_from_input() {
        let text = String::from("fooBar baz");
        let tokens = tokenize(&text, true);
        let range = text.as_bytes().as_ptr_range();
        for token in &tokens {
            assert!(range.contains(&token.as_ptr()));
        }
        assert_eq!(tokens.joined_len(), "foo Bar baz".len());
    }
}
