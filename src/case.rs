//! Case styles and the token joiner.
//!
//! | Style                | Join | Rule                                        |
//! |----------------------|------|---------------------------------------------|
//! | `UpperCase`          | ` `  | whole string upper                          |
//! | `LowerCase`          | ` `  | whole string lower                          |
//! | `TitleCase`          | ` `  | per token: first letter upper, rest as-is   |
//! | `SentenceCase`       | ` `  | first letter upper, whole remainder lower   |
//! | `CamelCase`          | none | first token lower, then capitalized tokens  |
//! | `PascalCase`         | none | every token capitalized                     |
//! | `SnakeCase`          | `_`  | whole string lower                          |
//! | `ScreamingSnakeCase` | `_`  | whole string upper                          |
//! | `KebabCase`          | `-`  | whole string lower                          |
//! | `DotCase`            | `.`  | whole string lower                          |
//!
//! "First letter" is the first alphanumeric scalar; punctuation in front of it
//! is kept as-is. "Capitalized" means first letter upper, rest lower.
//! `SentenceCase` does not look for sentence boundaries: only the first letter
//! of the whole string is upper.
use crate::{
    token::{Token, tokenize},
    unicode::{SPACE, push_capitalized, push_upper_first},
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown case style `{0}` (expected one of: {names})", names = CaseStyle::names())]
pub struct ParseCaseStyleError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    UpperCase,
    LowerCase,
    TitleCase,
    SentenceCase,
    CamelCase,
    PascalCase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
    DotCase,
}

/// How a style treats letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Upper,
    Lower,
    Title,
    Sentence,
    Camel,
    Pascal,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 10] = [
        CaseStyle::UpperCase,
        CaseStyle::LowerCase,
        CaseStyle::TitleCase,
        CaseStyle::SentenceCase,
        CaseStyle::CamelCase,
        CaseStyle::PascalCase,
        CaseStyle::SnakeCase,
        CaseStyle::ScreamingSnakeCase,
        CaseStyle::KebabCase,
        CaseStyle::DotCase,
    ];

    /// Canonical snake_case name, also the serde name.
    pub const fn name(self) -> &'static str {
        match self {
            CaseStyle::UpperCase => "upper_case",
            CaseStyle::LowerCase => "lower_case",
            CaseStyle::TitleCase => "title_case",
            CaseStyle::SentenceCase => "sentence_case",
            CaseStyle::CamelCase => "camel_case",
            CaseStyle::PascalCase => "pascal_case",
            CaseStyle::SnakeCase => "snake_case",
            CaseStyle::ScreamingSnakeCase => "screaming_snake_case",
            CaseStyle::KebabCase => "kebab_case",
            CaseStyle::DotCase => "dot_case",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CaseStyle::UpperCase => "Upper Case",
            CaseStyle::LowerCase => "Lower Case",
            CaseStyle::TitleCase => "Title Case",
            CaseStyle::SentenceCase => "Sentence Case",
            CaseStyle::CamelCase => "Camel Case",
            CaseStyle::PascalCase => "Pascal Case",
            CaseStyle::SnakeCase => "Snake Case",
            CaseStyle::ScreamingSnakeCase => "Screaming Snake Case",
            CaseStyle::KebabCase => "Kebab Case",
            CaseStyle::DotCase => "Dot Case",
        }
    }

    /// "hello world" rendered in this style.
    pub const fn example(self) -> &'static str {
        match self {
            CaseStyle::UpperCase => "HELLO WORLD",
            CaseStyle::LowerCase => "hello world",
            CaseStyle::TitleCase => "Hello World",
            CaseStyle::SentenceCase => "Hello world",
            CaseStyle::CamelCase => "helloWorld",
            CaseStyle::PascalCase => "HelloWorld",
            CaseStyle::SnakeCase => "hello_world",
            CaseStyle::ScreamingSnakeCase => "HELLO_WORLD",
            CaseStyle::KebabCase => "hello-world",
            CaseStyle::DotCase => "hello.world",
        }
    }

    /// Character placed between tokens; `None` concatenates.
    pub const fn separator(self) -> Option<char> {
        match self {
            CaseStyle::UpperCase
            | CaseStyle::LowerCase
            | CaseStyle::TitleCase
            | CaseStyle::SentenceCase => Some(SPACE),
            CaseStyle::CamelCase | CaseStyle::PascalCase => None,
            CaseStyle::SnakeCase | CaseStyle::ScreamingSnakeCase => Some('_'),
            CaseStyle::KebabCase => Some('-'),
            CaseStyle::DotCase => Some('.'),
        }
    }

    const fn rule(self) -> Rule {
        match self {
            CaseStyle::UpperCase | CaseStyle::ScreamingSnakeCase => Rule::Upper,
            CaseStyle::LowerCase
            | CaseStyle::SnakeCase
            | CaseStyle::KebabCase
            | CaseStyle::DotCase => Rule::Lower,
            CaseStyle::TitleCase => Rule::Title,
            CaseStyle::SentenceCase => Rule::Sentence,
            CaseStyle::CamelCase => Rule::Camel,
            CaseStyle::PascalCase => Rule::Pascal,
        }
    }

    /// Join `tokens` in this style.
    #[inline]
    pub fn apply(self, tokens: &[Token<'_>]) -> String {
        apply_case(tokens, self)
    }

    fn names() -> String {
        CaseStyle::ALL
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CaseStyle {
    type Err = ParseCaseStyleError;

    /// Accepts `snake_case`, `snake`, `Snake Case`, `snake-case`; any casing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        let key = key.strip_suffix("case").filter(|k| !k.is_empty()).unwrap_or(key.as_str());
        match key {
            "upper" => Ok(CaseStyle::UpperCase),
            "lower" => Ok(CaseStyle::LowerCase),
            "title" => Ok(CaseStyle::TitleCase),
            "sentence" => Ok(CaseStyle::SentenceCase),
            "camel" => Ok(CaseStyle::CamelCase),
            "pascal" => Ok(CaseStyle::PascalCase),
            "snake" => Ok(CaseStyle::SnakeCase),
            "screamingsnake" | "constant" => Ok(CaseStyle::ScreamingSnakeCase),
            "kebab" => Ok(CaseStyle::KebabCase),
            "dot" => Ok(CaseStyle::DotCase),
            _ => Err(ParseCaseStyleError(s.to_owned())),
        }
    }
}

fn join(tokens: &[Token<'_>], sep: Option<char>) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.len() + 1).sum());
    for (i, token) in tokens.iter().enumerate() {
        if let Some(sep) = sep.filter(|_| i > 0) {
            out.push(sep);
        }
        out.push_str(token);
    }
    out
}

/// Join `tokens` according to `style`. No tokens, empty string.
pub fn apply_case(tokens: &[Token<'_>], style: CaseStyle) -> String {
    if tokens.is_empty() {
        return String::new();
    }
    let sep = style.separator();
    match style.rule() {
        Rule::Upper => join(tokens, sep).to_uppercase(),
        Rule::Lower => join(tokens, sep).to_lowercase(),
        Rule::Sentence => {
            let joined = join(tokens, sep);
            let mut out = String::with_capacity(joined.len());
            push_capitalized(&mut out, &joined);
            out
        }
        Rule::Title | Rule::Camel | Rule::Pascal => {
            let mut out = String::with_capacity(tokens.iter().map(|t| t.len() + 1).sum());
            for (i, token) in tokens.iter().enumerate() {
                if let Some(sep) = sep.filter(|_| i > 0) {
                    out.push(sep);
                }
                match style.rule() {
                    Rule::Title => push_upper_first(&mut out, token),
                    Rule::Camel if i == 0 => out.push_str(&token.to_lowercase()),
                    _ => push_capitalized(&mut out, token),
                }
            }
            out
        }
    }
}

/// `apply_case(tokenize(text, auto_split), style)`.
#[inline]
pub fn convert(text: &str, style: CaseStyle, auto_split: bool) -> String {
    apply_case(&tokenize(text, auto_split), style)
}
