use crate::{
    detect::Detect,
    sanitize::{contains_hidden, sanitize_iter},
    stage::Stage,
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Remove every registered hidden character.
///
/// Separator-like characters (zero-width space, tabs, line breaks, exotic
/// spaces) become a single U+0020; pure marks (bidi controls, soft hyphen,
/// joiners, BOM) disappear.
///
/// Zero-copy when clean. Idempotent.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripHidden;

impl Stage for StripHidden {
    fn name(&self) -> &'static str {
        "strip_hidden"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        contains_hidden(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        Cow::Owned(sanitize_iter(Detect::new(&text)))
    }
}

impl StageTestConfig for StripHidden {
    fn samples() -> &'static [&'static str] {
        &[
            "hello\u{200B}world",
            "\u{FEFF}bommed",
            "Arabic\u{200F}text",
            "a\u{2066}b\u{2069}c",
            "so\u{AD}ft hy\u{AD}phen",
            "line\r\nbreak\ttab",
            "clean text",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["clean text", "hello world", "test123", "日本語 🦀", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("hello\u{200B}world", "hello world"),
            ("\u{FEFF}text", "text"),
            ("a\u{200E}b", "ab"),
            ("no\u{00A0}break", "no break"),
            ("crlf\r\n", "crlf  "),
        ]
    }
}
