use crate::{
    case::{CaseStyle, convert},
    stage::Stage,
    testing::stage_contract::StageTestConfig,
};
use std::borrow::Cow;

/// Re-case text: tokenize, then join in `style`.
///
/// Returns the input itself when the conversion is a no-op, so an
/// already-styled string costs one scan and no copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeCase {
    pub style: CaseStyle,
    pub auto_split: bool,
}

impl ChangeCase {
    /// Auto-splitting on `_`, `-` and camel/acronym boundaries.
    #[inline]
    pub const fn new(style: CaseStyle) -> Self {
        Self {
            style,
            auto_split: true,
        }
    }

    /// Only runs of U+0020 separate words.
    #[inline]
    pub const fn spaces_only(style: CaseStyle) -> Self {
        Self {
            style,
            auto_split: false,
        }
    }
}

impl Default for ChangeCase {
    fn default() -> Self {
        Self::new(CaseStyle::SnakeCase)
    }
}

impl Stage for ChangeCase {
    fn name(&self) -> &'static str {
        self.style.name()
    }

    fn needs_apply(&self, text: &str) -> bool {
        convert(text, self.style, self.auto_split) != text
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let converted = convert(&text, self.style, self.auto_split);
        if converted == *text {
            text
        } else {
            Cow::Owned(converted)
        }
    }
}

impl StageTestConfig for ChangeCase {
    fn samples() -> &'static [&'static str] {
        &[
            "helloWorld",
            "hello_world",
            "Hello World",
            "  padded   words ",
            "XMLHttpRequest",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello_world", "snake_case_already", "x", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("helloWorld", "hello_world"),
            ("Hello World", "hello_world"),
            ("kebab-case-input", "kebab_case_input"),
            ("XMLHttpRequest", "xml_http_request"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(ChangeCase::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_follows_style() {
        assert_eq!(ChangeCase::new(CaseStyle::KebabCase).name(), "kebab_case");
    }

    #[test]
    fn styled_input_is_zero_copy() {
        let stage = ChangeCase::new(CaseStyle::KebabCase);
        let text = "already-kebab";
        assert!(!stage.needs_apply(text));
        let out = stage.apply(Cow::Borrowed(text));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == text.as_ptr()));
    }

    #[test]
    fn spaces_only_keeps_camel_words() {
        let stage = ChangeCase::spaces_only(CaseStyle::UpperCase);
        assert_eq!(stage.apply(Cow::Borrowed("helloWorld again")), "HELLOWORLD AGAIN");
    }

    #[test]
    fn trims_and_collapses() {
        let stage = ChangeCase::new(CaseStyle::LowerCase);
        assert_eq!(stage.apply(Cow::Borrowed("  A   B ")), "a b");
    }
}
