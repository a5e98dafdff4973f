//! Ready-made scrubbers for the common jobs.
use crate::{case::CaseStyle, scrubber::Scrubber};

/// Strip hidden characters and nothing else.
pub fn clean() -> Scrubber {
    Scrubber::builder().strip_hidden().build()
}

/// Re-case with auto-splitting, leaving hidden characters alone.
pub fn recase(style: CaseStyle) -> Scrubber {
    Scrubber::builder().change_case(style, true).build()
}

/// Clean first, then re-case. Pasted identifiers often carry zero-width
/// junk that would otherwise end up inside a token.
pub fn identifier(style: CaseStyle) -> Scrubber {
    Scrubber::builder()
        .strip_hidden()
        .change_case(style, true)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_preset() {
        assert_eq!(clean().scrub("a\u{2060}b\u{2003}c"), "ab c");
    }

    #[test]
    fn recase_keeps_hidden_inside_tokens() {
        assert_eq!(recase(CaseStyle::UpperCase).scrub("a\u{200D}b"), "A\u{200D}B");
    }

    #[test]
    fn identifier_preset() {
        let snake = identifier(CaseStyle::ScreamingSnakeCase);
        assert_eq!(snake.scrub("\u{FEFF}maxRetry\u{200B}Count"), "MAX_RETRY_COUNT");
    }
}
