pub mod case;
pub mod detect;
pub mod generation;
pub mod pipeline;
pub mod preview;
pub mod profile;
pub mod registry;
pub mod sanitize;
pub mod scrubber;
pub mod stage;
pub mod testing;
pub mod token;
pub mod unicode;

pub use case::{CaseStyle, ParseCaseStyleError, apply_case, convert};
pub use detect::{Annotated, RawText, detect, detect_utf16};
pub use generation::{Generation, Latest, Tagged};
pub use registry::{Category, HiddenChar, classify};
pub use sanitize::{contains_hidden, sanitize, sanitize_str, sanitize_utf16};
pub use scrubber::{ScrubError, Scrubber};
pub use stage::{Stage, change_case::ChangeCase, strip_hidden::StripHidden};
pub use token::{Token, TokenSequence, tokenize};
