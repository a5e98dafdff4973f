//! Human-facing views of an annotated sequence.
//!
//! Hidden characters render as their preview glyph, or as a `U+XXXX` marker
//! when the registry has none. Visible characters render as themselves.
use crate::{
    detect::Annotated,
    registry::{Category, HiddenChar},
    sanitize::Fate,
    unicode::codepoint_marker,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Plain-text preview, hidden characters wrapped in `⟦…⟧`.
pub fn render_plain(records: &[Annotated<'_>]) -> String {
    let mut out = String::with_capacity(records.len() * 2);
    for record in records {
        match record.class {
            Some(class) => {
                out.push('⟦');
                out.push_str(&class.preview());
                out.push('⟧');
            }
            None => record.raw.push_to(&mut out),
        }
    }
    out
}

/// HTML preview. Hidden characters become
/// `<span class="hidden-char" title="NAME - U+XXXX">GLYPH</span>`; visible
/// text is escaped.
pub fn render_html(records: &[Annotated<'_>]) -> String {
    let mut out = String::with_capacity(records.len() * 4);
    let mut visible = String::new();
    for record in records {
        match record.class {
            Some(class) => {
                flush_visible(&mut out, &mut visible);
                push_hidden_span(&mut out, class);
            }
            None => record.raw.push_to(&mut visible),
        }
    }
    flush_visible(&mut out, &mut visible);
    out
}

fn flush_visible(out: &mut String, visible: &mut String) {
    if !visible.is_empty() {
        html_escape::encode_text_to_string(visible.as_str(), out);
        visible.clear();
    }
}

fn push_hidden_span(out: &mut String, class: &HiddenChar) {
    let title = format!("{} - {}", class.name, class.marker());
    out.push_str(r#"<span class="hidden-char" title=""#);
    html_escape::encode_double_quoted_attribute_to_string(&title, out);
    out.push_str(r#"">"#);
    html_escape::encode_text_to_string(class.preview(), out);
    out.push_str("</span>");
}

/// One line per record: index, codepoint, and what the registry knows.
pub fn render_listing(records: &[Annotated<'_>]) -> String {
    let mut out = String::new();
    for record in records {
        let marker = codepoint_marker(record.scalar);
        let line = match record.class {
            Some(class) => format!(
                "{:>6}  {marker:<8}  hidden   {:<13} {:<6} {}\n",
                record.index,
                class.category.name(),
                if class.viable { "space" } else { "drop" },
                class.name
            ),
            None if record.is_lone_surrogate() => {
                format!("{:>6}  {marker:<8}  lone surrogate\n", record.index)
            }
            None => format!(
                "{:>6}  {marker:<8}  visible  {:?}\n",
                record.index,
                record.as_char()
            ),
        };
        out.push_str(&line);
    }
    out
}

/// Serializable view of one record, for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharReport {
    pub index: usize,
    pub offset: usize,
    pub codepoint: String,
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    pub preview: String,
}

impl From<&Annotated<'_>> for CharReport {
    fn from(record: &Annotated<'_>) -> Self {
        let mut preview = String::new();
        match record.class {
            Some(class) => preview.push_str(&class.preview()),
            None => record.raw.push_to(&mut preview),
        }
        Self {
            index: record.index,
            offset: record.offset,
            codepoint: codepoint_marker(record.scalar),
            hidden: record.is_hidden(),
            category: record.class.map(|c| c.category),
            viable: record.class.map(|c| c.viable),
            name: record.class.map(|c| c.name),
            preview,
        }
    }
}

/// Counts of hidden characters in a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub scalars: usize,
    pub hidden: usize,
    /// Hidden characters that sanitizing turns into a space.
    pub replaced: usize,
    /// Hidden characters that sanitizing drops.
    pub removed: usize,
    pub by_category: BTreeMap<Category, usize>,
}

impl Summary {
    pub fn of(records: &[Annotated<'_>]) -> Self {
        let mut summary = Self {
            scalars: records.len(),
            ..Self::default()
        };
        for record in records {
            let Some(class) = record.class else { continue };
            summary.hidden += 1;
            *summary.by_category.entry(class.category).or_default() += 1;
            match Fate::of(record) {
                Fate::Space => summary.replaced += 1,
                Fate::Drop => summary.removed += 1,
                Fate::Keep => {}
            }
        }
        summary
    }

    pub fn is_clean(&self) -> bool {
        self.hidden == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::{detect, detect_utf16};

    #[test]
    fn plain_preview() {
        let records = detect("be\u{200B}hind\u{E0001}");
        assert_eq!(render_plain(&records), "be⟦ZWSP⟧hind⟦U+E0001⟧");
    }

    #[test]
    fn html_preview_escapes() {
        let records = detect("<b>\u{200E}&");
        assert_eq!(
            render_html(&records),
            "&lt;b&gt;<span class=\"hidden-char\" title=\"Left-to-Right Mark - U+200E\">LRM</span>&amp;"
        );
    }

    #[test]
    fn html_clean_text_is_only_escaped() {
        assert_eq!(render_html(&detect("a < b")), "a &lt; b");
        assert_eq!(render_html(&[]), "");
    }

    #[test]
    fn summary_counts() {
        let records = detect("a\u{200B}b\u{AD}c\u{202E}\td");
        let summary = Summary::of(&records);
        assert_eq!(summary.scalars, 8);
        assert_eq!(summary.hidden, 4);
        assert_eq!(summary.replaced, 2);
        assert_eq!(summary.removed, 2);
        assert_eq!(summary.by_category.get(&Category::ZeroWidth), Some(&1));
        assert_eq!(summary.by_category.get(&Category::Whitespace), Some(&1));
        assert!(!summary.is_clean());
        assert!(Summary::of(&detect("clean")).is_clean());
    }

    #[test]
    fn report_json() {
        let records = detect("x\u{00AD}");
        let reports: Vec<CharReport> = records.iter().map(CharReport::from).collect();
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["hidden"], false);
        assert!(json[0].get("category").is_none());
        assert_eq!(json[1]["codepoint"], "U+00AD");
        assert_eq!(json[1]["category"], "soft_hyphen");
        assert_eq!(json[1]["viable"], false);
        assert_eq!(json[1]["preview"], "SHY");
    }

    #[test]
    fn listing_marks_lone_surrogates() {
        let units: [u16; 2] = [0xDC00, 0x0009];
        let listing = render_listing(&detect_utf16(&units));
        let lines: Vec<_> = listing.lines().collect();
        assert!(lines[0].contains("lone surrogate"));
        assert!(lines[1].contains("U+0009"));
        assert!(lines[1].contains("Character Tabulation"));
    }

    #[test]
    fn listing_one_line_per_record() {
        let listing = render_listing(&detect("a\u{200B}"));
        assert_eq!(
            listing,
            "     0  U+0061    visible  'a'\n     1  U+200B    hidden   zero_width    space  Zero Width Space\n"
        );
    }

    #[test]
    fn html_span_shape() {
        let html = render_html(&detect("\u{AD}"));
        assert_eq!(html, r#"<span class="hidden-char" title="Soft Hyphen - U+00AD">SHY</span>"#);
    }
}
