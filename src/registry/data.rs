use crate::registry::{Category, HiddenChar};

use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates the lookup table from a single list
/// ---------------------------------------------------------------------------
/// Keys carry the `_u32` suffix so `phf` hashes them as `u32`.
macro_rules! define_hidden_chars {
    ($(
        $cp:tt => $category:ident, $viable:tt, $name:literal, $glyph:expr
    );* $(;)?) => {
        pub static REGISTRY: Map<u32, HiddenChar> = phf_map! {
            $(
                $cp => HiddenChar {
                    codepoint: $cp,
                    category: Category::$category,
                    viable: $viable,
                    name: $name,
                    glyph: $glyph,
                }
            ),*
        };
    };
}

// ---------------------------------------------------------------------------
//    Hidden characters (single source of truth)
//    viable = true  → acted as a separator, becomes U+0020 when cleaned
//    viable = false → pure mark, removed outright
//    U+0020 SPACE is intentionally absent.
// ---------------------------------------------------------------------------
define_hidden_chars! {
    // ── C0 controls ───────────────────────────────────────────────────────
    0x0000_u32 => Control, false, "Null", Some("␀");
    0x0001_u32 => Control, false, "Start of Heading", Some("␁");
    0x0002_u32 => Control, false, "Start of Text", Some("␂");
    0x0003_u32 => Control, false, "End of Text", Some("␃");
    0x0004_u32 => Control, false, "End of Transmission", Some("␄");
    0x0005_u32 => Control, false, "Enquiry", Some("␅");
    0x0006_u32 => Control, false, "Acknowledge", Some("␆");
    0x0007_u32 => Control, false, "Bell", Some("␇");
    0x0008_u32 => Control, false, "Backspace", Some("␈");
    0x0009_u32 => Whitespace, true, "Character Tabulation", Some("⇥");
    0x000A_u32 => Whitespace, true, "Line Feed", Some("↵");
    0x000B_u32 => Whitespace, true, "Line Tabulation", Some("␋");
    0x000C_u32 => Whitespace, true, "Form Feed", Some("␌");
    0x000D_u32 => Whitespace, true, "Carriage Return", Some("␍");
    0x000E_u32 => Control, false, "Shift Out", Some("␎");
    0x000F_u32 => Control, false, "Shift In", Some("␏");
    0x0010_u32 => Control, false, "Data Link Escape", Some("␐");
    0x0011_u32 => Control, false, "Device Control One", Some("␑");
    0x0012_u32 => Control, false, "Device Control Two", Some("␒");
    0x0013_u32 => Control, false, "Device Control Three", Some("␓");
    0x0014_u32 => Control, false, "Device Control Four", Some("␔");
    0x0015_u32 => Control, false, "Negative Acknowledge", Some("␕");
    0x0016_u32 => Control, false, "Synchronous Idle", Some("␖");
    0x0017_u32 => Control, false, "End of Transmission Block", Some("␗");
    0x0018_u32 => Control, false, "Cancel", Some("␘");
    0x0019_u32 => Control, false, "End of Medium", Some("␙");
    0x001A_u32 => Control, false, "Substitute", Some("␚");
    0x001B_u32 => Control, false, "Escape", Some("␛");
    0x001C_u32 => Whitespace, true, "Information Separator Four", Some("␜");
    0x001D_u32 => Whitespace, true, "Information Separator Three", Some("␝");
    0x001E_u32 => Whitespace, true, "Information Separator Two", Some("␞");
    0x001F_u32 => Whitespace, true, "Information Separator One", Some("␟");
    0x007F_u32 => Control, false, "Delete", Some("␡");

    // ── C1 controls ───────────────────────────────────────────────────────
    0x0080_u32 => Control, false, "Padding Character", None;
    0x0081_u32 => Control, false, "High Octet Preset", None;
    0x0082_u32 => Control, false, "Break Permitted Here", None;
    0x0083_u32 => Control, false, "No Break Here", None;
    0x0084_u32 => Control, false, "Index", None;
    0x0085_u32 => Whitespace, true, "Next Line", Some("⏎");
    0x0086_u32 => Control, false, "Start of Selected Area", None;
    0x0087_u32 => Control, false, "End of Selected Area", None;
    0x0088_u32 => Control, false, "Character Tabulation Set", None;
    0x0089_u32 => Control, false, "Character Tabulation with Justification", None;
    0x008A_u32 => Control, false, "Line Tabulation Set", None;
    0x008B_u32 => Control, false, "Partial Line Forward", None;
    0x008C_u32 => Control, false, "Partial Line Backward", None;
    0x008D_u32 => Control, false, "Reverse Line Feed", None;
    0x008E_u32 => Control, false, "Single Shift Two", None;
    0x008F_u32 => Control, false, "Single Shift Three", None;
    0x0090_u32 => Control, false, "Device Control String", None;
    0x0091_u32 => Control, false, "Private Use One", None;
    0x0092_u32 => Control, false, "Private Use Two", None;
    0x0093_u32 => Control, false, "Set Transmit State", None;
    0x0094_u32 => Control, false, "Cancel Character", None;
    0x0095_u32 => Control, false, "Message Waiting", None;
    0x0096_u32 => Control, false, "Start of Guarded Area", None;
    0x0097_u32 => Control, false, "End of Guarded Area", None;
    0x0098_u32 => Control, false, "Start of String", None;
    0x0099_u32 => Control, false, "Single Graphic Character Introducer", None;
    0x009A_u32 => Control, false, "Single Character Introducer", None;
    0x009B_u32 => Control, false, "Control Sequence Introducer", None;
    0x009C_u32 => Control, false, "String Terminator", None;
    0x009D_u32 => Control, false, "Operating System Command", None;
    0x009E_u32 => Control, false, "Privacy Message", None;
    0x009F_u32 => Control, false, "Application Program Command", None;

    // ── Latin-1 and scattered format characters ───────────────────────────
    0x00A0_u32 => Whitespace, true, "No-Break Space", Some("⍽");
    0x00AD_u32 => SoftHyphen, false, "Soft Hyphen", Some("SHY");
    0x034F_u32 => Formatting, false, "Combining Grapheme Joiner", Some("CGJ");
    0x061C_u32 => BidiControl, false, "Arabic Letter Mark", Some("ALM");
    0x115F_u32 => Other, false, "Hangul Choseong Filler", None;
    0x1160_u32 => Other, false, "Hangul Jungseong Filler", None;
    0x1680_u32 => Whitespace, true, "Ogham Space Mark", None;
    0x17B4_u32 => Other, false, "Khmer Vowel Inherent Aq", None;
    0x17B5_u32 => Other, false, "Khmer Vowel Inherent Aa", None;
    0x180E_u32 => Formatting, false, "Mongolian Vowel Separator", Some("MVS");

    // ── General punctuation spaces ────────────────────────────────────────
    0x2000_u32 => Whitespace, true, "En Quad", None;
    0x2001_u32 => Whitespace, true, "Em Quad", None;
    0x2002_u32 => Whitespace, true, "En Space", Some("ENSP");
    0x2003_u32 => Whitespace, true, "Em Space", Some("EMSP");
    0x2004_u32 => Whitespace, true, "Three-Per-Em Space", None;
    0x2005_u32 => Whitespace, true, "Four-Per-Em Space", None;
    0x2006_u32 => Whitespace, true, "Six-Per-Em Space", None;
    0x2007_u32 => Whitespace, true, "Figure Space", Some("FSP");
    0x2008_u32 => Whitespace, true, "Punctuation Space", None;
    0x2009_u32 => Whitespace, true, "Thin Space", Some("THSP");
    0x200A_u32 => Whitespace, true, "Hair Space", Some("HSP");

    // ── Zero-width characters ─────────────────────────────────────────────
    0x200B_u32 => ZeroWidth, true, "Zero Width Space", Some("ZWSP");
    0x200C_u32 => ZeroWidth, false, "Zero Width Non-Joiner", Some("ZWNJ");
    0x200D_u32 => ZeroWidth, false, "Zero Width Joiner", Some("ZWJ");
    0x2060_u32 => ZeroWidth, false, "Word Joiner", Some("WJ");
    0xFEFF_u32 => ZeroWidth, false, "Zero Width No-Break Space", Some("BOM");

    // ── Bidirectional controls ────────────────────────────────────────────
    0x200E_u32 => BidiControl, false, "Left-to-Right Mark", Some("LRM");
    0x200F_u32 => BidiControl, false, "Right-to-Left Mark", Some("RLM");
    0x202A_u32 => BidiControl, false, "Left-to-Right Embedding", Some("LRE");
    0x202B_u32 => BidiControl, false, "Right-to-Left Embedding", Some("RLE");
    0x202C_u32 => BidiControl, false, "Pop Directional Formatting", Some("PDF");
    0x202D_u32 => BidiControl, false, "Left-to-Right Override", Some("LRO");
    0x202E_u32 => BidiControl, false, "Right-to-Left Override", Some("RLO");
    0x2066_u32 => BidiControl, false, "Left-to-Right Isolate", Some("LRI");
    0x2067_u32 => BidiControl, false, "Right-to-Left Isolate", Some("RLI");
    0x2068_u32 => BidiControl, false, "First Strong Isolate", Some("FSI");
    0x2069_u32 => BidiControl, false, "Pop Directional Isolate", Some("PDI");

    // ── Line/paragraph separators and wide spaces ─────────────────────────
    0x2028_u32 => Whitespace, true, "Line Separator", Some("LSEP");
    0x2029_u32 => Whitespace, true, "Paragraph Separator", Some("PSEP");
    0x202F_u32 => Whitespace, true, "Narrow No-Break Space", Some("NNBSP");
    0x205F_u32 => Whitespace, true, "Medium Mathematical Space", Some("MMSP");
    0x3000_u32 => Whitespace, true, "Ideographic Space", Some("IDSP");

    // ── Invisible operators and deprecated format controls ────────────────
    0x2061_u32 => Formatting, false, "Function Application", None;
    0x2062_u32 => Formatting, false, "Invisible Times", None;
    0x2063_u32 => Formatting, true, "Invisible Separator", None;
    0x2064_u32 => Formatting, false, "Invisible Plus", None;
    0x206A_u32 => Formatting, false, "Inhibit Symmetric Swapping", None;
    0x206B_u32 => Formatting, false, "Activate Symmetric Swapping", None;
    0x206C_u32 => Formatting, false, "Inhibit Arabic Form Shaping", None;
    0x206D_u32 => Formatting, false, "Activate Arabic Form Shaping", None;
    0x206E_u32 => Formatting, false, "National Digit Shapes", None;
    0x206F_u32 => Formatting, false, "Nominal Digit Shapes", None;

    // ── Fillers, annotations, astral format characters ────────────────────
    0x3164_u32 => Other, false, "Hangul Filler", None;
    0xFFA0_u32 => Other, false, "Halfwidth Hangul Filler", None;
    0xFFF9_u32 => Formatting, false, "Interlinear Annotation Anchor", None;
    0xFFFA_u32 => Formatting, false, "Interlinear Annotation Separator", None;
    0xFFFB_u32 => Formatting, false, "Interlinear Annotation Terminator", None;
    0x1D159_u32 => Other, false, "Musical Symbol Null Notehead", None;
    0x1D173_u32 => Formatting, false, "Musical Symbol Begin Beam", None;
    0x1D174_u32 => Formatting, false, "Musical Symbol End Beam", None;
    0x1D175_u32 => Formatting, false, "Musical Symbol Begin Tie", None;
    0x1D176_u32 => Formatting, false, "Musical Symbol End Tie", None;
    0x1D177_u32 => Formatting, false, "Musical Symbol Begin Slur", None;
    0x1D178_u32 => Formatting, false, "Musical Symbol End Slur", None;
    0x1D179_u32 => Formatting, false, "Musical Symbol Begin Phrase", None;
    0x1D17A_u32 => Formatting, false, "Musical Symbol End Phrase", None;
    0xE0001_u32 => Formatting, false, "Language Tag", None;
}
