use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Escape XML special characters.
///
/// # Examples
///
/// ```
/// use pitch_deck::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_xml("Executive Summary"), "Executive Summary");
    }

    #[test]
    fn test_escape_ampersand_in_title() {
        assert_eq!(escape_xml("Alpha & Beta vs SPY"), "Alpha &amp; Beta vs SPY");
    }

    #[test]
    fn test_escape_keeps_unicode() {
        assert_eq!(escape_xml("β ≈ 0 → “hedge”"), "β ≈ 0 → “hedge”");
        assert_eq!(escape_xml("|Z-score| < 0.5"), "|Z-score| &lt; 0.5");
    }
}
