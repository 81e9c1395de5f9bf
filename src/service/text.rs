use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap_or_else(|e| panic!("{}", e)));

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap_or_else(|e| panic!("{}", e)));

pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Turns an HTML chat reply into plain terminal text.
pub fn render_markup(markup: &str) -> String {
    let with_breaks = LINE_BREAK.replace_all(markup, "\n");
    let stripped = TAG.replace_all(&with_breaks, "");
    decode_entities(&stripped)
}
