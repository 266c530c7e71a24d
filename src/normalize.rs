//! HTML fragment to plain text.
//!
//! Structural tags are turned into line breaks and bullets before the
//! remaining markup is stripped, and entities are decoded only after that so
//! decoded text can never be mistaken for a tag.

use lazy_regex::regex;
use std::borrow::Borrow;

const ENTITIES: [(&str, &str); 6] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

pub fn normalize(html: &str) -> String {
    let s = regex!(r"(?i)<br\s*/?>").replace_all(html, "\n");
    let s = regex!(r"(?i)</p>").replace_all(s.borrow(), "\n\n");
    let s = regex!(r"(?i)</li>").replace_all(s.borrow(), "\n");
    let s = regex!(r"(?i)<li(?:\s[^>]*)?>").replace_all(s.borrow(), "• ");
    let s = regex!(r"(?i)</h[1-6]>").replace_all(s.borrow(), "\n\n");
    let s = regex!(r"<[^>]+>").replace_all(s.borrow(), "");

    let s = ENTITIES
        .iter()
        .fold(s.into_owned(), |s, (entity, text)| s.replace(entity, text));

    regex!(r"\n{3,}")
        .replace_all(&s, "\n\n")
        .trim()
        .to_string()
}
