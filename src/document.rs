use scraper::{ElementRef, Html, Selector};
use std::{collections::HashMap, sync::RwLock};
use tracing::warn;

use crate::utils::non_empty;

/// Read-only view over a fetched page. Strategies only see this capability
/// set, so the backing parser can be swapped without touching them.
pub trait Document {
    type Node<'a>: Copy
    where
        Self: 'a;

    fn select_first<'a>(&'a self, selector: &str) -> Option<Self::Node<'a>>;
    fn text<'a>(&'a self, node: Self::Node<'a>) -> String;
    fn attr<'a>(&'a self, node: Self::Node<'a>, name: &str) -> Option<String>;
    fn html<'a>(&'a self, node: Self::Node<'a>) -> Option<String>;
    fn all_scripts<'a>(&'a self, kind: &str) -> Vec<Self::Node<'a>>;

    /// Trimmed text of the first match, if any and not blank.
    fn select_text(&self, selector: &str) -> Option<String> {
        self.select_first(selector)
            .and_then(|node| non_empty(self.text(node)))
    }

    fn select_attr(&self, selector: &str, name: &str) -> Option<String> {
        self.select_first(selector)
            .and_then(|node| self.attr(node, name))
            .and_then(non_empty)
    }

    /// Inner markup of the first match.
    fn select_html(&self, selector: &str) -> Option<String> {
        self.select_first(selector).and_then(|node| self.html(node))
    }
}

lazy_static::lazy_static! {
    /// Compiled selectors, keyed by source text. Invalid ones are stored as
    /// `None` so they are only reported once.
    static ref SELECTORS: RwLock<HashMap<String, Option<Selector>>> = RwLock::new(HashMap::new());
}

pub(crate) fn compile(selector: &str) -> Option<Selector> {
    if let Some(cached) = SELECTORS
        .read()
        .ok()
        .and_then(|cache| cache.get(selector).cloned())
    {
        return cached;
    }

    let compiled = match Selector::parse(selector) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!("Invalid selector {:?}: {:?}", selector, e);
            None
        }
    };
    if let Ok(mut cache) = SELECTORS.write() {
        cache.insert(selector.to_string(), compiled.clone());
    }
    compiled
}

/// [`Document`] backed by html5ever through `scraper`. Parsing never fails;
/// broken markup is repaired the way a browser would.
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(raw: &str) -> Self {
        HtmlDocument {
            html: Html::parse_document(raw),
        }
    }
}

impl Document for HtmlDocument {
    type Node<'a> = ElementRef<'a>;

    fn select_first<'a>(&'a self, selector: &str) -> Option<ElementRef<'a>> {
        let selector = compile(selector)?;
        self.html.select(&selector).next()
    }

    fn text<'a>(&'a self, node: ElementRef<'a>) -> String {
        node.text().collect::<String>().trim().to_string()
    }

    fn attr<'a>(&'a self, node: ElementRef<'a>, name: &str) -> Option<String> {
        node.value().attr(name).map(ToString::to_string)
    }

    fn html<'a>(&'a self, node: ElementRef<'a>) -> Option<String> {
        Some(node.inner_html())
    }

    fn all_scripts<'a>(&'a self, kind: &str) -> Vec<ElementRef<'a>> {
        let selector = format!(r#"script[type="{}"]"#, kind);
        match compile(&selector) {
            Some(selector) => self.html.select(&selector).collect(),
            None => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = r#"
        <html>
        <head>
            <title> Careers | Acme </title>
            <script type="application/ld+json">{"@type": "Organization"}</script>
            <script type="text/javascript">var x = 1;</script>
            <script type="application/ld+json">[]</script>
        </head>
        <body>
            <h1 class="app-title">
                Backend Engineer
            </h1>
            <img class="logo" alt="Acme Corp" src="/logo.png">
            <div id="content"><p>Build <b>things</b>.</p></div>
            <span class="blank">   </span>
        "#;

    #[test]
    fn test_text_and_attr() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.select_text("h1.app-title"), Some("Backend Engineer".to_string()));
        assert_eq!(doc.select_text("title"), Some("Careers | Acme".to_string()));
        assert_eq!(doc.select_attr("img.logo", "alt"), Some("Acme Corp".to_string()));
        assert_eq!(doc.select_attr("img.logo", "title"), None);
        assert_eq!(doc.select_text(".blank"), None);
        assert_eq!(doc.select_text(".missing"), None);
    }

    #[test]
    fn test_inner_html() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(
            doc.select_html("#content"),
            Some("<p>Build <b>things</b>.</p>".to_string())
        );
    }

    #[test]
    fn test_all_scripts_filters_by_type() {
        let doc = HtmlDocument::parse(PAGE);
        let scripts = doc.all_scripts("application/ld+json");
        assert_eq!(scripts.len(), 2);
        assert_eq!(doc.text(scripts[0]), r#"{"@type": "Organization"}"#);
    }

    #[test]
    fn test_invalid_selector_is_no_match() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.select_text("h1[[["), None);
        assert_eq!(doc.select_text("h1[[["), None);
        assert_eq!(SELECTORS.read().unwrap().get("h1[[["), Some(&None));
    }

    #[test]
    fn test_compiled_selectors_are_reused() {
        let first = HtmlDocument::parse(PAGE);
        let second = HtmlDocument::parse("<h1 class=\"app-title\">Other</h1>");
        assert_eq!(first.select_text("h1.app-title"), Some("Backend Engineer".to_string()));
        assert_eq!(second.select_text("h1.app-title"), Some("Other".to_string()));
        assert!(SELECTORS.read().unwrap().contains_key("h1.app-title"));
        assert!(compile("h1.app-title").is_some());
    }
}
