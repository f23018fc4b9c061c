// src/core/html.rs
// Parsed-document wrapper: CSS selection for the listing page,
// id lookup for the detail pages.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

/// Result of an identifier lookup. The caller decides what "absent" becomes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    Found(String),
    Absent,
}

pub struct Page {
    doc: Html,
}

impl Page {
    /// html5ever is lenient: any body parses, worst case into an empty tree.
    pub fn parse(body: &str) -> Self {
        Self { doc: Html::parse_document(body) }
    }

    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>> {
        let selector = parse_selector(css)?;
        Ok(self.doc.select(&selector).collect())
    }

    /// First element (document order) whose `id` attribute equals `id`,
    /// as trimmed text content.
    pub fn lookup_id(&self, id: &str) -> Lookup {
        self.doc
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().id() == Some(id))
            .map(|el| Lookup::Found(trimmed_text(&el)))
            .unwrap_or(Lookup::Absent)
    }

    pub fn title(&self) -> Option<String> {
        let selector = parse_selector("title").ok()?;
        self.doc
            .select(&selector)
            .next()
            .map(|el| trimmed_text(&el))
            .filter(|t| !t.is_empty())
    }
}

/// All descendant text nodes, concatenated, leading/trailing whitespace stripped.
pub fn trimmed_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: s!(css),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<html><head><title> Project Detail </title></head><body>
        <span id="a">  alpha
        </span>
        <div id="b"><b>bold</b> and <i>italic</i></div>
        <span id="empty">   </span>
        <span id="dup">first</span><span id="dup">second</span>
    </body></html>"#;

    #[test]
    fn lookup_trims_and_flattens() {
        let page = Page::parse(DOC);
        assert_eq!(page.lookup_id("a"), Lookup::Found(s!("alpha")));
        assert_eq!(page.lookup_id("b"), Lookup::Found(s!("bold and italic")));
    }

    #[test]
    fn present_but_empty_is_not_absent() {
        let page = Page::parse(DOC);
        assert_eq!(page.lookup_id("empty"), Lookup::Found(s!()));
        assert_eq!(page.lookup_id("nope"), Lookup::Absent);
    }

    #[test]
    fn duplicate_ids_take_the_first() {
        let page = Page::parse(DOC);
        assert_eq!(page.lookup_id("dup"), Lookup::Found(s!("first")));
    }

    #[test]
    fn bad_selector_is_an_error() {
        let page = Page::parse(DOC);
        let err = page.select("li >> a[").unwrap_err();
        assert!(matches!(err, ScrapeError::Selector { .. }));
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(Page::parse(DOC).title().as_deref(), Some("Project Detail"));
        assert_eq!(Page::parse("<p>no title</p>").title(), None);
    }
}
