// src/specs/listing.rs
//! Scraping *spec* for the dashboard listing page.
//!
//! Anchors matching the link selector are taken in document order. Each `href`
//! is resolved against the listing URL with standard reference resolution, so
//! relative, root-relative and absolute links all land where a browser would.
//! Anchors without a usable `href` (absent, empty or whitespace only) follow
//! `MissingHref`; skipped anchors do not count toward the `MAX_PROJECTS` limit.

use url::Url;

use crate::config::consts::MAX_PROJECTS;
use crate::config::options::{MissingHref, ScrapeOptions};
use crate::core::html::{trimmed_text, Page};
use crate::core::link;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailLink {
    pub url: Url,
    /// Anchor text as shown on the listing, for progress/log lines.
    pub text: String,
}

pub fn detail_links(page: &Page, opts: &ScrapeOptions) -> Result<Vec<DetailLink>> {
    let anchors = page.select(&opts.link_selector)?;
    log::debug!("{} anchors match {:?}", anchors.len(), opts.link_selector);

    let mut links = Vec::with_capacity(MAX_PROJECTS.min(anchors.len()));

    for (i, anchor) in anchors.iter().enumerate() {
        if links.len() >= MAX_PROJECTS { break; }

        // href="" would resolve to the listing page itself
        let href = anchor.value().attr("href").filter(|h| !h.trim().is_empty());
        let Some(href) = href else {
            match opts.missing_href {
                MissingHref::Skip => {
                    log::warn!("Skipping listing anchor #{} without href", i + 1);
                    continue;
                }
                MissingHref::Fail => return Err(ScrapeError::MissingHref { index: i + 1 }),
            }
        };

        let url = link::resolve(&opts.listing_url, href)?;
        links.push(DetailLink { url, text: trimmed_text(anchor) });
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ScrapeOptions {
        ScrapeOptions::default()
            .with_listing_url("https://dash.gov.in/Home/Dashboard.aspx")
            .unwrap()
    }

    fn listing(items: &[&str]) -> String {
        let lis: String = items.iter().map(|a| format!("<li>{a}</li>")).collect();
        format!(r#"<div class="panel"><div class="panel-body"><ul>{lis}</ul></div></div>"#)
    }

    #[test]
    fn only_anchors_inside_panel_bodies() {
        let html = format!(
            r#"<ul><li><a href="nav.aspx">Nav</a></li></ul>{}<a href="footer.aspx">F</a>"#,
            listing(&[r#"<a href="Detail.aspx?id=1">One</a>"#])
        );
        let links = detail_links(&Page::parse(&html), &opts()).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url.as_str(), "https://dash.gov.in/Home/Detail.aspx?id=1");
        assert_eq!(links[0].text, "One");
    }

    #[test]
    fn limit_caps_the_result_in_document_order() {
        let anchors: Vec<String> = (1..=8)
            .map(|i| format!(r#"<a href="Detail.aspx?id={i}">P{i}</a>"#))
            .collect();
        let refs: Vec<&str> = anchors.iter().map(String::as_str).collect();
        let links = detail_links(&Page::parse(&listing(&refs)), &opts()).unwrap();
        let texts: Vec<_> = links.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["P1", "P2", "P3", "P4", "P5"]);
    }

    #[test]
    fn missing_href_skip_does_not_use_a_slot() {
        let html = listing(&[
            r#"<a>no link</a>"#,
            r#"<a href="a.aspx">A</a>"#,
            r#"<a href="b.aspx">B</a>"#,
            r#"<a href="c.aspx">C</a>"#,
            r#"<a href="d.aspx">D</a>"#,
            r#"<a href="e.aspx">E</a>"#,
            r#"<a href="f.aspx">F</a>"#,
        ]);
        let links = detail_links(&Page::parse(&html), &opts()).unwrap();
        let texts: Vec<_> = links.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn empty_href_is_skipped_not_resolved_to_the_listing() {
        let html = listing(&[
            r#"<a href="">Blank</a>"#,
            r#"<a href="   ">Spaces</a>"#,
            r#"<a href="a.aspx">A</a>"#,
        ]);
        let links = detail_links(&Page::parse(&html), &opts()).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url.as_str(), "https://dash.gov.in/Home/a.aspx");
        assert!(links.iter().all(|l| l.url != opts().listing_url));
    }

    #[test]
    fn empty_href_fails_when_asked() {
        let html = listing(&[r#"<a href="a.aspx">A</a>"#, r#"<a href=" ">Blank</a>"#]);
        let mut o = opts();
        o.missing_href = MissingHref::Fail;
        let err = detail_links(&Page::parse(&html), &o).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingHref { index: 2 }));
    }

    #[test]
    fn missing_href_fail_reports_position() {
        let html = listing(&[r#"<a href="a.aspx">A</a>"#, r#"<a name="x">X</a>"#]);
        let mut o = opts();
        o.missing_href = MissingHref::Fail;
        let err = detail_links(&Page::parse(&html), &o).unwrap_err();
        assert!(matches!(err, ScrapeError::MissingHref { index: 2 }));
    }

    #[test]
    fn missing_href_past_the_limit_is_never_inspected() {
        let html = listing(&[
            r#"<a href="a.aspx">A</a>"#,
            r#"<a href="b.aspx">B</a>"#,
            r#"<a href="c.aspx">C</a>"#,
            r#"<a href="d.aspx">D</a>"#,
            r#"<a href="e.aspx">E</a>"#,
            r#"<a>X</a>"#,
        ]);
        let mut o = opts();
        o.missing_href = MissingHref::Fail;
        assert_eq!(detail_links(&Page::parse(&html), &o).unwrap().len(), MAX_PROJECTS);
    }

    #[test]
    fn no_matches_is_empty_not_an_error() {
        let links = detail_links(&Page::parse("<p>maintenance</p>"), &opts()).unwrap();
        assert!(links.is_empty());
    }
}
