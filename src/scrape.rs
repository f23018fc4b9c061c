// src/scrape.rs
//! Listing → detail fan-out. Strictly sequential: one listing fetch, then one
//! fetch per detail link, in discovery order. The first error ends the run.

use crate::{
    config::options::ScrapeOptions,
    core::{Fetch, Page},
    data::ProjectList,
    error::Result,
    progress::Progress,
    specs::{listing, project},
};

pub use crate::specs::listing::DetailLink;

/// What the listing page yielded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub title: Option<String>,
    /// At most `MAX_PROJECTS`, in document order.
    pub links: Vec<DetailLink>,
}

/// Fetch the listing page and return the detail links it points to.
pub fn discover(opts: &ScrapeOptions, fetcher: &dyn Fetch) -> Result<Listing> {
    let body = fetcher.fetch(&opts.listing_url)?;
    let page = Page::parse(&body);
    let title = page.title();
    if let Some(t) = &title {
        log::debug!("Listing page title: {t}");
    }
    let links = listing::detail_links(&page, opts)?;
    Ok(Listing { title, links })
}

/// Scrape up to `MAX_PROJECTS` projects reachable from the listing page.
pub fn collect_projects(
    opts: &ScrapeOptions,
    fetcher: &dyn Fetch,
    mut progress: Option<&mut dyn Progress>,
) -> Result<ProjectList> {
    let Listing { title, links } = discover(opts, fetcher)?;
    log::info!("{} detail link(s) on {}", links.len(), opts.listing_url);

    if let Some(p) = progress.as_deref_mut() {
        if let Some(t) = &title {
            p.log(&format!("Listing: {t}"));
        }
        p.begin(links.len());
    }

    let mut projects = ProjectList::with_capacity(links.len());

    for (i, link) in links.iter().enumerate() {
        let body = fetcher.fetch(&link.url)?;
        let page = Page::parse(&body);

        let checked = project::extract_checked(&page, &opts.placeholder);
        if !checked.missing.is_empty() {
            let labels: Vec<_> = checked.missing.iter().map(|f| f.label()).collect();
            log::warn!("{}: no element for {}", link.url, labels.join(", "));
        }
        projects.push(checked.record);

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(i + 1, &link.text);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(projects)
}
