// src/core/link.rs
// Reference resolution for listing hrefs (WHATWG URL / RFC 3986 §5).
//
//   base  https://host/dash/list.aspx
//   "Detail.aspx?id=7"       -> https://host/dash/Detail.aspx?id=7
//   "/Project/Detail?id=7"   -> https://host/Project/Detail?id=7
//   "//cdn.host/x"           -> https://cdn.host/x
//   "http://other/y"         -> http://other/y   (absolute wins)

use url::Url;

use crate::error::{Result, ScrapeError};

pub fn resolve(base: &Url, href: &str) -> Result<Url> {
    base.join(href.trim()).map_err(|source| ScrapeError::Link {
        base: base.to_string(),
        href: s!(href),
        source,
    })
}
