// src/error.rs
//! Error taxonomy for a scrape run.
//!
//! Every variant is fatal to the run. A missing field is never an error
//! (see `specs::project`); it becomes the placeholder instead.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport-level failure: DNS, connect, timeout, body read.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The server answered, but not with a 2xx.
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("invalid CSS selector {selector:?}: {reason}")]
    Selector { selector: String, reason: String },

    /// An anchor's href could not be resolved against the listing URL.
    #[error("cannot resolve link {href:?} against {base}: {source}")]
    Link {
        base: String,
        href: String,
        #[source]
        source: url::ParseError,
    },

    /// Anchor #`index` (1-based, document order) has no href, or an empty one.
    #[error("listing anchor #{index} has no usable href")]
    MissingHref { index: usize },

    #[error("invalid listing URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
