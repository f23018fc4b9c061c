// src/cli.rs
use std::io::{self, Write};

use thiserror::Error;

use crate::config::consts::URL_ENV;
use crate::config::options::{AppOptions, MissingHref, OutputFormat, Verbosity};
use crate::core::HttpFetcher;
use crate::error::ScrapeError;
use crate::progress::{Progress, StderrProgress};
use crate::{logging, report, scrape};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown {what}: {value}")]
    BadValue { what: &'static str, value: String },
    #[error("unknown arg: {0}")]
    Unknown(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(AppOptions),
    Help,
}

/// Parse everything after the program name. `env_url` is the value of
/// DASHBOARD_SCRAPE_URL, if set; `--url` wins over it.
pub fn parse_args<I>(args: I, env_url: Option<String>) -> Result<Command, ArgError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut url = env_url;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => url = Some(args.next().ok_or(ArgError::MissingValue("--url"))?),
            "--format" => {
                let v = args.next().ok_or(ArgError::MissingValue("--format"))?;
                opts.format = OutputFormat::parse(&v)
                    .ok_or(ArgError::BadValue { what: "format", value: v })?;
            }
            "--on-missing-href" => {
                let v = args.next().ok_or(ArgError::MissingValue("--on-missing-href"))?;
                opts.scrape.missing_href = MissingHref::parse(&v)
                    .ok_or(ArgError::BadValue { what: "missing-href policy", value: v })?;
            }
            "-v" | "--verbose" => opts.verbosity = Verbosity::Verbose,
            "-q" | "--quiet" => opts.verbosity = Verbosity::Quiet,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(ArgError::Unknown(a)),
        }
    }

    if let Some(u) = url.filter(|u| !u.trim().is_empty()) {
        opts.scrape = opts
            .scrape
            .with_listing_url(&u)
            .map_err(|_| ArgError::BadValue { what: "URL", value: u })?;
    }

    Ok(Command::Run(opts))
}

pub fn from_env() -> Result<Command, ArgError> {
    parse_args(std::env::args().skip(1), std::env::var(URL_ENV).ok())
}

/// Scrape and print the report to stdout.
pub fn run(opts: &AppOptions) -> Result<(), ScrapeError> {
    logging::init(opts.verbosity.level());

    let fetcher = HttpFetcher::new()?;
    let mut stderr_progress = StderrProgress::new();
    let progress: Option<&mut dyn Progress> = match opts.verbosity {
        Verbosity::Quiet => None,
        _ => Some(&mut stderr_progress),
    };

    let projects = scrape::collect_projects(&opts.scrape, &fetcher, progress)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write(&mut out, &projects, opts.format)?;
    out.flush()?;
    Ok(())
}
