// src/bin/cli.rs
use color_eyre::eyre::Result;
use dashboard_scrape::cli::{self, Command};

fn main() -> Result<()> {
    color_eyre::install()?;

    match cli::from_env()? {
        Command::Help => eprintln!("{}", cli::HELP),
        Command::Run(opts) => cli::run(&opts)?,
    }
    Ok(())
}
