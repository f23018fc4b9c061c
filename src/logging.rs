// src/logging.rs
// env_logger setup. Lines go to stderr as "[HH:MM:SS.mmm][LEVEL] msg",
// elapsed since logger init. DASHBOARD_SCRAPE_LOG overrides the level filter.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

use crate::config::consts::LOG_ENV;

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install the global logger. Safe to call more than once; later calls are no-ops.
pub fn init(default_level: LevelFilter) {
    start();
    let env = Env::default().filter_or(LOG_ENV, default_level.as_str());

    let _ = Builder::new()
        .parse_env(env)
        .target(Target::Stderr)
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        })
        .try_init();
}
