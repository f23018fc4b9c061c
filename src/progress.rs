// src/progress.rs
use std::io::Write;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once the listing is read, with the number of detail pages to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when detail page `index` (1-based) was fetched and extracted.
    fn item_done(&mut self, _index: usize, _label: &str) {}

    /// Called after the last item. Not called when the run aborts.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Status lines on stderr; stdout stays clean for the report.
pub struct StderrProgress {
    done: usize,
    total: usize,
}

impl StderrProgress {
    pub fn new() -> Self { Self { done: 0, total: 0 } }

    fn line(&self, msg: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{msg}");
    }
}

impl Default for StderrProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.line(&format!("Found {total} project link(s)"));
    }
    fn log(&mut self, msg: &str) {
        self.line(msg);
    }
    fn item_done(&mut self, index: usize, label: &str) {
        self.done += 1;
        self.line(&format!("Fetched project {index}/{} {label}", self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.line("Fetch complete (nothing to fetch)");
        } else {
            self.line(&format!("Fetch complete ({}/{})", self.done, self.total));
        }
    }
}
