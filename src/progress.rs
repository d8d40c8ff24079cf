// src/progress.rs
/// Lightweight progress reporting for long, paced runs (search paging and
/// downloads). Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once the number of units is known (pages, or works to fetch).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called before unit `n` (1-based) is fetched, so the line shows up
    /// ahead of the pacing wait.
    fn item_start(&mut self, _n: usize) {}

    /// Called when a unit could not be completed but the run goes on.
    fn item_failed(&mut self, _label: &str) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// `page 3/12` style lines on stderr.
pub struct StderrProgress {
    unit: &'static str,
    total: usize,
}

impl StderrProgress {
    pub fn new(unit: &'static str) -> Self {
        Self { unit, total: 0 }
    }
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_start(&mut self, n: usize) {
        eprintln!("{} {}/{}", self.unit, n, self.total);
    }

    fn item_failed(&mut self, label: &str) {
        eprintln!("{} {} failed", self.unit, label);
    }
}
