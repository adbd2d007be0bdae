// src/progress.rs
use std::io::{self, Write};

/// Lightweight progress reporting for the per-item loops (changelog entries, PEP rows).
/// Observability only: nothing downstream depends on it.
pub trait Progress {
    /// Called at the start with the total number of items.
    fn begin(&mut self, _total: usize) {}

    /// Called when one item is done, successfully or not.
    fn item_done(&mut self, _label: &str) {}

    /// Called at the end of the loop.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// One-line `[done/total]` counter on stderr.
#[derive(Default)]
pub struct TermProgress {
    total: usize,
    done: usize,
}

impl TermProgress {
    pub fn new() -> Self { Self::default() }

    fn draw(&self) {
        let pct = if self.total == 0 { 100 } else { self.done * 100 / self.total };
        let mut err = io::stderr().lock();
        let _ = write!(err, "\r{pct:>3}% [{}/{}]", self.done, self.total);
        let _ = err.flush();
    }
}

impl Progress for TermProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.draw();
    }

    fn item_done(&mut self, _label: &str) {
        self.done += 1;
        self.draw();
    }

    fn finish(&mut self) {
        let _ = writeln!(io::stderr());
    }
}
