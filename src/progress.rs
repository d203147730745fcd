// src/progress.rs
/// Lightweight progress reporting used by batch extraction.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of pages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page processed; `found` tells whether it yielded coordinates.
    fn item_done(&mut self, _index: usize, _label: &str, _found: bool) {}

    /// One page could not be read.
    fn item_failed(&mut self, _index: usize, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
