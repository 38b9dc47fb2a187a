use serde::Serialize;

/// Records between two progress events
pub const PROGRESS_INTERVAL: usize = 5000;

/// Snapshot of a running build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BuildProgress {
    /// Source records seen (lines or entries)
    pub processed: usize,
    /// Records that produced at least one index key
    pub indexed: usize,
    /// Records that did not match the expected shape
    pub skipped: usize,
    pub done: bool,
}

/// Outcome of a completed build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BuildReport {
    pub processed: usize,
    pub indexed: usize,
    pub skipped: usize,
    /// Distinct keys in the index, aliases included
    pub keys: usize,
}

/// Counts records and reports them to the caller's callback every
/// [`PROGRESS_INTERVAL`] records, plus once at the end.
pub(crate) struct ProgressTracker<F: FnMut(BuildProgress)> {
    state: BuildProgress,
    callback: F,
}

impl<F: FnMut(BuildProgress)> ProgressTracker<F> {
    pub(crate) fn new(callback: F) -> Self {
        Self {
            state: BuildProgress::default(),
            callback,
        }
    }

    pub(crate) fn indexed(&mut self) {
        self.state.indexed += 1;
        self.advance();
    }

    pub(crate) fn skipped(&mut self) {
        self.state.skipped += 1;
        self.advance();
    }

    fn advance(&mut self) {
        self.state.processed += 1;
        if self.state.processed % PROGRESS_INTERVAL == 0 {
            (self.callback)(self.state);
        }
    }

    pub(crate) fn finish(mut self, keys: usize) -> BuildReport {
        self.state.done = true;
        (self.callback)(self.state);

        BuildReport {
            processed: self.state.processed,
            indexed: self.state.indexed,
            skipped: self.state.skipped,
            keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_every_interval_and_at_end() {
        let mut events = Vec::new();
        let mut tracker = ProgressTracker::new(|p| events.push(p));
        for i in 0..(PROGRESS_INTERVAL * 2 + 3) {
            if i % 10 == 0 {
                tracker.skipped();
            } else {
                tracker.indexed();
            }
        }
        let report = tracker.finish(42);

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].processed, PROGRESS_INTERVAL);
        assert!(!events[1].done);
        assert!(events[2].done);
        assert_eq!(report.processed, PROGRESS_INTERVAL * 2 + 3);
        assert_eq!(report.indexed + report.skipped, report.processed);
        assert_eq!(report.keys, 42);
    }
}
