use tracing::info;

use crate::enrich::RowNotes;

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub rows_read: usize,
    pub rows_written: usize,
    pub rows_skipped: usize,
    pub passed_through: usize,
    pub pressure_pipes: usize,
    pub sizes_unparsed: usize,
    pub mpl_missing: usize,
    pub accounts_unmatched: usize,
}

impl BatchStats {
    pub fn record(&mut self, notes: &RowNotes) {
        self.pressure_pipes += usize::from(notes.pressure_pipe);
        self.sizes_unparsed += usize::from(notes.size_unparsed);
        self.mpl_missing += usize::from(notes.mpl_unknown);
        self.accounts_unmatched += usize::from(notes.account_unmatched);
    }

    pub fn log_summary(&self) {
        info!(
            rows_read = self.rows_read,
            rows_written = self.rows_written,
            rows_skipped = self.rows_skipped,
            passed_through = self.passed_through,
            pressure_pipes = self.pressure_pipes,
            sizes_unparsed = self.sizes_unparsed,
            mpl_missing = self.mpl_missing,
            accounts_unmatched = self.accounts_unmatched,
            "enrichment finished"
        );
    }
}
