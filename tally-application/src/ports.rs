use crate::error::SourceError;
use tally_domain::{Expense, RawRow, RowError};

/// Supplies raw rows from wherever the ledger text lives. Row-level decode
/// failures travel inline as `RowError`s so one bad line cannot abort the
/// load; only an unopenable or unreadable source is fatal.
pub trait ExpenseSource {
    fn rows(&mut self) -> Result<Vec<Result<RawRow, RowError>>, SourceError>;
}

/// Injectable reporting collaborator for ingestion diagnostics.
pub trait IngestObserver {
    fn row_accepted(&mut self, _expense: &Expense) {}
    fn row_rejected(&mut self, _row_number: usize, _error: &RowError) {}
}

/// For callers that want no diagnostics at all.
pub struct SilentObserver;

impl IngestObserver for SilentObserver {}

/// Emits accepted rows at debug and rejections at warn.
pub struct TracingObserver;

impl IngestObserver for TracingObserver {
    fn row_accepted(&mut self, expense: &Expense) {
        tracing::debug!(
            date = %expense.date,
            payer = %expense.payer,
            subject = %expense.subject,
            amount = expense.amount,
            "processed expense"
        );
    }

    fn row_rejected(&mut self, row_number: usize, error: &RowError) {
        tracing::warn!(row_number, %error, "skipped row");
    }
}
