use crate::error::SourceError;
use crate::ports::{ExpenseSource, IngestObserver};
use tally_domain::{Ledger, RowError};

/// A row the ledger refused, kept so no failure goes unsurfaced.
#[derive(Debug, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based position in the source, header excluded.
    pub row_number: usize,
    pub error: RowError,
}

#[derive(Debug)]
pub struct LoadReport {
    pub ledger: Ledger,
    pub rejected: Vec<RejectedRow>,
}

/// Single linear ingestion pass. Every row is either committed to the ledger
/// or reported to the observer and recorded in `rejected`; a failed row never
/// stops the rows after it.
pub fn load_ledger<S: ExpenseSource>(
    source: &mut S,
    observer: &mut dyn IngestObserver,
) -> Result<LoadReport, SourceError> {
    let mut ledger = Ledger::new();
    let mut rejected = Vec::new();

    for (index, item) in source.rows()?.into_iter().enumerate() {
        let row_number = index + 1;
        let outcome = item.and_then(|row| ledger.ingest(&row));
        match outcome {
            Ok(()) => {
                if let Some(expense) = ledger.transactions().last() {
                    observer.row_accepted(expense);
                }
            }
            Err(error) => {
                observer.row_rejected(row_number, &error);
                rejected.push(RejectedRow { row_number, error });
            }
        }
    }

    Ok(LoadReport { ledger, rejected })
}
