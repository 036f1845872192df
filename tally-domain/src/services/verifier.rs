use crate::ledger::Ledger;
use crate::model::TOLERANCE;

/// Aggregate conservation check over a ledger snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyReport {
    /// True iff the balances sum to zero within tolerance. The tolerance
    /// covers floating-point accumulation, so a genuinely wrong ledger that
    /// is off by less than a cent still passes.
    pub is_valid: bool,
    pub total_balance: f64,
    pub total_processed: f64,
    pub transaction_count: usize,
}

pub struct Verifier;

impl Verifier {
    /// Pure over the ledger's aggregate state: calling it twice on the same
    /// ledger yields identical reports.
    pub fn verify(ledger: &Ledger) -> ConsistencyReport {
        let total_balance: f64 = ledger.balances().values().sum();
        ConsistencyReport {
            is_valid: total_balance.abs() < TOLERANCE,
            total_balance,
            total_processed: ledger.total_processed(),
            transaction_count: ledger.transactions().len(),
        }
    }
}
