use tally_domain::{
    recent_distinct, ConsistencyReport, Expense, Ledger, ParticipantBalance, SettlementPlanner,
    Transfer, Verifier,
};

#[derive(Debug, PartialEq)]
pub struct SettlementSummary<'a> {
    /// Greedy plan order; applying them all zeroes every balance within
    /// tolerance.
    pub transfers: Vec<Transfer<'a>>,
    pub total_transferred: f64,
}

/// Everything the presenters need, snapshotted from a frozen ledger after
/// ingestion has finished.
#[derive(Debug)]
pub struct RunReport<'a> {
    /// Non-zero balances, ascending.
    pub balances: Vec<ParticipantBalance<'a>>,
    /// Sum of positive balances.
    pub total_to_receive: f64,
    /// Sum of absolute negative balances.
    pub total_to_pay: f64,
    pub verification: ConsistencyReport,
    pub settlement: SettlementSummary<'a>,
    pub recent: Vec<&'a Expense>,
}

impl<'a> RunReport<'a> {
    pub fn build(ledger: &'a Ledger, recent_limit: usize) -> Self {
        let balances = ledger.sorted_balances();
        let total_to_receive = balances
            .iter()
            .filter(|entry| entry.balance > 0.0)
            .map(|entry| entry.balance)
            .sum();
        let total_to_pay = balances
            .iter()
            .filter(|entry| entry.balance < 0.0)
            .map(|entry| entry.balance.abs())
            .sum();

        let transfers = SettlementPlanner::plan(ledger.balances());
        let total_transferred = transfers.iter().map(|transfer| transfer.amount).sum();

        Self {
            balances,
            total_to_receive,
            total_to_pay,
            verification: Verifier::verify(ledger),
            settlement: SettlementSummary {
                transfers,
                total_transferred,
            },
            recent: recent_distinct(ledger.transactions(), recent_limit),
        }
    }
}
