use crate::{SECTION_RULE, STEP_RULE};
use std::fmt::Write;
use tally_application::SettlementSummary;

/// Renders the ordered transfer plan with its totals.
pub struct SettlementPresenter;

impl SettlementPresenter {
    pub fn render(settlement: &SettlementSummary<'_>) -> String {
        let mut out = String::new();

        out.push_str("Debt Resolution Steps:\n");
        out.push_str(SECTION_RULE);
        out.push('\n');

        if settlement.transfers.is_empty() {
            out.push_str("No debts to resolve!\n");
            return out;
        }

        out.push_str("To resolve all debts, the following payments should be made:\n\n");
        for transfer in &settlement.transfers {
            let _ = writeln!(
                out,
                "➤ {} should pay €{:.2} to {}",
                transfer.from, transfer.amount, transfer.to
            );
        }

        out.push('\n');
        out.push_str(STEP_RULE);
        out.push('\n');
        let _ = writeln!(
            out,
            "Total money to be transferred: €{:.2}",
            settlement.total_transferred
        );
        let _ = writeln!(
            out,
            "Number of transactions needed: {}",
            settlement.transfers.len()
        );

        out
    }
}
