use crate::SECTION_RULE;
use std::fmt::Write;
use tally_application::RunReport;

/// Renders the sorted non-zero balances followed by the verification block.
pub struct BalancePresenter;

impl BalancePresenter {
    pub fn render(report: &RunReport<'_>) -> String {
        let mut out = String::new();

        out.push_str("Final Balances:\n");
        out.push_str(SECTION_RULE);
        out.push('\n');
        for entry in &report.balances {
            if entry.balance > 0.0 {
                let _ = writeln!(out, "{} should receive €{:.2}", entry.name, entry.balance);
            } else {
                let _ = writeln!(out, "{} should pay €{:.2}", entry.name, entry.balance.abs());
            }
        }

        let verification = &report.verification;
        out.push_str("\nVerification:\n");
        out.push_str(SECTION_RULE);
        out.push('\n');
        let _ = writeln!(
            out,
            "Number of transactions: {}",
            verification.transaction_count
        );
        let _ = writeln!(
            out,
            "Total money exchanged: €{:.2}",
            verification.total_processed
        );
        let _ = writeln!(out, "Total to be paid: €{:.2}", report.total_to_pay);
        let _ = writeln!(out, "Total to be received: €{:.2}", report.total_to_receive);
        let _ = writeln!(
            out,
            "Balance check difference: €{:.2}",
            verification.total_balance
        );
        let _ = writeln!(
            out,
            "Balance check: {}",
            if verification.is_valid {
                "✓ Valid"
            } else {
                "✗ Invalid"
            }
        );

        out
    }
}
