use crate::{SECTION_RULE, STEP_RULE};
use std::fmt::Write;
use tally_domain::Expense;

/// Renders the recent-transactions section, newest first.
pub struct ActivityPresenter;

impl ActivityPresenter {
    pub fn render(recent: &[&Expense], limit: usize) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Most Recent {limit} Transactions:");
        out.push_str(SECTION_RULE);
        out.push('\n');

        for expense in recent {
            let _ = writeln!(out, "Date: {}", expense.date);
            let _ = writeln!(out, "Paid by: {}", expense.payer);
            let _ = writeln!(out, "Subject: {}", expense.subject);
            let _ = writeln!(out, "Amount: €{:.2}", expense.amount);
            let _ = writeln!(
                out,
                "Split between ({} people): {}",
                expense.participants.len(),
                expense.participants.join(", ")
            );
            let _ = writeln!(out, "Share per person: €{:.2}", expense.share_per_participant);
            out.push_str(&STEP_RULE[..30]);
            out.push('\n');
        }

        out
    }
}
