use crate::model::Expense;
use chrono::NaiveDate;
use fxhash::FxHashSet;

/// The `limit` most recent distinct records, newest first. Distinctness key
/// is (date, payer, amount): a second record with the same key is not shown
/// again even when its subject or participants differ. The sort is stable,
/// so same-date records keep their ingestion order.
pub fn recent_distinct(transactions: &[Expense], limit: usize) -> Vec<&Expense> {
    let mut ordered: Vec<&Expense> = transactions.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));

    let mut seen: FxHashSet<(NaiveDate, &str, u64)> = FxHashSet::default();
    let mut recent = Vec::with_capacity(limit.min(ordered.len()));
    for expense in ordered {
        if !seen.insert((expense.date, expense.payer.as_str(), expense.amount.to_bits())) {
            continue;
        }
        recent.push(expense);
        if recent.len() == limit {
            break;
        }
    }
    recent
}
