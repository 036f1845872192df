use crate::model::{Expense, ParticipantBalance, RawRow, TOLERANCE};
use chrono::NaiveDate;
use fxhash::FxHashMap;
use thiserror::Error;

/// Per-row ingestion failure. Recoverable: the offending row is skipped and
/// ingestion continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("required field `{0}` is missing or empty")]
    MissingField(&'static str),
    #[error("amount `{value}` is not a number")]
    InvalidAmount { value: String },
    #[error("date `{value}` is not a YYYY-MM-DD calendar date")]
    InvalidDate { value: String },
    #[error("participant list is empty after trimming")]
    NoParticipants,
    #[error("row could not be decoded: {detail}")]
    Malformed { detail: String },
}

/// Running signed balance per participant plus the accepted transaction
/// history. Mutated only by `ingest`; final balances are order-independent.
#[derive(Debug, Default)]
pub struct Ledger {
    balances: FxHashMap<String, f64>,
    transactions: Vec<Expense>,
    total_processed: f64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates one raw row and, on success, applies it: the full amount is
    /// credited to the payer and one share is debited per participant
    /// occurrence (the payer included when self-listed). A rejected row
    /// leaves the ledger untouched.
    pub fn ingest(&mut self, row: &RawRow) -> Result<(), RowError> {
        let date_raw = row.date.trim();
        if date_raw.is_empty() {
            return Err(RowError::MissingField("date"));
        }
        let date = NaiveDate::parse_from_str(date_raw, "%Y-%m-%d").map_err(|_| {
            RowError::InvalidDate {
                value: date_raw.to_owned(),
            }
        })?;

        let payer = row.creditor.trim();
        if payer.is_empty() {
            return Err(RowError::MissingField("creditor"));
        }

        let amount_raw = row.amount.trim();
        if amount_raw.is_empty() {
            return Err(RowError::MissingField("amount"));
        }
        let amount: f64 = amount_raw.parse().map_err(|_| RowError::InvalidAmount {
            value: amount_raw.to_owned(),
        })?;

        let participants: Vec<String> = row
            .participants
            .split('/')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .collect();
        if participants.is_empty() {
            return Err(RowError::NoParticipants);
        }

        // Validation is complete; from here the row is committed atomically.
        let share = amount / participants.len() as f64;
        *self.balances.entry(payer.to_owned()).or_insert(0.0) += amount;
        for participant in &participants {
            *self.balances.entry(participant.clone()).or_insert(0.0) -= share;
        }
        self.total_processed += amount.abs();
        self.transactions.push(Expense {
            date,
            payer: payer.to_owned(),
            subject: row.subject.trim().to_owned(),
            amount,
            participants,
            share_per_participant: share,
        });

        Ok(())
    }

    /// Zero for participants the ledger has never seen.
    pub fn balance_of(&self, name: &str) -> f64 {
        self.balances.get(name).copied().unwrap_or(0.0)
    }

    pub fn balances(&self) -> &FxHashMap<String, f64> {
        &self.balances
    }

    /// Accepted records in insertion order.
    pub fn transactions(&self) -> &[Expense] {
        &self.transactions
    }

    /// Sum of absolute amounts of accepted records.
    pub fn total_processed(&self) -> f64 {
        self.total_processed
    }

    /// Balances at or above tolerance, ascending by balance, ties broken
    /// ascending by name so report order is deterministic.
    pub fn sorted_balances(&self) -> Vec<ParticipantBalance<'_>> {
        let mut entries: Vec<ParticipantBalance<'_>> = self
            .balances
            .iter()
            .filter(|(_, balance)| balance.abs() >= TOLERANCE)
            .map(|(name, &balance)| ParticipantBalance {
                name: name.as_str(),
                balance,
            })
            .collect();
        entries.sort_by(|a, b| {
            a.balance
                .total_cmp(&b.balance)
                .then_with(|| a.name.cmp(b.name))
        });
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn row(date: &str, creditor: &str, subject: &str, amount: &str, participants: &str) -> RawRow {
        RawRow {
            date: date.to_owned(),
            creditor: creditor.to_owned(),
            subject: subject.to_owned(),
            amount: amount.to_owned(),
            participants: participants.to_owned(),
        }
    }

    #[test]
    fn ingest_splits_amount_across_participants() {
        let mut ledger = Ledger::new();
        ledger
            .ingest(&row("2024-05-01", "A", "dinner", "30", "A/B/C"))
            .expect("row should be accepted");

        assert_eq!(ledger.balance_of("A"), 30.0 - 10.0);
        assert_eq!(ledger.balance_of("B"), -10.0);
        assert_eq!(ledger.balance_of("C"), -10.0);
        assert_eq!(ledger.total_processed(), 30.0);
        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.transactions()[0].share_per_participant, 10.0);
    }

    #[test]
    fn ingest_trims_identities_and_discards_empty_tokens() {
        let mut ledger = Ledger::new();
        ledger
            .ingest(&row("2024-05-01", " A ", " taxi ", " 20 ", " A / B //"))
            .expect("row should be accepted");

        assert_eq!(ledger.balance_of("A"), 20.0 - 10.0);
        assert_eq!(ledger.balance_of("B"), -10.0);
        assert_eq!(ledger.transactions()[0].subject, "taxi");
        assert_eq!(ledger.transactions()[0].participants, vec!["A", "B"]);
    }

    #[test]
    fn duplicate_participants_each_carry_one_share() {
        let mut ledger = Ledger::new();
        ledger
            .ingest(&row("2024-05-01", "A", "rooms", "30", "B/B/C"))
            .expect("row should be accepted");

        assert_eq!(ledger.balance_of("A"), 30.0);
        assert_eq!(ledger.balance_of("B"), -20.0);
        assert_eq!(ledger.balance_of("C"), -10.0);
    }

    #[test]
    fn negative_amount_reverses_direction_and_adds_to_total_processed() {
        let mut ledger = Ledger::new();
        ledger
            .ingest(&row("2024-05-02", "A", "refund", "-12", "A/B"))
            .expect("row should be accepted");

        assert_eq!(ledger.balance_of("A"), -12.0 + 6.0);
        assert_eq!(ledger.balance_of("B"), 6.0);
        assert_eq!(ledger.total_processed(), 12.0);
    }

    #[rstest]
    #[case::unparsable_amount(
        row("2024-05-01", "A", "x", "abc", "A/B"),
        RowError::InvalidAmount { value: "abc".to_owned() }
    )]
    #[case::empty_amount(
        row("2024-05-01", "A", "x", "  ", "A/B"),
        RowError::MissingField("amount")
    )]
    #[case::bad_date(
        row("05/01/2024", "A", "x", "10", "A/B"),
        RowError::InvalidDate { value: "05/01/2024".to_owned() }
    )]
    #[case::empty_date(row("", "A", "x", "10", "A/B"), RowError::MissingField("date"))]
    #[case::empty_creditor(row("2024-05-01", " ", "x", "10", "A/B"), RowError::MissingField("creditor"))]
    #[case::no_participants(row("2024-05-01", "A", "x", "10", " / / "), RowError::NoParticipants)]
    fn rejected_rows_leave_state_untouched(#[case] bad: RawRow, #[case] expected: RowError) {
        let mut ledger = Ledger::new();
        ledger
            .ingest(&row("2024-05-01", "A", "dinner", "30", "A/B/C"))
            .expect("seed row should be accepted");
        let balances_before = ledger.balances().clone();

        assert_eq!(ledger.ingest(&bad), Err(expected));
        assert_eq!(ledger.balances(), &balances_before);
        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.total_processed(), 30.0);

        // Ingestion continues after a rejection.
        ledger
            .ingest(&row("2024-05-03", "B", "coffee", "6", "A/B"))
            .expect("later row should still be accepted");
        assert_eq!(ledger.transactions().len(), 2);
    }

    #[test]
    fn empty_subject_is_accepted() {
        let mut ledger = Ledger::new();
        ledger
            .ingest(&row("2024-05-01", "A", "", "10", "A/B"))
            .expect("subject is free text and may be empty");
        assert_eq!(ledger.transactions()[0].subject, "");
    }

    #[test]
    fn balance_of_defaults_to_zero_for_unseen_names() {
        let ledger = Ledger::new();
        assert_eq!(ledger.balance_of("nobody"), 0.0);
    }

    #[test]
    fn sorted_balances_ascending_with_name_tiebreak() {
        let mut ledger = Ledger::new();
        // A fronts 30 for B and C: A = +30, B = -15, C = -15.
        ledger
            .ingest(&row("2024-05-01", "A", "dinner", "30", "B/C"))
            .expect("row should be accepted");

        let sorted = ledger.sorted_balances();
        let names: Vec<&str> = sorted.iter().map(|entry| entry.name).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn sorted_balances_hides_settled_participants() {
        let mut ledger = Ledger::new();
        ledger
            .ingest(&row("2024-05-01", "A", "even split", "10", "A/B"))
            .expect("row should be accepted");
        ledger
            .ingest(&row("2024-05-02", "B", "even split back", "10", "A/B"))
            .expect("row should be accepted");

        assert!(ledger.sorted_balances().is_empty());
    }
}
