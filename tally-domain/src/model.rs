use chrono::NaiveDate;
use serde::Deserialize;

/// Absolute threshold below which a balance or transfer is treated as zero.
///
/// Compensates for floating-point accumulation across many shares; it is not
/// a correctness proof and can mask genuinely tiny accounting errors.
pub const TOLERANCE: f64 = 0.01;

/// One row as supplied by the parsing collaborator, fields still raw strings.
/// `participants` holds identities joined by `/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRow {
    pub date: String,
    pub creditor: String,
    pub subject: String,
    pub amount: String,
    pub participants: String,
}

/// A validated shared-expense record. Immutable once ingested.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub date: NaiveDate,
    /// The participant who fronted the money (the one owed money back).
    pub payer: String,
    /// Free-text label, no semantic meaning to the algorithm.
    pub subject: String,
    /// Signed total cost; negative means refund/correction.
    pub amount: f64,
    /// Non-empty. Duplicates are preserved: each occurrence counts as one share.
    pub participants: Vec<String>,
    /// `amount / participants.len()`, stored for reporting.
    pub share_per_participant: f64,
}

/// A settlement step: `from` pays `to` exactly `amount`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transfer<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticipantBalance<'a> {
    pub name: &'a str,
    /// Positive: is owed money. Negative: owes money.
    pub balance: f64,
}
