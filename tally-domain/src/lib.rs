#![warn(clippy::uninlined_format_args)]

pub mod ledger;
pub mod model;
pub mod services;

pub use ledger::{Ledger, RowError};
pub use model::{Expense, ParticipantBalance, RawRow, Transfer, TOLERANCE};
pub use services::{recent_distinct, ConsistencyReport, SettlementPlanner, Verifier};
