#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod loader;
pub mod ports;
pub mod report;

pub use error::SourceError;
pub use loader::{load_ledger, LoadReport, RejectedRow};
pub use ports::{ExpenseSource, IngestObserver, SilentObserver, TracingObserver};
pub use report::{RunReport, SettlementSummary};
