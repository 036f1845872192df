mod recent_activity;
mod settlement_planner;
mod verifier;

pub use recent_activity::recent_distinct;
pub use settlement_planner::SettlementPlanner;
pub use verifier::{ConsistencyReport, Verifier};
