#![warn(clippy::uninlined_format_args)]

mod activity_presenter;
mod balance_presenter;
mod settlement_presenter;

pub use activity_presenter::ActivityPresenter;
pub use balance_presenter::BalancePresenter;
pub use settlement_presenter::SettlementPresenter;

const SECTION_RULE: &str =
    "==================================================";
const STEP_RULE: &str = "--------------------------------------------------";
