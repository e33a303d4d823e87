//! Debt settlement planning.
//!
//! Provides [`plan`] which turns a [`crate::ledger::BalanceSheet`] into an
//! ordered list of [`Transfer`]s that zeroes every balance, pairing the
//! largest remaining debtor with the largest remaining creditor at each step.

pub mod planner;

pub use planner::SettlementError;
pub use planner::Transfer;
pub use planner::plan;
