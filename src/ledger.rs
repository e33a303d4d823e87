//! Group balance tracking.
//!
//! Provides [`BalanceSheet`], the net position of every participant in the
//! group, and the [`ops`] free functions that mutate it while recording
//! participants and expenses.

pub mod balance_sheet;
pub mod ops;

pub use balance_sheet::BalanceSheet;
pub use ops::LedgerError;
pub use ops::add_participant;
pub use ops::record_expense;
