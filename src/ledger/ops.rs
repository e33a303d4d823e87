//! Free functions that mutate a supplied [`BalanceSheet`].
//!
//! The sheet is a plain data container owned by the caller; every business
//! operation that touches it lives here as a free function taking
//! `&mut BalanceSheet`, so mutability is explicit at the call site and the
//! allocation invariants stay auditable in one place.

use rust_decimal::Decimal;

use crate::ledger::BalanceSheet;
use crate::record::Expense;
use crate::record::ParticipantName;

#[derive(thiserror::Error, Debug)]
pub enum LedgerError {
    #[error("participant already in the group name={name}")]
    DuplicateParticipant { name: ParticipantName },
    #[error("payer is not in the group expense={expense}")]
    UnknownPayer { expense: Expense },
    #[error("overflow while allocating expense={expense}")]
    AllocationOverflow { expense: Expense },
}

/// Adds a participant to the group with a zero balance.
///
/// # Errors
///
/// Returns an error if:
/// - The participant is already in the group ([`LedgerError::DuplicateParticipant`]).
pub fn add_participant(balance_sheet: &mut BalanceSheet, name: ParticipantName) -> Result<(), LedgerError> {
    if balance_sheet.contains(&name) {
        return Err(LedgerError::DuplicateParticipant { name });
    }
    balance_sheet.balances.insert(name, Decimal::ZERO);
    Ok(())
}

/// Splits the expense evenly across the whole group: the payer is credited
/// the full amount, every participant including the payer is debited an even
/// share. Successful allocations keep the sheet zero-sum up to division dust.
///
/// # Errors
///
/// Returns an error if:
/// - The payer is not in the group ([`LedgerError::UnknownPayer`]).
/// - Computing the share or adjusting a balance overflows ([`LedgerError::AllocationOverflow`]).
pub fn record_expense(balance_sheet: &mut BalanceSheet, expense: &Expense) -> Result<(), LedgerError> {
    if !balance_sheet.contains(&expense.payer) {
        return Err(LedgerError::UnknownPayer {
            expense: expense.clone(),
        });
    }

    // The payer is in the group, so the group is non-empty.
    let share = expense
        .amount
        .as_inner()
        .checked_div(Decimal::from(balance_sheet.group_size()))
        .ok_or_else(|| allocation_overflow_error(expense))?;

    // Stage every new balance before committing any, so a failed allocation
    // leaves the sheet untouched.
    let mut staged = Vec::with_capacity(balance_sheet.group_size());
    for (name, balance) in balance_sheet.balances.iter() {
        let mut updated = balance
            .checked_sub(share)
            .ok_or_else(|| allocation_overflow_error(expense))?;
        if *name == expense.payer {
            updated = updated
                .checked_add(expense.amount.as_inner())
                .ok_or_else(|| allocation_overflow_error(expense))?;
        }
        staged.push((name.clone(), updated));
    }
    for (name, updated) in staged {
        balance_sheet.balances.insert(name, updated);
    }

    Ok(())
}

fn allocation_overflow_error(expense: &Expense) -> LedgerError {
    LedgerError::AllocationOverflow {
        expense: expense.clone(),
    }
}
