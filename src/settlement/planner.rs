use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

use crate::ledger::BalanceSheet;
use crate::record::ParticipantName;

#[cfg(test)]
#[path = "tests/planner_tests.rs"]
mod planner_tests;

/// A point-to-point payment instruction: `from` pays `to` the given amount.
#[derive(Debug, Clone, parse_display::Display)]
#[display("{from} pays {to} {amount}")]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Transfer {
    pub from: ParticipantName,
    pub to: ParticipantName,
    pub amount: Decimal,
}

#[derive(thiserror::Error, Debug)]
pub enum SettlementError {
    #[error("balances do not sum to zero residual={residual}")]
    Unbalanced { residual: Decimal },
}

/// Computes the settlement plan for the supplied balance sheet.
///
/// Pure function of its input: the sheet is read only and no state survives
/// the call. Balances within [`settled_tolerance`] of zero count as already
/// settled; a sheet where every balance is settled yields an empty plan.
/// Greedy largest-debtor/largest-creditor pairing keeps the plan short (at
/// most one transfer less than the number of unsettled parties) but is a
/// heuristic, not a guaranteed global minimum.
///
/// # Errors
///
/// Returns an error if:
/// - The balances sum to more than the tolerance in absolute value
///   ([`SettlementError::Unbalanced`]).
pub fn plan(balance_sheet: &BalanceSheet) -> Result<Vec<Transfer>, SettlementError> {
    let tolerance = settled_tolerance();

    let residual: Decimal = balance_sheet.balances().values().sum();
    if residual.abs() > tolerance {
        return Err(SettlementError::Unbalanced { residual });
    }

    let mut creditors: Vec<OpenParty> = Vec::new();
    let mut debtors: Vec<OpenParty> = Vec::new();
    for (name, balance) in balance_sheet.balances() {
        if *balance > tolerance {
            creditors.push(OpenParty {
                name: name.clone(),
                remaining: *balance,
            });
        } else if *balance < -tolerance {
            debtors.push(OpenParty {
                name: name.clone(),
                remaining: -*balance,
            });
        }
    }

    let mut transfers = Vec::new();
    loop {
        let (Some(debtor_idx), Some(creditor_idx)) = (largest_open(&debtors), largest_open(&creditors)) else {
            break;
        };

        let payment = debtors[debtor_idx].remaining.min(creditors[creditor_idx].remaining);

        transfers.push(Transfer {
            from: debtors[debtor_idx].name.clone(),
            to: creditors[creditor_idx].name.clone(),
            amount: payment.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        });

        debtors[debtor_idx].remaining -= payment;
        creditors[creditor_idx].remaining -= payment;

        // Each step fully settles at least one party, so this terminates.
        if debtors[debtor_idx].remaining < tolerance {
            debtors.swap_remove(debtor_idx);
        }
        if creditors[creditor_idx].remaining < tolerance {
            creditors.swap_remove(creditor_idx);
        }
    }

    Ok(transfers)
}

/// Balances within this distance of zero count as settled. Absorbs the
/// division dust left by equal-split allocation.
fn settled_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

struct OpenParty {
    name: ParticipantName,
    remaining: Decimal,
}

/// Largest remaining amount wins; ties go to the lexicographically smaller
/// name so plans are deterministic.
fn largest_open(parties: &[OpenParty]) -> Option<usize> {
    parties
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.remaining.cmp(&b.remaining).then_with(|| b.name.cmp(&a.name)))
        .map(|(idx, _)| idx)
}
