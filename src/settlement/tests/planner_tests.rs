use std::collections::HashMap;
use std::str::FromStr;

use pretty_assertions::assert_eq;
use rstest::rstest;
use rust_decimal::Decimal;

use crate::ledger::BalanceSheet;
use crate::record::ParticipantName;
use crate::settlement::SettlementError;
use crate::settlement::Transfer;
use crate::settlement::plan;

#[test]
fn plan_on_an_empty_sheet_returns_an_empty_plan() {
    let balance_sheet = sheet(&[]);
    assert_eq!(Vec::<Transfer>::new(), plan(&balance_sheet).unwrap());
}

#[test]
fn plan_on_an_already_settled_sheet_returns_an_empty_plan() {
    let balance_sheet = sheet(&[("Alice", "0.00"), ("Bob", "0.00")]);
    assert_eq!(Vec::<Transfer>::new(), plan(&balance_sheet).unwrap());
}

#[test]
fn plan_treats_balances_within_tolerance_as_settled() {
    let balance_sheet = sheet(&[("Alice", "0.005"), ("Bob", "-0.005")]);
    assert_eq!(Vec::<Transfer>::new(), plan(&balance_sheet).unwrap());
}

#[test]
fn plan_settles_two_parties_with_a_single_transfer() {
    let balance_sheet = sheet(&[("Alice", "10.00"), ("Bob", "-10.00")]);
    assert_eq!(vec![transfer("Bob", "Alice", "10.00")], plan(&balance_sheet).unwrap());
}

#[test]
fn plan_pairs_the_largest_debtor_with_the_largest_creditor_first() {
    let balance_sheet = sheet(&[("Alice", "30.00"), ("Bob", "-10.00"), ("Carol", "-20.00")]);
    assert_eq!(
        vec![transfer("Carol", "Alice", "20.00"), transfer("Bob", "Alice", "10.00")],
        plan(&balance_sheet).unwrap()
    );
}

#[test]
fn plan_breaks_amount_ties_by_lexicographically_smaller_name() {
    let balance_sheet = sheet(&[
        ("Alice", "10.00"),
        ("Dave", "10.00"),
        ("Bob", "-10.00"),
        ("Carol", "-10.00"),
    ]);
    assert_eq!(
        vec![transfer("Bob", "Alice", "10.00"), transfer("Carol", "Dave", "10.00")],
        plan(&balance_sheet).unwrap()
    );
}

#[test]
fn plan_rejects_balances_that_do_not_sum_to_zero() {
    let balance_sheet = sheet(&[("Alice", "10.00"), ("Bob", "-5.00")]);
    assert2::let_assert!(Err(SettlementError::Unbalanced { residual }) = plan(&balance_sheet));
    assert_eq!(dec("5.00"), residual);
}

#[rstest]
#[case(&[("Alice", "33.34"), ("Bob", "-16.67"), ("Carol", "-16.67")])]
#[case(&[("Alice", "50.00"), ("Bob", "25.50"), ("Carol", "-60.25"), ("Dave", "-15.25")])]
#[case(&[("Alice", "100.00"), ("Bob", "-99.995"), ("Carol", "-0.005")])]
fn plan_applied_to_its_input_drives_every_balance_within_tolerance(#[case] balances: &[(&str, &str)]) {
    let balance_sheet = sheet(balances);
    let transfers = plan(&balance_sheet).unwrap();

    let mut remaining: HashMap<ParticipantName, Decimal> = balance_sheet.balances().clone();
    for t in &transfers {
        *remaining.get_mut(&t.from).unwrap() += t.amount;
        *remaining.get_mut(&t.to).unwrap() -= t.amount;
    }
    for (name, balance) in remaining {
        assert!(balance.abs() <= dec("0.01"), "unsettled name={name} balance={balance}");
    }
}

#[rstest]
#[case(&[("Alice", "10.00"), ("Bob", "-10.00")])]
#[case(&[("Alice", "30.00"), ("Bob", "-10.00"), ("Carol", "-20.00")])]
#[case(&[("Alice", "50.00"), ("Bob", "25.50"), ("Carol", "-60.25"), ("Dave", "-15.25")])]
fn plan_emits_at_most_one_transfer_less_than_the_unsettled_party_count(#[case] balances: &[(&str, &str)]) {
    let balance_sheet = sheet(balances);
    let transfers = plan(&balance_sheet).unwrap();
    assert!(
        transfers.len() <= balances.len() - 1,
        "transfers={} parties={}",
        transfers.len(),
        balances.len()
    );
}

#[rstest]
#[case(&[("Alice", "33.34"), ("Bob", "-16.67"), ("Carol", "-16.67")])]
#[case(&[("Alice", "50.00"), ("Bob", "25.50"), ("Carol", "-60.25"), ("Dave", "-15.25")])]
fn plan_amounts_are_positive_and_at_most_two_decimal_places(#[case] balances: &[(&str, &str)]) {
    let balance_sheet = sheet(balances);
    for t in plan(&balance_sheet).unwrap() {
        assert!(t.amount > Decimal::ZERO, "non-positive amount in {t}");
        assert!(t.amount.scale() <= 2, "amount {t} has scale {}", t.amount.scale());
    }
}

#[test]
fn transfer_displays_as_a_payment_instruction() {
    assert_eq!("Bob pays Alice 10.00", transfer("Bob", "Alice", "10.00").to_string());
}

fn sheet(balances: &[(&str, &str)]) -> BalanceSheet {
    balances.iter().map(|(n, b)| (name(n), dec(b))).collect()
}

fn transfer(from: &str, to: &str, amount: &str) -> Transfer {
    Transfer {
        from: name(from),
        to: name(to),
        amount: dec(amount),
    }
}

fn name(name: &str) -> ParticipantName {
    ParticipantName::try_from(name.to_owned()).unwrap()
}

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}
