use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::record::ParticipantName;

/// Net position of every participant in the group.
///
/// A positive balance means the group owes the participant money, a negative
/// one means the participant owes the group.
#[derive(Debug, Default)]
pub struct BalanceSheet {
    pub(in crate::ledger) balances: HashMap<ParticipantName, Decimal>,
}

impl BalanceSheet {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
        }
    }

    pub fn contains(&self, name: &ParticipantName) -> bool {
        self.balances.contains_key(name)
    }

    pub fn group_size(&self) -> usize {
        self.balances.len()
    }

    pub fn balances(&self) -> &HashMap<ParticipantName, Decimal> {
        &self.balances
    }
}

#[cfg(test)]
impl FromIterator<(ParticipantName, Decimal)> for BalanceSheet {
    fn from_iter<T: IntoIterator<Item = (ParticipantName, Decimal)>>(iter: T) -> Self {
        Self {
            balances: iter.into_iter().collect(),
        }
    }
}
