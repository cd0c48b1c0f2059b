//! The balance report: who still owes whom, rounded to cents.

use crate::{Money, ParticipantId};

/// One creditor line inside a [`BalanceEntry`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwedAmount {
    pub to: String,
    pub to_id: ParticipantId,
    /// Rounded to cents, always > 0.01.
    pub amount: Money,
}

/// Everything a single debtor still owes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BalanceEntry {
    pub debtor: String,
    pub debtor_id: ParticipantId,
    pub owes: Vec<OwedAmount>,
}

/// Entries in participant first-seen order. Empty when the group is settled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BalanceReport {
    pub entries: Vec<BalanceEntry>,
}

impl BalanceReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BalanceEntry> {
        self.entries.iter()
    }

    /// Entry for the debtor with this display name, if they owe anything.
    pub fn entry(&self, debtor: &str) -> Option<&BalanceEntry> {
        self.entries.iter().find(|entry| entry.debtor == debtor)
    }

    /// Rounded amount `debtor` owes `creditor`, looked up by display name.
    pub fn owed(&self, debtor: &str, creditor: &str) -> Option<Money> {
        self.entry(debtor)?
            .owes
            .iter()
            .find(|owed| owed.to == creditor)
            .map(|owed| owed.amount)
    }
}

impl IntoIterator for BalanceReport {
    type Item = BalanceEntry;
    type IntoIter = std::vec::IntoIter<BalanceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a BalanceReport {
    type Item = &'a BalanceEntry;
    type IntoIter = std::slice::Iter<'a, BalanceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
