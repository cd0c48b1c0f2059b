use crate::{BalanceEntry, BalanceReport, DebtLedger, OwedAmount};

impl DebtLedger {
    /// Formats the remaining edges into a [`BalanceReport`].
    ///
    /// Debtors follow participant first-seen order, creditors follow edge
    /// order. Amounts of one cent or less are dropped; the rest are rounded
    /// to cents here and nowhere else. Does not modify the ledger.
    pub fn report(&self) -> BalanceReport {
        let mut entries = Vec::new();

        for participant in self.participants.values() {
            let owes: Vec<OwedAmount> = self
                .edges()
                .filter(|edge| edge.debtor == &participant.id && !edge.amount.is_settled())
                .map(|edge| OwedAmount {
                    to: self.display_name(edge.creditor).to_string(),
                    to_id: edge.creditor.clone(),
                    amount: edge.amount.round_cents(),
                })
                .collect();

            if !owes.is_empty() {
                entries.push(BalanceEntry {
                    debtor: participant.name.clone(),
                    debtor_id: participant.id.clone(),
                    owes,
                });
            }
        }

        BalanceReport { entries }
    }
}
