use crate::{
    DebtLedger, ParticipantId, ResultEngine, Settlement, SettlementParty, participant::name_key,
};

impl DebtLedger {
    /// Applies settlements in input order; later ones see earlier reductions.
    ///
    /// All settlements are validated first. Settlements that cannot be bound
    /// to an existing debt are skipped.
    pub fn apply_settlements(&mut self, settlements: &[Settlement]) -> ResultEngine<()> {
        for settlement in settlements {
            settlement.validate()?;
        }

        let applied = settlements
            .iter()
            .filter(|settlement| self.apply_settlement(settlement))
            .count();
        tracing::debug!(
            applied,
            skipped = settlements.len() - applied,
            "settlements applied"
        );
        Ok(())
    }

    /// Reduces the debt `from -> to` by the settlement amount.
    ///
    /// A remainder of one cent or less removes the edge. Returns `false` when
    /// either party is unknown or no such debt exists; no reverse debt is ever
    /// created.
    pub fn apply_settlement(&mut self, settlement: &Settlement) -> bool {
        let (Some(debtor), Some(creditor)) =
            (self.resolve(&settlement.from), self.resolve(&settlement.to))
        else {
            tracing::debug!(
                from = %settlement.from.name,
                to = %settlement.to.name,
                "settlement does not match any participant"
            );
            return false;
        };

        let key = (debtor, creditor);
        let Some(owed) = self.edges.get_mut(&key) else {
            tracing::debug!(
                from = %settlement.from.name,
                to = %settlement.to.name,
                "settlement has no outstanding debt to reduce"
            );
            return false;
        };

        let remaining = *owed - settlement.amount;
        if remaining.is_settled() {
            self.edges.shift_remove(&key);
        } else {
            *owed = remaining;
        }
        true
    }

    /// Binds a settlement party to a participant: by id when the id is known,
    /// otherwise by display name (first participant seen wins).
    pub fn resolve(&self, party: &SettlementParty) -> Option<ParticipantId> {
        if let Some(id) = &party.id
            && self.participants.contains_key(id)
        {
            return Some(id.clone());
        }

        let key = name_key(&party.name);
        let mut candidates = self
            .participants
            .values()
            .filter(|participant| participant.name_key() == key);
        let first = candidates.next()?;
        let others = candidates.count();
        if others > 0 {
            tracing::warn!(
                name = %party.name,
                matches = others + 1,
                chosen = %first.id,
                "ambiguous settlement party name, using the first participant"
            );
        }
        Some(first.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Expense, Money, Participant};

    use super::*;

    fn alice() -> Participant {
        Participant::new("a", "alice")
    }

    fn bob() -> Participant {
        Participant::new("b", "bob")
    }

    fn carol() -> Participant {
        Participant::new("c", "carol")
    }

    /// bob and carol each owe alice 100.00.
    fn ledger() -> DebtLedger {
        DebtLedger::from_expenses(&[Expense::new(
            Money::from_cents(30_000),
            "hotel",
            alice(),
            vec![alice(), bob(), carol()],
        )])
        .unwrap()
    }

    fn pay(from: &str, to: &str, cents: i64) -> Settlement {
        Settlement::new(
            SettlementParty::by_name(from),
            SettlementParty::by_name(to),
            Money::from_cents(cents),
        )
    }

    #[test]
    fn partial_settlement_reduces_debt() {
        let mut ledger = ledger();
        assert!(ledger.apply_settlement(&pay("bob", "alice", 4_000)));
        assert_eq!(ledger.owed(&bob().id, &alice().id), Some(Money::from_cents(6_000)));
    }

    #[test]
    fn exact_settlement_removes_edge() {
        let mut ledger = ledger();
        ledger.apply_settlements(&[pay("bob", "alice", 10_000)]).unwrap();
        assert_eq!(ledger.owed(&bob().id, &alice().id), None);
        assert_eq!(ledger.owed(&carol().id, &alice().id), Some(Money::from_cents(10_000)));
    }

    #[test]
    fn remainder_of_one_cent_counts_as_paid() {
        let mut ledger = ledger();
        ledger.apply_settlement(&pay("bob", "alice", 9_999));
        assert_eq!(ledger.owed(&bob().id, &alice().id), None);
    }

    #[test]
    fn overpayment_never_creates_reverse_debt() {
        let mut ledger = ledger();
        ledger.apply_settlement(&pay("bob", "alice", 50_000));
        assert_eq!(ledger.owed(&bob().id, &alice().id), None);
        assert_eq!(ledger.owed(&alice().id, &bob().id), None);
    }

    #[test]
    fn unmatched_settlements_are_no_ops() {
        let mut ledger = ledger();
        let before = ledger.clone();

        assert!(!ledger.apply_settlement(&pay("bob", "carol", 1_000)));
        assert!(!ledger.apply_settlement(&pay("alice", "bob", 1_000)));
        assert!(!ledger.apply_settlement(&pay("mallory", "alice", 1_000)));
        assert_eq!(ledger, before);
    }

    #[test]
    fn sequential_settlements_see_earlier_ones() {
        let mut ledger = ledger();
        ledger
            .apply_settlements(&[pay("bob", "alice", 6_000), pay("bob", "alice", 4_000)])
            .unwrap();
        assert_eq!(ledger.owed(&bob().id, &alice().id), None);
    }

    #[test]
    fn invalid_settlement_rejects_the_batch() {
        let mut ledger = ledger();
        let before = ledger.clone();
        let result = ledger.apply_settlements(&[pay("bob", "alice", 1_000), pay("bob", "alice", 0)]);

        assert!(result.is_err());
        assert_eq!(ledger, before);
    }

    #[test]
    fn resolve_prefers_id_over_name() {
        let twin = Participant::new("b2", "bob");
        let ledger = DebtLedger::from_expenses(&[Expense::new(
            Money::from_cents(30_000),
            "hotel",
            alice(),
            vec![alice(), bob(), twin],
        )])
        .unwrap();

        assert_eq!(
            ledger.resolve(&SettlementParty::new("b2", "bob")),
            Some(ParticipantId::from("b2"))
        );
        assert_eq!(
            ledger.resolve(&SettlementParty::by_name("bob")),
            Some(ParticipantId::from("b"))
        );
        assert_eq!(
            ledger.resolve(&SettlementParty::new("gone", "bob")),
            Some(ParticipantId::from("b"))
        );
        assert_eq!(ledger.resolve(&SettlementParty::by_name("dave")), None);
    }
}
