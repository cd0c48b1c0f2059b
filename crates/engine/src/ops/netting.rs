use std::cmp::Ordering;

use crate::DebtLedger;

impl DebtLedger {
    /// Collapses every pair that owes in both directions into a single edge
    /// carrying the difference. Equal debts cancel completely.
    ///
    /// The surviving edge keeps its position in the edge order.
    pub fn cancel_reciprocal(&mut self) {
        let keys: Vec<_> = self.edges.keys().cloned().collect();
        let mut netted = 0usize;

        for (debtor, creditor) in keys {
            let forward_key = (debtor, creditor);
            let Some(&forward) = self.edges.get(&forward_key) else {
                continue;
            };
            let reverse_key = (forward_key.1.clone(), forward_key.0.clone());
            let Some(&reverse) = self.edges.get(&reverse_key) else {
                continue;
            };

            match forward.cmp(&reverse) {
                Ordering::Greater => {
                    self.edges.insert(forward_key, forward - reverse);
                    self.edges.shift_remove(&reverse_key);
                }
                Ordering::Less => {
                    self.edges.insert(reverse_key, reverse - forward);
                    self.edges.shift_remove(&forward_key);
                }
                Ordering::Equal => {
                    self.edges.shift_remove(&forward_key);
                    self.edges.shift_remove(&reverse_key);
                }
            }
            netted += 1;
        }

        tracing::debug!(netted, edges = self.edges.len(), "reciprocal debts cancelled");
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Money, Participant, ParticipantId};

    use super::*;

    fn people() -> [Participant; 4] {
        [
            Participant::new("a", "A"),
            Participant::new("b", "B"),
            Participant::new("c", "C"),
            Participant::new("d", "D"),
        ]
    }

    fn id(value: &str) -> ParticipantId {
        ParticipantId::from(value)
    }

    #[test]
    fn larger_debt_absorbs_smaller_one() {
        let [a, b, ..] = people();
        let mut ledger = DebtLedger::new();
        ledger.add_debt(&a, &b, Money::from_cents(1_000)).unwrap();
        ledger.add_debt(&b, &a, Money::from_cents(400)).unwrap();

        ledger.cancel_reciprocal();

        assert_eq!(ledger.owed(&id("a"), &id("b")), Some(Money::from_cents(600)));
        assert_eq!(ledger.owed(&id("b"), &id("a")), None);
    }

    #[test]
    fn direction_flips_when_reverse_is_larger() {
        let [a, b, ..] = people();
        let mut ledger = DebtLedger::new();
        ledger.add_debt(&a, &b, Money::from_cents(400)).unwrap();
        ledger.add_debt(&b, &a, Money::from_cents(1_000)).unwrap();

        ledger.cancel_reciprocal();

        assert_eq!(ledger.owed(&id("a"), &id("b")), None);
        assert_eq!(ledger.owed(&id("b"), &id("a")), Some(Money::from_cents(600)));
    }

    #[test]
    fn equal_debts_cancel_completely() {
        let [a, b, c, _] = people();
        let mut ledger = DebtLedger::new();
        ledger.add_debt(&a, &b, Money::from_cents(700)).unwrap();
        ledger.add_debt(&c, &a, Money::from_cents(100)).unwrap();
        ledger.add_debt(&b, &a, Money::from_cents(700)).unwrap();

        ledger.cancel_reciprocal();

        assert_eq!(ledger.edge_count(), 1);
        assert_eq!(ledger.owed(&id("c"), &id("a")), Some(Money::from_cents(100)));
    }

    #[test]
    fn one_way_debts_are_untouched() {
        let [a, b, c, _] = people();
        let mut ledger = DebtLedger::new();
        ledger.add_debt(&a, &b, Money::from_cents(100)).unwrap();
        ledger.add_debt(&b, &c, Money::from_cents(100)).unwrap();
        let before = ledger.clone();

        ledger.cancel_reciprocal();

        assert_eq!(ledger, before);
    }

    proptest! {
        #[test]
        fn netting_leaves_one_direction_and_preserves_net_positions(
            debts in prop::collection::vec((0usize..4, 0usize..4, 1i64..=50_000), 0..=30),
        ) {
            let people = people();
            let mut ledger = DebtLedger::new();
            for (debtor, creditor, cents) in &debts {
                ledger
                    .add_debt(&people[*debtor], &people[*creditor], Money::from_cents(*cents))
                    .unwrap();
            }

            let net_before: Vec<Money> = people.iter().map(|p| net_position(&ledger, &p.id)).collect();
            ledger.cancel_reciprocal();
            let net_after: Vec<Money> = people.iter().map(|p| net_position(&ledger, &p.id)).collect();

            prop_assert_eq!(net_before, net_after);
            for edge in ledger.edges() {
                prop_assert!(edge.amount.is_positive());
                prop_assert!(ledger.owed(edge.creditor, edge.debtor).is_none());
            }
        }
    }

    /// What `id` is owed minus what `id` owes.
    fn net_position(ledger: &DebtLedger, id: &ParticipantId) -> Money {
        ledger.edges().fold(Money::ZERO, |acc, edge| {
            if edge.creditor == id {
                acc + edge.amount
            } else if edge.debtor == id {
                acc - edge.amount
            } else {
                acc
            }
        })
    }
}
