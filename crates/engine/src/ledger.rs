//! The debt graph rebuilt on every computation.
//!
//! A [`DebtLedger`] holds the participants of a group in first-seen order and
//! the directed debt edges between them, keyed by `(debtor, creditor)`. Edges
//! also keep their insertion order, which is the order creditors appear in
//! the final report.
//!
//! The stages that transform the graph live in [`crate::ops`].

use indexmap::IndexMap;

use crate::{EngineError, Money, Participant, ParticipantId, ResultEngine};

pub(crate) type EdgeKey = (ParticipantId, ParticipantId);

/// A directed debt: `debtor` owes `creditor` `amount`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebtEdge<'a> {
    pub debtor: &'a ParticipantId,
    pub creditor: &'a ParticipantId,
    pub amount: Money,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DebtLedger {
    pub(crate) participants: IndexMap<ParticipantId, Participant>,
    pub(crate) edges: IndexMap<EdgeKey, Money>,
}

impl DebtLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a participant. The first registration of an id wins.
    pub fn register(&mut self, participant: &Participant) {
        if !self.participants.contains_key(&participant.id) {
            self.participants
                .insert(participant.id.clone(), participant.clone());
        }
    }

    /// Adds `amount` to the edge `debtor -> creditor`, registering both.
    ///
    /// Debts to oneself are ignored.
    pub fn add_debt(
        &mut self,
        debtor: &Participant,
        creditor: &Participant,
        amount: Money,
    ) -> ResultEngine<()> {
        self.register(debtor);
        self.register(creditor);
        if debtor.id == creditor.id {
            return Ok(());
        }

        let owed = self
            .edges
            .entry((debtor.id.clone(), creditor.id.clone()))
            .or_insert(Money::ZERO);
        *owed = owed.checked_add(amount).ok_or_else(|| {
            EngineError::InvalidAmount(format!(
                "debt from {} to {} is too large",
                debtor.name, creditor.name
            ))
        })?;
        Ok(())
    }

    /// Amount currently owed on `debtor -> creditor`, unrounded.
    pub fn owed(&self, debtor: &ParticipantId, creditor: &ParticipantId) -> Option<Money> {
        self.edges
            .get(&(debtor.clone(), creditor.clone()))
            .copied()
    }

    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.get(id)
    }

    /// Participants in first-seen order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.participants.values()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = DebtEdge<'_>> {
        self.edges
            .iter()
            .map(|((debtor, creditor), amount)| DebtEdge {
                debtor,
                creditor,
                amount: *amount,
            })
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub(crate) fn display_name<'a>(&'a self, id: &'a ParticipantId) -> &'a str {
        self.participants
            .get(id)
            .map(|p| p.name.as_str())
            .unwrap_or_else(|| id.as_str())
    }
}
