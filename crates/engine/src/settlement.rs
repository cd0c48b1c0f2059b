//! The module contains the `Settlement` type: a real-world repayment between
//! two participants, recorded after the fact.

use chrono::{DateTime, Utc};

use crate::{EngineError, Money, ParticipantId, ResultEngine};

/// One side of a settlement.
///
/// Older records carry only the display name; when `id` is present it takes
/// precedence over the name during matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettlementParty {
    pub id: Option<ParticipantId>,
    pub name: String,
}

impl SettlementParty {
    pub fn new(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }

    /// A party known only by display name.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// A repayment of `amount` from `from` (the debtor) to `to` (the creditor).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub from: SettlementParty,
    pub to: SettlementParty,
    pub amount: Money,
    pub settled_at: DateTime<Utc>,
}

impl Settlement {
    pub fn new(from: SettlementParty, to: SettlementParty, amount: Money) -> Self {
        Self {
            from,
            to,
            amount,
            settled_at: Utc::now(),
        }
    }

    /// Overrides the recorded timestamp.
    pub fn at(mut self, settled_at: DateTime<Utc>) -> Self {
        self.settled_at = settled_at;
        self
    }

    pub fn validate(&self) -> ResultEngine<()> {
        if !self.amount.is_positive() {
            return Err(EngineError::InvalidSettlement(format!(
                "{} -> {}: amount must be > 0, got {}",
                self.from.name, self.to.name, self.amount
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_non_positive_amounts() {
        for cents in [0, -1] {
            let settlement = Settlement::new(
                SettlementParty::by_name("bob"),
                SettlementParty::by_name("alice"),
                Money::from_cents(cents),
            );
            assert!(matches!(
                settlement.validate(),
                Err(EngineError::InvalidSettlement(_))
            ));
        }
    }

    #[test]
    fn at_overrides_timestamp() {
        let when = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
        let settlement = Settlement::new(
            SettlementParty::new("u2", "bob"),
            SettlementParty::new("u1", "alice"),
            Money::from_cents(100),
        )
        .at(when);
        assert_eq!(settlement.settled_at, when);
        assert!(settlement.validate().is_ok());
    }
}
