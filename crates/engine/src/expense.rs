//! The module contains the `Expense` type: an amount paid by one participant
//! and split evenly among a list of sharers.

use crate::{EngineError, Money, Participant, ResultEngine};

/// A shared expense.
///
/// `shared_by` may include the payer; the payer's own share never becomes a
/// debt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub amount: Money,
    pub description: String,
    pub paid_by: Participant,
    pub shared_by: Vec<Participant>,
}

impl Expense {
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        paid_by: Participant,
        shared_by: Vec<Participant>,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            paid_by,
            shared_by,
        }
    }

    /// Checks the invariants required to split the expense.
    pub fn validate(&self) -> ResultEngine<()> {
        let label = self.description.trim();
        if label.is_empty() {
            return Err(EngineError::InvalidExpense(
                "description must not be empty".to_string(),
            ));
        }
        if !self.amount.is_positive() {
            return Err(EngineError::InvalidExpense(format!(
                "'{label}': amount must be > 0, got {}",
                self.amount
            )));
        }
        if self.shared_by.is_empty() {
            return Err(EngineError::InvalidExpense(format!(
                "'{label}': at least one sharer is required"
            )));
        }
        if self.paid_by.name.trim().is_empty() {
            return Err(EngineError::InvalidExpense(format!(
                "'{label}': payer name must not be empty"
            )));
        }
        Ok(())
    }

    /// Exact per-sharer amount.
    pub fn share(&self) -> ResultEngine<Money> {
        self.amount.split(self.shared_by.len()).ok_or_else(|| {
            EngineError::InvalidExpense(format!(
                "'{}': cannot split among zero sharers",
                self.description
            ))
        })
    }
}
