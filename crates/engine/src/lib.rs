//! Debt-netting engine for shared-expense groups.
//!
//! The engine is data in, data out: it takes the full expense and settlement
//! history of one group and returns who still owes whom. Nothing is cached
//! between calls; the debt graph is rebuilt from scratch every time.
//!
//! ```rust
//! use engine::{Expense, Money, Participant, Settlement, SettlementParty, compute_balances};
//!
//! let a = Participant::new("u1", "A");
//! let b = Participant::new("u2", "B");
//! let c = Participant::new("u3", "C");
//! let expenses = [Expense::new(
//!     Money::from_cents(30_000),
//!     "hotel",
//!     a.clone(),
//!     vec![a, b, c],
//! )];
//! let settlements = [Settlement::new(
//!     SettlementParty::new("u2", "B"),
//!     SettlementParty::new("u1", "A"),
//!     Money::from_cents(10_000),
//! )];
//!
//! let report = compute_balances(&expenses, &settlements).unwrap();
//! assert_eq!(report.len(), 1);
//! assert_eq!(report.owed("C", "A"), Some(Money::from_cents(10_000)));
//! ```

pub use error::EngineError;
pub use expense::Expense;
pub use ledger::{DebtEdge, DebtLedger};
pub use money::{Money, SETTLED_THRESHOLD};
pub use participant::{Participant, ParticipantId};
pub use report::{BalanceEntry, BalanceReport, OwedAmount};
pub use settlement::{Settlement, SettlementParty};

mod error;
mod expense;
mod ledger;
mod money;
mod ops;
mod participant;
mod report;
mod settlement;

pub type ResultEngine<T> = Result<T, EngineError>;

/// Computes the outstanding balances of a group.
///
/// Runs, in order: ledger construction from `expenses`, settlement
/// reduction, reciprocal cancellation and report formatting. Each stage
/// validates its whole input before touching the ledger, so an invalid record
/// fails the call without a partial result.
#[tracing::instrument(
    name = "compute_balances",
    skip_all,
    fields(expenses = expenses.len(), settlements = settlements.len())
)]
pub fn compute_balances(
    expenses: &[Expense],
    settlements: &[Settlement],
) -> ResultEngine<BalanceReport> {
    let mut ledger = DebtLedger::from_expenses(expenses)?;
    ledger.apply_settlements(settlements)?;
    ledger.cancel_reciprocal();
    let report = ledger.report();

    tracing::debug!(debtors = report.len(), "balances computed");
    Ok(report)
}
