//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`InvalidExpense`] returned when an expense cannot be split (no sharers,
//!   non-positive amount, missing required fields).
//! - [`InvalidSettlement`] returned when a settlement amount is not positive.
//! - [`InvalidAmount`] returned when accumulated debts overflow the decimal
//!   range.
//!
//! Unmatched settlements and empty reports are *not* errors.
//!
//!  [`InvalidExpense`]: EngineError::InvalidExpense
//!  [`InvalidSettlement`]: EngineError::InvalidSettlement
//!  [`InvalidAmount`]: EngineError::InvalidAmount
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),
    #[error("Invalid settlement: {0}")]
    InvalidSettlement(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
