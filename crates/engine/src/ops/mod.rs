//! The stages of a balance computation. Each one is a transformation of a
//! [`DebtLedger`], run in this order:
//!
//! 1. `build`: expenses into gross debts.
//! 2. `settle`: recorded repayments reduce those debts.
//! 3. `netting`: opposite debts between the same pair cancel out.
//! 4. `report`: the remaining edges become a [`BalanceReport`].
//!
//! [`DebtLedger`]: crate::DebtLedger
//! [`BalanceReport`]: crate::BalanceReport

mod build;
mod netting;
mod report;
mod settle;
