use crate::{DebtLedger, Expense, ResultEngine};

impl DebtLedger {
    /// Builds the gross debt graph for a list of expenses.
    ///
    /// Every expense is validated before anything is aggregated, so an
    /// invalid record leaves no partial graph behind.
    pub fn from_expenses(expenses: &[Expense]) -> ResultEngine<DebtLedger> {
        for expense in expenses {
            expense.validate()?;
        }

        let mut ledger = DebtLedger::new();
        for expense in expenses {
            ledger.record_expense(expense)?;
        }
        tracing::debug!(
            participants = ledger.participants.len(),
            edges = ledger.edges.len(),
            "debt ledger built"
        );
        Ok(ledger)
    }

    /// Adds one already validated expense: each sharer other than the payer
    /// owes the payer an exact, unrounded share.
    fn record_expense(&mut self, expense: &Expense) -> ResultEngine<()> {
        let share = expense.share()?;

        self.register(&expense.paid_by);
        for sharer in &expense.shared_by {
            self.add_debt(sharer, &expense.paid_by, share)?;
        }
        Ok(())
    }
}
