//! Balance endpoint and the wire-to-engine conversion it relies on.

use api_types::{
    balance::{BalanceEntry, GroupBalances, OwedAmount},
    group::{self, GroupLedger, Member},
};
use axum::Json;
use engine::{
    BalanceReport, Expense, Money, Participant, ParticipantId, Settlement, SettlementParty,
    compute_balances,
};

use crate::ServerError;

/// Handle `POST /api/balances`.
pub async fn compute(Json(payload): Json<GroupLedger>) -> Result<Json<GroupBalances>, ServerError> {
    ensure_members(&payload)?;
    let response = group_balances(payload)?;
    tracing::info!(
        group = ?response.group_id,
        debtors = response.balance.len(),
        "balances computed"
    );
    Ok(Json(response))
}

/// Runs the engine over a group snapshot and packs the result next to the
/// raw history it was computed from.
pub fn group_balances(ledger: GroupLedger) -> Result<GroupBalances, engine::EngineError> {
    let expenses: Vec<Expense> = ledger.expenses.iter().map(to_expense).collect();
    let settlements: Vec<Settlement> = ledger.settlements.iter().map(to_settlement).collect();

    let report = compute_balances(&expenses, &settlements)?;

    Ok(GroupBalances {
        message: "Expenses retrieved successfully".to_string(),
        group_id: ledger.id,
        expenses: ledger.expenses,
        settlements: ledger.settlements,
        balance: to_balance(report),
    })
}

/// When the snapshot lists its members, every expense participant must be one
/// of them, and so must every settlement party that carries an id. Name-only
/// settlement parties are left to the engine's name matching.
fn ensure_members(ledger: &GroupLedger) -> Result<(), ServerError> {
    if ledger.members.is_empty() {
        return Ok(());
    }

    let is_member = |id: &str| ledger.members.iter().any(|known| known.id == id);
    let not_member =
        |name: &str| ServerError::Generic(format!("'{name}' is not a member of the group"));

    for expense in &ledger.expenses {
        let participants = std::iter::once(&expense.paid_by).chain(expense.shared_by.iter());
        for member in participants {
            if !is_member(member.id.as_str()) {
                return Err(not_member(member.name.as_str()));
            }
        }
    }

    for settlement in &ledger.settlements {
        let parties = [
            (&settlement.from_id, &settlement.from_name),
            (&settlement.to_id, &settlement.to_name),
        ];
        for (id, name) in parties {
            if let Some(id) = id
                && !is_member(id.as_str())
            {
                return Err(not_member(name.as_str()));
            }
        }
    }
    Ok(())
}

fn to_participant(member: &Member) -> Participant {
    Participant::new(member.id.as_str(), member.name.as_str())
}

fn to_expense(expense: &group::Expense) -> Expense {
    Expense::new(
        Money::from_decimal(expense.amount),
        expense.description.as_str(),
        to_participant(&expense.paid_by),
        expense.shared_by.iter().map(to_participant).collect(),
    )
}

fn to_settlement(settlement: &group::Settlement) -> Settlement {
    let party = |id: &Option<String>, name: &str| SettlementParty {
        id: id.as_deref().map(ParticipantId::from),
        name: name.to_string(),
    };

    Settlement::new(
        party(&settlement.from_id, &settlement.from_name),
        party(&settlement.to_id, &settlement.to_name),
        Money::from_decimal(settlement.amount),
    )
    .at(settlement.date)
}

fn to_balance(report: BalanceReport) -> Vec<BalanceEntry> {
    report
        .into_iter()
        .map(|entry| BalanceEntry {
            debtor: entry.debtor,
            owes: entry
                .owes
                .into_iter()
                .map(|owed| OwedAmount {
                    to: owed.to,
                    amount: owed.amount.as_decimal(),
                })
                .collect(),
        })
        .collect()
}
