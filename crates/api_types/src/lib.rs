use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod group {
    use super::*;

    /// A group member as stored on expenses.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Member {
        pub id: String,
        pub name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub contact: Option<u64>,
    }

    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Expense {
        /// Free-form id; a UUID v4 is generated when the client does not send
        /// one.
        #[serde(default = "new_id")]
        pub id: String,
        #[serde(with = "rust_decimal::serde::float")]
        pub amount: Decimal,
        pub description: String,
        #[serde(rename = "paidBy")]
        pub paid_by: Member,
        #[serde(rename = "sharedby")]
        pub shared_by: Vec<Member>,
    }

    /// A recorded repayment from `from` to `to`.
    ///
    /// Ids are optional: records that only carry names are matched by name.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Settlement {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub from_id: Option<String>,
        pub from_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub to_id: Option<String>,
        pub to_name: String,
        #[serde(with = "rust_decimal::serde::float")]
        pub amount: Decimal,
        /// RFC3339 timestamp. Absent means "now".
        #[serde(default = "Utc::now")]
        pub date: DateTime<Utc>,
    }

    /// Everything needed to compute a group's balances.
    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GroupLedger {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub group_name: Option<String>,
        #[serde(default)]
        pub members: Vec<Member>,
        pub expenses: Vec<Expense>,
        #[serde(default)]
        pub settlements: Vec<Settlement>,
    }
}

pub mod balance {
    use std::collections::BTreeMap;

    use super::*;
    use crate::group::{Expense, Settlement};

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct OwedAmount {
        pub to: String,
        #[serde(with = "rust_decimal::serde::float")]
        pub amount: Decimal,
    }

    /// One debtor and what they owe.
    ///
    /// Serialized as a single-key object, `{"<debtor>": [{"to", "amount"}]}`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(
        try_from = "BTreeMap<String, Vec<OwedAmount>>",
        into = "BTreeMap<String, Vec<OwedAmount>>"
    )]
    pub struct BalanceEntry {
        pub debtor: String,
        pub owes: Vec<OwedAmount>,
    }

    impl TryFrom<BTreeMap<String, Vec<OwedAmount>>> for BalanceEntry {
        type Error = String;

        fn try_from(value: BTreeMap<String, Vec<OwedAmount>>) -> Result<Self, Self::Error> {
            if value.len() != 1 {
                return Err(format!(
                    "balance entry must have exactly one debtor, got {}",
                    value.len()
                ));
            }
            let (debtor, owes) = value
                .into_iter()
                .next()
                .ok_or_else(|| "empty balance entry".to_string())?;
            Ok(Self { debtor, owes })
        }
    }

    impl From<BalanceEntry> for BTreeMap<String, Vec<OwedAmount>> {
        fn from(value: BalanceEntry) -> Self {
            BTreeMap::from([(value.debtor, value.owes)])
        }
    }

    /// Response body: the raw history next to the computed balances.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GroupBalances {
        pub message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub group_id: Option<String>,
        pub expenses: Vec<Expense>,
        pub settlements: Vec<Settlement>,
        pub balance: Vec<BalanceEntry>,
    }
}
