use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Income/expense classification of a ledger entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TxnKind {
    Income,
    Expense,
}

impl TxnKind {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "income" | "in" | "i" => Some(TxnKind::Income),
            "expense" | "out" | "e" => Some(TxnKind::Expense),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TxnKind::Income => "income",
            TxnKind::Expense => "expense",
        }
    }

    /// Sign shown next to amounts in the list view.
    pub fn sign(&self) -> char {
        match self {
            TxnKind::Income => '+',
            TxnKind::Expense => '-',
        }
    }
}

/// A single ledger entry. Never mutated after creation; removed by id.
///
/// Serialized field names match the persisted blob layout:
/// `{id, desc, amount, type, date}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "desc")]
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TxnKind,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(description: impl Into<String>, amount: f64, kind: TxnKind, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            kind,
            date,
        }
    }

    /// `YYYY-MM` bucketing key used for monthly grouping and filtering.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Leading id digits shown in the list so rows can be deleted by prefix.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}
