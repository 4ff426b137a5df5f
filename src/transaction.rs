//! Transaction records.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single entry in the user's transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The server-assigned identifier.
    pub id: u64,
    /// What the money was for.
    pub description: String,
    /// Whether money came in or went out.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The amount, always positive; direction comes from `kind`.
    pub price: f64,
    /// The user-assigned category.
    pub category: String,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Outcome,
}
