//! Transaction model
//!
//! A credit or debit recorded against exactly one person. The amount can
//! only be changed through the owning [`super::Person`], which folds the
//! change into that person's running totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{PersonId, TransactionId};
use super::money::Money;
use crate::error::DebtError;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money the person owes the user
    Credit,
    /// Money the user owes the person
    Debit,
}

impl TransactionKind {
    /// Parse a kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "credit" | "cr" | "c" => Some(Self::Credit),
            "debit" | "dr" | "d" => Some(Self::Debit),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => write!(f, "Credit"),
            Self::Debit => write!(f, "Debit"),
        }
    }
}

/// A credit or debit owned by one person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    id: TransactionId,

    /// The person this transaction belongs to
    person_id: PersonId,

    kind: TransactionKind,

    /// Short label
    pub title: String,

    /// Longer free-form note
    pub description: String,

    amount: Money,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a zero-amount transaction owned by `person_id`
    pub(crate) fn new(
        person_id: PersonId,
        kind: TransactionKind,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            person_id,
            kind,
            title: title.into(),
            description: description.into(),
            amount: Money::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn person_id(&self) -> PersonId {
        self.person_id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn is_credit(&self) -> bool {
        self.kind == TransactionKind::Credit
    }

    pub fn is_debit(&self) -> bool {
        self.kind == TransactionKind::Debit
    }

    /// Store a new amount and return the change against the previous one
    pub(super) fn replace_amount(&mut self, amount: Money) -> Money {
        let delta = amount - self.amount;
        if !delta.is_zero() {
            self.amount = amount;
            self.updated_at = Utc::now();
        }
        delta
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.updated_at = Utc::now();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.kind, self.title, self.amount)
    }
}

/// Raw "add credit/debit" form contents, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub title: String,
    pub description: String,
    pub amount: String,
}

/// A validated request to create a transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub title: String,
    pub description: String,
    pub amount: Money,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionKind,
        title: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            amount: amount.into(),
        }
    }

    /// Check the form fields and convert the amount
    pub fn validate(&self) -> Result<NewTransaction, DebtError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DebtError::Validation("Title cannot be empty".into()));
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(DebtError::Validation("Description cannot be empty".into()));
        }

        let amount = parse_amount(&self.amount)?;

        Ok(NewTransaction {
            kind: self.kind,
            title: title.to_string(),
            description: description.to_string(),
            amount,
        })
    }
}

/// Largest amount a single transaction may carry: 1,000,000,000.00
///
/// Keeps every running total far away from the `i64` cents limit.
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// Parse a user-entered amount, rejecting negatives and anything above
/// [`MAX_AMOUNT`]
pub fn parse_amount(input: &str) -> Result<Money, DebtError> {
    let amount = Money::parse(input).map_err(|e| DebtError::Validation(e.to_string()))?;
    check_amount(amount)
}

/// Range check shared by form input and direct service calls
pub fn check_amount(amount: Money) -> Result<Money, DebtError> {
    if amount.is_negative() {
        return Err(DebtError::Validation(format!(
            "Amount cannot be negative: {}",
            amount
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(DebtError::Validation(format!(
            "Amount cannot exceed {}",
            MAX_AMOUNT
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction_starts_at_zero() {
        let person_id = PersonId::new();
        let txn = Transaction::new(person_id, TransactionKind::Debit, "Lunch", "Tacos");

        assert_eq!(txn.person_id(), person_id);
        assert_eq!(txn.amount(), Money::zero());
        assert!(txn.is_debit());
        assert!(!txn.is_credit());
    }

    #[test]
    fn test_replace_amount_returns_delta() {
        let mut txn = Transaction::new(PersonId::new(), TransactionKind::Credit, "Rent", "May");

        assert_eq!(txn.replace_amount(Money::from_cents(5000)).cents(), 5000);
        assert_eq!(txn.replace_amount(Money::from_cents(3000)).cents(), -2000);
        assert_eq!(txn.replace_amount(Money::from_cents(3000)).cents(), 0);
        assert_eq!(txn.amount().cents(), 3000);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(TransactionKind::parse("Credit"), Some(TransactionKind::Credit));
        assert_eq!(TransactionKind::parse(" d "), Some(TransactionKind::Debit));
        assert_eq!(TransactionKind::parse("loan"), None);
    }

    #[test]
    fn test_draft_validation() {
        let draft = TransactionDraft::new(TransactionKind::Debit, " Lunch ", "Tacos", "12.5");
        let valid = draft.validate().unwrap();
        assert_eq!(valid.title, "Lunch");
        assert_eq!(valid.amount.cents(), 1250);
    }

    #[test]
    fn test_draft_rejects_bad_input() {
        let cases = [
            ("", "desc", "1"),
            ("title", "   ", "1"),
            ("title", "desc", "abc"),
            ("title", "desc", "-5"),
            ("title", "desc", ""),
        ];

        for (title, description, amount) in cases {
            let draft = TransactionDraft::new(TransactionKind::Credit, title, description, amount);
            let err = draft.validate().unwrap_err();
            assert!(err.is_validation(), "expected validation error for {:?}", amount);
        }
    }

    #[test]
    fn test_amount_ceiling() {
        assert_eq!(parse_amount("1,000,000,000.00").unwrap(), MAX_AMOUNT);
        assert!(parse_amount("1000000000.01").unwrap_err().is_validation());

        let draft = TransactionDraft::new(
            TransactionKind::Debit,
            "Loan",
            "Too big",
            "92233720368547758",
        );
        assert!(draft.validate().unwrap_err().is_validation());

        assert!(check_amount(Money::from_cents(-1)).is_err());
        assert!(check_amount(Money::from_cents(i64::MAX)).is_err());
    }

    #[test]
    fn test_display() {
        let mut txn = Transaction::new(PersonId::new(), TransactionKind::Credit, "Rent", "May");
        txn.replace_amount(Money::from_cents(2000));
        assert_eq!(txn.to_string(), "Credit Rent $20.00");
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(PersonId::new(), TransactionKind::Debit, "Gas", "Road trip");
        let json = serde_json::to_string(&txn).unwrap();
        assert!(json.contains("\"kind\":\"debit\""));
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, deserialized);
    }
}
