//! Person model and running balances
//!
//! A person owns their transactions and keeps two running totals: what the
//! user owes them (sum of debits) and what they owe the user (sum of
//! credits). Amount changes are applied as deltas against the previous
//! amount; `net_owed` is always recomputed as `you_owe - they_owe`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{PersonId, TransactionId};
use super::money::Money;
use super::transaction::{NewTransaction, Transaction, TransactionKind};
use crate::error::DebtError;

/// Someone the user trades money with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier, also the key of the detail route
    id: PersonId,

    /// Display name
    pub name: String,

    money_you_owe: Money,
    money_they_owe: Money,
    net_owed: Money,

    /// When a transaction amount last changed
    pub last_transaction_at: Option<DateTime<Utc>>,

    transactions: Vec<Transaction>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Person {
    /// Create a person with no transactions
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: PersonId::new(),
            name: name.into(),
            money_you_owe: Money::zero(),
            money_they_owe: Money::zero(),
            net_owed: Money::zero(),
            last_transaction_at: None,
            transactions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    /// Sum of all debit amounts
    pub fn money_you_owe(&self) -> Money {
        self.money_you_owe
    }

    /// Sum of all credit amounts
    pub fn money_they_owe(&self) -> Money {
        self.money_they_owe
    }

    /// Signed balance; positive means the user owes this person
    pub fn net_owed(&self) -> Money {
        self.net_owed
    }

    /// Route path of this person's detail view
    pub fn route(&self) -> String {
        self.id.route()
    }

    /// Transactions in creation order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id() == id)
    }

    /// Mutable access for title/description edits; the amount stays private
    pub fn transaction_mut(&mut self, id: TransactionId) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|t| t.id() == id)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Record a new transaction and fold its amount into the totals
    ///
    /// Nothing is recorded if the amount would push a total out of range.
    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<TransactionId, DebtError> {
        let txn = Transaction::new(self.id, new.kind, new.title, new.description);
        let id = txn.id();
        self.transactions.push(txn);

        if let Err(e) = self.apply_amount(id, new.amount) {
            self.transactions.pop();
            return Err(e);
        }

        let now = Utc::now();
        self.last_transaction_at = Some(now);
        self.updated_at = now;
        Ok(id)
    }

    /// Change a transaction's amount, propagating the difference
    ///
    /// Returns the delta applied to the matching total. Setting the amount
    /// it already has changes nothing.
    pub fn set_transaction_amount(
        &mut self,
        id: TransactionId,
        amount: Money,
    ) -> Result<Money, DebtError> {
        if self.transaction(id).is_none() {
            return Err(DebtError::transaction_not_found(id.to_string()));
        }
        self.apply_amount(id, amount)
    }

    /// Zero a transaction's amount, then remove it
    pub fn delete_transaction(&mut self, id: TransactionId) -> Result<Transaction, DebtError> {
        self.set_transaction_amount(id, Money::zero())?;
        let index = self
            .transactions
            .iter()
            .position(|t| t.id() == id)
            .ok_or_else(|| DebtError::transaction_not_found(id.to_string()))?;
        Ok(self.transactions.remove(index))
    }

    /// Zero every transaction so nothing is left folded into the totals
    pub fn settle_all(&mut self) -> Result<(), DebtError> {
        let ids: Vec<_> = self.transactions.iter().map(|t| t.id()).collect();
        for id in ids {
            self.apply_amount(id, Money::zero())?;
        }
        Ok(())
    }

    /// Check the totals against a full recomputation from the transactions
    pub fn is_balanced(&self) -> bool {
        let debits: Money = self
            .transactions
            .iter()
            .filter(|t| t.is_debit())
            .map(Transaction::amount)
            .sum();
        let credits: Money = self
            .transactions
            .iter()
            .filter(|t| t.is_credit())
            .map(Transaction::amount)
            .sum();

        self.money_you_owe == debits
            && self.money_they_owe == credits
            && self.net_owed == self.money_you_owe - self.money_they_owe
    }

    /// Replace a transaction's amount and fold the delta into the totals
    ///
    /// Totals are checked before anything is written, so an overflowing
    /// change leaves the person untouched.
    fn apply_amount(&mut self, id: TransactionId, amount: Money) -> Result<Money, DebtError> {
        let Some(txn) = self.transactions.iter().find(|t| t.id() == id) else {
            return Err(DebtError::transaction_not_found(id.to_string()));
        };
        let kind = txn.kind();
        let delta = amount
            .checked_sub(txn.amount())
            .ok_or_else(|| out_of_range(amount))?;
        if delta.is_zero() {
            return Ok(delta);
        }

        let (you_owe, they_owe) = match kind {
            TransactionKind::Credit => (Some(self.money_you_owe), self.money_they_owe.checked_add(delta)),
            TransactionKind::Debit => (self.money_you_owe.checked_add(delta), Some(self.money_they_owe)),
        };
        let (you_owe, they_owe) = match (you_owe, they_owe) {
            (Some(you_owe), Some(they_owe)) => (you_owe, they_owe),
            _ => return Err(out_of_range(amount)),
        };
        let net = you_owe
            .checked_sub(they_owe)
            .ok_or_else(|| out_of_range(amount))?;

        if let Some(txn) = self.transactions.iter_mut().find(|t| t.id() == id) {
            txn.replace_amount(amount);
        }
        self.money_you_owe = you_owe;
        self.money_they_owe = they_owe;
        self.net_owed = net;

        let now = Utc::now();
        self.last_transaction_at = Some(now);
        self.updated_at = now;
        Ok(delta)
    }
}

fn out_of_range(amount: Money) -> DebtError {
    DebtError::Validation(format!("Amount {} would put the balance out of range", amount))
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (net {})", self.name, self.net_owed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_txn(kind: TransactionKind, cents: i64) -> NewTransaction {
        NewTransaction {
            kind,
            title: "title".into(),
            description: "description".into(),
            amount: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_new_person_is_even() {
        let person = Person::new("Alice");
        assert_eq!(person.money_you_owe(), Money::zero());
        assert_eq!(person.money_they_owe(), Money::zero());
        assert_eq!(person.net_owed(), Money::zero());
        assert!(person.last_transaction_at.is_none());
        assert!(person.is_balanced());
    }

    #[test]
    fn test_alice_scenario() {
        let mut alice = Person::new("Alice");

        let debit = alice.add_transaction(new_txn(TransactionKind::Debit, 5000)).unwrap();
        assert_eq!(alice.money_you_owe().cents(), 5000);
        assert_eq!(alice.net_owed().cents(), 5000);

        let credit = alice.add_transaction(new_txn(TransactionKind::Credit, 2000)).unwrap();
        assert_eq!(alice.money_they_owe().cents(), 2000);
        assert_eq!(alice.net_owed().cents(), 3000);

        alice
            .set_transaction_amount(debit, Money::from_cents(3000))
            .unwrap();
        assert_eq!(alice.money_you_owe().cents(), 3000);
        assert_eq!(alice.net_owed().cents(), 1000);

        alice.delete_transaction(credit).unwrap();
        assert_eq!(alice.money_they_owe().cents(), 0);
        assert_eq!(alice.net_owed().cents(), 3000);
        assert_eq!(alice.transactions().len(), 1);
        assert!(alice.is_balanced());
    }

    #[test]
    fn test_noop_amount_change_touches_nothing() {
        let mut person = Person::new("Bob");
        let id = person.add_transaction(new_txn(TransactionKind::Credit, 1500)).unwrap();
        let before = person.clone();

        let delta = person
            .set_transaction_amount(id, Money::from_cents(1500))
            .unwrap();

        assert!(delta.is_zero());
        assert_eq!(person, before);
    }

    #[test]
    fn test_delete_then_re_add_restores_totals() {
        let mut person = Person::new("Carol");
        person.add_transaction(new_txn(TransactionKind::Debit, 700)).unwrap();
        let id = person.add_transaction(new_txn(TransactionKind::Credit, 1200)).unwrap();
        let (you_owe, they_owe, net) = (
            person.money_you_owe(),
            person.money_they_owe(),
            person.net_owed(),
        );

        person.delete_transaction(id).unwrap();
        person.add_transaction(new_txn(TransactionKind::Credit, 1200)).unwrap();

        assert_eq!(person.money_you_owe(), you_owe);
        assert_eq!(person.money_they_owe(), they_owe);
        assert_eq!(person.net_owed(), net);
    }

    #[test]
    fn test_unknown_transaction() {
        let mut person = Person::new("Dan");
        let missing = TransactionId::new();

        assert!(person
            .set_transaction_amount(missing, Money::from_cents(1))
            .unwrap_err()
            .is_not_found());
        assert!(person.delete_transaction(missing).is_err());
    }

    #[test]
    fn test_settle_all_zeroes_totals() {
        let mut person = Person::new("Eve");
        person.add_transaction(new_txn(TransactionKind::Debit, 100)).unwrap();
        person.add_transaction(new_txn(TransactionKind::Credit, 300)).unwrap();

        person.settle_all().unwrap();

        assert_eq!(person.net_owed(), Money::zero());
        assert!(person.transactions().iter().all(|t| t.amount().is_zero()));
        assert!(person.is_balanced());
    }

    #[test]
    fn test_transactions_keep_insertion_order() {
        let mut person = Person::new("Frank");
        let first = person.add_transaction(new_txn(TransactionKind::Debit, 1)).unwrap();
        let second = person.add_transaction(new_txn(TransactionKind::Debit, 2)).unwrap();

        let ids: Vec<_> = person.transactions().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_overflowing_add_is_rejected() {
        let mut person = Person::new("Hal");
        person
            .add_transaction(new_txn(TransactionKind::Debit, i64::MAX - 10))
            .unwrap();
        let before = person.clone();

        let err = person
            .add_transaction(new_txn(TransactionKind::Debit, 92_233_720_368_547_758))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(person, before);
        assert_eq!(person.transactions().len(), 1);
        assert!(person.is_balanced());
    }

    #[test]
    fn test_overflowing_amount_edit_is_rejected() {
        let mut person = Person::new("Ida");
        person
            .add_transaction(new_txn(TransactionKind::Debit, i64::MAX - 10))
            .unwrap();
        let id = person
            .add_transaction(new_txn(TransactionKind::Debit, 0))
            .unwrap();
        let before = person.clone();

        let err = person
            .set_transaction_amount(id, Money::from_cents(100))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(person, before);
        assert!(person.transaction(id).unwrap().amount().is_zero());
        assert!(person.is_balanced());
    }

    #[test]
    fn test_display() {
        let mut person = Person::new("Gina");
        person.add_transaction(new_txn(TransactionKind::Credit, 250)).unwrap();
        assert_eq!(person.to_string(), "Gina (net -$2.50)");
    }
}
