//! Transaction display formatting

use crate::models::{Transaction, TransactionKind};

/// Format a single transaction as a table row
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let marker = match txn.kind() {
        TransactionKind::Credit => "+",
        TransactionKind::Debit => "-",
    };

    format!(
        "{} {:6} {:20} {:30} {:>12}",
        marker,
        txn.kind().to_string(),
        truncate(&txn.title, 20),
        truncate(&txn.description, 30),
        txn.amount().format_with_symbol(symbol),
    )
}

/// Format a person's transactions
pub fn format_transaction_list(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:6} {:20} {:30} {:>12}\n",
        "Kind", "Title", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(73));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

/// Shorten to `max` characters, ending in an ellipsis when cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, Person};

    fn person_with(kind: TransactionKind, title: &str, cents: i64) -> Person {
        let mut person = Person::new("Alice");
        person.add_transaction(NewTransaction {
            kind,
            title: title.into(),
            description: "note".into(),
            amount: Money::from_cents(cents),
        })
        .unwrap();
        person
    }

    #[test]
    fn test_row() {
        let person = person_with(TransactionKind::Credit, "Rent", 2000);
        let row = format_transaction_row(&person.transactions()[0], "$");

        assert!(row.starts_with("+ Credit"));
        assert!(row.contains("Rent"));
        assert!(row.ends_with("$20.00"));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_transaction_list(&[], "$"), "No transactions.\n");
    }

    #[test]
    fn test_list_has_header() {
        let person = person_with(TransactionKind::Debit, "Lunch", 1250);
        let output = format_transaction_list(person.transactions(), "$");

        assert!(output.starts_with("  Kind"));
        assert!(output.contains("- Debit"));
        assert!(output.contains("$12.50"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long title", 6), "a ver…");
    }
}
