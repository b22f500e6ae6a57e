//! Scripted walkthrough of the ledger
//!
//! Creates Alice, adds a debit of 50 and a credit of 20, edits the debit
//! down to 30 and deletes the credit, printing balances after each step.
//! The walkthrough runs in a scratch directory that is removed afterwards,
//! so the user's audit log never sees it.

use tempfile::TempDir;
use tracing::debug;

use crate::config::{DebtPaths, Settings};
use crate::display::{format_person_details, format_transaction_list};
use crate::error::{DebtError, DebtResult};
use crate::models::{Money, NewTransaction, Person, PersonId, TransactionKind};
use crate::session::Session;

/// Run the walkthrough against a throwaway data directory
pub fn run_demo(settings: &Settings) -> DebtResult<String> {
    let scratch = TempDir::new()?;
    debug!(dir = %scratch.path().display(), "running demo in scratch directory");
    let report = walkthrough(DebtPaths::with_base_dir(scratch.path().to_path_buf()), settings)?;
    scratch.close()?;
    Ok(report)
}

/// Run the walkthrough against `paths` and return the report
pub fn walkthrough(paths: DebtPaths, settings: &Settings) -> DebtResult<String> {
    let mut session = Session::new(paths, settings)?;
    let symbol = settings.currency_symbol.as_str();
    let mut report = String::new();

    let alice = session.add_person("Alice")?;
    session.open_person(alice.id())?;
    step(&mut report, "Created Alice", &session, alice.id(), symbol)?;

    let debit = session.transactions().create(
        alice.id(),
        NewTransaction {
            kind: TransactionKind::Debit,
            title: "Dinner".into(),
            description: "Alice paid for dinner".into(),
            amount: Money::from_units(50),
        },
    )?;
    step(&mut report, "Debit of 50", &session, alice.id(), symbol)?;

    let credit = session.transactions().create(
        alice.id(),
        NewTransaction {
            kind: TransactionKind::Credit,
            title: "Tickets".into(),
            description: "Concert tickets for Alice".into(),
            amount: Money::from_units(20),
        },
    )?;
    step(&mut report, "Credit of 20", &session, alice.id(), symbol)?;

    session
        .transactions()
        .set_amount(debit.id(), Money::from_units(30))?;
    step(&mut report, "Debit edited 50 -> 30", &session, alice.id(), symbol)?;

    session.transactions().delete(credit.id())?;
    step(&mut report, "Credit deleted", &session, alice.id(), symbol)?;

    let person = current(&session, alice.id())?;
    report.push_str(&format_person_details(&person, symbol, &settings.date_format));
    report.push('\n');
    report.push_str(&format_transaction_list(person.transactions(), symbol));

    session.back()?;
    Ok(report)
}

fn current(session: &Session, id: PersonId) -> DebtResult<Person> {
    session
        .people()
        .get(id)?
        .ok_or_else(|| DebtError::person_not_found(id.to_string()))
}

fn step(
    report: &mut String,
    label: &str,
    session: &Session,
    id: PersonId,
    symbol: &str,
) -> DebtResult<()> {
    let person = current(session, id)?;
    report.push_str(&format!(
        "{:<24} you owe {:>8}  they owe {:>8}  net {:>8}\n",
        label,
        person.money_you_owe().format_with_symbol(symbol),
        person.money_they_owe().format_with_symbol(symbol),
        person.net_owed().format_with_symbol(symbol),
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_demo_final_balances() {
        let report = run_demo(&Settings::default()).unwrap();

        let lines: Vec<_> = report.lines().collect();
        assert!(lines[1].contains("you owe   $50.00") && lines[1].ends_with("net   $50.00"));
        assert!(lines[2].ends_with("net   $30.00"));
        assert!(lines[3].ends_with("net   $10.00"));
        assert!(lines[4].contains("they owe    $0.00") && lines[4].ends_with("net   $30.00"));
        assert!(report.contains("Transactions: 1"));
    }

    #[test]
    fn test_walkthrough_audits_its_own_directory() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DebtPaths::with_base_dir(temp_dir.path().to_path_buf());

        let report = walkthrough(paths.clone(), &Settings::default()).unwrap();
        assert_eq!(report, run_demo(&Settings::default()).unwrap());

        let audit = std::fs::read_to_string(paths.audit_log()).unwrap();
        assert!(audit.contains("Alice"));
    }
}
