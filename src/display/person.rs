//! Person display formatting
//!
//! Formats people and their balances for terminal output.

use crate::models::{Money, Person};
use crate::services::DebtTotals;

/// Format people as a balance table with a totals row
pub fn format_person_list(people: &[Person], totals: &DebtTotals, symbol: &str) -> String {
    if people.is_empty() {
        return "No people yet.".to_string();
    }

    let name_width = people
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>12}\n",
        "Name",
        "You owe",
        "They owe",
        "Net",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for person in people {
        output.push_str(&row(
            &person.name,
            person.money_you_owe(),
            person.money_they_owe(),
            person.net_owed(),
            symbol,
            name_width,
        ));
    }

    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&row(
        "TOTAL",
        totals.you_owe,
        totals.they_owe,
        totals.net,
        symbol,
        name_width,
    ));

    output
}

fn row(name: &str, you_owe: Money, they_owe: Money, net: Money, symbol: &str, width: usize) -> String {
    format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}\n",
        name,
        you_owe.format_with_symbol(symbol),
        they_owe.format_with_symbol(symbol),
        net.format_with_symbol(symbol),
        width = width,
    )
}

/// Format one person's balance summary
pub fn format_person_details(person: &Person, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Person:       {}\n", person.name));
    output.push_str(&format!("ID:           {}\n", person.id()));
    output.push_str(&format!(
        "You owe:      {}\n",
        person.money_you_owe().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "They owe:     {}\n",
        person.money_they_owe().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Net:          {}\n",
        person.net_owed().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Last change:  {}\n",
        format_last_transaction(person, date_format)
    ));
    output.push_str(&format!("Transactions: {}\n", person.transactions().len()));

    output
}

/// Last transaction time, or a dash when there has been none
pub fn format_last_transaction(person: &Person, date_format: &str) -> String {
    person
        .last_transaction_at
        .map(|at| at.format(date_format).to_string())
        .unwrap_or_else(|| "-".to_string())
}
