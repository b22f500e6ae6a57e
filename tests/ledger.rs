use debt_machine::config::{DebtPaths, Settings};
use debt_machine::models::{Money, NewTransaction, Person, TransactionKind};
use debt_machine::session::Session;
use proptest::prelude::*;
use tempfile::TempDir;

#[derive(Debug, Clone)]
enum Op {
    Add(bool, i64),
    SetAmount(usize, i64),
    Delete(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<bool>(), 0i64..1_000_000).prop_map(|(credit, cents)| Op::Add(credit, cents)),
        (any::<usize>(), 0i64..1_000_000).prop_map(|(i, cents)| Op::SetAmount(i, cents)),
        any::<usize>().prop_map(Op::Delete),
    ]
}

fn new_txn(credit: bool, cents: i64) -> NewTransaction {
    NewTransaction {
        kind: if credit {
            TransactionKind::Credit
        } else {
            TransactionKind::Debit
        },
        title: "t".into(),
        description: "d".into(),
        amount: Money::from_cents(cents),
    }
}

proptest! {
    #[test]
    fn totals_track_every_change(ops in prop::collection::vec(op(), 0..40)) {
        let mut person = Person::new("Alice");

        for op in ops {
            let ids: Vec<_> = person.transactions().iter().map(|t| t.id()).collect();
            match op {
                Op::Add(credit, cents) => {
                    person.add_transaction(new_txn(credit, cents)).unwrap();
                }
                Op::SetAmount(i, cents) if !ids.is_empty() => {
                    person
                        .set_transaction_amount(ids[i % ids.len()], Money::from_cents(cents))
                        .unwrap();
                }
                Op::Delete(i) if !ids.is_empty() => {
                    person.delete_transaction(ids[i % ids.len()]).unwrap();
                }
                _ => {}
            }
            prop_assert!(person.is_balanced());
        }

        person.settle_all().unwrap();
        prop_assert!(person.money_you_owe().is_zero());
        prop_assert!(person.money_they_owe().is_zero());
        prop_assert!(person.net_owed().is_zero());
    }

    #[test]
    fn single_transaction_total_equals_amount(
        credit in any::<bool>(),
        amounts in prop::collection::vec(0i64..1_000_000, 1..20),
    ) {
        let mut person = Person::new("Bob");
        let id = person.add_transaction(new_txn(credit, amounts[0])).unwrap();
        for &cents in &amounts[1..] {
            person.set_transaction_amount(id, Money::from_cents(cents)).unwrap();
        }

        let last = *amounts.last().unwrap();
        let (matching, other) = if credit {
            (person.money_they_owe(), person.money_you_owe())
        } else {
            (person.money_you_owe(), person.money_they_owe())
        };
        prop_assert_eq!(matching.cents(), last);
        prop_assert!(other.is_zero());
        prop_assert_eq!(person.transaction(id).unwrap().amount().cents(), last);
        prop_assert!(person.is_balanced());
    }

    #[test]
    fn parsed_amounts_keep_cents(units in 0i64..100_000, cents in 0i64..100) {
        let parsed = Money::parse(&format!("{}.{:02}", units, cents)).unwrap();
        prop_assert_eq!(parsed.cents(), units * 100 + cents);
    }
}

#[test]
fn removing_a_person_settles_and_unroutes_them() {
    let temp = TempDir::new().unwrap();
    let paths = DebtPaths::with_base_dir(temp.path().to_path_buf());
    let mut session = Session::new(paths, &Settings::default()).unwrap();

    let alice = session.add_person("Alice").unwrap();
    session
        .transactions()
        .create(alice.id(), new_txn(false, 5000))
        .unwrap();
    let route = alice.route();
    assert!(session.router().is_registered(&route));

    let removed = session.remove_person(alice.id()).unwrap();
    assert!(removed.net_owed().is_zero());
    assert!(!session.router().is_registered(&route));
    assert_eq!(session.people().totals().unwrap().people, 0);
}
