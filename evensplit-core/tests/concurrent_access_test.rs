//! Concurrent access tests
//!
//! The calculations only read their inputs, so many threads may share one
//! group snapshot and must all see identical results.
//!
//! Run with: cargo test --test concurrent_access_test -- --nocapture

use std::sync::Arc;
use std::thread;

use evensplit_core::services::SettlementService;
use evensplit_core::{calculate_balances, simplify_debts, Expense, Group, Person};

fn large_group() -> Group {
    let people: Vec<Person> = (0..25)
        .map(|i| Person::with_id(format!("p{}", i), format!("Person {}", i)))
        .collect();

    let expenses = (0..500)
        .map(|i| {
            let payer = format!("p{}", i % 25);
            let participants: Vec<String> = (0..5).map(|k| format!("p{}", (i * 7 + k) % 25)).collect();
            let refs: Vec<&str> = participants.iter().map(String::as_str).collect();
            Expense::equal(i as i64, format!("Expense {}", i), 10.0 + (i % 13) as f64 * 3.17, payer, &refs)
        })
        .collect();

    Group::new(people, expenses)
}

#[test]
fn test_parallel_balances_match_sequential() {
    let group = Arc::new(large_group());
    let expected = calculate_balances(&group.people, &group.expenses);
    let expected_settlements = simplify_debts(&expected);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let group = Arc::clone(&group);
            thread::spawn(move || {
                let balances = calculate_balances(&group.people, &group.expenses);
                let settlements = simplify_debts(&balances);
                (balances, settlements)
            })
        })
        .collect();

    for handle in handles {
        let (balances, settlements) = handle.join().unwrap();
        assert_eq!(balances, expected);
        assert_eq!(settlements, expected_settlements);
    }
}

#[test]
fn test_shared_service_across_scoped_threads() {
    let group = large_group();
    let service = SettlementService::new(true);

    let summaries: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| service.summarize(&group).unwrap().settlements.len()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(summaries.windows(2).all(|w| w[0] == w[1]));
    assert!(summaries[0] < group.people.len());
}

#[test]
fn test_inputs_are_not_mutated() {
    let group = large_group();
    let before = group.clone();

    let _ = calculate_balances(&group.people, &group.expenses);
    let _ = SettlementService::new(false).summarize(&group).unwrap();

    assert_eq!(group, before);
}
