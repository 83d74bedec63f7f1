mod common;

use chrono::NaiveDate;
use common::{reopen_store, temp_store};
use tally_core::{domain::TxnKind, report};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn reference_scenario_totals_and_buckets() {
    let (mut store, _base) = temp_store();
    store
        .add("Salary", 1000.0, TxnKind::Income, date(2024, 1, 5))
        .unwrap();
    store
        .add("Groceries", 300.0, TxnKind::Expense, date(2024, 1, 10))
        .unwrap();

    let totals = report::totals(store.transactions());
    assert_eq!(totals.income, 1000.0);
    assert_eq!(totals.expense, 300.0);
    assert_eq!(totals.balance, 700.0);

    let buckets = report::by_month(store.transactions());
    let january = buckets.get("2024-01").expect("january bucket");
    assert_eq!(january.income, 1000.0);
    assert_eq!(january.expense, 300.0);
}

#[test]
fn aggregates_survive_a_restart_unchanged() {
    let (mut store, base) = temp_store();
    store
        .add("Salary", 1000.0, TxnKind::Income, date(2024, 1, 5))
        .unwrap();
    store
        .add("Rent", 700.0, TxnKind::Expense, date(2024, 2, 1))
        .unwrap();
    store
        .add("Freelance", 450.0, TxnKind::Income, date(2024, 2, 3))
        .unwrap();
    let before = report::totals(store.transactions());

    let reloaded = reopen_store(&base);
    let after = report::totals(reloaded.transactions());
    assert_eq!(before, after);
    assert_eq!(
        report::by_month(store.transactions()),
        report::by_month(reloaded.transactions())
    );
}

#[test]
fn month_buckets_conserve_totals_over_many_months() {
    let (mut store, _base) = temp_store();
    for month in 1..=6u32 {
        store
            .add("Salary", 1000.0, TxnKind::Income, date(2024, month, 1))
            .unwrap();
        store
            .add("Rent", 650.0, TxnKind::Expense, date(2024, month, 2))
            .unwrap();
        store
            .add("Chai", 15.5, TxnKind::Expense, date(2024, month, 15))
            .unwrap();
    }

    let totals = report::totals(store.transactions());
    let buckets = report::by_month(store.transactions());
    assert_eq!(buckets.len(), 6);

    let income: f64 = buckets.values().map(|b| b.income).sum();
    let expense: f64 = buckets.values().map(|b| b.expense).sum();
    assert!((income - totals.income).abs() < 1e-9);
    assert!((expense - totals.expense).abs() < 1e-9);
    assert_eq!(totals.balance, totals.income - totals.expense);
}

#[test]
fn month_filter_and_distinct_months_agree() {
    let (mut store, _base) = temp_store();
    store
        .add("Salary", 1000.0, TxnKind::Income, date(2024, 1, 5))
        .unwrap();
    store
        .add("Rent", 700.0, TxnKind::Expense, date(2024, 3, 1))
        .unwrap();
    store
        .add("Chai", 15.0, TxnKind::Expense, date(2024, 1, 20))
        .unwrap();

    let months = report::distinct_months(store.transactions());
    assert_eq!(months, vec!["2024-03".to_string(), "2024-01".to_string()]);

    for month in &months {
        let rows = report::filter_by_month(store.transactions(), Some(month));
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|t| t.month_key() == *month));
        // Newest first within the filtered view.
        assert!(rows.windows(2).all(|w| w[0].date >= w[1].date));
    }

    assert!(report::filter_by_month(store.transactions(), Some("2024-02")).is_empty());
}
