//! Pure, side-effect-free aggregation over the transaction collection.
//! Everything here is a deterministic function of its input slice; the CLI
//! recomputes these after every mutation and hands the results to the
//! renderer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{Transaction, TxnKind};

/// Aggregate totals across the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Per-kind sums within one `YYYY-MM` bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthTotals {
    pub income: f64,
    pub expense: f64,
}

/// Sums income and expense in one pass; `balance = income - expense`.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = 0.0;
    let mut expense = 0.0;
    for txn in transactions {
        match txn.kind {
            TxnKind::Income => income += txn.amount,
            TxnKind::Expense => expense += txn.amount,
        }
    }
    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Groups by `YYYY-MM` key and sums per kind. BTreeMap iteration yields the
/// ascending chronological order the trend chart expects.
pub fn by_month(transactions: &[Transaction]) -> BTreeMap<String, MonthTotals> {
    let mut buckets: BTreeMap<String, MonthTotals> = BTreeMap::new();
    for txn in transactions {
        let bucket = buckets.entry(txn.month_key()).or_default();
        match txn.kind {
            TxnKind::Income => bucket.income += txn.amount,
            TxnKind::Expense => bucket.expense += txn.amount,
        }
    }
    buckets
}

/// Keeps entries in the given `YYYY-MM` month (pass-through when `None`),
/// sorted newest date first. The sort is stable so same-day entries keep
/// insertion order.
pub fn filter_by_month(transactions: &[Transaction], month: Option<&str>) -> Vec<Transaction> {
    let mut rows: Vec<Transaction> = transactions
        .iter()
        .filter(|txn| month.map_or(true, |m| txn.month_key() == m))
        .cloned()
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

/// De-duplicated `YYYY-MM` keys, most recent first; feeds the month filter.
pub fn distinct_months(transactions: &[Transaction]) -> Vec<String> {
    let mut months: Vec<String> = by_month(transactions).into_keys().collect();
    months.reverse();
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(desc: &str, amount: f64, kind: TxnKind, date: (i32, u32, u32)) -> Transaction {
        Transaction::new(
            desc,
            amount,
            kind,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn("Salary", 1000.0, TxnKind::Income, (2024, 1, 5)),
            txn("Groceries", 300.0, TxnKind::Expense, (2024, 1, 10)),
            txn("Freelance", 450.0, TxnKind::Income, (2024, 2, 3)),
            txn("Rent", 700.0, TxnKind::Expense, (2024, 2, 1)),
        ]
    }

    #[test]
    fn totals_of_empty_collection_are_zero() {
        let t = totals(&[]);
        assert_eq!(t, Totals::default());
    }

    #[test]
    fn totals_matches_the_reference_scenario() {
        let rows = vec![
            txn("Salary", 1000.0, TxnKind::Income, (2024, 1, 5)),
            txn("Groceries", 300.0, TxnKind::Expense, (2024, 1, 10)),
        ];
        let t = totals(&rows);
        assert_eq!(t.income, 1000.0);
        assert_eq!(t.expense, 300.0);
        assert_eq!(t.balance, 700.0);

        let buckets = by_month(&rows);
        let jan = buckets.get("2024-01").expect("january bucket");
        assert_eq!(jan.income, 1000.0);
        assert_eq!(jan.expense, 300.0);
    }

    #[test]
    fn balance_always_equals_income_minus_expense() {
        let t = totals(&sample());
        assert_eq!(t.balance, t.income - t.expense);
    }

    #[test]
    fn bucket_sums_conserve_the_overall_totals() {
        let rows = sample();
        let t = totals(&rows);
        let buckets = by_month(&rows);
        let income: f64 = buckets.values().map(|b| b.income).sum();
        let expense: f64 = buckets.values().map(|b| b.expense).sum();
        assert_eq!(income, t.income);
        assert_eq!(expense, t.expense);
    }

    #[test]
    fn by_month_keys_are_ascending() {
        let months: Vec<String> = by_month(&sample()).into_keys().collect();
        assert_eq!(months, vec!["2024-01".to_string(), "2024-02".to_string()]);
    }

    #[test]
    fn filter_by_month_keeps_only_matching_entries_newest_first() {
        let rows = filter_by_month(&sample(), Some("2024-01"));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].description, "Groceries");
        assert_eq!(rows[1].description, "Salary");
    }

    #[test]
    fn filter_by_month_on_absent_month_is_empty() {
        let january_only = vec![
            txn("Salary", 1000.0, TxnKind::Income, (2024, 1, 5)),
            txn("Groceries", 300.0, TxnKind::Expense, (2024, 1, 10)),
        ];
        assert!(filter_by_month(&january_only, Some("2024-02")).is_empty());
    }

    #[test]
    fn filter_without_month_sorts_everything_newest_first() {
        let rows = filter_by_month(&sample(), None);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].description, "Freelance");
        assert_eq!(rows[3].description, "Salary");
    }

    #[test]
    fn distinct_months_are_descending_and_deduplicated() {
        assert_eq!(
            distinct_months(&sample()),
            vec!["2024-02".to_string(), "2024-01".to_string()]
        );
        assert!(distinct_months(&[]).is_empty());
    }
}
