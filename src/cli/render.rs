//! Text renderer for the dashboard: summary line, category split, monthly
//! trend, and the transaction list. Consumes freshly computed aggregates
//! only; every call is a full redraw with no retained state.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::{
    cli::output,
    config::Config,
    currency::{format_amount, format_date, format_month, format_month_short},
    domain::{Transaction, TxnKind},
    report::{MonthTotals, Totals},
};

const SPLIT_BAR_WIDTH: usize = 24;
const TREND_BAR_WIDTH: usize = 20;

/// Full dashboard: totals, both charts, then the (unfiltered) list.
pub fn dashboard(config: &Config, transactions: &[Transaction]) {
    let totals = crate::report::totals(transactions);
    summary(config, &totals);
    split_chart(config, &totals);
    trend_chart(config, &crate::report::by_month(transactions));
    list(
        config,
        &crate::report::filter_by_month(transactions, None),
        None,
    );
}

pub fn summary(config: &Config, totals: &Totals) {
    output::section("Summary");
    let income = format_amount(&config.locale, &config.currency_symbol, totals.income);
    let expense = format_amount(&config.locale, &config.currency_symbol, totals.expense);
    let balance = format_amount(&config.locale, &config.currency_symbol, totals.balance);
    println!(
        "Income: {}   Expense: {}   Balance: {}",
        income.green(),
        expense.red(),
        if totals.balance < 0.0 {
            balance.red().bold()
        } else {
            balance.bold()
        }
    );
}

/// Doughnut analogue: one proportional bar per kind with its share.
pub fn split_chart(config: &Config, totals: &Totals) {
    output::section("Income vs Expense");
    let total = totals.income + totals.expense;
    if total <= 0.0 {
        output::info("No data to chart.");
        return;
    }
    let income_share = totals.income / total;
    let expense_share = totals.expense / total;
    println!(
        "{:<8}{} {:>6.1}%  {}",
        "Income",
        bar(income_share, SPLIT_BAR_WIDTH).green(),
        income_share * 100.0,
        format_amount(&config.locale, &config.currency_symbol, totals.income)
    );
    println!(
        "{:<8}{} {:>6.1}%  {}",
        "Expense",
        bar(expense_share, SPLIT_BAR_WIDTH).red(),
        expense_share * 100.0,
        format_amount(&config.locale, &config.currency_symbol, totals.expense)
    );
}

/// Grouped-bar analogue: per ascending month, paired income/expense bars
/// scaled against the largest bucket value.
pub fn trend_chart(config: &Config, buckets: &BTreeMap<String, MonthTotals>) {
    output::section("Monthly Trend");
    if buckets.is_empty() {
        output::info("No data to chart.");
        return;
    }
    let max = buckets
        .values()
        .flat_map(|b| [b.income, b.expense])
        .fold(0.0f64, f64::max);
    if max <= 0.0 {
        output::info("No data to chart.");
        return;
    }
    for (month, bucket) in buckets {
        let label = format_month_short(month);
        println!(
            "{:<8}{:<8}{} {}",
            label,
            "income",
            bar(bucket.income / max, TREND_BAR_WIDTH).green(),
            format_amount(&config.locale, &config.currency_symbol, bucket.income)
        );
        println!(
            "{:<8}{:<8}{} {}",
            "",
            "expense",
            bar(bucket.expense / max, TREND_BAR_WIDTH).red(),
            format_amount(&config.locale, &config.currency_symbol, bucket.expense)
        );
    }
}

/// Transaction list, newest first, with the short id used for deletion.
pub fn list(config: &Config, rows: &[Transaction], month: Option<&str>) {
    match month {
        Some(month) => output::section(format!("Transactions — {}", format_month(month))),
        None => output::section("Transactions"),
    }
    if rows.is_empty() {
        output::info("No transactions");
        return;
    }
    for txn in rows {
        let amount = format!(
            "{} {}",
            txn.kind.sign(),
            format_amount(&config.locale, &config.currency_symbol, txn.amount)
        );
        let amount = match txn.kind {
            TxnKind::Income => amount.green(),
            TxnKind::Expense => amount.red(),
        };
        println!(
            "{}  {:<12}  {:<28}  {:>14}",
            txn.short_id().dimmed(),
            format_date(&config.locale, txn.date),
            truncate(&txn.description, 28),
            amount
        );
    }
}

/// Month filter choices, most recent first.
pub fn months(months: &[String]) {
    output::section("Months");
    if months.is_empty() {
        output::info("No transactions");
        return;
    }
    for month in months {
        println!("{:<8} {}", month, format_month(month).dimmed());
    }
}

fn bar(share: f64, width: usize) -> String {
    let filled = (share.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut out = "█".repeat(filled);
    out.push_str(&"░".repeat(width.saturating_sub(filled)));
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
