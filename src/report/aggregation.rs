//! Transaction aggregation for reports.
//!
//! Provides the per-category totals and the income/expense split for a
//! period. Both shapes are computed from the same list of transactions in the
//! period.

use std::collections::BTreeMap;

use rusqlite::Connection;
use serde::Serialize;

use crate::{
    Error,
    period::Period,
    report::transaction::{Transaction, get_transactions_in_period},
};

/// The signed sum of transaction amounts for each category, sorted by category.
///
/// Income and expenses in the same category net against each other, e.g. a
/// refund and a purchase in "Groceries" give one signed total.
pub type CategoryTotals = BTreeMap<String, f64>;

/// The money earned and spent in a period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IncomeExpense {
    /// The sum of all positive amounts.
    pub income: f64,
    /// The sum of the absolute values of all negative amounts.
    pub expense: f64,
}

impl IncomeExpense {
    /// Income minus expenses.
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }

    /// Whether there was neither income nor expenses in the period.
    pub fn is_empty(&self) -> bool {
        self.income == 0.0 && self.expense == 0.0
    }
}

/// Sum the amounts of the transactions in `period` for each category.
///
/// Returns an empty map if there are no transactions in the period.
///
/// # Errors
/// Returns [Error::SqlError] if the transactions cannot be queried.
pub fn category_totals(period: Period, connection: &Connection) -> Result<CategoryTotals, Error> {
    let transactions = get_transactions_in_period(period, connection)?;

    Ok(aggregate_by_category(&transactions))
}

/// Split the transactions in `period` into total income and total expenses.
///
/// Transactions with an amount of zero count towards neither total.
///
/// # Errors
/// Returns [Error::SqlError] if the transactions cannot be queried.
pub fn income_expense_split(
    period: Period,
    connection: &Connection,
) -> Result<IncomeExpense, Error> {
    let transactions = get_transactions_in_period(period, connection)?;

    Ok(split_income_expense(&transactions))
}

fn aggregate_by_category(transactions: &[Transaction]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();

    for transaction in transactions {
        *totals.entry(transaction.category.clone()).or_insert(0.0) += transaction.amount;
    }

    totals
}

fn split_income_expense(transactions: &[Transaction]) -> IncomeExpense {
    let mut split = IncomeExpense::default();

    for transaction in transactions {
        if transaction.amount > 0.0 {
            split.income += transaction.amount;
        } else if transaction.amount < 0.0 {
            split.expense += transaction.amount.abs();
        }
    }

    split
}
