//! Reports over a year or a month of transactions.
//!
//! This module contains:
//! - Database queries for the transactions in a period
//! - Per-category totals and the income/expense split
//! - ECharts chart generation and the standalone HTML report page

mod aggregation;
mod charts;
mod transaction;

pub use aggregation::{CategoryTotals, IncomeExpense, category_totals, income_expense_split};
pub use charts::{ReportChart, render_report_page, report_charts};
