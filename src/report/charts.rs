//! Chart generation and rendering for period reports.
//!
//! This module creates ECharts visualizations for a year or a month:
//! - **Category Totals**: bar chart of the signed total for each category
//! - **Expenses by Category**: pie chart of the categories with a negative total
//! - **Income vs Expense**: bar and pie charts of the income/expense split
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered into a standalone HTML page.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger},
    series::{Pie, bar},
};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::{
    period::Period,
    report::aggregation::{CategoryTotals, IncomeExpense},
};

const ECHARTS_SOURCE: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

/// A report chart with its HTML container ID and ECharts configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Build every chart that has data to show for `period`.
///
/// The pie charts are left out when there is nothing to put in them, e.g. a
/// month with income but no expenses has no expenses pie chart.
pub fn report_charts(
    period: Period,
    totals: &CategoryTotals,
    split: &IncomeExpense,
) -> Vec<ReportChart> {
    let mut charts = Vec::with_capacity(4);

    if !totals.is_empty() {
        charts.push(ReportChart {
            id: "category-totals-chart",
            options: category_totals_chart(period, totals).to_string(),
        });
    }

    if let Some(chart) = expenses_pie_chart(period, totals) {
        charts.push(ReportChart {
            id: "expenses-chart",
            options: chart.to_string(),
        });
    }

    if !split.is_empty() {
        charts.push(ReportChart {
            id: "income-expense-chart",
            options: income_expense_chart(period, split).to_string(),
        });
    }

    if let Some(chart) = income_expense_pie_chart(period, split) {
        charts.push(ReportChart {
            id: "income-expense-pie-chart",
            options: chart.to_string(),
        });
    }

    charts
}

/// Renders a standalone HTML page that draws `charts` with ECharts.
pub fn render_report_page(title: &str, charts: &[ReportChart]) -> String {
    report_page(title, charts).into_string()
}

fn report_page(title: &str, charts: &[ReportChart]) -> Markup {
    html!(
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(ECHARTS_SOURCE) {}
                script { (PreEscaped(charts_script(charts))) }
            }
            body style="font-family: sans-serif; margin: 2rem;" {
                h1 { (title) }
                @if charts.is_empty() {
                    p { "No transactions for this period." }
                }
                @for chart in charts {
                    div id=(chart.id) style="width: 100%; max-width: 960px; height: 420px; margin-bottom: 2rem;" {}
                }
            }
        }
    )
}

/// Generates JavaScript initialization code for report charts.
fn charts_script(charts: &[ReportChart]) -> String {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chart = echarts.init(document.getElementById("{}"));
                    chart.setOption({});
                    window.addEventListener('resize', chart.resize);
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    )
}

fn category_totals_chart(period: Period, totals: &CategoryTotals) -> Chart {
    let labels: Vec<String> = totals.keys().cloned().collect();
    let values: Vec<f64> = totals.values().copied().collect();

    Chart::new()
        .title(
            Title::new()
                .text("Category Totals")
                .subtext(period.to_string()),
        )
        .tooltip(currency_tooltip(Trigger::Axis))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(bar::Bar::new().name("Total").data(values))
}

fn expenses_pie_chart(period: Period, totals: &CategoryTotals) -> Option<Chart> {
    let expenses: Vec<(f64, &str)> = totals
        .iter()
        .filter(|(_, total)| **total < 0.0)
        .map(|(category, total)| (-total, category.as_str()))
        .collect();

    if expenses.is_empty() {
        return None;
    }

    Some(
        Chart::new()
            .title(
                Title::new()
                    .text("Expenses by Category")
                    .subtext(period.to_string()),
            )
            .tooltip(currency_tooltip(Trigger::Item))
            .legend(Legend::new().top("bottom"))
            .series(Pie::new().name("Expenses").radius("60%").data(expenses)),
    )
}

fn income_expense_chart(period: Period, split: &IncomeExpense) -> Chart {
    Chart::new()
        .title(
            Title::new()
                .text("Income vs Expense")
                .subtext(period.to_string()),
        )
        .tooltip(currency_tooltip(Trigger::Axis))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(vec!["Income", "Expense"]),
        )
        .y_axis(Axis::new().type_(AxisType::Value))
        .series(
            bar::Bar::new()
                .name("Amount")
                .data(vec![split.income, split.expense]),
        )
}

fn income_expense_pie_chart(period: Period, split: &IncomeExpense) -> Option<Chart> {
    let slices: Vec<(f64, &str)> = [(split.income, "Income"), (split.expense, "Expense")]
        .into_iter()
        .filter(|(amount, _)| *amount > 0.0)
        .collect();

    if slices.is_empty() {
        return None;
    }

    Some(
        Chart::new()
            .title(
                Title::new()
                    .text("Income vs Expense Share")
                    .subtext(period.to_string()),
            )
            .tooltip(currency_tooltip(Trigger::Item))
            .legend(Legend::new().top("bottom"))
            .series(Pie::new().name("Share").radius("60%").data(slices)),
    )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip(trigger: Trigger) -> Tooltip {
    Tooltip::new()
        .trigger(trigger)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
