//! Category chart data
//!
//! Turns per-category totals into the slices a pie chart renders.

use serde::Serialize;

use crate::models::{Category, Expense, Money};
use crate::services::{by_category, CategoryTotals};

/// One slice of the spending chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub name: &'static str,
    pub value: Money,
    /// `#RRGGBB`
    pub color: &'static str,
    /// Share of the chart total, 0-100
    pub percentage: f64,
}

/// Chart slices for every category with spending, largest first
pub fn category_chart(expenses: &[Expense]) -> Vec<ChartSlice> {
    chart_from_totals(&by_category(expenses))
}

/// Chart slices from precomputed totals
///
/// Zero totals are dropped. Equal totals keep category declaration order.
pub fn chart_from_totals(totals: &CategoryTotals) -> Vec<ChartSlice> {
    let mut entries: Vec<(Category, Money)> = totals
        .iter()
        .filter(|(_, amount)| amount.is_positive())
        .map(|(category, amount)| (*category, *amount))
        .collect();

    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let total: Money = entries.iter().map(|(_, amount)| *amount).sum();

    entries
        .into_iter()
        .map(|(category, value)| ChartSlice {
            name: category.name(),
            value,
            color: category.color(),
            percentage: if total.is_positive() {
                value.cents() as f64 * 100.0 / total.cents() as f64
            } else {
                0.0
            },
        })
        .collect()
}
