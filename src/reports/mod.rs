//! Reports module for Coinwise
//!
//! Derived views handed to the presentation layer: the budget overview,
//! category chart slices and the dashboard summary.

pub mod budget_overview;
pub mod category_chart;
pub mod dashboard;

pub use budget_overview::{BudgetOverview, BudgetReportRow};
pub use category_chart::{category_chart, chart_from_totals, ChartSlice};
pub use dashboard::{DashboardSummary, SpendingStatus};
