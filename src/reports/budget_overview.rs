//! Budget Overview Report
//!
//! One row per budget showing its limit, what has been spent in the
//! current window and how far along the progress bar is.

use chrono::{NaiveDateTime, Weekday};

use crate::error::CoinwiseResult;
use crate::models::{Budget, BudgetPeriod, Category, Expense, Money, RecordId};
use crate::services::{budget_status_with, DEFAULT_WEEK_START};

/// A row in the budget overview for a single budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReportRow {
    /// Budget ID
    pub budget_id: RecordId,
    /// Category the budget applies to
    pub category: Category,
    /// Period the limit resets on
    pub period: BudgetPeriod,
    /// Budget limit
    pub limit: Money,
    /// Spent within the current window
    pub spent: Money,
    /// Limit minus spent (negative when overspent)
    pub remaining: Money,
    /// Clamped progress percentage
    pub progress: f64,
    /// Progress has reached 100%
    pub over_budget: bool,
}

impl BudgetReportRow {
    /// Period name as shown to the user ("Monthly")
    pub fn period_name(&self) -> &'static str {
        self.period.display_name()
    }
}

/// Budget Overview Report
#[derive(Debug, Clone)]
pub struct BudgetOverview {
    /// Instant the windows were computed for
    pub as_of: NaiveDateTime,
    /// Rows in the same order as the input budgets
    pub rows: Vec<BudgetReportRow>,
}

impl BudgetOverview {
    /// Generate the overview with weeks starting on Sunday
    pub fn generate(
        budgets: &[Budget],
        expenses: &[Expense],
        now: NaiveDateTime,
    ) -> CoinwiseResult<Self> {
        Self::generate_with(budgets, expenses, now, DEFAULT_WEEK_START)
    }

    /// Generate the overview for a configured week start
    pub fn generate_with(
        budgets: &[Budget],
        expenses: &[Expense],
        now: NaiveDateTime,
        week_start: Weekday,
    ) -> CoinwiseResult<Self> {
        let rows = budgets
            .iter()
            .map(|budget| {
                let status = budget_status_with(budget, expenses, now, week_start)?;
                Ok(BudgetReportRow {
                    budget_id: budget.id.clone(),
                    category: budget.category,
                    period: budget.period,
                    limit: budget.amount,
                    spent: status.spent,
                    remaining: status.remaining,
                    progress: status.progress,
                    over_budget: status.is_over_budget(),
                })
            })
            .collect::<CoinwiseResult<Vec<_>>>()?;

        Ok(Self { as_of: now, rows })
    }

    /// Number of budgets at or past their limit
    pub fn over_budget_count(&self) -> usize {
        self.rows.iter().filter(|r| r.over_budget).count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Budget Overview - {}\n",
            self.as_of.format("%Y-%m-%d %H:%M")
        ));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets set yet.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<16} {:<8} {:>12} {:>12} {:>12} {:>7}\n",
            "Category", "Period", "Limit", "Spent", "Remaining", "%"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in &self.rows {
            let marker = if row.over_budget { " *" } else { "" };
            output.push_str(&format!(
                "{:<16} {:<8} {:>12} {:>12} {:>12} {:>6.1}%{}\n",
                row.category.name(),
                row.period_name(),
                row.limit,
                row.spent,
                row.remaining,
                row.progress,
                marker
            ));
        }

        if self.over_budget_count() > 0 {
            output.push_str("\n* = Over budget\n");
        }

        output
    }
}
