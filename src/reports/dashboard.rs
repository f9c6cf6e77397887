//! Dashboard summary
//!
//! Headline figures for the current month next to the total amount
//! budgeted, plus a coarse status band for the utilization ratio.

use chrono::NaiveDate;

use crate::models::{Budget, Category, Expense, Money};
use crate::services::{
    by_category, format_currency_with, highest_category, in_month, total_budgeted, total_of,
    CategoryTotals,
};

/// How current-month spending compares to the total budgeted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendingStatus {
    /// Up to 25%
    WellUnder,
    /// Above 25% and up to 75%
    OnTrack,
    /// Above 75% and up to 100%
    Approaching,
    /// Above 100%
    Exceeded,
}

impl SpendingStatus {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= 25.0 {
            Self::WellUnder
        } else if ratio <= 75.0 {
            Self::OnTrack
        } else if ratio <= 100.0 {
            Self::Approaching
        } else {
            Self::Exceeded
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::WellUnder => "Great job! You're well under budget",
            Self::OnTrack => "You're on track with your budget",
            Self::Approaching => "You're approaching your budget limit",
            Self::Exceeded => "You've exceeded your budget",
        }
    }
}

/// Dashboard summary
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    /// Day the "current month" is taken from
    pub today: NaiveDate,
    /// Every expense ever recorded
    pub total_expenses: Money,
    pub month_total: Money,
    pub month_by_category: CategoryTotals,
    /// Largest non-zero category this month
    pub highest_category: Option<(Category, Money)>,
    pub total_budgeted: Money,
    /// Month total as a percentage of the total budgeted, not clamped
    pub utilization: f64,
    pub status: SpendingStatus,
}

impl DashboardSummary {
    /// Build the summary for the month containing `today`
    pub fn generate(expenses: &[Expense], budgets: &[Budget], today: NaiveDate) -> Self {
        let this_month = in_month(expenses, today);
        let month_total = total_of(&this_month);
        let month_by_category = by_category(&this_month);
        let total_budgeted = total_budgeted(budgets);

        // Nothing budgeted reads as 0%, not as a division by zero
        let utilization = if total_budgeted.is_positive() {
            month_total.cents() as f64 * 100.0 / total_budgeted.cents() as f64
        } else {
            0.0
        };

        Self {
            today,
            total_expenses: total_of(expenses),
            month_total,
            highest_category: highest_category(&month_by_category),
            month_by_category,
            total_budgeted,
            utilization,
            status: SpendingStatus::from_ratio(utilization),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |m: Money| format_currency_with(m, currency_symbol);
        let mut output = String::new();

        output.push_str(&format!("Dashboard - {}\n", self.today.format("%B %Y")));
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!("{:<24} {:>20}\n", "Total Expenses:", money(self.total_expenses)));
        output.push_str(&format!("{:<24} {:>20}\n", "This Month:", money(self.month_total)));
        output.push_str(&format!("{:<24} {:>20}\n", "Total Budgeted:", money(self.total_budgeted)));

        let highest = match self.highest_category {
            Some((category, amount)) => format!("{} ({})", category, money(amount)),
            None => "N/A".to_string(),
        };
        output.push_str(&format!("{:<24} {:>20}\n", "Top Category:", highest));

        output.push_str(&"-".repeat(50));
        output.push('\n');
        output.push_str(&format!("Budget Utilization: {:.0}%\n", self.utilization));
        output.push_str(self.status.message());
        output.push('\n');

        output
    }
}
