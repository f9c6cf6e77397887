//! Budget progress
//!
//! Consumption of a budget is the sum of expenses in its category dated
//! inside its current window. Progress is that consumption as a percentage
//! of the budget amount, clamped to `[0, 100]`.

use chrono::{NaiveDateTime, Weekday};

use crate::error::{CoinwiseError, CoinwiseResult};
use crate::models::{Budget, Expense, Money};

use super::aggregation::{in_date_range, total_of};
use super::window::{budget_window_with, BudgetWindow, DEFAULT_WEEK_START};

/// Everything a progress bar needs for one budget
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub window: BudgetWindow,
    /// Consumption inside the window
    pub spent: Money,
    /// Budget amount minus spent; negative once overspent
    pub remaining: Money,
    /// Clamped percentage in `[0, 100]`
    pub progress: f64,
}

impl BudgetStatus {
    pub fn is_over_budget(&self) -> bool {
        self.progress >= 100.0
    }
}

/// Expenses of the budget's category inside its current window
pub fn matching_expenses(budget: &Budget, expenses: &[Expense], now: NaiveDateTime) -> Vec<Expense> {
    matching_expenses_with(budget, expenses, now, DEFAULT_WEEK_START)
}

pub fn matching_expenses_with(
    budget: &Budget,
    expenses: &[Expense],
    now: NaiveDateTime,
    week_start: Weekday,
) -> Vec<Expense> {
    let window = budget_window_with(budget.period, now, week_start);
    matching_in(budget, expenses, &window)
}

fn matching_in(budget: &Budget, expenses: &[Expense], window: &BudgetWindow) -> Vec<Expense> {
    in_date_range(expenses, window.start_date(), window.end_date())
        .into_iter()
        .filter(|e| e.category == budget.category)
        .collect()
}

/// Total of the matching expenses
pub fn consumption(budget: &Budget, expenses: &[Expense], now: NaiveDateTime) -> Money {
    total_of(&matching_expenses(budget, expenses, now))
}

/// Progress percentage with weeks starting on Sunday
///
/// # Errors
///
/// `InvariantViolation` if the budget amount is not positive. Validated
/// budgets never get here with such an amount.
pub fn progress(budget: &Budget, expenses: &[Expense], now: NaiveDateTime) -> CoinwiseResult<f64> {
    progress_with(budget, expenses, now, DEFAULT_WEEK_START)
}

pub fn progress_with(
    budget: &Budget,
    expenses: &[Expense],
    now: NaiveDateTime,
    week_start: Weekday,
) -> CoinwiseResult<f64> {
    Ok(budget_status_with(budget, expenses, now, week_start)?.progress)
}

/// Window, consumption, remaining amount and progress in one pass
pub fn budget_status(
    budget: &Budget,
    expenses: &[Expense],
    now: NaiveDateTime,
) -> CoinwiseResult<BudgetStatus> {
    budget_status_with(budget, expenses, now, DEFAULT_WEEK_START)
}

pub fn budget_status_with(
    budget: &Budget,
    expenses: &[Expense],
    now: NaiveDateTime,
    week_start: Weekday,
) -> CoinwiseResult<BudgetStatus> {
    if !budget.amount.is_positive() {
        return Err(CoinwiseError::InvariantViolation(format!(
            "budget '{}' has non-positive amount {}",
            budget.id, budget.amount
        )));
    }

    let window = budget_window_with(budget.period, now, week_start);
    let spent = total_of(&matching_in(budget, expenses, &window));
    let progress = percent_of(spent, budget.amount);

    Ok(BudgetStatus {
        window,
        spent,
        remaining: budget.amount - spent,
        progress,
    })
}

/// `spent / limit * 100` clamped to `[0, 100]`; `limit` must be positive
fn percent_of(spent: Money, limit: Money) -> f64 {
    let ratio = (spent.cents() as f64 * 100.0) / limit.cents() as f64;
    ratio.clamp(0.0, 100.0)
}
