//! Spending aggregation
//!
//! Pure functions over expense collections. None of them depend on the order
//! of their input.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{Budget, Category, Expense, Money};

/// Per-category totals; always holds every category
pub type CategoryTotals = BTreeMap<Category, Money>;

/// Sum of all expense amounts (zero for an empty slice)
pub fn total_of(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Total spent per category, zero-filled for categories without expenses
pub fn by_category(expenses: &[Expense]) -> CategoryTotals {
    let mut totals: CategoryTotals = Category::all()
        .iter()
        .map(|c| (*c, Money::zero()))
        .collect();

    for expense in expenses {
        *totals.entry(expense.category).or_default() += expense.amount;
    }

    totals
}

/// Expenses dated within `[start, end]`, both ends inclusive
pub fn in_date_range(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect()
}

/// Expenses of one category
pub fn in_category(expenses: &[Expense], category: Category) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| e.category == category)
        .cloned()
        .collect()
}

/// Expenses dated in the same calendar month as `date`
pub fn in_month(expenses: &[Expense], date: NaiveDate) -> Vec<Expense> {
    let (first, last) = month_bounds(date);
    in_date_range(expenses, first, last)
}

/// First and last calendar day of `date`'s month
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date - Duration::days(i64::from(date.day0()));
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    let last = next_month.map_or(NaiveDate::MAX, |d| d - Duration::days(1));
    (first, last)
}

/// The category with the largest non-zero total
///
/// Ties go to the category declared first; `None` when everything is zero.
pub fn highest_category(totals: &CategoryTotals) -> Option<(Category, Money)> {
    totals
        .iter()
        .filter(|(_, amount)| amount.is_positive())
        .fold(None, |best: Option<(Category, Money)>, (category, amount)| match best {
            Some((_, top)) if top >= *amount => best,
            _ => Some((*category, *amount)),
        })
}

/// Sum of all budget limits
pub fn total_budgeted(budgets: &[Budget]) -> Money {
    budgets.iter().map(|b| b.amount).sum()
}

/// Render an amount as `$1,234.50`
///
/// Amounts are already whole cents, so this never rounds.
pub fn format_currency(amount: Money) -> String {
    amount.format_with_symbol("$")
}

/// Render an amount with a caller-chosen currency symbol
pub fn format_currency_with(amount: Money, symbol: &str) -> String {
    amount.format_with_symbol(symbol)
}
