//! Service layer for Coinwise
//!
//! Pure engines over loaded collections: aggregation by category and date,
//! budget window computation and budget progress. Nothing here touches
//! storage or mutates its input.

pub mod aggregation;
pub mod progress;
pub mod window;

pub use aggregation::{
    by_category, format_currency, format_currency_with, highest_category, in_category,
    in_date_range, in_month, month_bounds, total_budgeted, total_of, CategoryTotals,
};
pub use progress::{
    budget_status, budget_status_with, consumption, matching_expenses, matching_expenses_with,
    progress, progress_with, BudgetStatus,
};
pub use window::{
    budget_window, budget_window_with, window_start, window_start_with, BudgetWindow,
    DEFAULT_WEEK_START,
};
