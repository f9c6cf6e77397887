//! Budget windows
//!
//! A budget only counts expenses dated inside its current window: the span
//! from the start of the period that contains "now" up to and including now.
//! Expense dates have no time of day, so membership compares calendar dates.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::models::BudgetPeriod;

/// Weeks begin on Sunday unless configured otherwise
pub const DEFAULT_WEEK_START: Weekday = Weekday::Sun;

/// The `[start, end]` span a budget is measured over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetWindow {
    /// Midnight on the first day of the current period
    pub start: NaiveDateTime,
    /// The instant the window was computed for
    pub end: NaiveDateTime,
}

impl BudgetWindow {
    /// First calendar day inside the window
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Last calendar day inside the window
    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    /// Whether an expense dated `date` falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }
}

/// Start of the period containing `now`, with weeks starting on Sunday
pub fn window_start(period: BudgetPeriod, now: NaiveDateTime) -> NaiveDateTime {
    window_start_with(period, now, DEFAULT_WEEK_START)
}

/// Start of the period containing `now`
///
/// * Daily: midnight today
/// * Weekly: midnight on the most recent `week_start` (today if it is one)
/// * Monthly: midnight on the 1st of this month
/// * Yearly: midnight on January 1st of this year
pub fn window_start_with(
    period: BudgetPeriod,
    now: NaiveDateTime,
    week_start: Weekday,
) -> NaiveDateTime {
    let today = now.date();

    let first_day = match period {
        BudgetPeriod::Daily => today,
        BudgetPeriod::Weekly => {
            let back = (today.weekday().num_days_from_monday() + 7
                - week_start.num_days_from_monday())
                % 7;
            today - Duration::days(i64::from(back))
        }
        BudgetPeriod::Monthly => today - Duration::days(i64::from(today.day0())),
        BudgetPeriod::Yearly => today - Duration::days(i64::from(today.ordinal0())),
    };

    first_day.and_time(NaiveTime::MIN)
}

/// The window a budget of `period` covers at `now`
pub fn budget_window(period: BudgetPeriod, now: NaiveDateTime) -> BudgetWindow {
    budget_window_with(period, now, DEFAULT_WEEK_START)
}

/// The window a budget of `period` covers at `now`, for a given week start
pub fn budget_window_with(
    period: BudgetPeriod,
    now: NaiveDateTime,
    week_start: Weekday,
) -> BudgetWindow {
    BudgetWindow {
        start: window_start_with(period, now, week_start),
        end: now,
    }
}
