//! Core data models for Coinwise
//!
//! This module contains the data structures of the expense domain:
//! categories, money, expenses, budgets and their identifiers.

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use budget::{Budget, BudgetInput, BudgetValidationError, NewBudget};
pub use category::{Category, CategoryParseError};
pub use expense::{Expense, ExpenseInput, ExpenseValidationError, NewExpense};
pub use ids::{IdGenerator, RandomIdGenerator, RecordId, SequentialIdGenerator};
pub use money::{Money, MoneyParseError, MAX_ABS_CENTS};
pub use period::{BudgetPeriod, PeriodParseError};
