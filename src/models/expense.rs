//! Expense model
//!
//! A single dated spending record. Expenses are immutable once stored except
//! through full replacement.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::RecordId;
use super::money::Money;
use crate::error::{CoinwiseError, CoinwiseResult};

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned on creation
    pub id: RecordId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// What the money was spent on
    pub description: String,

    /// Spending category
    pub category: Category,

    /// Calendar date of the expense
    pub date: NaiveDate,
}

impl Expense {
    /// Build a stored expense from a draft and its freshly assigned id
    pub fn from_new(id: RecordId, new: NewExpense) -> Self {
        Self {
            id,
            amount: new.amount,
            description: new.description,
            category: new.category,
            date: new.date,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_fields(self.amount, &self.description)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.description, self.amount, self.category
        )
    }
}

/// An expense that has not been stored yet (no id)
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub amount: Money,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
}

impl NewExpense {
    /// Create a new expense draft
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category,
            date,
        }
    }
}

fn validate_fields(amount: Money, description: &str) -> Result<(), ExpenseValidationError> {
    if !amount.is_positive() {
        return Err(ExpenseValidationError::NonPositiveAmount(amount));
    }

    if description.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyDescription);
    }

    Ok(())
}

/// Raw expense form fields as typed by a user
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub amount: String,
    pub description: String,
    pub category: String,
    /// Date in `YYYY-MM-DD` form
    pub date: String,
}

impl ExpenseInput {
    /// Turn the form into a validated draft, or reject it without side effects
    pub fn parse(&self) -> CoinwiseResult<NewExpense> {
        let fields = [&self.amount, &self.description, &self.category, &self.date];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(CoinwiseError::Validation(
                "Please fill out all fields to add an expense".into(),
            ));
        }

        let amount = Money::parse(&self.amount)
            .map_err(|e| CoinwiseError::Validation(e.to_string()))?;

        let category = self
            .category
            .parse::<Category>()
            .map_err(|e| CoinwiseError::Validation(e.to_string()))?;

        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            CoinwiseError::Validation(format!("Invalid date: '{}'", self.date.trim()))
        })?;

        let description = self.description.trim().to_string();
        validate_fields(amount, &description)
            .map_err(|e| CoinwiseError::Validation(e.to_string()))?;

        Ok(NewExpense {
            amount,
            description,
            category,
            date,
        })
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount(Money),
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Expense amount must be positive (got {})", amount)
            }
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
