//! Budget model
//!
//! A recurring spending limit for one category. Several budgets may target
//! the same category; nothing enforces uniqueness.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::RecordId;
use super::money::Money;
use super::period::BudgetPeriod;
use crate::error::{CoinwiseError, CoinwiseResult};

/// A spending limit for a category over a recurring period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier, assigned on creation
    pub id: RecordId,

    /// Category the limit applies to
    pub category: Category,

    /// The limit (always positive)
    pub amount: Money,

    /// When the budget window resets
    pub period: BudgetPeriod,
}

impl Budget {
    /// Build a stored budget from a draft and its freshly assigned id
    pub fn from_new(id: RecordId, new: NewBudget) -> Self {
        Self {
            id,
            category: new.category,
            amount: new.amount,
            period: new.period,
        }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.amount.is_positive() {
            return Err(BudgetValidationError::NonPositiveAmount(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} budget: {}", self.period, self.category, self.amount)
    }
}

/// A budget that has not been stored yet (no id)
#[derive(Debug, Clone, PartialEq)]
pub struct NewBudget {
    pub category: Category,
    pub amount: Money,
    pub period: BudgetPeriod,
}

impl NewBudget {
    /// Create a new budget draft
    pub fn new(category: Category, amount: Money, period: BudgetPeriod) -> Self {
        Self {
            category,
            amount,
            period,
        }
    }
}

/// Raw budget form fields as typed by a user
#[derive(Debug, Clone, Default)]
pub struct BudgetInput {
    pub amount: String,
    pub category: String,
    pub period: String,
}

impl BudgetInput {
    /// Turn the form into a validated draft, or reject it without side effects
    pub fn parse(&self) -> CoinwiseResult<NewBudget> {
        let fields = [&self.amount, &self.category, &self.period];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(CoinwiseError::Validation(
                "Please fill out all fields to create a budget".into(),
            ));
        }

        let amount = Money::parse(&self.amount)
            .map_err(|e| CoinwiseError::Validation(e.to_string()))?;
        if !amount.is_positive() {
            return Err(CoinwiseError::Validation(
                BudgetValidationError::NonPositiveAmount(amount).to_string(),
            ));
        }

        let category = self
            .category
            .parse::<Category>()
            .map_err(|e| CoinwiseError::Validation(e.to_string()))?;

        let period = self
            .period
            .parse::<BudgetPeriod>()
            .map_err(|e| CoinwiseError::Validation(e.to_string()))?;

        Ok(NewBudget {
            category,
            amount,
            period,
        })
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Budget amount must be positive (got {})", amount)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
