//! Expense collection
//!
//! Persisted under the `coinwise_expenses` key.

use crate::error::{CoinwiseError, CoinwiseResult};
use crate::models::{Expense, NewExpense, RecordId};

use super::records::{Record, RecordStore};

/// Backend key for the expense collection
pub const EXPENSES_KEY: &str = "coinwise_expenses";

/// Record store holding all expenses
pub type ExpenseStore = RecordStore<Expense>;

impl Record for Expense {
    type New = NewExpense;

    const STORAGE_KEY: &'static str = EXPENSES_KEY;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_new(id: RecordId, new: NewExpense) -> Self {
        Expense::from_new(id, new)
    }

    fn validate(&self) -> CoinwiseResult<()> {
        Expense::validate(self).map_err(|e| CoinwiseError::Validation(e.to_string()))
    }
}
