//! Budget collection
//!
//! Persisted under the `coinwise_budgets` key.

use crate::error::{CoinwiseError, CoinwiseResult};
use crate::models::{Budget, NewBudget, RecordId};

use super::records::{Record, RecordStore};

/// Backend key for the budget collection
pub const BUDGETS_KEY: &str = "coinwise_budgets";

/// Record store holding all budgets
pub type BudgetStore = RecordStore<Budget>;

impl Record for Budget {
    type New = NewBudget;

    const STORAGE_KEY: &'static str = BUDGETS_KEY;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_new(id: RecordId, new: NewBudget) -> Self {
        Budget::from_new(id, new)
    }

    fn validate(&self) -> CoinwiseResult<()> {
        Budget::validate(self).map_err(|e| CoinwiseError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, Category, Money, SequentialIdGenerator};
    use crate::storage::kv::{KeyValueStore, MemoryStore};
    use std::sync::Arc;

    fn create_test_store() -> (Arc<MemoryStore>, BudgetStore) {
        let backend = Arc::new(MemoryStore::new());
        let store = BudgetStore::new(backend.clone(), Arc::new(SequentialIdGenerator::new("b")));
        (backend, store)
    }

    #[test]
    fn test_same_category_budgets_allowed() {
        let (_backend, store) = create_test_store();

        store
            .add(NewBudget::new(Category::Food, Money::from_cents(1000), BudgetPeriod::Daily))
            .unwrap();
        store
            .add(NewBudget::new(Category::Food, Money::from_cents(20000), BudgetPeriod::Monthly))
            .unwrap();

        let budgets = store.load().unwrap();
        assert_eq!(budgets.len(), 2);
        assert_eq!(budgets[0].period, BudgetPeriod::Monthly);
        assert_eq!(budgets[1].period, BudgetPeriod::Daily);
    }

    #[test]
    fn test_zero_amount_rejected() {
        let (backend, store) = create_test_store();

        let err = store
            .add(NewBudget::new(Category::Food, Money::zero(), BudgetPeriod::Weekly))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(backend.get(BUDGETS_KEY).unwrap(), None);
    }

    #[test]
    fn test_persisted_format() {
        let (backend, store) = create_test_store();
        store
            .add(NewBudget::new(Category::Utilities, Money::from_cents(12_050), BudgetPeriod::Yearly))
            .unwrap();

        let raw = backend.get(BUDGETS_KEY).unwrap().unwrap();
        assert_eq!(
            raw,
            r#"[{"id":"b-1","category":"Utilities","amount":120.5,"period":"yearly"}]"#
        );
    }

    #[test]
    fn test_update_and_delete() {
        let (_backend, store) = create_test_store();
        let budget = store
            .add(NewBudget::new(Category::Shopping, Money::from_cents(5000), BudgetPeriod::Weekly))
            .unwrap();

        let mut raised = budget.clone();
        raised.amount = Money::from_cents(7500);
        store.update(raised.clone()).unwrap();
        assert_eq!(store.get(&budget.id).unwrap(), Some(raised));

        store.delete(&budget.id).unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
