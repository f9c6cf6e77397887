//! Generic record store over a key/value backend
//!
//! A collection of records lives under one fixed key as a JSON array. Every
//! operation is a full load/modify/persist round-trip; there is no cached
//! copy, so two stores over the same backend always see each other's writes
//! (and can overwrite each other's, which is accepted for a single user).

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLog, Change};
use crate::error::{CoinwiseError, CoinwiseResult};
use crate::models::{IdGenerator, RecordId};

use super::kv::KeyValueStore;

/// A persisted record shape with an `id` field
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// The record without its id, as supplied on creation
    type New;

    /// Backend key holding the whole collection
    const STORAGE_KEY: &'static str;

    fn id(&self) -> &RecordId;

    /// Combine a draft with its freshly generated id
    fn from_new(id: RecordId, new: Self::New) -> Self;

    /// Check field invariants, mapping failures to `CoinwiseError::Validation`
    fn validate(&self) -> CoinwiseResult<()>;
}

/// Load/add/delete/update over one named collection
pub struct RecordStore<T: Record> {
    backend: Arc<dyn KeyValueStore>,
    ids: Arc<dyn IdGenerator>,
    audit: Option<Arc<AuditLog>>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> RecordStore<T> {
    /// Create a store over `backend` that draws new ids from `ids`
    pub fn new(backend: Arc<dyn KeyValueStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            backend,
            ids,
            audit: None,
            _record: PhantomData,
        }
    }

    /// Journal every successful mutation in `log`
    pub fn with_audit(mut self, log: Arc<AuditLog>) -> Self {
        self.audit = Some(log);
        self
    }

    /// Load the persisted collection
    ///
    /// A key that was never written (or holds an empty string or `null`) is
    /// an empty collection, not an error.
    pub fn load(&self) -> CoinwiseResult<Vec<T>> {
        let Some(raw) = self.backend.get(T::STORAGE_KEY)? else {
            return Ok(Vec::new());
        };

        let raw = raw.trim();
        if raw.is_empty() || raw == "null" {
            return Ok(Vec::new());
        }

        let records: Vec<T> = serde_json::from_str(raw).map_err(|e| {
            CoinwiseError::Storage(format!("Failed to parse {}: {}", T::STORAGE_KEY, e))
        })?;

        debug!(key = T::STORAGE_KEY, count = records.len(), "loaded collection");
        Ok(records)
    }

    /// Get a single record by id
    pub fn get(&self, id: &RecordId) -> CoinwiseResult<Option<T>> {
        Ok(self.load()?.into_iter().find(|r| r.id() == id))
    }

    /// Assign a new id, prepend the record and persist
    ///
    /// Invalid drafts are rejected before anything is written.
    pub fn add(&self, new: T::New) -> CoinwiseResult<T> {
        let id = self.ids.next_id();
        let record = T::from_new(id, new);
        record.validate()?;

        let mut records = self.load()?;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(CoinwiseError::InvariantViolation(format!(
                "generated id '{}' already exists in {}",
                record.id(),
                T::STORAGE_KEY
            )));
        }

        records.insert(0, record.clone());
        self.save(&records)?;

        self.journal(record.id(), || Change::Added {
            record: record.clone(),
        });

        Ok(record)
    }

    /// Remove the record with `id`; unknown ids are a no-op
    pub fn delete(&self, id: &RecordId) -> CoinwiseResult<()> {
        let mut records = self.load()?;

        let Some(pos) = records.iter().position(|r| r.id() == id) else {
            warn!(key = T::STORAGE_KEY, %id, "delete of unknown id ignored");
            return Ok(());
        };

        let removed = records.remove(pos);
        self.save(&records)?;

        self.journal(id, || Change::Removed { record: removed });

        Ok(())
    }

    /// Replace the record whose id matches `record`; unknown ids are a no-op
    pub fn update(&self, record: T) -> CoinwiseResult<()> {
        record.validate()?;

        let mut records = self.load()?;

        let Some(slot) = records.iter_mut().find(|r| r.id() == record.id()) else {
            warn!(key = T::STORAGE_KEY, id = %record.id(), "update of unknown id ignored");
            return Ok(());
        };

        let before = std::mem::replace(slot, record.clone());
        self.save(&records)?;

        self.journal(record.id(), || Change::updated(before, record.clone()));

        Ok(())
    }

    /// Journaled changes to this collection, oldest first
    ///
    /// Empty when no audit log is configured.
    pub fn history(&self) -> CoinwiseResult<Vec<AuditEntry<T>>> {
        match &self.audit {
            Some(log) => log.entries(T::STORAGE_KEY),
            None => Ok(Vec::new()),
        }
    }

    /// Append a change to the audit log, if any
    ///
    /// The collection is already persisted at this point, so a failed append
    /// is only reported; failing the call would invite a duplicate retry.
    fn journal(&self, id: &RecordId, change: impl FnOnce() -> Change<T>) {
        let Some(log) = &self.audit else {
            return;
        };

        let entry = AuditEntry::new(T::STORAGE_KEY, id.clone(), change());
        if let Err(e) = log.append(&entry) {
            warn!(key = T::STORAGE_KEY, %id, error = %e, "audit entry not written");
        }
    }

    fn save(&self, records: &[T]) -> CoinwiseResult<()> {
        let json = serde_json::to_string(records)?;
        self.backend.set(T::STORAGE_KEY, &json)?;
        debug!(key = T::STORAGE_KEY, count = records.len(), "persisted collection");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, Money, NewExpense, SequentialIdGenerator};
    use crate::storage::kv::MemoryStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    struct FixedIdGenerator;

    impl IdGenerator for FixedIdGenerator {
        fn next_id(&self) -> RecordId {
            RecordId::new("same")
        }
    }

    fn create_test_store() -> (Arc<MemoryStore>, RecordStore<Expense>) {
        let backend = Arc::new(MemoryStore::new());
        let store = RecordStore::new(
            backend.clone(),
            Arc::new(SequentialIdGenerator::new("exp")),
        );
        (backend, store)
    }

    fn lunch(cents: i64) -> NewExpense {
        NewExpense::new(
            Money::from_cents(cents),
            "Lunch",
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_backend, store) = create_test_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_blank_and_null_values_are_empty() {
        let (backend, store) = create_test_store();

        backend.set("coinwise_expenses", "").unwrap();
        assert!(store.load().unwrap().is_empty());

        backend.set("coinwise_expenses", "null").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_value_is_a_storage_error() {
        let (backend, store) = create_test_store();
        backend.set("coinwise_expenses", "{oops").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, CoinwiseError::Storage(_)));
    }

    #[test]
    fn test_add_prepends() {
        let (_backend, store) = create_test_store();

        let first = store.add(lunch(100)).unwrap();
        let second = store.add(lunch(200)).unwrap();

        assert_eq!(first.id.as_str(), "exp-1");
        assert_eq!(second.id.as_str(), "exp-2");

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], second);
        assert_eq!(records[1], first);
    }

    #[test]
    fn test_invalid_add_writes_nothing() {
        let (backend, store) = create_test_store();

        let err = store.add(lunch(0)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(backend.get("coinwise_expenses").unwrap(), None);
    }

    #[test]
    fn test_id_collision_is_invariant_violation() {
        let backend = Arc::new(MemoryStore::new());
        let store: RecordStore<Expense> =
            RecordStore::new(backend, Arc::new(FixedIdGenerator));

        store.add(lunch(100)).unwrap();
        let err = store.add(lunch(200)).unwrap_err();

        assert!(err.is_invariant_violation());
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_delete() {
        let (_backend, store) = create_test_store();
        let a = store.add(lunch(100)).unwrap();
        let b = store.add(lunch(200)).unwrap();

        store.delete(&a.id).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records, vec![b]);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let (_backend, store) = create_test_store();
        store.add(lunch(100)).unwrap();

        store.delete(&RecordId::new("missing")).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let (_backend, store) = create_test_store();
        let a = store.add(lunch(100)).unwrap();
        let b = store.add(lunch(200)).unwrap();

        let mut changed = a.clone();
        changed.amount = Money::from_cents(999);
        changed.description = "Dinner".into();
        store.update(changed.clone()).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records, vec![b, changed]);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let (_backend, store) = create_test_store();
        let a = store.add(lunch(100)).unwrap();

        let mut ghost = a.clone();
        ghost.id = RecordId::new("ghost");
        store.update(ghost).unwrap();

        assert_eq!(store.load().unwrap(), vec![a]);
    }

    #[test]
    fn test_invalid_update_rejected() {
        let (_backend, store) = create_test_store();
        let a = store.add(lunch(100)).unwrap();

        let mut bad = a.clone();
        bad.description = String::new();
        assert!(store.update(bad).unwrap_err().is_validation());
        assert_eq!(store.load().unwrap(), vec![a]);
    }

    #[test]
    fn test_get() {
        let (_backend, store) = create_test_store();
        let a = store.add(lunch(100)).unwrap();

        assert_eq!(store.get(&a.id).unwrap(), Some(a));
        assert_eq!(store.get(&RecordId::new("nope")).unwrap(), None);
    }

    #[test]
    fn test_mutations_are_journaled() {
        let temp_dir = TempDir::new().unwrap();
        let log = Arc::new(AuditLog::new(temp_dir.path().join("audit.log")));
        let (_backend, store) = create_test_store();
        let store = store.with_audit(log);

        let a = store.add(lunch(100)).unwrap();
        let mut changed = a.clone();
        changed.amount = Money::from_cents(150);
        store.update(changed.clone()).unwrap();
        store.delete(&a.id).unwrap();
        store.delete(&a.id).unwrap();

        let history = store.history().unwrap();
        assert_eq!(history.len(), 3);
        assert!(history.iter().all(|e| e.id == a.id));
        assert_eq!(history[0].change, Change::Added { record: a.clone() });
        assert_eq!(
            history[1].change,
            Change::Updated {
                before: a,
                after: changed.clone(),
                fields: vec!["amount".to_string()],
            }
        );
        assert_eq!(history[2].change, Change::Removed { record: changed });
    }

    #[test]
    fn test_history_without_audit_is_empty() {
        let (_backend, store) = create_test_store();
        store.add(lunch(100)).unwrap();
        assert!(store.history().unwrap().is_empty());
    }

    #[test]
    fn test_unwritable_audit_log_does_not_fail_mutations() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be opened for appending
        let log = Arc::new(AuditLog::new(temp_dir.path().to_path_buf()));
        let (_backend, store) = create_test_store();
        let store = store.with_audit(log);

        let a = store.add(lunch(100)).unwrap();
        assert_eq!(store.load().unwrap(), vec![a.clone()]);

        let mut changed = a.clone();
        changed.amount = Money::from_cents(200);
        store.update(changed.clone()).unwrap();
        assert_eq!(store.get(&a.id).unwrap(), Some(changed));

        store.delete(&a.id).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_oversized_amount_is_a_storage_error() {
        let (backend, store) = create_test_store();
        backend
            .set(
                "coinwise_expenses",
                r#"[{"id":"a","amount":9e16,"description":"x","category":"Food","date":"2024-01-01"},
                    {"id":"b","amount":9e16,"description":"y","category":"Food","date":"2024-01-02"}]"#,
            )
            .unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, CoinwiseError::Storage(_)));
    }
}
