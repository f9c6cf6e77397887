//! Storage layer for Coinwise
//!
//! The persistence collaborator is a plain key/string-value store. On top of
//! it, one [`RecordStore`] per collection provides load/add/delete/update.
//! [`Storage`] bundles the expense and budget stores so a caller can own
//! them explicitly instead of reaching for module-level state.

pub mod budgets;
pub mod expenses;
pub mod file_io;
pub mod kv;
pub mod records;

pub use budgets::{BudgetStore, BUDGETS_KEY};
pub use expenses::{ExpenseStore, EXPENSES_KEY};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use records::{Record, RecordStore};

use std::sync::Arc;

use tracing::info;

use crate::audit::AuditLog;
use crate::config::{CoinwisePaths, Settings};
use crate::error::CoinwiseError;
use crate::models::{IdGenerator, RandomIdGenerator};

/// Owner of the expense and budget collections
pub struct Storage {
    pub expenses: ExpenseStore,
    pub budgets: BudgetStore,
    audit: Option<Arc<AuditLog>>,
}

impl Storage {
    /// Open file-backed storage under the configured data directory
    ///
    /// Mutations are audited when `settings.audit_enabled` is set.
    pub fn open(paths: &CoinwisePaths, settings: &Settings) -> Result<Self, CoinwiseError> {
        paths.ensure_directories()?;

        let backend = Arc::new(FileStore::new(paths.data_dir()));
        let mut storage = Self::with_backend(backend, Arc::new(RandomIdGenerator));

        if settings.audit_enabled {
            storage = storage.with_audit(Arc::new(AuditLog::new(paths.audit_log())));
        }

        info!(dir = %paths.data_dir().display(), "opened storage");
        Ok(storage)
    }

    /// Ephemeral storage with random ids and no audit log
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryStore::new()), Arc::new(RandomIdGenerator))
    }

    /// Storage over any backend and id generator
    pub fn with_backend(backend: Arc<dyn KeyValueStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            expenses: ExpenseStore::new(backend.clone(), ids.clone()),
            budgets: BudgetStore::new(backend, ids),
            audit: None,
        }
    }

    /// Journal every mutation of both collections in `log`
    pub fn with_audit(self, log: Arc<AuditLog>) -> Self {
        Self {
            expenses: self.expenses.with_audit(log.clone()),
            budgets: self.budgets.with_audit(log.clone()),
            audit: Some(log),
        }
    }

    /// The audit log, if auditing is enabled
    pub fn audit_log(&self) -> Option<&AuditLog> {
        self.audit.as_deref()
    }
}
