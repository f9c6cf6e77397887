//! Coinwise - personal expense tracking and budget progress
//!
//! This library records expenses and recurring spending limits (budgets)
//! and derives the numbers a dashboard needs: totals per category, totals
//! per date range, and how much of each budget's current window is used.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, budgets)
//! - `storage`: Key/value persistence and the record stores
//! - `audit`: Audit logging of record mutations
//! - `services`: Aggregation, budget windows and progress
//! - `reports`: Budget overview, category chart and dashboard summary
//!
//! # Example
//!
//! ```rust,ignore
//! use coinwise::config::{CoinwisePaths, Settings};
//! use coinwise::storage::Storage;
//! use coinwise::services::progress;
//!
//! let paths = CoinwisePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths, &settings)?;
//!
//! let expenses = storage.expenses.load()?;
//! for budget in storage.budgets.load()? {
//!     let pct = progress(&budget, &expenses, chrono::Local::now().naive_local())?;
//!     println!("{budget}: {pct:.0}%");
//! }
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{CoinwiseError, CoinwiseResult};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a global `tracing` subscriber.
///
/// Hosts call this once at startup, before [`storage::Storage::open`], to see
/// the crate's diagnostics. `RUST_LOG` is honored; without it only
/// `coinwise=info` is shown. Safe to call more than once, and a no-op if the
/// host already installed a subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("coinwise=info"));

        let _ = fmt().with_env_filter(filter).try_init();
    });
}
