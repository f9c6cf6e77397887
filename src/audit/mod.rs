//! Change journal for the record collections
//!
//! Every successful add, update and delete on a record store can be appended
//! to a JSONL file, one line per change, carrying the typed records involved.

mod entry;
mod journal;

pub use entry::{AuditEntry, Change};
pub use journal::AuditLog;
