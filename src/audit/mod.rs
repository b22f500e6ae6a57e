//! Audit trail for ledger edits
//!
//! Every create, update and delete on a person or transaction is appended
//! to `audit.log` as one JSON line with before/after snapshots. Balances
//! themselves are never written to disk; the audit log is only a trail.
//!
//! ```rust,ignore
//! let logger = AuditLogger::new(paths.audit_log());
//! let diff = generate_diff(&before_json, &after_json);
//! logger.log(&AuditEntry::update(
//!     EntityType::Transaction,
//!     txn.id().to_string(),
//!     Some(txn.title.clone()),
//!     &before,
//!     &after,
//!     diff,
//! ))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
