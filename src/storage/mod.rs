//! Storage layer for Debt Machine
//!
//! People and transactions are held in memory for the life of the process.
//! The only files touched are the settings file, written atomically through
//! [`file_io`], and the append-only audit log.

pub mod file_io;
pub mod people;

pub use file_io::{json_file_valid, read_json, write_json_atomic};
pub use people::PersonRepository;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::DebtPaths;
use crate::error::DebtError;

/// Storage coordinator: the person repository plus the audit trail
pub struct Storage {
    paths: DebtPaths,
    pub people: PersonRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating the base directory if needed
    pub fn new(paths: DebtPaths) -> Result<Self, DebtError> {
        paths.ensure_directories()?;

        Ok(Self {
            people: PersonRepository::new(),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &DebtPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Log a create operation
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), DebtError> {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }

    /// Log an update operation with a generated diff
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), DebtError> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        let entry = AuditEntry::update(entity_type, entity_id, entity_name, before, after, diff);
        self.audit.log(&entry)
    }

    /// Log a delete operation
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), DebtError> {
        let entry = AuditEntry::delete(entity_type, entity_id, entity_name, entity);
        self.audit.log(&entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::Person;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("debt");
        let storage = Storage::new(DebtPaths::with_base_dir(base.clone())).unwrap();

        assert!(base.exists());
        assert_eq!(storage.people.count().unwrap(), 0);
        assert!(!storage.paths().is_initialized());
    }

    #[test]
    fn test_audit_helpers_write_entries() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(DebtPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();

        let before = Person::new("Al");
        let mut after = before.clone();
        after.rename("Alice");

        storage
            .log_create(EntityType::Person, before.id().to_string(), Some(before.name.clone()), &before)
            .unwrap();
        storage
            .log_update(EntityType::Person, after.id().to_string(), Some(after.name.clone()), &before, &after)
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Update);
        assert!(entries[1]
            .diff_summary
            .as_deref()
            .unwrap()
            .contains("name: \"Al\" -> \"Alice\""));
    }
}
