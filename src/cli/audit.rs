//! Audit log CLI command

use crate::audit::AuditLogger;
use crate::config::DebtPaths;
use crate::error::DebtResult;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(paths: &DebtPaths, limit: usize) -> DebtResult<()> {
    let logger = AuditLogger::new(paths.audit_log());
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
