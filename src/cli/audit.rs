//! CLI command for reading the audit log back

use std::path::Path;

use crate::audit::AuditLogger;
use crate::error::LedgerResult;

/// Render the audit log, oldest first, optionally only the last `limit` entries
pub fn format_audit_log(log_path: &Path, limit: Option<usize>) -> LedgerResult<String> {
    let logger = AuditLogger::new(log_path.to_path_buf());
    let entries = match limit {
        Some(count) => logger.read_recent(count)?,
        None => logger.read_all()?,
    };

    if entries.is_empty() {
        return Ok(format!("No audit entries in {}\n", logger.path().display()));
    }

    let mut output = String::new();
    for entry in &entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    Ok(output)
}

/// Print the audit log
pub fn handle_audit_command(log_path: &Path, limit: Option<usize>) -> LedgerResult<()> {
    print!("{}", format_audit_log(log_path, limit)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditEntry, Operation};
    use tempfile::TempDir;

    #[test]
    fn test_missing_log() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("audit.log");

        let text = format_audit_log(&path, None).unwrap();
        assert!(text.starts_with("No audit entries"));
    }

    #[test]
    fn test_formats_entries_with_limit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("audit.log");
        let logger = AuditLogger::new(path.clone());
        logger
            .log_batch(&[
                AuditEntry::set_month(3),
                AuditEntry::ignored(Operation::Delete, "1_abc", "expense"),
            ])
            .unwrap();

        let all = format_audit_log(&path, None).unwrap();
        assert_eq!(all.lines().count(), 2);
        assert!(all.lines().next().unwrap().contains("SET_MONTH 3"));

        let last = format_audit_log(&path, Some(1)).unwrap();
        assert_eq!(last.lines().count(), 1);
        assert!(last.contains("DELETE 1_abc (expense) [no effect]"));
    }
}
