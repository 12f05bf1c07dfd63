//! Audit entry data structures
//!
//! Every call into a ledger action produces one entry, including the inert
//! remove/update actions, which are recorded with `applied = false`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ledger actions that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// A transaction was appended
    Create,
    /// `update_item` was called
    Update,
    /// `remove_item` was called
    Delete,
    /// The current-month pointer moved
    SetMonth,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::SetMonth => write!(f, "SET_MONTH"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the action was called (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Transaction id, or the month number for `SetMonth`
    pub target: String,

    /// Transaction kind label, if the action names one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Whether the action changed ledger state
    pub applied: bool,

    /// JSON representation of the created transaction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Entry for an appended transaction
    pub fn create<T: Serialize>(target: impl Into<String>, kind: &str, entity: &T) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            target: target.into(),
            kind: Some(kind.to_string()),
            applied: true,
            after: serde_json::to_value(entity).ok(),
        }
    }

    /// Entry for a remove/update call that had no effect
    pub fn ignored(operation: Operation, target: impl Into<String>, kind: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            target: target.into(),
            kind: Some(kind.to_string()),
            applied: false,
            after: None,
        }
    }

    /// Entry for a move of the current-month pointer
    pub fn set_month(month: u32) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::SetMonth,
            target: month.to_string(),
            kind: None,
            applied: true,
            after: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.target
        );

        if let Some(kind) = &self.kind {
            output.push_str(&format!(" ({})", kind));
        }
        if !self.applied {
            output.push_str(" [no effect]");
        }

        output
    }
}
