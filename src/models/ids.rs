//! Transaction identifiers
//!
//! Ids have the shape `<unix-millis>_<suffix>` where the suffix is nine
//! base-36 characters drawn from a random UUID. They are unique for a single
//! session with overwhelming probability; `LedgerStore` additionally rejects
//! collisions within its own lifetime.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Opaque unique identifier of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a fresh id from the current time and a random suffix
    pub fn generate() -> Self {
        Self::from_parts(Utc::now().timestamp_millis(), Uuid::new_v4())
    }

    /// Build an id from a timestamp and the randomness of a UUID
    pub fn from_parts(millis: i64, entropy: Uuid) -> Self {
        let mut value = entropy.as_u128();
        let mut suffix = String::with_capacity(SUFFIX_LEN);
        for _ in 0..SUFFIX_LEN {
            suffix.push(BASE36[(value % 36) as usize] as char);
            value /= 36;
        }
        Self(format!("{}_{}", millis, suffix))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Milliseconds timestamp embedded in the id, if it has the generated shape
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.0.split_once('_').and_then(|(ms, _)| ms.parse().ok())
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
