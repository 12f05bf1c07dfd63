//! Configuration module for pocket-ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings (amount policy, view scope)

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{AmountPolicy, Settings, ViewScope};
