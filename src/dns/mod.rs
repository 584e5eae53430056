// DNS module - Independent lookups of validation records
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

pub mod doh;

pub use doh::DohResolver;

use crate::Result;
use async_trait::async_trait;

/// Resolves a single DNS record and returns the data of the first answer
#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Look up `name` for `record_type` (e.g. "CNAME", "TXT")
    ///
    /// # Errors
    /// - `AuditError::Transport` if the query cannot complete
    /// - `AuditError::MalformedResponse` if the answer cannot be parsed or is empty
    async fn lookup(&self, record_type: &str, name: &str) -> Result<String>;
}
