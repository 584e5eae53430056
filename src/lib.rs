// dvaudit - Re-verify domain-validation evidence of issued certificates
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! dvaudit walks a certificate inventory and, for every certificate,
//! re-checks that the evidence used to validate its domains still holds:
//! DNS validation records are still published, and email-validated or
//! SAN-only domains still serve the issued certificate over HTTPS.

pub mod audit;
pub mod certificates;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dns;
pub mod error;
pub mod inventory;
pub mod output;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use crate::audit::{AuditReport, Auditor};
pub use crate::cli::Args;
pub use crate::config::AuditConfig;
pub use crate::error::AuditError;
pub use crate::output::OutputFormat;
pub use crate::validation::CertificateValidator;

/// Result type for dvaudit library operations
pub type Result<T> = std::result::Result<T, AuditError>;
