// Validation module - Domain-validation re-verification
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

pub mod validator;
pub mod variants;
pub mod verdict;

pub use validator::CertificateValidator;
pub use variants::expand;
pub use verdict::{CertificateVerdict, CheckKind, DomainOutcome, DomainVerdict, EvidenceAttempt, VerdictStatus};
