// Verdicts - Per-domain and per-certificate validation outcomes
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a domain was checked and which evidence path applies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckKind {
    /// DNS validation option: resolve the challenge record
    Dns,
    /// Email validation option: compare the served serial
    Email,
    /// No validation options recorded: SAN checked like an email option
    SubjectAlternativeName,
    /// Validation method this version cannot re-verify
    Unknown(String),
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKind::Dns => write!(f, "DNS"),
            CheckKind::Email => write!(f, "EMAIL"),
            CheckKind::SubjectAlternativeName => write!(f, "SAN"),
            CheckKind::Unknown(method) => write!(f, "{}", method),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainOutcome {
    /// At least one evidence path matched
    Matched,
    /// No evidence path matched
    Failed,
    /// Method not re-verifiable; excluded from the aggregate
    UnknownMethod,
}

/// One lookup or probe performed while checking a domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceAttempt {
    /// Record name or probed URL
    pub target: String,
    /// Value observed (record data or served serial)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EvidenceAttempt {
    pub fn observed(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            observed: Some(value.into()),
            error: None,
        }
    }

    pub fn errored(target: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            target: target.into(),
            observed: None,
            error: Some(error.to_string()),
        }
    }
}

impl fmt::Display for EvidenceAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.observed, &self.error) {
            (_, Some(error)) => write!(f, "{}: {}", self.target, error),
            (Some(value), None) => write!(f, "{}: observed {}", self.target, value),
            (None, None) => write!(f, "{}: no data", self.target),
        }
    }
}

/// Verdict for a single validated domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainVerdict {
    pub domain: String,
    pub kind: CheckKind,
    pub outcome: DomainOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Attempts in the order they were made; the last one matched on success
    #[serde(default)]
    pub attempts: Vec<EvidenceAttempt>,
}

impl DomainVerdict {
    pub fn matched(domain: impl Into<String>, kind: CheckKind, attempts: Vec<EvidenceAttempt>) -> Self {
        Self {
            domain: domain.into(),
            kind,
            outcome: DomainOutcome::Matched,
            reason: None,
            attempts,
        }
    }

    pub fn failed(
        domain: impl Into<String>,
        kind: CheckKind,
        reason: impl Into<String>,
        attempts: Vec<EvidenceAttempt>,
    ) -> Self {
        Self {
            domain: domain.into(),
            kind,
            outcome: DomainOutcome::Failed,
            reason: Some(reason.into()),
            attempts,
        }
    }

    pub fn unknown_method(domain: impl Into<String>, method: impl Into<String>) -> Self {
        let method = method.into();
        Self {
            domain: domain.into(),
            reason: Some(format!("validation method {} cannot be re-verified", method)),
            kind: CheckKind::Unknown(method),
            outcome: DomainOutcome::UnknownMethod,
            attempts: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.outcome == DomainOutcome::Matched
    }

    /// Whether this verdict takes part in the certificate-level conjunction
    pub fn is_counted(&self) -> bool {
        self.outcome != DomainOutcome::UnknownMethod
    }

    /// The attempt that produced the match, if any
    pub fn matched_evidence(&self) -> Option<&EvidenceAttempt> {
        if self.passed() {
            self.attempts.last()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictStatus {
    /// Every counted domain matched and nothing was skipped
    Passed,
    /// At least one counted domain failed
    Failed,
    /// No domain was counted, or an unknown method was skipped
    Inconclusive,
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerdictStatus::Passed => write!(f, "passed"),
            VerdictStatus::Failed => write!(f, "failed"),
            VerdictStatus::Inconclusive => write!(f, "inconclusive"),
        }
    }
}

/// Aggregate verdict for one certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateVerdict {
    pub arn: String,
    pub domain_name: String,
    /// Conjunction of all counted domain verdicts (true when none were counted)
    pub passed: bool,
    pub status: VerdictStatus,
    pub domains: Vec<DomainVerdict>,
}

impl CertificateVerdict {
    pub fn from_domains(
        arn: impl Into<String>,
        domain_name: impl Into<String>,
        domains: Vec<DomainVerdict>,
    ) -> Self {
        let counted = domains.iter().filter(|d| d.is_counted()).count();
        let passed = domains.iter().filter(|d| d.is_counted()).all(|d| d.passed());
        let skipped = domains.len() - counted;

        let status = if !passed {
            VerdictStatus::Failed
        } else if counted == 0 || skipped > 0 {
            VerdictStatus::Inconclusive
        } else {
            VerdictStatus::Passed
        };

        Self {
            arn: arn.into(),
            domain_name: domain_name.into(),
            passed,
            status,
            domains,
        }
    }

    pub fn failed_domains(&self) -> impl Iterator<Item = &DomainVerdict> {
        self.domains
            .iter()
            .filter(|d| d.outcome == DomainOutcome::Failed)
    }
}
