// Audit Report - Outcome of one audit run across regions
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::validation::{CertificateVerdict, VerdictStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Step at which a certificate could not be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditStage {
    Describe,
    Validate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuditOutcome {
    Verdict(CertificateVerdict),
    Error { stage: AuditStage, message: String },
}

/// One certificate in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub region: String,
    pub arn: String,
    pub domain_name: String,
    pub outcome: AuditOutcome,
}

impl AuditEntry {
    pub fn verdict(&self) -> Option<&CertificateVerdict> {
        match &self.outcome {
            AuditOutcome::Verdict(verdict) => Some(verdict),
            AuditOutcome::Error { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub inconclusive: usize,
    pub errored: usize,
}

impl AuditSummary {
    pub fn from_entries(entries: &[AuditEntry]) -> Self {
        let mut summary = AuditSummary {
            total: entries.len(),
            ..Default::default()
        };

        for entry in entries {
            match &entry.outcome {
                AuditOutcome::Verdict(v) => match v.status {
                    VerdictStatus::Passed => summary.passed += 1,
                    VerdictStatus::Failed => summary.failed += 1,
                    VerdictStatus::Inconclusive => summary.inconclusive += 1,
                },
                AuditOutcome::Error { .. } => summary.errored += 1,
            }
        }

        summary
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub regions: Vec<String>,
    pub entries: Vec<AuditEntry>,
    pub summary: AuditSummary,
}

impl AuditReport {
    pub fn new(started_at: DateTime<Utc>, regions: Vec<String>, entries: Vec<AuditEntry>) -> Self {
        let summary = AuditSummary::from_entries(&entries);
        Self {
            started_at,
            finished_at: Utc::now(),
            regions,
            entries,
            summary,
        }
    }

    /// True when any certificate failed or could not be audited
    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0 || self.summary.errored > 0
    }

    pub fn duration_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{CheckKind, DomainVerdict};

    fn entry(arn: &str, outcome: AuditOutcome) -> AuditEntry {
        AuditEntry {
            region: "us-east-1".to_string(),
            arn: arn.to_string(),
            domain_name: "example.com".to_string(),
            outcome,
        }
    }

    #[test]
    fn test_summary_counts() {
        let passed = CertificateVerdict::from_domains(
            "arn:1",
            "example.com",
            vec![DomainVerdict::matched("example.com", CheckKind::Email, Vec::new())],
        );
        let failed = CertificateVerdict::from_domains(
            "arn:2",
            "example.com",
            vec![DomainVerdict::failed("example.com", CheckKind::Dns, "mismatch", Vec::new())],
        );
        let empty = CertificateVerdict::from_domains("arn:3", "example.com", Vec::new());

        let entries = vec![
            entry("arn:1", AuditOutcome::Verdict(passed)),
            entry("arn:2", AuditOutcome::Verdict(failed)),
            entry("arn:3", AuditOutcome::Verdict(empty)),
            entry(
                "arn:4",
                AuditOutcome::Error {
                    stage: AuditStage::Describe,
                    message: "not found".to_string(),
                },
            ),
        ];

        let report = AuditReport::new(Utc::now(), vec!["us-east-1".to_string()], entries);
        assert_eq!(
            report.summary,
            AuditSummary {
                total: 4,
                passed: 1,
                failed: 1,
                inconclusive: 1,
                errored: 1,
            }
        );
        assert!(report.has_failures());
        assert!(report.entries[3].verdict().is_none());
    }

    #[test]
    fn test_empty_report_has_no_failures() {
        let report = AuditReport::new(Utc::now(), Vec::new(), Vec::new());
        assert!(!report.has_failures());
        assert!(report.duration_ms() >= 0);
    }
}
