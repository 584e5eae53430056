// Audit module - Walk an inventory and validate every certificate
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

pub mod report;

pub use report::{AuditEntry, AuditOutcome, AuditReport, AuditStage, AuditSummary};

use crate::certificates::record::CertificateSummary;
use crate::inventory::CertificateInventory;
use crate::validation::{CertificateValidator, VerdictStatus};
use chrono::Utc;
use futures::stream::StreamExt;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Drives validation over every certificate of every region.
///
/// Certificates are validated concurrently (bounded by `max_concurrent`);
/// regions are walked one after the other.
pub struct Auditor {
    inventory: Arc<dyn CertificateInventory>,
    validator: CertificateValidator,
    max_concurrent: usize,
}

impl Auditor {
    pub fn new(inventory: Arc<dyn CertificateInventory>, validator: CertificateValidator) -> Self {
        Self {
            inventory,
            validator,
            max_concurrent: 8,
        }
    }

    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    /// Audit every region in order and build the report
    pub async fn run(&self, regions: &[String]) -> AuditReport {
        let started_at = Utc::now();
        let mut entries = Vec::new();

        for region in regions {
            entries.extend(self.audit_region(region).await);
        }

        AuditReport::new(started_at, regions.to_vec(), entries)
    }

    /// Audit one region; a listing failure is logged and ends the region
    pub async fn audit_region(&self, region: &str) -> Vec<AuditEntry> {
        self.inventory
            .list_certificates(region)
            .take_while(|item| {
                let keep = match item {
                    Ok(_) => true,
                    Err(e) => {
                        error!("failed to list certificates in {}: {}", region, e);
                        false
                    }
                };
                futures::future::ready(keep)
            })
            .filter_map(|item| futures::future::ready(item.ok()))
            .map(|summary| self.audit_certificate(region, summary))
            .buffered(self.max_concurrent)
            .collect()
            .await
    }

    /// Describe and validate a single certificate
    pub async fn audit_certificate(&self, region: &str, summary: CertificateSummary) -> AuditEntry {
        let outcome = match self.inventory.describe_certificate(region, &summary.arn).await {
            Err(e) => {
                error!("failed to describe certificate {}: {}", summary.arn, e);
                AuditOutcome::Error {
                    stage: AuditStage::Describe,
                    message: e.to_string(),
                }
            }
            Ok(record) => match self.validator.validate(&record).await {
                Ok(verdict) => {
                    match verdict.status {
                        VerdictStatus::Passed => {
                            info!("validated {}({})", summary.domain_name, summary.arn)
                        }
                        VerdictStatus::Failed => {
                            warn!("failed to validate {}({})", summary.domain_name, summary.arn)
                        }
                        VerdictStatus::Inconclusive => warn!(
                            "no verifiable evidence for {}({})",
                            summary.domain_name, summary.arn
                        ),
                    }
                    AuditOutcome::Verdict(verdict)
                }
                Err(e) => {
                    error!("failed to validate certificate {}: {}", summary.arn, e);
                    AuditOutcome::Error {
                        stage: AuditStage::Validate,
                        message: e.to_string(),
                    }
                }
            },
        };

        AuditEntry {
            region: region.to_string(),
            arn: summary.arn,
            domain_name: summary.domain_name,
            outcome,
        }
    }
}
