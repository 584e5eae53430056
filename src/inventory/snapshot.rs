// Snapshot Inventory - Certificates loaded from an ACM-shaped JSON export
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::CertificateInventory;
use crate::Result;
use crate::certificates::record::{
    CertificateRecord, CertificateSummary, ResourceRecord, ValidationMethod, ValidationOption,
};
use crate::error::AuditError;
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Snapshot file layout:
///
/// ```json
/// {
///   "regions": {
///     "us-east-1": [
///       { "CertificateArn": "...", "DomainName": "example.com", "Serial": "aa:bb",
///         "DomainValidationOptions": [{ "DomainName": "example.com", "ValidationMethod": "EMAIL" }] },
///       { "Certificate": { "CertificateArn": "...", "DomainName": "example.org" } }
///     ]
///   }
/// }
/// ```
///
/// Entries are either a bare `Certificate` object or the full
/// `describe-certificate` output wrapping one.
#[derive(Debug, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    regions: BTreeMap<String, Vec<SnapshotEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotEntry {
    Described {
        #[serde(rename = "Certificate")]
        certificate: AcmCertificate,
    },
    Bare(AcmCertificate),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AcmCertificate {
    certificate_arn: String,
    domain_name: String,
    #[serde(default)]
    subject_alternative_names: Option<Vec<String>>,
    #[serde(default)]
    serial: Option<String>,
    #[serde(default)]
    domain_validation_options: Option<Vec<AcmValidationOption>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AcmValidationOption {
    domain_name: String,
    #[serde(default)]
    validation_method: Option<String>,
    #[serde(default)]
    resource_record: Option<AcmResourceRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AcmResourceRecord {
    name: String,
    #[serde(rename = "Type")]
    record_type: String,
    value: String,
}

impl From<AcmCertificate> for CertificateRecord {
    fn from(cert: AcmCertificate) -> Self {
        let validation_options = cert
            .domain_validation_options
            .unwrap_or_default()
            .into_iter()
            .map(|opt| ValidationOption {
                domain_name: opt.domain_name,
                method: opt.validation_method.as_deref().map(ValidationMethod::parse),
                resource_record: opt.resource_record.map(|rr| ResourceRecord {
                    record_type: rr.record_type,
                    name: rr.name,
                    value: rr.value,
                }),
            })
            .collect();

        CertificateRecord {
            arn: cert.certificate_arn,
            domain_name: cert.domain_name,
            subject_alternative_names: cert.subject_alternative_names.unwrap_or_default(),
            serial: cert.serial,
            validation_options,
        }
    }
}

impl SnapshotEntry {
    fn into_record(self) -> CertificateRecord {
        match self {
            SnapshotEntry::Described { certificate } => certificate.into(),
            SnapshotEntry::Bare(certificate) => certificate.into(),
        }
    }
}

/// In-memory inventory, paginated like the remote API it stands in for
#[derive(Debug, Clone)]
pub struct SnapshotInventory {
    regions: BTreeMap<String, Vec<CertificateRecord>>,
    page_size: usize,
}

impl SnapshotInventory {
    pub fn new() -> Self {
        Self {
            regions: BTreeMap::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Add records to a region, keeping insertion order
    pub fn with_records(mut self, region: impl Into<String>, records: Vec<CertificateRecord>) -> Self {
        self.regions.entry(region.into()).or_default().extend(records);
        self
    }

    /// Load a snapshot from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| AuditError::FileSystem {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let snapshot: SnapshotFile = serde_json::from_str(contents).map_err(|e| AuditError::Inventory {
            message: format!("Failed to parse inventory snapshot: {}", e),
        })?;

        let regions = snapshot
            .regions
            .into_iter()
            .map(|(region, entries)| {
                let records = entries.into_iter().map(SnapshotEntry::into_record).collect();
                (region, records)
            })
            .collect();

        Ok(Self {
            regions,
            page_size: DEFAULT_PAGE_SIZE,
        })
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }

    /// Number of certificates across all regions
    pub fn len(&self) -> usize {
        self.regions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SnapshotInventory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CertificateInventory for SnapshotInventory {
    fn list_certificates<'a>(&'a self, region: &'a str) -> BoxStream<'a, Result<CertificateSummary>> {
        let records: &'a [CertificateRecord] = self
            .regions
            .get(region)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        let page_size = self.page_size.max(1);

        stream::unfold(0usize, move |offset| async move {
            if offset >= records.len() {
                return None;
            }

            let end = (offset + page_size).min(records.len());
            debug!("Listing {} certificates {}..{}", region, offset, end);

            let page: Vec<Result<CertificateSummary>> =
                records[offset..end].iter().map(|r| Ok(r.summary())).collect();
            Some((stream::iter(page), end))
        })
        .flatten()
        .boxed()
    }

    async fn describe_certificate(&self, region: &str, arn: &str) -> Result<CertificateRecord> {
        self.regions
            .get(region)
            .and_then(|records| records.iter().find(|r| r.arn == arn))
            .cloned()
            .ok_or_else(|| AuditError::NotFound { arn: arn.to_string() })
    }
}
