// Inventory module - Certificate inventory providers
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

pub mod snapshot;

pub use snapshot::SnapshotInventory;

use crate::Result;
use crate::certificates::record::{CertificateRecord, CertificateSummary};
use async_trait::async_trait;
use futures::stream::BoxStream;

/// Source of issued certificates, queried per region.
///
/// Listing is pull based: the stream is lazy, finite, and a new call
/// restarts the listing for that region.
#[async_trait]
pub trait CertificateInventory: Send + Sync {
    /// Stream every certificate summary in `region`
    fn list_certificates<'a>(&'a self, region: &'a str) -> BoxStream<'a, Result<CertificateSummary>>;

    /// Full issuer-recorded metadata for one certificate
    ///
    /// # Errors
    /// `AuditError::NotFound` if the certificate is unknown in `region`
    async fn describe_certificate(&self, region: &str, arn: &str) -> Result<CertificateRecord>;
}
