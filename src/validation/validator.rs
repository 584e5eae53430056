// Certificate Validator - Re-derive domain-validation evidence for a certificate
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::variants::{expand, probe_url};
use super::verdict::{CertificateVerdict, CheckKind, DomainVerdict, EvidenceAttempt};
use crate::Result;
use crate::certificates::record::{CertificateRecord, ResourceRecord, ValidationMethod, ValidationOption};
use crate::certificates::serial::{HttpsSerialProber, SerialProber};
use crate::config::AuditConfig;
use crate::dns::{DnsResolver, DohResolver};
use crate::error::AuditError;
use crate::utils::http_client::HttpClients;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_EVIDENCE_TIMEOUT: Duration = Duration::from_secs(45);

/// Re-verifies the validation evidence recorded for a certificate.
///
/// Stateless: the same validator can check any number of certificates
/// concurrently.
#[derive(Clone)]
pub struct CertificateValidator {
    resolver: Arc<dyn DnsResolver>,
    prober: Arc<dyn SerialProber>,
    evidence_timeout: Duration,
}

impl CertificateValidator {
    pub fn new(resolver: Arc<dyn DnsResolver>, prober: Arc<dyn SerialProber>) -> Self {
        Self {
            resolver,
            prober,
            evidence_timeout: DEFAULT_EVIDENCE_TIMEOUT,
        }
    }

    /// Validator backed by the DoH resolver and the HTTPS prober
    pub fn from_config(clients: &HttpClients, config: &AuditConfig) -> Self {
        let resolver = DohResolver::with_endpoint(clients.dns().clone(), config.doh_endpoint.clone());
        let prober = HttpsSerialProber::new(clients.probe().clone());

        Self::new(Arc::new(resolver), Arc::new(prober)).with_evidence_timeout(config.evidence_timeout())
    }

    /// Bound every single lookup or probe
    pub fn with_evidence_timeout(mut self, timeout: Duration) -> Self {
        self.evidence_timeout = timeout;
        self
    }

    /// Validate one certificate.
    ///
    /// Network failures only fail the affected domain. A validation option
    /// without a method, or a DNS option without a resource record, fails the
    /// whole call before any network traffic is made.
    pub async fn validate(&self, record: &CertificateRecord) -> Result<CertificateVerdict> {
        check_integrity(record)?;

        let mut domains = Vec::new();

        if !record.validation_options.is_empty() {
            for option in &record.validation_options {
                domains.push(self.verify_option(record, option).await?);
            }
        } else {
            for name in &record.subject_alternative_names {
                domains.push(
                    self.verify_served_serial(name, CheckKind::SubjectAlternativeName, record.serial.as_deref())
                        .await,
                );
            }
        }

        for domain in domains.iter().filter(|d| !d.passed()) {
            warn!(
                "failed to validate {} ({}) for {}: {}",
                domain.domain,
                domain.kind,
                record.arn,
                domain.reason.as_deref().unwrap_or("unknown reason")
            );
        }

        Ok(CertificateVerdict::from_domains(
            record.arn.clone(),
            record.domain_name.clone(),
            domains,
        ))
    }

    async fn verify_option(&self, record: &CertificateRecord, option: &ValidationOption) -> Result<DomainVerdict> {
        let verdict = match &option.method {
            Some(ValidationMethod::Dns) => {
                let rr = option
                    .resource_record
                    .as_ref()
                    .ok_or_else(|| AuditError::MissingResourceRecord {
                        arn: record.arn.clone(),
                        domain: option.domain_name.clone(),
                    })?;
                self.verify_dns_record(&option.domain_name, rr).await
            }
            Some(ValidationMethod::Email) => {
                self.verify_served_serial(&option.domain_name, CheckKind::Email, record.serial.as_deref())
                    .await
            }
            Some(ValidationMethod::Unknown(method)) => {
                debug!("Skipping {} with unsupported method {}", option.domain_name, method);
                DomainVerdict::unknown_method(&option.domain_name, method.clone())
            }
            None => {
                return Err(AuditError::UnsupportedMethod {
                    arn: record.arn.clone(),
                    domain: option.domain_name.clone(),
                });
            }
        };

        Ok(verdict)
    }

    /// The published record must resolve to exactly the value the issuer expects
    async fn verify_dns_record(&self, domain: &str, rr: &ResourceRecord) -> DomainVerdict {
        let lookup = self.with_deadline(self.resolver.lookup(&rr.record_type, &rr.name)).await;

        match lookup {
            Ok(value) if value == rr.value => DomainVerdict::matched(
                domain,
                CheckKind::Dns,
                vec![EvidenceAttempt::observed(&rr.name, value)],
            ),
            Ok(value) => {
                let reason = format!(
                    "{} {} resolved to {}, expected {}",
                    rr.record_type, rr.name, value, rr.value
                );
                DomainVerdict::failed(
                    domain,
                    CheckKind::Dns,
                    reason,
                    vec![EvidenceAttempt::observed(&rr.name, value)],
                )
            }
            Err(e) => DomainVerdict::failed(
                domain,
                CheckKind::Dns,
                format!("lookup of {} {} failed: {}", rr.record_type, rr.name, e),
                vec![EvidenceAttempt::errored(&rr.name, e)],
            ),
        }
    }

    /// One of the domain's variants must serve the certificate under audit
    async fn verify_served_serial(&self, domain: &str, kind: CheckKind, expected: Option<&str>) -> DomainVerdict {
        let Some(expected) = expected else {
            return DomainVerdict::failed(domain, kind, "issuer recorded no serial number", Vec::new());
        };

        let mut attempts = Vec::new();

        for variant in expand(domain) {
            let url = probe_url(&variant);

            match self.with_deadline(self.prober.probe_serial(&url)).await {
                Ok(serial) if serial == expected => {
                    attempts.push(EvidenceAttempt::observed(url, serial));
                    return DomainVerdict::matched(domain, kind, attempts);
                }
                Ok(serial) => {
                    debug!("{} serves {}, expected {}", url, serial, expected);
                    attempts.push(EvidenceAttempt::observed(url, serial));
                }
                Err(e) => {
                    debug!("Probe of {} failed: {}", url, e);
                    attempts.push(EvidenceAttempt::errored(url, e));
                }
            }
        }

        let reason = format!(
            "no variant serves serial {} ({})",
            expected,
            attempts
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join("; ")
        );

        DomainVerdict::failed(domain, kind, reason, attempts)
    }

    async fn with_deadline<F, T>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.evidence_timeout, fut)
            .await
            .map_err(|_| AuditError::Timeout {
                duration: self.evidence_timeout,
            })?
    }
}

/// Reject records whose validation options cannot be interpreted
fn check_integrity(record: &CertificateRecord) -> Result<()> {
    for option in &record.validation_options {
        match &option.method {
            None => {
                return Err(AuditError::UnsupportedMethod {
                    arn: record.arn.clone(),
                    domain: option.domain_name.clone(),
                });
            }
            Some(ValidationMethod::Dns) if option.resource_record.is_none() => {
                return Err(AuditError::MissingResourceRecord {
                    arn: record.arn.clone(),
                    domain: option.domain_name.clone(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Unreachable;

    #[async_trait]
    impl DnsResolver for Unreachable {
        async fn lookup(&self, _record_type: &str, name: &str) -> Result<String> {
            panic!("unexpected lookup of {}", name);
        }
    }

    #[async_trait]
    impl SerialProber for Unreachable {
        async fn probe_serial(&self, url: &str) -> Result<String> {
            panic!("unexpected request to {}", url);
        }
    }

    fn offline_validator() -> CertificateValidator {
        CertificateValidator::new(Arc::new(Unreachable), Arc::new(Unreachable))
    }

    #[tokio::test]
    async fn test_option_without_record_is_an_error_not_a_verdict() {
        let mut option = ValidationOption::dns("example.com", "CNAME", "_a.example.com.", "_b.aws.");
        option.resource_record = None;
        let record = CertificateRecord::new("arn:1", "example.com");

        let result = offline_validator().verify_option(&record, &option).await;
        assert!(matches!(result, Err(AuditError::MissingResourceRecord { .. })));
    }

    #[tokio::test]
    async fn test_option_without_method_is_an_error_not_a_verdict() {
        let mut option = ValidationOption::email("example.com");
        option.method = None;
        let record = CertificateRecord::new("arn:1", "example.com");

        let result = offline_validator().verify_option(&record, &option).await;
        assert!(matches!(result, Err(AuditError::UnsupportedMethod { .. })));
    }

    #[test]
    fn test_integrity_rejects_missing_method() {
        let mut option = ValidationOption::email("example.com");
        option.method = None;
        let record = CertificateRecord::new("arn:1", "example.com").with_option(option);

        assert!(matches!(
            check_integrity(&record),
            Err(AuditError::UnsupportedMethod { .. })
        ));
    }

    #[test]
    fn test_integrity_rejects_dns_without_record() {
        let mut option = ValidationOption::dns("example.com", "CNAME", "_a.example.com.", "_b.aws.");
        option.resource_record = None;
        let record = CertificateRecord::new("arn:1", "example.com").with_option(option);

        assert!(matches!(
            check_integrity(&record),
            Err(AuditError::MissingResourceRecord { .. })
        ));
    }

    #[test]
    fn test_integrity_accepts_unknown_method() {
        let option = ValidationOption {
            domain_name: "example.com".to_string(),
            method: Some(ValidationMethod::Unknown("HTTP".to_string())),
            resource_record: None,
        };
        let record = CertificateRecord::new("arn:1", "example.com").with_option(option);

        assert!(check_integrity(&record).is_ok());
    }
}
