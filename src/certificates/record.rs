// Certificate Record - Issuer-recorded metadata for one certificate
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimal listing entry produced by an inventory while paginating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateSummary {
    pub arn: String,
    pub domain_name: String,
}

/// Issuer-recorded metadata for a single certificate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateRecord {
    /// Opaque certificate identifier (ARN for ACM)
    pub arn: String,
    /// Primary domain name
    pub domain_name: String,
    #[serde(default)]
    pub subject_alternative_names: Vec<String>,
    /// Serial number as recorded by the issuer (colon-separated hex)
    #[serde(default)]
    pub serial: Option<String>,
    #[serde(default)]
    pub validation_options: Vec<ValidationOption>,
}

impl CertificateRecord {
    pub fn new(arn: impl Into<String>, domain_name: impl Into<String>) -> Self {
        Self {
            arn: arn.into(),
            domain_name: domain_name.into(),
            subject_alternative_names: Vec::new(),
            serial: None,
            validation_options: Vec::new(),
        }
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial = Some(serial.into());
        self
    }

    pub fn with_sans<I, S>(mut self, sans: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subject_alternative_names = sans.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_option(mut self, option: ValidationOption) -> Self {
        self.validation_options.push(option);
        self
    }

    pub fn summary(&self) -> CertificateSummary {
        CertificateSummary {
            arn: self.arn.clone(),
            domain_name: self.domain_name.clone(),
        }
    }
}

/// How the issuer validated control of a domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMethod {
    Dns,
    Email,
    /// Method string this version does not know how to re-verify
    Unknown(String),
}

impl ValidationMethod {
    pub fn parse(method: &str) -> Self {
        match method {
            "DNS" => ValidationMethod::Dns,
            "EMAIL" => ValidationMethod::Email,
            other => ValidationMethod::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for ValidationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMethod::Dns => write!(f, "DNS"),
            ValidationMethod::Email => write!(f, "EMAIL"),
            ValidationMethod::Unknown(m) => write!(f, "{}", m),
        }
    }
}

/// DNS record the issuer asked the domain owner to publish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub record_type: String,
    pub name: String,
    pub value: String,
}

/// One domain the issuer validated, and how
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOption {
    pub domain_name: String,
    /// `None` when the issuer omitted the method field
    pub method: Option<ValidationMethod>,
    #[serde(default)]
    pub resource_record: Option<ResourceRecord>,
}

impl ValidationOption {
    pub fn dns(
        domain_name: impl Into<String>,
        record_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            domain_name: domain_name.into(),
            method: Some(ValidationMethod::Dns),
            resource_record: Some(ResourceRecord {
                record_type: record_type.into(),
                name: name.into(),
                value: value.into(),
            }),
        }
    }

    pub fn email(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            method: Some(ValidationMethod::Email),
            resource_record: None,
        }
    }
}
