// Error types for dvaudit
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0
//
// Evidence-gathering errors (transport, malformed DNS answers, missing TLS
// state) are downgraded to failed domain verdicts by the validator. Data
// integrity errors (missing validation method, DNS option without a resource
// record) abort the validation of the whole certificate.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Main error type for dvaudit operations
#[derive(Debug, Error)]
pub enum AuditError {
    /// Network request could not complete (connect, TLS, HTTP status, cancellation)
    #[error("Transport error for {target}: {details}")]
    Transport { target: String, details: String },

    /// DNS-over-HTTPS response did not match the expected JSON schema
    #[error("Malformed DNS response for {name}: {details}")]
    MalformedResponse { name: String, details: String },

    /// The response was not carried over TLS
    #[error("No TLS state for {url}")]
    NoTlsState { url: String },

    /// The peer presented no certificate
    #[error("No certificate presented by {url}")]
    NoCertificate { url: String },

    /// Peer certificate could not be decoded
    #[error("Certificate parsing error: {details}")]
    CertificateParse { details: String },

    /// Validation option carries no validation method
    #[error("Validation method is missing for {domain} ({arn})")]
    UnsupportedMethod { arn: String, domain: String },

    /// DNS validation option carries no resource record
    #[error("DNS validation option for {domain} ({arn}) has no resource record")]
    MissingResourceRecord { arn: String, domain: String },

    /// Certificate is unknown to the inventory
    #[error("Certificate not found: {arn}")]
    NotFound { arn: String },

    /// Inventory provider failure
    #[error("Inventory error: {message}")]
    Inventory { message: String },

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Operation exceeded its deadline
    #[error("Operation timed out after {duration:?}")]
    Timeout { duration: Duration },

    /// Generic I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// File system errors
    #[error("File system error: {path}: {source}")]
    FileSystem {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl AuditError {
    /// Wrap a reqwest failure as a transport error for `target`
    pub fn transport(target: impl Into<String>, err: reqwest::Error) -> Self {
        let details = if err.is_timeout() {
            format!("request timed out: {}", err)
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            err.to_string()
        };

        AuditError::Transport {
            target: target.into(),
            details,
        }
    }

    /// True for errors that only fail a single domain's evidence path
    pub fn is_evidence_error(&self) -> bool {
        matches!(
            self,
            AuditError::Transport { .. }
                | AuditError::MalformedResponse { .. }
                | AuditError::NoTlsState { .. }
                | AuditError::NoCertificate { .. }
                | AuditError::CertificateParse { .. }
                | AuditError::Timeout { .. }
        )
    }
}

impl From<toml::de::Error> for AuditError {
    fn from(err: toml::de::Error) -> Self {
        AuditError::Config {
            message: format!("TOML parse error: {}", err),
        }
    }
}

impl From<toml::ser::Error> for AuditError {
    fn from(err: toml::ser::Error) -> Self {
        AuditError::Config {
            message: format!("TOML serialize error: {}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_method_message() {
        let err = AuditError::UnsupportedMethod {
            arn: "arn:aws:acm:us-east-1:1:certificate/abc".to_string(),
            domain: "example.com".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("Validation method is missing"));
        assert!(msg.contains("example.com"));
    }

    #[test]
    fn test_evidence_error_classification() {
        let transport = AuditError::Transport {
            target: "https://example.com/".to_string(),
            details: "refused".to_string(),
        };
        assert!(transport.is_evidence_error());
        assert!(AuditError::NoTlsState { url: "http://x/".to_string() }.is_evidence_error());

        let integrity = AuditError::MissingResourceRecord {
            arn: "arn".to_string(),
            domain: "example.com".to_string(),
        };
        assert!(!integrity.is_evidence_error());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: AuditError = io_err.into();

        assert!(matches!(err, AuditError::Io { .. }));
    }

    #[test]
    fn test_error_chain_preserved() {
        use std::error::Error;

        let err = AuditError::FileSystem {
            path: "inventory.json".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };

        assert!(err.source().is_some());
    }
}
