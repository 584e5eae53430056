// Audit Configuration
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::Result;
use crate::error::AuditError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public DNS-over-HTTPS JSON endpoint
pub const DEFAULT_DOH_ENDPOINT: &str = "https://dns.google.com/resolve";

/// Regions walked when no region list is configured
pub const DEFAULT_REGIONS: &[&str] = &[
    "us-east-1",
    "us-east-2",
    "us-west-1",
    "us-west-2",
    "ap-south-1",
    "ap-southeast-1",
    "ap-southeast-2",
    "ap-northeast-1",
    "ap-northeast-2",
    "ca-central-1",
    "eu-central-1",
    "eu-west-1",
    "eu-west-2",
    "sa-east-1",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Inventory regions to walk, in order
    pub regions: Vec<String>,

    /// DNS-over-HTTPS resolver endpoint (JSON API)
    pub doh_endpoint: String,

    /// TLS serial probe timeout in seconds
    pub probe_timeout_secs: u64,

    /// DNS-over-HTTPS request timeout in seconds
    pub dns_timeout_secs: u64,

    /// Upper bound for a single evidence call (lookup or probe) in seconds
    pub evidence_timeout_secs: u64,

    /// Certificates validated concurrently
    pub max_concurrent: usize,

    /// Summaries fetched per inventory page
    pub inventory_page_size: usize,

    /// User-Agent sent with every request
    pub user_agent: String,

    /// PEM bundle trusted for serial probes in addition to the built-in roots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_root_ca: Option<PathBuf>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            regions: DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect(),
            doh_endpoint: DEFAULT_DOH_ENDPOINT.to_string(),
            probe_timeout_secs: 30,
            dns_timeout_secs: 10,
            evidence_timeout_secs: 45,
            max_concurrent: 8,
            inventory_page_size: 100,
            user_agent: format!("dvaudit/{}", env!("CARGO_PKG_VERSION")),
            extra_root_ca: None,
        }
    }
}

impl AuditConfig {
    /// Load config from a TOML file; missing keys fall back to defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AuditError::FileSystem {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: AuditConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Write an example config file with the default values
    pub fn create_example<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        let toml = toml::to_string_pretty(&Self::default())?;
        std::fs::write(path, toml).map_err(|e| AuditError::FileSystem {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(())
    }

    /// Reject values the auditor cannot run with
    pub fn validate(&self) -> Result<()> {
        let endpoint = url::Url::parse(&self.doh_endpoint)?;
        if endpoint.scheme() != "https" {
            return Err(AuditError::Config {
                message: format!("DoH endpoint must use https: {}", self.doh_endpoint),
            });
        }

        if self.regions.is_empty() {
            return Err(AuditError::Config {
                message: "At least one region is required".to_string(),
            });
        }

        if self.max_concurrent == 0 {
            return Err(AuditError::Config {
                message: "max_concurrent must be greater than zero".to_string(),
            });
        }

        if self.inventory_page_size == 0 {
            return Err(AuditError::Config {
                message: "inventory_page_size must be greater than zero".to_string(),
            });
        }

        if self.probe_timeout_secs == 0 || self.dns_timeout_secs == 0 || self.evidence_timeout_secs == 0 {
            return Err(AuditError::Config {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }

    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_secs)
    }

    pub fn evidence_timeout(&self) -> Duration {
        Duration::from_secs(self.evidence_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = AuditConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.regions.len(), 14);
        assert_eq!(config.probe_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "regions = [\"eu-west-1\"]").unwrap();
        writeln!(file, "max_concurrent = 2").unwrap();

        let config = AuditConfig::from_file(file.path()).unwrap();
        assert_eq!(config.regions, vec!["eu-west-1".to_string()]);
        assert_eq!(config.max_concurrent, 2);
        assert_eq!(config.doh_endpoint, DEFAULT_DOH_ENDPOINT);
    }

    #[test]
    fn test_example_roundtrip() {
        let file = NamedTempFile::new().unwrap();
        AuditConfig::create_example(file.path()).unwrap();

        let loaded = AuditConfig::from_file(file.path()).unwrap();
        assert_eq!(loaded, AuditConfig::default());
    }

    #[test]
    fn test_rejects_plain_http_endpoint() {
        let config = AuditConfig {
            doh_endpoint: "http://dns.google.com/resolve".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AuditError::Config { .. })));
    }

    #[test]
    fn test_rejects_zero_concurrency() {
        let config = AuditConfig {
            max_concurrent: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = AuditConfig::from_file("/nonexistent/dvaudit.toml");
        assert!(matches!(result, Err(AuditError::FileSystem { .. })));
    }
}
