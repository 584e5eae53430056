// HTTP clients - Immutable, process-wide client configuration
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::Result;
use crate::config::AuditConfig;
use crate::error::AuditError;
use std::path::Path;
use std::time::Duration;

/// The two HTTP clients used for evidence gathering.
///
/// Built once and handed to the resolver and prober at construction time.
/// `reqwest::Client` is reference counted internally, so clones share one
/// connection pool.
#[derive(Debug, Clone)]
pub struct HttpClients {
    probe: reqwest::Client,
    dns: reqwest::Client,
}

impl HttpClients {
    /// Build both clients from the audit configuration
    pub fn from_config(config: &AuditConfig) -> Result<Self> {
        let extra_roots = match &config.extra_root_ca {
            Some(path) => load_root_certificates(path)?,
            None => Vec::new(),
        };

        Ok(Self {
            probe: build_probe_client(config.probe_timeout(), &config.user_agent, &extra_roots)?,
            dns: build_dns_client(config.dns_timeout(), &config.user_agent)?,
        })
    }

    /// Client for TLS serial probes: never follows redirects, records TLS info
    pub fn probe(&self) -> &reqwest::Client {
        &self.probe
    }

    /// Client for DNS-over-HTTPS queries
    pub fn dns(&self) -> &reqwest::Client {
        &self.dns
    }
}

/// Read a PEM bundle of additional trust anchors
pub fn load_root_certificates(path: &Path) -> Result<Vec<reqwest::Certificate>> {
    let pem = std::fs::read(path).map_err(|e| AuditError::FileSystem {
        path: path.display().to_string(),
        source: e,
    })?;

    reqwest::Certificate::from_pem_bundle(&pem).map_err(|e| AuditError::Config {
        message: format!("Invalid root certificate bundle {}: {}", path.display(), e),
    })
}

/// A 3xx answer is the terminal response; only its TLS session matters.
pub fn build_probe_client(
    timeout: Duration,
    user_agent: &str,
    extra_roots: &[reqwest::Certificate],
) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::none())
        .tls_info(true)
        .user_agent(user_agent);

    for root in extra_roots {
        builder = builder.add_root_certificate(root.clone());
    }

    builder
        .build()
        .map_err(|e| AuditError::Config {
            message: format!("Failed to build probe client: {}", e),
        })
}

pub fn build_dns_client(timeout: Duration, user_agent: &str) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(4)
        .user_agent(user_agent)
        .build()
        .map_err(|e| AuditError::Config {
            message: format!("Failed to build DNS client: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clients_from_default_config() {
        let clients = HttpClients::from_config(&AuditConfig::default());
        assert!(clients.is_ok());
    }

    #[test]
    fn test_missing_root_bundle_is_reported() {
        let config = AuditConfig {
            extra_root_ca: Some("/nonexistent/dvaudit-roots.pem".into()),
            ..Default::default()
        };

        let result = HttpClients::from_config(&config);
        assert!(matches!(result, Err(AuditError::FileSystem { .. })));
    }

    #[test]
    fn test_invalid_root_bundle_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roots.pem");
        std::fs::write(&path, "-----BEGIN CERTIFICATE-----\nnot base64!\n-----END CERTIFICATE-----\n").unwrap();

        let result = load_root_certificates(&path);
        assert!(matches!(result, Err(AuditError::Config { .. })));
    }
}
