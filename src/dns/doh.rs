// DNS-over-HTTPS resolver - JSON API (`/resolve?name=&type=`)
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::DnsResolver;
use crate::Result;
use crate::config::DEFAULT_DOH_ENDPOINT;
use crate::error::AuditError;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// JSON body returned by the resolver
#[derive(Debug, Deserialize)]
struct DohResponse {
    /// DNS response code (0 = NOERROR)
    #[serde(rename = "Status", default)]
    status: u16,
    #[serde(rename = "Answer", default)]
    answer: Vec<DohAnswer>,
}

/// Only `data` is consulted; `name`, `type` and `TTL` are ignored
#[derive(Debug, Deserialize)]
struct DohAnswer {
    data: String,
}

/// Resolver backed by a public DNS-over-HTTPS JSON endpoint
#[derive(Debug, Clone)]
pub struct DohResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl DohResolver {
    /// Create a resolver that queries the default public endpoint
    pub fn new(client: reqwest::Client) -> Self {
        Self::with_endpoint(client, DEFAULT_DOH_ENDPOINT)
    }

    pub fn with_endpoint(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DnsResolver for DohResolver {
    async fn lookup(&self, record_type: &str, name: &str) -> Result<String> {
        debug!("DoH lookup {} {} via {}", record_type, name, self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", name), ("type", record_type)])
            .send()
            .await
            .map_err(|e| AuditError::transport(name, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::Transport {
                target: name.to_string(),
                details: format!("resolver answered with HTTP {}", status),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AuditError::transport(name, e))?;

        parse_first_answer(name, &body)
    }
}

/// Extract the data of the first answer from a DoH JSON body
pub fn parse_first_answer(name: &str, body: &[u8]) -> Result<String> {
    let response: DohResponse =
        serde_json::from_slice(body).map_err(|e| AuditError::MalformedResponse {
            name: name.to_string(),
            details: format!("unexpected JSON: {}", e),
        })?;

    response
        .answer
        .into_iter()
        .next()
        .map(|answer| answer.data)
        .ok_or_else(|| AuditError::MalformedResponse {
            name: name.to_string(),
            details: format!("empty answer list (status {})", response.status),
        })
}
