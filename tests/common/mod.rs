// Copyright (c) 2025 Marc Rivero López
// Licensed under GPLv3. See LICENSE file for details.

//! Canned resolver and prober shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use dvaudit::Result;
use dvaudit::certificates::SerialProber;
use dvaudit::dns::DnsResolver;
use dvaudit::error::AuditError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Answers lookups from a fixed table keyed by (type, name)
#[derive(Default)]
pub struct TableResolver {
    answers: HashMap<(String, String), String>,
    pub calls: Mutex<Vec<String>>,
}

impl TableResolver {
    pub fn with_answer(mut self, record_type: &str, name: &str, data: &str) -> Self {
        self.answers
            .insert((record_type.to_string(), name.to_string()), data.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl DnsResolver for TableResolver {
    async fn lookup(&self, record_type: &str, name: &str) -> Result<String> {
        self.calls.lock().unwrap().push(format!("{} {}", record_type, name));
        self.answers
            .get(&(record_type.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| AuditError::MalformedResponse {
                name: name.to_string(),
                details: "no answer".to_string(),
            })
    }
}

/// Serves a fixed serial per URL; unknown URLs fail with a transport error
#[derive(Default)]
pub struct TableProber {
    serials: HashMap<String, String>,
    hang: Vec<String>,
    pub calls: Mutex<Vec<String>>,
}

impl TableProber {
    pub fn serving(mut self, url: &str, serial: &str) -> Self {
        self.serials.insert(url.to_string(), serial.to_string());
        self
    }

    /// The probe of `url` never completes
    pub fn hanging(mut self, url: &str) -> Self {
        self.hang.push(url.to_string());
        self
    }

    pub fn probed(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SerialProber for TableProber {
    async fn probe_serial(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());

        if self.hang.iter().any(|u| u == url) {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }

        self.serials
            .get(url)
            .cloned()
            .ok_or_else(|| AuditError::Transport {
                target: url.to_string(),
                details: "connection refused".to_string(),
            })
    }
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
