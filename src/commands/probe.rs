// ProbeCommand - Show the certificate serial served by a domain's variants
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use crate::Args;
use crate::certificates::serial::{HttpsSerialProber, SerialProber};
use crate::utils::http_client::HttpClients;
use crate::validation::variants::{expand, probe_url};
use async_trait::async_trait;
use colored::*;

/// ProbeCommand probes every variant of a domain, without short-circuiting
pub struct ProbeCommand {
    args: Args,
}

impl ProbeCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ProbeCommand {
    async fn execute(&self) -> anyhow::Result<()> {
        let domain = self
            .args
            .probe
            .probe
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Domain is required"))?;

        let config = self.args.resolve_config()?;
        let clients = HttpClients::from_config(&config)?;
        let prober = HttpsSerialProber::new(clients.probe().clone());

        for variant in expand(domain) {
            let url = probe_url(&variant);
            match prober.probe_serial(&url).await {
                Ok(serial) => println!("  {} {} {}", "✓".green(), url, serial.cyan()),
                Err(e) => println!("  {} {} {}", "✗".red(), url, e.to_string().red()),
            }
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "ProbeCommand"
    }
}
