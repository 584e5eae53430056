// LookupCommand - Resolve one record over DNS-over-HTTPS
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use crate::Args;
use crate::dns::{DnsResolver, DohResolver};
use crate::utils::http_client::HttpClients;
use async_trait::async_trait;

/// LookupCommand prints the first answer for a record, as the validator sees it
pub struct LookupCommand {
    args: Args,
}

impl LookupCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for LookupCommand {
    async fn execute(&self) -> anyhow::Result<()> {
        let (record_type, name) = match self.args.probe.lookup.as_deref() {
            Some([record_type, name]) => (record_type, name),
            _ => anyhow::bail!("--lookup requires TYPE and NAME"),
        };

        let config = self.args.resolve_config()?;
        let clients = HttpClients::from_config(&config)?;
        let resolver = DohResolver::with_endpoint(clients.dns().clone(), config.doh_endpoint.clone());

        let data = resolver.lookup(record_type, name).await?;
        println!("{} {} -> {}", record_type, name, data);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LookupCommand"
    }
}
