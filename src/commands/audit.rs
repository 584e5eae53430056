// AuditCommand - Validate every certificate of an inventory snapshot
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use crate::Args;
use crate::audit::Auditor;
use crate::inventory::SnapshotInventory;
use crate::output::{OutputFormat, json};
use crate::utils::http_client::HttpClients;
use crate::validation::CertificateValidator;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// AuditCommand handles the default mode
///
/// This command is responsible for:
/// - Loading configuration and the inventory snapshot
/// - Validating every certificate of every configured region
/// - Printing the report and exporting it to JSON if requested
/// - Exiting non-zero when a certificate failed or could not be audited
pub struct AuditCommand {
    args: Args,
}

impl AuditCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for AuditCommand {
    async fn execute(&self) -> anyhow::Result<()> {
        let inventory_path = self
            .args
            .inventory
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("An inventory snapshot is required (--inventory FILE)"))?;

        let config = self.args.resolve_config()?;
        let inventory =
            SnapshotInventory::from_file(inventory_path)?.with_page_size(config.inventory_page_size);
        info!(
            "Loaded {} certificate(s) from {}",
            inventory.len(),
            inventory_path.display()
        );

        let clients = HttpClients::from_config(&config)?;
        let validator = CertificateValidator::from_config(&clients, &config);
        let auditor =
            Auditor::new(Arc::new(inventory), validator).with_max_concurrent(config.max_concurrent);

        let report = tokio::select! {
            report = auditor.run(&config.regions) => report,
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted, abandoning in-flight validations");
                anyhow::bail!("Audit interrupted");
            }
        };

        match self.args.output.format {
            OutputFormat::Terminal => println!("{}", report),
            OutputFormat::JSON => println!("{}", json::generate_json(&report, false)?),
            OutputFormat::JSONPretty => println!("{}", json::generate_json(&report, true)?),
        }

        if let Some(json_file) = &self.args.output.json {
            json::write_json_file(&report, json_file, self.args.output.json_pretty)?;
            println!("✓ Results exported to JSON: {}", json_file.display());
        }

        if report.has_failures() {
            std::process::exit(1);
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "AuditCommand"
    }
}
