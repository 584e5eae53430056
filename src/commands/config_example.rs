// ConfigExampleCommand - Write an example configuration file
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::Command;
use crate::Args;
use crate::config::AuditConfig;
use async_trait::async_trait;

pub struct ConfigExampleCommand {
    args: Args,
}

impl ConfigExampleCommand {
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ConfigExampleCommand {
    async fn execute(&self) -> anyhow::Result<()> {
        let path = self
            .args
            .config
            .config_example
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Config example path is required"))?;

        AuditConfig::create_example(path)?;
        println!("✓ Example configuration saved to: {}", path.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ConfigExampleCommand"
    }
}
