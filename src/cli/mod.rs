// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::Result;
use crate::config::AuditConfig;
use clap::Parser;
use std::path::PathBuf;

// Sub-modules for organized CLI arguments
mod config_args;
mod output_args;
mod probe_args;

// Re-export sub-structs
pub use config_args::ConfigArgs;
pub use output_args::OutputArgs;
pub use probe_args::ProbeArgs;

/// dvaudit - Independent re-verification of certificate domain validation
///
/// The Args struct is organized into logical domains:
/// - Inventory input
/// - Configuration file and overrides (ConfigArgs)
/// - Single-host diagnostics (ProbeArgs)
/// - Output formats (OutputArgs)
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, long_about = None)]
#[command(name = "dvaudit")]
#[command(about = "Re-verify the domain-validation evidence of issued certificates", long_about = None)]
pub struct Args {
    /// Certificate inventory snapshot (JSON, describe-certificate shape)
    #[arg(short = 'i', long = "inventory", value_name = "FILE")]
    pub inventory: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(flatten)]
    pub probe: ProbeArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl Args {
    /// Load the config file (or defaults) and apply command line overrides
    pub fn resolve_config(&self) -> Result<AuditConfig> {
        let mut config = match &self.config.config {
            Some(path) => AuditConfig::from_file(path)?,
            None => AuditConfig::default(),
        };

        if !self.config.regions.is_empty() {
            config.regions = self.config.regions.clone();
        }
        if let Some(endpoint) = &self.config.doh_endpoint {
            config.doh_endpoint = endpoint.clone();
        }
        if let Some(secs) = self.config.probe_timeout {
            config.probe_timeout_secs = secs;
        }
        if let Some(max) = self.config.max_concurrent {
            config.max_concurrent = max;
        }

        config.validate()?;
        Ok(config)
    }
}
