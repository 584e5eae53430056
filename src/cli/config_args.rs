// Configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// Configuration file and per-run overrides
///
/// Values given here take precedence over the config file, which in turn
/// takes precedence over the built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// TOML configuration file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write an example configuration file and exit
    #[arg(long = "config-example", value_name = "FILE")]
    pub config_example: Option<PathBuf>,

    /// Regions to audit (comma-separated: us-east-1,eu-west-1)
    #[arg(short = 'r', long = "region", value_delimiter = ',')]
    pub regions: Vec<String>,

    /// DNS-over-HTTPS JSON endpoint
    #[arg(long = "doh-endpoint", value_name = "URL")]
    pub doh_endpoint: Option<String>,

    /// TLS serial probe timeout in seconds
    #[arg(long = "probe-timeout", value_name = "SECONDS")]
    pub probe_timeout: Option<u64>,

    /// Certificates validated concurrently
    #[arg(long = "max-concurrent", value_name = "NUM")]
    pub max_concurrent: Option<usize>,
}
