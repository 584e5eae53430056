// Single-host diagnostic arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;

/// Diagnostics that gather one piece of evidence without an inventory
#[derive(Args, Debug, Clone, Default)]
pub struct ProbeArgs {
    /// Print the certificate serial served by each variant of a domain
    #[arg(long = "probe", value_name = "DOMAIN")]
    pub probe: Option<String>,

    /// Resolve one record over DNS-over-HTTPS
    #[arg(long = "lookup", num_args = 2, value_names = ["TYPE", "NAME"])]
    pub lookup: Option<Vec<String>>,
}
