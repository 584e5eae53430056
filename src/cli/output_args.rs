// Output format configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::output::OutputFormat;
use clap::Args;
use std::path::PathBuf;

/// Output format and display options
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Report format printed to stdout
    #[arg(long = "format", value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Also write the report to a JSON file
    #[arg(long = "json", value_name = "FILE", id = "output_json")]
    pub json: Option<PathBuf>,

    /// Pretty print the JSON file
    #[arg(long = "json-pretty")]
    pub json_pretty: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
