// Output module - Report formatting (Terminal, JSON)
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(name = "terminal")]
    Terminal,
    #[value(name = "json")]
    JSON,
    #[value(name = "json-pretty")]
    JSONPretty,
}

pub mod json;
pub mod terminal;
