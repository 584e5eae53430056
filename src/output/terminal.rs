// dvaudit - Terminal Output Module
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! Terminal output formatting for audit reports
//!
//! One line per certificate, followed by the domains that did not pass and
//! the evidence that was observed for them.

use crate::audit::{AuditEntry, AuditOutcome, AuditReport};
use crate::validation::{DomainOutcome, DomainVerdict, VerdictStatus};
use colored::*;
use std::fmt;

/// Display implementation for AuditReport
impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\n╔═══════════════════════════════════════════════════════════╗"
        )?;
        writeln!(
            f,
            "║           DOMAIN VALIDATION AUDIT REPORT                  ║"
        )?;
        writeln!(
            f,
            "╚═══════════════════════════════════════════════════════════╝\n"
        )?;

        writeln!(f, "Regions: {}", self.regions.join(", ").cyan())?;
        writeln!(
            f,
            "Total Duration: {:.2}s\n",
            self.duration_ms() as f64 / 1000.0
        )?;

        let mut current_region: Option<&str> = None;
        for entry in &self.entries {
            if current_region != Some(entry.region.as_str()) {
                writeln!(f, "{}", entry.region.cyan().bold())?;
                writeln!(f, "{}", "═".repeat(60))?;
                current_region = Some(entry.region.as_str());
            }
            display_entry(f, entry)?;
        }

        writeln!(f, "\n{}", "Summary:".cyan().bold())?;
        writeln!(f, "{}", "═".repeat(60))?;
        writeln!(f, "  Certificates: {}", self.summary.total)?;
        writeln!(f, "  Passed:       {}", self.summary.passed.to_string().green())?;
        writeln!(f, "  Failed:       {}", self.summary.failed.to_string().red())?;
        writeln!(
            f,
            "  Inconclusive: {}",
            self.summary.inconclusive.to_string().yellow()
        )?;
        writeln!(f, "  Errors:       {}", self.summary.errored.to_string().red())?;

        Ok(())
    }
}

fn display_entry(f: &mut fmt::Formatter<'_>, entry: &AuditEntry) -> fmt::Result {
    match &entry.outcome {
        AuditOutcome::Verdict(verdict) => {
            let marker = match verdict.status {
                VerdictStatus::Passed => "✓".green(),
                VerdictStatus::Failed => "✗".red(),
                VerdictStatus::Inconclusive => "?".yellow(),
            };
            let status = match verdict.status {
                VerdictStatus::Passed => "PASSED".green().bold(),
                VerdictStatus::Failed => "FAILED".red().bold(),
                VerdictStatus::Inconclusive => "INCONCLUSIVE".yellow().bold(),
            };

            writeln!(
                f,
                "  {} {} ({}) - {}",
                marker,
                entry.domain_name.green(),
                entry.arn.dimmed(),
                status
            )?;

            if verdict.domains.is_empty() {
                writeln!(f, "    {}", "No domains to check".yellow())?;
            }

            for domain in verdict.domains.iter().filter(|d| !d.passed()) {
                display_domain(f, domain)?;
            }
        }
        AuditOutcome::Error { stage, message } => {
            writeln!(
                f,
                "  {} {} ({}) - {}",
                "✗".red(),
                entry.domain_name.yellow(),
                entry.arn.dimmed(),
                "ERROR".red().bold()
            )?;
            writeln!(f, "    {:?} failed: {}", stage, message.red())?;
        }
    }

    Ok(())
}

fn display_domain(f: &mut fmt::Formatter<'_>, domain: &DomainVerdict) -> fmt::Result {
    let label = match domain.outcome {
        DomainOutcome::Failed => "failed".red(),
        DomainOutcome::UnknownMethod => "skipped".yellow(),
        DomainOutcome::Matched => "matched".green(),
    };

    writeln!(f, "    [{}] {} {}", domain.kind, domain.domain, label)?;
    if let Some(ref reason) = domain.reason {
        writeln!(f, "      {}", reason)?;
    }

    Ok(())
}
