// JSON Output Module
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use crate::Result;
use crate::audit::AuditReport;
use crate::error::AuditError;
use std::path::Path;

/// Generate JSON output from an audit report
pub fn generate_json(report: &AuditReport, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(report)?)
    } else {
        Ok(serde_json::to_string(report)?)
    }
}

/// Write JSON to file
pub fn write_json_file<P: AsRef<Path>>(report: &AuditReport, path: P, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let json = generate_json(report, pretty)?;
    std::fs::write(path, json).map_err(|e| AuditError::FileSystem {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(())
}
