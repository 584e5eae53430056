// CommandRouter - Routes CLI arguments to appropriate Command
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{AuditCommand, Command, ConfigExampleCommand, LookupCommand, ProbeCommand};
use crate::Args;

/// CommandRouter determines which Command to execute based on CLI arguments
///
/// Priority order:
/// 1. Config example generation (--config-example)
/// 2. DNS lookup diagnostic (--lookup)
/// 3. Serial probe diagnostic (--probe)
/// 4. Inventory audit (default)
pub struct CommandRouter;

impl CommandRouter {
    /// Route CLI arguments to the appropriate Command
    pub fn route(args: Args) -> anyhow::Result<Box<dyn Command>> {
        Self::validate_routing(&args)?;

        if args.config.config_example.is_some() {
            return Ok(Box::new(ConfigExampleCommand::new(args)));
        }

        if args.probe.lookup.is_some() {
            return Ok(Box::new(LookupCommand::new(args)));
        }

        if args.probe.probe.is_some() {
            return Ok(Box::new(ProbeCommand::new(args)));
        }

        Ok(Box::new(AuditCommand::new(args)))
    }

    /// Reject argument combinations that select more than one mode
    pub fn validate_routing(args: &Args) -> anyhow::Result<()> {
        let mode_count = [
            args.config.config_example.is_some(),
            args.probe.lookup.is_some(),
            args.probe.probe.is_some(),
            args.inventory.is_some(),
        ]
        .iter()
        .filter(|&&x| x)
        .count();

        if mode_count > 1 {
            anyhow::bail!(
                "Conflicting modes: choose one of --inventory, --probe, --lookup, --config-example"
            );
        }

        Ok(())
    }
}
