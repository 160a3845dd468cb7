// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Default printer lookup.

use tracing::{debug, warn};

use printbridge_core::error::Result;
use printbridge_core::types::{Platform, Printer};

use crate::args;
use crate::bridge::PrintBridge;
use crate::parsers::{parse_lpoptions_paper_sizes, parse_lpstat_default, parse_windows_block};
use crate::runner::CommandRunner;

impl<R: CommandRunner> PrintBridge<R> {
    /// The system default printer, or `None` when none is configured or the
    /// backend's answer cannot be turned into a valid record.
    pub async fn get_default_printer(&self) -> Result<Option<Printer>> {
        match self.platform()? {
            Platform::Windows => self.windows_default_printer().await,
            Platform::MacOs => self.cups_default_printer().await,
        }
    }

    async fn windows_default_printer(&self) -> Result<Option<Printer>> {
        let stdout = self.runner.run(&args::windows_default(&self.config)).await?;
        let block = stdout.trim();
        if block.is_empty() {
            debug!("no default printer configured");
            return Ok(None);
        }

        let parsed = parse_windows_block(block);
        if !parsed.is_valid() {
            debug!("default printer block lacks DeviceID/Name");
        }
        Ok(parsed.into_printer())
    }

    async fn cups_default_printer(&self) -> Result<Option<Printer>> {
        let stdout = self.runner.run(&args::lpstat_default(&self.config)).await?;
        let Some(name) = parse_lpstat_default(&stdout) else {
            debug!("no default destination reported by lpstat");
            return Ok(None);
        };

        let paper_sizes = match self
            .runner
            .run(&args::lpoptions_for(&self.config, &name))
            .await
        {
            Ok(stdout) => parse_lpoptions_paper_sizes(&stdout),
            Err(e) => {
                warn!(printer = %name, error = %e, "paper size query failed");
                Vec::new()
            }
        };

        Ok(Printer::new(name.clone(), name, paper_sizes))
    }
}
