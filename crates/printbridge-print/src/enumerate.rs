// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer enumeration.
//
// Windows: one PowerShell query, one text block per printer; blocks that
// fail validation are dropped.  macOS: `lpstat -p` for the queue names, then
// one `lpoptions` query per queue, run concurrently.  A failed paper-size
// query only empties that printer's paper list.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use printbridge_core::error::Result;
use printbridge_core::types::{Platform, Printer};

use crate::args;
use crate::bridge::PrintBridge;
use crate::parsers::{
    parse_lpoptions_paper_sizes, parse_lpstat_printers, parse_windows_block, split_printer_blocks,
};
use crate::runner::CommandRunner;

impl<R: CommandRunner> PrintBridge<R> {
    /// All installed printers, in backend order. Never fails for an empty list.
    pub async fn get_printers(&self) -> Result<Vec<Printer>> {
        let platform = self.platform()?;
        let printers = match platform {
            Platform::Windows => self.windows_printers().await?,
            Platform::MacOs => self.cups_printers().await?,
        };
        info!(
            os = platform.identifier(),
            count = printers.len(),
            "enumerated printers"
        );
        Ok(printers)
    }

    async fn windows_printers(&self) -> Result<Vec<Printer>> {
        let stdout = self
            .runner
            .run(&args::windows_enumeration(&self.config))
            .await?;

        Ok(printers_from_windows_output(&stdout))
    }

    async fn cups_printers(&self) -> Result<Vec<Printer>> {
        let stdout = self.runner.run(&args::lpstat_printers(&self.config)).await?;
        let names = parse_lpstat_printers(&stdout);
        debug!(queues = ?names, "lpstat reported queues");

        let handles: Vec<(String, JoinHandle<Result<Vec<String>>>)> = names
            .into_iter()
            .map(|name| {
                let runner = Arc::clone(&self.runner);
                let invocation = args::lpoptions_for(&self.config, &name);
                let handle = tokio::spawn(async move {
                    runner
                        .run(&invocation)
                        .await
                        .map(|stdout| parse_lpoptions_paper_sizes(&stdout))
                });
                (name, handle)
            })
            .collect();

        let mut printers = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let paper_sizes = match handle.await {
                Ok(Ok(sizes)) => sizes,
                Ok(Err(e)) => {
                    warn!(printer = %name, error = %e, "paper size query failed");
                    Vec::new()
                }
                Err(e) => {
                    warn!(printer = %name, error = %e, "paper size task aborted");
                    Vec::new()
                }
            };
            if let Some(printer) = Printer::new(name.clone(), name, paper_sizes) {
                printers.push(printer);
            }
        }

        Ok(printers)
    }
}

/// Parse every valid printer block from the Windows enumeration output.
pub fn printers_from_windows_output(stdout: &str) -> Vec<Printer> {
    split_printer_blocks(stdout)
        .into_iter()
        .filter_map(|block| {
            let parsed = parse_windows_block(block);
            if !parsed.is_valid() {
                debug!(block = %block, "dropping printer block without DeviceID/Name");
            }
            parsed.into_printer()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_blocks_are_dropped() {
        let stdout = "\
Name                 : Office
DeviceID             : Office
AllPrinterPaperNames : {A4, A5}


Name                 : Orphan
AllPrinterPaperNames : {Letter}


Name                 : Fax
DeviceID             : Fax
AllPrinterPaperNames : {}
";
        let printers = printers_from_windows_output(stdout);
        let names: Vec<&str> = printers.iter().map(Printer::name).collect();
        assert_eq!(names, ["Office", "Fax"]);
        assert_eq!(printers[0].paper_sizes(), ["A4", "A5"]);
    }

    #[test]
    fn empty_output_is_empty_list() {
        assert!(printers_from_windows_output("").is_empty());
    }
}
