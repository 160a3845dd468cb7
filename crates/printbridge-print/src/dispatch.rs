// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Print job dispatch.
//
// Checks the file, validates the options, builds the backend command line
// and runs it exactly once.  No retries: a spawn failure or non-zero exit is
// returned to the caller as-is.

use std::path::Path;

use tracing::info;

use printbridge_core::error::{PrintBridgeError, Result};
use printbridge_core::options::PrintOptions;
use printbridge_core::types::Platform;

use crate::args;
use crate::bridge::PrintBridge;
use crate::runner::{CommandRunner, Invocation};

impl<R: CommandRunner> PrintBridge<R> {
    /// Submit the PDF at `path` to the backend.
    pub async fn print(&self, path: impl AsRef<Path>, options: &PrintOptions) -> Result<()> {
        let platform = self.platform()?;
        let path = path.as_ref();

        if path.as_os_str().is_empty() {
            return Err(PrintBridgeError::MissingFile);
        }
        match tokio::fs::try_exists(path).await {
            Ok(true) => {}
            Ok(false) => {
                return Err(PrintBridgeError::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(PrintBridgeError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }

        let invocation = self.print_invocation(platform, path, options)?;
        info!(
            platform = platform.display_name(),
            command = %invocation,
            "submitting print job"
        );
        self.runner.run(&invocation).await?;
        Ok(())
    }

    /// Build the job command line without running it.
    pub fn print_invocation(
        &self,
        platform: Platform,
        path: &Path,
        options: &PrintOptions,
    ) -> Result<Invocation> {
        match platform {
            Platform::MacOs => {
                if options.wants_print_dialog() {
                    return Err(PrintBridgeError::UnsupportedCapability {
                        capability: "printDialog",
                        platform: platform.display_name(),
                    });
                }
                let validated = options.validate()?;
                Ok(args::lp_invocation(&self.config, path, &validated))
            }
            Platform::Windows => {
                let validated = options.validate()?;
                let helper = args::sumatra_path(&self.config, &validated, self.exe_dir.as_deref());
                Ok(args::sumatra_invocation(&helper, path, &validated))
            }
        }
    }
}
