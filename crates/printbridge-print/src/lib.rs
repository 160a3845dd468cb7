// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printbridge Print — printer enumeration, default-printer lookup and PDF job
// dispatch over the Windows spooler (PowerShell + SumatraPDF) and CUPS on
// macOS.  This crate maps the domain types in `printbridge-core` onto the
// native command-line backends and parses what they print back.

pub mod args;
pub mod bridge;
pub mod default_printer;
pub mod dispatch;
pub mod enumerate;
pub mod parsers;
pub mod platform;
pub mod runner;

use std::path::Path;

use printbridge_core::error::Result;
use printbridge_core::options::PrintOptions;
use printbridge_core::types::Printer;

pub use bridge::PrintBridge;
pub use runner::{CommandRunner, Invocation, SystemCommandRunner};

/// All printers on this machine.
pub async fn get_printers() -> Result<Vec<Printer>> {
    PrintBridge::new().get_printers().await
}

/// The system default printer, if one is configured.
pub async fn get_default_printer() -> Result<Option<Printer>> {
    PrintBridge::new().get_default_printer().await
}

/// Print a PDF with the given options.
pub async fn print(path: impl AsRef<Path>, options: &PrintOptions) -> Result<()> {
    PrintBridge::new().print(path, options).await
}
