// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printbridge — Core types, print options and error definitions shared
// across all crates.

pub mod config;
pub mod error;
pub mod options;
pub mod types;

pub use config::BackendConfig;
pub use error::{ErrorKind, PrintBridgeError, Result};
pub use options::{
    OptionKeyword, Orientation, PrintOptions, Scale, Side, Subset, ValidatedOptions,
};
pub use types::{Platform, Printer};
