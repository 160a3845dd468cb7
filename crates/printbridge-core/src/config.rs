// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Backend configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Program names and paths used to reach each native backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// PowerShell executable used for printer queries on Windows.
    pub powershell: String,
    /// CUPS job submission command.
    pub lp: String,
    /// CUPS status command (`-p` listing, `-d` default destination).
    pub lpstat: String,
    /// CUPS per-queue option listing command.
    pub lpoptions: String,
    /// Explicit SumatraPDF location. When unset the bundled copy is used.
    pub sumatra_pdf: Option<String>,
    /// File name of the bundled SumatraPDF, resolved next to the executable.
    pub bundled_sumatra_pdf: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            powershell: "Powershell.exe".into(),
            lp: "lp".into(),
            lpstat: "lpstat".into(),
            lpoptions: "lpoptions".into(),
            sumatra_pdf: None,
            bundled_sumatra_pdf: "SumatraPDF-3.4.6-32.exe".into(),
        }
    }
}

impl BackendConfig {
    /// Load a JSON configuration file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
