// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for Printbridge.

use serde::Serialize;

/// Native printing subsystem the host is running on.
///
/// There are exactly two backends; every other OS is rejected by the
/// platform guard before any process is spawned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows print spooler, queried through PowerShell, printed via SumatraPDF.
    Windows,
    /// CUPS on macOS (`lpstat`, `lpoptions`, `lp`).
    MacOs,
}

impl Platform {
    /// Node-style OS identifier for Windows.
    pub const WIN32: &'static str = "win32";
    /// Node-style OS identifier for macOS.
    pub const DARWIN: &'static str = "darwin";

    /// Map an OS identifier to a supported platform.
    ///
    /// Only the exact identifiers `win32` and `darwin` are accepted.
    pub fn from_identifier(os: &str) -> Option<Self> {
        match os {
            Self::WIN32 => Some(Self::Windows),
            Self::DARWIN => Some(Self::MacOs),
            _ => None,
        }
    }

    /// Inverse of [`Platform::from_identifier`]; tags log records.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Windows => Self::WIN32,
            Self::MacOs => Self::DARWIN,
        }
    }

    /// Display name used in error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::MacOs => "macOS",
        }
    }
}

/// Canonical, platform-independent printer record.
///
/// Only obtainable through [`Printer::new`], which refuses an empty
/// device id or name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Printer {
    device_id: String,
    name: String,
    paper_sizes: Vec<String>,
}

impl Printer {
    /// Build a printer record, or `None` if either identifier is empty.
    pub fn new(
        device_id: impl Into<String>,
        name: impl Into<String>,
        paper_sizes: Vec<String>,
    ) -> Option<Self> {
        let device_id = device_id.into();
        let name = name.into();
        if device_id.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self {
            device_id,
            name,
            paper_sizes,
        })
    }

    /// Backend-native identifier (Windows `DeviceID`, CUPS queue name).
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Human-readable display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Paper sizes in the order the backend reported them. May be empty.
    pub fn paper_sizes(&self) -> &[String] {
        &self.paper_sizes
    }
}
