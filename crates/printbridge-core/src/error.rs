// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Printbridge.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all Printbridge operations.
#[derive(Debug, Error)]
pub enum PrintBridgeError {
    // -- Platform --
    #[error("Operating System not supported")]
    UnsupportedPlatform { os: String },

    // -- Arguments --
    #[error("No PDF specified")]
    MissingFile,

    #[error("No such file: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {option} provided. Valid names: {}", .valid.join(", "))]
    InvalidArgument {
        option: &'static str,
        value: String,
        valid: &'static [&'static str],
    },

    #[error("{capability} option is not supported on {platform}")]
    UnsupportedCapability {
        capability: &'static str,
        platform: &'static str,
    },

    // -- Backend process --
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}: {stderr}", exit_label(.code))]
    Backend {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    // -- Configuration --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification of a [`PrintBridgeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The running OS has no supported backend. Never retried.
    UnsupportedPlatform,
    /// Missing or unreadable file, or an option value outside its set.
    InvalidArgument,
    /// The backend cannot provide the requested feature.
    UnsupportedCapability,
    /// The external program failed to start or exited non-zero.
    BackendExecutionFailure,
    /// Configuration could not be loaded.
    Configuration,
}

impl PrintBridgeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedPlatform { .. } => ErrorKind::UnsupportedPlatform,
            Self::MissingFile
            | Self::FileNotFound { .. }
            | Self::FileAccess { .. }
            | Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::UnsupportedCapability { .. } => ErrorKind::UnsupportedCapability,
            Self::Spawn { .. } | Self::Backend { .. } => ErrorKind::BackendExecutionFailure,
            Self::Io(_) | Self::Serialization(_) => ErrorKind::Configuration,
        }
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no exit status (terminated by signal)".into(),
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PrintBridgeError>;
