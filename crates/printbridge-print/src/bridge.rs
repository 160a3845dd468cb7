// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// `PrintBridge` — the handle every public operation hangs off.
//
// Holds the injected process runner, the OS identifier checked by the
// platform guard, and the backend configuration.  The operations themselves
// live in `enumerate`, `default_printer` and `dispatch`.

use std::path::PathBuf;
use std::sync::Arc;

use printbridge_core::config::BackendConfig;
use printbridge_core::error::Result;
use printbridge_core::types::Platform;

use crate::platform::{current_os, ensure_supported};
use crate::runner::{CommandRunner, SystemCommandRunner};

/// Entry point for printer enumeration and job submission.
pub struct PrintBridge<R = SystemCommandRunner> {
    pub(crate) runner: Arc<R>,
    pub(crate) os: String,
    pub(crate) config: BackendConfig,
    pub(crate) exe_dir: Option<PathBuf>,
}

impl PrintBridge<SystemCommandRunner> {
    /// Bridge for the running OS using real child processes.
    pub fn new() -> Self {
        Self::with_runner(SystemCommandRunner, current_os())
    }
}

impl Default for PrintBridge<SystemCommandRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> PrintBridge<R> {
    /// Bridge with an explicit runner and OS identifier (`win32`, `darwin`).
    pub fn with_runner(runner: R, os: impl Into<String>) -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(PathBuf::from));
        Self {
            runner: Arc::new(runner),
            os: os.into(),
            config: BackendConfig::default(),
            exe_dir,
        }
    }

    pub fn with_config(mut self, config: BackendConfig) -> Self {
        self.config = config;
        self
    }

    /// Directory the bundled SumatraPDF is resolved against.
    pub fn with_exe_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.exe_dir = Some(dir.into());
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Platform guard; first call of every public operation.
    pub(crate) fn platform(&self) -> Result<Platform> {
        ensure_supported(&self.os)
    }
}
