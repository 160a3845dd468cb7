// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// External process contract.
//
// Every backend call goes through a `CommandRunner`: run a program with an
// argument vector, hand back stdout on a zero exit, fail otherwise.  stderr
// is only carried along in the error, never inspected.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::future::Future;

use tokio::process::Command;
use tracing::debug;

use printbridge_core::error::{PrintBridgeError, Result};

/// A program plus the exact argument vector it will receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Invocation {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn push(&mut self, arg: impl Into<OsString>) {
        self.args.push(arg.into());
    }

    /// Program name, lossily converted for messages.
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Arguments as UTF-8, lossily converted.
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    /// Whether `arg` appears anywhere in the argument vector.
    pub fn has_arg(&self, arg: impl AsRef<OsStr>) -> bool {
        self.args.iter().any(|a| a == arg.as_ref())
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Runs external programs and captures their stdout.
pub trait CommandRunner: Send + Sync + 'static {
    /// Run `invocation`, resolving to stdout on exit status zero.
    fn run(&self, invocation: &Invocation) -> impl Future<Output = Result<String>> + Send;
}

/// [`CommandRunner`] backed by `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

/// `CREATE_NO_WINDOW`: keep PowerShell and SumatraPDF from flashing a console.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

impl CommandRunner for SystemCommandRunner {
    async fn run(&self, invocation: &Invocation) -> Result<String> {
        let program = invocation.program_name();
        debug!(program = %program, args = ?invocation.args_lossy(), "spawning backend process");

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).kill_on_drop(true);
        #[cfg(windows)]
        command.creation_flags(CREATE_NO_WINDOW);

        let output = command
            .output()
            .await
            .map_err(|source| PrintBridgeError::Spawn {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PrintBridgeError::Backend {
                program,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        debug!(program = %program, bytes = output.stdout.len(), "backend process finished");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
