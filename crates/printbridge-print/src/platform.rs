// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform guard.

use printbridge_core::error::{PrintBridgeError, Result};
use printbridge_core::types::Platform;

/// Node-style identifier of the OS this binary was built for
/// (`win32`, `darwin`, or Rust's own name for anything else).
pub fn current_os() -> &'static str {
    match std::env::consts::OS {
        "windows" => Platform::WIN32,
        "macos" => Platform::DARWIN,
        other => other,
    }
}

/// Reject every OS except the two with a supported backend.
pub fn ensure_supported(os: &str) -> Result<Platform> {
    Platform::from_identifier(os).ok_or_else(|| PrintBridgeError::UnsupportedPlatform {
        os: os.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_platforms_pass() {
        assert_eq!(ensure_supported("win32").expect("win32"), Platform::Windows);
        assert_eq!(ensure_supported("darwin").expect("darwin"), Platform::MacOs);
    }

    #[test]
    fn other_platforms_fail_with_fixed_message() {
        for os in ["linux", "test", "freebsd", ""] {
            let err = ensure_supported(os).unwrap_err();
            assert_eq!(err.to_string(), "Operating System not supported");
        }
    }

    #[test]
    fn current_os_uses_node_identifiers() {
        let os = current_os();
        if cfg!(target_os = "windows") {
            assert_eq!(os, "win32");
        } else if cfg!(target_os = "macos") {
            assert_eq!(os, "darwin");
        } else {
            assert_eq!(os, std::env::consts::OS);
        }
    }
}
