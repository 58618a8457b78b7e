//! Build and host-environment metadata for issue reports.

use serde::{Deserialize, Serialize};

/// Product and host metadata embedded in automatic bug reports.
///
/// The shell constructs this once at startup; the console model only reads
/// it. OS name and architecture come from the compile-time constants, the
/// OS version and toolchain version are filled in by the shell where it
/// can determine them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub product: String,
    pub version: String,
    pub os: String,
    pub os_version: String,
    pub arch: String,
    /// Rust toolchain the binary was built with.
    pub rust_version: String,
}

impl BuildInfo {
    /// Metadata for the current host with the given product and version.
    #[must_use]
    pub fn new(product: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            version: version.into(),
            os: std::env::consts::OS.to_string(),
            os_version: "unknown".to_string(),
            arch: std::env::consts::ARCH.to_string(),
            rust_version: "unknown".to_string(),
        }
    }

    /// Sets the host OS version.
    #[must_use]
    pub fn with_os_version(mut self, os_version: impl Into<String>) -> Self {
        self.os_version = os_version.into();
        self
    }

    /// Sets the toolchain version.
    #[must_use]
    pub fn with_rust_version(mut self, rust_version: impl Into<String>) -> Self {
        self.rust_version = rust_version.into();
        self
    }
}
