//! Compile-time platform tag
//!
//! [`Platform::CURRENT`] is fixed when the binary is built: the `#[cfg]`
//! branches are mutually exclusive, so exactly one initializer is ever
//! compiled in. There is no runtime detection.

use std::fmt;

/// Platform the binary was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    Unknown,
}

impl Platform {
    /// The platform selected at build time.
    #[cfg(target_os = "macos")]
    pub const CURRENT: Platform = Platform::MacOs;

    #[cfg(target_os = "linux")]
    pub const CURRENT: Platform = Platform::Linux;

    #[cfg(target_os = "windows")]
    pub const CURRENT: Platform = Platform::Windows;

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    pub const CURRENT: Platform = Platform::Unknown;

    /// Fixed display label for this platform.
    pub const fn label(self) -> &'static str {
        match self {
            Platform::MacOs => "macOS (Apple Silicon or Intel)",
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
            Platform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
