//! Platform version query layer
//! Provides a unified interface for reading the host OS name and version.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub mod probes;

/// Version-query errors
#[derive(Debug, Error)]
pub enum PlatformVersionError {
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

pub type Result<T> = std::result::Result<T, PlatformVersionError>;

/// OS identification as reported by a probe.
/// Both fields are guaranteed non-empty; construction is the only place
/// that guarantee is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub platform_name: String,
    pub version_string: String,
}

impl VersionInfo {
    pub fn new(platform_name: impl Into<String>, version_string: impl Into<String>) -> Result<Self> {
        let platform_name = platform_name.into();
        let version_string = version_string.into();

        if platform_name.trim().is_empty() {
            return Err(PlatformVersionError::UnsupportedPlatform(
                "host reported an empty platform name".to_string(),
            ));
        }
        if version_string.trim().is_empty() {
            return Err(PlatformVersionError::UnsupportedPlatform(
                "host reported an empty OS version".to_string(),
            ));
        }

        Ok(Self {
            platform_name,
            version_string,
        })
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.platform_name, self.version_string)
    }
}

/// Core version probe trait - implemented by platform-specific probes
pub trait VersionProbe: Send + Sync {
    /// Display name of the platform this probe reports for
    fn platform_name(&self) -> &'static str;

    /// Read the OS version string from the host
    fn os_version(&self) -> Result<String>;
}

/// Version query service over an injected probe.
/// Stateless: every query re-reads the host, so repeated calls return
/// identical results for a stable host.
pub struct VersionQuery {
    probe: Box<dyn VersionProbe>,
}

impl VersionQuery {
    pub fn new(probe: Box<dyn VersionProbe>) -> Self {
        Self { probe }
    }

    /// Service over the probe for the platform this process runs on
    pub fn for_host() -> Result<Self> {
        Ok(Self::new(create_probe()?))
    }

    /// Query the host and return the structured result
    pub fn query(&self) -> Result<VersionInfo> {
        let version = self.probe.os_version()?;
        VersionInfo::new(self.probe.platform_name(), version)
    }

    /// Query the host and render the result as "<platform> <version>"
    pub fn platform_version(&self) -> Result<String> {
        self.query().map(|info| info.to_string())
    }
}

/// Factory function to create the appropriate version probe for the current platform
pub fn create_probe() -> Result<Box<dyn VersionProbe>> {
    #[cfg(target_os = "macos")]
    {
        debug!("selected macOS version probe");
        Ok(Box::new(probes::macos::MacosProbe::new()))
    }

    #[cfg(target_os = "linux")]
    {
        debug!("selected Linux version probe");
        Ok(Box::new(probes::linux::LinuxProbe::new()))
    }

    #[cfg(target_os = "windows")]
    {
        debug!("selected Windows version probe");
        Ok(Box::new(probes::windows::WindowsProbe::new()))
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(PlatformVersionError::UnsupportedPlatform(
            std::env::consts::OS.to_string(),
        ))
    }
}

/// Query the host in one call
pub fn get_platform_version() -> Result<String> {
    VersionQuery::for_host()?.platform_version()
}
