//! Linux version probe.
//! Reads the distribution version from `/etc/os-release`.

use tracing::{debug, warn};

use crate::{PlatformVersionError, Result, VersionProbe};

const OS_RELEASE_PATH: &str = "/etc/os-release";

#[derive(Default)]
pub struct LinuxProbe;

impl LinuxProbe {
    pub fn new() -> Self {
        Self
    }
}

impl VersionProbe for LinuxProbe {
    fn platform_name(&self) -> &'static str {
        "Linux"
    }

    fn os_version(&self) -> Result<String> {
        let contents = std::fs::read_to_string(OS_RELEASE_PATH).map_err(|e| {
            PlatformVersionError::UnsupportedPlatform(format!(
                "failed to read {OS_RELEASE_PATH}: {e}"
            ))
        })?;

        let version = parse_os_release(&contents).ok_or_else(|| {
            PlatformVersionError::UnsupportedPlatform(format!(
                "{OS_RELEASE_PATH} carries no VERSION_ID or VERSION entry"
            ))
        })?;
        debug!("{OS_RELEASE_PATH} reported version {version}");
        Ok(version)
    }
}

/// Extract the version from os-release contents.
/// `VERSION_ID` is preferred; rolling distributions omit it, so `VERSION`
/// is accepted as a fallback.
fn parse_os_release(contents: &str) -> Option<String> {
    let mut version_id: Option<String> = None;
    let mut version: Option<String> = None;

    for line in contents.lines() {
        if line.starts_with("VERSION_ID=") {
            version_id = non_empty(line.trim_start_matches("VERSION_ID=").trim_matches('"'));
        } else if line.starts_with("VERSION=") {
            version = non_empty(line.trim_start_matches("VERSION=").trim_matches('"'));
        }
    }

    if version_id.is_none() && version.is_some() {
        warn!("no VERSION_ID in os-release, falling back to VERSION");
    }
    version_id.or(version)
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_prefers_version_id() {
        let contents = "NAME=\"Ubuntu\"\nVERSION=\"22.04.4 LTS (Jammy Jellyfish)\"\nVERSION_ID=\"22.04\"\n";
        assert_eq!(parse_os_release(contents).unwrap(), "22.04");
    }

    #[test]
    fn parse_falls_back_to_version() {
        let contents = "NAME=\"Debian GNU/Linux\"\nVERSION=\"12 (bookworm)\"\n";
        assert_eq!(parse_os_release(contents).unwrap(), "12 (bookworm)");
    }

    #[test]
    fn parse_handles_unquoted_values() {
        let contents = "NAME=Fedora\nVERSION_ID=40\n";
        assert_eq!(parse_os_release(contents).unwrap(), "40");
    }

    #[test]
    fn parse_returns_none_without_version_keys() {
        let contents = "NAME=\"Arch Linux\"\nID=arch\n";
        assert_eq!(parse_os_release(contents), None);
    }

    #[test]
    fn parse_ignores_empty_values() {
        let contents = "VERSION_ID=\"\"\nVERSION=\"12 (bookworm)\"\n";
        assert_eq!(parse_os_release(contents).unwrap(), "12 (bookworm)");
    }
}
