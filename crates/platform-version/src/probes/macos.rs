//! macOS version probe.
//! Reads the product version from `sw_vers`.

use std::process::Command;

use tracing::debug;

use crate::{PlatformVersionError, Result, VersionProbe};

#[derive(Default)]
pub struct MacosProbe;

impl MacosProbe {
    pub fn new() -> Self {
        Self
    }
}

impl VersionProbe for MacosProbe {
    fn platform_name(&self) -> &'static str {
        "macOS"
    }

    fn os_version(&self) -> Result<String> {
        let output = Command::new("sw_vers")
            .arg("-productVersion")
            .output()
            .map_err(|e| {
                PlatformVersionError::UnsupportedPlatform(format!("failed to run sw_vers: {e}"))
            })?;

        if !output.status.success() {
            return Err(PlatformVersionError::UnsupportedPlatform(format!(
                "sw_vers exited with {}",
                output.status
            )));
        }

        let version = parse_product_version(&output.stdout)?;
        debug!("sw_vers reported product version {version}");
        Ok(version)
    }
}

fn parse_product_version(raw: &[u8]) -> Result<String> {
    let version = String::from_utf8_lossy(raw).trim().to_string();
    if version.is_empty() {
        return Err(PlatformVersionError::UnsupportedPlatform(
            "sw_vers produced no version output".to_string(),
        ));
    }
    Ok(version)
}
