//! Windows version probe.
//! Reads the OS version via `RtlGetVersion`, which reports the true version
//! even when the process runs under a compatibility shim.

use std::mem::size_of;

use tracing::debug;
use windows_sys::Wdk::System::SystemServices::RtlGetVersion;
use windows_sys::Win32::System::SystemInformation::OSVERSIONINFOW;

use crate::{PlatformVersionError, Result, VersionProbe};

#[derive(Default)]
pub struct WindowsProbe;

impl WindowsProbe {
    pub fn new() -> Self {
        Self
    }
}

impl VersionProbe for WindowsProbe {
    fn platform_name(&self) -> &'static str {
        "Windows"
    }

    fn os_version(&self) -> Result<String> {
        let mut info: OSVERSIONINFOW = unsafe { std::mem::zeroed() };
        info.dwOSVersionInfoSize = size_of::<OSVERSIONINFOW>() as u32;

        let status = unsafe { RtlGetVersion(&mut info) };
        if status != 0 {
            return Err(PlatformVersionError::UnsupportedPlatform(format!(
                "RtlGetVersion failed with status {status:#010x}"
            )));
        }

        let version = format_version(info.dwMajorVersion, info.dwMinorVersion, info.dwBuildNumber);
        debug!("RtlGetVersion reported {version}");
        Ok(version)
    }
}

fn format_version(major: u32, minor: u32, build: u32) -> String {
    format!("{major}.{minor}.{build}")
}
