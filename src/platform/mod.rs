// src/platform/mod.rs

mod freebsd;
mod linux;
mod netbsd;
mod openbsd;

use crate::config::ProbeConfig;
use crate::detector::FirewallKind;
use crate::host::{CommandRunner, ConfigFileReader};
use tracing::{debug, warn};

/// Operating system family, as the kernel reports its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformKind {
    Linux,
    FreeBSD,
    OpenBSD,
    NetBSD,
    Unsupported(String),
}

impl PlatformKind {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "linux" => PlatformKind::Linux,
            "freebsd" => PlatformKind::FreeBSD,
            "openbsd" => PlatformKind::OpenBSD,
            "netbsd" => PlatformKind::NetBSD,
            _ => PlatformKind::Unsupported(name.trim().to_string()),
        }
    }

    /// Query the running host.
    pub fn current() -> Self {
        Self::from_name(&host_system_name())
    }

    pub fn name(&self) -> &str {
        match self {
            PlatformKind::Linux => "Linux",
            PlatformKind::FreeBSD => "FreeBSD",
            PlatformKind::OpenBSD => "OpenBSD",
            PlatformKind::NetBSD => "NetBSD",
            PlatformKind::Unsupported(name) => name,
        }
    }
}

impl std::fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(unix)]
fn host_system_name() -> String {
    let mut uts: libc::utsname = unsafe { std::mem::zeroed() };
    if unsafe { libc::uname(&mut uts) } != 0 {
        warn!("uname failed, falling back to build target os");
        return std::env::consts::OS.to_string();
    }
    unsafe { std::ffi::CStr::from_ptr(uts.sysname.as_ptr()) }
        .to_string_lossy()
        .into_owned()
}

#[cfg(not(unix))]
fn host_system_name() -> String {
    std::env::consts::OS.to_string()
}

/// Everything a platform procedure may consult.
pub struct HostProbes<'a> {
    pub runner: &'a dyn CommandRunner,
    pub files: &'a dyn ConfigFileReader,
    pub config: &'a ProbeConfig,
}

impl HostProbes<'_> {
    /// True if some rc.conf line starts with exactly `<name>="YES"`.
    ///
    /// A missing or unreadable rc.conf counts as the flag being absent.
    pub fn check_rc_flag(&self, name: &str) -> bool {
        let path = &self.config.rc_conf;
        let lines = match self.files.read_lines(path) {
            Ok(lines) => lines,
            Err(e) => {
                warn!("Cannot read {}: {}", path.display(), e);
                return false;
            }
        };

        let needle = format!("{}=\"YES\"", name);
        let found = lines.iter().any(|line| line.starts_with(&needle));
        debug!("rc flag {} set: {}", name, found);
        found
    }
}

pub type Procedure = fn(&HostProbes<'_>) -> FirewallKind;

/// Fixed platform to procedure table.
pub fn procedure(platform: &PlatformKind) -> Option<Procedure> {
    match platform {
        PlatformKind::Linux => Some(linux::detect),
        PlatformKind::FreeBSD => Some(freebsd::detect),
        PlatformKind::OpenBSD => Some(openbsd::detect),
        PlatformKind::NetBSD => Some(netbsd::detect),
        PlatformKind::Unsupported(_) => None,
    }
}
