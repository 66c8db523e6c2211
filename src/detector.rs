use crate::config::ProbeConfig;
use crate::error::{FactsError, Result};
use crate::host::{CommandRunner, ConfigFileReader};
use crate::platform::{self, HostProbes, PlatformKind};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirewallKind {
    Firewalld,
    Nftables,
    Iptables,
    Shorewall,
    Pf,
    Ipfilter,
    Ipfw,
    Npf,
}

impl FirewallKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FirewallKind::Firewalld => "firewalld",
            FirewallKind::Nftables => "nftables",
            FirewallKind::Iptables => "iptables",
            FirewallKind::Shorewall => "shorewall",
            FirewallKind::Pf => "pf",
            FirewallKind::Ipfilter => "ipfilter",
            FirewallKind::Ipfw => "ipfw",
            FirewallKind::Npf => "npf",
        }
    }
}

impl std::fmt::Display for FirewallKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct FirewallDetector<'a> {
    runner: &'a dyn CommandRunner,
    files: &'a dyn ConfigFileReader,
    config: ProbeConfig,
}

impl<'a> FirewallDetector<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        files: &'a dyn ConfigFileReader,
        config: ProbeConfig,
    ) -> Self {
        Self {
            runner,
            files,
            config,
        }
    }

    /// Decide which firewall `platform` is using.
    ///
    /// Only an unsupported platform is an error; every probe failure along
    /// the way falls through to the next candidate or the platform default.
    pub fn detect(&self, platform: &PlatformKind) -> Result<FirewallKind> {
        let procedure = platform::procedure(platform)
            .ok_or_else(|| FactsError::UnsupportedPlatform(platform.to_string()))?;

        let probes = HostProbes {
            runner: self.runner,
            files: self.files,
            config: &self.config,
        };
        let kind = procedure(&probes);

        info!("Detected {} firewall on {}", kind, platform);
        Ok(kind)
    }
}
