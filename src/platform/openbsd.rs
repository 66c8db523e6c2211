use super::HostProbes;
use crate::detector::FirewallKind;

/// OpenBSD only ships pf.
pub fn detect(_probes: &HostProbes<'_>) -> FirewallKind {
    FirewallKind::Pf
}
