use super::HostProbes;
use crate::detector::FirewallKind;

pub fn detect(probes: &HostProbes<'_>) -> FirewallKind {
    for kind in [FirewallKind::Pf, FirewallKind::Ipfilter] {
        if probes.check_rc_flag(&format!("{}_enable", kind.as_str())) {
            return kind;
        }
    }
    if probes.check_rc_flag("firewall_enable") {
        return FirewallKind::Ipfw;
    }
    // ipfw is the native one
    FirewallKind::Ipfw
}
