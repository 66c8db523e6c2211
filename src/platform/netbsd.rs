use super::HostProbes;
use crate::detector::FirewallKind;
use tracing::debug;

pub fn detect(probes: &HostProbes<'_>) -> FirewallKind {
    for kind in [FirewallKind::Pf, FirewallKind::Npf] {
        let node = probes.config.dev_dir.join(kind.as_str());
        let present = probes.files.exists(&node);
        debug!("{} present: {}", node.display(), present);
        if present {
            return kind;
        }
    }
    // NetBSD's rc.conf spells the knob `ipfilter`, not `ipfilter_enable`.
    if probes.check_rc_flag("ipfilter") {
        return FirewallKind::Ipfilter;
    }
    FirewallKind::Pf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProbeConfig;
    use crate::host::{MockCommandRunner, MockConfigFileReader};
    use std::path::Path;

    fn devices(present: &'static [&'static str]) -> MockConfigFileReader {
        let mut files = MockConfigFileReader::new();
        files.expect_exists().returning(move |path: &Path| {
            present.iter().any(|name| path == Path::new("/dev").join(name).as_path())
        });
        files
    }

    fn run_detect(files: &MockConfigFileReader) -> FirewallKind {
        let runner = MockCommandRunner::new();
        let config = ProbeConfig::default();
        detect(&HostProbes {
            runner: &runner,
            files,
            config: &config,
        })
    }

    #[test]
    fn test_dev_pf_present() {
        let mut files = devices(&["pf"]);
        files.expect_read_lines().never();
        assert_eq!(run_detect(&files), FirewallKind::Pf);
    }

    #[test]
    fn test_pf_checked_before_npf() {
        let mut files = devices(&["pf", "npf"]);
        files.expect_read_lines().never();
        assert_eq!(run_detect(&files), FirewallKind::Pf);
    }

    #[test]
    fn test_dev_npf_present() {
        let mut files = devices(&["npf"]);
        files.expect_read_lines().never();
        assert_eq!(run_detect(&files), FirewallKind::Npf);
    }

    #[test]
    fn test_ipfilter_from_rc_conf() {
        let mut files = devices(&[]);
        files
            .expect_read_lines()
            .times(1)
            .returning(|_| Ok(vec!["ipfilter=\"YES\"".to_string()]));
        assert_eq!(run_detect(&files), FirewallKind::Ipfilter);
    }

    #[test]
    fn test_nothing_found_defaults_to_pf() {
        let mut files = devices(&[]);
        files
            .expect_read_lines()
            .times(1)
            .returning(|_| Ok(Vec::new()));
        assert_eq!(run_detect(&files), FirewallKind::Pf);
    }
}
