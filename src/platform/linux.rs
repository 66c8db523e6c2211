use super::HostProbes;
use crate::detector::FirewallKind;
use crate::host::SystemCommand;
use tracing::debug;

/// Checked in this order; the first service that is active or enabled wins.
const CANDIDATES: [FirewallKind; 4] = [
    FirewallKind::Firewalld,
    FirewallKind::Nftables,
    FirewallKind::Iptables,
    FirewallKind::Shorewall,
];

pub fn detect(probes: &HostProbes<'_>) -> FirewallKind {
    CANDIDATES
        .into_iter()
        .find(|kind| is_service_active_or_enabled(probes, kind.as_str()))
        // native firewall
        .unwrap_or(FirewallKind::Iptables)
}

fn is_service_active_or_enabled(probes: &HostProbes<'_>, service: &str) -> bool {
    systemctl_succeeds(probes, "is-active", service)
        || systemctl_succeeds(probes, "is-enabled", service)
}

fn systemctl_succeeds(probes: &HostProbes<'_>, verb: &str, service: &str) -> bool {
    let command = SystemCommand::new(probes.config.systemctl.as_str())
        .arg(verb)
        .arg(service);

    match probes.runner.run(&command) {
        Ok(output) => {
            if !output.success() {
                debug!(
                    "`{}` exited with {}: {} {}",
                    command,
                    output.code,
                    output.stdout.trim(),
                    output.stderr.trim()
                );
            }
            output.success()
        }
        Err(e) => {
            debug!("`{}` could not run: {}", command, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProbeConfig;
    use crate::host::{CommandOutput, MockCommandRunner, MockConfigFileReader};
    use mockall::predicate::eq;
    use mockall::Sequence;
    use std::io;

    fn exit(code: i32) -> io::Result<CommandOutput> {
        Ok(CommandOutput {
            code,
            ..Default::default()
        })
    }

    fn systemctl(verb: &str, service: &str) -> SystemCommand {
        SystemCommand::new("systemctl").arg(verb).arg(service)
    }

    fn run_detect(runner: &MockCommandRunner) -> FirewallKind {
        // Linux never consults files.
        let files = MockConfigFileReader::new();
        let config = ProbeConfig::default();
        detect(&HostProbes {
            runner,
            files: &files,
            config: &config,
        })
    }

    #[test]
    fn test_active_firewalld_short_circuits() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .with(eq(systemctl("is-active", "firewalld")))
            .times(1)
            .returning(|_| exit(0));

        assert_eq!(run_detect(&runner), FirewallKind::Firewalld);
    }

    #[test]
    fn test_enabled_only_counts() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .with(eq(systemctl("is-active", "firewalld")))
            .times(1)
            .returning(|_| exit(3));
        runner
            .expect_run()
            .with(eq(systemctl("is-enabled", "firewalld")))
            .times(1)
            .returning(|_| exit(0));

        assert_eq!(run_detect(&runner), FirewallKind::Firewalld);
    }

    #[test]
    fn test_priority_order_and_stop_at_first_match() {
        let mut seq = Sequence::new();
        let mut runner = MockCommandRunner::new();
        for (verb, service, code) in [
            ("is-active", "firewalld", 3),
            ("is-enabled", "firewalld", 1),
            ("is-active", "nftables", 3),
            ("is-enabled", "nftables", 1),
            ("is-active", "iptables", 3),
            ("is-enabled", "iptables", 1),
            ("is-active", "shorewall", 0),
        ] {
            runner
                .expect_run()
                .with(eq(systemctl(verb, service)))
                .times(1)
                .in_sequence(&mut seq)
                .returning(move |_| exit(code));
        }

        assert_eq!(run_detect(&runner), FirewallKind::Shorewall);
    }

    #[test]
    fn test_nftables_beats_iptables() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd: &SystemCommand| cmd.args[1] == "firewalld")
            .times(2)
            .returning(|_| exit(4));
        runner
            .expect_run()
            .with(eq(systemctl("is-active", "nftables")))
            .times(1)
            .returning(|_| exit(0));

        assert_eq!(run_detect(&runner), FirewallKind::Nftables);
    }

    #[test]
    fn test_nothing_active_defaults_to_iptables() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(8).returning(|_| exit(1));

        assert_eq!(run_detect(&runner), FirewallKind::Iptables);
    }

    #[test]
    fn test_missing_systemctl_defaults_to_iptables() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(8).returning(|_| {
            Err(io::Error::new(io::ErrorKind::NotFound, "systemctl not found"))
        });

        assert_eq!(run_detect(&runner), FirewallKind::Iptables);
    }

    #[test]
    fn test_configured_systemctl_path_is_used() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd: &SystemCommand| cmd.program == "/usr/bin/systemctl")
            .times(1)
            .returning(|_| exit(0));

        let files = MockConfigFileReader::new();
        let config = ProbeConfig {
            systemctl: "/usr/bin/systemctl".to_string(),
            ..Default::default()
        };
        let kind = detect(&HostProbes {
            runner: &runner,
            files: &files,
            config: &config,
        });
        assert_eq!(kind, FirewallKind::Firewalld);
    }
}
