use crate::detector::FirewallKind;
use crate::error::Result;
use crate::platform::PlatformKind;
use colored::Colorize;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FirewallReport {
    pub firewall: FirewallKind,
}

#[derive(Debug, Serialize)]
pub struct FailureReport {
    pub failed: bool,
    pub msg: String,
}

impl FirewallReport {
    pub fn new(firewall: FirewallKind) -> Self {
        Self { firewall }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn display(&self, platform: &PlatformKind) {
        println!(
            "  {} {}  {} {}",
            "Platform:".bold(),
            platform.to_string().bright_cyan(),
            "Firewall:".bold(),
            self.firewall.as_str().bright_green().bold()
        );
    }
}

impl FailureReport {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            failed: true,
            msg: msg.into(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
