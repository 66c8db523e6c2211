use crate::error::{FactsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FactsConfig {
    #[serde(default)]
    pub probes: ProbeConfig,
}

/// Where the detector looks when probing the host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Program used for `is-active` / `is-enabled` checks on Linux.
    pub systemctl: String,
    /// BSD rc-configuration file.
    pub rc_conf: PathBuf,
    /// Directory holding the NetBSD packet filter device nodes.
    pub dev_dir: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            systemctl: "systemctl".to_string(),
            rc_conf: PathBuf::from("/etc/rc.conf"),
            dev_dir: PathBuf::from("/dev"),
        }
    }
}

impl FactsConfig {
    /// Load from `path`, or from the user config directory when `path` is None.
    ///
    /// A missing default file yields defaults and is never created here; a
    /// missing explicit `path` is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => {
                return Err(FactsError::Config(format!("{} does not exist", p.display())));
            }
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            FactsError::Config(format!("failed to read {}: {}", config_path.display(), e))
        })?;
        Self::from_toml(&content)
            .map_err(|e| FactsError::Config(format!("{}: {}", config_path.display(), e)))
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FactsError::Config(e.to_string()))
    }

    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };

        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&config_path, self.to_toml()?)?;

        Ok(config_path)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("fwfacts")
            .join("config.toml")
    }
}
