use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use std::path::Path;
use tracing::debug;

/// Per cluster client settings read from `<config-path>/<cluster>/cli.yaml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeronCliConfig {
    #[serde(default)]
    pub service_url: Option<String>,

    #[serde(default)]
    pub java_home: Option<String>,
}

impl HeronCliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            debug!("no cli config found at: {}", path.display());
            return Ok(Self::default());
        }
        debug!("loading cli config from: {}", path.display());
        let content = read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str(&content).map_err(|e| anyhow!(e))
    }
}
