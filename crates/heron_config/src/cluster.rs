use crate::definitions::DEFAULT_ENVIRON;
use anyhow::{anyhow, Error, Result};
use std::fmt::{Display, Formatter};

pub fn err_cluster_role_env_format(value: &str) -> Error {
    anyhow!("invalid cluster/[role]/[env] value: {value}")
}

/// The scheduling coordinates of a topology, given on the command line as
/// `cluster[/role[/env]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterRoleEnv {
    pub cluster: String,
    pub role: String,
    pub environ: String,
}

impl ClusterRoleEnv {
    /// Parses the value, falling back to `default_role` and the default
    /// environment for missing components.
    pub fn parse(value: &str, default_role: &str) -> Result<Self> {
        let parts: Vec<&str> = value.split('/').collect();
        if parts.len() > 3 || parts.iter().any(|p| p.trim().is_empty()) {
            return Err(err_cluster_role_env_format(value));
        }

        let cluster = parts[0].to_owned();
        let role = parts.get(1).copied().unwrap_or(default_role).to_owned();
        let environ = parts.get(2).copied().unwrap_or(DEFAULT_ENVIRON).to_owned();

        Ok(Self {
            cluster,
            role,
            environ,
        })
    }
}

impl Display for ClusterRoleEnv {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.cluster, self.role, self.environ)
    }
}
