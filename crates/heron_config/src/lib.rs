#[macro_use]
mod path;

mod cli;
mod cluster;
pub mod definitions;
mod mode;

pub use cli::*;
pub use cluster::*;
pub use mode::*;

use anyhow::{anyhow, Error, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn err_no_home_dir() -> Error {
    anyhow!("could not resolve the heron home directory")
}

pub fn err_cluster_dir_not_found(path: &Path) -> Error {
    anyhow!("cluster config directory does not exist: {}", path.display())
}

/// The user that submits requests to the cluster.
pub fn current_user() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| definitions::DEFAULT_USER.to_owned())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeronConfig {
    pub heron_home: PathBuf,
    pub config_path: PathBuf,
}

/// Picks the heron home: the explicit path, then `HERON_HOME`, then
/// `~/.heron`.
pub fn resolve_heron_home(
    explicit: Option<&str>,
    env_home: Option<String>,
    user_home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(home) = explicit {
        return Ok(PathBuf::from(home));
    }
    if let Some(home) = env_home.filter(|home| !home.trim().is_empty()) {
        return Ok(PathBuf::from(home));
    }
    user_home
        .map(|home| path![home, definitions::DEFAULT_HERON_DIR])
        .ok_or_else(err_no_home_dir)
}

impl HeronConfig {
    pub fn load(heron_home: Option<&str>, config_path: Option<&str>) -> Result<Self> {
        let heron_home = resolve_heron_home(
            heron_home,
            env::var(definitions::HERON_HOME_ENV).ok(),
            dirs::home_dir(),
        )?;
        let config_path = config_path
            .map(PathBuf::from)
            .unwrap_or_else(|| path![&heron_home, definitions::DEFAULT_CONFIG_DIR]);

        debug!("heron home: {}", heron_home.display());
        debug!("config path: {}", config_path.display());

        Ok(Self::new(heron_home, config_path))
    }

    pub fn new(heron_home: PathBuf, config_path: PathBuf) -> Self {
        Self {
            heron_home,
            config_path,
        }
    }

    pub fn cluster_dir(&self, cluster: &str) -> PathBuf {
        path![&self.config_path, cluster]
    }

    pub fn cluster(&self, cluster: &str) -> Result<HeronCliConfig> {
        HeronCliConfig::load(&path![
            self.cluster_dir(cluster),
            definitions::CLI_CONFIG_FILE
        ])
    }

    pub fn release_file(&self) -> PathBuf {
        path![&self.heron_home, definitions::RELEASE_FILE]
    }

    /// Classpath entries for the runtime manager.
    pub fn lib_jars(&self) -> Vec<PathBuf> {
        [
            definitions::LIB_SCHEDULER_DIR,
            definitions::LIB_STATEMGR_DIR,
            definitions::LIB_PACKING_DIR,
        ]
        .iter()
        .map(|dir| path![&self.heron_home, dir, "*"])
        .collect()
    }

    pub fn java(&self, cli: &HeronCliConfig) -> PathBuf {
        cli.java_home
            .clone()
            .or_else(|| env::var(definitions::JAVA_HOME_ENV).ok())
            .map(|home| path![home, "bin", "java"])
            .unwrap_or_else(|| PathBuf::from("java"))
    }

    /// An explicit service url wins over the one in the cluster's cli config.
    /// Without either, requests are run directly which requires the cluster's
    /// config directory.
    pub fn deploy_mode(
        &self,
        cluster: &str,
        cli: &HeronCliConfig,
        service_url: Option<&str>,
    ) -> Result<DeployMode> {
        if let Some(service_url) = service_url.or(cli.service_url.as_deref()) {
            return Ok(DeployMode::Server {
                service_url: service_url.to_owned(),
            });
        }

        let cluster_dir = self.cluster_dir(cluster);
        if !cluster_dir.is_dir() {
            return Err(err_cluster_dir_not_found(&cluster_dir));
        }
        Ok(DeployMode::Direct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> HeronConfig {
        let home = dir.path().to_path_buf();
        let conf = path![&home, definitions::DEFAULT_CONFIG_DIR];
        HeronConfig::new(home, conf)
    }

    #[test]
    fn explicit_heron_home_wins() {
        let home = resolve_heron_home(
            Some("/opt/heron"),
            Some("/srv/heron".to_owned()),
            Some(PathBuf::from("/home/alice")),
        )
        .unwrap();
        assert_eq!(home, PathBuf::from("/opt/heron"));
    }

    #[test]
    fn heron_home_env_comes_before_user_home() {
        let home = resolve_heron_home(
            None,
            Some("/srv/heron".to_owned()),
            Some(PathBuf::from("/home/alice")),
        )
        .unwrap();
        assert_eq!(home, PathBuf::from("/srv/heron"));
    }

    #[test]
    fn heron_home_falls_back_to_user_home() {
        let home = resolve_heron_home(None, None, Some(PathBuf::from("/home/alice"))).unwrap();
        assert_eq!(home, path!["/home/alice", definitions::DEFAULT_HERON_DIR]);

        let home =
            resolve_heron_home(None, Some(" ".to_owned()), Some(PathBuf::from("/home/alice")))
                .unwrap();
        assert_eq!(home, path!["/home/alice", definitions::DEFAULT_HERON_DIR]);
    }

    #[test]
    fn heron_home_without_any_source_is_an_error() {
        assert!(resolve_heron_home(None, None, None).is_err());
    }

    #[test]
    fn load_uses_explicit_home_and_default_config_dir() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().to_str().unwrap();
        let config = HeronConfig::load(Some(home), None).unwrap();
        assert_eq!(config.heron_home, dir.path().to_path_buf());
        assert_eq!(
            config.config_path,
            path![dir.path(), definitions::DEFAULT_CONFIG_DIR]
        );

        let config = HeronConfig::load(Some(home), Some("/etc/heron")).unwrap();
        assert_eq!(config.config_path, PathBuf::from("/etc/heron"));
    }

    #[test]
    fn missing_cli_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        assert_eq!(config.cluster("local").unwrap(), HeronCliConfig::default());
    }

    #[test]
    fn cli_config_is_read_from_cluster_dir() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::create_dir_all(config.cluster_dir("aurora")).unwrap();
        fs::write(
            path![config.cluster_dir("aurora"), definitions::CLI_CONFIG_FILE],
            "service_url: http://apiserver:9000\n",
        )
        .unwrap();

        let cli = config.cluster("aurora").unwrap();
        assert_eq!(cli.service_url.as_deref(), Some("http://apiserver:9000"));
        assert_eq!(cli.java_home, None);
    }

    #[test]
    fn explicit_service_url_selects_server_mode() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let mode = config
            .deploy_mode("local", &HeronCliConfig::default(), Some("http://host:9000"))
            .unwrap();
        assert_eq!(
            mode,
            DeployMode::Server {
                service_url: "http://host:9000".to_owned()
            }
        );
    }

    #[test]
    fn cli_config_service_url_selects_server_mode() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let cli = HeronCliConfig {
            service_url: Some("http://apiserver:9000".to_owned()),
            java_home: None,
        };
        let mode = config.deploy_mode("local", &cli, None).unwrap();
        assert!(matches!(mode, DeployMode::Server { .. }));
    }

    #[test]
    fn direct_mode_requires_cluster_dir() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let cli = HeronCliConfig::default();
        assert!(config.deploy_mode("local", &cli, None).is_err());

        fs::create_dir_all(config.cluster_dir("local")).unwrap();
        assert_eq!(
            config.deploy_mode("local", &cli, None).unwrap(),
            DeployMode::Direct
        );
    }

    #[test]
    fn java_prefers_cli_config_java_home() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let cli = HeronCliConfig {
            service_url: None,
            java_home: Some("/opt/jdk".to_owned()),
        };
        assert_eq!(config.java(&cli), path!["/opt/jdk", "bin", "java"]);
    }

    #[test]
    fn lib_jars_live_under_heron_home() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let jars = config.lib_jars();
        assert_eq!(jars.len(), 3);
        assert!(jars.iter().all(|jar| jar.starts_with(&config.heron_home)));
    }
}
