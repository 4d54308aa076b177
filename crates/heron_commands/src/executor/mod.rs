mod direct;
#[cfg(test)]
pub(crate) mod recording;
mod server;

pub use direct::*;
pub use server::*;

use crate::helper::TopologyArgs;
use anyhow::Result;
use heron_config::{DeployMode, HeronCliConfig, HeronConfig};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    InvocationError,
    HeronError,
}

impl Status {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::InvocationError | Self::HeronError => 1,
        }
    }
}

/// The uniform outcome of running a topology subcommand against a cluster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub status: Status,
    pub message: String,
    pub detail: Option<String>,
}

impl ExecutionResult {
    pub fn success(action: &str, topology: &str, detail: Option<String>) -> Self {
        Self {
            status: Status::Ok,
            message: format!("Successfully {action}: {topology}"),
            detail,
        }
    }

    pub fn failure(status: Status, action: &str, topology: &str, detail: Option<String>) -> Self {
        Self {
            status,
            message: format!("Failed to {action}: {topology}"),
            detail,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Ok
    }
}

pub trait Executor {
    /// Runs `command` for the topology. `args` holds only the arguments every
    /// topology subcommand shares. Flags of a single subcommand, such as
    /// kill's `--clean_stateful_checkpoints`, arrive through `extra_args`.
    fn run(
        &self,
        command: &str,
        args: &TopologyArgs,
        action: &str,
        extra_args: &[String],
    ) -> Result<ExecutionResult>;
}

/// Resolves the runner for the topology's cluster and delegates to it.
#[derive(Debug, Default)]
pub struct RuntimeExecutor;

impl RuntimeExecutor {
    /// Reads the cluster's cli config and picks how requests are run.
    pub fn deploy_mode(
        config: &HeronConfig,
        args: &TopologyArgs,
    ) -> Result<(HeronCliConfig, DeployMode)> {
        let cli = config.cluster(&args.cluster)?;
        let mode = config.deploy_mode(&args.cluster, &cli, args.service_url.as_deref())?;
        debug!("running in {mode} mode for cluster {}", args.cluster);
        Ok((cli, mode))
    }

    fn runner(&self, args: &TopologyArgs) -> Result<Box<dyn Executor>> {
        let config =
            HeronConfig::load(args.heron_home.as_deref(), args.config_path.as_deref())?;
        let (cli, mode) = Self::deploy_mode(&config, args)?;

        Ok(match mode {
            DeployMode::Direct => Box::new(DirectRunner::new(config, cli)),
            DeployMode::Server { service_url } => Box::new(ServerRunner::new(service_url)),
        })
    }
}

impl Executor for RuntimeExecutor {
    fn run(
        &self,
        command: &str,
        args: &TopologyArgs,
        action: &str,
        extra_args: &[String],
    ) -> Result<ExecutionResult> {
        self.runner(args)?.run(command, args, action, extra_args)
    }
}
