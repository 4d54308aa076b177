use crate::args::{self, CLEAN_STATEFUL_CHECKPOINTS};
use crate::command::HeronCommand;
use crate::executor::{ExecutionResult, Executor};
use crate::helper::{self, TopologyArgs};
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::debug;

const KILL: &str = "kill";
const ABOUT: &str = "Kill a topology";
const ACTION: &str = "kill topology";

struct KillArgs {
    clean_stateful_checkpoints: bool,
}

impl KillArgs {
    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            clean_stateful_checkpoints: args::flag(matches, CLEAN_STATEFUL_CHECKPOINTS)?,
        })
    }

    fn extra_args(&self) -> Vec<String> {
        let mut extra_args = vec![];
        if self.clean_stateful_checkpoints {
            extra_args.push(format!("--{CLEAN_STATEFUL_CHECKPOINTS}"));
        }
        extra_args
    }
}

pub struct KillCommand;

impl HeronCommand for KillCommand {
    fn boxed() -> Box<Self> {
        Box::new(Self)
    }

    fn id(&self) -> &'static str {
        KILL
    }

    fn interface(&self) -> Result<Command> {
        args::add_clean_stateful_checkpoints(helper::create_parser(KILL, ABOUT))
    }

    fn exec(
        &self,
        executor: &dyn Executor,
        command: &str,
        _parser: &Command,
        matches: &ArgMatches,
        _unknown_args: &[String],
    ) -> Result<ExecutionResult> {
        let topology = TopologyArgs::from_matches(matches)?;
        let extra_args = KillArgs::from_matches(matches)?.extra_args();

        debug!(
            "running {command} subcommand for {} on {} with extra arguments {:?}",
            topology.topology_name,
            topology.cluster_role_env(),
            extra_args
        );

        executor.run(command, &topology, ACTION, &extra_args)
    }
}
