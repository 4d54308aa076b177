use crate::command::HeronCommand;
use crate::executor::{ExecutionResult, Executor};
use crate::helper::{self, TopologyArgs};
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::debug;

const ACTIVATE: &str = "activate";
const ABOUT: &str = "Activate a topology";
const ACTION: &str = "activate topology";

pub struct ActivateCommand;

impl HeronCommand for ActivateCommand {
    fn boxed() -> Box<Self> {
        Box::new(Self)
    }

    fn id(&self) -> &'static str {
        ACTIVATE
    }

    fn interface(&self) -> Result<Command> {
        Ok(helper::create_parser(ACTIVATE, ABOUT))
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
        debug!(
            "running {command} subcommand for {} on {}",
            topology.topology_name,
            topology.cluster_role_env()
        );
        executor.run(command, &topology, ACTION, &[])
    }
}
