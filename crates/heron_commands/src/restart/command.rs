use crate::args::{self, CONTAINER_ID};
use crate::command::HeronCommand;
use crate::executor::{ExecutionResult, Executor};
use crate::helper::{self, TopologyArgs};
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::debug;

const RESTART: &str = "restart";
const ABOUT: &str = "Restart a topology";
const ACTION: &str = "restart topology";

struct RestartArgs {
    container_id: i64,
}

impl RestartArgs {
    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            container_id: *args::required::<i64>(matches, CONTAINER_ID)?,
        })
    }

    fn extra_args(&self) -> Vec<String> {
        vec!["--container_id".to_owned(), self.container_id.to_string()]
    }
}

pub struct RestartCommand;

impl HeronCommand for RestartCommand {
    fn boxed() -> Box<Self> {
        Box::new(Self)
    }

    fn id(&self) -> &'static str {
        RESTART
    }

    fn interface(&self) -> Result<Command> {
        args::add_container_id(helper::create_parser(RESTART, ABOUT))
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
        let extra_args = RestartArgs::from_matches(matches)?.extra_args();

        debug!(
            "running {command} subcommand for {} on {} with extra arguments {:?}",
            topology.topology_name,
            topology.cluster_role_env(),
            extra_args
        );

        executor.run(command, &topology, ACTION, &extra_args)
    }
}
