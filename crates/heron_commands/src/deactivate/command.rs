use crate::command::HeronCommand;
use crate::executor::{ExecutionResult, Executor};
use crate::helper::{self, TopologyArgs};
use anyhow::Result;
use clap::{ArgMatches, Command};
use tracing::debug;

const DEACTIVATE: &str = "deactivate";
const ABOUT: &str = "Deactivate a topology";
const ACTION: &str = "deactivate topology";

pub struct DeactivateCommand;

impl HeronCommand for DeactivateCommand {
    fn boxed() -> Box<Self> {
        Box::new(Self)
    }

    fn id(&self) -> &'static str {
        DEACTIVATE
    }

    fn interface(&self) -> Result<Command> {
        Ok(helper::create_parser(DEACTIVATE, ABOUT))
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_deactivate_topology_name_arg_accepts_value() {
        let command = DeactivateCommand::boxed().interface().unwrap();
        let matches = command.get_matches_from(["deactivate", "local", "word-count"]);

        assert_eq!(
            matches.get_one::<String>(helper::TOPOLOGY_NAME),
            Some(&"word-count".to_string())
        )
    }
}
