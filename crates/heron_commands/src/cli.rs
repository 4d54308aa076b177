use crate::activate::ActivateCommand;
use crate::command::HeronCommand;
use crate::deactivate::DeactivateCommand;
use crate::executor::{ExecutionResult, Executor};
use crate::helper;
use crate::kill::KillCommand;
use crate::registry::Registry;
use crate::restart::RestartCommand;
use anyhow::{anyhow, Error, Result};
use clap::{ArgMatches, Command};
use heron_config::definitions::{TOOL_NAME, VERSION};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

pub fn err_unknown_subcommand(id: &str) -> Error {
    anyhow!("unknown subcommand {id}")
}

pub fn err_no_subcommand() -> Error {
    anyhow!("no subcommand given")
}

/// Holds every subcommand of the tool and routes invocations to them by name.
pub struct Router {
    commands: Vec<Box<dyn HeronCommand>>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        let commands: Vec<Box<dyn HeronCommand>> = vec![
            ActivateCommand::boxed(),
            DeactivateCommand::boxed(),
            KillCommand::boxed(),
            RestartCommand::boxed(),
        ];
        Self { commands }
    }

    /// Registers every subcommand and returns the frozen root parser.
    pub fn interface(&self) -> Result<Command> {
        let root = Command::new(TOOL_NAME)
            .version(VERSION)
            .about("Manage topologies running on a heron cluster")
            .subcommand_required(true)
            .arg_required_else_help(true);

        let mut registry = Registry::new(root);
        for command in &self.commands {
            command.register(&mut registry)?;
        }
        Ok(registry.freeze())
    }

    pub fn dispatch(
        &self,
        executor: &dyn Executor,
        cli: &Command,
        matches: &ArgMatches,
    ) -> Result<ExecutionResult> {
        let (id, matches) = matches.subcommand().ok_or_else(err_no_subcommand)?;
        let command = self
            .commands
            .iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| err_unknown_subcommand(id))?;
        let parser = cli
            .find_subcommand(id)
            .ok_or_else(|| err_unknown_subcommand(id))?;
        let unknown_args = helper::unknown_args(matches)?;

        debug!("dispatching subcommand {id}");
        command.exec(executor, id, parser, matches, &unknown_args)
    }

    pub fn tracing_level(matches: &ArgMatches) -> Result<LevelFilter> {
        let (_, matches) = matches.subcommand().ok_or_else(err_no_subcommand)?;
        if helper::verbose(matches)? {
            Ok(LevelFilter::DEBUG)
        } else {
            Ok(LevelFilter::INFO)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;
    use crate::executor::recording::RecordingExecutor;

    fn dispatch(argv: &[&str]) -> (RecordingExecutor, Result<ExecutionResult>) {
        let router = Router::new();
        let cli = router.interface().unwrap();
        let matches = cli.clone().get_matches_from(argv);
        let executor = RecordingExecutor::default();
        let result = router.dispatch(&executor, &cli, &matches);
        (executor, result)
    }

    #[test]
    fn interface_registers_every_subcommand() {
        let cli = Router::new().interface().unwrap();
        let names: Vec<&str> = cli.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(names, vec!["activate", "deactivate", "kill", "restart"]);
    }

    #[test]
    fn kill_is_routed_by_name() {
        let (executor, result) = dispatch(&[
            "heron",
            "kill",
            "local",
            "word-count",
            "--clean_stateful_checkpoints",
        ]);
        assert!(result.unwrap().is_success());

        let recorded = executor.last();
        assert_eq!(recorded.command, "kill");
        assert_eq!(recorded.action, "kill topology");
        assert_eq!(recorded.extra_args, vec!["--clean_stateful_checkpoints"]);
    }

    #[test]
    fn kill_flag_is_not_accepted_by_other_subcommands() {
        let cli = Router::new().interface().unwrap();
        let result = cli.try_get_matches_from([
            "heron",
            "activate",
            "local",
            "word-count",
            "--clean_stateful_checkpoints",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_args_after_separator_are_accepted() {
        let (executor, result) = dispatch(&["heron", "kill", "local", "word-count", "--", "--x"]);
        assert!(result.is_ok());
        assert!(executor.last().extra_args.is_empty());
    }

    #[test]
    fn unknown_subcommand_is_rejected_by_parser() {
        let cli = Router::new().interface().unwrap();
        assert!(cli.try_get_matches_from(["heron", "submit"]).is_err());
    }

    #[test]
    fn dispatch_without_registered_command_fails() {
        let router = Router { commands: vec![] };
        let cli = Router::new().interface().unwrap();
        let matches = cli.clone().get_matches_from(["heron", "kill", "local", "word-count"]);
        let executor = RecordingExecutor::default();
        assert!(router.dispatch(&executor, &cli, &matches).is_err());
    }

    #[test]
    fn verbose_subcommand_enables_debug_tracing() {
        let cli = Router::new().interface().unwrap();
        let verbose = cli
            .clone()
            .get_matches_from(["heron", "kill", "local", "word-count", "--verbose"]);
        let quiet = cli.get_matches_from(["heron", "kill", "local", "word-count"]);
        assert_eq!(Router::tracing_level(&verbose).unwrap(), LevelFilter::DEBUG);
        assert_eq!(Router::tracing_level(&quiet).unwrap(), LevelFilter::INFO);
    }

    #[test]
    fn subcommand_without_verbose_flag_fails_tracing_level() {
        let cli = Command::new("heron").subcommand(Command::new("kill"));
        let matches = cli.get_matches_from(["heron", "kill"]);
        assert!(Router::tracing_level(&matches).is_err());
    }

    #[test]
    fn dispatch_fails_when_passthrough_is_undeclared() {
        let router = Router::new();
        let kill = helper::create_parser("kill", "Kill a topology");
        let cli = Command::new("heron")
            .subcommand(args::add_clean_stateful_checkpoints(kill).unwrap());
        let matches = cli
            .clone()
            .get_matches_from(["heron", "kill", "local", "word-count"]);
        let executor = RecordingExecutor::default();
        assert!(router.dispatch(&executor, &cli, &matches).is_err());
        assert!(executor.requests.borrow().is_empty());
    }
}
