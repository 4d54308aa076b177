use crate::executor::{ExecutionResult, Executor};
use crate::registry::Registry;
use anyhow::Result;
use clap::{ArgMatches, Command};

pub trait HeronCommand {
    fn boxed() -> Box<Self>
    where
        Self: Sized;

    fn id(&self) -> &'static str;

    /// Builds the parser entry of the subcommand.
    fn interface(&self) -> Result<Command>;

    /// Runs the subcommand with the arguments parsed by its own entry.
    fn exec(
        &self,
        executor: &dyn Executor,
        command: &str,
        parser: &Command,
        matches: &ArgMatches,
        unknown_args: &[String],
    ) -> Result<ExecutionResult>;

    fn register(&self, registry: &mut Registry) -> Result<()> {
        registry.register(self.interface()?)
    }
}
