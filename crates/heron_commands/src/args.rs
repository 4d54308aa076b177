use anyhow::{anyhow, Error, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::any::Any;

pub const CLEAN_STATEFUL_CHECKPOINTS: &str = "clean_stateful_checkpoints";
pub const CONTAINER_ID: &str = "container-id";
pub const CONTAINER_ID_ALL: &str = "-1";

pub fn err_duplicate_argument(parser: &str, id: &str) -> Error {
    anyhow!("argument {id} is already defined for subcommand {parser}")
}

pub fn err_missing_argument(id: &str) -> Error {
    anyhow!("argument {id} is missing from the parsed arguments")
}

fn ensure_undefined(parser: &Command, id: &str) -> Result<()> {
    if parser.get_arguments().any(|a| a.get_id().as_str() == id) {
        return Err(err_duplicate_argument(parser.get_name(), id));
    }
    Ok(())
}

pub fn add_clean_stateful_checkpoints(parser: Command) -> Result<Command> {
    ensure_undefined(&parser, CLEAN_STATEFUL_CHECKPOINTS)?;
    let arg = Arg::new(CLEAN_STATEFUL_CHECKPOINTS)
        .long(CLEAN_STATEFUL_CHECKPOINTS)
        .action(ArgAction::SetTrue)
        .help("Clean all the stateful checkpoints of the topology");
    Ok(parser.arg(arg))
}

pub fn add_container_id(parser: Command) -> Result<Command> {
    ensure_undefined(&parser, CONTAINER_ID)?;
    let arg = Arg::new(CONTAINER_ID)
        .value_name("container-id")
        .action(ArgAction::Set)
        .value_parser(value_parser!(i64))
        .allow_negative_numbers(true)
        .default_value(CONTAINER_ID_ALL)
        .help("Identifier of the container to restart, all containers when omitted");
    Ok(parser.arg(arg))
}

/// Reads a boolean flag. A flag the parser never declared is an error rather
/// than a silent `false`.
pub fn flag(matches: &ArgMatches, id: &str) -> Result<bool> {
    matches
        .try_get_one::<bool>(id)
        .map_err(|_| err_missing_argument(id))?
        .copied()
        .ok_or_else(|| err_missing_argument(id))
}

pub fn required<'a, T>(matches: &'a ArgMatches, id: &str) -> Result<&'a T>
where
    T: Any + Clone + Send + Sync + 'static,
{
    optional(matches, id)?.ok_or_else(|| err_missing_argument(id))
}

pub fn optional<'a, T>(matches: &'a ArgMatches, id: &str) -> Result<Option<&'a T>>
where
    T: Any + Clone + Send + Sync + 'static,
{
    matches
        .try_get_one::<T>(id)
        .map_err(|_| err_missing_argument(id))
}

pub fn many<T>(matches: &ArgMatches, id: &str) -> Result<Vec<T>>
where
    T: Any + Clone + Send + Sync + 'static,
{
    Ok(matches
        .try_get_many::<T>(id)
        .map_err(|_| err_missing_argument(id))?
        .map(|values| values.cloned().collect())
        .unwrap_or_default())
}
