use crate::args;
use anyhow::{anyhow, Error, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use heron_config::definitions::{TOOL_NAME, VERSION};
use heron_config::{current_user, ClusterRoleEnv};

pub const CLUSTER_ROLE_ENV: &str = "cluster-role-env";
pub const TOPOLOGY_NAME: &str = "topology-name";
pub const HERON_HOME: &str = "heron-home";
pub const CONFIG_PATH: &str = "config-path";
pub const CONFIG_PROPERTY: &str = "config-property";
pub const SERVICE_URL: &str = "service-url";
pub const VERBOSE: &str = "verbose";
pub const UNKNOWN_ARGS: &str = "unknown-args";

pub fn err_config_property_format(value: &str) -> Error {
    anyhow!("invalid config property {value}, expected key=value")
}

/// Creates the parser entry for a topology subcommand with the arguments every
/// such subcommand shares.
pub fn create_parser(name: &'static str, description: &'static str) -> Command {
    let cluster_role_env = Arg::new(CLUSTER_ROLE_ENV)
        .value_name("cluster/[role]/[env]")
        .required(true)
        .action(ArgAction::Set)
        .help("Cluster, role, and environment to run the topology in");

    let topology_name = Arg::new(TOPOLOGY_NAME)
        .value_name(TOPOLOGY_NAME)
        .required(true)
        .action(ArgAction::Set)
        .help("Name of the topology");

    let heron_home = Arg::new(HERON_HOME)
        .long(HERON_HOME)
        .action(ArgAction::Set)
        .help("Path to the heron installation, HERON_HOME or ~/.heron when omitted");

    let config_path = Arg::new(CONFIG_PATH)
        .long(CONFIG_PATH)
        .action(ArgAction::Set)
        .help("Path to the cluster configuration directory");

    let config_property = Arg::new(CONFIG_PROPERTY)
        .long(CONFIG_PROPERTY)
        .value_name("key=value")
        .action(ArgAction::Append)
        .help("A configuration property override. Can be used multiple times");

    let service_url = Arg::new(SERVICE_URL)
        .long(SERVICE_URL)
        .action(ArgAction::Set)
        .help("The url of the heron API server");

    let verbose = Arg::new(VERBOSE)
        .long(VERBOSE)
        .action(ArgAction::SetTrue)
        .help("Sets the level of verbosity");

    Command::new(name)
        .about(description)
        .version(VERSION)
        .override_usage(format!(
            "{TOOL_NAME} {name} [options] cluster/[role]/[env] <topology-name>"
        ))
        .args(&[
            cluster_role_env,
            topology_name,
            heron_home,
            config_path,
            config_property,
            service_url,
            verbose,
        ])
}

/// Collects whatever follows `--` so that subcommands can pass it through.
/// Unrecognized flags before the separator are still parse errors, so
/// `kill local wc --foo` fails where `kill local wc -- --foo` is accepted.
pub fn add_unknown_args(parser: Command) -> Command {
    let unknown = Arg::new(UNKNOWN_ARGS)
        .num_args(1..)
        .last(true)
        .allow_hyphen_values(true)
        .action(ArgAction::Append)
        .hide(true);
    parser.arg(unknown)
}

pub fn unknown_args(matches: &ArgMatches) -> Result<Vec<String>> {
    args::many::<String>(matches, UNKNOWN_ARGS)
}

/// The arguments shared by every topology subcommand, handed unchanged to the
/// executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyArgs {
    pub cluster: String,
    pub role: String,
    pub environ: String,
    pub topology_name: String,
    pub submit_user: String,
    pub heron_home: Option<String>,
    pub config_path: Option<String>,
    pub config_properties: Vec<(String, String)>,
    pub service_url: Option<String>,
    pub verbose: bool,
}

impl TopologyArgs {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let submit_user = current_user();
        let cluster_role_env = args::required::<String>(matches, CLUSTER_ROLE_ENV)?;
        let ClusterRoleEnv {
            cluster,
            role,
            environ,
        } = ClusterRoleEnv::parse(cluster_role_env, &submit_user)?;

        let config_properties = args::many::<String>(matches, CONFIG_PROPERTY)?
            .iter()
            .map(|property| parse_config_property(property))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            cluster,
            role,
            environ,
            topology_name: args::required::<String>(matches, TOPOLOGY_NAME)?.to_owned(),
            submit_user,
            heron_home: args::optional::<String>(matches, HERON_HOME)?.cloned(),
            config_path: args::optional::<String>(matches, CONFIG_PATH)?.cloned(),
            config_properties,
            service_url: args::optional::<String>(matches, SERVICE_URL)?.cloned(),
            verbose: args::flag(matches, VERBOSE)?,
        })
    }

    pub fn cluster_role_env(&self) -> String {
        format!("{}/{}/{}", self.cluster, self.role, self.environ)
    }
}

fn parse_config_property(value: &str) -> Result<(String, String)> {
    match value.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_owned(), value.trim().to_owned()))
        }
        _ => Err(err_config_property_format(value)),
    }
}

/// Reads the `--verbose` flag of a parsed topology subcommand.
pub fn verbose(matches: &ArgMatches) -> Result<bool> {
    args::flag(matches, VERBOSE)
}
