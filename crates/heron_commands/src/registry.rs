use crate::helper;
use anyhow::{anyhow, Error, Result};
use clap::Command;
use std::mem;
use tracing::debug;

pub fn err_duplicate_parser(name: &str) -> Error {
    anyhow!("a parser for subcommand {name} is already registered")
}

/// Collects the parser entries of every subcommand during startup. Once all
/// subcommands are registered the registry is frozen into the root parser.
pub struct Registry {
    root: Command,
}

impl Registry {
    pub fn new(root: Command) -> Self {
        Self { root }
    }

    pub fn register(&mut self, parser: Command) -> Result<()> {
        let name = parser.get_name().to_owned();
        if self.parser(&name).is_some() {
            return Err(err_duplicate_parser(&name));
        }

        debug!("registering parser for subcommand {name}");
        let root = mem::take(&mut self.root);
        self.root = root.subcommand(helper::add_unknown_args(parser));
        Ok(())
    }

    pub fn parser(&self, name: &str) -> Option<&Command> {
        self.root.find_subcommand(name)
    }

    pub fn freeze(self) -> Command {
        self.root
    }
}
