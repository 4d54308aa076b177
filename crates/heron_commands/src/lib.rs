pub mod activate;
pub mod args;
pub mod cli;
pub mod command;
pub mod deactivate;
pub mod executor;
pub mod helper;
pub mod kill;
pub mod registry;
pub mod restart;

pub use cli::*;
pub use command::*;
