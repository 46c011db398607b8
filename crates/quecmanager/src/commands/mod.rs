//! Command dispatch: bridges CLI args -> core operations -> output formatting.

pub mod bytes;
pub mod config_cmd;
pub mod distance;
pub mod signal;
pub mod usage;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a command to the appropriate handler.
pub async fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Signal(args) => signal::handle(&args, global),
        Command::Distance(args) => distance::handle(&args, global).await,
        Command::Bytes(args) => bytes::handle(&args, global),
        Command::Usage(args) => usage::handle(args, global).await,
        Command::Config(args) => config_cmd::handle(args, global),
        // Completions are handled before dispatch
        Command::Completions(_) => Ok(()),
    }
}
