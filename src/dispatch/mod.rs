//! Command dispatch
//!
//! Combines the orchestration command, the generated compose file and the
//! requested sub-command into one argument vector and runs it.

pub mod action;
pub mod runner;

pub use action::ComposeAction;
pub use runner::{ProcessRunner, SystemRunner, INTERNAL_ERROR_EXIT_CODE};

use crate::compose::ComposeCommand;
use crate::error::Result;
use std::path::Path;

/// Run the orchestration tool and return its exit code
///
/// The tool sees `leading_args ++ ["-f", file] ++ sub_args`.
pub async fn dispatch<R: ProcessRunner>(
    runner: &R,
    command: &ComposeCommand,
    compose_file: &Path,
    sub_args: &[String],
) -> Result<i32> {
    let mut args = command.leading_args().to_vec();
    args.push("-f".to_string());
    args.push(compose_file.to_string_lossy().into_owned());
    args.extend(sub_args.iter().cloned());

    runner.run(command.program(), &args).await
}
