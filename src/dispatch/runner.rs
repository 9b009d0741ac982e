//! External process execution
//!
//! Runs the orchestration tool with inherited stdio and reports its exit
//! code. While the child runs, SIGINT is absorbed (the terminal already
//! delivered it to the child) and SIGTERM/SIGHUP are forwarded to it.

use crate::error::{OperatorError, Result};
use std::process::{ExitStatus, Stdio};
use tokio::process::{Child, Command};
use tracing::{debug, error};

/// Exit code used when this process fails on its own
pub const INTERNAL_ERROR_EXIT_CODE: i32 = 1;

/// Something that can run a program and report its exit code
#[allow(async_fn_in_trait)]
pub trait ProcessRunner {
    /// Run `program` with `args` to completion
    async fn run(&self, program: &str, args: &[String]) -> Result<i32>;
}

/// Runs programs as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<i32> {
        debug!(command = %program, args = ?args, "Running");

        let mut listeners = SignalListeners::install().map_err(|e| {
            error!(error = %e, "Error while installing signal handlers");
            OperatorError::Command(format!("Failed to install signal handlers: {}", e))
        })?;

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                error!(command = %program, error = %e, "Error while starting command");
                OperatorError::Command(format!("Failed to start {}: {}", program, e))
            })?;

        let status = listeners.wait_for_exit(&mut child).await.map_err(|e| {
            error!(command = %program, error = %e, "Error while waiting for command");
            OperatorError::Command(format!("Failed to wait for {}: {}", program, e))
        })?;

        let code = exit_code(status);
        debug!(command = %program, code, "Command exited");
        Ok(code)
    }
}

/// Signal streams held while a child runs
///
/// Installed before the child is spawned so no signal falls back to the
/// default disposition in between.
#[cfg(unix)]
struct SignalListeners {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
    hangup: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl SignalListeners {
    fn install() -> std::io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
            hangup: signal(SignalKind::hangup())?,
        })
    }

    async fn wait_for_exit(&mut self, child: &mut Child) -> std::io::Result<ExitStatus> {
        loop {
            tokio::select! {
                status = child.wait() => return status,
                _ = self.interrupt.recv() => debug!("Interrupt received, waiting for command to exit"),
                _ = self.terminate.recv() => forward_signal(child, libc::SIGTERM),
                _ = self.hangup.recv() => forward_signal(child, libc::SIGHUP),
            }
        }
    }
}

#[cfg(not(unix))]
struct SignalListeners;

#[cfg(not(unix))]
impl SignalListeners {
    fn install() -> std::io::Result<Self> {
        Ok(Self)
    }

    async fn wait_for_exit(&mut self, child: &mut Child) -> std::io::Result<ExitStatus> {
        child.wait().await
    }
}

#[cfg(unix)]
fn forward_signal(child: &Child, signal: libc::c_int) {
    let Some(pid) = child.id() else {
        return;
    };

    debug!(pid, signal, "Forwarding signal to command");
    let result = unsafe { libc::kill(pid as libc::pid_t, signal) };
    if result < 0 {
        tracing::warn!(pid, signal, error = %std::io::Error::last_os_error(), "Failed to forward signal");
    }
}

/// Map a child's exit status to this process's exit code
///
/// Signal deaths follow the shell convention of `128 + signal`.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    INTERNAL_ERROR_EXIT_CODE
}
