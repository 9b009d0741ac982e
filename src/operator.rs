//! Operator pipeline
//!
//! read → transform → write produces an [`Invocation`], which is then
//! dispatched once per CLI call.

use crate::compose::{transform, ComposeCommand, ComposeWriter};
use crate::config::{ConfigReader, ConfigSource, RawConfig};
use crate::dispatch::{self, ComposeAction, ProcessRunner};
use crate::error::Result;
use crate::registry::ServiceRegistry;
use std::path::PathBuf;

/// Everything needed to run the orchestration tool for one project
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub project_id: String,
    pub compose_command: ComposeCommand,
    pub compose_file: PathBuf,
}

impl Invocation {
    /// Read, transform and write the configuration from `source`
    pub fn prepare(source: &ConfigSource, writer: &ComposeWriter) -> Result<Self> {
        let raw = ConfigReader::read(source)?;
        Self::from_config(raw, writer)
    }

    /// Transform and write an already parsed configuration
    pub fn from_config(raw: RawConfig, writer: &ComposeWriter) -> Result<Self> {
        let registry = ServiceRegistry::from_value(raw.repos.as_ref())?;
        if registry.is_empty() {
            tracing::warn!("Service registry is empty, no services will be started");
        }

        let transformed = transform(raw, &registry)?;
        let compose_file = writer.write(&transformed.document, &transformed.project_id)?;

        Ok(Self {
            project_id: transformed.project_id,
            compose_command: transformed.command,
            compose_file,
        })
    }

    /// Run an action and return the tool's exit code
    pub async fn run<R: ProcessRunner>(&self, action: &ComposeAction, runner: &R) -> Result<i32> {
        dispatch::dispatch(runner, &self.compose_command, &self.compose_file, &action.args()).await
    }
}
