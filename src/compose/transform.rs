//! Configuration to compose document transform
//!
//! Reconciles the services a deployment asks for with the images the
//! service registry knows about:
//!
//! - control-plane keys (`configs`, `octoctl`, `repos`) are dropped
//! - services with `enabled: false` are dropped
//! - per-service `octocompose` metadata is dropped
//! - services without a registry Docker reference are dropped
//! - `image`, and when provided `command`/`entrypoint`, come from the registry

use super::command::ComposeCommand;
use super::document::{ComposeDocument, ComposeService};
use crate::config::RawConfig;
use crate::error::{OperatorError, Result};
use crate::registry::ServiceRegistry;
use serde_json::Value;
use tracing::{debug, error};

/// Output of [`transform`]
#[derive(Debug, Clone, PartialEq)]
pub struct Transformed {
    /// Validated project identifier
    pub project_id: String,
    /// Document to write
    pub document: ComposeDocument,
    /// Command that will run the document
    pub command: ComposeCommand,
}

/// Transform a raw configuration into a compose document
pub fn transform(raw: RawConfig, registry: &ServiceRegistry) -> Result<Transformed> {
    let command = ComposeCommand::from_settings(raw.octoctl.as_ref());

    let project_id = match raw.project_identifier() {
        Some(id) => validate_project_id(id)?.to_string(),
        None => {
            error!("Project identifier not found");
            return Err(OperatorError::MissingField("name".to_string()));
        }
    };

    let services = raw.services.ok_or_else(|| {
        error!("services not found");
        OperatorError::MissingField("services".to_string())
    })?;

    let mut document = ComposeDocument::new(&project_id);
    document.extra = raw.extra;

    for (name, service) in services {
        if service.is_disabled() {
            debug!(service = %name, "Dropping disabled service");
            continue;
        }

        let Some(docker) = registry.docker(&name) else {
            debug!(service = %name, "Dropping service without a registry image");
            continue;
        };

        let command = match docker.command_override() {
            Some(cmd) => Some(Value::from(cmd.to_vec())),
            None => service.command,
        };
        let entrypoint = match docker.entrypoint_override() {
            Some(ep) => Some(Value::from(ep)),
            None => service.entrypoint,
        };

        document.services.insert(
            name,
            ComposeService {
                enabled: service.enabled,
                image: docker.image_ref(),
                command,
                entrypoint,
                extra: service.extra,
            },
        );
    }

    Ok(Transformed {
        project_id,
        document,
        command,
    })
}

/// Check that a project identifier can name a cache directory
pub fn validate_project_id(id: &str) -> Result<&str> {
    if id.is_empty() {
        error!("Project identifier is empty");
        return Err(OperatorError::MissingField("name".to_string()));
    }

    if id == "." || id == ".." || id.contains('/') || id.contains('\\') || id.contains('\0') {
        error!(project = %id, "Project identifier is not a valid directory name");
        return Err(OperatorError::InvalidProject(id.to_string()));
    }

    Ok(id)
}
