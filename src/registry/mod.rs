//! Service registry
//!
//! Maps a logical service name to the image it runs. The registry arrives
//! under the `repos` key of the configuration document.

pub mod docker;

pub use docker::DockerReference;

use crate::error::{OperatorError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::error;

/// Registry record for one service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Docker image coordinates; services without one cannot run
    #[serde(default)]
    pub docker: Option<DockerReference>,
}

/// Service registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRegistry {
    #[serde(default)]
    pub services: BTreeMap<String, RegistryEntry>,
}

impl ServiceRegistry {
    /// Build the registry from the `repos` value of a configuration
    ///
    /// An absent value yields an empty registry.
    pub fn from_value(value: Option<&Value>) -> Result<Self> {
        match value {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(value) => Self::deserialize(value).map_err(|e| {
                error!(error = %e, "Error while parsing service registry");
                OperatorError::Parse(format!("Invalid repos: {}", e))
            }),
        }
    }

    /// Add or replace a service entry
    pub fn insert(&mut self, name: &str, docker: Option<DockerReference>) {
        self.services
            .insert(name.to_string(), RegistryEntry { docker });
    }

    /// Docker reference for a service, if registered with one
    pub fn docker(&self, name: &str) -> Option<&DockerReference> {
        self.services.get(name).and_then(|e| e.docker.as_ref())
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry has no services
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
