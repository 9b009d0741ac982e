//! Typed view of the octocompose configuration document

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Top-level configuration as handed to the operator
///
/// Keys the operator understands are pulled out into fields; everything
/// else is kept in `extra` and reaches the compose file untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawConfig {
    /// Project identifier
    #[serde(default)]
    pub name: Option<String>,
    /// Legacy project identifier key
    #[serde(default, rename = "projectID")]
    pub project_id: Option<String>,
    /// Service definitions keyed by service name
    #[serde(default)]
    pub services: Option<BTreeMap<String, ServiceDefinition>>,
    /// Config file definitions (control plane only)
    #[serde(default)]
    pub configs: Option<Value>,
    /// Operator settings (control plane only)
    #[serde(default)]
    pub octoctl: Option<Value>,
    /// Service registry (control plane only)
    #[serde(default)]
    pub repos: Option<Value>,
    /// Compose-native top-level keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawConfig {
    /// Project identifier, preferring `name` over the legacy `projectID`
    pub fn project_identifier(&self) -> Option<&str> {
        self.name.as_deref().or(self.project_id.as_deref())
    }
}

/// A single service as written by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    /// Only an explicit `false` disables the service
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Operator-internal metadata, never emitted
    #[serde(default)]
    pub octocompose: Option<Value>,
    /// Replaced by the registry image reference
    #[serde(default)]
    pub image: Option<Value>,
    #[serde(default)]
    pub command: Option<Value>,
    #[serde(default)]
    pub entrypoint: Option<Value>,
    /// Compose-native service keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceDefinition {
    /// Whether the service was switched off with `enabled: false`
    pub fn is_disabled(&self) -> bool {
        self.enabled == Some(false)
    }
}
