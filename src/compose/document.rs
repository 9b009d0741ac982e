//! Compose output document types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The compose file handed to the orchestration tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeDocument {
    /// Compose project name
    pub name: String,
    /// Services that survived the transform
    #[serde(default)]
    pub services: BTreeMap<String, ComposeService>,
    /// Passthrough top-level keys (networks, volumes, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ComposeDocument {
    /// Create an empty document for a project
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            services: BTreeMap::new(),
            extra: Map::new(),
        }
    }

    /// Render the document as YAML
    pub fn to_yaml(&self) -> crate::error::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// A service entry with its image resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposeService {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Image reference from the service registry
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<Value>,
    /// Compose-native service keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_layout() {
        let mut doc = ComposeDocument::new("demo");
        doc.services.insert(
            "web".to_string(),
            ComposeService {
                enabled: None,
                image: "reg.io/app:1.0".to_string(),
                command: None,
                entrypoint: None,
                extra: Map::new(),
            },
        );

        let yaml = doc.to_yaml().unwrap();
        assert!(yaml.contains("name: demo"));
        assert!(yaml.contains("image: reg.io/app:1.0"));
        assert!(!yaml.contains("command"));
        assert!(!yaml.contains("entrypoint"));
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut doc = ComposeDocument::new("demo");
        doc.extra
            .insert("volumes".to_string(), json!({"data": {"driver": "local"}}));
        let mut extra = Map::new();
        extra.insert("ports".to_string(), json!(["8080:80"]));
        extra.insert("environment".to_string(), json!({"MODE": "prod", "WORKERS": 4}));
        doc.services.insert(
            "web".to_string(),
            ComposeService {
                enabled: Some(true),
                image: "reg.io/app:1.0".to_string(),
                command: Some(json!(["serve", "--verbose"])),
                entrypoint: Some(json!("/entry.sh")),
                extra,
            },
        );

        let yaml = doc.to_yaml().unwrap();
        let parsed: ComposeDocument = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, doc);
    }
}
