//! Docker image coordinates for a registered service

use serde::{Deserialize, Serialize};

/// Where a service's container image lives and how it is started
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockerReference {
    /// Registry host (e.g., `ghcr.io/octocompose`)
    #[serde(default)]
    pub registry: String,
    /// Image name
    #[serde(default)]
    pub image: String,
    /// Image tag
    #[serde(default)]
    pub tag: String,
    /// Command override
    #[serde(default)]
    pub command: Vec<String>,
    /// Entrypoint override
    #[serde(default)]
    pub entrypoint: String,
}

impl DockerReference {
    /// Full image reference, `<registry>/<image>:<tag>`
    ///
    /// Components are joined verbatim; empty parts are not collapsed.
    pub fn image_ref(&self) -> String {
        format!("{}/{}:{}", self.registry, self.image, self.tag)
    }

    /// Command to force onto the service, if any
    pub fn command_override(&self) -> Option<&[String]> {
        if self.command.is_empty() {
            None
        } else {
            Some(&self.command)
        }
    }

    /// Entrypoint to force onto the service, if any
    pub fn entrypoint_override(&self) -> Option<&str> {
        if self.entrypoint.is_empty() {
            None
        } else {
            Some(&self.entrypoint)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_ref() {
        let docker = DockerReference {
            registry: "reg.io".to_string(),
            image: "app".to_string(),
            tag: "1.0".to_string(),
            ..Default::default()
        };
        assert_eq!(docker.image_ref(), "reg.io/app:1.0");
    }

    #[test]
    fn test_image_ref_keeps_empty_components() {
        let docker = DockerReference {
            image: "app".to_string(),
            ..Default::default()
        };
        assert_eq!(docker.image_ref(), "/app:");
    }

    #[test]
    fn test_empty_overrides_are_none() {
        let docker = DockerReference::default();
        assert!(docker.command_override().is_none());
        assert!(docker.entrypoint_override().is_none());

        let docker = DockerReference {
            command: vec!["serve".to_string(), "--port=80".to_string()],
            entrypoint: "/bin/app".to_string(),
            ..Default::default()
        };
        assert_eq!(
            docker.command_override(),
            Some(&["serve".to_string(), "--port=80".to_string()][..])
        );
        assert_eq!(docker.entrypoint_override(), Some("/bin/app"));
    }
}
